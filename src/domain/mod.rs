//! Domain rules shared by the prompt layer and the data access layer.

pub mod validate;
