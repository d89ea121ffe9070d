//! Staffdesk - interactive employee, role, and department tracking.
//!
//! This crate drives a menu-based terminal workflow over a Postgres
//! database: view and add departments, roles, and employees, and move an
//! employee to a new role. Each menu action borrows one pooled connection,
//! runs parameter-bound queries through Diesel, and prints the results as a
//! table before handing control back to the menu.
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from TOML files with env overrides
//! - [`cli`] - The menu loop, per-action prompt handlers, and output helpers
//! - [`db`] - Connection pool, embedded migrations, schema, and row models
//! - [`domain`] - Validation and normalization rules for prompted input
//! - [`error`] - Error types for the crate
//! - [`store`] - Data access routines over a borrowed connection

pub mod cli;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod store;
