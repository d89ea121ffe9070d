//! The interactive menu loop.
//!
//! Renders the eight-choice menu, dispatches the selected action, and
//! re-renders afterwards. Action failures are logged and reported but never
//! end the loop; only Quit (or a failure of the menu prompt itself, e.g.
//! stdin closing) leaves it.

use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;
use tracing::error;

use crate::cli::{departments, employees, output, roles};
use crate::db::DbPool;
use crate::error::Result;

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    ViewEmployees,
    AddEmployee,
    UpdateEmployeeRole,
    ViewRoles,
    AddRole,
    ViewDepartments,
    AddDepartment,
    Quit,
}

impl MenuAction {
    /// Menu entries in display order.
    pub const ALL: [MenuAction; 8] = [
        MenuAction::ViewEmployees,
        MenuAction::AddEmployee,
        MenuAction::UpdateEmployeeRole,
        MenuAction::ViewRoles,
        MenuAction::AddRole,
        MenuAction::ViewDepartments,
        MenuAction::AddDepartment,
        MenuAction::Quit,
    ];

    /// Label shown in the menu.
    pub fn label(self) -> &'static str {
        match self {
            MenuAction::ViewEmployees => "View All Employees",
            MenuAction::AddEmployee => "Add Employee",
            MenuAction::UpdateEmployeeRole => "Update Employee Role",
            MenuAction::ViewRoles => "View All Roles",
            MenuAction::AddRole => "Add Role",
            MenuAction::ViewDepartments => "View All Departments",
            MenuAction::AddDepartment => "Add Department",
            MenuAction::Quit => "Quit",
        }
    }
}

/// Run the menu loop until the user quits.
pub fn run(pool: &DbPool) -> Result<()> {
    let theme = ColorfulTheme::default();
    let labels: Vec<&str> = MenuAction::ALL.iter().map(|a| a.label()).collect();

    loop {
        println!();
        let selection = Select::with_theme(&theme)
            .with_prompt("What would you like to do?")
            .items(&labels)
            .default(0)
            .interact()?;
        let action = MenuAction::ALL[selection];

        if action == MenuAction::Quit {
            output::note("Goodbye!");
            return Ok(());
        }

        if let Err(err) = dispatch(action, pool) {
            error!(error = %err, action = action.label(), "menu action failed");
            output::error(&format!("An error occurred: {err}"));
        }
    }
}

fn dispatch(action: MenuAction, pool: &DbPool) -> Result<()> {
    match action {
        MenuAction::ViewEmployees => employees::view_all(pool),
        MenuAction::AddEmployee => employees::add(pool),
        MenuAction::UpdateEmployeeRole => employees::update_role(pool),
        MenuAction::ViewRoles => roles::view_all(pool),
        MenuAction::AddRole => roles::add(pool),
        MenuAction::ViewDepartments => departments::view_all(pool),
        MenuAction::AddDepartment => departments::add(pool),
        MenuAction::Quit => Ok(()),
    }
}
