//! Handlers for the department menu actions.

use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;
use tabled::Tabled;

use crate::cli::output;
use crate::db::model::DepartmentRow;
use crate::db::{self, DbPool};
use crate::domain::validate;
use crate::error::Result;
use crate::store;

#[derive(Tabled)]
struct DepartmentTableRow {
    #[tabled(rename = "Id")]
    id: i32,
    #[tabled(rename = "Name")]
    name: String,
}

impl From<DepartmentRow> for DepartmentTableRow {
    fn from(row: DepartmentRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
        }
    }
}

/// View all departments.
pub fn view_all(pool: &DbPool) -> Result<()> {
    output::note("\nViewing all departments...");
    let mut conn = db::acquire(pool)?;

    let departments = store::list_departments(&mut conn)?;
    let rows: Vec<DepartmentTableRow> = departments
        .into_iter()
        .map(DepartmentTableRow::from)
        .collect();
    output::table(rows);
    Ok(())
}

/// Prompt for a new department and insert it.
pub fn add(pool: &DbPool) -> Result<()> {
    output::note("\nAdding a department...");
    let theme = ColorfulTheme::default();
    let mut conn = db::acquire(pool)?;

    let current = store::list_departments(&mut conn)?;
    output::note("Here are the current departments in the database:");
    let rows: Vec<DepartmentTableRow> = current.into_iter().map(DepartmentTableRow::from).collect();
    output::table(rows);

    let name: String = Input::with_theme(&theme)
        .with_prompt("Enter the name of the department")
        .validate_with(|input: &String| validate::validate_name(input, "department name"))
        .interact_text()?;

    let name = validate::capitalize(&name);
    store::insert_department(&mut conn, name.clone())?;

    output::ok(&format!("Department '{name}' added successfully."));
    Ok(())
}
