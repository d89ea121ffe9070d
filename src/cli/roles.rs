//! Handlers for the role menu actions.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use rust_decimal::Decimal;
use tabled::Tabled;

use crate::cli::output;
use crate::db::model::{NewRoleRow, RoleRow};
use crate::db::{self, DbPool};
use crate::domain::validate;
use crate::error::Result;
use crate::store;

#[derive(Tabled)]
struct RoleTableRow {
    #[tabled(rename = "Id")]
    id: i32,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Salary")]
    salary: Decimal,
    #[tabled(rename = "Department Id")]
    department_id: i32,
}

impl From<RoleRow> for RoleTableRow {
    fn from(row: RoleRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            salary: row.salary,
            department_id: row.department_id,
        }
    }
}

/// View all roles.
pub fn view_all(pool: &DbPool) -> Result<()> {
    output::note("\nViewing all roles...");
    let mut conn = db::acquire(pool)?;

    let roles = store::list_roles(&mut conn)?;
    if roles.is_empty() {
        output::note("No roles found.");
        return Ok(());
    }
    let rows: Vec<RoleTableRow> = roles.into_iter().map(RoleTableRow::from).collect();
    output::table(rows);
    Ok(())
}

/// Prompt for a new role under an existing department and insert it.
pub fn add(pool: &DbPool) -> Result<()> {
    output::note("\nAdding a new role to an existing department...");
    output::note("To add a new role, you must first select a department.");
    output::note("If the department does not exist, add it first.");
    let theme = ColorfulTheme::default();
    let mut conn = db::acquire(pool)?;

    let departments = store::list_departments(&mut conn)?;
    if departments.is_empty() {
        output::warn("No departments exist yet. Add a department first.");
        return Ok(());
    }

    let department_labels: Vec<&str> = departments.iter().map(|d| d.name.as_str()).collect();
    let department_index = Select::with_theme(&theme)
        .with_prompt("Select the department for this role")
        .items(&department_labels)
        .default(0)
        .interact()?;
    let department_id = departments[department_index].id;

    let title: String = Input::with_theme(&theme)
        .with_prompt("Enter a title for the new role")
        .validate_with(|input: &String| validate::validate_title(input))
        .interact_text()?;

    let salary_input: String = Input::with_theme(&theme)
        .with_prompt("Enter the annual salary for the new role")
        .validate_with(|input: &String| validate::parse_salary(input).map(|_| ()))
        .interact_text()?;
    let salary = validate::parse_salary(&salary_input)?;

    let title = validate::capitalize(&title);
    store::insert_role(
        &mut conn,
        NewRoleRow {
            title: title.clone(),
            salary,
            department_id,
        },
    )?;

    output::ok(&format!("Role '{title}' added successfully."));
    Ok(())
}
