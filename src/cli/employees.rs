//! Handlers for the employee menu actions.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use rust_decimal::Decimal;
use tabled::Tabled;

use crate::cli::output;
use crate::db::model::{EmployeeRow, NewEmployeeRow};
use crate::db::{self, DbPool};
use crate::domain::validate;
use crate::error::Result;
use crate::store;

#[derive(Tabled)]
struct EmployeeListingRow {
    #[tabled(rename = "Id")]
    id: i32,
    #[tabled(rename = "Employee")]
    employee: String,
    #[tabled(rename = "Manager")]
    manager: String,
    #[tabled(rename = "Job Title")]
    title: String,
    #[tabled(rename = "Department")]
    department: String,
    #[tabled(rename = "Salary")]
    salary: Decimal,
}

#[derive(Tabled)]
struct EmployeeRecordRow {
    #[tabled(rename = "Id")]
    id: i32,
    #[tabled(rename = "First Name")]
    first_name: String,
    #[tabled(rename = "Last Name")]
    last_name: String,
    #[tabled(rename = "Role Id")]
    role_id: i32,
    #[tabled(rename = "Manager Id")]
    manager_id: String,
}

impl From<EmployeeRow> for EmployeeRecordRow {
    fn from(row: EmployeeRow) -> Self {
        Self {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            role_id: row.role_id,
            manager_id: row
                .manager_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
        }
    }
}

/// View all employees with role, department, salary, and manager columns.
pub fn view_all(pool: &DbPool) -> Result<()> {
    output::note("\nViewing all employees...");
    let mut conn = db::acquire(pool)?;

    let listings = store::list_employees(&mut conn)?;
    let rows: Vec<EmployeeListingRow> = listings
        .into_iter()
        .map(|l| EmployeeListingRow {
            id: l.id,
            employee: l.employee,
            manager: l.manager.unwrap_or_default(),
            title: l.title,
            department: l.department,
            salary: l.salary,
        })
        .collect();
    output::table(rows);
    Ok(())
}

/// Prompt for a new employee and insert it.
pub fn add(pool: &DbPool) -> Result<()> {
    output::note("\nAdding an employee...");
    let theme = ColorfulTheme::default();
    let mut conn = db::acquire(pool)?;

    let roles = store::list_roles(&mut conn)?;
    if roles.is_empty() {
        output::warn("No roles exist yet. Add a role first.");
        return Ok(());
    }
    let managers = store::list_manager_candidates(&mut conn)?;

    let first_name: String = Input::with_theme(&theme)
        .with_prompt("Enter the employee's first name")
        .validate_with(|input: &String| validate::validate_name(input, "first name"))
        .interact_text()?;

    let last_name: String = Input::with_theme(&theme)
        .with_prompt("Enter the employee's last name")
        .validate_with(|input: &String| validate::validate_name(input, "last name"))
        .interact_text()?;

    let role_labels: Vec<&str> = roles.iter().map(|r| r.title.as_str()).collect();
    let role_index = Select::with_theme(&theme)
        .with_prompt("Select the employee's role")
        .items(&role_labels)
        .default(0)
        .interact()?;
    let role_id = roles[role_index].id;

    // manager_id is nullable, so "None" is always on offer; when nobody
    // holds a manager-like title the prompt is skipped entirely.
    let manager_id = if managers.is_empty() {
        None
    } else {
        let mut manager_labels: Vec<String> = managers
            .iter()
            .map(|m| format!("{} --- {}", m.name, m.title))
            .collect();
        manager_labels.push("None".to_string());
        let index = Select::with_theme(&theme)
            .with_prompt("Select the employee's manager")
            .items(&manager_labels)
            .default(0)
            .interact()?;
        if index == managers.len() {
            None
        } else {
            Some(managers[index].id)
        }
    };

    store::insert_employee(
        &mut conn,
        NewEmployeeRow {
            first_name: validate::capitalize(&first_name),
            last_name: validate::capitalize(&last_name),
            role_id,
            manager_id,
        },
    )?;

    let rows: Vec<EmployeeRecordRow> = store::list_employee_rows(&mut conn)?
        .into_iter()
        .map(EmployeeRecordRow::from)
        .collect();
    output::table(rows);
    Ok(())
}

/// Prompt for an employee and a new role, then update the assignment.
pub fn update_role(pool: &DbPool) -> Result<()> {
    output::note("\nUpdating an employee role...");
    let theme = ColorfulTheme::default();
    let mut conn = db::acquire(pool)?;

    let employees = store::list_employee_rows(&mut conn)?;
    if employees.is_empty() {
        output::warn("No employees exist yet. Add an employee first.");
        return Ok(());
    }
    let roles = store::list_roles(&mut conn)?;
    if roles.is_empty() {
        output::warn("No roles exist yet. Add a role first.");
        return Ok(());
    }

    let employee_labels: Vec<String> = employees
        .iter()
        .map(|e| format!("{} --- Current Role: {}", e.full_name(), e.role_id))
        .collect();
    let employee_index = Select::with_theme(&theme)
        .with_prompt("Select the employee whose role you would like to update")
        .items(&employee_labels)
        .default(0)
        .interact()?;
    let employee_id = employees[employee_index].id;

    let role_labels: Vec<String> = roles
        .iter()
        .map(|r| format!("Role title: {} --- Role Id: {}", r.title, r.id))
        .collect();
    let role_index = Select::with_theme(&theme)
        .with_prompt("Select the employee's new role")
        .items(&role_labels)
        .default(0)
        .interact()?;
    let role_id = roles[role_index].id;

    store::update_employee_role(&mut conn, employee_id, role_id)?;

    let rows: Vec<EmployeeRecordRow> = store::list_employee_rows(&mut conn)?
        .into_iter()
        .map(EmployeeRecordRow::from)
        .collect();
    output::table(rows);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabled::Table;

    #[test]
    fn record_row_blanks_missing_manager() {
        let row = EmployeeRecordRow::from(EmployeeRow {
            id: 1,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            role_id: 2,
            manager_id: None,
        });
        assert_eq!(row.manager_id, "");
    }

    #[test]
    fn listing_table_renders_headers() {
        let rows = vec![EmployeeListingRow {
            id: 1,
            employee: "Ada Lovelace".to_string(),
            manager: String::new(),
            title: "Engineering Manager".to_string(),
            department: "Engineering".to_string(),
            salary: rust_decimal_macros::dec!(120000.00),
        }];
        let rendered = Table::new(rows).to_string();
        assert!(rendered.contains("Employee"));
        assert!(rendered.contains("Job Title"));
        assert!(rendered.contains("120000.00"));
    }
}
