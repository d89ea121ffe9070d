//! Data access routines.
//!
//! Each routine runs a single statement on a connection borrowed by the
//! caller, binding all values as parameters. Diesel errors are mapped at the
//! call site so callers only see crate errors.

use diesel::prelude::*;
use rust_decimal::Decimal;

use crate::db::model::{
    DepartmentRow, EmployeeRow, NewDepartmentRow, NewEmployeeRow, NewRoleRow, RoleRow,
};
use crate::db::schema::{departments, employees, roles};
use crate::error::{Error, Result};

/// One row of the full employee listing.
#[derive(Debug, Clone)]
pub struct EmployeeListing {
    pub id: i32,
    pub employee: String,
    pub manager: Option<String>,
    pub title: String,
    pub department: String,
    pub salary: Decimal,
}

/// An employee eligible to be picked as a manager.
#[derive(Debug, Clone)]
pub struct ManagerCandidate {
    pub id: i32,
    pub name: String,
    pub title: String,
}

/// List all employees with role, department, and manager names, ordered by
/// department id ascending.
///
/// Employees join their role and department (inner joins) and their manager
/// through a self-join alias (left join, so unmanaged employees still show).
pub fn list_employees(conn: &mut PgConnection) -> Result<Vec<EmployeeListing>> {
    let managers = diesel::alias!(employees as managers);

    type Row = (
        i32,
        String,
        String,
        String,
        Decimal,
        String,
        Option<String>,
        Option<String>,
    );

    let rows: Vec<Row> = employees::table
        .inner_join(roles::table.inner_join(departments::table))
        .left_join(
            managers.on(employees::manager_id.eq(managers.field(employees::id).nullable())),
        )
        .order(departments::id.asc())
        .select((
            employees::id,
            employees::first_name,
            employees::last_name,
            roles::title,
            roles::salary,
            departments::name,
            managers.field(employees::first_name).nullable(),
            managers.field(employees::last_name).nullable(),
        ))
        .load(conn)
        .map_err(|e| Error::Database(e.to_string()))?;

    Ok(rows
        .into_iter()
        .map(
            |(id, first, last, title, salary, department, mgr_first, mgr_last)| EmployeeListing {
                id,
                employee: format!("{first} {last}"),
                manager: match (mgr_first, mgr_last) {
                    (Some(f), Some(l)) => Some(format!("{f} {l}")),
                    _ => None,
                },
                title,
                department,
                salary,
            },
        )
        .collect())
}

/// List raw employee rows ordered by id.
pub fn list_employee_rows(conn: &mut PgConnection) -> Result<Vec<EmployeeRow>> {
    employees::table
        .order(employees::id.asc())
        .load(conn)
        .map_err(|e| Error::Database(e.to_string()))
}

/// Employees whose role title marks them as manager-like ("anager"/"ead").
pub fn list_manager_candidates(conn: &mut PgConnection) -> Result<Vec<ManagerCandidate>> {
    let rows: Vec<(i32, String, String, String)> = employees::table
        .inner_join(roles::table)
        .filter(roles::title.like("%anager%").or(roles::title.like("%ead%")))
        .order(employees::id.asc())
        .select((
            employees::id,
            employees::first_name,
            employees::last_name,
            roles::title,
        ))
        .load(conn)
        .map_err(|e| Error::Database(e.to_string()))?;

    Ok(rows
        .into_iter()
        .map(|(id, first, last, title)| ManagerCandidate {
            id,
            name: format!("{first} {last}"),
            title,
        })
        .collect())
}

/// Insert a new employee and return the stored row.
pub fn insert_employee(conn: &mut PgConnection, new: NewEmployeeRow) -> Result<EmployeeRow> {
    diesel::insert_into(employees::table)
        .values(&new)
        .get_result(conn)
        .map_err(|e| Error::Database(e.to_string()))
}

/// Point an employee at a new role. Returns the number of updated rows.
pub fn update_employee_role(
    conn: &mut PgConnection,
    employee_id: i32,
    role_id: i32,
) -> Result<usize> {
    diesel::update(employees::table.find(employee_id))
        .set(employees::role_id.eq(role_id))
        .execute(conn)
        .map_err(|e| Error::Database(e.to_string()))
}

/// List all roles ordered by id.
pub fn list_roles(conn: &mut PgConnection) -> Result<Vec<RoleRow>> {
    roles::table
        .order(roles::id.asc())
        .load(conn)
        .map_err(|e| Error::Database(e.to_string()))
}

/// Insert a new role and return the stored row.
pub fn insert_role(conn: &mut PgConnection, new: NewRoleRow) -> Result<RoleRow> {
    diesel::insert_into(roles::table)
        .values(&new)
        .get_result(conn)
        .map_err(|e| Error::Database(e.to_string()))
}

/// List all departments ordered by id.
pub fn list_departments(conn: &mut PgConnection) -> Result<Vec<DepartmentRow>> {
    departments::table
        .order(departments::id.asc())
        .load(conn)
        .map_err(|e| Error::Database(e.to_string()))
}

/// Insert a new department and return the stored row.
pub fn insert_department(conn: &mut PgConnection, name: String) -> Result<DepartmentRow> {
    diesel::insert_into(departments::table)
        .values(&NewDepartmentRow { name })
        .get_result(conn)
        .map_err(|e| Error::Database(e.to_string()))
}
