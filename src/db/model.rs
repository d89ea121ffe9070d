//! Database model types for Diesel ORM.

use diesel::prelude::*;
use rust_decimal::Decimal;

use super::schema::{departments, employees, roles};

/// Database row for a department.
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = departments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct DepartmentRow {
    pub id: i32,
    pub name: String,
}

/// Database row for a department (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = departments)]
pub struct NewDepartmentRow {
    pub name: String,
}

/// Database row for a role.
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = roles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct RoleRow {
    pub id: i32,
    pub title: String,
    pub salary: Decimal,
    pub department_id: i32,
}

/// Database row for a role (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = roles)]
pub struct NewRoleRow {
    pub title: String,
    pub salary: Decimal,
    pub department_id: i32,
}

/// Database row for an employee.
#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = employees)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct EmployeeRow {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub role_id: i32,
    pub manager_id: Option<i32>,
}

/// Database row for an employee (insertable).
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = employees)]
pub struct NewEmployeeRow {
    pub first_name: String,
    pub last_name: String,
    pub role_id: i32,
    pub manager_id: Option<i32>,
}

impl EmployeeRow {
    /// Display name in "First Last" form.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
