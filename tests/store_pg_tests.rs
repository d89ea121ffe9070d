//! Integration tests against a live Postgres database.
//!
//! Run with:
//! `TEST_DATABASE_URL=postgres://... cargo test --features pg-tests`
//!
//! Each test runs inside a test transaction that is never committed, so the
//! target database is left untouched. Statements that are expected to fail
//! are wrapped in a savepoint to keep the surrounding transaction usable.

#![cfg(feature = "pg-tests")]

use diesel::prelude::*;
use rust_decimal_macros::dec;
use staffdesk::db::model::{NewEmployeeRow, NewRoleRow};
use staffdesk::db::{self, DbConnection};
use staffdesk::store;

fn test_connection() -> DbConnection {
    let url = std::env::var("TEST_DATABASE_URL")
        .expect("TEST_DATABASE_URL must be set for pg-tests");
    let pool = db::create_pool(&url, 2).expect("create pool");
    db::run_migrations(&pool).expect("run migrations");
    let mut conn = db::acquire(&pool).expect("acquire connection");
    conn.begin_test_transaction()
        .expect("begin test transaction");
    conn
}

fn savepoint(conn: &mut PgConnection) {
    diesel::sql_query("SAVEPOINT attempt")
        .execute(conn)
        .expect("set savepoint");
}

fn rollback_to_savepoint(conn: &mut PgConnection) {
    diesel::sql_query("ROLLBACK TO SAVEPOINT attempt")
        .execute(conn)
        .expect("roll back to savepoint");
}

fn seed_role(conn: &mut PgConnection, department_id: i32, title: &str) -> i32 {
    store::insert_role(
        conn,
        NewRoleRow {
            title: title.to_string(),
            salary: dec!(85000.00),
            department_id,
        },
    )
    .expect("insert role")
    .id
}

fn seed_employee(
    conn: &mut PgConnection,
    first: &str,
    last: &str,
    role_id: i32,
    manager_id: Option<i32>,
) -> i32 {
    store::insert_employee(
        conn,
        NewEmployeeRow {
            first_name: first.to_string(),
            last_name: last.to_string(),
            role_id,
            manager_id,
        },
    )
    .expect("insert employee")
    .id
}

#[test]
fn role_insert_with_unknown_department_fails_and_keeps_table() {
    let mut conn = test_connection();

    let before = store::list_roles(&mut conn).expect("list roles").len();

    savepoint(&mut conn);
    let result = store::insert_role(
        &mut conn,
        NewRoleRow {
            title: "Ghost Role".to_string(),
            salary: dec!(50000.00),
            department_id: i32::MAX,
        },
    );
    assert!(result.is_err(), "foreign key violation expected");
    rollback_to_savepoint(&mut conn);

    let after = store::list_roles(&mut conn).expect("list roles").len();
    assert_eq!(before, after);
}

#[test]
fn employee_listing_orders_by_department_id() {
    let mut conn = test_connection();

    let first_dept = store::insert_department(&mut conn, "Alpha".to_string())
        .expect("insert department");
    let second_dept = store::insert_department(&mut conn, "Beta".to_string())
        .expect("insert department");
    assert!(first_dept.id < second_dept.id);

    let first_role = seed_role(&mut conn, first_dept.id, "Alpha Analyst");
    let second_role = seed_role(&mut conn, second_dept.id, "Beta Analyst");

    // Insert in reverse department order; the listing must reorder them.
    seed_employee(&mut conn, "Bea", "Second", second_role, None);
    seed_employee(&mut conn, "Al", "First", first_role, None);

    let listings = store::list_employees(&mut conn).expect("list employees");
    let positions: Vec<usize> = ["Alpha", "Beta"]
        .iter()
        .map(|dept| {
            listings
                .iter()
                .position(|l| l.department == *dept)
                .expect("department present in listing")
        })
        .collect();
    assert!(positions[0] < positions[1]);
}

#[test]
fn department_without_employees_is_absent_from_listing() {
    let mut conn = test_connection();

    store::insert_department(&mut conn, "Deserted".to_string()).expect("insert department");

    let listings = store::list_employees(&mut conn).expect("list employees");
    assert!(listings.iter().all(|l| l.department != "Deserted"));
}

#[test]
fn manager_candidates_follow_title_heuristic() {
    let mut conn = test_connection();

    let dept = store::insert_department(&mut conn, "Engineering".to_string())
        .expect("insert department");
    let manager_role = seed_role(&mut conn, dept.id, "Engineering Manager");
    let lead_role = seed_role(&mut conn, dept.id, "Team Lead");
    let engineer_role = seed_role(&mut conn, dept.id, "Engineer");

    seed_employee(&mut conn, "Mona", "Manager", manager_role, None);
    seed_employee(&mut conn, "Lee", "Lead", lead_role, None);
    seed_employee(&mut conn, "Eve", "Engineer", engineer_role, None);

    let candidates = store::list_manager_candidates(&mut conn).expect("list candidates");
    let names: Vec<&str> = candidates.iter().map(|c| c.name.as_str()).collect();
    assert!(names.contains(&"Mona Manager"));
    assert!(names.contains(&"Lee Lead"));
    assert!(!names.contains(&"Eve Engineer"));
}

#[test]
fn update_role_to_unknown_role_fails_and_keeps_previous() {
    let mut conn = test_connection();

    let dept = store::insert_department(&mut conn, "Sales".to_string())
        .expect("insert department");
    let role = seed_role(&mut conn, dept.id, "Account Executive");
    let employee = seed_employee(&mut conn, "Sam", "Seller", role, None);

    savepoint(&mut conn);
    let result = store::update_employee_role(&mut conn, employee, i32::MAX);
    assert!(result.is_err(), "foreign key violation expected");
    rollback_to_savepoint(&mut conn);

    let rows = store::list_employee_rows(&mut conn).expect("list employees");
    let row = rows
        .iter()
        .find(|e| e.id == employee)
        .expect("employee still present");
    assert_eq!(row.role_id, role);
}

#[test]
fn update_role_moves_employee() {
    let mut conn = test_connection();

    let dept = store::insert_department(&mut conn, "Finance".to_string())
        .expect("insert department");
    let old_role = seed_role(&mut conn, dept.id, "Accountant");
    let new_role = seed_role(&mut conn, dept.id, "Controller");
    let employee = seed_employee(&mut conn, "Fay", "Numbers", old_role, None);

    let updated = store::update_employee_role(&mut conn, employee, new_role)
        .expect("update role");
    assert_eq!(updated, 1);

    let rows = store::list_employee_rows(&mut conn).expect("list employees");
    let row = rows
        .iter()
        .find(|e| e.id == employee)
        .expect("employee still present");
    assert_eq!(row.role_id, new_role);
}

#[test]
fn listing_shows_manager_name_or_blank() {
    let mut conn = test_connection();

    let dept = store::insert_department(&mut conn, "Support".to_string())
        .expect("insert department");
    let manager_role = seed_role(&mut conn, dept.id, "Support Manager");
    let agent_role = seed_role(&mut conn, dept.id, "Support Agent");

    let boss = seed_employee(&mut conn, "Mia", "Boss", manager_role, None);
    seed_employee(&mut conn, "Rey", "Agent", agent_role, Some(boss));

    let listings = store::list_employees(&mut conn).expect("list employees");
    let boss_row = listings
        .iter()
        .find(|l| l.employee == "Mia Boss")
        .expect("boss listed");
    let agent_row = listings
        .iter()
        .find(|l| l.employee == "Rey Agent")
        .expect("agent listed");

    assert_eq!(boss_row.manager, None);
    assert_eq!(agent_row.manager.as_deref(), Some("Mia Boss"));
}

#[test]
fn salary_round_trips_as_exact_decimal() {
    let mut conn = test_connection();

    let dept = store::insert_department(&mut conn, "Data".to_string())
        .expect("insert department");
    let role = store::insert_role(
        &mut conn,
        NewRoleRow {
            title: "Data Scientist".to_string(),
            salary: dec!(123456.78),
            department_id: dept.id,
        },
    )
    .expect("insert role");

    let roles = store::list_roles(&mut conn).expect("list roles");
    let stored = roles
        .iter()
        .find(|r| r.id == role.id)
        .expect("role present");
    assert_eq!(stored.salary, dec!(123456.78));
}
