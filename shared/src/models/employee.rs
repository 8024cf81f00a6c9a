//! Employee Model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An employee record as served by the upstream directory.
///
/// The upstream serializes fields with an `employee_` prefix
/// (`employee_name`, `employee_salary`, ...); the aliases accept either
/// spelling. Serialization always emits the plain names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: Uuid,

    #[serde(alias = "employee_name")]
    pub name: String,

    #[serde(alias = "employee_salary")]
    pub salary: u32,

    #[serde(alias = "employee_age")]
    pub age: u32,

    #[serde(alias = "employee_title")]
    pub title: String,

    #[serde(alias = "employee_email")]
    pub email: String,
}

/// Create employee payload
///
/// Caller-supplied, no identifier; the upstream assigns one at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeCreationInput {
    pub name: String,
    pub salary: u32,
    pub age: u32,
    pub title: String,
    pub email: String,
}

/// Delete employee payload
///
/// The only shape the upstream deletion endpoint accepts. Built from a
/// previously fetched [`Employee`], never supplied by callers directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteEmployeeInput {
    pub name: String,
}

impl DeleteEmployeeInput {
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
        }
    }
}
