//! Business services

pub mod employee;

pub use employee::EmployeeService;
