//! Data models for the employee backend.

mod employee;

pub use employee::*;
