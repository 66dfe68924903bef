//! Backend test support utilities
//!
//! This crate provides utilities specifically for backend testing, including
//! in-memory database setup, error body assertions, unique test data and
//! unified logging initialization.

pub mod db;
pub mod error_body;
pub mod logging;
pub mod unique_helpers;
