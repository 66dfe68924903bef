//! Error types for the backend.
//!
//! `DomainError` lives here; the HTTP-facing `AppError` lives in
//! `crate::error` and converts from `DomainError` at the route boundary.

pub mod domain;

pub use domain::DomainError;

#[cfg(test)]
mod tests_error_mapping;
