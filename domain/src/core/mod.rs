//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`]: domain-level errors
//! - [`notice::Notice`]: informational messages that accompany a successful operation

pub mod error;
pub mod notice;
