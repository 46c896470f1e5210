//! Use cases
//!
//! Application-level operations that orchestrate domain logic and ports.

pub mod fetch_remote_quote;
pub mod share_quote;
