//! Core domain concepts shared across all subdomains.
//!
//! - [`question::Question`]: the question posed for one answer call
//! - [`error::DomainError`]: contract violations raised by the aggregator

pub mod error;
pub mod question;
