//! API request and response data models.
//!
//! These models define the public JSON contract and are kept separate from the database
//! records in [`crate::db::models`], so storage and wire representations can evolve
//! independently. Request bodies are validated while converting into database requests;
//! a failed check becomes [`Error::Validation`](crate::errors::Error::Validation) and never
//! reaches the repositories.
//!
//! - [`students`]: Student create/update bodies and responses
//! - [`class_info`]: Class enrollment bodies and responses

pub mod class_info;
pub mod students;
