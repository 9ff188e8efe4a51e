//! HTTP request handlers for all API endpoints.
//!
//! Each handler is responsible for:
//! - Request deserialization and validation
//! - Acquiring a pooled connection and running a single repository operation
//! - Shaping the response (status code and JSON body)
//!
//! # Handler Modules
//!
//! - [`welcome`]: Liveness text at `/`
//! - [`students`]: Student CRUD at `/student`
//! - [`class_info`]: Class enrollment CRUD at `/class_info`
//!
//! # Cancellation
//!
//! Repositories receive a child of the application's shutdown token, so database work still
//! in flight when the server stops is abandoned instead of holding shutdown up.
//!
//! # Error Handling
//!
//! Handlers return [`crate::errors::Error`], which converts to the appropriate HTTP status
//! code and a JSON `{"message": ...}` body.

pub mod class_info;
pub mod students;
pub mod welcome;
