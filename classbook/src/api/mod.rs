//! API layer for HTTP request handling and data models.
//!
//! - **[`handlers`]**: Axum route handlers
//! - **[`models`]**: Request/response data structures
//!
//! # API Structure
//!
//! - `GET /`: Welcome text
//! - **Students** (`/student`, `/student/{student_id}`): Create, update, fetch and delete students
//! - **Classes** (`/class_info`, `/class_info/{student_id}`): Enroll students and manage their classes
//!
//! # OpenAPI Documentation
//!
//! All endpoints are documented with `utoipa` annotations. The rendered documentation is
//! served at `/docs` when the server is running.

pub mod handlers;
pub mod models;
