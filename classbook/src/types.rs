//! Common type definitions.
//!
//! Both entities use storage-generated `BIGSERIAL` identities, exposed as plain `i64`
//! aliases so that signatures say which table an id belongs to:
//!
//! - [`StudentId`]: `student.student_id`
//! - [`ClassInfoId`]: `class_info.id`

// Type aliases for IDs
pub type StudentId = i64;
pub type ClassInfoId = i64;
