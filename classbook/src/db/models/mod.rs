//! Entity mapping between storage rows and domain records.
//!
//! Each module pairs a private-to-the-crate row struct, shaped exactly like the table and
//! deriving `sqlx::FromRow`, with the domain record that repositories hand back to callers.
//! The conversions are plain `From` impls with no validation: checking that a name is
//! non-empty or a grade non-negative happens in the layer issuing the request.
//!
//! - [`students`]: `student` table
//! - [`class_info`]: `class_info` table

pub mod class_info;
pub mod students;
