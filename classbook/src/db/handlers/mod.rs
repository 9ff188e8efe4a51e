//! Repository implementations for database access.
//!
//! # Design Pattern
//!
//! Each repository:
//! - Borrows a SQLx connection acquired from the pool
//! - Carries the caller's cancellation token into every statement
//! - Issues exactly one statement per operation (no transactions)
//! - Returns domain records from [`crate::db::models`]
//! - Reports failures through [`crate::db::errors`], never translating them inline
//!
//! # Available Repositories
//!
//! - [`Students`]: the `student` table
//! - [`ClassInfos`]: the `class_info` table
//!
//! # Common Pattern
//!
//! ```ignore
//! use classbook::db::handlers::{StudentRepository, Students};
//!
//! async fn example(pool: &sqlx::PgPool, cancel: CancellationToken) -> Result<(), Box<dyn std::error::Error>> {
//!     let mut conn = pool.acquire().await?;
//!     let mut repo = Students::new(&mut conn, cancel);
//!
//!     let student = repo.get_by_id(1).await?;
//!     println!("{} has grade {}", student.student_name, student.grade);
//!     Ok(())
//! }
//! ```

pub mod class_info;
pub mod repository;
pub mod students;

pub use class_info::ClassInfos;
pub use repository::{ClassInfoRepository, StudentRepository};
pub use students::Students;
