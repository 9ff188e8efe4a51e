//! Database layer for student and class records.
//!
//! This module implements the data access layer using SQLx with PostgreSQL.
//! It follows the Repository pattern to provide clean abstractions over database operations.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  (API request handlers)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │ Repositories│  (db::handlers - one statement per operation)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │   Storage   │  (db::storage - cancellable statement primitives)
//! └──────┬──────┘
//!        │
//!        ↓
//! ┌─────────────┐
//! │  PostgreSQL │
//! └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`handlers`]: Repository traits and implementations
//! - [`models`]: Storage rows, domain records and request types
//! - [`storage`]: Statement primitives shared by the repositories
//! - [`errors`]: Database error taxonomy and driver error translation
//! - [`pool`]: Connection pool construction from configuration
//!
//! # Connections
//!
//! Repositories borrow a pooled connection rather than a transaction. Every operation is a
//! single statement, so there is nothing to commit:
//!
//! ```ignore
//! let mut conn = pool.acquire().await?;
//! let mut repo = ClassInfos::new(&mut conn, cancel);
//! let classes = repo.get_by_student_id(1).await?;
//! ```
//!
//! # Migrations
//!
//! Database migrations are managed by SQLx and located in the `migrations/` directory.
//! The [`crate::migrator`] function provides access to the migrator:
//!
//! ```ignore
//! classbook::migrator().run(&pool).await?;
//! ```

pub mod errors;
pub mod handlers;
pub mod models;
pub mod pool;
pub mod storage;
