//! Repository contracts consumed by the HTTP layer.
//!
//! A repository is a data access layer over one postgres table. Implementations are
//! stateless apart from the borrowed connection: they cache nothing and open no
//! transactions, so every operation is a single statement and relies on the storage
//! engine's row-level isolation.
//!
//! Every operation reports failures as [`DbError`](crate::db::errors::DbError):
//! `NotFound` for absent rows (including zero-row updates/deletes),
//! `ForeignKeyViolation` for writes referencing a missing parent, `Storage` for the rest.
use crate::db::errors::Result;

/// Operations on the `student` table
#[async_trait::async_trait]
pub trait StudentRepository {
    /// The request type for creating students
    type CreateRequest;

    /// The request type for updating students
    type UpdateRequest;

    /// The domain record returned by lookups
    type Response;

    /// The identifier type for lookups
    type Id: Send + Sync;

    /// Insert a student, returning the storage-assigned id
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Id>;

    /// Fetch one student; a missing row is `NotFound`
    async fn get_by_id(&mut self, id: Self::Id) -> Result<Self::Response>;

    /// Overwrite name and grade; zero rows affected is `NotFound`
    async fn update(&mut self, id: Self::Id, request: &Self::UpdateRequest) -> Result<()>;

    /// Delete by id; zero rows affected is `NotFound`
    async fn delete(&mut self, id: Self::Id) -> Result<()>;
}

/// Operations on the `class_info` table, keyed by the owning student
#[async_trait::async_trait]
pub trait ClassInfoRepository {
    /// The request type for creating class rows
    type CreateRequest;

    /// The request type for updating class rows
    type UpdateRequest;

    /// The domain record returned by lookups
    type Response;

    /// The identifier type of a class row
    type Id: Send + Sync;

    /// The identifier type of the owning student
    type StudentId: Send + Sync;

    /// Insert a class row, returning its id. A missing student is `ForeignKeyViolation`.
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Id>;

    /// All class rows of a student. An empty list is not an error.
    async fn get_by_student_id(&mut self, student_id: Self::StudentId) -> Result<Vec<Self::Response>>;

    /// Update the class rows of a student; zero rows affected is `NotFound`
    async fn update_by_student_id(&mut self, student_id: Self::StudentId, request: &Self::UpdateRequest) -> Result<()>;

    /// Delete every class row of a student; zero rows affected is `NotFound`
    async fn delete_by_student_id(&mut self, student_id: Self::StudentId) -> Result<()>;
}
