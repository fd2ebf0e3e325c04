//! Repository layer.
//!
//! Each repository is a zero-sized struct that describes its table as a
//! [`Collection`](crate::reader::Collection) and exposes async methods that
//! accept `&PgPool` as the first argument. Reads delegate to
//! [`CollectionReader`](crate::reader::CollectionReader).

pub mod actor_repo;
pub mod employee_repo;
pub mod film_repo;

pub use actor_repo::ActorRepo;
pub use employee_repo::EmployeeRepo;
pub use film_repo::FilmRepo;
