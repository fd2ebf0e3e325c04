/// Widest key type; every table key converts into it losslessly.
pub type DbId = i64;

/// `employee.id` is a client-supplied INTEGER.
pub type EmployeeId = i32;

/// `actor.actor_id` is a SMALLINT identity column.
pub type ActorId = i16;

/// `film.film_id` is a SMALLINT identity column.
pub type FilmId = i16;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
