//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - Query/projection structs for joined reads
//! - `Deserialize` DTOs for request payloads owned by the data layer

pub mod booster;
pub mod campaign;
pub mod creator;
pub mod user;
