//! Core module containing fundamental traits and types for the engine

pub mod entity;
pub mod error;
pub mod field;
pub mod source;

pub use entity::Entity;
pub use error::{ConfigError, MedrecError, MedrecResult, StorageError, ValidationError};
pub use field::FieldValue;
pub use source::RecordSource;
