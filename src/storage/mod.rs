//! Storage side of the engine: record sources and repositories

pub mod in_memory;
pub mod repository;

pub use in_memory::InMemorySource;
pub use repository::Repository;
