//! Trait boundaries between the engine core and its infrastructure

pub mod observer;
pub mod repository;

pub use observer::Observer;
pub use repository::SnapshotRepository;
