//! Infrastructure adapters implementing the crate's ports

pub mod msgpack_repository;

pub use msgpack_repository::MsgPackRepository;
