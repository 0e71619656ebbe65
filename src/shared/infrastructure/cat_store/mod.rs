// Storage port for the cat collection.
//
// Purpose
// - Describe what the use case handlers need from the collection, without tying them to a backend.
//
// Responsibilities
// - Each method is atomic with respect to the others; implementations guard
//   every read-modify-write sequence themselves.

pub mod in_memory;

use crate::modules::cats::core::cat::Cat;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatStoreError {
    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait CatStore: Send + Sync {
    /// First cat in insertion order whose id matches.
    async fn find(&self, id: i64) -> Result<Option<Cat>, CatStoreError>;

    async fn list(&self) -> Result<Vec<Cat>, CatStoreError>;

    async fn append(&self, cat: Cat) -> Result<(), CatStoreError>;

    /// Removes every cat with a matching id and returns how many were removed.
    async fn remove(&self, id: i64) -> Result<usize, CatStoreError>;
}
