// Identity assignment for newly created cats.
//
// The default strategy draws ids uniformly from [0, RANDOM_ID_UPPER_BOUND)
// without checking for collisions, so two stored cats may share an id.
// The sequential strategy hands out 0, 1, 2, ... and never collides.

use rand::Rng;
use std::str::FromStr;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

pub const RANDOM_ID_UPPER_BOUND: i64 = 10_000;

pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> i64;
}

#[derive(Debug, Default)]
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn next_id(&self) -> i64 {
        rand::rng().random_range(0..RANDOM_ID_UPPER_BOUND)
    }
}

#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    next: AtomicI64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> i64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdStrategy {
    #[default]
    Random,
    Sequential,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown id strategy '{0}', expected 'random' or 'sequential'")]
pub struct UnknownIdStrategy(pub String);

impl FromStr for IdStrategy {
    type Err = UnknownIdStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(IdStrategy::Random),
            "sequential" => Ok(IdStrategy::Sequential),
            other => Err(UnknownIdStrategy(other.to_string())),
        }
    }
}

impl IdStrategy {
    pub fn generator(self) -> Arc<dyn IdGenerator> {
        match self {
            IdStrategy::Random => Arc::new(RandomIdGenerator),
            IdStrategy::Sequential => Arc::new(SequentialIdGenerator::new()),
        }
    }
}
