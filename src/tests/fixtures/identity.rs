use crate::modules::cats::core::identity::IdGenerator;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Replays the given ids in order, wrapping around once exhausted.
pub struct FixedIdGenerator {
    ids: Vec<i64>,
    cursor: AtomicUsize,
}

impl FixedIdGenerator {
    pub fn new(ids: Vec<i64>) -> Self {
        assert!(!ids.is_empty(), "FixedIdGenerator needs at least one id");
        Self {
            ids,
            cursor: AtomicUsize::new(0),
        }
    }
}

impl IdGenerator for FixedIdGenerator {
    fn next_id(&self) -> i64 {
        let i = self.cursor.fetch_add(1, Ordering::Relaxed);
        self.ids[i % self.ids.len()]
    }
}
