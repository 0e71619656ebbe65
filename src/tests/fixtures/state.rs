use crate::modules::cats::core::cat::Cat;
use crate::modules::cats::core::identity::SequentialIdGenerator;
use crate::shared::infrastructure::cat_store::in_memory::InMemoryCatStore;
use crate::shell::state::AppState;
use std::sync::Arc;

pub fn make_test_state() -> AppState {
    AppState::new(
        Arc::new(InMemoryCatStore::new()),
        Arc::new(SequentialIdGenerator::new()),
    )
}

pub fn make_seeded_state(cats: Vec<Cat>) -> AppState {
    AppState::new(
        Arc::new(InMemoryCatStore::with_cats(cats)),
        Arc::new(SequentialIdGenerator::new()),
    )
}

pub fn make_offline_store_state() -> AppState {
    let mut store = InMemoryCatStore::new();
    store.toggle_offline();
    AppState::new(Arc::new(store), Arc::new(SequentialIdGenerator::new()))
}
