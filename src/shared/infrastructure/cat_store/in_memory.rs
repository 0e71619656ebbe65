use crate::modules::cats::core::cat::Cat;
use crate::shared::infrastructure::cat_store::{CatStore, CatStoreError};
use tokio::sync::Mutex;

#[derive(Default)]
pub struct InMemoryCatStore {
    cats: Mutex<Vec<Cat>>,
    is_offline: bool,
}

impl InMemoryCatStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the collection as-is, bypassing validation.
    pub fn with_cats(cats: Vec<Cat>) -> Self {
        Self {
            cats: Mutex::new(cats),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), CatStoreError> {
        if self.is_offline {
            return Err(CatStoreError::Backend("Cat store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl CatStore for InMemoryCatStore {
    async fn find(&self, id: i64) -> Result<Option<Cat>, CatStoreError> {
        self.ensure_online()?;
        let cats = self.cats.lock().await;
        Ok(cats.iter().find(|cat| cat.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Cat>, CatStoreError> {
        self.ensure_online()?;
        Ok(self.cats.lock().await.clone())
    }

    async fn append(&self, cat: Cat) -> Result<(), CatStoreError> {
        self.ensure_online()?;
        self.cats.lock().await.push(cat);
        Ok(())
    }

    async fn remove(&self, id: i64) -> Result<usize, CatStoreError> {
        self.ensure_online()?;
        let mut cats = self.cats.lock().await;
        let before = cats.len();
        cats.retain(|cat| cat.id != id);
        Ok(before - cats.len())
    }
}
