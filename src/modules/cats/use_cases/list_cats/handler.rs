use crate::modules::cats::core::cat::Cat;
use crate::modules::cats::core::errors::{CatError, ensure_valid_output};
use crate::shared::infrastructure::cat_store::CatStore;
use std::sync::Arc;

pub struct ListCatsHandler<TStore>
where
    TStore: CatStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ListCatsHandler<TStore>
where
    TStore: CatStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self) -> Result<Vec<Cat>, CatError> {
        let cats = self.store.list().await?;
        for cat in &cats {
            ensure_valid_output(cat)?;
        }
        tracing::debug!(count = cats.len(), "listed cats");
        Ok(cats)
    }
}
