use crate::modules::cats::core::cat::Cat;
use crate::modules::cats::core::errors::{CatError, ensure_valid_output};
use crate::shared::infrastructure::cat_store::CatStore;
use std::sync::Arc;

pub struct GetCatHandler<TStore>
where
    TStore: CatStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> GetCatHandler<TStore>
where
    TStore: CatStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, id: i64) -> Result<Cat, CatError> {
        tracing::debug!(cat_id = id, "looking up cat");
        let cat = self.store.find(id).await?.ok_or_else(|| {
            tracing::warn!(cat_id = id, "cat not found");
            CatError::NotFound { id }
        })?;
        ensure_valid_output(&cat)?;
        Ok(cat)
    }
}
