use crate::modules::cats::core::errors::CatError;
use crate::modules::cats::use_cases::delete_cat::command::{DELETE_CONFIRMATION, DeleteCat};
use crate::shared::infrastructure::cat_store::CatStore;
use std::sync::Arc;

pub struct DeleteCatHandler<TStore>
where
    TStore: CatStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> DeleteCatHandler<TStore>
where
    TStore: CatStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: DeleteCat) -> Result<&'static str, CatError> {
        let removed = self.store.remove(command.id).await?;
        tracing::info!(cat_id = command.id, removed, "deleted cat");
        // Constant output; it always satisfies the string schema.
        Ok(DELETE_CONFIRMATION)
    }
}
