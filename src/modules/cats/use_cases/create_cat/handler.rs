use crate::modules::cats::core::cat::{Cat, validate_name};
use crate::modules::cats::core::errors::{CatError, ensure_valid_output};
use crate::modules::cats::core::identity::IdGenerator;
use crate::modules::cats::use_cases::create_cat::command::CreateCat;
use crate::shared::infrastructure::cat_store::CatStore;
use std::sync::Arc;

pub struct CreateCatHandler<TStore>
where
    TStore: CatStore + 'static,
{
    store: Arc<TStore>,
    ids: Arc<dyn IdGenerator>,
}

impl<TStore> CreateCatHandler<TStore>
where
    TStore: CatStore + 'static,
{
    pub fn new(store: Arc<TStore>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { store, ids }
    }

    pub async fn handle(&self, command: CreateCat) -> Result<Cat, CatError> {
        validate_name(&command.name).map_err(|e| {
            tracing::warn!(error = %e, "rejected create cat command");
            CatError::InvalidInput(e.to_string())
        })?;

        let cat = Cat::new(self.ids.next_id(), command.name);
        ensure_valid_output(&cat)?;

        self.store.append(cat.clone()).await?;
        tracing::info!(cat_id = cat.id, name = %cat.name, "created cat");
        Ok(cat)
    }
}
