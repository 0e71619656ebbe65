use crate::modules::cats::core::identity::IdGenerator;
use crate::modules::cats::use_cases::create_cat::handler::CreateCatHandler;
use crate::modules::cats::use_cases::delete_cat::handler::DeleteCatHandler;
use crate::modules::cats::use_cases::get_cat::handler::GetCatHandler;
use crate::modules::cats::use_cases::list_cats::handler::ListCatsHandler;
use crate::shared::infrastructure::cat_store::in_memory::InMemoryCatStore;
use std::sync::Arc;

/// Every handler shares the same store instance.
#[derive(Clone)]
pub struct AppState {
    pub get_handler: Arc<GetCatHandler<InMemoryCatStore>>,
    pub list_handler: Arc<ListCatsHandler<InMemoryCatStore>>,
    pub create_handler: Arc<CreateCatHandler<InMemoryCatStore>>,
    pub delete_handler: Arc<DeleteCatHandler<InMemoryCatStore>>,
}

impl AppState {
    pub fn new(store: Arc<InMemoryCatStore>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            get_handler: Arc::new(GetCatHandler::new(store.clone())),
            list_handler: Arc::new(ListCatsHandler::new(store.clone())),
            create_handler: Arc::new(CreateCatHandler::new(store.clone(), ids)),
            delete_handler: Arc::new(DeleteCatHandler::new(store)),
        }
    }
}
