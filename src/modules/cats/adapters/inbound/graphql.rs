use async_graphql::{Context, ErrorExtensions, Object, Result as GqlResult, SimpleObject};

use crate::modules::cats::core::cat::Cat;
use crate::modules::cats::core::errors::CatError;
use crate::modules::cats::use_cases::create_cat::command::CreateCat;
use crate::modules::cats::use_cases::delete_cat::command::DeleteCat;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
#[graphql(name = "Cat")]
pub struct GqlCat {
    pub id: i64,
    pub name: String,
}

impl From<Cat> for GqlCat {
    fn from(c: Cat) -> Self {
        Self {
            id: c.id,
            name: c.name,
        }
    }
}

fn to_gql_error(error: CatError) -> async_graphql::Error {
    let code = error.code();
    async_graphql::Error::new(error.to_string())
        .extend_with(|_, e| e.set("code", code.as_str()))
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn cat(&self, context: &Context<'_>, id: i64) -> GqlResult<GqlCat> {
        let state = context.data_unchecked::<AppState>();
        state
            .get_handler
            .handle(id)
            .await
            .map(Into::into)
            .map_err(to_gql_error)
    }

    async fn cats(&self, context: &Context<'_>) -> GqlResult<Vec<GqlCat>> {
        let state = context.data_unchecked::<AppState>();
        let cats = state.list_handler.handle().await.map_err(to_gql_error)?;
        Ok(cats.into_iter().map(Into::into).collect())
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_cat(&self, context: &Context<'_>, name: String) -> GqlResult<GqlCat> {
        let state = context.data_unchecked::<AppState>();
        state
            .create_handler
            .handle(CreateCat { name })
            .await
            .map(Into::into)
            .map_err(to_gql_error)
    }

    async fn delete_cat(&self, context: &Context<'_>, id: i64) -> GqlResult<String> {
        let state = context.data_unchecked::<AppState>();
        state
            .delete_handler
            .handle(DeleteCat { id })
            .await
            .map(str::to_string)
            .map_err(to_gql_error)
    }
}
