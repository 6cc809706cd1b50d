pub use mediator::DefaultAsyncMediator;

use crate::db::SharedStore;

pub mod middleware;

pub type AppMediator = DefaultAsyncMediator;

pub fn build_mediator(store: SharedStore) -> AppMediator {
    DefaultAsyncMediator::builder()
        // Commands
        .add_handler({
            let store = store.clone();
            move |cmd| {
                let store = store.clone();
                async move { crate::features::recipes::commands::create::handle(store, cmd).await }
            }
        })
        .add_handler({
            let store = store.clone();
            move |cmd| {
                let store = store.clone();
                async move { crate::features::recipes::commands::update::handle(store, cmd).await }
            }
        })
        .add_handler({
            let store = store.clone();
            move |cmd| {
                let store = store.clone();
                async move { crate::features::recipes::commands::delete::handle(store, cmd).await }
            }
        })
        // Queries
        .add_handler({
            let store = store.clone();
            move |query| {
                let store = store.clone();
                async move { crate::features::recipes::queries::get::handle(store, query).await }
            }
        })
        .add_handler({
            let store = store.clone();
            move |query| {
                let store = store.clone();
                async move { crate::features::recipes::queries::list::handle(store, query).await }
            }
        })
        .add_handler({
            let store = store.clone();
            move |query| {
                let store = store.clone();
                async move { crate::features::recipes::queries::search::handle(store, query).await }
            }
        })
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::recipes::{
        CreateRecipeCommand, CreateRecipeError, GetRecipeError, GetRecipeQuery,
    };
    use crate::features::shared::test_helpers::memory_store;
    use mediator::AsyncMediator;
    use recipes_common::Recipe;

    #[tokio::test(flavor = "multi_thread")]
    async fn test_mediator_builds() {
        let _mediator = build_mediator(memory_store());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_mediator_dispatches_to_recipe_handlers() {
        let mut mediator = build_mediator(memory_store());

        let recipe = Recipe::new("Cake", "veg", Some(5), "Mix and bake");
        let created: Result<i32, CreateRecipeError> = mediator
            .send(CreateRecipeCommand::new(recipe))
            .await
            .unwrap();
        let id = created.unwrap();

        let fetched: Result<Recipe, GetRecipeError> =
            mediator.send(GetRecipeQuery { id }).await.unwrap();
        assert_eq!(fetched.unwrap().name, "Cake");
    }
}
