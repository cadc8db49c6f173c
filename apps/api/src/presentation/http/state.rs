use crate::{
    application::likes::use_case::LikesUseCase, config::Config,
    infrastructure::webflow::item_store::WebflowItemStore,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub likes: Arc<LikesUseCase>,
}

impl AppState {
    /// Wires the Webflow item store and like use case from configuration.
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let store = Arc::new(WebflowItemStore::from_config(&config)?);
        let likes = Arc::new(LikesUseCase::new(
            store,
            config.like_count_field.clone(),
            config.like_count_coercion,
        ));

        Ok(Self {
            config: Arc::new(config),
            likes,
        })
    }
}
