use std::sync::Arc;

use ghs_search::SearchService;
use ghs_storage::db::Db;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<SearchService>,
}
impl AppState {
	pub async fn new(config: ghs_config::Config) -> color_eyre::Result<Self> {
		let db = Db::connect(&config.storage.postgres).await?;

		db.ensure_schema(config.storage.postgres.vector_dim).await?;

		let service = SearchService::new(config, db);

		Ok(Self { service: Arc::new(service) })
	}
}
