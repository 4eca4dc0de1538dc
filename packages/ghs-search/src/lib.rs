pub mod filter;
pub mod query;
pub mod rank;
pub mod search;
pub mod time_serde;

mod error;
mod store;

pub use error::{Error, Result};
pub use search::{SearchItem, SearchRequest, SearchResponse};
pub use store::PgIssueStore;

use std::{future::Future, pin::Pin, sync::Arc};

use ghs_config::{Config, EmbeddingProviderConfig};
use ghs_storage::{db::Db, models::IssueHit};

use crate::query::BuiltQuery;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub trait EmbeddingProvider
where
	Self: Send + Sync,
{
	fn embed<'a>(
		&'a self,
		cfg: &'a EmbeddingProviderConfig,
		text: &'a str,
	) -> BoxFuture<'a, color_eyre::Result<Vec<f32>>>;
}

pub trait IssueStore
where
	Self: Send + Sync,
{
	fn similar<'a>(
		&'a self,
		query: &'a BuiltQuery,
	) -> BoxFuture<'a, color_eyre::Result<Vec<IssueHit>>>;
}

/// Stateless search orchestrator. Collaborators are trait objects so front
/// ends share one wiring and tests swap in doubles without global state.
pub struct SearchService {
	pub cfg: Config,
	store: Arc<dyn IssueStore>,
	embedding: Arc<dyn EmbeddingProvider>,
}

struct DefaultEmbedding;
impl EmbeddingProvider for DefaultEmbedding {
	fn embed<'a>(
		&'a self,
		cfg: &'a EmbeddingProviderConfig,
		text: &'a str,
	) -> BoxFuture<'a, color_eyre::Result<Vec<f32>>> {
		Box::pin(ghs_providers::embedding::embed(cfg, text))
	}
}

impl SearchService {
	pub fn new(cfg: Config, db: Db) -> Self {
		Self { cfg, store: Arc::new(PgIssueStore::new(db)), embedding: Arc::new(DefaultEmbedding) }
	}

	pub fn with_collaborators(
		cfg: Config,
		store: Arc<dyn IssueStore>,
		embedding: Arc<dyn EmbeddingProvider>,
	) -> Self {
		Self { cfg, store, embedding }
	}
}
