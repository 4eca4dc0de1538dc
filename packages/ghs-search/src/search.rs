use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::debug;

use ghs_storage::models::IssueHit;

use crate::{Error, Result, SearchService, filter::IssueFilter, query, rank};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
	pub query: String,
	pub state: Option<String>,
	pub labels: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchItem {
	pub number: i64,
	#[serde(with = "crate::time_serde")]
	pub created_at: OffsetDateTime,
	pub title: String,
	pub state: String,
	pub labels: Vec<String>,
	pub dist: f64,
}
impl From<IssueHit> for SearchItem {
	fn from(hit: IssueHit) -> Self {
		Self {
			number: hit.number,
			created_at: hit.created_at,
			title: hit.title,
			state: hit.state,
			labels: hit.labels,
			dist: hit.dist,
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
	pub items: Vec<SearchItem>,
}

impl SearchService {
	/// Runs one search end to end: embed the query text, build the filtered
	/// similarity query, execute it, dedupe by issue number. Each stage maps
	/// to its own error variant and nothing is retried here.
	pub async fn search(&self, request: SearchRequest) -> Result<SearchResponse> {
		let text = request.query.trim();

		if text.is_empty() {
			return Err(Error::InvalidInput {
				message: "Query text must be non-empty.".to_string(),
			});
		}

		let filter = IssueFilter::parse(request.state.as_deref(), request.labels.as_deref());
		let vector = self
			.embedding
			.embed(&self.cfg.providers.embedding, text)
			.await
			.map_err(|err| Error::Embedding { message: format!("{err:#}") })?;

		if vector.is_empty() {
			return Err(Error::Embedding {
				message: "Provider returned an empty vector.".to_string(),
			});
		}

		let built = query::build(&vector, &filter, &self.cfg.storage.postgres.table)?;

		debug!(sql = %built.sql, binds = built.binds.len(), "Issue similarity query.");

		let rows = self
			.store
			.similar(&built)
			.await
			.map_err(|err| Error::Store { message: format!("{err:#}") })?;
		let items = rank::dedupe_by_number(rows).into_iter().map(SearchItem::from).collect();

		Ok(SearchResponse { items })
	}
}
