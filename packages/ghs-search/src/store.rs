use ghs_storage::{db::Db, models::IssueHit};

use crate::{
	BoxFuture, IssueStore,
	query::{Bind, BuiltQuery},
};

/// Default [`IssueStore`] backed by the Postgres pool. Applies the built
/// query's binds in placeholder order; the SQL text itself is taken as-is.
pub struct PgIssueStore {
	db: Db,
}
impl PgIssueStore {
	pub fn new(db: Db) -> Self {
		Self { db }
	}

	async fn fetch(&self, query: &BuiltQuery) -> color_eyre::Result<Vec<IssueHit>> {
		let mut prepared = sqlx::query_as::<_, IssueHit>(&query.sql);

		for bind in &query.binds {
			prepared = match bind {
				Bind::Text(value) => prepared.bind(value),
				Bind::TextArray(values) => prepared.bind(values),
			};
		}

		Ok(prepared.fetch_all(&self.db.pool).await?)
	}
}
impl IssueStore for PgIssueStore {
	fn similar<'a>(
		&'a self,
		query: &'a BuiltQuery,
	) -> BoxFuture<'a, color_eyre::Result<Vec<IssueHit>>> {
		Box::pin(self.fetch(query))
	}
}
