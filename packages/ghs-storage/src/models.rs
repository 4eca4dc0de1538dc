use time::OffsetDateTime;

/// One ranked row from the similarity query. Rows arrive distance-ascending
/// and may repeat an issue number, once per matching embedded comment.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct IssueHit {
	pub number: i64,
	pub created_at: OffsetDateTime,
	pub title: String,
	pub state: String,
	pub labels: Vec<String>,
	pub dist: f64,
}
