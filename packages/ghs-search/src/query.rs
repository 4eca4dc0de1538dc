use crate::{Error, Result, filter::IssueFilter};

/// Hard cap on rows fetched per query. Duplicate-heavy corpora can otherwise
/// fan one issue out into hundreds of comment rows, so the limit is a module
/// constant rather than a caller knob.
pub const PAGE_SIZE: u32 = 15;

/// A parameter bound to a `$n` placeholder, in placeholder order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bind {
	Text(String),
	TextArray(Vec<String>),
}

/// A ready-to-execute similarity query. Filter values never appear in `sql`;
/// they travel exclusively through `binds`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltQuery {
	pub sql: String,
	pub binds: Vec<Bind>,
}

/// Builds the cosine-distance query for one search call. Clause order is
/// fixed (state before labels) so the generated SQL is stable for snapshots.
pub fn build(vector: &[f32], filter: &IssueFilter, table: &str) -> Result<BuiltQuery> {
	if vector.is_empty() {
		return Err(Error::InvalidInput { message: "Query vector must be non-empty.".to_string() });
	}
	if !ghs_config::is_sql_identifier(table) {
		return Err(Error::InvalidInput {
			message: format!("Table name {table:?} must be a plain SQL identifier."),
		});
	}

	let mut binds = vec![Bind::Text(vector_literal(vector))];
	let mut sql = format!(
		"\
SELECT number, created_at, title, state, labels, composite_vec <=> $1::text::vector AS dist
FROM {table}
WHERE true"
	);

	if let Some(state) = filter.state.as_deref() {
		binds.push(Bind::Text(state.to_string()));
		sql.push_str(&format!(" AND state = ${}", binds.len()));
	}
	if !filter.labels.is_empty() {
		binds.push(Bind::TextArray(filter.labels.clone()));
		sql.push_str(&format!(" AND labels && ${}", binds.len()));
	}

	sql.push_str(&format!(" ORDER BY dist ASC LIMIT {PAGE_SIZE}"));

	Ok(BuiltQuery { sql, binds })
}

/// Renders the query vector as a pgvector text literal, e.g. `[0.1,0.2]`.
fn vector_literal(vector: &[f32]) -> String {
	let mut out = String::with_capacity(vector.len() * 10 + 2);

	out.push('[');

	for (index, value) in vector.iter().enumerate() {
		if index > 0 {
			out.push(',');
		}

		out.push_str(&value.to_string());
	}

	out.push(']');

	out
}

#[cfg(test)]
mod tests {
	use super::*;

	const VECTOR: [f32; 4] = [0.1, 0.2, 0.3, 0.4];

	#[test]
	fn rejects_empty_vector() {
		let result = build(&[], &IssueFilter::default(), "issue_comments");

		assert!(matches!(result, Err(Error::InvalidInput { .. })));
	}

	#[test]
	fn rejects_non_identifier_table() {
		let result = build(&VECTOR, &IssueFilter::default(), "issue_comments; DROP TABLE x");

		assert!(matches!(result, Err(Error::InvalidInput { .. })));
	}

	#[test]
	fn unfiltered_query_binds_only_the_vector() {
		let built = build(&VECTOR, &IssueFilter::default(), "issue_comments").unwrap();

		assert_eq!(built.binds, vec![Bind::Text("[0.1,0.2,0.3,0.4]".to_string())]);
		assert!(!built.sql.contains("$2"));
		assert!(!built.sql.contains("state ="));
		assert!(!built.sql.contains("labels &&"));
	}

	#[test]
	fn state_filter_is_bound_not_interpolated() {
		let filter = IssueFilter::parse(Some("open"), None);
		let built = build(&VECTOR, &filter, "issue_comments").unwrap();

		assert!(built.sql.contains("AND state = $2"));
		assert!(!built.sql.contains("open"));
		assert_eq!(built.binds[1], Bind::Text("open".to_string()));
	}

	#[test]
	fn labels_filter_is_bound_as_array() {
		let filter = IssueFilter::parse(None, Some("bug,regression"));
		let built = build(&VECTOR, &filter, "issue_comments").unwrap();

		assert!(built.sql.contains("AND labels && $2"));
		assert!(!built.sql.contains("bug"));
		assert_eq!(
			built.binds[1],
			Bind::TextArray(vec!["bug".to_string(), "regression".to_string()])
		);
	}

	#[test]
	fn state_clause_precedes_labels_clause() {
		let filter = IssueFilter::parse(Some("open"), Some("bug,regression"));
		let built = build(&VECTOR, &filter, "issue_comments").unwrap();
		let state_at = built.sql.find("state = $2").unwrap();
		let labels_at = built.sql.find("labels && $3").unwrap();

		assert!(state_at < labels_at);
		assert_eq!(
			built.binds,
			vec![
				Bind::Text("[0.1,0.2,0.3,0.4]".to_string()),
				Bind::Text("open".to_string()),
				Bind::TextArray(vec!["bug".to_string(), "regression".to_string()]),
			]
		);
	}

	#[test]
	fn always_orders_ascending_and_caps_the_page() {
		let built = build(&VECTOR, &IssueFilter::default(), "issue_comments").unwrap();

		assert!(built.sql.ends_with(&format!("ORDER BY dist ASC LIMIT {PAGE_SIZE}")));
	}

	#[test]
	fn generated_sql_is_deterministic() {
		let filter = IssueFilter::parse(Some("open"), Some("bug"));
		let first = build(&VECTOR, &filter, "issue_comments").unwrap();
		let second = build(&VECTOR, &filter, "issue_comments").unwrap();

		assert_eq!(first, second);
	}
}
