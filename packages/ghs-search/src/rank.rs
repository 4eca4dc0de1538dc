use std::collections::HashSet;

use ghs_storage::models::IssueHit;

/// First-wins dedup by issue number, preserving input order. The store
/// returns rows distance-ascending, so the first occurrence of a number is
/// also its best-ranked comment; later occurrences are worse-or-equal
/// duplicates of the same issue and are skipped.
pub fn dedupe_by_number(rows: Vec<IssueHit>) -> Vec<IssueHit> {
	let mut seen = HashSet::with_capacity(rows.len());
	let mut out = Vec::with_capacity(rows.len());

	for row in rows {
		if seen.insert(row.number) {
			out.push(row);
		}
	}

	out
}
