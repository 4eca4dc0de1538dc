/// Categorical filters applied on top of the similarity ranking. An absent
/// state and an empty label set mean "match every record".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueFilter {
	pub state: Option<String>,
	pub labels: Vec<String>,
}
impl IssueFilter {
	/// Builds a filter from the raw caller strings: state is exact-match,
	/// labels is a comma-joined match-any list. Blank entries are dropped so
	/// `"bug,,regression,"` and `"bug,regression"` are the same filter.
	pub fn parse(state: Option<&str>, labels: Option<&str>) -> Self {
		let state = state.map(str::trim).filter(|value| !value.is_empty()).map(str::to_string);
		let labels = labels
			.map(|raw| {
				raw.split(',')
					.map(str::trim)
					.filter(|label| !label.is_empty())
					.map(str::to_string)
					.collect()
			})
			.unwrap_or_default();

		Self { state, labels }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_both_filters() {
		let filter = IssueFilter::parse(Some("open"), Some("bug,regression"));

		assert_eq!(filter.state.as_deref(), Some("open"));
		assert_eq!(filter.labels, vec!["bug", "regression"]);
	}

	#[test]
	fn drops_blank_label_entries() {
		let filter = IssueFilter::parse(None, Some("bug, ,,regression,"));

		assert_eq!(filter.state, None);
		assert_eq!(filter.labels, vec!["bug", "regression"]);
	}

	#[test]
	fn empty_strings_mean_unfiltered() {
		let filter = IssueFilter::parse(Some(""), Some(""));

		assert_eq!(filter, IssueFilter::default());
	}

	#[test]
	fn absent_inputs_mean_unfiltered() {
		assert_eq!(IssueFilter::parse(None, None), IssueFilter::default());
	}
}
