use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ghs_search::{SearchItem, SearchRequest, SearchService};
use ghs_storage::db::Db;

#[derive(Debug, Parser)]
#[command(
	version = ghs_cli::VERSION,
	rename_all = "kebab",
	styles = ghs_cli::styles(),
)]
pub struct Args {
	/// Free-text query; multiple words are joined with spaces.
	#[arg(required = true, value_name = "QUERY")]
	pub query: Vec<String>,
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: PathBuf,
	/// Filter by issue state, e.g. "open" or "closed".
	#[arg(long)]
	pub state: Option<String>,
	/// Comma-separated label filter; a hit matches if it carries any of them.
	#[arg(long)]
	pub labels: Option<String>,
}

pub async fn run(args: Args) -> color_eyre::Result<()> {
	let config = ghs_config::load(&args.config)?;
	let filter =
		EnvFilter::try_new(&config.service.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
	tracing_subscriber::fmt().with_env_filter(filter).init();

	let db = Db::connect(&config.storage.postgres).await?;
	let service = SearchService::new(config, db);
	let request = SearchRequest {
		query: args.query.join(" "),
		state: args.state,
		labels: args.labels,
	};
	let response = service.search(request).await?;

	for item in &response.items {
		println!("{}", format_hit(item, &service.cfg.service.issue_url_base));
	}

	Ok(())
}

/// One result line: date, OSC 8 hyperlinked issue number, distance, state,
/// title, labels.
fn format_hit(item: &SearchItem, url_base: &str) -> String {
	let url = format!("{url_base}/{}", item.number);

	format!(
		"{date} \u{1b}]8;;{url}\u{7}#{number}\u{1b}]8;;\u{7} {dist:.4} {state:>6}  ({title}) [{labels}]",
		date = item.created_at.date(),
		number = item.number,
		dist = item.dist,
		state = item.state,
		title = item.title,
		labels = item.labels.join(","),
	)
}
