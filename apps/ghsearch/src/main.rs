use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = ghsearch::Args::parse();
	ghsearch::run(args).await
}
