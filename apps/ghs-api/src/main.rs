use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = ghs_api::Args::parse();
	ghs_api::run(args).await
}
