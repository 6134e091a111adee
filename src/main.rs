mod args;
mod gui;
mod logger;

use {
	args::Args,
	color_eyre::Result,
	gui::RosterGui,
	puppy_bowl_client::Config,
	std::process::exit,
	tracing::error,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let args = args::get();

	// Initialize logging
	setup_tracing(&args);

	let config = match args.config_path {
		None => Config::load(),
		Some(config_path) => Config::load_from_file(config_path),
	}?;

	if let Err(error) = RosterGui::init(config) {
		error!(?error, "Failed to run GUI.");
		exit(1);
	}

	Ok(())
}

fn setup_tracing(Args { log_level, .. }: &Args) {
	use logger::Logger;

	let log_level = std::env::var("RUST_LOG")
		.unwrap_or_else(|_| format!("ERROR,puppy_bowl_client={log_level}"));

	tracing_subscriber::fmt()
		.json()
		.with_env_filter(log_level)
		.with_file(true)
		.with_line_number(true)
		.with_writer(Logger::new())
		.init();
}
