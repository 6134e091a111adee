use {clap::Parser, std::path::PathBuf, tracing::Level};

#[derive(Debug, Clone, Parser)]
#[command(about = "Manage a Puppy Bowl roster")]
pub struct Args {
	/// `RUST_LOG` level.
	///
	/// By default only logs from this crate will be emitted. If you want to see logs from
	/// dependencies as well, you can use environment variables instead of this flag. For example,
	/// to enable logs from the `reqwest` crate, you can do something like this:
	///
	/// ```sh
	/// RUST_LOG=reqwest=DEBUG,puppy_bowl_client=INFO ./path/to/binary
	/// ```
	///
	/// The environment variable will always take precedence over this flag.
	#[arg(long = "logs")]
	#[clap(default_value_t = Level::INFO)]
	pub log_level: Level,

	/// A custom config file.
	///
	/// If this is not provided, the client will look in your config directory and create a
	/// default config there if there is none yet.
	#[arg(long = "config")]
	pub config_path: Option<PathBuf>,
}

pub fn get() -> Args {
	Args::parse()
}
