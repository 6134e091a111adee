use {
	color_eyre::{eyre::Context, Result},
	serde::{Deserialize, Serialize},
	std::{
		io::ErrorKind,
		path::{Path, PathBuf},
	},
	url::Url,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
	/// Root of the Puppy Bowl API, without the cohort segment.
	pub api_url: Url,

	/// The cohort (tenant) whose roster this client works on.
	pub cohort: String,
}

impl Config {
	pub const DEFAULT_API_URL: &str = "https://fsa-puppy-bowl.herokuapp.com/api/";
	pub const DEFAULT_COHORT: &str = "2302-acc-et-web-pt-a";

	const DEFAULT_CONTENT: &str = r#"
		api_url = 'https://fsa-puppy-bowl.herokuapp.com/api/'
		cohort = '2302-acc-et-web-pt-a'
	"#;

	#[tracing::instrument]
	pub fn load() -> Result<Self> {
		let default_location = Self::default_location()?;
		Self::load_from_file(default_location).context("Failed to load config file.")
	}

	#[tracing::instrument]
	pub fn load_from_file(config_path: PathBuf) -> Result<Self> {
		let config_file = match std::fs::read_to_string(&config_path) {
			Ok(config_file) => config_file,
			Err(error) if error.kind() == ErrorKind::NotFound => return Self::create(&config_path),
			Err(error) => {
				return Err(error).with_context(|| {
					format!("Failed to read config file at `{}`.", config_path.display())
				});
			}
		};

		toml::from_str(&config_file).context("Failed to parse config file.")
	}

	pub fn default_location() -> Result<PathBuf> {
		#[cfg(unix)]
		let mut default_location = match std::env::var("XDG_CONFIG_HOME") {
			Ok(xdg_home) => PathBuf::from(xdg_home),
			Err(_) => {
				let home_dir = std::env::var("HOME").context("Could not locate `$HOME`.")?;
				let mut home_dir = PathBuf::from(home_dir);
				home_dir.push(".config");
				home_dir
			}
		};

		#[cfg(windows)]
		let mut default_location = match std::env::var("LOCALAPPDATA") {
			Ok(local_appdata) => PathBuf::from(local_appdata),
			Err(_) => std::env::var("USERPROFILE")
				.context("Could not locate `%USERPROFILE%`.")?
				.into(),
		};

		default_location.push("puppy-bowl-client");
		default_location.push("config.toml");
		Ok(default_location)
	}

	/// The cohort's API root. Every request URL is built on top of this.
	pub fn base_url(&self) -> Result<Url> {
		let mut api_url = self.api_url.clone();
		if !api_url.path().ends_with('/') {
			let path = format!("{}/", api_url.path());
			api_url.set_path(&path);
		}

		api_url
			.join(&format!("{}/", self.cohort.trim_matches('/')))
			.with_context(|| format!("`{}` is not a valid cohort name.", self.cohort))
	}

	fn create(path: &Path) -> Result<Self> {
		use std::{fs::File, io::Write};

		let config_dir = path.parent().unwrap_or(path);
		std::fs::create_dir_all(config_dir).context("Failed to create config directory.")?;

		let mut config_file = File::create(path).context("Failed to create config file.")?;

		write!(&mut config_file, "{}", Self::DEFAULT_CONTENT.trim().replace('\t', ""))
			.context("Failed to write default config to file.")?;

		Ok(Self::default())
	}
}

impl Default for Config {
	fn default() -> Self {
		Self {
			api_url: Url::parse(Self::DEFAULT_API_URL).expect("default API url is valid"),
			cohort: String::from(Self::DEFAULT_COHORT),
		}
	}
}
