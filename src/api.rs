//! HTTP access to the roster service.
//!
//! Every operation is a single round trip. There are no retries, no timeouts besides whatever the
//! transport does by default, and nothing is cached.

use {
	crate::{
		player::{Id, NewPlayer, Player},
		Error, Result,
	},
	async_trait::async_trait,
	serde::{de::DeserializeOwned, Deserialize},
	serde_json::Value as JsonValue,
	tracing::{debug, error},
	url::Url,
};

/// The four operations the roster service offers.
#[async_trait]
pub trait RosterApi: Send + Sync {
	async fn list_players(&self) -> Result<Vec<Player>>;

	async fn get_player(&self, id: &Id) -> Result<Player>;

	/// Returns the service's creation envelope as-is.
	async fn create_player(&self, new_player: &NewPlayer) -> Result<JsonValue>;

	/// Returns the service's deletion envelope as-is.
	async fn delete_player(&self, id: &Id) -> Result<JsonValue>;
}

#[derive(Debug, Clone)]
pub struct Client {
	http: reqwest::Client,
	base_url: Url,
}

impl Client {
	pub fn new(mut base_url: Url) -> Self {
		if !base_url.path().ends_with('/') {
			let path = format!("{}/", base_url.path());
			base_url.set_path(&path);
		}

		Self { http: reqwest::Client::new(), base_url }
	}

	pub fn players_url(&self) -> String {
		format!("{}players", self.base_url)
	}

	pub fn player_url(&self, id: &Id) -> String {
		format!("{}players/{id}", self.base_url)
	}

	/// Downloads a player's picture. Image URLs point anywhere on the web, not at the service.
	#[tracing::instrument(skip(self))]
	pub async fn image_bytes(&self, url: &str) -> Result<Vec<u8>> {
		let network = |source| Error::Network { url: url.to_owned(), source };

		let bytes = self
			.http
			.get(url)
			.send()
			.await
			.and_then(reqwest::Response::error_for_status)
			.map_err(network)?
			.bytes()
			.await
			.map_err(network)?;

		debug!(size = bytes.len(), "Fetched image.");
		Ok(bytes.to_vec())
	}

	async fn fetch(&self, request: reqwest::RequestBuilder, url: &str) -> Result<String> {
		let network = |source| Error::Network { url: url.to_owned(), source };

		request
			.send()
			.await
			.and_then(reqwest::Response::error_for_status)
			.map_err(network)?
			.text()
			.await
			.map_err(network)
	}
}

#[async_trait]
impl RosterApi for Client {
	#[tracing::instrument(skip(self))]
	async fn list_players(&self) -> Result<Vec<Player>> {
		let url = self.players_url();
		debug!(%url, "Fetching roster.");

		let players = async { parse_players(&url, &self.fetch(self.http.get(&url), &url).await?) }
			.await
			.map_err(|error| {
				error!(%error, "Trouble fetching players!");
				error
			})?;

		debug!(count = players.len(), "Fetched roster.");
		Ok(players)
	}

	#[tracing::instrument(skip(self))]
	async fn get_player(&self, id: &Id) -> Result<Player> {
		let url = self.player_url(id);
		debug!(%url, "Fetching player.");

		async { parse_player(&url, id, &self.fetch(self.http.get(&url), &url).await?) }
			.await
			.map_err(|error| {
				error!(%error, %id, "Trouble fetching player!");
				error
			})
	}

	#[tracing::instrument(skip(self))]
	async fn create_player(&self, new_player: &NewPlayer) -> Result<JsonValue> {
		let url = self.players_url();
		debug!(%url, "Creating player.");

		// `.json()` sets `Content-Type: application/json` for us.
		let request = self.http.post(&url).json(new_player);

		async { parse_envelope(&url, &self.fetch(request, &url).await?) }
			.await
			.map_err(|error| {
				error!(%error, "Something went wrong adding that player!");
				error
			})
	}

	#[tracing::instrument(skip(self))]
	async fn delete_player(&self, id: &Id) -> Result<JsonValue> {
		let url = self.player_url(id);
		debug!(%url, "Deleting player.");

		async { parse_envelope(&url, &self.fetch(self.http.delete(&url), &url).await?) }
			.await
			.map_err(|error| {
				error!(%error, %id, "Trouble removing player from the roster!");
				error
			})
	}
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
	data: T,
}

#[derive(Debug, Deserialize)]
struct PlayersData {
	players: Vec<Player>,
}

#[derive(Debug, Deserialize)]
struct PlayerData {
	#[serde(default)]
	player: Option<Player>,
}

/// Parses any response body and turns `success: false` into [`Error::Rejected`].
pub fn parse_envelope(url: &str, body: &str) -> Result<JsonValue> {
	let json = serde_json::from_str::<JsonValue>(body)
		.map_err(|source| Error::Parse { url: url.to_owned(), source })?;

	if json.get("success").and_then(JsonValue::as_bool) == Some(false) {
		let message = json
			.get("error")
			.and_then(|error| error.get("message"))
			.and_then(JsonValue::as_str)
			.unwrap_or("no reason given");

		return Err(Error::Rejected(message.to_owned()));
	}

	Ok(json)
}

fn parse_data<T: DeserializeOwned>(url: &str, body: &str) -> Result<T> {
	let json = parse_envelope(url, body)?;

	serde_json::from_value::<Envelope<T>>(json)
		.map(|envelope| envelope.data)
		.map_err(|source| Error::Parse { url: url.to_owned(), source })
}

/// Parses the body of `GET players`.
pub fn parse_players(url: &str, body: &str) -> Result<Vec<Player>> {
	parse_data::<PlayersData>(url, body).map(|data| data.players)
}

/// Parses the body of `GET players/{id}`.
pub fn parse_player(url: &str, id: &Id, body: &str) -> Result<Player> {
	parse_data::<PlayerData>(url, body)?
		.player
		.ok_or_else(|| Error::PlayerNotFound(id.clone()))
}
