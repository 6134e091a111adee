#![allow(dead_code)]

use {
	async_trait::async_trait,
	puppy_bowl_client::{
		api::RosterApi,
		player::{Id, NewPlayer, Player, Status},
		Error, Result,
	},
	serde_json::{json, Value as JsonValue},
	std::sync::{Mutex, MutexGuard},
};

/// In-memory stand-in for the roster service.
#[derive(Debug, Default)]
pub struct FakeApi {
	state: Mutex<State>,
}

#[derive(Debug, Default)]
pub struct State {
	pub players: Vec<Player>,
	pub next_id: i64,
	pub fail_list: bool,
	pub fail_get: bool,
	pub fail_create: bool,
	pub fail_delete: bool,
	/// Request bodies of every `create_player` call, serialized exactly as they would be sent.
	pub create_bodies: Vec<String>,
	pub calls: Vec<&'static str>,
}

impl FakeApi {
	pub fn with_players(players: Vec<Player>) -> Self {
		let next_id = players
			.iter()
			.filter_map(|player| player.id.as_str().parse::<i64>().ok())
			.max()
			.unwrap_or(0)
			+ 1;

		Self { state: Mutex::new(State { players, next_id, ..Default::default() }) }
	}

	pub fn state(&self) -> MutexGuard<'_, State> {
		self.state.lock().unwrap()
	}

	fn fail(operation: &str) -> Error {
		Error::Rejected(format!("{operation} is down"))
	}
}

#[async_trait]
impl RosterApi for FakeApi {
	async fn list_players(&self) -> Result<Vec<Player>> {
		let mut state = self.state();
		state.calls.push("list");

		if state.fail_list {
			return Err(Self::fail("list"));
		}

		Ok(state.players.clone())
	}

	async fn get_player(&self, id: &Id) -> Result<Player> {
		let mut state = self.state();
		state.calls.push("get");

		if state.fail_get {
			return Err(Self::fail("get"));
		}

		state
			.players
			.iter()
			.find(|player| &player.id == id)
			.cloned()
			.ok_or_else(|| Error::PlayerNotFound(id.clone()))
	}

	async fn create_player(&self, new_player: &NewPlayer) -> Result<JsonValue> {
		let mut state = self.state();
		state.calls.push("create");
		state
			.create_bodies
			.push(serde_json::to_string(new_player).unwrap());

		if state.fail_create {
			return Err(Self::fail("create"));
		}

		let id = Id::from(state.next_id);
		state.next_id += 1;
		state.players.push(Player {
			id: id.clone(),
			name: new_player.name.clone(),
			breed: new_player.breed.clone(),
			status: new_player.status.clone(),
			image_url: new_player.image_url.clone(),
			team_id: None,
			cohort_id: Some(Id::from(221)),
		});

		Ok(json!({ "success": true, "data": { "newPlayer": { "id": id } } }))
	}

	async fn delete_player(&self, id: &Id) -> Result<JsonValue> {
		let mut state = self.state();
		state.calls.push("delete");

		if state.fail_delete {
			return Err(Self::fail("delete"));
		}

		let before = state.players.len();
		state.players.retain(|player| &player.id != id);

		if state.players.len() == before {
			return Err(Error::PlayerNotFound(id.clone()));
		}

		Ok(json!({ "success": true, "data": null }))
	}
}

pub fn player(id: i64, name: &str, team_id: Option<i64>) -> Player {
	Player {
		id: Id::from(id),
		name: name.to_owned(),
		breed: String::from("Mutt"),
		status: Status::Bench,
		image_url: format!("http://x/{id}.png"),
		team_id: team_id.map(Id::from),
		cohort_id: Some(Id::from(221)),
	}
}

/// Rex and Fido play for team 9, Spot for team 4.
pub fn sample_roster() -> Vec<Player> {
	vec![player(1, "Rex", Some(9)), player(2, "Fido", Some(9)), player(3, "Spot", Some(4))]
}
