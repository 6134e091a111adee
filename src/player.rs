use {
	crate::{Error, Result},
	serde::{Deserialize, Deserializer, Serialize, Serializer},
	std::{fmt, str::FromStr},
};

/// Opaque identifier for players, teams and cohorts.
///
/// The service sends ids as numbers, but action controls carry them as text. Both forms end up in
/// the same canonical representation so comparisons never depend on where an id came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(String);

impl Id {
	pub fn new(id: impl Into<String>) -> Self {
		let id: String = id.into();
		Self(id.trim().to_owned())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for Id {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<i64> for Id {
	fn from(id: i64) -> Self {
		Self(id.to_string())
	}
}

impl From<&str> for Id {
	fn from(id: &str) -> Self {
		Self::new(id)
	}
}

impl<'de> Deserialize<'de> for Id {
	fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		#[derive(Deserialize)]
		#[serde(untagged)]
		enum RawId {
			Number(i64),
			Text(String),
		}

		Ok(match RawId::deserialize(deserializer)? {
			RawId::Number(id) => Self::from(id),
			RawId::Text(id) => Self::new(id),
		})
	}
}

impl Serialize for Id {
	fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		self.0.serialize(serializer)
	}
}

/// Where a player currently plays.
///
/// The form only ever offers [`Status::ALL`]. Records written by other clients may carry anything,
/// and those are kept as [`Status::Other`] so they can still be displayed.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub enum Status {
	Field,
	#[default]
	Bench,
	Other(String),
}

impl Status {
	pub const ALL: [Self; 2] = [Self::Field, Self::Bench];

	pub fn as_str(&self) -> &str {
		match self {
			Self::Field => "field",
			Self::Bench => "bench",
			Self::Other(status) => status,
		}
	}

	pub fn label(&self) -> &str {
		match self {
			Self::Field => "Field",
			Self::Bench => "Bench",
			Self::Other(status) => status,
		}
	}
}

impl fmt::Display for Status {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Status {
	type Err = String;

	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"field" => Ok(Self::Field),
			"bench" => Ok(Self::Bench),
			status => Err(format!("`{status}` is not a valid status")),
		}
	}
}

impl<'de> Deserialize<'de> for Status {
	fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		Ok(match Option::<String>::deserialize(deserializer)? {
			None => Self::default(),
			Some(status) => status
				.parse()
				.unwrap_or(Self::Other(status)),
		})
	}
}

impl Serialize for Status {
	fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(self.as_str())
	}
}

/// `null` and missing text both read as an empty string.
fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
	D: Deserializer<'de>,
{
	Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A roster entry as the service returns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
	pub id: Id,
	#[serde(default, deserialize_with = "lenient_text")]
	pub name: String,
	#[serde(default, deserialize_with = "lenient_text")]
	pub breed: String,
	#[serde(default)]
	pub status: Status,
	#[serde(default, deserialize_with = "lenient_text")]
	pub image_url: String,
	#[serde(default)]
	pub team_id: Option<Id>,
	#[serde(default)]
	pub cohort_id: Option<Id>,
}

/// The fields a client is allowed to set when creating a player.
///
/// Field order matters: this is serialized as the request body verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPlayer {
	pub name: String,
	pub breed: String,
	pub status: Status,
	pub image_url: String,
}

impl NewPlayer {
	/// Builds a submission from raw form input, rejecting blank required fields. Values are sent
	/// exactly as typed.
	pub fn from_input(name: &str, breed: &str, status: Status, image_url: &str) -> Result<Self> {
		let required = |field: &'static str, value: &str| {
			if value.trim().is_empty() {
				Err(Error::MissingField(field))
			} else {
				Ok(value.to_owned())
			}
		};

		Ok(Self {
			name: required("name", name)?,
			breed: required("breed", breed)?,
			status,
			image_url: required("imageUrl", image_url)?,
		})
	}

	/// Whether `player` carries the fields this submission asked for.
	pub fn matches(&self, player: &Player) -> bool {
		player.name == self.name
			&& player.breed == self.breed
			&& player.status == self.status
			&& player.image_url == self.image_url
	}
}
