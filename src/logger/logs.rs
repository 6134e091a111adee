use {
	chrono::{DateTime, Local},
	serde::{Deserialize, Serialize},
	serde_json::Value as JsonValue,
	std::collections::HashMap,
};

/// One JSON line as emitted by `tracing_subscriber::fmt().json()`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Log {
	pub level: Level,
	pub timestamp: String,
	pub fields: HashMap<String, JsonValue>,

	#[serde(flatten)]
	pub rest: JsonValue,
}

impl Log {
	pub fn message(&self) -> String {
		match self.fields.get("message") {
			Some(JsonValue::String(message)) => message.clone(),
			Some(value) => value.to_string(),
			None => String::new(),
		}
	}

	/// Every field besides `message`, as `key = value` pairs.
	pub fn extra_fields(&self) -> String {
		let mut fields = self
			.fields
			.iter()
			.filter(|(key, _)| *key != "message")
			.map(|(key, value)| match value {
				JsonValue::String(value) => format!("{key} = {value}"),
				value => format!("{key} = {value}"),
			})
			.collect::<Vec<_>>();

		fields.sort();
		fields.join(", ")
	}

	/// Local time, or the raw timestamp if it isn't RFC 3339.
	pub fn local_time(&self) -> String {
		DateTime::parse_from_rfc3339(&self.timestamp)
			.map(|timestamp| {
				timestamp
					.with_timezone(&Local)
					.format("%Y/%m/%d %H:%M:%S")
					.to_string()
			})
			.unwrap_or_else(|_| self.timestamp.clone())
	}

	pub fn target(&self) -> Option<&str> {
		self.rest.get("target")?.as_str()
	}
}

impl TryFrom<&[u8]> for Log {
	type Error = String;

	fn try_from(buf: &[u8]) -> Result<Self, Self::Error> {
		serde_json::from_slice(buf).map_err(|err| format!("Log data is not valid JSON! {err:?}"))
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
	Trace,
	Debug,
	Info,
	Warn,
	Error,
}

impl<'de> Deserialize<'de> for Level {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		Ok(match String::deserialize(deserializer)?.as_str() {
			"TRACE" => Self::Trace,
			"DEBUG" => Self::Debug,
			"INFO" => Self::Info,
			"WARN" => Self::Warn,
			"ERROR" => Self::Error,
			level => {
				return Err(serde::de::Error::invalid_value(
					serde::de::Unexpected::Str(level),
					&"expected valid RUST_LOG level",
				))
			}
		})
	}
}
