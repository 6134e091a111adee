pub mod logs;

use {
	lazy_static::lazy_static,
	logs::Log,
	std::io::{stderr, Write},
	tokio::sync::broadcast::{self, error::TryRecvError},
	tracing_subscriber::fmt::MakeWriter,
};

lazy_static! {
	/// Global [`broadcast::Sender`] that [`tracing-subscriber`] can send logs to.
	/// The GUI subscribes to it to fill its Logs tab.
	pub static ref LOG_CHANNEL: broadcast::Sender<Log> = broadcast::channel(1024).0;
}

pub type LogReceiver = broadcast::Receiver<Log>;

/// Moves every pending log from `receiver` into `buf`, keeping at most `max` of the newest ones.
/// Logs that were overwritten before we got to them are skipped; their count is returned.
pub fn drain_into(receiver: &mut LogReceiver, buf: &mut Vec<Log>, max: usize) -> u64 {
	let mut skipped = 0;

	loop {
		match receiver.try_recv() {
			Ok(log) => buf.push(log),
			Err(TryRecvError::Lagged(count)) => skipped += count,
			Err(TryRecvError::Empty | TryRecvError::Closed) => break,
		}
	}

	// Truncate old logs
	if let Some(overflow) = buf.len().checked_sub(max) {
		buf.drain(..overflow);
	}

	skipped
}

pub struct Logger {
	pub sender: &'static broadcast::Sender<Log>,
}

impl Logger {
	pub fn new() -> Self {
		Self { sender: &LOG_CHANNEL }
	}
}

impl<'w> MakeWriter<'w> for Logger {
	type Writer = Self;

	fn make_writer(&'w self) -> Self::Writer {
		Self::new()
	}
}

impl Write for Logger {
	fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
		use std::io::{Error, ErrorKind};

		stderr().write_all(buf)?;

		let log = Log::try_from(buf).map_err(|err| Error::new(ErrorKind::InvalidData, err))?;

		// If this fails, there are no active receivers. This is totally fine though and we can
		// safely ignore it.
		_ = self.sender.send(log);

		Ok(buf.len())
	}

	fn flush(&mut self) -> std::io::Result<()> {
		stderr().flush()
	}
}
