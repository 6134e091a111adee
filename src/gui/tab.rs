#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
	Roster,
	Logs,
}
