use {
	super::report,
	crate::{
		api::RosterApi,
		page::{PlayerCard, Surface},
		player::Player,
		Result,
	},
	tracing::debug,
};

/// Replaces the roster display with one card per player.
pub fn render<S>(surface: &S, roster: &[Player])
where
	S: Surface + ?Sized,
{
	debug!(count = roster.len(), "Rendering roster.");
	surface.replace_roster(roster.iter().map(PlayerCard::from).collect());
}

/// Fetches the roster and renders it. On failure the current display is left untouched.
pub async fn refresh<A, S>(api: &A, surface: &S) -> Result<()>
where
	A: RosterApi + ?Sized,
	S: Surface + ?Sized,
{
	match api.list_players().await {
		Ok(roster) => {
			render(surface, &roster);
			Ok(())
		}
		Err(error) => {
			report(surface, &error);
			Err(error)
		}
	}
}
