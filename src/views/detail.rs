use {
	super::report,
	crate::{
		api::RosterApi,
		page::{DetailOverlay, OverlayId, Surface},
		player::{Id, Player},
		Error, Result,
	},
	tracing::{debug, info},
};

/// Everyone in `roster` who plays on `subject`'s team.
///
/// The subject is part of its own team. Players without a team are grouped together, so an
/// unassigned subject gets every other unassigned player.
pub fn teammates<'a>(subject: &Player, roster: &'a [Player]) -> Vec<&'a Player> {
	roster
		.iter()
		.filter(|player| player.team_id == subject.team_id)
		.collect()
}

pub fn build(subject: Player, roster: &[Player]) -> DetailOverlay {
	let teammates = teammates(&subject, roster)
		.into_iter()
		.map(|player| player.name.clone())
		.collect();

	DetailOverlay { subject, teammates }
}

/// Fetches a player and the roster and overlays the player's details.
///
/// Nothing is shown if either fetch fails. If the player's card disappeared while the requests
/// were in flight, the result is dropped and `Ok(None)` is returned.
#[tracing::instrument(skip(api, surface))]
pub async fn open<A, S>(api: &A, surface: &S, id: &Id) -> Result<Option<OverlayId>>
where
	A: RosterApi + ?Sized,
	S: Surface + ?Sized,
{
	let overlay = async {
		let subject = api.get_player(id).await?;
		let roster = api.list_players().await?;
		Ok::<_, Error>(build(subject, &roster))
	}
	.await
	.map_err(|error| {
		report(surface, &error);
		error
	})?;

	if !surface.has_card(&overlay.subject.id) {
		debug!(%id, "Player is no longer displayed; dropping details.");
		return Ok(None);
	}

	info!(%id, teammates = overlay.teammates.len(), "Showing player details.");
	Ok(Some(surface.append_overlay(overlay)))
}

/// Closes the overlay behind a dismiss control.
pub fn dismiss<S>(surface: &S, overlay: OverlayId) -> bool
where
	S: Surface + ?Sized,
{
	surface.remove_overlay(overlay)
}
