//! Renderers and the handlers that connect them to the roster service.
//!
//! Every handler follows the same shape: talk to the API, then describe the result on a
//! [`Surface`]. Failures are logged, shown to the user as a notice and also returned, so callers
//! can tell "nothing to show" apart from "something went wrong".

pub mod detail;
pub mod form;
pub mod list;

use {
	crate::{
		api::RosterApi,
		page::{Action, ActionControl, Surface},
		player::Id,
		Error, Result,
	},
	tracing::{error, info},
};

/// Startup sequence: show the roster, then the creation form.
///
/// A failed fetch leaves the roster empty; the form is rendered either way.
#[tracing::instrument(skip_all)]
pub async fn bootstrap<A, S>(api: &A, surface: &S) -> Result<()>
where
	A: RosterApi + ?Sized,
	S: Surface + ?Sized,
{
	let roster = list::refresh(api, surface).await;
	form::render(surface);
	roster
}

/// Runs whatever `control` stands for.
#[tracing::instrument(skip_all, fields(action = ?control.action, id = %control.player_id))]
pub async fn dispatch<A, S>(api: &A, surface: &S, control: &ActionControl) -> Result<()>
where
	A: RosterApi + ?Sized,
	S: Surface + ?Sized,
{
	match control.action {
		Action::ShowDetail => detail::open(api, surface, &control.player_id)
			.await
			.map(|_| ()),
		Action::Remove => remove(api, surface, &control.player_id).await,
	}
}

/// Deletes a player and re-renders the roster. If the deletion fails, the roster stays as it is.
#[tracing::instrument(skip(api, surface))]
pub async fn remove<A, S>(api: &A, surface: &S, id: &Id) -> Result<()>
where
	A: RosterApi + ?Sized,
	S: Surface + ?Sized,
{
	if let Err(error) = api.delete_player(id).await {
		report(surface, &error);
		return Err(error);
	}

	info!(%id, "Removed player from the roster.");
	list::refresh(api, surface).await
}

pub(crate) fn report<S>(surface: &S, error: &Error)
where
	S: Surface + ?Sized,
{
	error!(%error, "Operation failed.");
	surface.notify(error.to_string());
}
