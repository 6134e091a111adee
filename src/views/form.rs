use {
	super::{list, report},
	crate::{
		api::RosterApi,
		page::{CreationForm, Surface},
		player::NewPlayer,
		Error, Result,
	},
	tracing::{info, warn},
};

/// Shows an empty creation form with `bench` pre-selected.
pub fn render<S>(surface: &S)
where
	S: Surface + ?Sized,
{
	surface.replace_form(CreationForm::default());
}

/// Submits the form: create the player, re-render the roster, then clear the inputs.
///
/// If validation or creation fails, the inputs are kept so the user can try again.
#[tracing::instrument(skip_all)]
pub async fn submit<A, S>(api: &A, surface: &S) -> Result<()>
where
	A: RosterApi + ?Sized,
	S: Surface + ?Sized,
{
	let Some(form) = surface.form() else {
		warn!("Submitted without a form on the page.");
		return Ok(());
	};

	let created = async {
		let new_player = NewPlayer::from_input(&form.name, &form.breed, form.status.clone(), &form.image_url)?;
		api.create_player(&new_player).await?;
		Ok::<_, Error>(new_player)
	}
	.await;

	let new_player = match created {
		Ok(new_player) => new_player,
		Err(error) => {
			report(surface, &error);
			return Err(error);
		}
	};

	info!(name = %new_player.name, "Added player.");

	let refreshed = list::refresh(api, surface).await;
	surface.reset_form();
	refreshed
}
