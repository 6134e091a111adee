//! The retained display model.
//!
//! Renderers never touch a window directly. They receive a [`Surface`] and describe what should be
//! shown: a set of player cards, at most one detail overlay, the creation form and a queue of
//! notices for the user. The GUI paints whatever [`Page`] currently holds.

use {
	crate::player::{Id, Player, Status},
	std::sync::{Arc, Mutex, MutexGuard, PoisonError},
};

/// What a rendered control does when activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
	ShowDetail,
	Remove,
}

impl Action {
	pub fn label(&self) -> &'static str {
		match self {
			Self::ShowDetail => "See Details",
			Self::Remove => "Remove from Roster",
		}
	}
}

/// A clickable control bound to the player it acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionControl {
	pub action: Action,
	pub player_id: Id,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerCard {
	pub id: Id,
	pub name: String,
	pub breed: String,
	pub status: Status,
	pub image_url: String,
	pub controls: [ActionControl; 2],
}

impl From<&Player> for PlayerCard {
	fn from(player: &Player) -> Self {
		let control = |action| ActionControl { action, player_id: player.id.clone() };

		Self {
			id: player.id.clone(),
			name: player.name.clone(),
			breed: player.breed.clone(),
			status: player.status.clone(),
			image_url: player.image_url.clone(),
			controls: [control(Action::ShowDetail), control(Action::Remove)],
		}
	}
}

/// Identifies one overlay instance, so a stale dismiss can't close a newer overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OverlayId(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailOverlay {
	pub subject: Player,
	pub teammates: Vec<String>,
}

impl DetailOverlay {
	pub fn team_line(&self) -> String {
		self.teammates.join(", ")
	}
}

/// Input state of the creation form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreationForm {
	pub name: String,
	pub breed: String,
	pub status: Status,
	pub image_url: String,
}

impl CreationForm {
	pub const HEADING: &str = "Add a new player";

	pub fn reset(&mut self) {
		*self = Self::default();
	}
}

/// The operations renderers may perform on the display.
pub trait Surface: Send + Sync {
	/// Throws away all cards (and any overlay living among them) and shows `cards` instead.
	fn replace_roster(&self, cards: Vec<PlayerCard>);

	/// Whether a card for `id` is currently shown.
	fn has_card(&self, id: &Id) -> bool;

	/// Shows `overlay`, replacing any overlay that is already open.
	fn append_overlay(&self, overlay: DetailOverlay) -> OverlayId;

	/// Removes the overlay with the given id. Returns `false` if it is already gone.
	fn remove_overlay(&self, id: OverlayId) -> bool;

	/// Installs a fresh form.
	fn replace_form(&self, form: CreationForm);

	/// Current form input, if a form is shown.
	fn form(&self) -> Option<CreationForm>;

	/// Clears the form's inputs back to their defaults.
	fn reset_form(&self);

	/// Shows an error to the user.
	fn notify(&self, message: String);
}

#[derive(Debug, Default)]
pub struct Page {
	cards: Vec<PlayerCard>,
	overlay: Option<(OverlayId, DetailOverlay)>,
	form: Option<CreationForm>,
	notices: Vec<String>,
	next_overlay_id: u64,
}

impl Page {
	pub fn cards(&self) -> &[PlayerCard] {
		&self.cards
	}

	pub fn overlay(&self) -> Option<(OverlayId, &DetailOverlay)> {
		self.overlay
			.as_ref()
			.map(|(id, overlay)| (*id, overlay))
	}

	pub fn form(&self) -> Option<&CreationForm> {
		self.form.as_ref()
	}

	pub fn form_mut(&mut self) -> Option<&mut CreationForm> {
		self.form.as_mut()
	}

	pub fn notices(&self) -> &[String] {
		&self.notices
	}

	pub fn take_notices(&mut self) -> Vec<String> {
		std::mem::take(&mut self.notices)
	}

	/// Every control currently on the page, in display order.
	pub fn controls(&self) -> impl Iterator<Item = &ActionControl> {
		self.cards
			.iter()
			.flat_map(|card| card.controls.iter())
	}
}

/// Cheaply cloneable, thread-safe handle to a [`Page`].
#[derive(Debug, Clone, Default)]
pub struct PageHandle(Arc<Mutex<Page>>);

impl PageHandle {
	pub fn new() -> Self {
		Self::default()
	}

	/// Locks the page. A panic in another holder doesn't make the display model unusable, so a
	/// poisoned lock is recovered.
	pub fn lock(&self) -> MutexGuard<'_, Page> {
		self.0
			.lock()
			.unwrap_or_else(PoisonError::into_inner)
	}
}

impl Surface for PageHandle {
	fn replace_roster(&self, cards: Vec<PlayerCard>) {
		let mut page = self.lock();
		page.cards = cards;
		page.overlay = None;
	}

	fn has_card(&self, id: &Id) -> bool {
		self.lock()
			.cards
			.iter()
			.any(|card| &card.id == id)
	}

	fn append_overlay(&self, overlay: DetailOverlay) -> OverlayId {
		let mut page = self.lock();
		let id = OverlayId(page.next_overlay_id);
		page.next_overlay_id += 1;
		page.overlay = Some((id, overlay));
		id
	}

	fn remove_overlay(&self, id: OverlayId) -> bool {
		let mut page = self.lock();
		match page.overlay {
			Some((current, _)) if current == id => {
				page.overlay = None;
				true
			}
			_ => false,
		}
	}

	fn replace_form(&self, form: CreationForm) {
		self.lock().form = Some(form);
	}

	fn form(&self) -> Option<CreationForm> {
		self.lock().form.clone()
	}

	fn reset_form(&self) {
		if let Some(form) = self.lock().form.as_mut() {
			form.reset();
		}
	}

	fn notify(&self, message: String) {
		self.lock().notices.push(message);
	}
}
