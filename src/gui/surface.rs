use {
	eframe::egui,
	puppy_bowl_client::{
		page::{CreationForm, DetailOverlay, OverlayId, PageHandle, PlayerCard, Surface},
		player::Id,
	},
};

/// A [`PageHandle`] that asks egui for a new frame whenever a background task changes the page.
#[derive(Clone)]
pub struct GuiSurface {
	page: PageHandle,
	ctx: egui::Context,
}

impl GuiSurface {
	pub fn new(page: PageHandle, ctx: egui::Context) -> Self {
		Self { page, ctx }
	}
}

impl Surface for GuiSurface {
	fn replace_roster(&self, cards: Vec<PlayerCard>) {
		self.page.replace_roster(cards);
		self.ctx.request_repaint();
	}

	fn has_card(&self, id: &Id) -> bool {
		self.page.has_card(id)
	}

	fn append_overlay(&self, overlay: DetailOverlay) -> OverlayId {
		let id = self.page.append_overlay(overlay);
		self.ctx.request_repaint();
		id
	}

	fn remove_overlay(&self, id: OverlayId) -> bool {
		let removed = self.page.remove_overlay(id);
		self.ctx.request_repaint();
		removed
	}

	fn replace_form(&self, form: CreationForm) {
		self.page.replace_form(form);
		self.ctx.request_repaint();
	}

	fn form(&self) -> Option<CreationForm> {
		self.page.form()
	}

	fn reset_form(&self) {
		self.page.reset_form();
		self.ctx.request_repaint();
	}

	fn notify(&self, message: String) {
		self.page.notify(message);
		self.ctx.request_repaint();
	}
}
