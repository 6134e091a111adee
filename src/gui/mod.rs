mod colors;
mod images;
mod surface;
mod tab;

mod roster_gui;
pub use roster_gui::RosterGui;

use {eframe::egui, tracing::info};

impl eframe::App for RosterGui {
	fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
		self.collect_logs();

		// Side and top/bottom panels have to claim their space before the central one.
		self.panel_header(ctx);
		self.panel_bottom(ctx);
		self.panel_form(ctx);
		self.panel_center(ctx);
		self.panel_overlay(ctx);
		self.show_notices(ctx);
	}

	fn on_exit(&mut self, _glow_ctx: Option<&eframe::glow::Context>) {
		info!("Goodbye.");
	}

	fn clear_color(&self, visuals: &egui::Visuals) -> [f32; 4] {
		visuals
			.window_fill()
			.to_normalized_gamma_f32()
	}
}
