use {
	super::{colors, images::ImageCache, surface::GuiSurface, tab::Tab},
	crate::logger::{
		self,
		logs::{self, Log},
		LogReceiver, LOG_CHANNEL,
	},
	color_eyre::{eyre::eyre, Result},
	eframe::{
		egui::{
			self, style::Selection, Button, CentralPanel, ComboBox, Layout, RichText, ScrollArea,
			SidePanel, Style, TextEdit, TextStyle, TopBottomPanel, Ui, Visuals, Window,
		},
		emath::Align,
		epaint::{FontFamily, FontId},
		CreationContext, HardwareAcceleration, NativeOptions, Theme,
	},
	egui_extras::{Column, TableBuilder},
	egui_notify::Toasts,
	puppy_bowl_client::{
		api::Client,
		page::{ActionControl, OverlayId, PageHandle, PlayerCard},
		player::{Id, Status},
		views, Config,
	},
	std::{collections::BTreeMap, future::Future, sync::Arc, time::Duration},
	tokio::runtime::Handle,
	tracing::{debug, info, warn},
	url::Url,
};

pub struct RosterGui {
	api: Arc<Client>,
	page: PageHandle,
	runtime: Handle,
	base_url: Url,
	images: ImageCache,

	pub current_tab: Tab,
	toasts: Toasts,

	pub logs: LogReceiver,
	pub log_buf: Vec<Log>,
}

impl RosterGui {
	pub const APP_NAME: &str = "Puppy Bowl";
	pub const DEFAULT_SPACING: f32 = 8.0;
	pub const CARD_WIDTH: f32 = 260.0;
	pub const NOTICE_DURATION: Duration = Duration::from_secs(6);
	pub const MAX_LOGS: usize = 512;

	#[tracing::instrument(name = "Initializing GUI")]
	pub fn init(config: Config) -> Result<()> {
		let base_url = config.base_url()?;
		info!(%base_url, "Using roster service.");

		let api = Arc::new(Client::new(base_url.clone()));
		let runtime = Handle::current();

		let gui = Self {
			images: ImageCache::new(Arc::clone(&api), runtime.clone()),
			api,
			page: PageHandle::new(),
			runtime,
			base_url,
			current_tab: Tab::Roster,
			toasts: Toasts::default(),
			logs: LOG_CHANNEL.subscribe(),
			log_buf: Vec::with_capacity(Self::MAX_LOGS * 2),
		};

		let native_options = NativeOptions {
			always_on_top: false,
			decorated: true,
			fullscreen: false,
			resizable: true,
			vsync: true,
			hardware_acceleration: HardwareAcceleration::Preferred,
			follow_system_theme: false,
			default_theme: Theme::Dark,
			centered: true,
			initial_window_size: Some(egui::vec2(1280.0, 800.0)),
			..Default::default()
		};

		eframe::run_native(
			Self::APP_NAME,
			native_options,
			Box::new(|ctx| {
				Self::load_style(ctx);
				Self::load_visuals(ctx);
				gui.bootstrap(&ctx.egui_ctx);
				Box::new(gui)
			}),
		)
		.map_err(|err| eyre!("Failed to run GUI: {err}"))
	}

	#[tracing::instrument(skip(ctx))]
	fn load_style(ctx: &CreationContext) {
		ctx.egui_ctx.set_style(Style {
			text_styles: BTreeMap::from_iter([
				(TextStyle::Heading, FontId::new(28.0, FontFamily::Proportional)),
				(TextStyle::Body, FontId::new(18.0, FontFamily::Proportional)),
				(TextStyle::Button, FontId::new(18.0, FontFamily::Proportional)),
				(TextStyle::Small, FontId::new(14.0, FontFamily::Proportional)),
				(TextStyle::Monospace, FontId::new(16.0, FontFamily::Monospace)),
			]),
			..Default::default()
		});
	}

	#[tracing::instrument(skip(ctx))]
	fn load_visuals(ctx: &CreationContext) {
		ctx.egui_ctx.set_visuals(Visuals {
			dark_mode: true,
			override_text_color: Some(colors::TEXT),
			selection: Selection {
				bg_fill: colors::SURFACE2,
				..Default::default()
			},
			hyperlink_color: colors::MAUVE,
			faint_bg_color: colors::MANTLE,
			extreme_bg_color: colors::CRUST,
			code_bg_color: colors::MANTLE,
			warn_fg_color: colors::PEACH,
			error_fg_color: colors::RED,
			window_fill: colors::BASE,
			panel_fill: colors::MANTLE,
			button_frame: true,
			slider_trailing_fill: true,
			..Default::default()
		});
	}

	fn surface(&self, ctx: &egui::Context) -> GuiSurface {
		GuiSurface::new(self.page.clone(), ctx.clone())
	}

	/// Runs a handler in the background. Failures have already been shown to the user by the
	/// time the handler returns.
	fn spawn<F>(&self, handler: F)
	where
		F: Future<Output = puppy_bowl_client::Result<()>> + Send + 'static,
	{
		self.runtime.spawn(async move {
			if let Err(error) = handler.await {
				debug!(%error, "Handler gave up.");
			}
		});
	}

	fn bootstrap(&self, ctx: &egui::Context) {
		let (api, surface) = (Arc::clone(&self.api), self.surface(ctx));
		self.spawn(async move { views::bootstrap(&*api, &surface).await });
	}

	fn dispatch(&self, ctx: &egui::Context, control: ActionControl) {
		let (api, surface) = (Arc::clone(&self.api), self.surface(ctx));
		self.spawn(async move { views::dispatch(&*api, &surface, &control).await });
	}

	fn submit(&self, ctx: &egui::Context) {
		let (api, surface) = (Arc::clone(&self.api), self.surface(ctx));
		self.spawn(async move { views::form::submit(&*api, &surface).await });
	}
}

// {{{ Roster Tab
impl RosterGui {
	pub fn panel_form(&mut self, ctx: &egui::Context) {
		SidePanel::right("panel-form")
			.resizable(false)
			.min_width(Self::CARD_WIDTH + Self::DEFAULT_SPACING * 4.0)
			.show(ctx, |ui| {
				if self.render_form(ui) {
					self.submit(ctx);
				}
			});
	}

	/// Returns whether the user submitted the form.
	fn render_form(&mut self, ui: &mut Ui) -> bool {
		let mut page = self.page.lock();
		let Some(form) = page.form_mut() else {
			return false;
		};

		ui.add_space(Self::DEFAULT_SPACING);
		ui.label(RichText::new(puppy_bowl_client::page::CreationForm::HEADING).heading());
		ui.add_space(Self::DEFAULT_SPACING);

		ui.label("Name:");
		TextEdit::singleline(&mut form.name)
			.hint_text("required")
			.show(ui);

		ui.label("Breed:");
		TextEdit::singleline(&mut form.breed)
			.hint_text("required")
			.show(ui);

		ui.label("Status:");
		ComboBox::from_id_source("form-status")
			.selected_text(form.status.label())
			.show_ui(ui, |ui| {
				for status in Status::ALL {
					let label = status.label().to_owned();
					ui.selectable_value(&mut form.status, status, label);
				}
			});

		ui.label("Image URL:");
		TextEdit::singleline(&mut form.image_url)
			.hint_text("required")
			.show(ui);

		ui.add_space(Self::DEFAULT_SPACING);

		let text = RichText::new("Add Player").color(colors::GREEN);
		ui.add(Button::new(text).fill(colors::SURFACE2))
			.clicked()
	}

	pub fn panel_center(&mut self, ctx: &egui::Context) {
		CentralPanel::default().show(ctx, |ui| match self.current_tab {
			Tab::Roster => self.render_roster(ui),
			Tab::Logs => self.render_logs(ui),
		});
	}

	fn render_roster(&mut self, ui: &mut Ui) {
		let cards = self.page.lock().cards().to_vec();

		if cards.is_empty() {
			ui.vertical_centered(|ui| {
				ui.label(RichText::new("No players on the roster.").color(colors::SUBTEXT0));
			});
			return;
		}

		let mut clicked = None;

		ScrollArea::vertical().show(ui, |ui| {
			ui.horizontal_wrapped(|ui| {
				for card in &cards {
					if let Some(control) = Self::render_card(ui, card, &self.images) {
						clicked = Some(control);
					}
				}
			});
		});

		if let Some(control) = clicked {
			self.dispatch(ui.ctx(), control);
		}
	}

	fn render_card(ui: &mut Ui, card: &PlayerCard, images: &ImageCache) -> Option<ActionControl> {
		let mut clicked = None;

		ui.group(|ui| {
			ui.set_width(Self::CARD_WIDTH);
			ui.vertical(|ui| {
				ui.label(RichText::new(&card.name).color(colors::SAPPHIRE).heading());
				images.show(ui, &card.image_url);
				ui.label(format!("Breed: {}", card.breed));
				ui.label(format!("Status: {}", card.status));

				ui.add_space(Self::DEFAULT_SPACING);

				for control in &card.controls {
					let button = Button::new(control.action.label()).fill(colors::SURFACE0);
					if ui.add(button).clicked() {
						clicked = Some(control.clone());
					}
				}
			});
		});

		clicked
	}

	/// The detail window. Closing it only ever removes this one overlay.
	pub fn panel_overlay(&mut self, ctx: &egui::Context) {
		let current = self
			.page
			.lock()
			.overlay()
			.map(|(id, overlay)| (id, overlay.clone()));

		let Some((id, overlay)) = current else {
			return;
		};

		let subject = &overlay.subject;
		let optional = |id: &Option<Id>| {
			id.as_ref()
				.map(ToString::to_string)
				.unwrap_or_else(|| String::from("none"))
		};

		let mut open = true;
		let mut dismissed = false;

		Window::new(RichText::new(&subject.name).color(colors::LAVENDER))
			.id(egui::Id::new(("player-details", id)))
			.open(&mut open)
			.collapsible(false)
			.resizable(false)
			.show(ctx, |ui| {
				ui.label(format!("Breed: {}", subject.breed));
				ui.label(format!("Status: {}", subject.status));
				ui.label(format!("Team ID: {}", optional(&subject.team_id)));
				ui.label(format!("Cohort ID: {}", optional(&subject.cohort_id)));

				ui.add_space(Self::DEFAULT_SPACING);
				ui.label(RichText::new("Team Members:").color(colors::MAUVE));
				ui.label(overlay.team_line());
				ui.add_space(Self::DEFAULT_SPACING);

				if ui
					.add(Button::new("Close").fill(colors::SURFACE2))
					.clicked()
				{
					dismissed = true;
				}
			});

		if !open || dismissed {
			self.dismiss(id);
		}
	}

	fn dismiss(&self, id: OverlayId) {
		if !views::detail::dismiss(&self.page, id) {
			debug!(?id, "Overlay was already gone.");
		}
	}

	pub fn show_notices(&mut self, ctx: &egui::Context) {
		let notices = self.page.lock().take_notices();

		for notice in notices {
			self.toasts
				.error(notice)
				.set_duration(Some(Self::NOTICE_DURATION));
		}

		self.toasts.show(ctx);
	}
}
// }}}

// {{{ Log Tab
impl RosterGui {
	/// Runs every frame so the channel never fills up while another tab is open.
	pub fn collect_logs(&mut self) {
		let skipped = logger::drain_into(&mut self.logs, &mut self.log_buf, Self::MAX_LOGS);

		if skipped > 0 {
			warn!(skipped, "Dropped logs that arrived faster than the GUI could keep up.");
		}
	}

	fn render_logs(&mut self, ui: &mut Ui) {
		TableBuilder::new(ui)
			.striped(true)
			.resizable(false)
			.stick_to_bottom(true)
			.cell_layout(Layout::left_to_right(Align::Center))
			.column(Column::auto())
			.column(Column::auto())
			.column(Column::auto())
			.column(Column::remainder())
			.body(|body| {
				body.rows(24.0, self.log_buf.len(), |idx, mut row| {
					let Some(log) = self.log_buf.get(idx) else {
						return;
					};

					row.col(|ui| {
						ui.label(RichText::new(log.local_time()).color(colors::MAUVE).monospace());
					});

					row.col(|ui| {
						let color = match log.level {
							logs::Level::Trace => colors::TEAL,
							logs::Level::Debug => colors::BLUE,
							logs::Level::Info => colors::GREEN,
							logs::Level::Warn => colors::YELLOW,
							logs::Level::Error => colors::RED,
						};

						ui.label(RichText::new(format!("{:5?}", log.level)).color(color).monospace());
					});

					row.col(|ui| {
						if let Some(target) = log.target() {
							ui.label(RichText::new(target).color(colors::MAROON));
						}
					});

					row.col(|ui| {
						ui.label(log.message());

						let extra = log.extra_fields();
						if !extra.is_empty() {
							ui.label(
								RichText::new(format!("{{ {extra} }}"))
									.color(colors::SURFACE1)
									.italics(),
							);
						}
					});
				});
			});
	}
}
// }}}

// {{{ Header Panel
impl RosterGui {
	pub fn panel_header(&mut self, ctx: &egui::Context) {
		TopBottomPanel::top("panel-header").show(ctx, |ui| {
			ui.horizontal(|ui| {
				ui.selectable_value(&mut self.current_tab, Tab::Roster, "Roster");
				ui.selectable_value(&mut self.current_tab, Tab::Logs, "Logs");
			});

			ui.vertical_centered(|ui| {
				let header_text = RichText::new("Puppy Bowl")
					.color(colors::PEACH)
					.heading();

				ui.label(header_text);
			});
		});
	}
}
// }}}

// {{{ Bottom Panel
impl RosterGui {
	pub fn panel_bottom(&mut self, ctx: &egui::Context) {
		TopBottomPanel::bottom("panel-bottom").show(ctx, |ui| {
			ui.horizontal(|ui| {
				let players = self.page.lock().cards().len();
				ui.label(RichText::new(format!("{players} players")).color(colors::GREEN));
				ui.separator();
				ui.label(RichText::new(self.base_url.as_str()).color(colors::SUBTEXT0).small());
			});
		});
	}
}
// }}}

// vim: fdm=marker fdl=0
