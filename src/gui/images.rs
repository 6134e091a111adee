use {
	super::colors,
	eframe::egui::{self, Label, RichText, Spinner, Ui, Vec2},
	egui_extras::RetainedImage,
	puppy_bowl_client::api::Client,
	std::{
		collections::HashMap,
		sync::{Arc, Mutex, MutexGuard, PoisonError},
	},
	tokio::runtime::Handle,
	tracing::warn,
};

enum Picture {
	Loading,
	Ready(RetainedImage),
	Broken,
}

impl Picture {
	fn decode(url: &str, bytes: &[u8]) -> Self {
		match RetainedImage::from_image_bytes(url, bytes) {
			Ok(image) => Self::Ready(image),
			Err(error) => {
				warn!(%url, %error, "Player picture is not an image we can show.");
				Self::Broken
			}
		}
	}
}

/// Player pictures, downloaded once per URL and kept for the lifetime of the window.
#[derive(Clone)]
pub struct ImageCache {
	api: Arc<Client>,
	runtime: Handle,
	pictures: Arc<Mutex<HashMap<String, Picture>>>,
}

impl ImageCache {
	pub const SIZE: Vec2 = Vec2::new(240.0, 180.0);

	pub fn new(api: Arc<Client>, runtime: Handle) -> Self {
		Self { api, runtime, pictures: Default::default() }
	}

	fn lock(pictures: &Mutex<HashMap<String, Picture>>) -> MutexGuard<'_, HashMap<String, Picture>> {
		pictures
			.lock()
			.unwrap_or_else(PoisonError::into_inner)
	}

	/// Paints the picture behind `url`, or a placeholder while it is loading or if it can't be
	/// shown at all.
	pub fn show(&self, ui: &mut Ui, url: &str) {
		if url.trim().is_empty() {
			Self::placeholder(ui, "No picture");
			return;
		}

		let mut pictures = Self::lock(&self.pictures);

		match pictures.get(url) {
			Some(Picture::Ready(image)) => {
				image.show_max_size(ui, Self::SIZE);
			}
			Some(Picture::Loading) => {
				ui.add_sized(Self::SIZE, Spinner::new());
			}
			Some(Picture::Broken) => Self::placeholder(ui, "Picture unavailable"),
			None => {
				pictures.insert(url.to_owned(), Picture::Loading);
				self.load(ui.ctx().clone(), url.to_owned());
				ui.add_sized(Self::SIZE, Spinner::new());
			}
		}
	}

	fn placeholder(ui: &mut Ui, text: &str) {
		ui.add_sized(Self::SIZE, Label::new(RichText::new(text).color(colors::SUBTEXT0).italics()));
	}

	fn load(&self, ctx: egui::Context, url: String) {
		let (api, pictures) = (Arc::clone(&self.api), Arc::clone(&self.pictures));

		self.runtime.spawn(async move {
			let picture = match api.image_bytes(&url).await {
				Ok(bytes) => Picture::decode(&url, &bytes),
				Err(error) => {
					warn!(%error, "Trouble fetching player picture!");
					Picture::Broken
				}
			};

			Self::lock(&pictures).insert(url, picture);
			ctx.request_repaint();
		});
	}
}
