mod common;

use {
	common::{player, sample_roster, FakeApi},
	puppy_bowl_client::{
		api::RosterApi,
		page::{Action, CreationForm, PageHandle, Surface},
		player::{Id, NewPlayer, Status},
		views::{self, detail, form, list},
		Error,
	},
	std::collections::HashSet,
};

fn buddy_form() -> CreationForm {
	CreationForm {
		name: String::from("Buddy"),
		breed: String::from("Lab"),
		status: Status::Bench,
		image_url: String::from("http://x/y.png"),
	}
}

#[test]
fn renders_one_control_pair_per_player() {
	for roster in [Vec::new(), sample_roster()] {
		let page = PageHandle::new();
		list::render(&page, &roster);

		let page = page.lock();
		assert_eq!(page.cards().len(), roster.len());

		for (card, player) in page.cards().iter().zip(&roster) {
			let actions: Vec<_> = card
				.controls
				.iter()
				.map(|control| control.action)
				.collect();

			assert_eq!(actions, [Action::ShowDetail, Action::Remove]);
			assert!(card
				.controls
				.iter()
				.all(|control| control.player_id == player.id));
		}

		assert_eq!(page.controls().count(), roster.len() * 2);
	}
}

#[tokio::test]
async fn bootstrap_renders_roster_and_form() {
	let api = FakeApi::with_players(sample_roster());
	let page = PageHandle::new();

	views::bootstrap(&api, &page).await.unwrap();

	let page = page.lock();
	let names: Vec<_> = page
		.cards()
		.iter()
		.map(|card| card.name.as_str())
		.collect();

	assert_eq!(names, ["Rex", "Fido", "Spot"]);
	assert_eq!(page.form(), Some(&CreationForm::default()));
	assert!(page.notices().is_empty());
}

#[tokio::test]
async fn failed_bootstrap_shows_notice_and_form() {
	let api = FakeApi::with_players(sample_roster());
	api.state().fail_list = true;
	let page = PageHandle::new();

	let result = views::bootstrap(&api, &page).await;

	assert!(matches!(result, Err(Error::Rejected(_))));
	let page = page.lock();
	assert!(page.cards().is_empty());
	assert!(page.form().is_some());
	assert_eq!(page.notices().len(), 1);
}

#[tokio::test]
async fn details_list_the_whole_team() {
	let api = FakeApi::with_players(sample_roster());
	let page = PageHandle::new();
	views::bootstrap(&api, &page).await.unwrap();

	let overlay_id = detail::open(&api, &page, &Id::from("1"))
		.await
		.unwrap()
		.expect("overlay should be shown");

	let page = page.lock();
	let (current, overlay) = page.overlay().expect("overlay should be open");
	assert_eq!(current, overlay_id);
	assert_eq!(overlay.subject.name, "Rex");
	assert_eq!(overlay.team_line(), "Rex, Fido");
}

#[tokio::test]
async fn details_do_not_depend_on_roster_order() {
	let mut roster = sample_roster();
	roster.push(player(4, "Bolt", Some(9)));
	roster.push(player(5, "Lassie", Some(4)));
	roster.reverse();

	let api = FakeApi::with_players(roster);
	let page = PageHandle::new();
	views::bootstrap(&api, &page).await.unwrap();

	detail::open(&api, &page, &Id::from(2)).await.unwrap();

	let page = page.lock();
	let (_, overlay) = page.overlay().unwrap();
	let teammates: HashSet<_> = overlay
		.teammates
		.iter()
		.map(String::as_str)
		.collect();

	assert_eq!(teammates, HashSet::from(["Rex", "Fido", "Bolt"]));
}

#[tokio::test]
async fn failed_detail_fetch_shows_nothing() {
	let api = FakeApi::with_players(sample_roster());
	let page = PageHandle::new();
	views::bootstrap(&api, &page).await.unwrap();

	api.state().fail_list = true;
	let result = detail::open(&api, &page, &Id::from(1)).await;

	assert!(result.is_err());
	assert!(page.lock().overlay().is_none());
	assert_eq!(page.lock().notices().len(), 1);
	assert_eq!(page.lock().cards().len(), 3);
}

#[tokio::test]
async fn details_of_deleted_player_report_missing_reference() {
	let api = FakeApi::with_players(sample_roster());
	let page = PageHandle::new();
	views::bootstrap(&api, &page).await.unwrap();

	let result = detail::open(&api, &page, &Id::from(42)).await;

	assert!(matches!(result, Err(Error::PlayerNotFound(id)) if id == Id::from(42)));
	assert!(page.lock().overlay().is_none());
}

#[tokio::test]
async fn details_for_a_vanished_card_are_dropped() {
	let api = FakeApi::with_players(sample_roster());
	let page = PageHandle::new();
	// Rex exists on the server, but the page was re-rendered without him.
	list::render(&page, &sample_roster()[1..]);

	let result = detail::open(&api, &page, &Id::from(1)).await.unwrap();

	assert_eq!(result, None);
	assert!(page.lock().overlay().is_none());
}

#[tokio::test]
async fn dismiss_only_removes_the_overlay() {
	let api = FakeApi::with_players(sample_roster());
	let page = PageHandle::new();
	views::bootstrap(&api, &page).await.unwrap();
	let cards_before = page.lock().cards().to_vec();

	let overlay_id = detail::open(&api, &page, &Id::from(3))
		.await
		.unwrap()
		.unwrap();

	assert!(detail::dismiss(&page, overlay_id));
	assert!(page.lock().overlay().is_none());
	assert_eq!(page.lock().cards(), &cards_before[..]);
	assert!(!detail::dismiss(&page, overlay_id));
}

#[tokio::test]
async fn refresh_closes_open_overlay() {
	let api = FakeApi::with_players(sample_roster());
	let page = PageHandle::new();
	views::bootstrap(&api, &page).await.unwrap();
	detail::open(&api, &page, &Id::from(1)).await.unwrap();

	list::refresh(&api, &page).await.unwrap();

	assert!(page.lock().overlay().is_none());
}

#[tokio::test]
async fn submitting_the_form_creates_and_refreshes() {
	let api = FakeApi::with_players(sample_roster());
	let page = PageHandle::new();
	views::bootstrap(&api, &page).await.unwrap();
	page.replace_form(buddy_form());

	form::submit(&api, &page).await.unwrap();

	assert_eq!(
		api.state().create_bodies,
		[r#"{"name":"Buddy","breed":"Lab","status":"bench","imageUrl":"http://x/y.png"}"#]
	);
	assert_eq!(api.state().calls, ["list", "create", "list"]);

	let submitted = NewPlayer::from_input("Buddy", "Lab", Status::Bench, "http://x/y.png").unwrap();
	let roster = api.list_players().await.unwrap();
	assert!(roster.iter().any(|player| submitted.matches(player)));

	let page = page.lock();
	let buddy = page
		.cards()
		.iter()
		.find(|card| card.name == "Buddy")
		.expect("new player should be listed");

	assert_eq!(buddy.breed, "Lab");
	assert_eq!(buddy.status, Status::Bench);
	assert_eq!(buddy.image_url, "http://x/y.png");
	assert_eq!(page.form(), Some(&CreationForm::default()));
}

#[tokio::test]
async fn submitted_values_are_sent_as_typed() {
	let api = FakeApi::with_players(sample_roster());
	let page = PageHandle::new();
	views::bootstrap(&api, &page).await.unwrap();
	page.replace_form(CreationForm {
		name: String::from(" Buddy "),
		image_url: String::from("http://x/y.png "),
		..buddy_form()
	});

	form::submit(&api, &page).await.unwrap();

	assert_eq!(
		api.state().create_bodies,
		[r#"{"name":" Buddy ","breed":"Lab","status":"bench","imageUrl":"http://x/y.png "}"#]
	);
	assert!(page.lock().cards().iter().any(|card| card.name == " Buddy "));
}

#[tokio::test]
async fn blank_fields_are_not_submitted() {
	let api = FakeApi::with_players(sample_roster());
	let page = PageHandle::new();
	views::bootstrap(&api, &page).await.unwrap();
	page.replace_form(CreationForm { breed: String::new(), ..buddy_form() });

	let result = form::submit(&api, &page).await;

	assert!(matches!(result, Err(Error::MissingField("breed"))));
	assert!(api.state().create_bodies.is_empty());
	assert_eq!(page.lock().form().map(|form| form.name.as_str()), Some("Buddy"));
}

#[tokio::test]
async fn failed_creation_keeps_form_input() {
	let api = FakeApi::with_players(sample_roster());
	let page = PageHandle::new();
	views::bootstrap(&api, &page).await.unwrap();
	page.replace_form(buddy_form());
	api.state().fail_create = true;

	let result = form::submit(&api, &page).await;

	assert!(result.is_err());
	assert_eq!(page.form(), Some(buddy_form()));
	assert_eq!(page.lock().cards().len(), 3);
	assert_eq!(page.lock().notices().len(), 1);
}

#[tokio::test]
async fn removing_a_player_drops_it_from_the_roster() {
	let api = FakeApi::with_players(sample_roster());
	let page = PageHandle::new();
	views::bootstrap(&api, &page).await.unwrap();

	views::remove(&api, &page, &Id::from(2)).await.unwrap();

	let page = page.lock();
	assert!(page.cards().iter().all(|card| card.id != Id::from(2)));
	assert_eq!(page.cards().len(), 2);
}

#[tokio::test]
async fn failed_removal_leaves_roster_unchanged() {
	let api = FakeApi::with_players(sample_roster());
	let page = PageHandle::new();
	views::bootstrap(&api, &page).await.unwrap();
	api.state().fail_delete = true;

	let result = views::remove(&api, &page, &Id::from(2)).await;

	assert!(result.is_err());
	assert_eq!(page.lock().cards().len(), 3);
	assert_eq!(api.state().calls, ["list", "delete"]);
}

#[tokio::test]
async fn controls_dispatch_to_their_action() {
	let api = FakeApi::with_players(sample_roster());
	let page = PageHandle::new();
	views::bootstrap(&api, &page).await.unwrap();

	let control_for = |action: Action, name: &str| {
		let page = page.lock();
		let card = page
			.cards()
			.iter()
			.find(|card| card.name == name)
			.unwrap();

		card.controls
			.iter()
			.find(|control| control.action == action)
			.cloned()
			.unwrap()
	};

	let show_spot = control_for(Action::ShowDetail, "Spot");
	views::dispatch(&api, &page, &show_spot).await.unwrap();
	assert_eq!(
		page.lock().overlay().map(|(_, overlay)| overlay.team_line()),
		Some(String::from("Spot"))
	);

	let remove_rex = control_for(Action::Remove, "Rex");
	views::dispatch(&api, &page, &remove_rex).await.unwrap();
	assert!(page.lock().cards().iter().all(|card| card.name != "Rex"));
	assert!(page.lock().overlay().is_none());
}
