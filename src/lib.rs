pub(crate) mod util;
pub use util::JsError;

mod components;
pub mod figure;
pub mod geom;
pub mod notice;
mod pages;
mod session;
pub mod store;
pub mod trace;
pub mod wallet;

use components::{Notifier, Toasts};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use store::{ChromeSettings, SharedPoints, SharedSettings};

#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let settings = SharedSettings::new(ChromeSettings::default());
	let points = SharedPoints::new();
	let notifier = Notifier::new();
	provide_context(settings);
	provide_context(points);
	provide_context(notifier);

	session::persist_changes(settings, points);
	spawn_local(session::auto_connect(settings, points, notifier));

	view! {
		<Html lang="en" dir="ltr" attr:data-theme="light"/>

		<Title formatter=|page| format!("Idle Fox - {page}")/>

		// Inject metadata in the <head> tag.
		<Meta charset="UTF-8"/>
		<Meta name="viewport" content="width=device-width, initial-scale=1.0"/>

		<Router>
			<Routes>
				<Route path="/" view=pages::Home/>
				<Route path="/*" view=pages::NotFound/>
			</Routes>
		</Router>
		<Toasts/>
	}
}
