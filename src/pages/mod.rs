use crate::components::*;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn Home() -> impl IntoView {
	view! {
		<Title text="Home"/>
		<Chrome>
			<div class="Home">
				<DrawingSurface/>
				<DancingFigure/>
			</div>
		</Chrome>
	}
}

#[component]
pub fn NotFound() -> impl IntoView {
	let path = use_location().pathname.get();

	view! {
		<Title text="Not found"/>
		<div class="NotFound">
			<div>{ format!("Not found: {path}") }</div>
			<A href="/">Return home</A>
		</div>
	}
}
