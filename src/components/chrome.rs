use super::*;
use crate::session;
use crate::store::*;
use crate::wallet::format_address;
use leptos::*;
use thaw::{Button, ButtonVariant};

#[component]
fn AccountButton() -> impl IntoView {
	let settings: SharedSettings = expect_context();
	let points: SharedPoints = expect_context();
	let notifier: Notifier = expect_context();
	let popover_open = create_rw_signal(false);

	let size = Signal::derive(move || settings.with(|s| s.button_size.thaw()));
	let account = move || settings.with(|s| s.connected_account.clone());

	let connect = Callback::new(move |_: ev::MouseEvent| {
		spawn_local(session::connect(settings, points, notifier));
	});
	let disconnect = Callback::new(move |_: ev::MouseEvent| {
		popover_open.set(false);
		session::disconnect(settings, points, notifier);
	});
	let toggle_popover =
		Callback::new(move |_: ev::MouseEvent| popover_open.update(|open| *open = !*open));

	view! {
		<Show
			when=move || settings.with(ChromeSettings::is_connected)
			fallback=move || {
				view! {
					<Button
						size=size
						style=Signal::derive(move || settings.with(|s| format!("background-color: {};", s.button_color)))
						on_click=connect
					>
						"Connect Wallet"
					</Button>
				}
			}
		>
			<div class="AccountButton" style="position: relative;">
				<Button
					variant=ButtonVariant::Outlined
					size=size
					style=Signal::derive(move || settings.with(|s| format!("border-color: {0}; color: {0};", s.button_color)))
					on_click=toggle_popover
				>
					{move || format_address(&account())}
				</Button>
				<Show when=move || popover_open.get()>
					<div class="AccountPopover">
						<div>"Your wallet is connected."</div>
						<Button size=thaw::ButtonSize::Tiny color=thaw::ButtonColor::Error on_click=disconnect>
							"Disconnect"
						</Button>
					</div>
				</Show>
			</div>
		</Show>
	}
}

#[component]
fn TopBar() -> impl IntoView {
	let settings: SharedSettings = expect_context();

	view! {
		<div
			class="TopBar"
			style:height=move || settings.with(|s| format!("{}px", s.topnav_height))
			style:background-color=move || settings.with(|s| s.top_nav_color.clone())
			style:order=move || if settings.with(|s| s.is_header_top) { "0" } else { "2" }
		>
			<button
				class="Burger"
				class:open=move || settings.with(|s| s.side_nav_open)
				on:click=move |_| settings.update(|s| s.side_nav_open = !s.side_nav_open)
			>
				"☰"
			</button>
			<span class="Title">"THE IDLE FOX"</span>
			<AccountButton/>
		</div>
	}
}

#[component]
fn SideBar() -> impl IntoView {
	let settings: SharedSettings = expect_context();

	view! {
		<aside
			class="SideBar"
			style:width=move || settings.with(|s| format!("{}px", s.side_nav_width))
			style:background-color=move || settings.with(|s| s.side_nav_color.clone())
			style:order=move || if settings.with(|s| s.is_side_nav_left) { "0" } else { "2" }
		>
			<ColorControls/>
			<SizeControls/>
			<PositionControls/>
		</aside>
	}
}

/// The page frame: a header or footer bar, an optional side panel and the main area.
#[component]
pub fn Chrome(children: Children) -> impl IntoView {
	let settings: SharedSettings = expect_context();

	view! {
		<div class="Chrome">
			<TopBar/>
			<div class="Wrapper" style:order="1">
				<Show when=move || settings.with(|s| s.side_nav_open)>
					<SideBar/>
				</Show>
				<main
					class="Main"
					style:order="1"
					style:background-color=move || settings.with(|s| s.canvas_color.clone())
					style:height=move || settings.with(|s| format!("calc(100vh - {}px)", s.topnav_height))
				>
					{children()}
				</main>
			</div>
		</div>
	}
}
