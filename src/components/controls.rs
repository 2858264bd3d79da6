use super::{Panel, Setting};
use crate::store::layout::*;
use crate::store::*;
use crate::util::{JsResultExt, ResultExt};
use leptos::*;

#[component]
pub fn ColorControls() -> impl IntoView {
	let settings: SharedSettings = expect_context();

	let row = move |slot: ColorSlot| {
		let value = move || settings.with(|s| s.color(slot).to_owned());
		let input = move |e: ev::Event| {
			let value = event_target_value(&e);
			settings.update(|s| {
				s.set_color(slot, &value).ok_or_log();
			});
		};
		view! {
			<Setting name=slot.to_string()>
				<input type="color" prop:value=value on:input=input/>
			</Setting>
		}
	};

	view! {
		<Panel title="Colors" subtitle="Change the colors of the app" open=true>
			{ColorSlot::ALL.into_iter().map(row).collect_view()}
		</Panel>
	}
}

fn slider_value(e: &ev::Event) -> Option<f64> {
	event_target_value(e).parse().ok()
}

#[component]
pub fn SizeControls() -> impl IntoView {
	let settings: SharedSettings = expect_context();

	view! {
		<Panel title="Sizes" subtitle="Adjust the sizes of components">
			<Setting name=move || format!("Topnav Height: {}px", settings.with(|s| s.topnav_height))>
				<input
					type="range"
					min=*TOPNAV_HEIGHT_RANGE.start()
					max=*TOPNAV_HEIGHT_RANGE.end()
					prop:value=move || settings.with(|s| s.topnav_height)
					on:input=move |e| {
						if let Some(height) = slider_value(&e) {
							settings.update(|s| s.set_topnav_height(height));
						}
					}
				/>
			</Setting>
			<Setting name=move || format!("Sidebar Width: {}px", settings.with(|s| s.side_nav_width))>
				<input
					type="range"
					min=*SIDENAV_WIDTH_RANGE.start()
					max=*SIDENAV_WIDTH_RANGE.end()
					prop:value=move || settings.with(|s| s.side_nav_width)
					on:input=move |e| {
						if let Some(width) = slider_value(&e) {
							settings.update(|s| s.set_side_nav_width(width));
						}
					}
				/>
			</Setting>
			<Setting name=move || format!("Button Size: {}", settings.with(|s| s.button_size))>
				<input
					type="range"
					min=0
					max=100
					step=BUTTON_SIZE_STEP
					prop:value=move || settings.with(|s| s.button_size.slider_value())
					on:input=move |e| {
						if let Some(value) = slider_value(&e) {
							settings.update(|s| s.button_size = ButtonSize::from_slider(value));
						}
					}
				/>
			</Setting>
		</Panel>
	}
}

/// A list of draggable items. Dropping one item onto another moves it to that position.
#[component]
fn ReorderList<T, F>(
	#[prop(into)] items: Signal<Vec<T>>,
	on_reorder: F,
	/// Item that hosts `nested` below its label.
	#[prop(optional)]
	nested_under: Option<T>,
	#[prop(optional)] nested: Option<ViewFn>,
) -> impl IntoView
where
	T: std::fmt::Display + Clone + PartialEq + 'static,
	F: Fn(usize, usize) + Copy + 'static,
{
	let dragging = create_rw_signal(None::<usize>);
	let nested = store_value(nested_under.zip(nested));

	let item = move |(index, item): (usize, T)| {
		let label = item.to_string();
		let transfer_label = label.clone();
		let nested_view = nested.with_value(|nested| {
			nested
				.as_ref()
				.filter(|(owner, _)| *owner == item)
				.map(|(_, view)| view.run())
		});
		view! {
			<li
				class="ReorderItem"
				draggable="true"
				on:dragstart=move |e: ev::DragEvent| {
					e.stop_propagation();
					if let Some(transfer) = e.data_transfer() {
						transfer.set_data("text/plain", &transfer_label).ok_or_log_js();
					}
					dragging.set(Some(index));
				}
				on:dragover=move |e: ev::DragEvent| {
					if dragging.get_untracked().is_some() {
						e.prevent_default();
					}
				}
				on:drop=move |e: ev::DragEvent| {
					if let Some(from) = dragging.get_untracked() {
						e.prevent_default();
						e.stop_propagation();
						on_reorder(from, index);
					}
					dragging.set(None);
				}
				on:dragend=move |_| dragging.set(None)
			>
				<span>{label}</span>
				{nested_view}
			</li>
		}
	};

	view! {
		<ul class="ReorderList">
			{move || items.get().into_iter().enumerate().map(item).collect_view()}
		</ul>
	}
}

#[component]
pub fn PositionControls() -> impl IntoView {
	let settings: SharedSettings = expect_context();

	let top_level = Signal::derive(move || sections(settings.with(|s| s.is_header_top)).to_vec());
	let wrapper =
		Signal::derive(move || wrapper_sections(settings.with(|s| s.is_side_nav_left)).to_vec());

	let reorder_top_level = move |from, to| {
		let moved = reorder(&top_level.get_untracked(), from, to);
		settings.update(|s| s.is_header_top = header_on_top(&moved));
	};
	let reorder_wrapper = move |from, to| {
		let moved = reorder(&wrapper.get_untracked(), from, to);
		settings.update(|s| s.is_side_nav_left = sidebar_on_left(&moved));
	};

	view! {
		<Panel title="Positioning" subtitle="Drag and drop to reorder sections">
			<ReorderList
				items=top_level
				on_reorder=reorder_top_level
				nested_under=Section::Wrapper
				nested=ViewFn::from(move || view! { <ReorderList items=wrapper on_reorder=reorder_wrapper/> })
			/>
		</Panel>
	}
}
