use crate::figure::*;
use crate::geom::Point;
use crate::store::{SharedPoints, SharedSettings};
use crate::trace::*;
use crate::util::*;
use glam::DVec2;
use leptos::*;
use leptos_use::{use_document, use_event_listener, use_resize_observer, use_throttle_fn};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

const FIGURE_SIZE: f64 = 300.0;
/// Minimum time between two restarts of the playback loop.
const RESTART_INTERVAL_MS: f64 = 1000.0;

fn dispatch_mousemove(target: &web_sys::HtmlElement, at: DVec2) -> Result<(), JsError> {
	let init = web_sys::MouseEventInit::new();
	init.set_client_x(at.x.round() as i32);
	init.set_client_y(at.y.round() as i32);
	init.set_bubbles(true);
	init.set_cancelable(true);
	let event = web_sys::MouseEvent::new_with_mouse_event_init_dict("mousemove", &init)?;
	target.dispatch_event(&event)?;
	Ok(())
}

/// Mounts a fresh figure into `host` and drives it from `points`. Everything started here is
/// released by the cleanup of the calling scope.
#[tracing::instrument(err, skip(host, points))]
fn start_playback(
	host: &web_sys::HtmlElement,
	points: Rc<[Point]>,
	side_panel: SidePanel,
) -> Result<(), JsError> {
	let figure = Rc::new(FoxFigure::new(
		FigureOptions::builder()
			.width(FIGURE_SIZE)
			.height(FIGURE_SIZE)
			.follow_mouse(true)
			.slow_drift(false)
			.build(),
	)?);
	{
		let figure = figure.clone();
		on_cleanup(move || {
			figure.stop_animation();
			figure.container().remove();
		});
	}
	host.append_child(figure.container())?;

	let driver = Rc::new(RefCell::new(PlaybackDriver::new(side_panel)));
	let update_center = {
		let driver = driver.clone();
		let figure = figure.clone();
		move || {
			let rect = figure.container().get_bounding_client_rect();
			driver
				.borrow_mut()
				.set_figure_bounds(rect.left(), rect.top(), rect.width(), rect.height());
		}
	};
	update_center();
	{
		let update_center = update_center.clone();
		use_resize_observer(figure.container().clone(), move |_entries, _observer| {
			update_center()
		});
	}
	let resize_handle = window_event_listener(ev::resize, move |_| update_center());
	on_cleanup(move || resize_handle.remove());

	{
		let driver = driver.clone();
		let _ = use_event_listener(use_document(), ev::mouseenter, move |_| {
			driver.borrow_mut().set_hovering(true)
		});
	}
	{
		let driver = driver.clone();
		let _ = use_event_listener(use_document(), ev::mouseleave, move |_| {
			driver.borrow_mut().set_hovering(false)
		});
	}

	tracing::debug!(points = points.len(), "playback started");
	set_interval_and_clean_up(
		move || {
			let Some(target) = driver.borrow_mut().tick(&points) else {
				return;
			};
			if let Err(err) = dispatch_mousemove(figure.container(), target) {
				tracing::trace!(%err, "skipped figure update");
			}
		},
		Duration::from_millis(TICK_INTERVAL_MS),
	)
}

/// The mascot, replaying the published stroke or idling in a loop when there is none.
///
/// Playback restarts whenever the published points or the side panel change, at most once per
/// second; the latest values always get a final restart.
#[component]
pub fn DancingFigure() -> impl IntoView {
	let shared: SharedPoints = expect_context();
	let settings: SharedSettings = expect_context();
	let host_ref = create_node_ref::<html::Div>();

	let inputs = create_memo(move |_| {
		(
			shared.signal().get(),
			settings.with(|settings| settings.side_panel()),
		)
	});

	let (restarts, set_restarts) = create_signal(0_u64);
	let request_restart = use_throttle_fn(
		move || set_restarts.update(|count| *count += 1),
		RESTART_INTERVAL_MS,
	);
	create_effect(move |_| {
		inputs.with(|_| ());
		request_restart();
	});

	create_effect(move |_| {
		restarts.get();
		let Some(host) = host_ref.get() else {
			return;
		};
		let (points, side_panel) = inputs.get_untracked();
		start_playback(&host, points.into(), side_panel).ok_or_log();
	});

	view! {
		<div
			class="DancingFigure"
			node_ref=host_ref
			style="position: absolute; inset: 0; display: flex; align-items: center; justify-content: center; pointer-events: none;"
		/>
	}
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
	use super::*;
	use wasm_bindgen::JsCast;
	use wasm_bindgen_test::*;

	wasm_bindgen_test_configure!(run_in_browser);

	fn mounted_host() -> web_sys::HtmlElement {
		let host = document()
			.create_element("div")
			.unwrap()
			.dyn_into::<web_sys::HtmlElement>()
			.unwrap();
		document().body().unwrap().append_child(&host).unwrap();
		host
	}

	#[wasm_bindgen_test]
	fn teardown_detaches_the_figure() {
		let runtime = create_runtime();
		let host = mounted_host();
		let start = as_child_of_current_owner(|host: web_sys::HtmlElement| {
			start_playback(&host, Rc::from(vec![Point::new(1.0, 2.0)]), SidePanel::default())
		});

		let (started, scope) = start(host.clone());
		started.unwrap();
		assert_eq!(host.child_element_count(), 1);
		assert_eq!(
			host.first_element_child().unwrap().class_name(),
			"FoxFigure"
		);

		drop(scope);
		assert_eq!(host.child_element_count(), 0);

		host.remove();
		runtime.dispose();
	}

	#[wasm_bindgen_test]
	fn restarts_keep_a_single_figure() {
		let runtime = create_runtime();
		let host = mounted_host();
		let start = as_child_of_current_owner(|host: web_sys::HtmlElement| {
			start_playback(&host, Rc::from(Vec::new()), SidePanel::default())
		});

		let (started, first) = start(host.clone());
		started.unwrap();
		drop(first);
		let (started, second) = start(host.clone());
		started.unwrap();
		drop(second);
		let (started, third) = start(host.clone());
		started.unwrap();
		assert_eq!(host.child_element_count(), 1);

		drop(third);
		assert_eq!(host.child_element_count(), 0);

		host.remove();
		runtime.dispose();
	}
}
