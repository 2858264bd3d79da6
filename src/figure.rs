//! The animated mascot. Callers only ever feed it pointer events and tear it down; they never
//! look inside.

use crate::util::{ClientCoordinates, JsError, JsResultExt};
use glam::DVec2;
use leptos::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::JsCast;

/// An externally animated figure mounted into the page.
pub trait Figure {
	/// The element the figure renders into. It has to be attached by the caller.
	fn container(&self) -> &web_sys::HtmlElement;

	/// Stops every listener and timer the figure owns.
	fn stop_animation(&self);
}

#[derive(Debug, Clone, Copy, PartialEq, bon::Builder)]
pub struct FigureOptions {
	#[builder(default = 300.0)]
	pub width: f64,
	#[builder(default = 300.0)]
	pub height: f64,
	/// Turn towards `mousemove` events seen anywhere on the page.
	#[builder(default = true)]
	pub follow_mouse: bool,
	/// Sway gently on a timer.
	#[builder(default)]
	pub slow_drift: bool,
}

/// Largest head turn in degrees.
const MAX_TURN: f64 = 35.0;
/// Pixels of pointer offset per degree of head turn.
const PIXELS_PER_DEGREE: f64 = 12.0;
const DRIFT_INTERVAL: Duration = Duration::from_millis(50);
const DRIFT_STEP: f64 = 0.05;
const DRIFT_AMPLITUDE: f64 = 8.0;

const FOX_SVG: &str = r##"<svg viewBox="0 0 100 100" width="100%" height="100%" xmlns="http://www.w3.org/2000/svg">
	<polygon points="14,8 40,34 22,48" fill="#e8710a"/>
	<polygon points="86,8 60,34 78,48" fill="#e8710a"/>
	<polygon points="20,16 34,33 24,40" fill="#4a2106"/>
	<polygon points="80,16 66,33 76,40" fill="#4a2106"/>
	<polygon points="22,48 40,30 60,30 78,48 50,92" fill="#f6851b"/>
	<polygon points="22,48 50,92 34,66" fill="#d05c00"/>
	<polygon points="78,48 50,92 66,66" fill="#d05c00"/>
	<polygon points="36,64 50,92 64,64 50,72" fill="#ffffff"/>
	<circle cx="38" cy="52" r="4" fill="#1b1b1b"/>
	<circle cx="62" cy="52" r="4" fill="#1b1b1b"/>
	<polygon points="46,84 54,84 50,90" fill="#1b1b1b"/>
</svg>"##;

/// Head rotation `(yaw, pitch)` in degrees for a figure centred at `center` looking at `target`.
pub fn look_angles(center: DVec2, target: DVec2) -> DVec2 {
	((target - center) / PIXELS_PER_DEGREE).clamp(DVec2::splat(-MAX_TURN), DVec2::splat(MAX_TURN))
}

struct FoxState {
	head: web_sys::HtmlElement,
	look: Cell<DVec2>,
	drift_phase: Cell<f64>,
	drift: bool,
}

impl FoxState {
	fn render(&self) {
		let look = self.look.get();
		let sway = if self.drift {
			DRIFT_AMPLITUDE * self.drift_phase.get().sin()
		} else {
			0.0
		};
		let transform = format!(
			"perspective(600px) rotateY({}deg) rotateX({}deg)",
			look.x + sway,
			-look.y
		);
		self
			.head
			.style()
			.set_property("transform", &transform)
			.ok_or_log_js();
	}
}

/// A flat SVG fox whose head turns towards the pointer.
pub struct FoxFigure {
	container: web_sys::HtmlElement,
	stoppers: RefCell<Vec<Box<dyn FnOnce()>>>,
}

impl FoxFigure {
	#[tracing::instrument(err)]
	pub fn new(options: FigureOptions) -> Result<Self, JsError> {
		let document = document();
		let container = document
			.create_element("div")?
			.dyn_into::<web_sys::HtmlElement>()
			.map_err(|_| JsError::new("created element is not an HtmlElement"))?;
		container.set_class_name("FoxFigure");
		let style = container.style();
		style.set_property("width", &format!("{}px", options.width))?;
		style.set_property("height", &format!("{}px", options.height))?;

		let head = document
			.create_element("div")?
			.dyn_into::<web_sys::HtmlElement>()
			.map_err(|_| JsError::new("created element is not an HtmlElement"))?;
		head.style().set_property("width", "100%")?;
		head.style().set_property("height", "100%")?;
		head.set_inner_html(FOX_SVG);
		container.append_child(&head)?;

		let state = Rc::new(FoxState {
			head,
			look: Cell::new(DVec2::ZERO),
			drift_phase: Cell::new(0.0),
			drift: options.slow_drift,
		});
		state.render();

		let mut stoppers: Vec<Box<dyn FnOnce()>> = Vec::new();

		if options.follow_mouse {
			let state = state.clone();
			let container = container.clone();
			let handle = window_event_listener(ev::mousemove, move |e| {
				let rect = container.get_bounding_client_rect();
				let center = DVec2::new(
					rect.left() + rect.width() / 2.0,
					rect.top() + rect.height() / 2.0,
				);
				state.look.set(look_angles(center, e.client_coordinates()));
				state.render();
			});
			stoppers.push(Box::new(move || handle.remove()));
		}

		if options.slow_drift {
			let state = state.clone();
			let handle = set_interval_with_handle(
				move || {
					state.drift_phase.set(state.drift_phase.get() + DRIFT_STEP);
					state.render();
				},
				DRIFT_INTERVAL,
			)?;
			stoppers.push(Box::new(move || handle.clear()));
		}

		Ok(Self {
			container,
			stoppers: RefCell::new(stoppers),
		})
	}
}

impl std::fmt::Debug for FoxFigure {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str("FoxFigure")
	}
}

impl Figure for FoxFigure {
	fn container(&self) -> &web_sys::HtmlElement {
		&self.container
	}

	fn stop_animation(&self) {
		let stoppers = std::mem::take(&mut *self.stoppers.borrow_mut());
		for stop in stoppers {
			stop();
		}
	}
}

impl Drop for FoxFigure {
	fn drop(&mut self) {
		self.stop_animation();
	}
}
