use crate::geom::{Point, SurfaceGeometry};
use crate::store::SharedPoints;
use crate::trace::*;
use crate::util::*;
use glam::DVec2;
use itertools::Itertools;
use leptos::*;
use leptos_use::use_resize_observer;
use wasm_bindgen::JsCast;

/// A `StrokeSurface` over a 2D canvas context.
pub struct CanvasSurface {
	canvas: web_sys::HtmlCanvasElement,
	context: web_sys::CanvasRenderingContext2d,
}

impl CanvasSurface {
	#[tracing::instrument(err, skip_all)]
	pub fn new(canvas: web_sys::HtmlCanvasElement) -> Result<Self, JsError> {
		let context = canvas
			.get_context("2d")?
			.ok_or_else(|| JsError::new("canvas has no 2d context"))?
			.dyn_into::<web_sys::CanvasRenderingContext2d>()
			.map_err(|_| JsError::new("2d context has an unexpected type"))?;
		Ok(Self { canvas, context })
	}

	fn from_node_ref(node_ref: NodeRef<html::Canvas>) -> Option<Self> {
		let canvas = node_ref.get_untracked()?;
		Self::new((*canvas).clone()).ok()
	}

	pub fn canvas(&self) -> &web_sys::HtmlCanvasElement {
		&self.canvas
	}

	/// Converts a viewport position to canvas-local coordinates.
	pub fn local_point(&self, client: DVec2) -> Point {
		self.canvas.bounding_geometry().to_local(client)
	}

	fn stroke(&self, style: StrokeStyle) {
		self.context.set_line_width(STROKE_WIDTH);
		self.context.set_stroke_style_str(&style.to_string());
		self.context.stroke();
	}
}

impl StrokeSurface for CanvasSurface {
	fn resize(&mut self, size: DVec2) {
		self.canvas.set_width(size.x.max(0.0) as u32);
		self.canvas.set_height(size.y.max(0.0) as u32);
	}

	fn clear(&mut self) {
		self.context.clear_rect(
			0.0,
			0.0,
			self.canvas.width() as f64,
			self.canvas.height() as f64,
		);
	}

	fn draw_segment(&mut self, from: Point, to: Point, style: StrokeStyle) {
		self.context.begin_path();
		self.context.move_to(from.x, from.y);
		self.context.line_to(to.x, to.y);
		self.stroke(style);
	}

	fn draw_polyline(&mut self, points: &[Point], style: StrokeStyle) {
		let Some((first, rest)) = points.split_first() else {
			return;
		};
		self.context.begin_path();
		self.context.move_to(first.x, first.y);
		for point in rest.iter().dedup() {
			self.context.line_to(point.x, point.y);
		}
		self.stroke(style);
	}
}

/// Geometry of the surface container: position from the bounding box, size from the layout box.
fn container_geometry(container: &web_sys::HtmlElement) -> SurfaceGeometry {
	let rect = container.get_bounding_client_rect();
	SurfaceGeometry::new(
		rect.left(),
		rect.top(),
		container.offset_width() as f64,
		container.offset_height() as f64,
	)
}

/// Canvas that records strokes. A click starts a stroke and the next click ends it; ending a
/// stroke publishes its sampled points.
#[component]
pub fn DrawingSurface() -> impl IntoView {
	let shared: SharedPoints = expect_context();
	let container_ref = create_node_ref::<html::Div>();
	let canvas_ref = create_node_ref::<html::Canvas>();
	let recorder = store_value(PointRecorder::new());
	let drawing = create_rw_signal(false);

	let mousedown = move |e: ev::MouseEvent| {
		let Some(mut surface) = CanvasSurface::from_node_ref(canvas_ref) else {
			return;
		};
		let at = surface.local_point(e.client_coordinates());
		let event = recorder.try_update_value(|recorder| recorder.pointer_down(at, &mut surface));
		match event {
			Some(StrokeEvent::Began) => drawing.set(true),
			Some(StrokeEvent::Ended { published }) => {
				drawing.set(false);
				shared.publish(published);
			}
			None => {}
		}
	};

	let mousemove = move |e: ev::MouseEvent| {
		if !drawing.get_untracked() {
			return;
		}
		let Some(mut surface) = CanvasSurface::from_node_ref(canvas_ref) else {
			return;
		};
		let at = surface.local_point(e.client_coordinates());
		let now = now().unwrap_or_else(|| e.time_stamp());
		recorder.update_value(|recorder| {
			recorder.pointer_move(at, now, &mut surface);
		});
	};

	create_effect(move |_| {
		let points = shared.signal().get();
		let Some(mut surface) = CanvasSurface::from_node_ref(canvas_ref) else {
			return;
		};
		recorder.update_value(|recorder| {
			recorder.sync_with_shared(&points, &mut surface);
		});
	});

	use_resize_observer(container_ref, move |_entries, _observer| {
		let Some(container) = container_ref.get_untracked() else {
			return;
		};
		let Some(mut surface) = CanvasSurface::from_node_ref(canvas_ref) else {
			return;
		};
		let geometry = container_geometry(&container);
		let remapped = recorder
			.try_update_value(|recorder| recorder.observe(geometry, &mut surface))
			.flatten();
		if let Some(published) = remapped {
			shared.publish(published);
		}
	});

	let cursor = move || if drawing.get() { "crosshair" } else { "pointer" };

	view! {
		<div class="DrawingSurface" node_ref=container_ref style="position: absolute; inset: 0;">
			<canvas
				node_ref=canvas_ref
				style:display="block"
				style:cursor=cursor
				on:mousedown=mousedown
				on:mousemove=mousemove
			/>
		</div>
	}
}
