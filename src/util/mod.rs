use leptos::*;

mod result_ext;
pub use result_ext::*;

use crate::geom::SurfaceGeometry;
use glam::DVec2;

#[derive(thiserror::Error, Debug)]
#[error("javascript error: {0}")]
pub struct JsError(String);

impl From<wasm_bindgen::JsValue> for JsError {
	fn from(value: wasm_bindgen::JsValue) -> Self {
		JsError(format!("{:?}", value))
	}
}

impl JsError {
	pub fn new(message: impl Into<String>) -> Self {
		JsError(message.into())
	}
}

pub fn set_interval_and_clean_up(
	cb: impl Fn() + 'static,
	duration: std::time::Duration,
) -> Result<(), JsError> {
	let handle = set_interval_with_handle(cb, duration)?;
	Ok(on_cleanup(move || handle.clear()))
}

/// Milliseconds from the page's monotonic clock, if there is one.
pub fn now() -> Option<f64> {
	Some(web_sys::window()?.performance()?.now())
}

pub trait ClientCoordinates {
	/// The pointer position relative to the viewport.
	fn client_coordinates(&self) -> DVec2;
}

impl ClientCoordinates for web_sys::MouseEvent {
	fn client_coordinates(&self) -> DVec2 {
		DVec2::new(self.client_x() as f64, self.client_y() as f64)
	}
}

pub trait BoundingGeometry {
	/// The element's border box in viewport coordinates.
	fn bounding_geometry(&self) -> SurfaceGeometry;
}

impl BoundingGeometry for web_sys::Element {
	fn bounding_geometry(&self) -> SurfaceGeometry {
		let rect = self.get_bounding_client_rect();
		SurfaceGeometry::new(rect.left(), rect.top(), rect.width(), rect.height())
	}
}
