use super::ChromeSettings;
use crate::geom::Point;
use leptos::*;

/// The published point sequence. Written by the drawing surface, read by the figure.
#[derive(Debug, Clone, Copy)]
pub struct SharedPoints(RwSignal<Vec<Point>>);

impl SharedPoints {
	pub fn new() -> Self {
		Self(create_rw_signal(Vec::new()))
	}

	/// Replaces the shared sequence wholesale.
	pub fn publish(&self, points: Vec<Point>) {
		tracing::debug!(count = points.len(), "publishing points");
		self.0.set(points);
	}

	pub fn reset(&self) {
		self.publish(Vec::new());
	}

	pub fn signal(&self) -> Signal<Vec<Point>> {
		self.0.into()
	}
}

impl Default for SharedPoints {
	fn default() -> Self {
		Self::new()
	}
}

/// The chrome settings of the current identity.
#[derive(Debug, Clone, Copy)]
pub struct SharedSettings(RwSignal<ChromeSettings>);

impl SharedSettings {
	pub fn new(settings: ChromeSettings) -> Self {
		Self(create_rw_signal(settings))
	}

	pub fn with<O>(&self, f: impl FnOnce(&ChromeSettings) -> O) -> O {
		self.0.with(f)
	}

	pub fn with_untracked<O>(&self, f: impl FnOnce(&ChromeSettings) -> O) -> O {
		self.0.with_untracked(f)
	}

	pub fn update(&self, f: impl FnOnce(&mut ChromeSettings)) {
		self.0.update(f);
	}

	pub fn replace(&self, settings: ChromeSettings) {
		self.0.set(settings);
	}
}
