use super::{RateGate, StrokeStyle};
use crate::geom::{Point, SurfaceGeometry};
use glam::DVec2;

/// Samples per second admitted into the published buffer.
pub const PUBLISH_RATE: f64 = 300.0;

/// Where the recorder draws. Implemented by the canvas component and by test doubles.
pub trait StrokeSurface {
	/// Resize the backing store. This may discard whatever was drawn.
	fn resize(&mut self, size: DVec2);
	fn clear(&mut self);
	fn draw_segment(&mut self, from: Point, to: Point, style: StrokeStyle);
	fn draw_polyline(&mut self, points: &[Point], style: StrokeStyle);
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
	Idle,
	Drawing { anchor: Point },
}

#[derive(Debug, Clone, PartialEq)]
pub enum StrokeEvent {
	Began,
	/// The stroke is complete and `published` should replace the shared points.
	Ended { published: Vec<Point> },
}

/// Turns pointer input over a drawing surface into a point sequence.
///
/// Two buffers are kept for the current stroke: every sample (used for drawing) and a rate-limited
/// subsequence (what gets published). Both are kept in surface-local coordinates and are remapped
/// together whenever the surface moves or changes size.
#[derive(Debug, Clone)]
pub struct PointRecorder {
	phase: Phase,
	points: Vec<Point>,
	published: Vec<Point>,
	gate: RateGate,
	geometry: Option<SurfaceGeometry>,
}

impl Default for PointRecorder {
	fn default() -> Self {
		Self::new()
	}
}

impl PointRecorder {
	pub fn new() -> Self {
		Self::with_gate(RateGate::per_second(PUBLISH_RATE))
	}

	pub fn with_gate(gate: RateGate) -> Self {
		Self {
			phase: Phase::Idle,
			points: Vec::new(),
			published: Vec::new(),
			gate,
			geometry: None,
		}
	}

	pub fn is_drawing(&self) -> bool {
		matches!(self.phase, Phase::Drawing { .. })
	}

	pub fn points(&self) -> &[Point] {
		&self.points
	}

	pub fn published(&self) -> &[Point] {
		&self.published
	}

	pub fn geometry(&self) -> Option<SurfaceGeometry> {
		self.geometry
	}

	/// A pointer press toggles between starting a new stroke and finishing the current one.
	pub fn pointer_down(&mut self, at: Point, surface: &mut impl StrokeSurface) -> StrokeEvent {
		match self.phase {
			Phase::Idle => {
				self.points.clear();
				self.published.clear();
				surface.clear();
				self.phase = Phase::Drawing { anchor: at };
				tracing::debug!(x = at.x, y = at.y, "stroke began");
				StrokeEvent::Began
			}
			Phase::Drawing { .. } => {
				self.redraw(surface);
				self.phase = Phase::Idle;
				tracing::debug!(
					points = self.points.len(),
					published = self.published.len(),
					"stroke ended"
				);
				StrokeEvent::Ended {
					published: self.published.clone(),
				}
			}
		}
	}

	/// Extends the current stroke to `at`, sampled at `now` milliseconds of a monotonic clock.
	///
	/// Returns `false` without doing anything when no stroke is in progress.
	pub fn pointer_move(&mut self, at: Point, now: f64, surface: &mut impl StrokeSurface) -> bool {
		let Phase::Drawing { anchor } = self.phase else {
			return false;
		};
		if self.gate.try_accept(now) {
			self.published.push(at);
		}
		surface.draw_segment(anchor, at, StrokeStyle::for_segment(anchor, at));
		self.points.push(at);
		self.phase = Phase::Drawing { anchor: at };
		true
	}

	/// Drops the recorded stroke and wipes the surface. The last observed geometry is kept.
	pub fn reset(&mut self, surface: &mut impl StrokeSurface) {
		self.phase = Phase::Idle;
		self.points.clear();
		self.published.clear();
		surface.clear();
	}

	/// Follows the shared sequence after someone else emptied it. A finished stroke that is no
	/// longer shared is dropped so it cannot be published again. Returns `true` if it was dropped.
	pub fn sync_with_shared(&mut self, shared: &[Point], surface: &mut impl StrokeSurface) -> bool {
		if self.is_drawing() || !shared.is_empty() || self.published.is_empty() {
			return false;
		}
		tracing::debug!(points = self.points.len(), "shared points cleared, dropping stroke");
		self.reset(surface);
		true
	}

	/// Records a new layout of the surface, carrying the recorded points along with it.
	///
	/// Returns the remapped published buffer if there is one and the points moved.
	pub fn observe(
		&mut self,
		geometry: SurfaceGeometry,
		surface: &mut impl StrokeSurface,
	) -> Option<Vec<Point>> {
		let remap = self
			.geometry
			.and_then(|previous| previous.remap_to(&geometry));
		if let Some(remap) = &remap {
			tracing::debug!(?remap, "remapping recorded points");
			remap.apply_all(&mut self.points);
			remap.apply_all(&mut self.published);
		}
		self.geometry = Some(geometry);
		surface.resize(geometry.size());
		self.redraw(surface);
		remap
			.filter(|_| !self.published.is_empty())
			.map(|_| self.published.clone())
	}

	pub fn redraw(&self, surface: &mut impl StrokeSurface) {
		surface.clear();
		surface.draw_polyline(&self.points, StrokeStyle::Faint);
	}
}
