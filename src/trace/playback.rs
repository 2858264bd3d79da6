use crate::geom::Point;
use glam::DVec2;
use std::f64::consts::TAU;

/// Milliseconds between synthesized pointer moves.
pub const TICK_INTERVAL_MS: u64 = 16;

/// Half extents of the idle path around the figure.
pub const IDLE_AMPLITUDE: DVec2 = DVec2::new(300.0, 400.0);

/// Phase advance of the idle path per tick.
pub const IDLE_PHASE_STEP: f64 = 0.06;

/// The idle path is centred this far above the figure.
pub const CENTER_LIFT: f64 = 300.0;

/// Placement of the navigation side panel, which shifts replayed points horizontally.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SidePanel {
	pub open: bool,
	pub on_left: bool,
	pub width: f64,
}

impl SidePanel {
	/// Horizontal shift applied to replayed points.
	///
	/// The panel width is added when the panel is closed or sits on the left. A closed panel takes
	/// no room, so the first half of that rule looks accidental; it is kept as observed behaviour.
	pub fn offset(&self) -> f64 {
		if !self.open || self.on_left {
			self.width
		} else {
			0.0
		}
	}
}

/// Produces the pointer positions that drive the figure, one per tick.
///
/// Recorded points are replayed round-robin. Without any, the figure is walked along
/// `center + (Ax·sin θ, Ay·(1 − sin² θ))`, which sweeps side to side while dipping towards a
/// baseline.
#[derive(Debug, Clone)]
pub struct PlaybackDriver {
	index: usize,
	theta: f64,
	center: DVec2,
	hovering: bool,
	side_panel: SidePanel,
}

impl PlaybackDriver {
	pub fn new(side_panel: SidePanel) -> Self {
		Self {
			index: 0,
			theta: 0.0,
			center: DVec2::ZERO,
			hovering: false,
			side_panel,
		}
	}

	pub fn index(&self) -> usize {
		self.index
	}

	pub fn theta(&self) -> f64 {
		self.theta
	}

	pub fn center(&self) -> DVec2 {
		self.center
	}

	pub fn is_hovering(&self) -> bool {
		self.hovering
	}

	pub fn set_hovering(&mut self, hovering: bool) {
		self.hovering = hovering;
	}

	/// Recomputes the idle path centre from the figure's bounding box.
	pub fn set_figure_bounds(&mut self, left: f64, top: f64, width: f64, height: f64) {
		self.center = DVec2::new(left + width / 2.0, top + height / 2.0 - CENTER_LIFT);
	}

	/// Advances one tick. Returns the client coordinate to dispatch, or `None` while a user is
	/// hovering, in which case nothing advances.
	pub fn tick(&mut self, points: &[Point]) -> Option<DVec2> {
		if self.hovering {
			return None;
		}

		if !points.is_empty() {
			if self.index >= points.len() {
				self.index = 0;
			}
			let point = points[self.index];
			self.index = (self.index + 1) % points.len();
			return Some(DVec2::new(point.x + self.side_panel.offset(), point.y));
		}

		let s = self.theta.sin();
		let position = self.center + IDLE_AMPLITUDE * DVec2::new(s, 1.0 - s * s);
		self.theta += IDLE_PHASE_STEP;
		if self.theta >= TAU {
			self.theta = 0.0;
		}
		Some(position)
	}
}
