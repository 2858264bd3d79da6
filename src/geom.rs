use glam::DVec2;

/// A position in surface-local pixel space.
pub type Point = DVec2;

/// The drawing surface's layout as last observed, used as the reference frame when recorded points
/// have to follow the surface around.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceGeometry {
	origin: DVec2,
	size: DVec2,
}

/// How the surface changed between two observations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Remap {
	/// Only the origin moved; points follow by `delta`.
	Translate { delta: DVec2 },
	/// The size changed; points scale by `scale` and then step back by the origin shift `delta`.
	Rescale { scale: DVec2, delta: DVec2 },
}

impl SurfaceGeometry {
	pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
		Self {
			origin: DVec2::new(left, top),
			size: DVec2::new(width, height),
		}
	}

	pub fn origin(&self) -> DVec2 {
		self.origin
	}

	pub fn size(&self) -> DVec2 {
		self.size
	}

	/// Converts a client (viewport) coordinate into surface-local space.
	pub fn to_local(&self, client: DVec2) -> Point {
		client - self.origin
	}

	/// The remap carrying points recorded against `self` over to `next`, if anything changed.
	pub fn remap_to(&self, next: &SurfaceGeometry) -> Option<Remap> {
		let delta = next.origin - self.origin;
		if next.size != self.size {
			// An axis that had no extent has nothing meaningful to scale from.
			let ratio = |new: f64, old: f64| if old == 0.0 { 1.0 } else { new / old };
			let scale = DVec2::new(
				ratio(next.size.x, self.size.x),
				ratio(next.size.y, self.size.y),
			);
			Some(Remap::Rescale { scale, delta })
		} else if delta != DVec2::ZERO {
			Some(Remap::Translate { delta })
		} else {
			None
		}
	}
}

impl Remap {
	pub fn apply(&self, point: Point) -> Point {
		match *self {
			Remap::Translate { delta } => point + delta,
			Remap::Rescale { scale, delta } => point * scale - delta,
		}
	}

	pub fn apply_all(&self, points: &mut [Point]) {
		for point in points.iter_mut() {
			*point = self.apply(*point);
		}
	}
}
