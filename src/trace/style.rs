use crate::geom::Point;

pub const STROKE_WIDTH: f64 = 3.0;

/// Hue of a segment drawn while the pointer is moving. Rising strokes run towards green, falling
/// strokes towards red, which gives the line its whipping look.
pub fn segment_hue(from: Point, to: Point) -> f64 {
	(70.0 - (to.y - from.y) * 3.0).clamp(0.0, 120.0)
}

#[derive(Debug, Clone, Copy, PartialEq, derive_more::Display)]
pub enum StrokeStyle {
	#[display("hsl({hue}, 100%, 50%)")]
	Hue { hue: f64 },
	#[display("rgba(128, 128, 128, 0.1)")]
	Faint,
}

impl StrokeStyle {
	pub fn for_segment(from: Point, to: Point) -> Self {
		StrokeStyle::Hue {
			hue: segment_hue(from, to),
		}
	}
}
