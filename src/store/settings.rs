use crate::trace::SidePanel;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

pub const TOPNAV_HEIGHT_RANGE: RangeInclusive<f64> = 60.0..=100.0;
pub const SIDENAV_WIDTH_RANGE: RangeInclusive<f64> = 270.0..=400.0;

/// Step between button-size slider marks.
pub const BUTTON_SIZE_STEP: f64 = 25.0;

#[derive(
	Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
	#[display("xs")]
	Xs,
	#[display("sm")]
	Sm,
	#[default]
	#[display("md")]
	Md,
	#[display("lg")]
	Lg,
	#[display("xl")]
	Xl,
}

impl ButtonSize {
	pub const ALL: [ButtonSize; 5] = [
		ButtonSize::Xs,
		ButtonSize::Sm,
		ButtonSize::Md,
		ButtonSize::Lg,
		ButtonSize::Xl,
	];

	/// Position of this size on the 0..=100 slider.
	pub fn slider_value(self) -> f64 {
		let index = Self::ALL.iter().position(|s| *s == self).unwrap_or_default();
		index as f64 * BUTTON_SIZE_STEP
	}

	/// The size whose mark is nearest to `value`.
	pub fn from_slider(value: f64) -> Self {
		let index = (value / BUTTON_SIZE_STEP).round().clamp(0.0, 4.0) as usize;
		Self::ALL[index]
	}

	pub fn thaw(self) -> thaw::ButtonSize {
		match self {
			ButtonSize::Xs => thaw::ButtonSize::Tiny,
			ButtonSize::Sm => thaw::ButtonSize::Small,
			ButtonSize::Md => thaw::ButtonSize::Medium,
			ButtonSize::Lg | ButtonSize::Xl => thaw::ButtonSize::Large,
		}
	}
}

/// Everything about the page chrome a user can change. Persisted per wallet identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChromeSettings {
	pub top_nav_color: String,
	pub button_color: String,
	pub side_nav_color: String,
	pub canvas_color: String,
	pub topnav_height: f64,
	pub side_nav_width: f64,
	pub button_size: ButtonSize,
	pub is_header_top: bool,
	pub is_side_nav_left: bool,
	pub side_nav_open: bool,
	pub connected_account: String,
}

impl Default for ChromeSettings {
	fn default() -> Self {
		Self {
			top_nav_color: "#f8f9fa".to_owned(),
			button_color: "#228be6".to_owned(),
			side_nav_color: "#ffffff".to_owned(),
			canvas_color: "#ffffff".to_owned(),
			topnav_height: 60.0,
			side_nav_width: 300.0,
			button_size: ButtonSize::Md,
			is_header_top: true,
			is_side_nav_left: true,
			side_nav_open: true,
			connected_account: String::new(),
		}
	}
}

/// One of the four colour settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ColorSlot {
	#[display("Topnav Color")]
	TopNav,
	#[display("Button Color")]
	Button,
	#[display("Sidebar Color")]
	SideNav,
	#[display("Canvas Color")]
	Canvas,
}

impl ColorSlot {
	pub const ALL: [ColorSlot; 4] = [
		ColorSlot::TopNav,
		ColorSlot::Button,
		ColorSlot::SideNav,
		ColorSlot::Canvas,
	];
}

#[derive(thiserror::Error, Debug)]
#[error("invalid color {value:?}")]
pub struct InvalidColor {
	value: String,
	#[source]
	source: csscolorparser::ParseColorError,
}

impl ChromeSettings {
	pub fn is_connected(&self) -> bool {
		!self.connected_account.is_empty()
	}

	pub fn side_panel(&self) -> SidePanel {
		SidePanel {
			open: self.side_nav_open,
			on_left: self.is_side_nav_left,
			width: self.side_nav_width,
		}
	}

	pub fn color(&self, slot: ColorSlot) -> &str {
		match slot {
			ColorSlot::TopNav => &self.top_nav_color,
			ColorSlot::Button => &self.button_color,
			ColorSlot::SideNav => &self.side_nav_color,
			ColorSlot::Canvas => &self.canvas_color,
		}
	}

	/// Sets a colour, accepting anything that parses as a CSS colour.
	pub fn set_color(&mut self, slot: ColorSlot, value: &str) -> Result<(), InvalidColor> {
		csscolorparser::parse(value).map_err(|source| InvalidColor {
			value: value.to_owned(),
			source,
		})?;
		let target = match slot {
			ColorSlot::TopNav => &mut self.top_nav_color,
			ColorSlot::Button => &mut self.button_color,
			ColorSlot::SideNav => &mut self.side_nav_color,
			ColorSlot::Canvas => &mut self.canvas_color,
		};
		*target = value.to_owned();
		Ok(())
	}

	pub fn set_topnav_height(&mut self, height: f64) {
		self.topnav_height = height.clamp(*TOPNAV_HEIGHT_RANGE.start(), *TOPNAV_HEIGHT_RANGE.end());
	}

	pub fn set_side_nav_width(&mut self, width: f64) {
		self.side_nav_width = width.clamp(*SIDENAV_WIDTH_RANGE.start(), *SIDENAV_WIDTH_RANGE.end());
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_serialize_with_camel_case_keys() {
		let json = serde_json::to_value(ChromeSettings::default()).unwrap();
		assert_eq!(json["topNavColor"], "#f8f9fa");
		assert_eq!(json["topnavHeight"], 60.0);
		assert_eq!(json["sideNavWidth"], 300.0);
		assert_eq!(json["buttonSize"], "md");
		assert_eq!(json["isHeaderTop"], true);
		assert_eq!(json["connectedAccount"], "");
	}

	#[test]
	fn partial_blob_fills_in_defaults() {
		let settings: ChromeSettings =
			serde_json::from_str(r##"{"buttonColor":"#ff0000","isSideNavLeft":false}"##).unwrap();
		assert_eq!(settings.button_color, "#ff0000");
		assert!(!settings.is_side_nav_left);
		assert_eq!(settings.canvas_color, "#ffffff");
		assert_eq!(settings.button_size, ButtonSize::Md);
	}

	#[test]
	fn button_size_slider_marks() {
		for size in ButtonSize::ALL {
			assert_eq!(ButtonSize::from_slider(size.slider_value()), size);
		}
		assert_eq!(ButtonSize::Lg.slider_value(), 75.0);
		assert_eq!(ButtonSize::from_slider(60.0), ButtonSize::Md);
		assert_eq!(ButtonSize::from_slider(140.0), ButtonSize::Xl);
		assert_eq!(ButtonSize::Xs.to_string(), "xs");
	}

	#[test]
	fn invalid_colors_are_rejected() {
		let mut settings = ChromeSettings::default();
		assert!(settings.set_color(ColorSlot::Canvas, "not a color").is_err());
		assert_eq!(settings.color(ColorSlot::Canvas), "#ffffff");
		settings.set_color(ColorSlot::Canvas, "#123456").unwrap();
		assert_eq!(settings.canvas_color, "#123456");
	}

	#[test]
	fn sizes_are_clamped_to_slider_ranges() {
		let mut settings = ChromeSettings::default();
		settings.set_topnav_height(10.0);
		settings.set_side_nav_width(1000.0);
		assert_eq!(settings.topnav_height, 60.0);
		assert_eq!(settings.side_nav_width, 400.0);
	}

	#[test]
	fn side_panel_mirrors_settings() {
		let settings = ChromeSettings {
			side_nav_open: false,
			side_nav_width: 333.0,
			..Default::default()
		};
		assert_eq!(
			settings.side_panel(),
			SidePanel {
				open: false,
				on_left: true,
				width: 333.0
			}
		);
	}
}
