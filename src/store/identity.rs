use super::{load_points, load_settings, ChromeSettings, KeyValueStore};
use crate::geom::Point;
use crate::util::ResultExt;

/// What the page should show once `account` becomes the connected identity.
#[derive(Debug, Clone, PartialEq)]
pub struct Identity {
	pub settings: ChromeSettings,
	/// Points saved for this identity. `None` keeps whatever is currently shown.
	pub points: Option<Vec<Point>>,
}

/// Switches to `account`. Saved settings replace the current ones; without any, the current
/// settings carry over to the new identity. Unreadable saved state is logged and ignored.
pub fn adopt_identity(
	store: &impl KeyValueStore,
	current: &ChromeSettings,
	account: &str,
) -> Identity {
	let settings = load_settings(store, account)
		.ok_or_log()
		.flatten()
		.unwrap_or_else(|| ChromeSettings {
			connected_account: account.to_owned(),
			..current.clone()
		});
	let points = load_points(store, account)
		.ok_or_log()
		.filter(|points| !points.is_empty());
	tracing::info!(
		account,
		restored_points = points.as_ref().map_or(0, Vec::len),
		"adopted identity"
	);
	Identity { settings, points }
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::store::{save_points, settings_key, MemoryStore};

	#[test]
	fn unknown_identity_keeps_current_settings() {
		let store = MemoryStore::default();
		let current = ChromeSettings {
			canvas_color: "#000000".to_owned(),
			..Default::default()
		};
		let identity = adopt_identity(&store, &current, "0xabc");
		assert_eq!(identity.settings.canvas_color, "#000000");
		assert_eq!(identity.settings.connected_account, "0xabc");
		assert_eq!(identity.points, None);
	}

	#[test]
	fn known_identity_restores_saved_state() {
		let store = MemoryStore::default();
		store
			.set(&settings_key("0xabc"), r#"{"sideNavWidth":350}"#)
			.unwrap();
		save_points(&store, "0xabc", &[Point::new(1.0, 2.0)]).unwrap();

		let identity = adopt_identity(&store, &ChromeSettings::default(), "0xabc");
		assert_eq!(identity.settings.side_nav_width, 350.0);
		assert_eq!(identity.settings.connected_account, "0xabc");
		assert_eq!(identity.points, Some(vec![Point::new(1.0, 2.0)]));
	}

	#[test]
	fn corrupt_saved_state_falls_back() {
		let store = MemoryStore::default();
		store.set(&settings_key("0xabc"), "][").unwrap();
		let identity = adopt_identity(&store, &ChromeSettings::default(), "0xabc");
		assert_eq!(identity.settings.connected_account, "0xabc");
		assert_eq!(identity.settings.button_color, "#228be6");
	}
}
