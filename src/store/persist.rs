use super::ChromeSettings;
use crate::geom::Point;
use crate::util::JsError;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;

#[derive(thiserror::Error, Debug)]
pub enum PersistError {
	#[error("local storage is unavailable")]
	Unavailable,

	#[error("storage access failed")]
	Js(#[from] JsError),

	#[error("malformed stored value")]
	Codec(#[from] serde_json::Error),
}

/// A string key-value store, e.g. the browser's `localStorage`.
pub trait KeyValueStore {
	fn get(&self, key: &str) -> Result<Option<String>, PersistError>;
	fn set(&self, key: &str, value: &str) -> Result<(), PersistError>;
	fn remove(&self, key: &str) -> Result<(), PersistError>;
}

pub struct LocalStore(web_sys::Storage);

impl LocalStore {
	pub fn open() -> Result<Self, PersistError> {
		let window = web_sys::window().ok_or(PersistError::Unavailable)?;
		let storage = window
			.local_storage()
			.map_err(JsError::from)?
			.ok_or(PersistError::Unavailable)?;
		Ok(Self(storage))
	}
}

impl KeyValueStore for LocalStore {
	fn get(&self, key: &str) -> Result<Option<String>, PersistError> {
		Ok(self.0.get_item(key).map_err(JsError::from)?)
	}

	fn set(&self, key: &str, value: &str) -> Result<(), PersistError> {
		Ok(self.0.set_item(key, value).map_err(JsError::from)?)
	}

	fn remove(&self, key: &str) -> Result<(), PersistError> {
		Ok(self.0.remove_item(key).map_err(JsError::from)?)
	}
}

#[derive(Default, Debug)]
pub struct MemoryStore(RefCell<HashMap<String, String>>);

impl KeyValueStore for MemoryStore {
	fn get(&self, key: &str) -> Result<Option<String>, PersistError> {
		Ok(self.0.borrow().get(key).cloned())
	}

	fn set(&self, key: &str, value: &str) -> Result<(), PersistError> {
		self.0.borrow_mut().insert(key.to_owned(), value.to_owned());
		Ok(())
	}

	fn remove(&self, key: &str) -> Result<(), PersistError> {
		self.0.borrow_mut().remove(key);
		Ok(())
	}
}

pub fn settings_key(account: &str) -> String {
	format!("{account}_store")
}

pub fn points_key(account: &str) -> String {
	format!("{account}_points")
}

#[derive(Serialize, Deserialize)]
struct StoredPoint {
	x: f64,
	y: f64,
}

/// Loads the settings saved for `account`. Stored keys override the defaults; the identity is
/// always the one asked for.
pub fn load_settings(
	store: &impl KeyValueStore,
	account: &str,
) -> Result<Option<ChromeSettings>, PersistError> {
	let Some(raw) = store.get(&settings_key(account))? else {
		return Ok(None);
	};
	let mut settings: ChromeSettings = serde_json::from_str(&raw)?;
	settings.connected_account = account.to_owned();
	Ok(Some(settings))
}

/// Saves `settings` under its connected identity. Returns `false` if there is no identity to save
/// under.
pub fn save_settings(
	store: &impl KeyValueStore,
	settings: &ChromeSettings,
) -> Result<bool, PersistError> {
	if !settings.is_connected() {
		return Ok(false);
	}
	let raw = serde_json::to_string(settings)?;
	store.set(&settings_key(&settings.connected_account), &raw)?;
	Ok(true)
}

pub fn load_points(store: &impl KeyValueStore, account: &str) -> Result<Vec<Point>, PersistError> {
	let Some(raw) = store.get(&points_key(account))? else {
		return Ok(Vec::new());
	};
	let points: Vec<StoredPoint> = serde_json::from_str(&raw)?;
	Ok(points.into_iter().map(|p| Point::new(p.x, p.y)).collect())
}

pub fn save_points(
	store: &impl KeyValueStore,
	account: &str,
	points: &[Point],
) -> Result<(), PersistError> {
	let points: Vec<StoredPoint> = points
		.iter()
		.map(|p| StoredPoint { x: p.x, y: p.y })
		.collect();
	store.set(&points_key(account), &serde_json::to_string(&points)?)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::store::ButtonSize;

	const ACCOUNT: &str = "0x1234567890abcdef";

	#[test]
	fn settings_round_trip_under_identity_key() {
		let store = MemoryStore::default();
		let settings = ChromeSettings {
			connected_account: ACCOUNT.to_owned(),
			button_size: ButtonSize::Xl,
			..Default::default()
		};
		assert!(save_settings(&store, &settings).unwrap());
		assert!(store.get("0x1234567890abcdef_store").unwrap().is_some());
		assert_eq!(load_settings(&store, ACCOUNT).unwrap(), Some(settings));
	}

	#[test]
	fn disconnected_settings_are_not_saved() {
		let store = MemoryStore::default();
		assert!(!save_settings(&store, &ChromeSettings::default()).unwrap());
		assert!(store.get(&settings_key("")).unwrap().is_none());
	}

	#[test]
	fn missing_settings_load_as_none() {
		let store = MemoryStore::default();
		assert_eq!(load_settings(&store, ACCOUNT).unwrap(), None);
	}

	#[test]
	fn stored_blob_overlays_defaults_and_identity_wins() {
		let store = MemoryStore::default();
		store
			.set(
				&settings_key(ACCOUNT),
				r#"{"sideNavOpen":false,"connectedAccount":"someone-else"}"#,
			)
			.unwrap();
		let settings = load_settings(&store, ACCOUNT).unwrap().unwrap();
		assert!(!settings.side_nav_open);
		assert_eq!(settings.connected_account, ACCOUNT);
		assert_eq!(settings.top_nav_color, "#f8f9fa");
	}

	#[test]
	fn corrupt_blob_is_an_error() {
		let store = MemoryStore::default();
		store.set(&settings_key(ACCOUNT), "{not json").unwrap();
		assert!(matches!(
			load_settings(&store, ACCOUNT),
			Err(PersistError::Codec(_))
		));
	}

	#[test]
	fn points_use_xy_objects() {
		let store = MemoryStore::default();
		let points = [Point::new(1.5, 2.0), Point::new(-3.0, 4.0)];
		save_points(&store, ACCOUNT, &points).unwrap();
		assert_eq!(
			store.get(&points_key(ACCOUNT)).unwrap().unwrap(),
			r#"[{"x":1.5,"y":2.0},{"x":-3.0,"y":4.0}]"#
		);
		assert_eq!(load_points(&store, ACCOUNT).unwrap(), points);
		assert!(load_points(&store, "nobody").unwrap().is_empty());
	}
}
