//! Wallet identity changes and the effects that persist state under the current identity.

use crate::components::Notifier;
use crate::store::*;
use crate::util::ResultExt;
use crate::wallet;
use leptos::*;

/// Makes `account` the current identity, restoring whatever was saved for it.
pub fn switch_identity(settings: SharedSettings, points: SharedPoints, account: &str) {
	let Some(store) = LocalStore::open().ok_or_log() else {
		settings.update(|s| s.connected_account = account.to_owned());
		return;
	};
	let identity = settings.with_untracked(|current| adopt_identity(&store, current, account));
	settings.replace(identity.settings);
	if let Some(restored) = identity.points {
		points.publish(restored);
	}
}

/// Prompts the wallet for an account and switches to it.
pub async fn connect(settings: SharedSettings, points: SharedPoints, notifier: Notifier) {
	let result = wallet::connect().await;
	notifier.notify(wallet::connect_notice(&result));
	if let Ok(account) = result {
		switch_identity(settings, points, &account);
	}
}

/// Silently picks up an account the wallet already authorised for this page.
pub async fn auto_connect(settings: SharedSettings, points: SharedPoints, notifier: Notifier) {
	let result = wallet::connected_account().await;
	if let Some(notice) = wallet::auto_connect_notice(&result) {
		notifier.notify(notice);
	}
	if let Ok(Some(account)) = result {
		switch_identity(settings, points, &account);
	}
}

/// Forgets the identity and returns every setting to its default.
pub fn disconnect(settings: SharedSettings, points: SharedPoints, notifier: Notifier) {
	settings.replace(ChromeSettings::default());
	points.reset();
	notifier.notify(wallet::disconnect_notice());
}

/// Saves settings on every change, and points on every publish, while an identity is connected.
pub fn persist_changes(settings: SharedSettings, points: SharedPoints) {
	create_effect(move |_| {
		settings.with(|settings| {
			let store = LocalStore::open().ok_or_log()?;
			save_settings(&store, settings).ok_or_log()
		});
	});

	create_effect(move |_| {
		let published = points.signal().get();
		let account = settings.with_untracked(|s| s.connected_account.clone());
		if account.is_empty() {
			return;
		}
		if let Some(store) = LocalStore::open().ok_or_log() {
			save_points(&store, &account, &published).ok_or_log();
		}
	});
}
