use idle_fox::figure::*;
use idle_fox::geom::Point;
use idle_fox::store::*;
use wasm_bindgen_test::*;

// https://rustwasm.github.io/wasm-bindgen/wasm-bindgen-test/browsers.html
wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn local_storage_round_trip() {
	let store = LocalStore::open().unwrap();
	let account = "0xwasmtest";
	let settings = ChromeSettings {
		connected_account: account.to_owned(),
		side_nav_open: false,
		..Default::default()
	};
	assert!(save_settings(&store, &settings).unwrap());
	save_points(&store, account, &[Point::new(3.0, 4.0)]).unwrap();

	assert_eq!(load_settings(&store, account).unwrap(), Some(settings));
	assert_eq!(
		load_points(&store, account).unwrap(),
		vec![Point::new(3.0, 4.0)]
	);

	store.remove(&settings_key(account)).unwrap();
	store.remove(&points_key(account)).unwrap();
	assert_eq!(load_settings(&store, account).unwrap(), None);
}

#[wasm_bindgen_test]
fn figure_mounts_and_stops() {
	let figure = FoxFigure::new(FigureOptions::builder().width(120.0).height(80.0).build()).unwrap();
	let body = leptos::document().body().unwrap();
	body.append_child(figure.container()).unwrap();

	let rect = figure.container().get_bounding_client_rect();
	assert_eq!(rect.width(), 120.0);
	assert_eq!(rect.height(), 80.0);

	figure.stop_animation();
	// Stopping twice is harmless.
	figure.stop_animation();
	figure.container().remove();
}

// https://rustwasm.github.io/wasm-bindgen/wasm-bindgen-test/asynchronous-tests.html
#[wasm_bindgen_test(async)]
async fn missing_wallet_is_not_an_auto_connect_error() {
	if idle_fox::wallet::is_installed() {
		return;
	}
	assert_eq!(
		idle_fox::wallet::connected_account().await.unwrap(),
		None
	);
}
