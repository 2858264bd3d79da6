use leptos::*;

#[derive(thiserror::Error, Debug)]
#[error("no global tracing subscriber set")]
struct NoTracingSubscriber;

/// Everything in debug builds; the `release_max_level_warn` features cap release builds further.
fn max_level() -> tracing::Level {
	if cfg!(debug_assertions) {
		tracing::Level::TRACE
	} else {
		tracing::Level::INFO
	}
}

fn configure_tracing() -> anyhow::Result<()> {
	let result = Err(NoTracingSubscriber);

	#[cfg(all(target_arch = "wasm32", feature = "csr"))]
	let result = result.or_else(|_| {
		use tracing_subscriber::layer::SubscriberExt;
		let config = tracing_wasm::WASMLayerConfigBuilder::new()
			.set_max_level(max_level())
			.build();
		tracing::subscriber::set_global_default(
			tracing_subscriber::registry().with(tracing_wasm::WASMLayer::new(config)),
		)
	});

	let result = result.or_else(|_| {
		tracing::subscriber::set_global_default(
			tracing_subscriber::FmtSubscriber::builder()
				.with_max_level(max_level())
				.finish(),
		)
	});

	Ok(result?)
}

fn configure_logging() -> anyhow::Result<()> {
	configure_tracing()?;

	// Dependencies that log through `log` end up in the same subscriber.
	#[cfg(feature = "log")]
	tracing_log::LogTracer::init()?;

	Ok(())
}

fn main() {
	#[cfg(all(target_arch = "wasm32", feature = "csr"))]
	console_error_panic_hook::set_once();

	if let Err(error) = configure_logging() {
		// Drawing and playback work without logging.
		tracing::error!(error = error.to_string());
	}

	tracing::info!(version = env!("CARGO_PKG_VERSION"), "mounting idle fox");
	mount_to_body(idle_fox::App)
}
