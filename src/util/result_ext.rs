use super::JsError;
use wasm_bindgen::JsValue;

pub trait ResultExt<T, E> {
	/// Logs the error, if any, and carries on without the value.
	fn ok_or_log(self) -> Option<T>
	where
		E: std::fmt::Display;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
	fn ok_or_log(self) -> Option<T>
	where
		E: std::fmt::Display,
	{
		self.inspect_err(|err| tracing::error!("{}", err)).ok()
	}
}

/// `ok_or_log` for raw `web-sys` results, whose `JsValue` errors have no `Display`.
pub trait JsResultExt<T> {
	fn ok_or_log_js(self) -> Option<T>;
}

impl<T> JsResultExt<T> for Result<T, JsValue> {
	fn ok_or_log_js(self) -> Option<T> {
		self.map_err(JsError::from).ok_or_log()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn ok_values_pass_through() {
		assert_eq!(Ok::<_, String>(3).ok_or_log(), Some(3));
		assert_eq!(Err::<u8, _>("broken").ok_or_log(), None);
	}

	#[test]
	fn js_results_pass_ok_values() {
		assert_eq!(Ok::<_, JsValue>(3).ok_or_log_js(), Some(3));
	}
}
