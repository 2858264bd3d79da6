//! Access to an injected browser wallet (`window.ethereum`), used only to learn the identity that
//! settings are saved under.

use crate::notice::Notice;
use crate::util::JsError;
use wasm_bindgen::JsCast;

#[derive(thiserror::Error, Debug)]
pub enum WalletError {
	#[error("no wallet provider installed")]
	NotInstalled,

	#[error("wallet returned no accounts")]
	NoAccounts,

	#[error("wallet request failed")]
	Rejected(#[from] JsError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum AccountRequest {
	/// Prompts the user to connect.
	#[display("eth_requestAccounts")]
	Request,
	/// Lists already-authorised accounts without prompting.
	#[display("eth_accounts")]
	List,
}

fn provider() -> Option<wasm_bindgen::JsValue> {
	let window = web_sys::window()?;
	let provider = js_sys::Reflect::get(&window, &"ethereum".into()).ok()?;
	(!provider.is_undefined() && !provider.is_null()).then_some(provider)
}

pub fn is_installed() -> bool {
	provider().is_some()
}

#[tracing::instrument(err)]
pub async fn request_accounts(request: AccountRequest) -> Result<Vec<String>, WalletError> {
	let provider = provider().ok_or(WalletError::NotInstalled)?;
	let function = js_sys::Reflect::get(&provider, &"request".into())
		.map_err(JsError::from)?
		.dyn_into::<js_sys::Function>()
		.map_err(|_| JsError::new("`ethereum.request` is not a function"))?;

	let args = js_sys::Object::new();
	js_sys::Reflect::set(&args, &"method".into(), &request.to_string().into())
		.map_err(JsError::from)?;
	let promise = function
		.call1(&provider, &args)
		.map_err(JsError::from)?
		.dyn_into::<js_sys::Promise>()
		.map_err(|_| JsError::new("`ethereum.request` did not return a promise"))?;

	let accounts = wasm_bindgen_futures::JsFuture::from(promise)
		.await
		.map_err(JsError::from)?;
	Ok(js_sys::Array::from(&accounts)
		.iter()
		.filter_map(|account| account.as_string())
		.collect())
}

/// Asks the wallet to connect and returns the first account.
pub async fn connect() -> Result<String, WalletError> {
	request_accounts(AccountRequest::Request)
		.await?
		.into_iter()
		.next()
		.ok_or(WalletError::NoAccounts)
}

/// The first account the wallet has already authorised for this page, if any.
pub async fn connected_account() -> Result<Option<String>, WalletError> {
	match request_accounts(AccountRequest::List).await {
		Ok(accounts) => Ok(accounts.into_iter().next()),
		Err(WalletError::NotInstalled) => Ok(None),
		Err(err) => Err(err),
	}
}

/// Shortens an address to its first six and last four characters.
pub fn format_address(address: &str) -> String {
	let chars: Vec<char> = address.chars().collect();
	let head: String = chars.iter().take(6).collect();
	let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
	format!("{head}...{tail}")
}

pub fn connect_notice(result: &Result<String, WalletError>) -> Notice {
	match result {
		Ok(_) => Notice::info(
			"Connected",
			"Changes you make will be saved by your wallet address.",
		),
		Err(WalletError::NotInstalled) => {
			Notice::error("MetaMask Not Installed", "Please install MetaMask to continue.")
		}
		Err(WalletError::NoAccounts) => {
			Notice::error("No Accounts Found", "Please connect to a wallet to continue.")
		}
		Err(WalletError::Rejected(_)) => Notice::error("Failed to Connect", "Please try again."),
	}
}

pub fn auto_connect_notice(result: &Result<Option<String>, WalletError>) -> Option<Notice> {
	match result {
		Ok(Some(account)) => Some(Notice::info(
			"Auto-connected",
			format!("Connected to {}.", format_address(account)),
		)),
		Ok(None) => None,
		Err(_) => Some(Notice::error(
			"Auto-connect Failed",
			"Could not automatically connect. Please connect manually.",
		)),
	}
}

pub fn disconnect_notice() -> Notice {
	Notice::info("Disconnected", "You have disconnected your wallet.")
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::notice::Tone;

	#[test]
	fn address_is_shortened() {
		assert_eq!(
			format_address("0x52908400098527886E0F7030069857D2E4169EE7"),
			"0x5290...9EE7"
		);
	}

	#[test]
	fn short_address_does_not_panic() {
		assert_eq!(format_address("0x1"), "0x1...0x1");
		assert_eq!(format_address(""), "...");
	}

	#[test]
	fn connect_outcomes() {
		assert_eq!(connect_notice(&Ok("0xabc".to_owned())).title, "Connected");
		let missing = connect_notice(&Err(WalletError::NotInstalled));
		assert_eq!(missing.title, "MetaMask Not Installed");
		assert_eq!(missing.tone, Tone::Error);
		assert_eq!(
			connect_notice(&Err(WalletError::NoAccounts)).title,
			"No Accounts Found"
		);
		assert_eq!(
			connect_notice(&Err(JsError::new("user rejected").into())).title,
			"Failed to Connect"
		);
	}

	#[test]
	fn auto_connect_outcomes() {
		assert_eq!(auto_connect_notice(&Ok(None)), None);
		let notice = auto_connect_notice(&Ok(Some("0x52908400098527886E0F".to_owned()))).unwrap();
		assert_eq!(notice.message, "Connected to 0x5290...6E0F.");
		assert_eq!(
			auto_connect_notice(&Err(WalletError::NoAccounts))
				.unwrap()
				.title,
			"Auto-connect Failed"
		);
	}

	#[test]
	fn request_methods() {
		assert_eq!(AccountRequest::Request.to_string(), "eth_requestAccounts");
		assert_eq!(AccountRequest::List.to_string(), "eth_accounts");
	}
}
