/// A one-shot message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
	pub title: String,
	pub message: String,
	pub tone: Tone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::Display)]
pub enum Tone {
	#[default]
	#[display("info")]
	Info,
	#[display("error")]
	Error,
}

impl Notice {
	pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			message: message.into(),
			tone: Tone::Info,
		}
	}

	pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
		Self {
			title: title.into(),
			message: message.into(),
			tone: Tone::Error,
		}
	}
}
