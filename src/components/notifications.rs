use crate::notice::Notice;
use leptos::*;
use std::time::Duration;

/// How long a toast stays on screen.
pub const NOTICE_LIFETIME: Duration = Duration::from_secs(4);

/// Queue of visible toasts, shared through context.
#[derive(Debug, Clone, Copy)]
pub struct Notifier {
	notices: RwSignal<Vec<(u64, Notice)>>,
	next_id: StoredValue<u64>,
}

impl Notifier {
	pub fn new() -> Self {
		Self {
			notices: create_rw_signal(Vec::new()),
			next_id: store_value(0),
		}
	}

	/// Shows `notice` and dismisses it after `NOTICE_LIFETIME`.
	pub fn notify(&self, notice: Notice) {
		tracing::info!(title = %notice.title, tone = %notice.tone, "notice");
		let id = self.next_id.get_value();
		self.next_id.set_value(id + 1);
		self.notices.update(|notices| notices.push((id, notice)));

		let notices = self.notices;
		set_timeout(
			move || notices.update(|notices| notices.retain(|(n, _)| *n != id)),
			NOTICE_LIFETIME,
		);
	}

	pub fn dismiss(&self, id: u64) {
		self.notices.update(|notices| notices.retain(|(n, _)| *n != id));
	}

	pub fn visible(&self) -> Vec<Notice> {
		self.notices
			.with(|notices| notices.iter().map(|(_, notice)| notice.clone()).collect())
	}
}

impl Default for Notifier {
	fn default() -> Self {
		Self::new()
	}
}

#[component]
pub fn Toasts() -> impl IntoView {
	let notifier: Notifier = expect_context();

	view! {
		<div class="Toasts">
			<For
				each=move || notifier.notices.get()
				key=|(id, _)| *id
				children=move |(id, notice)| {
					view! {
						<div class=format!("Toast Toast-{}", notice.tone) on:click=move |_| notifier.dismiss(id)>
							<b>{notice.title}</b>
							<div>{notice.message}</div>
						</div>
					}
				}
			/>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn notices_queue_in_order_and_dismiss() {
		let runtime = create_runtime();
		let notifier = Notifier::new();
		notifier.notices.update(|n| n.push((7, Notice::info("a", "first"))));
		notifier.notices.update(|n| n.push((8, Notice::error("b", "second"))));
		assert_eq!(notifier.visible().len(), 2);
		notifier.dismiss(7);
		assert_eq!(notifier.visible(), vec![Notice::error("b", "second")]);
		runtime.dispose();
	}
}
