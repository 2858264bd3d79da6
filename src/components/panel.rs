use leptos::*;
use thaw::Card;

/// A collapsible settings section.
#[component]
pub fn Panel(
	#[prop(into)] title: String,
	#[prop(optional, into)] subtitle: Option<String>,
	#[prop(optional)] open: bool,
	children: Children,
) -> impl IntoView {
	view! {
		<div class="Panel">
			<Card>
				<details open=open>
					<summary>
						<b>{title}</b>
						{subtitle.map(|subtitle| view! { <div class="PanelSubtitle">{subtitle}</div> })}
					</summary>
					{children()}
				</details>
			</Card>
		</div>
	}
}
