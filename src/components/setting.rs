use leptos::*;

/// A labelled control row.
#[component]
pub fn Setting(#[prop(into)] name: TextProp, children: Children) -> impl IntoView {
	view! {
		<label class="Setting">
			<span class="SettingName">{move || name.get().to_string()}</span>
			{children()}
		</label>
	}
}
