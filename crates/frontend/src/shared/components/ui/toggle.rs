use leptos::prelude::*;

/// On/off switch with a trailing label
#[component]
pub fn Toggle(
    #[prop(into)] checked: Signal<bool>,
    #[prop(optional)] on_checked: Option<Callback<bool>>,
    #[prop(optional, into)] id: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let toggle_id = move || id.get().unwrap_or_default();

    view! {
        <label class="toggle" for=toggle_id>
            <input
                id=toggle_id
                type="checkbox"
                role="switch"
                class="toggle__input"
                prop:checked=move || checked.get()
                on:change=move |ev| {
                    if let Some(handler) = on_checked {
                        handler.run(event_target_checked(&ev));
                    }
                }
            />
            <span class="toggle__track"></span>
            <span class="toggle__label">{children()}</span>
        </label>
    }
}
