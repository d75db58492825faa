use crate::shared::clipboard::copy_to_clipboard_with_callback;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Single-line text input, optionally read-only with a copy button
#[component]
pub fn TextField(
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional)] read_only: bool,
    /// Adds a button copying the current value to the clipboard
    #[prop(optional)]
    allow_copy: bool,
    #[prop(optional, into)] name: MaybeProp<String>,
    #[prop(optional, into)] invalid: MaybeProp<bool>,
) -> impl IntoView {
    let copied = RwSignal::new(false);
    let class = move || {
        if invalid.get().unwrap_or(false) {
            "text-field__input text-field__input--invalid"
        } else {
            "text-field__input"
        }
    };

    view! {
        <div class="text-field">
            <input
                type="text"
                class=class
                name=move || name.get().unwrap_or_default()
                prop:value=move || value.get()
                readonly=read_only
                on:input=move |ev| {
                    if let Some(handler) = on_input {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
            {allow_copy.then(|| view! {
                <button
                    type="button"
                    class="text-field__copy"
                    title=move || if copied.get() { "Copied" } else { "Copy" }
                    on:click=move |_| {
                        copy_to_clipboard_with_callback(&value.get_untracked(), move || {
                            let _ = copied.try_set(true);
                        });
                    }
                >
                    {icon("copy")}
                </button>
            })}
        </div>
    }
}
