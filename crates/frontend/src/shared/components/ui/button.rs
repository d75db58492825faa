use leptos::prelude::*;

/// Button with variants ("primary", "secondary") and a busy state
#[component]
pub fn Button(
    /// Button variant: "primary" or "secondary" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// "button" (default) or "submit"
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    /// Disabled and shows a spinner class while true
    #[prop(optional, into)]
    busy: MaybeProp<bool>,
    #[prop(optional)] on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref() {
        Some("primary") => "button--primary",
        _ => "button--secondary",
    };
    let busy_class = move || {
        if busy.get().unwrap_or(false) {
            "button--busy"
        } else {
            ""
        }
    };
    let btn_type = move || button_type.get().unwrap_or_else(|| "button".to_string());

    view! {
        <button
            type=btn_type
            class=move || format!("button {} {}", variant_class(), busy_class())
            disabled=move || busy.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
