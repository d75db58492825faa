use leptos::prelude::*;

/// Labeled row of a settings form
#[component]
pub fn FormRow(
    #[prop(into)] label: String,
    /// Validation message shown under the row content
    #[prop(optional, into)]
    error: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="form-row">
            <label class="form-row__label">{label}</label>
            <div class="form-row__content">
                {children()}
                {move || error.get().map(|e| view! {
                    <div class="form-row__error">{e}</div>
                })}
            </div>
        </div>
    }
}

#[component]
pub fn FormButtons(children: Children) -> impl IntoView {
    view! { <div class="form-buttons">{children()}</div> }
}
