use leptos::prelude::*;

/// Title bar of a settings page
#[component]
pub fn PageHeader(
    #[prop(into)] title: Signal<String>,
    #[prop(optional, into)] subtitle: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <h1 class="page-header__title">{title}</h1>
            {move || subtitle.get().map(|s| view! {
                <div class="page-header__subtitle">{s}</div>
            })}
        </div>
    }
}
