use crate::domain::a001_team::ui::page::TeamSettingsPage;
use crate::shared::config::AppConfig;
use crate::shared::modified::ModifiedRegistry;
use crate::shared::toast::{ToastHost, ToastService};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_env();
    log::info!("starting team settings (cloud_mode = {})", config.cloud_mode);

    provide_context(config);
    provide_context(ToastService::new());
    provide_context(ModifiedRegistry::new());

    view! {
        <TeamSettingsPage />
        <ToastHost />
    }
}
