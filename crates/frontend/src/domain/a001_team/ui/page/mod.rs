//! Team settings page.
//!
//! Resolves the team from the URL query (`?team=<id>&edit=1`), loads it and
//! hands it to [`TeamEditForm`]. The team is reloaded whenever the `teams`
//! key of the [`ModifiedRegistry`] is touched.

use crate::domain::a001_team::ui::details::{HttpTeamGateway, TeamEditForm, TeamGateway};
use crate::shared::components::PageHeader;
use crate::shared::config::parse_flag;
use crate::shared::modified::{ModifiedRegistry, TEAMS_KEY};
use crate::shared::toast::ToastService;
use contracts::domain::a001_team::aggregate::Team;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::Deserialize;
use web_sys::window;

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
pub struct TeamPageQuery {
    pub team: Option<String>,
    pub edit: Option<String>,
}

impl TeamPageQuery {
    pub fn parse(search: &str) -> Self {
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
    }

    pub fn allow_edit(&self) -> bool {
        parse_flag(self.edit.as_deref())
    }
}

/// Inline message for a failed load; also raised as an error toast
fn load_failed(toasts: Option<ToastService>, team_id: &str, err: &str) -> String {
    log::error!("failed to load team {}: {}", team_id, err);
    let message = format!("Failed to load team: {}", err);
    if let Some(toasts) = toasts {
        toasts.error(message.clone());
    }
    message
}

fn current_query() -> TeamPageQuery {
    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    TeamPageQuery::parse(&search)
}

#[component]
pub fn TeamSettingsPage() -> impl IntoView {
    let query = current_query();
    let allow_edit = query.allow_edit();
    let team_id = query.team.unwrap_or_default();

    let team = RwSignal::new(Option::<Team>::None);
    let error = RwSignal::new(Option::<String>::None);
    let modified = use_context::<ModifiedRegistry>();
    let toasts = use_context::<ToastService>();

    if team_id.is_empty() {
        error.set(Some("No team selected".to_string()));
    } else {
        let id = team_id.clone();
        Effect::new(move |_| {
            // tracked: reload after a save elsewhere touched "teams"
            let version = modified.map(|m| m.version(TEAMS_KEY)).unwrap_or(0);
            let id = id.clone();
            spawn_local(async move {
                match HttpTeamGateway.fetch_team(&id).await {
                    Ok(t) => {
                        log::debug!("team {} loaded (version {})", id, version);
                        let _ = team.try_set(Some(t));
                        let _ = error.try_set(None);
                    }
                    Err(e) => {
                        let _ = error.try_set(Some(load_failed(toasts, &id, &e)));
                    }
                }
            });
        });
    }

    let title = Signal::derive(move || {
        team.with(|t| {
            t.as_ref()
                .map(|t| t.name.clone())
                .unwrap_or_else(|| "Team".to_string())
        })
    });

    view! {
        <div class="page team-settings-page">
            <PageHeader title=title subtitle="Team settings" />

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            {move || {
                let id = team_id.clone();
                team.get().map(|t| view! {
                    <TeamEditForm team_id=id team=t allow_edit=allow_edit />
                })
            }}
        </div>
    }
}
