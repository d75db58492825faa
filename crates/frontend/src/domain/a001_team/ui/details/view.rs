use super::model::{HttpTeamGateway, TeamGateway};
use super::state::TeamFormOptions;
use super::view_model::TeamEditViewModel;
use crate::shared::components::ui::{Button, TextField, Toggle};
use crate::shared::components::{FormButtons, FormRow};
use crate::shared::config::AppConfig;
use crate::shared::icons::icon;
use crate::shared::storage::{KeyValueStore, LocalStorage};
use contracts::domain::a001_team::aggregate::Team;
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn TeamEditForm(
    #[prop(into)] team_id: String,
    team: Team,
    #[prop(optional)] allow_edit: bool,
    /// Called after a successful save
    #[prop(optional)]
    on_changed: Option<Callback<()>>,
    /// Favorite marker storage; browser localStorage by default
    #[prop(optional)]
    store: Option<Rc<dyn KeyValueStore>>,
    #[prop(optional)] gateway: Option<Rc<dyn TeamGateway>>,
) -> impl IntoView {
    let cloud_mode = use_context::<AppConfig>()
        .unwrap_or_else(AppConfig::from_env)
        .cloud_mode;
    let vm = TeamEditViewModel::new(
        team_id.clone(),
        &team,
        TeamFormOptions {
            allow_edit,
            cloud_mode,
        },
        gateway.unwrap_or_else(|| Rc::new(HttpTeamGateway)),
        store.unwrap_or_else(|| Rc::new(LocalStorage)),
        on_changed,
    );

    let editor = vm.editor;
    let layout = editor.get_untracked().layout();
    let team_name = team.name.clone();

    let name_value = Signal::derive(move || editor.with(|e| e.values().name.clone()));
    let name_error = Signal::derive(move || editor.with(|e| e.errors().name.clone()));
    let access_code = Signal::derive(move || editor.with(|e| e.values().access_code.clone()));
    let access_code_error =
        Signal::derive(move || editor.with(|e| e.errors().access_code.clone()));
    let is_favorite = Signal::derive(move || editor.with(|e| e.is_favorite()));
    let submitting = Signal::derive(move || editor.with(|e| e.is_submitting()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.save_command();
    };

    view! {
        <form class="details-form team-edit-form" on:submit=on_submit novalidate=true>
            {move || editor.with(|e| e.submit_error().map(str::to_string)).map(|e| view! {
                <div class="error">{e}</div>
            })}

            <FormRow label="Team ID">
                <TextField value=Signal::stored(team_id) read_only=true allow_copy=true />
            </FormRow>

            <FormRow label="Name" error=name_error>
                {if layout.name_editable {
                    view! {
                        <TextField
                            name="name"
                            value=name_value
                            invalid=Signal::derive(move || name_error.get().is_some())
                            on_input=Callback::new(move |v: String| vm.set_name(v))
                        />
                    }
                    .into_any()
                } else {
                    view! { <span class="form-row__text">{team_name}</span> }.into_any()
                }}
            </FormRow>

            {layout.show_access_code.then(|| view! {
                <FormRow label="Access code" error=access_code_error>
                    <div class="flex-row gap-10">
                        <TextField value=access_code read_only=true allow_copy=true />
                        <Button on_click=Callback::new(move |_: leptos::ev::MouseEvent| vm.regenerate_command())>
                            {icon("refresh")}
                            "Regenerate"
                        </Button>
                    </div>
                    {layout.show_favorite.then(|| view! {
                        <div class="mt-30">
                            <Toggle
                                id="team-favorite"
                                checked=is_favorite
                                on_checked=Callback::new(move |checked: bool| vm.toggle_favorite(checked))
                            >
                                "Set as favorite team"
                            </Toggle>
                        </div>
                    })}
                </FormRow>
            })}

            {layout.show_submit.then(|| view! {
                <FormButtons>
                    <Button variant="primary" button_type="submit" busy=submitting>
                        {icon("save")}
                        "Save"
                    </Button>
                </FormButtons>
            })}
        </form>
    }
}
