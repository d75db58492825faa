use super::model::TeamGateway;
use super::state::{PendingSubmit, SubmitError, SubmitOutcome, TeamEditor, TeamFormOptions};
use crate::shared::modified::{ModifiedRegistry, TEAMS_KEY};
use crate::shared::storage::KeyValueStore;
use crate::shared::toast::ToastService;
use contracts::domain::a001_team::aggregate::Team;
use leptos::prelude::*;
use std::rc::Rc;

pub const SAVED_MESSAGE: &str = "Saved successfully.";

/// ViewModel for the team settings form
///
/// `Copy` so it can be moved into any number of view closures; the injected
/// seams live in thread-local arena slots.
#[derive(Clone, Copy)]
pub struct TeamEditViewModel {
    pub editor: RwSignal<TeamEditor>,
    gateway: StoredValue<Rc<dyn TeamGateway>, leptos::prelude::LocalStorage>,
    store: StoredValue<Rc<dyn KeyValueStore>, leptos::prelude::LocalStorage>,
    on_changed: Option<Callback<()>>,
    toasts: Option<ToastService>,
    modified: Option<ModifiedRegistry>,
}

impl TeamEditViewModel {
    pub fn new(
        team_id: String,
        team: &Team,
        options: TeamFormOptions,
        gateway: Rc<dyn TeamGateway>,
        store: Rc<dyn KeyValueStore>,
        on_changed: Option<Callback<()>>,
    ) -> Self {
        let editor = TeamEditor::new(team_id, team, options, store.as_ref());
        Self {
            editor: RwSignal::new(editor),
            gateway: StoredValue::new_local(gateway),
            store: StoredValue::new_local(store),
            on_changed,
            toasts: use_context::<ToastService>(),
            modified: use_context::<ModifiedRegistry>(),
        }
    }

    pub fn set_name(&self, name: String) {
        self.editor.update(|e| e.set_name(name));
    }

    pub fn regenerate_command(&self) {
        self.editor.update(|e| {
            if e.regenerate_access_code().is_some() {
                log::debug!("team {}: access code regenerated", e.team_id());
            }
        });
    }

    pub fn toggle_favorite(&self, checked: bool) {
        let store = self.store.get_value();
        self.editor
            .update(|e| e.toggle_favorite(checked, store.as_ref()));
    }

    /// Validate, then send the update request in the background.
    pub fn save_command(&self) {
        if let Some(pending) = self.begin_save() {
            let this = *self;
            leptos::task::spawn_local(async move {
                this.complete_save(pending).await;
            });
        }
    }

    /// Validate and send the update request, resolving once the response
    /// has been applied. `None` when nothing was sent or the form is gone.
    pub async fn save(self) -> Option<SubmitOutcome> {
        let pending = self.begin_save()?;
        self.complete_save(pending).await
    }

    fn begin_save(&self) -> Option<PendingSubmit> {
        let mut started = Err(SubmitError::InFlight);
        self.editor.update(|e| started = e.begin_submit());
        match started {
            Ok(pending) => Some(pending),
            Err(SubmitError::Invalid) => None,
            Err(e) => {
                log::debug!("save ignored: {:?}", e);
                None
            }
        }
    }

    /// The response is dropped if the form was disposed in the meantime.
    async fn complete_save(self, pending: PendingSubmit) -> Option<SubmitOutcome> {
        let gateway = self.gateway.try_get_value()?;
        let team_id = self.editor.try_with_untracked(|e| e.team_id().to_string())?;
        let result = gateway.update_team(&team_id, &pending.request).await;
        let outcome = self
            .editor
            .try_update(|e| e.finish_submit(pending, result));

        match &outcome {
            Some(SubmitOutcome::Saved) => {
                log::info!("team {} saved", team_id);
                if let Some(modified) = self.modified {
                    modified.touch(TEAMS_KEY);
                }
                if let Some(on_changed) = self.on_changed {
                    on_changed.run(());
                }
                if let Some(toasts) = self.toasts {
                    toasts.success(SAVED_MESSAGE);
                }
            }
            Some(SubmitOutcome::Failed(e)) => {
                log::warn!("team {} update failed: {}", team_id, e);
            }
            None => log::debug!("team {} form disposed before response", team_id),
        }
        outcome
    }
}
