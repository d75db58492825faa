use crate::domain::a001_team::favorite::FavoriteTeam;
use crate::shared::storage::KeyValueStore;
use contracts::domain::a001_team::aggregate::{
    generate_access_code, validate_access_code, Team, TeamUpdateDto,
};

pub const NAME_REQUIRED: &str = "Required";

/// Editable values of the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamFormValues {
    pub name: String,
    pub access_code: String,
}

impl From<&Team> for TeamFormValues {
    fn from(team: &Team) -> Self {
        Self {
            name: team.name.clone(),
            access_code: team.access_code.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TeamFormOptions {
    pub allow_edit: bool,
    pub cloud_mode: bool,
}

/// Which parts of the form are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamFormLayout {
    pub name_editable: bool,
    pub show_access_code: bool,
    pub show_favorite: bool,
    pub show_submit: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub access_code: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.access_code.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// Form rendered without edit capability
    ReadOnly,
    /// An update request is still in flight
    InFlight,
    /// Field validation failed; details are in `TeamEditor::errors`
    Invalid,
}

/// A submission that passed validation and is waiting for the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmit {
    pub values: TeamFormValues,
    pub request: TeamUpdateDto,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Saved,
    Failed(String),
}

/// State of the team settings form.
///
/// `values` is what the inputs show, `baseline` what dirty tracking compares
/// against. A regenerated access code lives only in `values` until a save
/// succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamEditor {
    team_id: String,
    options: TeamFormOptions,
    baseline: TeamFormValues,
    values: TeamFormValues,
    is_favorite: bool,
    errors: FieldErrors,
    submit_error: Option<String>,
    submitting: bool,
    submitted_once: bool,
}

impl TeamEditor {
    pub fn new(
        team_id: impl Into<String>,
        team: &Team,
        options: TeamFormOptions,
        store: &dyn KeyValueStore,
    ) -> Self {
        let team_id = team_id.into();
        let is_favorite = FavoriteTeam::new(store).is_favorite(&team_id);
        let values = TeamFormValues::from(team);
        Self {
            team_id,
            options,
            baseline: values.clone(),
            values,
            is_favorite,
            errors: FieldErrors::default(),
            submit_error: None,
            submitting: false,
            submitted_once: false,
        }
    }

    pub fn team_id(&self) -> &str {
        &self.team_id
    }

    pub fn layout(&self) -> TeamFormLayout {
        let allow_edit = self.options.allow_edit;
        let access_code = allow_edit && !self.options.cloud_mode;
        TeamFormLayout {
            name_editable: allow_edit,
            show_access_code: access_code,
            show_favorite: access_code,
            show_submit: allow_edit,
        }
    }

    pub fn values(&self) -> &TeamFormValues {
        &self.values
    }

    pub fn baseline(&self) -> &TeamFormValues {
        &self.baseline
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    pub fn is_favorite(&self) -> bool {
        self.is_favorite
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_dirty(&self) -> bool {
        self.values != self.baseline
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        if !self.options.allow_edit {
            return;
        }
        self.values.name = name.into();
        // revalidate on change only once the user has tried to submit
        if self.submitted_once {
            self.validate_name();
        }
    }

    /// Replace the access code with a fresh random one.
    ///
    /// Marks the form dirty and validates the field; nothing is sent until the
    /// form is saved. Returns `None` when the access-code section is hidden.
    pub fn regenerate_access_code(&mut self) -> Option<&str> {
        self.set_access_code(generate_access_code())
    }

    pub fn set_access_code(&mut self, code: impl Into<String>) -> Option<&str> {
        if !self.layout().show_access_code {
            return None;
        }
        self.values.access_code = code.into();
        self.validate_access_code();
        Some(&self.values.access_code)
    }

    /// Flip the favorite marker. Synchronous, no request is made.
    pub fn toggle_favorite(&mut self, checked: bool, store: &dyn KeyValueStore) {
        if !self.layout().show_favorite {
            return;
        }
        self.is_favorite = checked;
        FavoriteTeam::new(store).set(&self.team_id, checked);
    }

    fn validate_name(&mut self) -> bool {
        self.errors.name = if self.values.name.trim().is_empty() {
            Some(NAME_REQUIRED.to_string())
        } else {
            None
        };
        self.errors.name.is_none()
    }

    fn validate_access_code(&mut self) -> bool {
        self.errors.access_code = validate_access_code(&self.values.access_code).err();
        self.errors.access_code.is_none()
    }

    /// Validate and build the update request.
    ///
    /// The request always carries the name; the access code is only sent
    /// when it differs from the baseline.
    pub fn begin_submit(&mut self) -> Result<PendingSubmit, SubmitError> {
        if !self.options.allow_edit {
            return Err(SubmitError::ReadOnly);
        }
        if self.submitting {
            return Err(SubmitError::InFlight);
        }
        self.submitted_once = true;

        let name_ok = self.validate_name();
        let code_ok = if self.values.access_code != self.baseline.access_code {
            self.validate_access_code()
        } else {
            self.errors.access_code = None;
            true
        };
        if !(name_ok && code_ok) {
            return Err(SubmitError::Invalid);
        }

        self.submit_error = None;
        self.submitting = true;

        let values = self.values.clone();
        let access_code = (values.access_code != self.baseline.access_code)
            .then(|| values.access_code.clone());
        Ok(PendingSubmit {
            request: TeamUpdateDto {
                name: Some(values.name.clone()),
                access_code,
            },
            values,
        })
    }

    /// Apply the server's answer to a submission started by `begin_submit`.
    ///
    /// On success the baseline becomes the submitted values; edits made while
    /// the request was in flight stay in `values` and keep the form dirty.
    /// On failure nothing is rolled back.
    pub fn finish_submit<T>(
        &mut self,
        pending: PendingSubmit,
        result: Result<T, String>,
    ) -> SubmitOutcome {
        self.submitting = false;
        match result {
            Ok(_) => {
                self.baseline = pending.values;
                self.submit_error = None;
                SubmitOutcome::Saved
            }
            Err(e) => {
                self.submit_error = Some(e.clone());
                SubmitOutcome::Failed(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_team::ui::details::fake::{sample_team as team, FakeGateway};
    use crate::domain::a001_team::ui::details::TeamGateway;
    use crate::shared::storage::MemoryStore;
    use contracts::domain::a001_team::aggregate::{ACCESS_CODE_LEN, FAVORITE_TEAM_KEY};

    fn editor(allow_edit: bool, cloud_mode: bool) -> (TeamEditor, MemoryStore) {
        let store = MemoryStore::new();
        let editor = TeamEditor::new(
            "abc",
            &team(),
            TeamFormOptions {
                allow_edit,
                cloud_mode,
            },
            &store,
        );
        (editor, store)
    }

    /// Drive one save through the gateway the way the view model does
    fn save(editor: &mut TeamEditor, gateway: &FakeGateway) -> Result<SubmitOutcome, SubmitError> {
        let pending = editor.begin_submit()?;
        let result = futures::executor::block_on(
            gateway.update_team(editor.team_id(), &pending.request),
        );
        Ok(editor.finish_submit(pending, result))
    }

    #[test]
    fn test_read_only_layout() {
        for cloud_mode in [false, true] {
            let (editor, _) = editor(false, cloud_mode);
            let layout = editor.layout();
            assert!(!layout.name_editable);
            assert!(!layout.show_submit);
            assert!(!layout.show_access_code);
            assert!(!layout.show_favorite);
        }
    }

    #[test]
    fn test_cloud_mode_hides_access_code_and_favorite() {
        for allow_edit in [false, true] {
            let (editor, _) = editor(allow_edit, true);
            assert!(!editor.layout().show_access_code);
            assert!(!editor.layout().show_favorite);
        }
    }

    #[test]
    fn test_editable_self_hosted_layout() {
        let (editor, _) = editor(true, false);
        assert_eq!(
            editor.layout(),
            TeamFormLayout {
                name_editable: true,
                show_access_code: true,
                show_favorite: true,
                show_submit: true,
            }
        );
    }

    #[test]
    fn test_read_only_ignores_edits() {
        let (mut editor, store) = editor(false, false);
        editor.set_name("Other");
        assert!(editor.regenerate_access_code().is_none());
        editor.toggle_favorite(true, &store);
        assert!(!editor.is_dirty());
        assert!(store.is_empty());
        assert_eq!(editor.begin_submit(), Err(SubmitError::ReadOnly));
    }

    #[test]
    fn test_regenerate_marks_dirty() {
        let (mut editor, _) = editor(true, false);
        let before = editor.values().access_code.clone();

        let code = editor.regenerate_access_code().unwrap().to_string();

        assert_eq!(code.len(), ACCESS_CODE_LEN);
        assert_ne!(code, before);
        assert_eq!(editor.values().access_code, code);
        assert_eq!(editor.baseline().access_code, before);
        assert!(editor.is_dirty());
        assert!(editor.errors().is_empty());
        assert!(!editor.is_submitting());
    }

    #[test]
    fn test_empty_name_blocks_submit() {
        let (mut editor, _) = editor(true, false);
        let gateway = FakeGateway::ok();
        editor.set_name("   ");

        assert_eq!(save(&mut editor, &gateway), Err(SubmitError::Invalid));
        assert_eq!(editor.errors().name.as_deref(), Some(NAME_REQUIRED));
        assert!(gateway.calls.borrow().is_empty());
        assert!(!editor.is_submitting());

        // fixing the field clears the error right away
        editor.set_name("Growth Team");
        assert!(editor.errors().name.is_none());
    }

    #[test]
    fn test_successful_submit_resets_baseline() {
        let (mut editor, _) = editor(true, false);
        let gateway = FakeGateway::ok();
        editor.set_name("Growth Team");

        let outcome = save(&mut editor, &gateway).unwrap();

        assert_eq!(outcome, SubmitOutcome::Saved);
        let calls = gateway.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "abc");
        assert_eq!(calls[0].1.name.as_deref(), Some("Growth Team"));
        assert_eq!(calls[0].1.access_code, None);
        assert_eq!(editor.baseline().name, "Growth Team");
        assert!(!editor.is_dirty());
        assert!(editor.submit_error().is_none());
    }

    #[test]
    fn test_regenerated_code_is_sent_on_save() {
        let (mut editor, _) = editor(true, false);
        let gateway = FakeGateway::ok();
        let code = editor.regenerate_access_code().unwrap().to_string();

        save(&mut editor, &gateway).unwrap();

        assert_eq!(gateway.calls.borrow()[0].1.access_code, Some(code.clone()));
        assert_eq!(editor.baseline().access_code, code);
    }

    #[test]
    fn test_failed_submit_keeps_local_state() {
        let (mut editor, _) = editor(true, false);
        let gateway = FakeGateway::failing("HTTP 500");
        let code = editor.regenerate_access_code().unwrap().to_string();

        let outcome = save(&mut editor, &gateway).unwrap();

        assert_eq!(outcome, SubmitOutcome::Failed("HTTP 500".to_string()));
        assert_eq!(editor.submit_error(), Some("HTTP 500"));
        assert_eq!(editor.values().access_code, code);
        assert!(editor.is_dirty());
        assert_eq!(gateway.calls.borrow().len(), 1);

        // resubmitting is allowed and clears the error on success
        let gateway = FakeGateway::ok();
        assert_eq!(save(&mut editor, &gateway), Ok(SubmitOutcome::Saved));
        assert!(editor.submit_error().is_none());
    }

    #[test]
    fn test_second_submit_while_in_flight_is_rejected() {
        let (mut editor, _) = editor(true, false);
        let pending = editor.begin_submit().unwrap();
        assert_eq!(editor.begin_submit(), Err(SubmitError::InFlight));
        editor.finish_submit(pending, Ok(()));
        assert!(editor.begin_submit().is_ok());
    }

    #[test]
    fn test_edit_during_flight_stays_dirty() {
        let (mut editor, _) = editor(true, false);
        editor.set_name("First");
        let pending = editor.begin_submit().unwrap();
        editor.set_name("Second");
        editor.finish_submit(pending, Ok(()));
        assert_eq!(editor.baseline().name, "First");
        assert_eq!(editor.values().name, "Second");
        assert!(editor.is_dirty());
    }

    #[test]
    fn test_bad_access_code_is_reported_on_field() {
        let (mut editor, _) = editor(true, false);
        editor.set_access_code("nope");
        assert!(editor.errors().access_code.is_some());
        assert_eq!(editor.begin_submit(), Err(SubmitError::Invalid));
    }

    #[test]
    fn test_favorite_toggle_writes_store() {
        let (mut editor, store) = editor(true, false);
        assert!(!editor.is_favorite());

        editor.toggle_favorite(true, &store);
        assert!(editor.is_favorite());
        assert_eq!(store.get(FAVORITE_TEAM_KEY).as_deref(), Some("abc"));

        store.set(FAVORITE_TEAM_KEY, "someone-else");
        editor.toggle_favorite(false, &store);
        assert!(!editor.is_favorite());
        assert_eq!(store.get(FAVORITE_TEAM_KEY), None);
    }

    #[test]
    fn test_initial_favorite_read_from_store() {
        let store = MemoryStore::new();
        store.set(FAVORITE_TEAM_KEY, "abc");
        let editor = TeamEditor::new("abc", &team(), TeamFormOptions::default(), &store);
        assert!(editor.is_favorite());
    }
}
