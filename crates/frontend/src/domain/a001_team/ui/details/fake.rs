//! In-memory `TeamGateway` shared by the form tests

use super::model::TeamGateway;
use async_trait::async_trait;
use contracts::domain::a001_team::aggregate::{Team, TeamUpdateDto};
use std::cell::RefCell;

pub fn sample_team() -> Team {
    Team {
        id: "abc".to_string(),
        name: "Growth".to_string(),
        access_code: "AAAAbbbbCCCCdddd".to_string(),
        created_at: None,
        updated_at: None,
    }
}

/// Records every update call and answers with a canned result
pub struct FakeGateway {
    pub calls: RefCell<Vec<(String, TeamUpdateDto)>>,
    fail_with: Option<String>,
}

impl FakeGateway {
    pub fn ok() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            fail_with: None,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            fail_with: Some(message.to_string()),
        }
    }
}

#[async_trait(?Send)]
impl TeamGateway for FakeGateway {
    async fn fetch_team(&self, _team_id: &str) -> Result<Team, String> {
        Ok(sample_team())
    }

    async fn update_team(&self, team_id: &str, dto: &TeamUpdateDto) -> Result<Team, String> {
        self.calls
            .borrow_mut()
            .push((team_id.to_string(), dto.clone()));
        match &self.fail_with {
            Some(e) => Err(e.clone()),
            None => Ok(sample_team()),
        }
    }
}
