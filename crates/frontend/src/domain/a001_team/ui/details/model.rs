//! Team Details - Model Layer
//!
//! API access for the team settings form

use crate::shared::api_utils::{api_url, team_path};
use async_trait::async_trait;
use contracts::domain::a001_team::aggregate::{ApiErrorBody, Team, TeamUpdateDto};
use gloo_net::http::{Request, Response};

/// Remote side of the form. Injected so the form can run against a fake.
#[async_trait(?Send)]
pub trait TeamGateway {
    async fn fetch_team(&self, team_id: &str) -> Result<Team, String>;

    async fn update_team(&self, team_id: &str, dto: &TeamUpdateDto) -> Result<Team, String>;
}

/// `TeamGateway` over the backend REST API
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpTeamGateway;

#[async_trait(?Send)]
impl TeamGateway for HttpTeamGateway {
    /// GET /api/teams/:id
    async fn fetch_team(&self, team_id: &str) -> Result<Team, String> {
        let response = Request::get(&api_url(&team_path(team_id)))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;

        if !response.ok() {
            return Err(error_message(response).await);
        }

        response
            .json::<Team>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    }

    /// POST /api/teams/:id
    async fn update_team(&self, team_id: &str, dto: &TeamUpdateDto) -> Result<Team, String> {
        let response = Request::post(&api_url(&team_path(team_id)))
            .header("Accept", "application/json")
            .json(dto)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Failed to send request: {}", e))?;

        if !response.ok() {
            return Err(error_message(response).await);
        }

        response
            .json::<Team>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))
    }
}

/// Prefer the server's `{ "error": ... }` message over a bare status
async fn error_message(response: Response) -> String {
    let status = response.status();
    match response.json::<ApiErrorBody>().await {
        Ok(body) if !body.error.is_empty() => body.error,
        _ => format!("HTTP {}", status),
    }
}
