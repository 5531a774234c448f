//! Team and join-request endpoints.

use super::{ApiClient, ApiError, segment};
use crate::objects::{CreateJoinRequest, CreateTeam, JoinRequest, Team, UpdateTeam};

impl ApiClient {
    /// `GET teams` – all public teams.
    pub async fn list_teams(&self) -> Result<Vec<Team>, ApiError> {
        self.call("teams", |http, url| http.get(url)).await
    }

    /// `GET teams/my-teams` – teams the current user belongs to.
    pub async fn my_teams(&self) -> Result<Vec<Team>, ApiError> {
        self.call("teams/my-teams", |http, url| http.get(url)).await
    }

    /// `GET teams/{team_id}`
    pub async fn get_team(&self, team_id: &str) -> Result<Team, ApiError> {
        let endpoint = format!("teams/{}", segment(team_id));
        self.call(&endpoint, |http, url| http.get(url)).await
    }

    /// `POST teams`
    pub async fn create_team(&self, team: &CreateTeam) -> Result<Team, ApiError> {
        self.call("teams", |http, url| http.post(url).json(team)).await
    }

    /// `PUT teams/{team_id}`
    pub async fn update_team(&self, team_id: &str, update: &UpdateTeam) -> Result<Team, ApiError> {
        let endpoint = format!("teams/{}", segment(team_id));
        self.call(&endpoint, |http, url| http.put(url).json(update))
            .await
    }

    /// `DELETE teams/{team_id}`
    pub async fn delete_team(&self, team_id: &str) -> Result<(), ApiError> {
        let endpoint = format!("teams/{}", segment(team_id));
        self.call_empty(&endpoint, |http, url| http.delete(url)).await
    }

    /// `POST teams/{team_id}/leave`
    pub async fn leave_team(&self, team_id: &str) -> Result<(), ApiError> {
        let endpoint = format!("teams/{}/leave", segment(team_id));
        self.call_empty(&endpoint, |http, url| http.post(url)).await
    }

    /// `POST teams/{team_id}/join-requests` – ask to join a team.
    pub async fn request_to_join(
        &self,
        team_id: &str,
        request: &CreateJoinRequest,
    ) -> Result<JoinRequest, ApiError> {
        let endpoint = format!("teams/{}/join-requests", segment(team_id));
        self.call(&endpoint, |http, url| http.post(url).json(request))
            .await
    }

    /// `GET teams/{team_id}/join-requests` – pending requests (captain only).
    pub async fn list_join_requests(&self, team_id: &str) -> Result<Vec<JoinRequest>, ApiError> {
        let endpoint = format!("teams/{}/join-requests", segment(team_id));
        self.call(&endpoint, |http, url| http.get(url)).await
    }

    /// `POST teams/{team_id}/join-requests/{request_id}/accept`
    pub async fn accept_join_request(
        &self,
        team_id: &str,
        request_id: &str,
    ) -> Result<JoinRequest, ApiError> {
        self.respond_to_join_request(team_id, request_id, "accept")
            .await
    }

    /// `POST teams/{team_id}/join-requests/{request_id}/reject`
    pub async fn reject_join_request(
        &self,
        team_id: &str,
        request_id: &str,
    ) -> Result<JoinRequest, ApiError> {
        self.respond_to_join_request(team_id, request_id, "reject")
            .await
    }

    async fn respond_to_join_request(
        &self,
        team_id: &str,
        request_id: &str,
        action: &str,
    ) -> Result<JoinRequest, ApiError> {
        let endpoint = format!(
            "teams/{}/join-requests/{}/{action}",
            segment(team_id),
            segment(request_id)
        );
        self.call(&endpoint, |http, url| http.post(url)).await
    }
}
