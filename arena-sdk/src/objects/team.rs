//! Team management types.
//!
//! The client forwards these unchanged; team rules are enforced by the server.

use serde::{Deserialize, Serialize};

use super::wire;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "TeamWire")]
pub struct Team {
    pub id: String,
    pub name: String,
    pub game: Option<String>,
    pub tag: Option<String>,
    pub description: Option<String>,
    pub captain_id: Option<String>,
    pub members: Vec<TeamMember>,
    pub max_members: Option<u32>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TeamWire {
    #[serde(default)]
    id: Option<String>,
    #[serde(default, rename = "_id")]
    object_id: Option<String>,
    name: String,
    #[serde(default)]
    game: Option<String>,
    #[serde(default)]
    tag: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    captain_id: Option<String>,
    #[serde(default)]
    members: Vec<TeamMember>,
    #[serde(default)]
    max_members: Option<u32>,
}

impl TryFrom<TeamWire> for Team {
    type Error = String;

    fn try_from(wire: TeamWire) -> Result<Self, Self::Error> {
        Ok(Self {
            id: wire::require("id", [wire.id, wire.object_id])?,
            name: wire.name,
            game: wire.game,
            tag: wire.tag,
            description: wire.description,
            captain_id: wire.captain_id,
            members: wire.members,
            max_members: wire.max_members,
        })
    }
}

impl Team {
    /// Whether the team has reached its member cap, if it has one.
    pub fn is_full(&self) -> bool {
        self.max_members
            .is_some_and(|max| self.members.len() >= max as usize)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "TeamMemberWire")]
pub struct TeamMember {
    pub user_id: String,
    pub username: Option<String>,
    pub role: TeamRole,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TeamMemberWire {
    #[serde(default)]
    user_id: Option<String>,
    #[serde(default)]
    user: Option<String>,
    #[serde(default)]
    username: Option<String>,
    #[serde(default = "default_role")]
    role: TeamRole,
}

impl TryFrom<TeamMemberWire> for TeamMember {
    type Error = String;

    fn try_from(wire: TeamMemberWire) -> Result<Self, Self::Error> {
        Ok(Self {
            user_id: wire::require("userId", [wire.user_id, wire.user])?,
            username: wire.username,
            role: wire.role,
        })
    }
}

fn default_role() -> TeamRole {
    TeamRole::Member
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamRole {
    Captain,
    Member,
    #[serde(other)]
    Unknown,
}

/// Body of `POST /teams`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeam {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Body of `PUT /teams/{id}`. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeam {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Body of `POST /teams/{id}/join-requests`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateJoinRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "JoinRequestWire")]
pub struct JoinRequest {
    pub id: String,
    pub team_id: Option<String>,
    pub user_id: String,
    pub username: Option<String>,
    pub status: JoinRequestStatus,
    pub message: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct JoinRequestWire {
    #[serde(default)]
    id: Option<String>,
    #[serde(default, rename = "_id")]
    object_id: Option<String>,
    #[serde(default)]
    team_id: Option<String>,
    user_id: String,
    #[serde(default)]
    username: Option<String>,
    status: JoinRequestStatus,
    #[serde(default)]
    message: Option<String>,
}

impl TryFrom<JoinRequestWire> for JoinRequest {
    type Error = String;

    fn try_from(wire: JoinRequestWire) -> Result<Self, Self::Error> {
        Ok(Self {
            id: wire::require("id", [wire.id, wire.object_id])?,
            team_id: wire.team_id,
            user_id: wire.user_id,
            username: wire.username,
            status: wire.status,
            message: wire.message,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JoinRequestStatus {
    Pending,
    Accepted,
    Rejected,
    #[serde(other)]
    Unknown,
}
