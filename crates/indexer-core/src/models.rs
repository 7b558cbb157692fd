use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    Allocate,
    Unallocate,
    Reallocate,
}

#[derive(Error, Debug, PartialEq)]
#[error("Invalid action type: {0}")]
pub struct ParseActionTypeError(String);

impl FromStr for ActionType {
    type Err = ParseActionTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "allocate" => Ok(ActionType::Allocate),
            "unallocate" => Ok(ActionType::Unallocate),
            "reallocate" => Ok(ActionType::Reallocate),
            _ => Err(ParseActionTypeError(s.to_string())),
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionType::Allocate => write!(f, "allocate"),
            ActionType::Unallocate => write!(f, "unallocate"),
            ActionType::Reallocate => write!(f, "reallocate"),
        }
    }
}

/// Lifecycle states an action moves through on the management server.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActionStatus {
    Queued,
    Approved,
    Deploying,
    Pending,
    Success,
    Failed,
    Canceled,
}

#[derive(Error, Debug, PartialEq)]
#[error("Invalid action status: {0}")]
pub struct ParseActionStatusError(String);

impl FromStr for ActionStatus {
    type Err = ParseActionStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "queued" => Ok(ActionStatus::Queued),
            "approved" => Ok(ActionStatus::Approved),
            "deploying" => Ok(ActionStatus::Deploying),
            "pending" => Ok(ActionStatus::Pending),
            "success" => Ok(ActionStatus::Success),
            "failed" => Ok(ActionStatus::Failed),
            "canceled" => Ok(ActionStatus::Canceled),
            _ => Err(ParseActionStatusError(s.to_string())),
        }
    }
}

impl fmt::Display for ActionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionStatus::Queued => write!(f, "queued"),
            ActionStatus::Approved => write!(f, "approved"),
            ActionStatus::Deploying => write!(f, "deploying"),
            ActionStatus::Pending => write!(f, "pending"),
            ActionStatus::Success => write!(f, "success"),
            ActionStatus::Failed => write!(f, "failed"),
            ActionStatus::Canceled => write!(f, "canceled"),
        }
    }
}

/// An entry in the management server's action queue, as returned by the
/// GraphQL API. Field renames track the wire names (`type`, `deploymentID`,
/// `allocationID`) rather than Rust conventions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Action {
    pub id: i64,
    #[serde(rename = "protocolNetwork")]
    pub protocol_network: String,
    #[serde(rename = "type")]
    pub action_type: ActionType,
    #[serde(rename = "deploymentID")]
    pub deployment_id: Option<String>,
    #[serde(rename = "allocationID")]
    pub allocation_id: Option<String>,
    pub amount: Option<String>,
    pub poi: Option<String>,
    pub force: Option<bool>,
    pub priority: i64,
    pub status: ActionStatus,
    pub source: String,
    pub reason: String,
}
