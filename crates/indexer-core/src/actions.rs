//! Operations on the management server's action queue.

use serde::{Deserialize, Serialize};

use crate::client::IndexerManagementClient;
use crate::error::CoreError;
use crate::models::Action;

pub const CANCEL_ACTIONS_MUTATION: &str = r#"
mutation cancelActions($actionIDs: [Int!]!) {
  cancelActions(actionIDs: $actionIDs) {
    id
    protocolNetwork
    type
    deploymentID
    allocationID
    amount
    poi
    force
    priority
    status
    source
    reason
  }
}
"#;

#[derive(Serialize)]
struct CancelActionsVariables<'a> {
    #[serde(rename = "actionIDs")]
    action_ids: &'a [i64],
}

#[derive(Deserialize)]
struct CancelActionsData {
    #[serde(rename = "cancelActions")]
    cancel_actions: Option<Vec<Action>>,
}

/// Cancel the queued actions with the given ids.
///
/// The server marks each matching action `canceled` and returns the updated
/// records in its own order. An empty result means none of the ids matched a
/// queued action, which is reported as an error.
pub async fn cancel_actions(
    client: &IndexerManagementClient,
    action_ids: &[i64],
) -> Result<Vec<Action>, CoreError> {
    let data: CancelActionsData = client
        .execute(CANCEL_ACTIONS_MUTATION, CancelActionsVariables { action_ids })
        .await?;

    let canceled = data.cancel_actions.unwrap_or_default();
    if canceled.is_empty() {
        return Err(CoreError::NotFound(format!(
            "Cancel action failed: no action found with ids {:?}",
            action_ids
        )));
    }

    Ok(canceled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn variables_serialize_with_wire_name() {
        let variables = CancelActionsVariables { action_ids: &[3, 7] };
        let value = serde_json::to_value(&variables).unwrap();
        assert_eq!(value, json!({ "actionIDs": [3, 7] }));
    }

    #[test]
    fn mutation_selects_every_display_field() {
        for field in [
            "id",
            "protocolNetwork",
            "type",
            "deploymentID",
            "allocationID",
            "amount",
            "poi",
            "force",
            "priority",
            "status",
            "source",
            "reason",
        ] {
            assert!(
                CANCEL_ACTIONS_MUTATION.contains(field),
                "mutation is missing field {field}"
            );
        }
    }

    #[test]
    fn data_decodes_absent_list_as_none() {
        let data: CancelActionsData = serde_json::from_value(json!({})).unwrap();
        assert!(data.cancel_actions.is_none());
    }
}
