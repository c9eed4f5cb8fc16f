use serde_json::{Value, json};

/// The Deployment document used by the check-hook scenarios.
pub const DEPLOYMENT_JSON: &str = r#"{
    "kind": "Deployment",
    "spec": {
        "progressDeadlineSeconds": 600,
        "replicas": 1,
        "revisionHistoryLimit": 10
    },
    "status": {
        "replicas": 1,
        "conditions": [
            {
                "status": "True",
                "type": "Progressing"
            },
            {
                "status": "True",
                "type": "Available"
            }
        ]
    }
}"#;

pub fn deployment() -> Value {
    serde_json::from_str(DEPLOYMENT_JSON).unwrap()
}

/// A pod with several containers, for references that match more than one node.
pub fn pod_with_containers(ready: &[bool]) -> Value {
    json!({
        "kind": "Pod",
        "status": {
            "phase": "Running",
            "containerStatuses": ready
                .iter()
                .enumerate()
                .map(|(i, r)| json!({ "name": format!("c{}", i), "ready": r, "restartCount": i }))
                .collect::<Vec<_>>()
        }
    })
}
