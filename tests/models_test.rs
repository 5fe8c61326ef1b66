use taskdeck::api::{RegisterRequest, Task, TaskPriority, TaskStatus, TaskType};

fn decode(json: &str) -> Task {
    serde_json::from_str(json).unwrap()
}

#[test]
fn test_decode_full_task() {
    let task = decode(
        r#"{
            "id": 42,
            "title": "Fix login redirect loop",
            "type": "Bug",
            "status": "TODO",
            "priority": "HIGH",
            "team": "platform",
            "task": "Users get bounced between /login and /home.",
            "createdAt": "2025-03-14T09:26:53.000Z",
            "updatedAt": "2025-03-15T11:00:00.000Z"
        }"#,
    );

    assert_eq!(task.id, 42);
    assert_eq!(task.title, "Fix login redirect loop");
    assert_eq!(task.kind, TaskType::Bug);
    assert_eq!(task.status, TaskStatus::Todo);
    assert_eq!(task.priority, TaskPriority::High);
    assert_eq!(task.team, "platform");
    assert_eq!(task.body, "Users get bounced between /login and /home.");
}

#[test]
fn test_decode_task_with_missing_optional_fields() {
    let task = decode(
        r#"{
            "id": 1,
            "title": "t",
            "type": "Feature",
            "status": "IN_PROGRESS",
            "priority": "LOW"
        }"#,
    );

    assert_eq!(task.status, TaskStatus::InProgress);
    assert!(task.team.is_empty());
    assert!(task.body.is_empty());
    assert!(task.created_at.is_empty());
}

#[test]
fn test_unknown_enum_values_fall_back() {
    let task = decode(
        r#"{
            "id": 2,
            "title": "t",
            "type": "CHORE",
            "status": "ARCHIVED",
            "priority": "URGENT"
        }"#,
    );

    assert_eq!(task.kind, TaskType::Unknown);
    assert_eq!(task.status, TaskStatus::Unknown);
    assert_eq!(task.priority, TaskPriority::Unknown);
}

#[test]
fn test_envelope_unwrapping() {
    let envelope: taskdeck::api::DataEnvelope<Task> = serde_json::from_str(
        r#"{"data": {"id": 3, "title": "wrapped", "type": "Documentation", "status": "Done", "priority": "MEDIUM"}}"#,
    )
    .unwrap();

    assert_eq!(envelope.data.id, 3);
    assert_eq!(envelope.data.kind, TaskType::Documentation);
    assert_eq!(envelope.data.status, TaskStatus::Done);
}

#[test]
fn test_register_request_serializes_credentials_only() {
    let request = RegisterRequest {
        username: "alice".to_string(),
        email: "alice@example.com".to_string(),
        password: "hunter2hunter2".to_string(),
    };

    let json = serde_json::to_value(&request).unwrap();
    let object = json.as_object().unwrap();

    assert_eq!(object.len(), 3);
    assert_eq!(object["username"], "alice");
    assert_eq!(object["email"], "alice@example.com");
    assert_eq!(object["password"], "hunter2hunter2");
    assert!(!object.contains_key("confirmation"));
}
