use task_list_rs::task::{Task, TaskInput};

#[test]
fn test_task_creation() {
    let task = Task::new(1, "buy milk");
    assert_eq!(task.id, 1);
    assert_eq!(task.title, "buy milk");
}

#[test]
fn test_task_deserializes_from_snapshot_entry() {
    let task: Task = serde_json::from_str(r#"{"id": 3, "title": "walk dog"}"#).unwrap();
    assert_eq!(task, Task::new(3, "walk dog"));
}

#[test]
fn test_input_accepts_any_title() {
    let input: TaskInput = serde_json::from_value(serde_json::json!({"title": ""})).unwrap();
    assert_eq!(input.title, "");

    let long = "x".repeat(10_000);
    let input: TaskInput = serde_json::from_value(serde_json::json!({ "title": long })).unwrap();
    assert_eq!(input.title.len(), 10_000);
}
