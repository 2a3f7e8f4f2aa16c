use crate::tools::{Tool, ToolContext, UpdateTodos, UpdateTodosArgs};
use plan_core::PlanConfig;
use serde_json::{Value as JsonValue, json};

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Runtime::new().unwrap()
}

fn todos_message(tool: &str, todos: JsonValue) -> JsonValue {
    json!({
        "role": "tool",
        "content": [{
            "type": "tool-result",
            "toolCallId": "call-1",
            "toolName": tool,
            "output": { "type": "json", "value": { "todos": todos } }
        }]
    })
}

#[test]
fn test_update_todos_tool_name() {
    let tool = UpdateTodos::default();
    assert_eq!(tool.name(), "update_todos");
}

#[test]
fn test_update_todos_tool_description() {
    let tool = UpdateTodos::default();
    assert!(tool.description().contains("task list"));
}

#[test]
fn test_update_todos_parameters_schema() {
    let tool = UpdateTodos::default();
    let schema = tool.parameters_schema();

    assert_eq!(schema["type"], "object");
    for key in ["new", "inProgress", "done", "clearPreviouslyDone", "insertAt"] {
        assert!(schema["properties"][key].is_object(), "missing {key}");
    }
    let required = schema["required"].as_array().unwrap();
    assert!(required.contains(&json!("new")));
    assert!(!required.contains(&json!("insertAt")));
}

#[test]
fn test_update_todos_args_parsing() {
    let args: UpdateTodosArgs = serde_json::from_value(json!({
        "new": ["Find venue"],
        "inProgress": [],
        "done": [0],
        "insertAt": 2
    }))
    .unwrap();

    assert_eq!(args.additions, vec!["Find venue".to_string()]);
    assert_eq!(args.mark_done, vec![0]);
    assert!(!args.clear_completed);
    assert_eq!(args.insert_at, Some(2));
}

#[test]
fn test_update_todos_without_history() {
    let rt = runtime();
    rt.block_on(async {
        let tool = UpdateTodos::default();
        let result = tool
            .execute(
                json!({ "new": ["Scrape site", "Send email"], "inProgress": [], "done": [] }),
                &ToolContext::empty(),
            )
            .await
            .unwrap();

        assert_eq!(
            result,
            json!({ "todos": [
                { "text": "Scrape site", "status": "new" },
                { "text": "Send email", "status": "new" }
            ] })
        );
    });
}

#[test]
fn test_update_todos_continues_from_transcript() {
    let rt = runtime();
    rt.block_on(async {
        let transcript = vec![
            json!({ "role": "user", "content": [{ "type": "text", "text": "scrape and email" }] }),
            todos_message(
                "updateTodosTool",
                json!([
                    { "text": "Scrape site", "status": "new" },
                    { "text": "Send email", "status": "new" }
                ]),
            ),
            json!({ "role": "assistant", "content": [{ "type": "text", "text": "Starting." }] }),
        ];

        let tool = UpdateTodos::default();
        let result = tool
            .execute(
                json!({ "new": [], "inProgress": [0], "done": [] }),
                &ToolContext::new(&transcript),
            )
            .await
            .unwrap();

        assert_eq!(result["todos"][0]["status"], "in-progress");
        assert_eq!(result["todos"][1]["status"], "pending");
    });
}

#[test]
fn test_update_todos_output_feeds_next_call() {
    let rt = runtime();
    rt.block_on(async {
        let tool = UpdateTodos::default();
        let mut transcript = Vec::new();

        let first = tool
            .execute(json!({ "new": ["A", "B"] }), &ToolContext::new(&transcript))
            .await
            .unwrap();
        transcript.push(todos_message("update_todos", first["todos"].clone()));

        let second = tool
            .execute(
                json!({ "done": [0], "new": ["C"], "insertAt": 1 }),
                &ToolContext::new(&transcript),
            )
            .await
            .unwrap();

        assert_eq!(
            second,
            json!({ "todos": [
                { "text": "A", "status": "done" },
                { "text": "C", "status": "new" },
                { "text": "B", "status": "pending" }
            ] })
        );
    });
}

#[test]
fn test_update_todos_strict_config_keeps_new() {
    let rt = runtime();
    rt.block_on(async {
        let transcript = vec![todos_message(
            "updateTodosTool",
            json!([{ "text": "A", "status": "new" }]),
        )];
        let tool = UpdateTodos::new(PlanConfig::new().with_auto_promote(false));
        let result = tool
            .execute(json!({ "new": ["B"] }), &ToolContext::new(&transcript))
            .await
            .unwrap();

        assert_eq!(result["todos"][0]["status"], "new");
        assert_eq!(result["todos"][1]["status"], "new");
    });
}

#[test]
fn test_update_todos_ignores_malformed_history() {
    let rt = runtime();
    rt.block_on(async {
        let transcript = vec![
            todos_message("updateTodosTool", json!([{ "text": "kept", "status": "pending" }])),
            todos_message("updateTodosTool", json!({ "text": "not a list" })),
            json!(null),
        ];
        let tool = UpdateTodos::default();
        let result = tool
            .execute(json!({ "inProgress": [0, 5] }), &ToolContext::new(&transcript))
            .await
            .unwrap();

        assert_eq!(
            result,
            json!({ "todos": [{ "text": "kept", "status": "in-progress" }] })
        );
    });
}

#[test]
fn test_update_todos_rejects_wrong_arg_types() {
    let rt = runtime();
    rt.block_on(async {
        let tool = UpdateTodos::default();
        let result = tool
            .execute(json!({ "done": ["first"] }), &ToolContext::empty())
            .await;

        assert!(result.is_err());
    });
}

#[test]
fn test_update_todos_tolerates_unusable_numeric_indices() {
    let rt = runtime();
    rt.block_on(async {
        let transcript = vec![todos_message(
            "updateTodosTool",
            json!([{ "text": "A", "status": "pending" }]),
        )];
        let tool = UpdateTodos::default();

        for args in [
            json!({ "done": [18446744073709551615u64] }),
            json!({ "inProgress": [1e20] }),
            json!({ "inProgress": [0.5] }),
        ] {
            let result = tool
                .execute(args.clone(), &ToolContext::new(&transcript))
                .await
                .unwrap_or_else(|e| panic!("{args} failed: {e}"));
            assert_eq!(
                result,
                json!({ "todos": [{ "text": "A", "status": "pending" }] })
            );
        }

        let result = tool
            .execute(json!({ "inProgress": [0.0] }), &ToolContext::new(&transcript))
            .await
            .unwrap();
        assert_eq!(result["todos"][0]["status"], "in-progress");

        let result = tool
            .execute(
                json!({ "new": ["B"], "insertAt": 1.0 }),
                &ToolContext::new(&transcript),
            )
            .await
            .unwrap();
        assert_eq!(result["todos"][1]["text"], "B");
    });
}
