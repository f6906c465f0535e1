//! Tests for architecture request composition, validation and export.

use super::*;
use crate::test_support::{ScriptedCompletion, sample_project};

const MINIMAL_PLAN: &str =
    r#"{"overview":"x","components":[],"dataModel":"y","apiSpec":"z","techConsiderations":"w"}"#;

const FULL_PLAN: &str = r#"{
  "overview": "Event-driven service",
  "components": [
    {"name": "Gateway", "description": "Routes requests", "dependencies": ["Auth", "Queue"]},
    {"name": "Auth", "description": "Issues tokens", "dependencies": []}
  ],
  "dataModel": "Users, Sessions",
  "apiSpec": "POST /login",
  "techConsiderations": "Horizontal scaling",
  "confidence": 0.9
}"#;

#[test]
fn test_request_embeds_project_and_requirements() {
    let project = sample_project();
    let request = architecture_request("Must handle 10k rps", &project).unwrap();

    assert!(request.starts_with("You are a senior software architect."));
    assert!(request.contains("Project: Foo\nDescription: Internal tooling service\nCategory: custom\nTech Stack: node"));
    assert!(request.contains("Requirements:\nMust handle 10k rps\n"));
}

#[test]
fn test_request_demands_json_schema() {
    let request = architecture_request("anything", &sample_project()).unwrap();

    for key in [
        "\"overview\"",
        "\"components\"",
        "\"dependencies\"",
        "\"dataModel\"",
        "\"apiSpec\"",
        "\"techConsiderations\"",
    ] {
        assert!(request.contains(key), "missing {}", key);
    }
    assert!(request.contains("{\n  \"overview\""));
    assert!(request.ends_with("Respond with only the JSON object and no other text."));
}

#[test]
fn test_request_is_deterministic() {
    let project = sample_project();
    let a = architecture_request("same", &project).unwrap();
    let b = architecture_request("same", &project).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_request_rejects_blank_requirements() {
    let err = architecture_request(" \n\t", &sample_project()).unwrap_err();
    assert!(matches!(err, PromptcraftError::EmptyContext(_)));
}

#[test]
fn test_parse_minimal_plan() {
    let plan = parse_architecture(MINIMAL_PLAN).unwrap();

    assert!(plan.components.is_empty());
    assert_eq!(plan.overview, "x");
    assert_eq!(plan.data_model, "y");
    assert_eq!(plan.api_spec, "z");
    assert_eq!(plan.tech_considerations, "w");
}

#[test]
fn test_parse_full_plan_ignores_extra_keys() {
    let plan = parse_architecture(FULL_PLAN).unwrap();

    assert_eq!(plan.components.len(), 2);
    assert_eq!(plan.components[0].name, "Gateway");
    assert_eq!(plan.components[0].dependencies, vec!["Auth", "Queue"]);
}

#[test]
fn test_dangling_dependencies_are_kept() {
    let plan = parse_architecture(FULL_PLAN).unwrap();
    assert_eq!(plan.unresolved_dependencies(), vec!["Queue"]);
}

#[test]
fn test_parse_tolerates_code_fence() {
    let fenced = format!("```json\n{}\n```", MINIMAL_PLAN);
    assert_eq!(
        parse_architecture(&fenced).unwrap(),
        parse_architecture(MINIMAL_PLAN).unwrap()
    );

    let bare_fence = format!("  ```\n{}\n```  ", MINIMAL_PLAN);
    assert!(parse_architecture(&bare_fence).is_ok());
}

#[test]
fn test_parse_rejects_non_json() {
    let err = parse_architecture("not json").unwrap_err();
    assert!(matches!(err, PromptcraftError::MalformedArchitectureResponse(_)));
}

#[test]
fn test_parse_rejects_missing_components() {
    let raw = r#"{"overview":"x","dataModel":"y","apiSpec":"z","techConsiderations":"w"}"#;
    let err = parse_architecture(raw).unwrap_err();

    match err {
        PromptcraftError::MalformedArchitectureResponse(detail) => {
            assert!(detail.contains("components"), "detail was: {}", detail);
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_parse_rejects_components_not_a_sequence() {
    let raw = r#"{"overview":"x","components":{"name":"A"},"dataModel":"y","apiSpec":"z","techConsiderations":"w"}"#;
    assert!(matches!(
        parse_architecture(raw),
        Err(PromptcraftError::MalformedArchitectureResponse(_))
    ));
}

#[test]
fn test_parse_rejects_component_without_name() {
    let raw = r#"{"overview":"x","components":[{"description":"d","dependencies":[]}],"dataModel":"y","apiSpec":"z","techConsiderations":"w"}"#;
    assert!(matches!(
        parse_architecture(raw),
        Err(PromptcraftError::MalformedArchitectureResponse(_))
    ));
}

#[test]
fn test_parse_rejects_non_string_dependency() {
    let raw = r#"{"overview":"x","components":[{"name":"A","description":"d","dependencies":[1]}],"dataModel":"y","apiSpec":"z","techConsiderations":"w"}"#;
    assert!(parse_architecture(raw).is_err());
}

#[test]
fn test_parse_rejects_top_level_array() {
    let raw = r#"["x", [], "y", "z", "w"]"#;
    let err = parse_architecture(raw).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Malformed architecture response: expected a JSON object, got an array"
    );
}

#[tokio::test]
async fn test_synthesize_returns_plan() {
    let client = ScriptedCompletion::replying(MINIMAL_PLAN);
    let project = sample_project();

    let plan = synthesize_architecture(&client, "gpt-4o", "Needs auth", &project)
        .await
        .unwrap();
    assert_eq!(plan.overview, "x");
    assert!(plan.components.is_empty());

    let requests = client.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].structured_output);
    assert_eq!(requests[0].model, "gpt-4o");
    assert_eq!(
        requests[0].prompt,
        architecture_request("Needs auth", &project).unwrap()
    );
}

#[tokio::test]
async fn test_synthesize_rejects_malformed_response() {
    let client = ScriptedCompletion::replying("not json");
    let err = synthesize_architecture(&client, "gpt-4o", "Needs auth", &sample_project())
        .await
        .unwrap_err();
    assert!(matches!(err, PromptcraftError::MalformedArchitectureResponse(_)));
}

#[tokio::test]
async fn test_synthesize_propagates_unavailable() {
    let client = ScriptedCompletion::failing("401 unauthorized");
    let err = synthesize_architecture(&client, "gpt-4o", "Needs auth", &sample_project())
        .await
        .unwrap_err();
    assert!(matches!(err, PromptcraftError::CompletionUnavailable(_)));
}

#[tokio::test]
async fn test_synthesize_blank_requirements_makes_no_call() {
    let client = ScriptedCompletion::replying(MINIMAL_PLAN);
    let err = synthesize_architecture(&client, "gpt-4o", "   ", &sample_project())
        .await
        .unwrap_err();

    assert!(matches!(err, PromptcraftError::EmptyContext(_)));
    assert!(client.requests().is_empty());
}

#[test]
fn test_markdown_export() {
    let plan = parse_architecture(FULL_PLAN).unwrap();
    let markdown = plan.to_markdown("My App");

    assert!(markdown.starts_with("# My App - Architecture Plan\n\n## Overview\nEvent-driven service\n"));
    assert!(markdown.contains("### Gateway\nRoutes requests\n\n**Dependencies:** Auth, Queue\n"));
    assert!(markdown.contains("### Auth\nIssues tokens\n\n**Dependencies:** None\n"));
    assert!(markdown.contains("## Data Model\nUsers, Sessions\n"));
    assert!(markdown.contains("## API Specification\nPOST /login\n"));
    assert!(markdown.ends_with("## Technical Considerations\nHorizontal scaling\n"));
}

#[test]
fn test_export_file_name() {
    assert_eq!(export_file_name("My App"), "my-app-architecture.md");
    assert_eq!(
        export_file_name("Data  Analysis\t& Insights"),
        "data-analysis-&-insights-architecture.md"
    );
}

#[test]
fn test_export_file_name_has_no_path_segments() {
    assert_eq!(export_file_name("a/b"), "a-b-architecture.md");
    assert_eq!(export_file_name("../../x"), "..-..-x-architecture.md");
    assert_eq!(export_file_name("..\\Win Dir\\x"), "..-win-dir-x-architecture.md");

    for name in ["a/b", "../../x", "/etc/passwd", "..", "dir\\..\\up"] {
        let file_name = export_file_name(name);
        let components: Vec<_> = std::path::Path::new(&file_name).components().collect();
        assert_eq!(
            components,
            vec![std::path::Component::Normal(file_name.as_ref())],
            "{} produced {}",
            name,
            file_name
        );
    }
}
