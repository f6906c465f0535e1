//! Tests for prompt composition and generation.

use super::*;
use crate::test_support::{ScriptedCompletion, sample_project};

#[test]
fn test_every_task_type_embeds_context_and_checklist() {
    let project = sample_project();
    let context = "Add pagination to the /users endpoint";

    for task_type in TaskType::ALL {
        let prompt = build_prompt(task_type, &project, context, None).unwrap();

        assert!(
            prompt.starts_with("You are an expert prompt engineer."),
            "{}",
            task_type
        );
        assert!(prompt.contains(&format!("Specific Context:\n{}\n", context)));
        for (i, item) in task_type.checklist().iter().enumerate() {
            assert!(
                prompt.contains(&format!("{}. {}", i + 1, item)),
                "{} is missing checklist item {}",
                task_type,
                item
            );
        }
        assert!(prompt.contains("Format the output as a ready-to-use prompt"));
    }
}

#[test]
fn test_additional_requirements_omitted_when_absent() {
    let project = sample_project();

    for additional in [None, Some(""), Some("   \n")] {
        let prompt = build_prompt(TaskType::Testing, &project, "ctx", additional).unwrap();
        assert!(!prompt.contains("Additional Requirements"));
        assert!(prompt.contains("Specific Context:\nctx\n\nCreate a comprehensive"));
    }
}

#[test]
fn test_additional_requirements_included_verbatim() {
    let prompt = build_prompt(
        TaskType::Refactoring,
        &sample_project(),
        "ctx",
        Some("Keep the public API {stable}"),
    )
    .unwrap();

    assert!(prompt.contains(
        "Specific Context:\nctx\n\nAdditional Requirements:\nKeep the public API {stable}\n\nCreate a comprehensive"
    ));
}

#[test]
fn test_build_prompt_is_deterministic() {
    let project = sample_project();
    let a = build_prompt(TaskType::Documentation, &project, "ctx", Some("more")).unwrap();
    let b = build_prompt(TaskType::Documentation, &project, "ctx", Some("more")).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_build_prompt_rejects_blank_context() {
    let err = build_prompt(TaskType::CodeGeneration, &sample_project(), " \t\n", None).unwrap_err();
    assert!(matches!(err, PromptcraftError::EmptyContext(_)));
}

#[test]
fn test_debugging_scenario() {
    let prompt = build_prompt(
        TaskType::Debugging,
        &sample_project(),
        "NullPointerException on line 42",
        None,
    )
    .unwrap();

    assert!(prompt.contains("NullPointerException on line 42"));
    assert!(prompt.contains("root cause analysis"));
    assert!(prompt.contains("Tech Stack: node"));
    assert!(prompt.contains("Category: custom"));
}

#[test]
fn test_code_generation_full_text() {
    let prompt = build_prompt(
        TaskType::CodeGeneration,
        &sample_project(),
        "Parse CSV uploads",
        None,
    )
    .unwrap();

    let expected = "\
You are an expert prompt engineer. Generate an optimized prompt for AI code generation.

Project: Foo
Description: Internal tooling service
Category: custom
Tech Stack: node

Specific Context:
Parse CSV uploads

Create a comprehensive, well-structured prompt that:
1. Clearly defines the coding task
2. Specifies the exact tech stack and frameworks
3. Includes code style and best practices expectations
4. Defines input/output requirements
5. Specifies error handling needs
6. Includes testing considerations

Format the output as a ready-to-use prompt that can be directly sent to an AI coding assistant.";

    assert_eq!(prompt, expected);
}

#[test]
fn test_task_type_ids_round_trip() {
    for task_type in TaskType::ALL {
        assert_eq!(TaskType::from_str(task_type.as_str()), Some(task_type));
        let json = serde_json::to_string(&task_type).unwrap();
        assert_eq!(json, format!("\"{}\"", task_type.as_str()));
    }
    assert_eq!(TaskType::from_str("deployment"), None);
}

#[test]
fn test_prompt_request_validation() {
    let project = sample_project();
    assert!(PromptRequest::new(TaskType::Testing, &project, "").is_err());

    let request = PromptRequest::new(TaskType::Testing, &project, "ctx")
        .unwrap()
        .with_additional_requirements("  ");
    assert_eq!(request.additional_requirements, None);

    let request = request.with_additional_requirements("Use pytest");
    assert_eq!(request.additional_requirements.as_deref(), Some("Use pytest"));
    assert!(request.build().unwrap().contains("Additional Requirements:\nUse pytest"));
}

#[tokio::test]
async fn test_generate_prompt_sends_built_prompt() {
    let project = sample_project();
    let request = PromptRequest::new(TaskType::Testing, &project, "Cover the parser").unwrap();
    let client = ScriptedCompletion::replying("Write tests for the parser...");

    let text = generate_prompt(&client, "gpt-4o", &request).await.unwrap();
    assert_eq!(text, "Write tests for the parser...");

    let requests = client.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].prompt, request.build().unwrap());
    assert_eq!(requests[0].model, "gpt-4o");
    assert!(!requests[0].structured_output);
}

#[tokio::test]
async fn test_generate_prompt_propagates_unavailable() {
    let project = sample_project();
    let request = PromptRequest::new(TaskType::Debugging, &project, "crash").unwrap();
    let client = ScriptedCompletion::failing("503 service unavailable");

    let err = generate_prompt(&client, "gpt-4o", &request).await.unwrap_err();
    assert!(matches!(err, PromptcraftError::CompletionUnavailable(_)));
}
