use anyhow::Result;
use rmcp::{
    model::{CallToolRequestParam, GetPromptRequestParam, ReadResourceRequestParam},
    service::ServiceError,
};
use serde_json::{json, Value};

use mcp_demo::providers::FALLBACK_QUOTES;

use crate::common::{connect_in_process, fixture_server, FIXTURE_REASONS};

fn error_code(error: ServiceError) -> Result<Value> {
    match error {
        ServiceError::McpError(inner) => Ok(serde_json::to_value(inner)?["data"]["code"].clone()),
        other => anyhow::bail!("unexpected error: {other:?}"),
    }
}

fn first_text(payload: &Value) -> &str {
    payload["content"][0]["text"].as_str().unwrap_or_default()
}

#[tokio::test]
async fn multiply_returns_product_as_text() -> Result<()> {
    let (client, server_task) = connect_in_process(fixture_server()).await?;

    let args = json!({ "a": 6, "b": -7 }).as_object().expect("object").clone();
    let response = client
        .call_tool(CallToolRequestParam {
            name: "multiply".into(),
            arguments: Some(args),
        })
        .await?;

    let overflow_args = json!({ "a": i64::MAX, "b": 2 })
        .as_object()
        .expect("object")
        .clone();
    let overflow = client
        .call_tool(CallToolRequestParam {
            name: "multiply".into(),
            arguments: Some(overflow_args),
        })
        .await;
    let _ = client.cancel().await;
    let _ = server_task.await;

    let payload = serde_json::to_value(&response)?;
    assert_eq!(first_text(&payload), "-42");
    let error = overflow.expect_err("overflow must be rejected");
    assert_eq!(error_code(error)?, json!("MULTIPLY_OVERFLOW"));
    Ok(())
}

#[tokio::test]
async fn random_text_tools_use_providers() -> Result<()> {
    let server = fixture_server();
    let providers = server.providers().clone();
    let (client, server_task) = connect_in_process(server).await?;

    let mut reasons = Vec::new();
    let mut quotes = Vec::new();
    for _ in 0..20 {
        let reason = client
            .call_tool(CallToolRequestParam {
                name: "get_no_reason".into(),
                arguments: None,
            })
            .await?;
        reasons.push(first_text(&serde_json::to_value(&reason)?).to_string());

        let quote = client
            .call_tool(CallToolRequestParam {
                name: "get_motivational_quote".into(),
                arguments: None,
            })
            .await?;
        quotes.push(first_text(&serde_json::to_value(&quote)?).to_string());
    }
    let _ = client.cancel().await;
    let _ = server_task.await;

    for reason in &reasons {
        assert!(FIXTURE_REASONS.contains(&reason.as_str()), "{reason}");
    }
    for quote in &quotes {
        assert!(FALLBACK_QUOTES.contains(&quote.as_str()), "{quote}");
    }
    assert!(providers.reasons().is_loaded());
    assert!(providers.quotes().is_loaded());
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn concurrent_first_calls_load_each_list_once() -> Result<()> {
    let server = fixture_server();
    let providers = server.providers().clone();
    let (client, server_task) = connect_in_process(server).await?;
    assert!(!providers.reasons().is_loaded());

    let reason_call = || {
        client.call_tool(CallToolRequestParam {
            name: "get_no_reason".into(),
            arguments: None,
        })
    };
    let (a, b, c) = tokio::join!(reason_call(), reason_call(), reason_call());
    let cached = providers.reasons().list();
    let _ = client.cancel().await;
    let _ = server_task.await;

    for result in [a?, b?, c?] {
        let text = first_text(&serde_json::to_value(&result)?).to_string();
        assert!(cached.contains(&text), "{text}");
        assert!(FIXTURE_REASONS.contains(&text.as_str()), "{text}");
    }
    assert!(std::sync::Arc::ptr_eq(&cached, &providers.reasons().list()));
    assert!(!providers.quotes().is_loaded());
    Ok(())
}

#[tokio::test]
async fn greeting_resource_template_is_served() -> Result<()> {
    let (client, server_task) = connect_in_process(fixture_server()).await?;

    let templates = client.list_resource_templates(None).await?;
    let greeting = client
        .read_resource(ReadResourceRequestParam {
            uri: "greeting://Ada".into(),
        })
        .await?;
    let empty_name = client
        .read_resource(ReadResourceRequestParam {
            uri: "greeting://".into(),
        })
        .await;
    let unknown = client
        .read_resource(ReadResourceRequestParam {
            uri: "farewell://Ada".into(),
        })
        .await;
    let nested = client
        .read_resource(ReadResourceRequestParam {
            uri: "greeting://Ada/Lovelace".into(),
        })
        .await;
    let _ = client.cancel().await;
    let _ = server_task.await;

    let templates = serde_json::to_value(&templates)?;
    assert_eq!(
        templates["resourceTemplates"][0]["uriTemplate"],
        json!("greeting://{name}")
    );
    let greeting = serde_json::to_value(&greeting)?;
    assert_eq!(greeting["contents"][0]["text"], json!("Welcome, Ada!"));
    assert_eq!(
        error_code(empty_name.expect_err("empty name must fail"))?,
        json!("GREETING_NAME_REQUIRED")
    );
    assert_eq!(
        error_code(unknown.expect_err("unknown scheme must fail"))?,
        json!("RESOURCE_NOT_FOUND")
    );
    assert_eq!(
        error_code(nested.expect_err("nested path must not match"))?,
        json!("RESOURCE_NOT_FOUND")
    );
    Ok(())
}

#[tokio::test]
async fn code_review_prompt_wraps_snippet() -> Result<()> {
    let (client, server_task) = connect_in_process(fixture_server()).await?;

    let prompts = client.list_prompts(None).await?;
    let args = json!({ "code_snippet": "let x = 1;" })
        .as_object()
        .expect("object")
        .clone();
    let prompt = client
        .get_prompt(GetPromptRequestParam {
            name: "ask_code_review".into(),
            arguments: Some(args),
        })
        .await?;
    let _ = client.cancel().await;
    let _ = server_task.await;

    let prompts = serde_json::to_value(&prompts)?;
    assert_eq!(prompts["prompts"][0]["name"], json!("ask_code_review"));
    assert_eq!(
        prompts["prompts"][0]["arguments"][0]["name"],
        json!("code_snippet")
    );
    let prompt = serde_json::to_value(&prompt)?;
    assert_eq!(prompt["messages"][0]["role"], json!("user"));
    assert_eq!(
        prompt["messages"][0]["content"]["text"],
        json!("Please review the following code: let x = 1;")
    );
    Ok(())
}
