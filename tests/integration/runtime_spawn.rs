use std::time::Duration;

use anyhow::Result;
use rmcp::{
    model::{CallToolRequestParam, ClientInfo},
    serve_client,
};
use tokio::time::timeout;

use crate::common::{spawn_server_process, FIXTURE_REASONS};

#[tokio::test]
async fn inspector_style_spawn_lists_tools_and_serves_reasons() -> Result<()> {
    let (mut child, transport, stderr_task) = spawn_server_process().await?;

    let client = serve_client(ClientInfo::default(), transport).await?;
    let server_name = client
        .peer_info()
        .map(|info| info.server_info.name.clone());
    assert_eq!(server_name.as_deref(), Some("MCP Demo Fixture"));

    let list = client.list_tools(None).await?;
    let names: Vec<&str> = list.tools.iter().map(|tool| tool.name.as_ref()).collect();
    for expected in ["multiply", "get_no_reason", "get_motivational_quote"] {
        assert!(
            names.contains(&expected),
            "list_tools should include {expected}: {names:?}"
        );
    }

    let response = client
        .call_tool(CallToolRequestParam {
            name: "get_no_reason".into(),
            arguments: None,
        })
        .await?;
    let payload = serde_json::to_value(&response)?;
    let text = payload["content"][0]["text"].as_str().unwrap_or_default();
    assert!(
        FIXTURE_REASONS.contains(&text),
        "reason should come from the fixture data dir: {payload}"
    );

    client.cancel().await?;
    let status = timeout(Duration::from_secs(5), child.wait()).await??;
    assert!(
        status.success(),
        "server should exit cleanly but exit status was {status:?}"
    );
    if let Some(handle) = stderr_task {
        let _ = handle.await;
    }
    Ok(())
}
