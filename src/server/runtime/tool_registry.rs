use std::sync::Arc;

use rmcp::{
    handler::server::{wrapper::Parameters, ServerHandler},
    model::{
        CallToolResult, Content, ErrorData, GetPromptRequestParam, GetPromptResult, Implementation,
        ListPromptsResult, ListResourceTemplatesResult,
        PaginatedRequestParam, PromptMessage, PromptMessageRole, ReadResourceRequestParam,
        ReadResourceResult, ServerCapabilities, ServerInfo,
    },
    prompt, prompt_handler, prompt_router,
    service::RequestContext,
    tool, tool_handler, tool_router, RoleServer,
};

use crate::{
    lib::telemetry::RequestSpan,
    providers::{ServerProviders, StringListProvider},
    server::config::ServerConfig,
    tools::{self, CodeReviewPromptArgs, MultiplyRequest, ServerPromptRouter, ServerToolRouter},
};

#[derive(Clone)]
pub struct DemoServer {
    name: Arc<String>,
    instructions: Arc<String>,
    providers: ServerProviders,
    tool_router: ServerToolRouter<Self>,
    prompt_router: ServerPromptRouter<Self>,
}

impl DemoServer {
    pub fn new(config: &ServerConfig, instructions: String) -> Self {
        Self::with_providers(
            config.server.name.clone(),
            instructions,
            ServerProviders::from_config(&config.data),
        )
    }

    pub fn with_providers(name: String, instructions: String, providers: ServerProviders) -> Self {
        Self {
            name: Arc::new(name),
            instructions: Arc::new(instructions),
            providers,
            tool_router: tools::build_router(Self::tool_router),
            prompt_router: tools::build_prompt_router(Self::prompt_router),
        }
    }

    pub fn providers(&self) -> &ServerProviders {
        &self.providers
    }

    /// Draw one entry from the provider chosen by `select`.
    ///
    /// The first draw reads the backing file, so it runs on the blocking pool.
    async fn random_text(
        &self,
        select: fn(&ServerProviders) -> &StringListProvider,
    ) -> Result<String, ErrorData> {
        if select(&self.providers).is_loaded() {
            return Ok(select(&self.providers).random_entry());
        }
        let providers = self.providers.clone();
        tokio::task::spawn_blocking(move || select(&providers).random_entry())
            .await
            .map_err(|err| ErrorData::internal_error(err.to_string(), None))
    }
}

#[tool_router(router = tool_router)]
impl DemoServer {
    #[tool(name = "multiply", description = "Multiply two numbers")]
    async fn multiply(
        &self,
        Parameters(request): Parameters<MultiplyRequest>,
    ) -> Result<CallToolResult, ErrorData> {
        let span = RequestSpan::start("tool", tools::MULTIPLY_TOOL_ID);
        match tools::multiply(&request) {
            Ok(product) => {
                span.finish("ok");
                Ok(CallToolResult::success(vec![Content::text(
                    product.to_string(),
                )]))
            }
            Err(err) => {
                span.finish("error");
                Err(err)
            }
        }
    }

    #[tool(
        name = "get_no_reason",
        description = "Get a random rejection reason from No-as-a-Service"
    )]
    async fn get_no_reason(&self) -> Result<CallToolResult, ErrorData> {
        let span = RequestSpan::start("tool", tools::NO_REASON_TOOL_ID);
        let reason = self.random_text(ServerProviders::reasons).await;
        span.finish(if reason.is_ok() { "ok" } else { "error" });
        Ok(CallToolResult::success(vec![Content::text(reason?)]))
    }

    #[tool(
        name = "get_motivational_quote",
        description = "Get a random motivational quote for inspiration"
    )]
    async fn get_motivational_quote(&self) -> Result<CallToolResult, ErrorData> {
        let span = RequestSpan::start("tool", tools::QUOTE_TOOL_ID);
        let quote = self.random_text(ServerProviders::quotes).await;
        span.finish(if quote.is_ok() { "ok" } else { "error" });
        Ok(CallToolResult::success(vec![Content::text(quote?)]))
    }
}

#[prompt_router(router = "prompt_router")]
impl DemoServer {
    #[prompt(name = "ask_code_review", description = "Generates a code review request")]
    async fn ask_code_review(
        &self,
        Parameters(args): Parameters<CodeReviewPromptArgs>,
        _ctx: RequestContext<RoleServer>,
    ) -> Result<Vec<PromptMessage>, ErrorData> {
        let span = RequestSpan::start("prompt", tools::CODE_REVIEW_PROMPT_ID);
        let text = tools::code_review_request(&args.code_snippet);
        span.finish("ok");
        Ok(vec![PromptMessage::new_text(PromptMessageRole::User, text)])
    }
}

#[tool_handler(router = self.tool_router)]
#[prompt_handler]
impl ServerHandler for DemoServer {
    fn get_info(&self) -> ServerInfo {
        let mut server_info = Implementation::from_build_env();
        server_info.name = (*self.name).clone();
        server_info.version = env!("CARGO_PKG_VERSION").to_string();
        ServerInfo {
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .enable_prompts()
                .build(),
            server_info,
            instructions: Some((*self.instructions).clone()),
            ..ServerInfo::default()
        }
    }

    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, ErrorData> {
        let template = tools::greeting_template()
            .map_err(|err| ErrorData::internal_error(err.to_string(), None))?;
        Ok(ListResourceTemplatesResult {
            next_cursor: None,
            resource_templates: vec![template],
        })
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, ErrorData> {
        let span = RequestSpan::start("resource", "greeting");
        let result = tools::read_greeting(&request.uri);
        span.finish(if result.is_ok() { "ok" } else { "error" });
        result
    }
}
