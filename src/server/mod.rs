//! MCP server surface: exposes the tool registry over the stdio transport.

use std::sync::Arc;

use anyhow::Result;
use rmcp::model::{
    CallToolRequestParam, CallToolResult, Content, ErrorData, Implementation, ListToolsResult,
    PaginatedRequestParam, ProtocolVersion, ServerCapabilities, ServerInfo, Tool,
};
use rmcp::service::RequestContext;
use rmcp::{RoleServer, ServerHandler, ServiceExt};
use tracing::info;

use crate::tools::ToolRegistry;

/// MCP handler backed by the endpoint catalog. The tool list is built once
/// at construction; each call is an independent stateless task.
#[derive(Clone)]
pub struct DatabricksMcpServer {
    registry: Arc<ToolRegistry>,
    tools: Arc<Vec<Tool>>,
}

impl DatabricksMcpServer {
    pub fn new(registry: ToolRegistry) -> Self {
        let tools = registry
            .descriptors()
            .iter()
            .map(|descriptor| {
                Tool::new(
                    descriptor.name,
                    descriptor.description.clone(),
                    Arc::new(descriptor.input_schema.clone()),
                )
            })
            .collect();
        Self {
            registry: Arc::new(registry),
            tools: Arc::new(tools),
        }
    }
}

impl ServerHandler for DatabricksMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "databricks-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(
                "Use this server to manage Databricks resources: clusters, jobs, \
                 DBFS, Unity Catalog, SQL warehouses, secrets, and more."
                    .to_string(),
            ),
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult {
            tools: self.tools.as_ref().clone(),
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        let args = request.arguments.unwrap_or_default();
        let envelope = self.registry.call(&request.name, &args).await;
        let text = envelope.to_value().to_string();
        let contents = vec![Content::text(text)];
        if envelope.is_error {
            Ok(CallToolResult::error(contents))
        } else {
            Ok(CallToolResult::success(contents))
        }
    }
}

/// Serve the registry over stdio until the client disconnects.
pub async fn serve_stdio(registry: ToolRegistry) -> Result<()> {
    let server = DatabricksMcpServer::new(registry);
    info!("Serving MCP over stdio ({} tools)", server.registry.len());
    let service = server.serve(rmcp::transport::stdio()).await?;
    service.waiting().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabricksConfig;
    use crate::databricks::ApiClient;

    fn server() -> DatabricksMcpServer {
        let client = ApiClient::new(&DatabricksConfig {
            host: "https://example.invalid".into(),
            token: "t".into(),
            ..Default::default()
        })
        .unwrap();
        DatabricksMcpServer::new(ToolRegistry::new(client))
    }

    #[test]
    fn info_advertises_tools_capability() {
        let info = server().get_info();
        assert!(info.capabilities.tools.is_some());
        assert_eq!(info.server_info.name, "databricks-mcp");
    }

    #[test]
    fn tool_list_matches_registry() {
        let server = server();
        assert_eq!(server.tools.len(), server.registry.len());
        assert!(server.tools.iter().any(|t| t.name == "list_clusters"));
    }
}
