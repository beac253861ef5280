use anyhow::Result;
use rmcp::{
    ServerHandler, ServiceExt,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{ServerCapabilities, ServerInfo},
    schemars, tool, tool_router,
};
use serde::{Deserialize, Serialize};

use pagecut::pdf::compress::compress_bytes;
use pagecut::pdf::merge::merge_paths;
use pagecut::pdf::PdfDocument;
use pagecut::selection::{retention_plan, RetentionMode, SelectionStore};

// Request structs for tools

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PathRequest {
    #[schemars(description = "Path to the PDF file")]
    pub path: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PreviewRequest {
    #[schemars(description = "Path to the PDF file")]
    pub path: String,
    #[schemars(description = "Page selection (e.g., '2, 4-6, 9'; 1-based, invalid tokens ignored)")]
    pub pages: String,
    #[schemars(description = "Keep only the selected pages instead of removing them (default: false)")]
    #[serde(default)]
    pub keep_only: bool,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RemovePagesRequest {
    #[schemars(description = "Path to the source PDF file")]
    pub path: String,
    #[schemars(description = "Page selection (e.g., '2, 4-6, 9'; 1-based, invalid tokens ignored)")]
    pub pages: String,
    #[schemars(description = "Keep only the selected pages instead of removing them (default: false)")]
    #[serde(default)]
    pub keep_only: bool,
    #[schemars(description = "Output file path")]
    pub output: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct MergeRequest {
    #[schemars(description = "Paths of the PDF files to merge, in order")]
    pub inputs: Vec<String>,
    #[schemars(description = "Output file path")]
    pub output: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CompressRequest {
    #[schemars(description = "Path to the source PDF file")]
    pub path: String,
    #[schemars(description = "Output file path")]
    pub output: String,
}

#[derive(Debug, Clone)]
pub struct PagecutServer {
    #[allow(dead_code)]
    tool_router: ToolRouter<Self>,
}

impl PagecutServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }
}

impl Default for PagecutServer {
    fn default() -> Self {
        Self::new()
    }
}

fn retention_mode(keep_only: bool) -> RetentionMode {
    if keep_only {
        RetentionMode::KeepSelected
    } else {
        RetentionMode::RemoveSelected
    }
}

#[tool_router]
impl PagecutServer {
    #[tool(description = "Get PDF metadata including page count, file size, title, and author")]
    fn pdf_info(&self, Parameters(PathRequest { path }): Parameters<PathRequest>) -> String {
        let doc = match PdfDocument::open(&path) {
            Ok(d) => d,
            Err(e) => return format!("Error: {}", e),
        };
        let info = doc.info();
        let file_size = match std::fs::metadata(&path) {
            Ok(m) => m.len(),
            Err(e) => return format!("Error: {}", e),
        };

        let result = PdfInfoResult {
            path,
            page_count: info.page_count,
            file_size,
            title: info.title,
            author: info.author,
        };
        serde_json::to_string_pretty(&result).unwrap_or_else(|e| format!("Error: {}", e))
    }

    #[tool(description = "Preview a page selection: how many pages are selected and which pages \
                          the output would keep. Writes nothing.")]
    fn pdf_preview(&self, Parameters(req): Parameters<PreviewRequest>) -> String {
        let doc = match PdfDocument::open(&req.path) {
            Ok(d) => d,
            Err(e) => return format!("Error: {}", e),
        };

        let mut store = SelectionStore::new();
        store.load(doc.page_count());
        store.set_from_text(&req.pages);

        let plan = retention_plan(
            store.page_count(),
            store.selected(),
            retention_mode(req.keep_only),
        );

        let result = PreviewResult {
            page_count: store.page_count(),
            selected_count: store.selected_count(),
            remaining_count: store.remaining_count(),
            kept_pages: plan.iter().map(|&index| index + 1).collect(),
        };
        serde_json::to_string_pretty(&result).unwrap_or_else(|e| format!("Error: {}", e))
    }

    #[tool(description = "Remove the selected pages from a PDF (or, with keep_only, keep just \
                          the selected pages) and save the result to a new file")]
    fn pdf_remove_pages(&self, Parameters(req): Parameters<RemovePagesRequest>) -> String {
        let doc = match PdfDocument::open(&req.path) {
            Ok(d) => d,
            Err(e) => return format!("Error: {}", e),
        };

        let mut store = SelectionStore::new();
        store.load(doc.page_count());
        store.set_from_text(&req.pages);

        if store.selected_count() == 0 {
            return format!(
                "Error: No valid pages in selection '{}' (document has {} pages)",
                req.pages,
                store.page_count()
            );
        }

        let plan = retention_plan(
            store.page_count(),
            store.selected(),
            retention_mode(req.keep_only),
        );
        if plan.is_empty() {
            return "Error: Selection keeps no pages; refusing to write an empty document"
                .to_string();
        }

        let mut new_doc = match doc.retain_pages(&plan) {
            Ok(d) => d,
            Err(e) => return format!("Error: {}", e),
        };
        if let Err(e) = PdfDocument::save(&mut new_doc, &req.output) {
            return format!("Error: {}", e);
        }

        let result = RemovePagesResult {
            output_path: req.output,
            kept_pages: plan.len(),
            removed_pages: store.page_count() - plan.len(),
        };
        serde_json::to_string_pretty(&result).unwrap_or_else(|e| format!("Error: {}", e))
    }

    #[tool(description = "Combine multiple PDF files into one, pages in input order")]
    fn pdf_merge(&self, Parameters(req): Parameters<MergeRequest>) -> String {
        if req.inputs.is_empty() {
            return "Error: No input files specified".to_string();
        }

        let mut merged = match merge_paths(&req.inputs) {
            Ok(d) => d,
            Err(e) => return format!("Error: {}", e),
        };
        let page_count = merged.get_pages().len();

        if let Err(e) = PdfDocument::save(&mut merged, &req.output) {
            return format!("Error: {}", e);
        }

        let result = MergeResult {
            output_path: req.output,
            file_count: req.inputs.len(),
            page_count,
        };
        serde_json::to_string_pretty(&result).unwrap_or_else(|e| format!("Error: {}", e))
    }

    #[tool(description = "Recompress a PDF's streams and save it to a new file, reporting the \
                          size change")]
    fn pdf_compress(&self, Parameters(req): Parameters<CompressRequest>) -> String {
        let original = match std::fs::read(&req.path) {
            Ok(bytes) => bytes,
            Err(e) => return format!("Error: Failed to read {}: {}", req.path, e),
        };

        let bytes = match compress_bytes(&original) {
            Ok(Some(compressed)) => compressed,
            Ok(None) => original.clone(),
            Err(e) => return format!("Error: {}", e),
        };

        if let Err(e) = std::fs::write(&req.output, &bytes) {
            return format!("Error: Failed to write {}: {}", req.output, e);
        }

        let result = CompressResult {
            output_path: req.output,
            original_size: original.len() as u64,
            compressed_size: bytes.len() as u64,
            reduction_percent: 100.0 * (1.0 - bytes.len() as f64 / original.len() as f64),
        };
        serde_json::to_string_pretty(&result).unwrap_or_else(|e| format!("Error: {}", e))
    }
}

// Result types for MCP tools

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct PdfInfoResult {
    pub path: String,
    pub page_count: usize,
    pub file_size: u64,
    pub title: Option<String>,
    pub author: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct PreviewResult {
    pub page_count: usize,
    pub selected_count: usize,
    pub remaining_count: usize,
    /// 1-based page numbers the output would keep, ascending
    pub kept_pages: Vec<usize>,
}

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct RemovePagesResult {
    pub output_path: String,
    pub kept_pages: usize,
    pub removed_pages: usize,
}

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct MergeResult {
    pub output_path: String,
    pub file_count: usize,
    pub page_count: usize,
}

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct CompressResult {
    pub output_path: String,
    pub original_size: u64,
    pub compressed_size: u64,
    pub reduction_percent: f64,
}

impl ServerHandler for PagecutServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "PDF page selection and document tools. Use pdf_info for document metadata, \
                 pdf_preview to see what a page selection would keep, pdf_remove_pages to drop \
                 (or keep only) selected pages, pdf_merge to combine documents, and pdf_compress \
                 to recompress a document's streams."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

pub async fn run_server() -> Result<()> {
    let server = PagecutServer::new();

    // Serve using stdin/stdout as a tuple
    let service = server.serve((tokio::io::stdin(), tokio::io::stdout())).await?;

    service.waiting().await?;

    Ok(())
}
