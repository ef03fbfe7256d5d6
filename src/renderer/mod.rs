//! Renderer abstraction over the browser that produces the map-view document.
//!
//! The pipeline needs exactly one thing from a browser: load a URL, poke the
//! page so the lazy list renders, hand back the HTML. These traits keep that
//! surface narrow and let tests swap the browser for a canned document.

pub mod chromium;

use anyhow::Result;
use async_trait::async_trait;

/// A browser engine that can open rendering contexts.
#[async_trait]
pub trait Renderer: Send + Sync {
    /// Open a fresh browser context (tab).
    async fn new_context(&self) -> Result<Box<dyn RenderContext>>;
}

/// A single browser context for rendering one page.
#[async_trait]
pub trait RenderContext: Send + Sync {
    /// Navigate to a URL, waiting at most `timeout_ms` for the load.
    async fn navigate(&mut self, url: &str, timeout_ms: u64) -> Result<()>;
    /// Execute JavaScript in the page context.
    async fn execute_js(&self, script: &str) -> Result<serde_json::Value>;
    /// Full page HTML as currently rendered.
    async fn html(&self) -> Result<String>;
    /// Close this context.
    async fn close(self: Box<Self>) -> Result<()>;
}

/// Renderer that serves one fixed document; no browser involved.
///
/// Backs the test suite, and works just as well for replaying a saved page
/// snapshot against the pipeline.
pub struct StaticRenderer {
    html: String,
}

impl StaticRenderer {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }
}

#[async_trait]
impl Renderer for StaticRenderer {
    async fn new_context(&self) -> Result<Box<dyn RenderContext>> {
        Ok(Box::new(StaticContext {
            html: self.html.clone(),
        }))
    }
}

struct StaticContext {
    html: String,
}

#[async_trait]
impl RenderContext for StaticContext {
    async fn navigate(&mut self, _url: &str, _timeout_ms: u64) -> Result<()> {
        Ok(())
    }

    async fn execute_js(&self, _script: &str) -> Result<serde_json::Value> {
        Ok(serde_json::Value::Null)
    }

    async fn html(&self) -> Result<String> {
        Ok(self.html.clone())
    }

    async fn close(self: Box<Self>) -> Result<()> {
        Ok(())
    }
}
