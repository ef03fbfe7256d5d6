//! One-shot branch fetch: render the map view, extract, tag.

use crate::config::{Config, EXCHANGE_TZ};
use crate::extract::{branch_fragments, extract_all};
use crate::renderer::Renderer;
use crate::types::{Branches, Currency, Region};
use anyhow::{Context, Result};
use chrono::Utc;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

/// Map-view page for a region; the slug fills the placeholder.
const PAGE_URL: &str = "https://www.banki.ru/products/currency/map/{region}/";

/// Synthetic mousemove over the branch list. The site lazy-renders card
/// contents only once the list sees pointer activity.
const MOUSEMOVE_JS: &str = r#"var element = document.querySelector(".mapListstyled__StyledMapList-sc-294xv0-0.fdpae");
var rect = element.getBoundingClientRect();
var centerX = rect.left + (rect.width / 2);
var centerY = rect.top + (rect.height / 2);
var evt = new MouseEvent('mousemove', {
    bubbles: true,
    cancelable: true,
    view: window,
    clientX: centerX,
    clientY: centerY
});
element.dispatchEvent(evt);"#;

/// Scroll to the bottom so every card enters the render window.
const SCROLL_JS: &str = "window.scrollTo(0, document.body.scrollHeight);";

/// Fetches branch rates through a renderer.
pub struct Client {
    renderer: Arc<dyn Renderer>,
    config: Config,
}

impl Client {
    pub fn new(renderer: Arc<dyn Renderer>, config: Config) -> Self {
        Self { renderer, config }
    }

    /// Fetch current branch rates for a region, tagged with the currency.
    ///
    /// One complete extraction pass over the currently rendered document: no
    /// retries, no caching. Empty `items` is a valid answer; it means every
    /// card failed validation or none were rendered.
    pub async fn branches(&self, currency: Currency, region: Region) -> Result<Branches> {
        let url = PAGE_URL.replace("{region}", region.slug());
        debug!("fetching branch rates from {url}");

        let mut ctx = self.renderer.new_context().await?;
        let start = Instant::now();

        let rendered = async {
            ctx.navigate(&url, self.config.page_timeout_ms)
                .await
                .with_context(|| format!("failed to load page {url}"))?;
            ctx.execute_js(MOUSEMOVE_JS)
                .await
                .context("mousemove script failed")?;
            ctx.execute_js(SCROLL_JS)
                .await
                .context("scroll script failed")?;
            ctx.html().await.context("failed to read rendered page")
        }
        .await;

        if let Err(e) = ctx.close().await {
            warn!("failed to close render context: {e}");
        }

        let html = rendered?;
        debug!("page render took {:?}", start.elapsed());

        let fragments = tokio::task::spawn_blocking(move || branch_fragments(&html))
            .await
            .context("fragment slicing panicked")??;

        let start = Instant::now();
        let items = extract_all(fragments, self.config.concurrency, Utc::now(), EXCHANGE_TZ).await;
        debug!("extracted {} branches in {:?}", items.len(), start.elapsed());

        Ok(Branches {
            currency,
            city: region,
            items,
        })
    }
}
