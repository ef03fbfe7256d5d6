//! Concurrent extraction over the rendered document.

use crate::error::ExtractError;
use crate::extract::branch::parse_branch;
use crate::extract::{SEL_CARD, SEL_LIST};
use crate::types::Branch;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use futures::stream::{self, StreamExt};
use scraper::{Html, Selector};
use tracing::warn;

/// Slice the rendered map view into one owned HTML fragment per branch card.
///
/// Fragments are plain strings so they can move into worker tasks; the
/// parsed document itself is dropped before any worker runs. Failing to find
/// the list container fails the whole pass, since without it there is
/// nothing to extract.
pub fn branch_fragments(html: &str) -> Result<Vec<String>, ExtractError> {
    let doc = Html::parse_document(html);
    let list_sel = Selector::parse(SEL_LIST).expect("selector is valid");
    let card_sel = Selector::parse(SEL_CARD).expect("selector is valid");

    let list = doc
        .select(&list_sel)
        .next()
        .ok_or(ExtractError::NodeLookup { selector: SEL_LIST })?;

    Ok(list.select(&card_sel).map(|card| card.html()).collect())
}

/// Parse every fragment with at most `limit` workers running at once.
///
/// Card parsing is CPU-bound scraper work, so each card runs on the blocking
/// pool. Failures (including a panicked worker) are logged and contribute
/// nothing; one bad card never affects its siblings, and the surviving set
/// does not depend on `limit`. Records come back in completion order.
pub async fn extract_all(
    fragments: Vec<String>,
    limit: usize,
    now: DateTime<Utc>,
    tz: Tz,
) -> Vec<Branch> {
    stream::iter(fragments.into_iter().enumerate())
        .map(|(idx, fragment)| async move {
            let joined =
                tokio::task::spawn_blocking(move || parse_branch(&fragment, now, tz)).await;
            (idx, joined)
        })
        .buffer_unordered(limit.max(1))
        .filter_map(|(idx, joined)| async move {
            match joined {
                Ok(Ok(branch)) => Some(branch),
                Ok(Err(e)) => {
                    warn!("skipping branch card {idx}: {e}");
                    None
                }
                Err(e) => {
                    warn!("branch card {idx} worker died: {e}");
                    None
                }
            }
        })
        .collect()
        .await
}
