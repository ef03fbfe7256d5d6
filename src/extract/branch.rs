//! Builds one validated branch record from a card fragment.

use crate::error::ExtractError;
use crate::extract::fields::{parse_rate, parse_updated};
use crate::extract::text::normalize;
use crate::extract::{SEL_BANK, SEL_RATES, SEL_SUBWAY, SEL_UPDATED};
use crate::types::Branch;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

fn find<'a>(
    root: ElementRef<'a>,
    selector: &'static str,
) -> Result<ElementRef<'a>, ExtractError> {
    let sel = Selector::parse(selector).expect("selector is valid");
    root.select(&sel)
        .next()
        .ok_or(ExtractError::NodeLookup { selector })
}

fn text(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// Parse one branch card into a validated record.
///
/// Field checks short-circuit: the first invalid field discards the whole
/// card. There is no partial record, a card yields either one fully valid
/// [`Branch`] or an [`ExtractError`].
pub fn parse_branch(
    fragment: &str,
    now: DateTime<Utc>,
    tz: Tz,
) -> Result<Branch, ExtractError> {
    let doc = Html::parse_fragment(fragment);
    let root = doc.root_element();

    let updated = parse_updated(&text(find(root, SEL_UPDATED)?), now, tz)?;

    let bank = normalize(&text(find(root, SEL_BANK)?)).trim().to_string();

    // Subway is the one optional field: kiosks away from the metro have no
    // station label.
    let subway = match find(root, SEL_SUBWAY) {
        Ok(el) => normalize(&text(el)).trim().to_string(),
        Err(e) => {
            debug!("no subway label: {e}");
            String::new()
        }
    };

    let rates_sel = Selector::parse(SEL_RATES).expect("selector is valid");
    let rates: Vec<ElementRef<'_>> = root.select(&rates_sel).collect();
    if rates.len() != 2 {
        return Err(ExtractError::UnexpectedRateCount { found: rates.len() });
    }

    let buy = parse_rate(normalize(&text(rates[0])).trim())?;
    let sell = parse_rate(normalize(&text(rates[1])).trim())?;

    Ok(Branch {
        bank,
        subway,
        buy,
        sell,
        updated,
    })
}
