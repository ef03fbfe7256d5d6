//! Wire types: branch records, the tagged collection, and sort orders.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Currency tag, e.g. "USD". Pass-through annotation on the result; the
/// source page quotes USD by default and the tag never feeds the extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency(String);

impl Currency {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency("USD".to_string())
    }
}

impl From<String> for Currency {
    fn from(s: String) -> Self {
        if s.is_empty() {
            Currency::default()
        } else {
            Currency(s)
        }
    }
}

impl From<&str> for Currency {
    fn from(s: &str) -> Self {
        Currency::from(s.to_string())
    }
}

/// Region slug as it appears in the map-view URL, e.g. "moskva".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region(String);

impl Region {
    pub fn slug(&self) -> &str {
        &self.0
    }
}

impl Default for Region {
    fn default() -> Self {
        Region("moskva".to_string())
    }
}

impl From<String> for Region {
    fn from(s: String) -> Self {
        if s.is_empty() {
            Region::default()
        } else {
            Region(s)
        }
    }
}

impl From<&str> for Region {
    fn from(s: &str) -> Self {
        Region::from(s.to_string())
    }
}

/// One bank branch with its current buy/sell quotes.
///
/// Only the record builder constructs these, and only after every field
/// validates; `buy` and `sell` are always positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    pub bank: String,
    pub subway: String,
    pub buy: f64,
    pub sell: f64,
    pub updated: DateTime<FixedOffset>,
}

/// Extraction result for one region, tagged with the requested currency.
///
/// `items` is in worker completion order; callers that care about order
/// re-sort with [`Branches::sort`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branches {
    pub currency: Currency,
    pub city: Region,
    pub items: Vec<Branch>,
}

/// Sort orders exposed on the HTTP surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Ascending by sell rate: cheapest place to buy the currency first.
    BySell,
    /// Descending by buy rate: best place to sell the currency first.
    ByBuy,
}

impl SortOrder {
    pub fn from_param(s: &str) -> Option<Self> {
        match s {
            "by-sell" => Some(SortOrder::BySell),
            "by-buy" => Some(SortOrder::ByBuy),
            _ => None,
        }
    }
}

impl Branches {
    pub fn sort(&mut self, order: SortOrder) {
        match order {
            SortOrder::BySell => self
                .items
                .sort_by(|a, b| a.sell.partial_cmp(&b.sell).unwrap_or(Ordering::Equal)),
            SortOrder::ByBuy => self
                .items
                .sort_by(|a, b| b.buy.partial_cmp(&a.buy).unwrap_or(Ordering::Equal)),
        }
    }
}

impl fmt::Display for Branches {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&s)
    }
}
