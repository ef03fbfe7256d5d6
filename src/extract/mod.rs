//! Branch extraction pipeline.
//!
//! Turns the rendered map-view document into validated branch records:
//! slice the branch list into per-card fragments, parse each card with a
//! bounded pool of workers, keep what validates, log and drop the rest.

pub mod branch;
pub mod fields;
pub mod pipeline;
pub mod text;

pub use branch::parse_branch;
pub use pipeline::{branch_fragments, extract_all};

// CSS selectors for the map-view markup. The class names are CSS-module
// hashes emitted by the source site's frontend build and change when the
// site redeploys.

/// Branch list container.
pub const SEL_LIST: &str = ".fdpae";
/// One branch card.
pub const SEL_CARD: &str = ".cITBmP";
/// Update stamp inside a card.
pub const SEL_UPDATED: &str = ".cURBaH";
/// Bank name inside a card.
pub const SEL_BANK: &str = ".dPnGDN";
/// Subway station label, absent for branches away from the metro.
pub const SEL_SUBWAY: &str = ".eybsgm";
/// Rate cells; exactly two expected, buy then sell.
pub const SEL_RATES: &str = ".fvORFF";
