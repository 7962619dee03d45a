//! Derived inventory signals.
//!
//! Pure, synchronous derivations over the current item list: expiry-urgency
//! buckets and counts, low-stock flagging against configured thresholds,
//! synthesized display placeholders for fully-depleted tracked keys, and the
//! list-view helpers (display state, filters, sort orders).
//!
//! Every output here is recomputed in full from its inputs on each call;
//! nothing is incrementally maintained, so a view can never go stale.

pub mod shortage;
pub mod status;
pub mod stock;
pub mod view;

pub use shortage::{augment_for_display, delete_candidates, synthesize_placeholders};
pub use status::{ExpiryStatus, NEAR_WINDOW_DAYS, StatusCounts, classify, summarize};
pub use stock::{ThresholdEntry, ThresholdMap, aggregate_by_key, low_stock_keys};
pub use view::{
    DisplayState, FilterMode, SortOrder, days_until_expiry, display_state, filter_items,
    sort_items,
};
