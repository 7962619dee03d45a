//! Display-glyph inference.
//!
//! Maps a food name to an emoji for list rendering. Heuristic only: an exact
//! user-override history, then an ordered keyword table, then category
//! defaults, then a generic fallback.

pub mod history;
pub mod infer;
pub mod keywords;

pub use history::GlyphHistory;
pub use infer::{GENERIC_GLYPH, category_glyph, infer};
pub use keywords::{KeywordRule, KeywordTable};
