//! Recipe-side derivations.
//!
//! Given a recipe's required materials and the current inventory, partition
//! the materials into "present" (cookable from stock) and "missing" (needs
//! shopping). The partition is recomputed from scratch on every inventory
//! change; there is no cached state to go stale.

pub mod material;
pub mod resolver;
pub mod synonyms;

pub use material::RecipeMaterial;
pub use resolver::{MaterialSplit, resolve};
pub use synonyms::SynonymTable;
