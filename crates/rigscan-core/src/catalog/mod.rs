//! Static game knowledge: identifier normalization, illustrative images and
//! the curated per-launcher lists used when no filesystem access exists.

mod curated;
mod identifier;
mod images;

pub use curated::curated_games;
pub use identifier::normalize;
pub use images::{PLACEHOLDER_IMAGE_REF, image_ref};
