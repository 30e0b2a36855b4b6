//! UI Components for the Anuncia landing experience.

mod asset_grid;
mod nav_header;
mod promo_block;

pub use asset_grid::{AssetCollection, AssetGrid, AssetItem};
pub use nav_header::NavHeader;
pub use promo_block::{PromoAction, PromoBlock, PromoEmphasis};
