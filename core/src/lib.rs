pub mod art_mapping;
pub mod blink;
pub mod matcher;
pub mod observation;

// Re-exports for convenience
pub use art_mapping::{UniqueArtMapping, default_data_dir};
pub use blink::BlinkTimer;
pub use matcher::{MatchOptions, MatchedSet, match_items};
pub use observation::{
    EntityId, GroundItemObservation, GroundLabel, ItemRarity, MatchedItem, ModsFacet, RenderFacet,
    WorldItemFacet,
};
