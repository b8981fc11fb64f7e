//! Ground-item observations
//!
//! The host hands the matcher one immutable snapshot of the visible ground
//! items per matching pass. Game entities are loosely typed bags of
//! components; here each observation exposes them as optional typed facets,
//! and "has facet" is the matcher's filter predicate — no dynamic dispatch.

use std::hash::{Hash, Hasher};

use uniquefinder_types::{RectF, Rgba, Vec2};

/// Opaque handle of the world entity an observation was taken from.
///
/// Two observations of the same entity compare equal across snapshots; two
/// entities at the same position never do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemRarity {
    Normal,
    Magic,
    Rare,
    Unique,
}

/// Item-modifier component: rarity tier and identification state.
#[derive(Debug, Clone, Copy)]
pub struct ModsFacet {
    pub rarity: ItemRarity,
    pub identified: bool,
}

/// Render component exposing the item's art resource key.
#[derive(Debug, Clone)]
pub struct RenderFacet {
    pub resource_key: String,
}

/// World-item component wrapping the contained item's own components.
#[derive(Debug, Clone)]
pub struct WorldItemFacet {
    pub mods: Option<ModsFacet>,
    pub render: Option<RenderFacet>,
}

/// The item's floating on-screen label as the game currently draws it.
#[derive(Debug, Clone)]
pub struct GroundLabel {
    pub rect: RectF,
    pub visible: bool,
    pub text_color: Rgba,
    pub border_color: Rgba,
    pub background_color: Rgba,
}

/// One visible ground item, snapshotted for a single matching pass.
#[derive(Debug, Clone)]
pub struct GroundItemObservation {
    pub entity: EntityId,
    pub grid_pos: Vec2,
    pub world_item: Option<WorldItemFacet>,
    pub label: GroundLabel,
}

/// An observation that passed every filter and will be rendered.
#[derive(Debug, Clone)]
pub struct MatchedItem {
    pub observation: GroundItemObservation,
    /// Display name resolved through the art mapping.
    pub name: String,
    /// Planar grid distance from the player; infinite when the player
    /// position was unknown at match time.
    pub distance: f32,
}

// Set identity is the source entity, not the resolved name: two distinct
// entities with the same name are two matches.
impl PartialEq for MatchedItem {
    fn eq(&self, other: &Self) -> bool {
        self.observation.entity == other.observation.entity
    }
}

impl Eq for MatchedItem {}

impl Hash for MatchedItem {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.observation.entity.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observation(entity: u64) -> GroundItemObservation {
        GroundItemObservation {
            entity: EntityId(entity),
            grid_pos: Vec2::new(10.0, 10.0),
            world_item: None,
            label: GroundLabel {
                rect: RectF::default(),
                visible: true,
                text_color: [255, 255, 255, 255],
                border_color: [0, 0, 0, 255],
                background_color: [0, 0, 0, 200],
            },
        }
    }

    #[test]
    fn test_matched_item_identity_is_the_entity() {
        let a = MatchedItem {
            observation: observation(1),
            name: "Headhunter".to_string(),
            distance: 5.0,
        };
        // Same entity, different name/distance: still the same match
        let b = MatchedItem {
            observation: observation(1),
            name: "Mageblood".to_string(),
            distance: 50.0,
        };
        // Different entity at the same position: a distinct match
        let c = MatchedItem {
            observation: observation(2),
            name: "Headhunter".to_string(),
            distance: 5.0,
        };

        assert_eq!(a, b);
        assert_ne!(a, c);

        let mut set = hashbrown::HashSet::new();
        set.insert(a);
        set.insert(b);
        set.insert(c);
        assert_eq!(set.len(), 2);
    }
}
