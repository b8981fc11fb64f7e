//! Item matching
//!
//! Filters one snapshot of ground-item observations down to the uniques the
//! user is watching for. Stateless: every pass recomputes the full set from
//! scratch, and the caller swaps its previous set wholesale — stale entries
//! cannot survive a pass.

use hashbrown::HashSet;

use uniquefinder_types::Vec2;

use crate::art_mapping::UniqueArtMapping;
use crate::observation::{GroundItemObservation, ItemRarity, MatchedItem};

/// The matcher's result set, deduplicated by source entity.
pub type MatchedSet = HashSet<MatchedItem>;

#[derive(Debug, Clone, Copy)]
pub struct MatchOptions {
    /// Skip items that are already identified.
    pub hide_identified: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            hide_identified: true,
        }
    }
}

/// Match the current observations against the watch-list.
///
/// Filters apply in order and short-circuit: an observation missing a facet
/// contributes nothing (that is a filter outcome, not an error). A surviving
/// observation becomes a [`MatchedItem`] with its planar distance from
/// `player_pos`, or an infinite distance when the player position is unknown.
pub fn match_items(
    observations: &[GroundItemObservation],
    player_pos: Option<Vec2>,
    watch_list: &[String],
    options: MatchOptions,
    mapping: &UniqueArtMapping,
) -> MatchedSet {
    // Blank or whitespace-only watch entries never contribute a match
    let patterns: Vec<String> = watch_list
        .iter()
        .filter(|p| !p.trim().is_empty())
        .map(|p| p.to_lowercase())
        .collect();

    let mut matched = MatchedSet::new();
    if patterns.is_empty() {
        return matched;
    }

    for obs in observations {
        let Some(world_item) = &obs.world_item else {
            continue;
        };
        let Some(mods) = world_item.mods else {
            continue;
        };
        if mods.rarity != ItemRarity::Unique {
            continue;
        }
        if options.hide_identified && mods.identified {
            continue;
        }
        let Some(render) = &world_item.render else {
            continue;
        };
        let Some(name) = mapping.resolve(&render.resource_key) else {
            continue;
        };

        let name_lower = name.to_lowercase();
        if !patterns.iter().any(|p| name_lower.contains(p.as_str())) {
            continue;
        }

        let distance = player_pos.map_or(f32::INFINITY, |p| p.distance(obs.grid_pos));
        matched.insert(MatchedItem {
            observation: obs.clone(),
            name: name.to_string(),
            distance,
        });
    }

    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observation::{EntityId, GroundLabel, ModsFacet, RenderFacet, WorldItemFacet};
    use uniquefinder_types::RectF;

    fn mapping() -> UniqueArtMapping {
        UniqueArtMapping::from_json(
            r#"{
                "Art/Belts/Headhunter.dds": ["Replica Headhunter", "Headhunter"],
                "Art/Belts/MageBlood.dds": ["Mageblood"],
                "Art/Talismans/Dragonfang.dds": ["Replica Dragonfang's Flight"]
            }"#,
        )
        .expect("Should parse")
    }

    fn unique_item(entity: u64, resource_key: &str, identified: bool) -> GroundItemObservation {
        GroundItemObservation {
            entity: EntityId(entity),
            grid_pos: Vec2::new(3.0, 4.0),
            world_item: Some(WorldItemFacet {
                mods: Some(ModsFacet {
                    rarity: ItemRarity::Unique,
                    identified,
                }),
                render: Some(RenderFacet {
                    resource_key: resource_key.to_string(),
                }),
            }),
            label: GroundLabel {
                rect: RectF::default(),
                visible: true,
                text_color: [175, 96, 37, 255],
                border_color: [0, 0, 0, 255],
                background_color: [0, 0, 0, 200],
            },
        }
    }

    fn watch(patterns: &[&str]) -> Vec<String> {
        patterns.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_matches_watched_unique() {
        let observations = vec![unique_item(1, "Art/Belts/Headhunter.dds", false)];
        let matched = match_items(
            &observations,
            Some(Vec2::ZERO),
            &watch(&["headhunter"]),
            MatchOptions::default(),
            &mapping(),
        );

        assert_eq!(matched.len(), 1);
        let item = matched.iter().next().expect("Should have one match");
        assert_eq!(item.name, "Headhunter");
        assert_eq!(item.distance, 5.0);
    }

    #[test]
    fn test_matching_is_case_insensitive_substring() {
        let observations = vec![unique_item(1, "Art/Belts/MageBlood.dds", false)];
        let m = mapping();
        let options = MatchOptions::default();

        for pattern in ["Mageblood", "MAGEBLOOD", "geblo"] {
            let matched = match_items(&observations, None, &watch(&[pattern]), options, &m);
            assert_eq!(matched.len(), 1, "pattern {pattern:?} should match");
        }

        let matched = match_items(&observations, None, &watch(&["Headhunter"]), options, &m);
        assert!(matched.is_empty());
    }

    #[test]
    fn test_blank_watch_entries_contribute_nothing() {
        let observations = vec![unique_item(1, "Art/Belts/MageBlood.dds", false)];
        let matched = match_items(
            &observations,
            None,
            &watch(&["Mageblood", "  "]),
            MatchOptions::default(),
            &mapping(),
        );
        assert_eq!(matched.len(), 1);

        // Whitespace-only list matches nothing at all
        let matched = match_items(
            &observations,
            None,
            &watch(&["  ", ""]),
            MatchOptions::default(),
            &mapping(),
        );
        assert!(matched.is_empty());
    }

    #[test]
    fn test_replica_exception_is_matchable() {
        let observations = vec![unique_item(1, "Art/Talismans/Dragonfang.dds", false)];
        let matched = match_items(
            &observations,
            None,
            &watch(&["Dragonfang"]),
            MatchOptions::default(),
            &mapping(),
        );
        assert_eq!(matched.len(), 1);
        assert_eq!(
            matched.iter().next().expect("one match").name,
            "Replica Dragonfang's Flight"
        );
    }

    #[test]
    fn test_missing_facets_are_skipped() {
        let mut no_world_item = unique_item(1, "Art/Belts/Headhunter.dds", false);
        no_world_item.world_item = None;

        let mut no_mods = unique_item(2, "Art/Belts/Headhunter.dds", false);
        no_mods.world_item.as_mut().expect("set above").mods = None;

        let mut no_render = unique_item(3, "Art/Belts/Headhunter.dds", false);
        no_render.world_item.as_mut().expect("set above").render = None;

        let mut wrong_rarity = unique_item(4, "Art/Belts/Headhunter.dds", false);
        wrong_rarity
            .world_item
            .as_mut()
            .expect("set above")
            .mods
            .as_mut()
            .expect("set above")
            .rarity = ItemRarity::Rare;

        let unknown_art = unique_item(5, "Art/Unknown.dds", false);
        let survivor = unique_item(6, "Art/Belts/Headhunter.dds", false);

        let observations = vec![
            no_world_item,
            no_mods,
            no_render,
            wrong_rarity,
            unknown_art,
            survivor,
        ];
        let matched = match_items(
            &observations,
            None,
            &watch(&["Headhunter"]),
            MatchOptions::default(),
            &mapping(),
        );

        assert_eq!(matched.len(), 1);
        assert_eq!(
            matched.iter().next().expect("one match").observation.entity,
            EntityId(6)
        );
    }

    #[test]
    fn test_hide_identified_option() {
        let observations = vec![unique_item(1, "Art/Belts/Headhunter.dds", true)];
        let m = mapping();

        let hidden = match_items(
            &observations,
            None,
            &watch(&["Headhunter"]),
            MatchOptions {
                hide_identified: true,
            },
            &m,
        );
        assert!(hidden.is_empty());

        let shown = match_items(
            &observations,
            None,
            &watch(&["Headhunter"]),
            MatchOptions {
                hide_identified: false,
            },
            &m,
        );
        assert_eq!(shown.len(), 1);
    }

    #[test]
    fn test_unknown_player_position_yields_infinite_distance() {
        let observations = vec![unique_item(1, "Art/Belts/Headhunter.dds", false)];
        let matched = match_items(
            &observations,
            None,
            &watch(&["Headhunter"]),
            MatchOptions::default(),
            &mapping(),
        );
        assert!(matched.iter().next().expect("one match").distance.is_infinite());
    }

    #[test]
    fn test_matching_is_idempotent() {
        let observations = vec![
            unique_item(1, "Art/Belts/Headhunter.dds", false),
            unique_item(2, "Art/Belts/MageBlood.dds", false),
        ];
        let m = mapping();
        let list = watch(&["Headhunter", "Mageblood"]);

        let first = match_items(&observations, Some(Vec2::ZERO), &list, MatchOptions::default(), &m);
        let second = match_items(&observations, Some(Vec2::ZERO), &list, MatchOptions::default(), &m);
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }
}
