//! Modal lifecycle registry for the faction archives.
//!
//! Cards are built once per `faction-unit` pair and cached for the life of
//! the registry; closing a card hides it without evicting, so reopening is a
//! cache hit. The registry is an explicit object owned by the UI-composition
//! layer (the archives scene creates it and clears it on exit) — there is no
//! shared module-level map.

use std::collections::{BTreeMap, HashMap};

use anyhow::Context;
use serde::Deserialize;

/// One unit entry in a faction roster, as stored in the archive asset.
#[derive(Debug, Clone, Deserialize)]
pub struct UnitProfile {
    pub key: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub abilities: Vec<String>,
    #[serde(default)]
    pub stats: BTreeMap<String, i64>,
}

/// A faction and its units.
#[derive(Debug, Clone, Deserialize)]
pub struct FactionRoster {
    pub key: String,
    pub name: String,
    pub units: Vec<UnitProfile>,
}

/// Parses the embedded archive asset.
pub fn load_rosters(json: &str) -> anyhow::Result<Vec<FactionRoster>> {
    serde_json::from_str(json).context("failed to parse faction roster data")
}

/// Display state of one unit-details modal.
#[derive(Debug, Clone)]
pub struct ModalCard {
    pub faction: String,
    pub unit_key: String,
    pub title: String,
    pub description: String,
    pub abilities: Vec<String>,
    pub stats: BTreeMap<String, i64>,
    visible: bool,
}

impl ModalCard {
    fn from_profile(faction: &str, profile: &UnitProfile) -> Self {
        ModalCard {
            faction: faction.to_string(),
            unit_key: profile.key.clone(),
            title: profile.name.clone(),
            description: profile.description.clone(),
            abilities: profile.abilities.clone(),
            stats: profile.stats.clone(),
            visible: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Bar fill for a stat value: `value / 2` percent, capped at 100.
    pub fn stat_fill(value: i64) -> f32 {
        ((value as f32 / 2.0).clamp(0.0, 100.0)) / 100.0
    }
}

fn card_id(faction: &str, unit_key: &str) -> String {
    format!("{faction}-{unit_key}")
}

/// Cache and visibility tracker for unit-details modals.
#[derive(Debug, Default)]
pub struct ModalRegistry {
    cache: HashMap<String, ModalCard>,
}

impl ModalRegistry {
    pub fn new() -> Self {
        ModalRegistry {
            cache: HashMap::new(),
        }
    }

    /// Shows the modal for `profile`, building and caching it on first open.
    pub fn open(&mut self, faction: &str, profile: &UnitProfile) {
        let id = card_id(faction, &profile.key);
        let card = self
            .cache
            .entry(id)
            .or_insert_with(|| ModalCard::from_profile(faction, profile));
        card.visible = true;
    }

    /// Hides one modal. The card stays cached for the next open.
    pub fn close(&mut self, faction: &str, unit_key: &str) {
        if let Some(card) = self.cache.get_mut(&card_id(faction, unit_key)) {
            card.visible = false;
        }
    }

    /// Hides every modal belonging to `faction` (the popup itself closed).
    pub fn close_all(&mut self, faction: &str) {
        let prefix = format!("{faction}-");
        for (id, card) in self.cache.iter_mut() {
            if id.starts_with(&prefix) {
                card.visible = false;
            }
        }
    }

    /// Drops the whole cache. Called when the owning scene exits.
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_open(&self, faction: &str, unit_key: &str) -> bool {
        self.cache
            .get(&card_id(faction, unit_key))
            .is_some_and(|card| card.visible)
    }

    /// Currently visible cards in stable id order, for rendering.
    pub fn visible_cards(&self) -> Vec<&ModalCard> {
        let mut cards: Vec<&ModalCard> = self
            .cache
            .values()
            .filter(|card| card.visible)
            .collect();
        cards.sort_by(|a, b| {
            card_id(&a.faction, &a.unit_key).cmp(&card_id(&b.faction, &b.unit_key))
        });
        cards
    }
}

#[cfg(test)]
mod tests {
    use super::{ModalCard, ModalRegistry, UnitProfile, load_rosters};
    use std::collections::BTreeMap;

    fn profile(key: &str) -> UnitProfile {
        UnitProfile {
            key: key.to_string(),
            name: format!("Unit {key}"),
            description: "A test unit.".to_string(),
            abilities: vec!["Testing".to_string()],
            stats: BTreeMap::from([("STR".to_string(), 80)]),
        }
    }

    #[test]
    fn open_builds_and_shows_a_card() {
        let mut registry = ModalRegistry::new();
        registry.open("fdg", &profile("trooper"));
        assert!(registry.is_open("fdg", "trooper"));
        assert_eq!(registry.cached_len(), 1);
        assert_eq!(registry.visible_cards().len(), 1);
    }

    #[test]
    fn close_hides_without_evicting() {
        let mut registry = ModalRegistry::new();
        registry.open("fdg", &profile("trooper"));
        registry.close("fdg", "trooper");
        assert!(!registry.is_open("fdg", "trooper"));
        assert_eq!(registry.cached_len(), 1);
        assert!(registry.visible_cards().is_empty());
    }

    #[test]
    fn reopen_reuses_the_cached_card() {
        let mut registry = ModalRegistry::new();
        registry.open("fdg", &profile("trooper"));
        registry.close("fdg", "trooper");
        registry.open("fdg", &profile("trooper"));
        assert!(registry.is_open("fdg", "trooper"));
        assert_eq!(registry.cached_len(), 1);
    }

    #[test]
    fn close_all_only_touches_the_named_faction() {
        let mut registry = ModalRegistry::new();
        registry.open("fdg", &profile("trooper"));
        registry.open("fdg", &profile("warhawk"));
        registry.open("mutants", &profile("brute"));

        registry.close_all("fdg");
        assert!(!registry.is_open("fdg", "trooper"));
        assert!(!registry.is_open("fdg", "warhawk"));
        assert!(registry.is_open("mutants", "brute"));
        assert_eq!(registry.cached_len(), 3);
    }

    #[test]
    fn clear_empties_the_cache() {
        let mut registry = ModalRegistry::new();
        registry.open("fdg", &profile("trooper"));
        registry.clear();
        assert_eq!(registry.cached_len(), 0);
        assert!(!registry.is_open("fdg", "trooper"));
    }

    #[test]
    fn visible_cards_come_back_in_stable_order() {
        let mut registry = ModalRegistry::new();
        registry.open("mutants", &profile("brute"));
        registry.open("fdg", &profile("trooper"));
        let ids: Vec<String> = registry
            .visible_cards()
            .iter()
            .map(|card| format!("{}-{}", card.faction, card.unit_key))
            .collect();
        assert_eq!(ids, vec!["fdg-trooper", "mutants-brute"]);
    }

    #[test]
    fn stat_fill_caps_at_full_bar() {
        assert_eq!(ModalCard::stat_fill(100), 0.5);
        assert_eq!(ModalCard::stat_fill(200), 1.0);
        assert_eq!(ModalCard::stat_fill(500), 1.0);
        assert_eq!(ModalCard::stat_fill(0), 0.0);
    }

    #[test]
    fn rosters_parse_from_json() {
        let json = r#"[
            {
                "key": "fdg",
                "name": "FDG",
                "units": [
                    {
                        "key": "trooper",
                        "name": "Trooper",
                        "description": "Standard infantry unit.",
                        "abilities": ["Standard Combat"],
                        "stats": { "STR": 65, "DEX": 70 }
                    }
                ]
            }
        ]"#;
        let rosters = load_rosters(json).unwrap();
        assert_eq!(rosters.len(), 1);
        assert_eq!(rosters[0].units[0].name, "Trooper");
        assert_eq!(rosters[0].units[0].stats["DEX"], 70);
    }

    #[test]
    fn malformed_roster_json_is_an_error() {
        assert!(load_rosters("not json").is_err());
        assert!(load_rosters(r#"{"key": "missing fields"}"#).is_err());
    }
}
