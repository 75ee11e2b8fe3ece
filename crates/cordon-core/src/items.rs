//! Item model: tagged marker items and held-inventory snapshots.
//!
//! The selection tool is driven by in-world items the user is handed when a
//! session starts. Markers are ordinary item stacks carrying a recognized
//! tag value under a reserved namespaced key; everything else about them
//! (display name, lore, icon) is cosmetic. The user's previous held items
//! are captured as an opaque [`ItemSnapshot`] at enable time and handed back
//! verbatim at disable time.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::MarkerConfig;
use crate::events::MarkerKind;

// =============================================================================
// ItemStack
// =============================================================================

/// A stack of items with optional cosmetics and string-valued tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStack {
    /// Namespaced item identifier (e.g. `minecraft:end_rod`).
    pub id: String,
    /// Stack size.
    pub count: u32,
    /// Cosmetic display name, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Cosmetic lore lines.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lore: Vec<String>,
    /// String-valued tags keyed by namespaced key.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tags: BTreeMap<String, String>,
}

impl ItemStack {
    /// Create a single-item stack of the given id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            count: 1,
            display_name: None,
            lore: Vec::new(),
            tags: BTreeMap::new(),
        }
    }

    /// Set the stack size.
    #[must_use]
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Set the display name.
    #[must_use]
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Append a lore line.
    #[must_use]
    pub fn with_lore_line(mut self, line: impl Into<String>) -> Self {
        self.lore.push(line.into());
        self
    }

    /// Set a string tag under a namespaced key.
    #[must_use]
    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }

    /// Look up a tag value by key.
    #[must_use]
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }
}

// =============================================================================
// ItemSnapshot
// =============================================================================

/// An opaque snapshot of an identity's held-item slots.
///
/// Captured when a session is enabled and returned unchanged when it is
/// disabled; the registry never inspects or edits the contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSnapshot {
    slots: Vec<Option<ItemStack>>,
}

impl ItemSnapshot {
    /// Snapshot of an empty inventory.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Snapshot from explicit slots.
    #[must_use]
    pub fn from_slots(slots: Vec<Option<ItemStack>>) -> Self {
        Self { slots }
    }

    /// The captured slots, in order.
    #[must_use]
    pub fn slots(&self) -> &[Option<ItemStack>] {
        &self.slots
    }

    /// Number of captured slots (occupied or not).
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no slots were captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}

// =============================================================================
// Marker kit
// =============================================================================

/// Number of hotbar slots the kit layout covers.
const HOTBAR_SLOTS: usize = 9;

/// Build the hotbar layout handed to a user when a session is enabled.
///
/// The corner marker lands in the configured slot; the commit marker (when
/// issued; it stays inert until a confirmation flow exists) takes the next
/// slot, wrapping within the hotbar. All other slots are empty: the user's
/// real items are parked in the session snapshot.
#[must_use]
pub fn marker_kit(config: &MarkerConfig) -> Vec<Option<ItemStack>> {
    let mut slots: Vec<Option<ItemStack>> = vec![None; HOTBAR_SLOTS];

    let corner_slot = usize::from(config.hotbar_slot) % HOTBAR_SLOTS;
    slots[corner_slot] = Some(
        ItemStack::new(config.corner_item_id.clone())
            .with_display_name(config.corner_display_name.clone())
            .with_lore_line("Primary/secondary use sets a corner.")
            .with_lore_line("Use precisely (crouch) to commit the selection.")
            .with_tag(config.tag_key.clone(), MarkerKind::Corner.tag_value()),
    );

    if config.issue_commit_marker {
        let commit_slot = (corner_slot + 1) % HOTBAR_SLOTS;
        slots[commit_slot] = Some(
            ItemStack::new(config.commit_item_id.clone())
                .with_display_name(config.commit_display_name.clone())
                .with_lore_line("Confirms the selection.")
                .with_tag(config.tag_key.clone(), MarkerKind::Commit.tag_value()),
        );
    }

    slots
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MarkerConfig;

    // ---- ItemStack builder ----

    #[test]
    fn builder_sets_all_fields() {
        let item = ItemStack::new("minecraft:end_rod")
            .with_count(3)
            .with_display_name("Region Selector")
            .with_lore_line("line one")
            .with_lore_line("line two")
            .with_tag("cordon:marker", "cornerMarker");

        assert_eq!(item.id, "minecraft:end_rod");
        assert_eq!(item.count, 3);
        assert_eq!(item.display_name.as_deref(), Some("Region Selector"));
        assert_eq!(item.lore.len(), 2);
        assert_eq!(item.tag("cordon:marker"), Some("cornerMarker"));
        assert_eq!(item.tag("other:key"), None);
    }

    #[test]
    fn item_serde_roundtrip() {
        let item = ItemStack::new("minecraft:stone")
            .with_display_name("Stone")
            .with_tag("ns:key", "value");
        let json = serde_json::to_string(&item).unwrap();
        let back: ItemStack = serde_json::from_str(&json).unwrap();
        assert_eq!(item, back);
    }

    // ---- ItemSnapshot ----

    #[test]
    fn snapshot_preserves_slot_order_and_gaps() {
        let snapshot = ItemSnapshot::from_slots(vec![
            Some(ItemStack::new("minecraft:dirt")),
            None,
            Some(ItemStack::new("minecraft:stone").with_count(64)),
        ]);

        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot.occupied(), 2);
        assert!(snapshot.slots()[1].is_none());
        assert_eq!(snapshot.slots()[2].as_ref().unwrap().count, 64);
    }

    #[test]
    fn empty_snapshot() {
        let snapshot = ItemSnapshot::empty();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.occupied(), 0);
    }

    // ---- Marker kit ----

    #[test]
    fn kit_places_tagged_corner_marker_in_configured_slot() {
        let config = MarkerConfig {
            hotbar_slot: 4,
            ..MarkerConfig::default()
        };
        let kit = marker_kit(&config);
        assert_eq!(kit.len(), 9);

        let marker = kit[4].as_ref().expect("corner marker in slot 4");
        assert_eq!(marker.tag(&config.tag_key), Some(MarkerKind::Corner.tag_value()));
        assert_eq!(kit.iter().filter(|s| s.is_some()).count(), 1);
    }

    #[test]
    fn kit_includes_commit_marker_when_configured() {
        let config = MarkerConfig {
            issue_commit_marker: true,
            ..MarkerConfig::default()
        };
        let kit = marker_kit(&config);

        let commit = kit[1].as_ref().expect("commit marker next to corner");
        assert_eq!(commit.tag(&config.tag_key), Some(MarkerKind::Commit.tag_value()));
    }

    #[test]
    fn kit_commit_marker_wraps_within_hotbar() {
        let config = MarkerConfig {
            issue_commit_marker: true,
            hotbar_slot: 8,
            ..MarkerConfig::default()
        };
        let kit = marker_kit(&config);
        assert!(kit[8].is_some());
        assert!(kit[0].is_some());
    }
}
