//! Interaction events and selection updates.
//!
//! [`Interaction`] is the inbound shape the host hands to the dispatcher,
//! one per world interaction: who acted, what they held, which activation it
//! was, whether the precise modifier (crouch) was active, and the targeted
//! block if the interaction hit a solid surface.
//!
//! [`SelectionUpdate`] is the outbound shape consumed by the messaging
//! collaborator: plain data describing what happened to the selection, never
//! formatted text.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cuboid::{Cuboid, WorldPoint};
use crate::error::SessionError;
use crate::session::Corner;

// =============================================================================
// Marker tags
// =============================================================================

/// Marker roles recognized by the selection tool.
///
/// Items carry the role as a string tag under the configured namespaced
/// key. The tag values are reserved wire strings and not configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    /// Sets/commits selection corners.
    Corner,
    /// Reserved for an explicit confirm action; currently inert.
    Commit,
}

impl MarkerKind {
    /// Tag value identifying the corner marker.
    pub const CORNER_TAG: &'static str = "cornerMarker";
    /// Tag value identifying the commit marker.
    pub const COMMIT_TAG: &'static str = "commitMarker";

    /// Parse a held tag value; anything unrecognized is `None`.
    #[must_use]
    pub fn from_tag_value(value: &str) -> Option<Self> {
        match value {
            Self::CORNER_TAG => Some(Self::Corner),
            Self::COMMIT_TAG => Some(Self::Commit),
            _ => None,
        }
    }

    /// The reserved tag value for this marker role.
    #[must_use]
    pub const fn tag_value(self) -> &'static str {
        match self {
            Self::Corner => Self::CORNER_TAG,
            Self::Commit => Self::COMMIT_TAG,
        }
    }
}

// =============================================================================
// Inbound interaction
// =============================================================================

/// Which activation the interaction was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionKind {
    /// Primary activation (e.g. left click).
    Primary,
    /// Secondary activation (e.g. right click).
    Secondary,
}

/// A world-interaction event as delivered by the host, once per tick-stream
/// event. The host invokes the dispatcher synchronously with this struct;
/// there is no listener registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interaction {
    /// Acting identity.
    pub actor: Uuid,
    /// Tag value on the held object, if the object carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub held_tag: Option<String>,
    /// Primary or secondary activation.
    pub kind: InteractionKind,
    /// Whether the precise modifier (crouch) was active.
    #[serde(default)]
    pub precise: bool,
    /// Targeted block, when the interaction hit a solid surface.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<WorldPoint>,
}

impl Interaction {
    /// The recognized marker role of the held object, if any.
    #[must_use]
    pub fn marker(&self) -> Option<MarkerKind> {
        self.held_tag.as_deref().and_then(MarkerKind::from_tag_value)
    }
}

// =============================================================================
// Outbound updates
// =============================================================================

/// What a processed interaction (or lifecycle request) did to the selection.
///
/// Plain data for the messaging collaborator; rendering lives in
/// [`messages`](crate::messages).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SelectionUpdate {
    /// A corner was set to a point.
    CornerSet { which: Corner, point: WorldPoint },
    /// A commit was attempted with fewer than two corners.
    SelectionIncomplete,
    /// A cuboid was derived and stored.
    CuboidCommitted { cuboid: Cuboid },
    /// Enable was requested but a session already exists.
    AlreadyActive,
    /// Disable (or an interaction) was requested without a session.
    NotActive,
}

impl From<&SessionError> for SelectionUpdate {
    fn from(err: &SessionError) -> Self {
        match err {
            SessionError::AlreadyActive(_) => Self::AlreadyActive,
            SessionError::NotActive(_) => Self::NotActive,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ---- Marker parsing ----

    #[test]
    fn recognized_tag_values_parse() {
        assert_eq!(
            MarkerKind::from_tag_value("cornerMarker"),
            Some(MarkerKind::Corner)
        );
        assert_eq!(
            MarkerKind::from_tag_value("commitMarker"),
            Some(MarkerKind::Commit)
        );
    }

    #[test]
    fn unknown_tag_values_are_unrecognized() {
        assert_eq!(MarkerKind::from_tag_value(""), None);
        assert_eq!(MarkerKind::from_tag_value("selector"), None);
        assert_eq!(MarkerKind::from_tag_value("CornerMarker"), None);
    }

    #[test]
    fn tag_values_roundtrip() {
        for kind in [MarkerKind::Corner, MarkerKind::Commit] {
            assert_eq!(MarkerKind::from_tag_value(kind.tag_value()), Some(kind));
        }
    }

    #[test]
    fn interaction_marker_requires_held_tag() {
        let event = Interaction {
            actor: Uuid::new_v4(),
            held_tag: None,
            kind: InteractionKind::Primary,
            precise: false,
            target: None,
        };
        assert_eq!(event.marker(), None);

        let event = Interaction {
            held_tag: Some("cornerMarker".to_string()),
            ..event
        };
        assert_eq!(event.marker(), Some(MarkerKind::Corner));
    }

    // ---- Serde ----

    #[test]
    fn interaction_deserializes_with_defaults() {
        let json = format!(
            r#"{{"actor": "{}", "kind": "primary"}}"#,
            Uuid::nil()
        );
        let event: Interaction = serde_json::from_str(&json).unwrap();
        assert_eq!(event.kind, InteractionKind::Primary);
        assert!(!event.precise);
        assert!(event.held_tag.is_none());
        assert!(event.target.is_none());
    }

    #[test]
    fn update_serializes_tagged() {
        let update = SelectionUpdate::CornerSet {
            which: Corner::A,
            point: WorldPoint::new("world", 1, 2, 3),
        };
        let json = serde_json::to_string(&update).unwrap();
        assert!(json.contains("corner_set"));

        let json = serde_json::to_string(&SelectionUpdate::SelectionIncomplete).unwrap();
        assert!(json.contains("selection_incomplete"));
    }

    #[test]
    fn session_errors_map_to_updates() {
        let id = Uuid::new_v4();
        assert_eq!(
            SelectionUpdate::from(&SessionError::AlreadyActive(id)),
            SelectionUpdate::AlreadyActive
        );
        assert_eq!(
            SelectionUpdate::from(&SessionError::NotActive(id)),
            SelectionUpdate::NotActive
        );
    }
}
