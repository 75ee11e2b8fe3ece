//! Per-identity selection session state.
//!
//! A [`Session`] is the mutable record behind one user's active selection:
//! two independently settable corner points, the cuboid committed from them,
//! and the held-item snapshot captured when the tool was enabled. Sessions
//! are owned exclusively by the registry; all mutation happens under its
//! per-identity lock.
//!
//! # Phases
//!
//! | Phase        | Meaning                              |
//! |--------------|--------------------------------------|
//! | `Idle`       | no corners set                       |
//! | `OneCorner`  | exactly one of A/B set               |
//! | `TwoCorners` | both corners set, nothing committed  |
//! | `Committed`  | a cuboid has been derived            |

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::cuboid::{Cuboid, WorldPoint};
use crate::error::SelectionError;
use crate::items::ItemSnapshot;

// =============================================================================
// Corner
// =============================================================================

/// Which of the two selection corners an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Corner {
    A,
    B,
}

impl std::fmt::Display for Corner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
        }
    }
}

// =============================================================================
// SelectionPhase
// =============================================================================

/// Lifecycle phase of a session, derived from its corner/cuboid state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPhase {
    /// No corners set yet.
    Idle,
    /// Exactly one corner set.
    OneCorner,
    /// Both corners set, no cuboid committed.
    TwoCorners,
    /// A cuboid has been committed.
    Committed,
}

impl SelectionPhase {
    /// Whether a commit can succeed from this phase.
    #[must_use]
    pub const fn can_commit(self) -> bool {
        matches!(self, Self::TwoCorners | Self::Committed)
    }
}

impl std::fmt::Display for SelectionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::OneCorner => write!(f, "one_corner"),
            Self::TwoCorners => write!(f, "two_corners"),
            Self::Committed => write!(f, "committed"),
        }
    }
}

// =============================================================================
// Session
// =============================================================================

/// Mutable selection state for a single identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    owner: Uuid,
    corner_a: Option<WorldPoint>,
    corner_b: Option<WorldPoint>,
    committed: Option<Cuboid>,
    saved_items: ItemSnapshot,
}

impl Session {
    /// Create a fresh session owned by `owner`, holding the items captured
    /// at enable time.
    #[must_use]
    pub fn new(owner: Uuid, saved_items: ItemSnapshot) -> Self {
        Self {
            owner,
            corner_a: None,
            corner_b: None,
            committed: None,
            saved_items,
        }
    }

    /// Owning identity.
    #[must_use]
    pub fn owner(&self) -> Uuid {
        self.owner
    }

    /// Current phase, derived from corner and commit state.
    #[must_use]
    pub fn phase(&self) -> SelectionPhase {
        if self.committed.is_some() {
            SelectionPhase::Committed
        } else {
            match (self.corner_a.is_some(), self.corner_b.is_some()) {
                (false, false) => SelectionPhase::Idle,
                (true, true) => SelectionPhase::TwoCorners,
                _ => SelectionPhase::OneCorner,
            }
        }
    }

    /// The requested corner point, if set.
    #[must_use]
    pub fn corner(&self, which: Corner) -> Option<&WorldPoint> {
        match which {
            Corner::A => self.corner_a.as_ref(),
            Corner::B => self.corner_b.as_ref(),
        }
    }

    /// Set (or overwrite) a corner. Always allowed; a later commit
    /// re-derives the cuboid from the new value.
    pub fn set_corner(&mut self, which: Corner, point: WorldPoint) {
        debug!(actor = %self.owner, which = %which, point = %point, "corner set");
        match which {
            Corner::A => self.corner_a = Some(point),
            Corner::B => self.corner_b = Some(point),
        }
    }

    /// Update the given corner with `point`, then derive and store a cuboid
    /// from the two corners.
    ///
    /// Fails with [`SelectionError::IncompleteSelection`] when the other
    /// corner has not been set yet; the corner update itself persists so the
    /// user only has to supply the missing one. Corners in different worlds
    /// surface a geometry error and leave the committed cuboid unchanged.
    pub fn commit(&mut self, which: Corner, point: WorldPoint) -> Result<Cuboid, SelectionError> {
        self.set_corner(which, point);

        let (Some(a), Some(b)) = (&self.corner_a, &self.corner_b) else {
            return Err(SelectionError::IncompleteSelection);
        };

        let cuboid = Cuboid::from_corners(a, b)?;
        debug!(actor = %self.owner, cuboid = %cuboid, "cuboid committed");
        self.committed = Some(cuboid.clone());
        Ok(cuboid)
    }

    /// The committed cuboid, if any.
    #[must_use]
    pub fn committed(&self) -> Option<&Cuboid> {
        self.committed.as_ref()
    }

    /// The held-item snapshot captured at enable time.
    #[must_use]
    pub fn saved_items(&self) -> &ItemSnapshot {
        &self.saved_items
    }

    /// Consume the session, yielding the snapshot for restoration.
    #[must_use]
    pub fn into_saved_items(self) -> ItemSnapshot {
        self.saved_items
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::ItemStack;

    fn session() -> Session {
        Session::new(Uuid::new_v4(), ItemSnapshot::empty())
    }

    fn p(x: i64, y: i64, z: i64) -> WorldPoint {
        WorldPoint::new("world", x, y, z)
    }

    // ---- Phases ----

    #[test]
    fn fresh_session_is_idle() {
        assert_eq!(session().phase(), SelectionPhase::Idle);
    }

    #[test]
    fn one_corner_in_either_slot() {
        let mut s = session();
        s.set_corner(Corner::A, p(1, 2, 3));
        assert_eq!(s.phase(), SelectionPhase::OneCorner);

        let mut s = session();
        s.set_corner(Corner::B, p(1, 2, 3));
        assert_eq!(s.phase(), SelectionPhase::OneCorner);
    }

    #[test]
    fn both_corners_then_commit() {
        let mut s = session();
        s.set_corner(Corner::A, p(10, 64, 10));
        s.set_corner(Corner::B, p(20, 70, 20));
        assert_eq!(s.phase(), SelectionPhase::TwoCorners);
        assert!(s.phase().can_commit());

        let cuboid = s.commit(Corner::B, p(20, 70, 20)).unwrap();
        assert_eq!(s.phase(), SelectionPhase::Committed);
        assert_eq!(s.committed(), Some(&cuboid));
    }

    // ---- Corner updates ----

    #[test]
    fn corners_overwrite_freely() {
        let mut s = session();
        s.set_corner(Corner::A, p(1, 1, 1));
        s.set_corner(Corner::A, p(9, 9, 9));
        assert_eq!(s.corner(Corner::A), Some(&p(9, 9, 9)));
        assert_eq!(s.corner(Corner::B), None);
    }

    // ---- Commit ----

    #[test]
    fn commit_normalizes_bounds() {
        let mut s = session();
        s.set_corner(Corner::A, p(10, 64, 10));
        let cuboid = s.commit(Corner::B, p(20, 70, 20)).unwrap();
        assert_eq!(cuboid.min(), &p(10, 64, 10));
        assert_eq!(cuboid.max(), &p(20, 70, 20));
    }

    #[test]
    fn commit_with_one_corner_is_incomplete_but_keeps_the_corner() {
        let mut s = session();
        let err = s.commit(Corner::A, p(1, 2, 3)).unwrap_err();
        assert_eq!(err, SelectionError::IncompleteSelection);
        assert_eq!(s.corner(Corner::A), Some(&p(1, 2, 3)));
        assert_eq!(s.committed(), None);
        assert_eq!(s.phase(), SelectionPhase::OneCorner);
    }

    #[test]
    fn recommit_rederives_from_moved_corner() {
        let mut s = session();
        s.set_corner(Corner::A, p(0, 0, 0));
        s.set_corner(Corner::B, p(5, 5, 5));
        s.commit(Corner::B, p(5, 5, 5)).unwrap();

        let cuboid = s.commit(Corner::A, p(2, 2, 2)).unwrap();
        assert_eq!(cuboid.min(), &p(2, 2, 2));
        assert_eq!(cuboid.max(), &p(5, 5, 5));
    }

    #[test]
    fn cross_world_commit_fails_and_preserves_previous_cuboid() {
        let mut s = session();
        s.set_corner(Corner::A, p(0, 0, 0));
        s.commit(Corner::B, p(5, 5, 5)).unwrap();
        let before = s.committed().cloned();

        let err = s
            .commit(Corner::B, WorldPoint::new("nether", 1, 1, 1))
            .unwrap_err();
        assert!(matches!(err, SelectionError::Geometry(_)));
        assert_eq!(s.committed().cloned(), before);
    }

    // ---- Snapshot ownership ----

    #[test]
    fn saved_items_survive_corner_activity() {
        let snapshot = ItemSnapshot::from_slots(vec![Some(ItemStack::new("minecraft:dirt"))]);
        let mut s = Session::new(Uuid::new_v4(), snapshot.clone());
        s.set_corner(Corner::A, p(1, 1, 1));
        s.commit(Corner::B, p(2, 2, 2)).unwrap();
        assert_eq!(s.into_saved_items(), snapshot);
    }
}
