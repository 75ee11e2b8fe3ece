//! Selection transitions: applies a classified action to a session.
//!
//! The handler mutates the session and reports what happened as a
//! [`SelectionUpdate`]; it never formats or sends text. Recoverable
//! incomplete-commit outcomes are folded into the update so interactive use
//! never bubbles an error; geometry misuse still propagates as a typed
//! error.

use crate::cuboid::WorldPoint;
use crate::error::SelectionError;
use crate::events::SelectionUpdate;
use crate::session::{Corner, Session};

/// A classified marker action against a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionAction {
    /// Set the given corner to the targeted point.
    SetCorner(Corner),
    /// Set the given corner, then derive a cuboid from both corners.
    Commit(Corner),
}

/// Apply `action` at `point` to `session`.
///
/// An incomplete commit yields [`SelectionUpdate::SelectionIncomplete`]
/// (the corner update persists); cross-world corners propagate as an error.
pub fn apply(
    session: &mut Session,
    action: SelectionAction,
    point: WorldPoint,
) -> Result<SelectionUpdate, SelectionError> {
    match action {
        SelectionAction::SetCorner(which) => {
            session.set_corner(which, point.clone());
            Ok(SelectionUpdate::CornerSet { which, point })
        }
        SelectionAction::Commit(which) => match session.commit(which, point) {
            Ok(cuboid) => Ok(SelectionUpdate::CuboidCommitted { cuboid }),
            Err(SelectionError::IncompleteSelection) => Ok(SelectionUpdate::SelectionIncomplete),
            Err(err) => Err(err),
        },
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::ItemSnapshot;
    use crate::session::SelectionPhase;
    use uuid::Uuid;

    fn session() -> Session {
        Session::new(Uuid::new_v4(), ItemSnapshot::empty())
    }

    fn p(x: i64, y: i64, z: i64) -> WorldPoint {
        WorldPoint::new("world", x, y, z)
    }

    #[test]
    fn set_corner_reports_point() {
        let mut s = session();
        let update = apply(&mut s, SelectionAction::SetCorner(Corner::A), p(1, 2, 3)).unwrap();
        assert_eq!(
            update,
            SelectionUpdate::CornerSet {
                which: Corner::A,
                point: p(1, 2, 3),
            }
        );
    }

    #[test]
    fn commit_with_both_corners_reports_cuboid() {
        let mut s = session();
        apply(&mut s, SelectionAction::SetCorner(Corner::A), p(10, 64, 10)).unwrap();
        let update = apply(&mut s, SelectionAction::Commit(Corner::B), p(20, 70, 20)).unwrap();

        let SelectionUpdate::CuboidCommitted { cuboid } = update else {
            panic!("expected commit, got {update:?}");
        };
        assert_eq!(cuboid.min(), &p(10, 64, 10));
        assert_eq!(cuboid.max(), &p(20, 70, 20));
        assert_eq!(s.phase(), SelectionPhase::Committed);
    }

    #[test]
    fn incomplete_commit_is_an_update_not_an_error() {
        let mut s = session();
        let update = apply(&mut s, SelectionAction::Commit(Corner::A), p(1, 1, 1)).unwrap();
        assert_eq!(update, SelectionUpdate::SelectionIncomplete);
        // The corner update still landed.
        assert_eq!(s.corner(Corner::A), Some(&p(1, 1, 1)));
        assert!(s.committed().is_none());
    }

    #[test]
    fn cross_world_commit_propagates() {
        let mut s = session();
        apply(&mut s, SelectionAction::SetCorner(Corner::A), p(0, 0, 0)).unwrap();
        let err = apply(
            &mut s,
            SelectionAction::Commit(Corner::B),
            WorldPoint::new("nether", 1, 1, 1),
        )
        .unwrap_err();
        assert!(matches!(err, SelectionError::Geometry(_)));
    }
}
