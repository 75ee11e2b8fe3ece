//! Human-readable status lines for selection updates.
//!
//! One plain line per update, no color codes, no I/O; the host's chat or
//! console layer decides how to deliver and decorate them.

use crate::error::SelectionError;
use crate::events::SelectionUpdate;

/// Notice printed when a session starts.
pub const ENABLED_NOTICE: &str =
    "Selection mode enabled. Primary/secondary use of the marker sets a corner; use it precisely (crouch) to commit.";

/// Notice printed when a session ends.
pub const DISABLED_NOTICE: &str = "Selection mode disabled.";

/// Render an update as one status line.
#[must_use]
pub fn render_update(update: &SelectionUpdate) -> String {
    match update {
        SelectionUpdate::CornerSet { which, point } => format!(
            "Corner {which} set at x: {} y: {} z: {} in {}",
            point.x, point.y, point.z, point.world
        ),
        SelectionUpdate::SelectionIncomplete => {
            "Set both corners before committing the selection.".to_string()
        }
        SelectionUpdate::CuboidCommitted { cuboid } => format!(
            "Selection committed: {cuboid} ({} blocks)",
            cuboid.volume()
        ),
        SelectionUpdate::AlreadyActive => "Selection mode is already enabled.".to_string(),
        SelectionUpdate::NotActive => "Selection mode is not enabled.".to_string(),
    }
}

/// Render an error as one status line.
#[must_use]
pub fn render_error(err: &SelectionError) -> String {
    match err {
        SelectionError::Geometry(geo) => format!("Selection rejected: {geo}"),
        SelectionError::Session(session) => render_update(&SelectionUpdate::from(session)),
        SelectionError::IncompleteSelection => {
            render_update(&SelectionUpdate::SelectionIncomplete)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cuboid::{Cuboid, WorldPoint};
    use crate::error::{GeometryError, SessionError};
    use crate::session::Corner;
    use uuid::Uuid;

    #[test]
    fn corner_line_carries_coordinates() {
        let line = render_update(&SelectionUpdate::CornerSet {
            which: Corner::A,
            point: WorldPoint::new("world", 10, 64, 10),
        });
        assert_eq!(line, "Corner A set at x: 10 y: 64 z: 10 in world");
    }

    #[test]
    fn committed_line_carries_bounds_and_volume() {
        let cuboid = Cuboid::from_corners(
            &WorldPoint::new("world", 0, 0, 0),
            &WorldPoint::new("world", 1, 1, 1),
        )
        .unwrap();
        let line = render_update(&SelectionUpdate::CuboidCommitted { cuboid });
        assert!(line.contains("(0, 0, 0)"));
        assert!(line.contains("(1, 1, 1)"));
        assert!(line.contains("8 blocks"));
    }

    #[test]
    fn lifecycle_notices() {
        assert!(render_update(&SelectionUpdate::AlreadyActive).contains("already enabled"));
        assert!(render_update(&SelectionUpdate::NotActive).contains("not enabled"));
        assert!(render_update(&SelectionUpdate::SelectionIncomplete).contains("both corners"));
    }

    #[test]
    fn errors_render_as_notices() {
        let line = render_error(&SelectionError::Session(SessionError::NotActive(
            Uuid::new_v4(),
        )));
        assert!(line.contains("not enabled"));

        let line = render_error(&SelectionError::Geometry(GeometryError::CrossWorld {
            first: "world".to_string(),
            second: "nether".to_string(),
        }));
        assert!(line.contains("nether"));
    }
}
