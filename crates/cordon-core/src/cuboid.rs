//! Cuboid geometry: normalized axis-aligned volumes from two corner points.
//!
//! A [`WorldPoint`] is a block coordinate tied to a named world; points are
//! only comparable within the same world. A [`Cuboid`] is derived from two
//! corners and normalizes per-axis min/max at construction, so corner order
//! never matters and `min <= max` holds on every axis for the lifetime of
//! the value.

use serde::{Deserialize, Serialize};

use crate::error::GeometryError;

// =============================================================================
// WorldPoint
// =============================================================================

/// A block coordinate within a named world.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorldPoint {
    /// World identifier the coordinate belongs to.
    pub world: String,
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl WorldPoint {
    /// Create a point in the given world.
    #[must_use]
    pub fn new(world: impl Into<String>, x: i64, y: i64, z: i64) -> Self {
        Self {
            world: world.into(),
            x,
            y,
            z,
        }
    }

    /// Whether both points belong to the same world.
    #[must_use]
    pub fn same_world(&self, other: &Self) -> bool {
        self.world == other.world
    }
}

impl std::fmt::Display for WorldPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {}) in {}", self.x, self.y, self.z, self.world)
    }
}

// =============================================================================
// Cuboid
// =============================================================================

/// A normalized axis-aligned rectangular volume.
///
/// Constructed via [`Cuboid::from_corners`]; fields stay private so the
/// per-axis `min <= max` invariant cannot be broken after construction.
/// Two cuboids are equal iff their normalized bounds are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cuboid {
    min: WorldPoint,
    max: WorldPoint,
}

impl Cuboid {
    /// Derive a cuboid from two corner points in any order.
    ///
    /// Fails with [`GeometryError::CrossWorld`] when the corners belong to
    /// different worlds. Passing the same point twice yields a valid
    /// degenerate single-block volume.
    pub fn from_corners(a: &WorldPoint, b: &WorldPoint) -> Result<Self, GeometryError> {
        if !a.same_world(b) {
            return Err(GeometryError::CrossWorld {
                first: a.world.clone(),
                second: b.world.clone(),
            });
        }

        let min = WorldPoint::new(a.world.clone(), a.x.min(b.x), a.y.min(b.y), a.z.min(b.z));
        let max = WorldPoint::new(a.world.clone(), a.x.max(b.x), a.y.max(b.y), a.z.max(b.z));
        Ok(Self { min, max })
    }

    /// World this cuboid lives in.
    #[must_use]
    pub fn world(&self) -> &str {
        &self.min.world
    }

    /// Minimum corner (inclusive).
    #[must_use]
    pub fn min(&self) -> &WorldPoint {
        &self.min
    }

    /// Maximum corner (inclusive).
    #[must_use]
    pub fn max(&self) -> &WorldPoint {
        &self.max
    }

    /// Whether the point lies within the volume, bounds inclusive.
    ///
    /// A point from another world is simply outside (`false`), not an error.
    #[must_use]
    pub fn contains(&self, p: &WorldPoint) -> bool {
        p.same_world(&self.min)
            && (self.min.x..=self.max.x).contains(&p.x)
            && (self.min.y..=self.max.y).contains(&p.y)
            && (self.min.z..=self.max.z).contains(&p.z)
    }

    /// Number of blocks enclosed: the product of `(max - min + 1)` per axis.
    ///
    /// A degenerate single-point cuboid has volume 1. Saturates at
    /// `u64::MAX` for absurdly large extents.
    #[must_use]
    pub fn volume(&self) -> u64 {
        self.extent_x()
            .saturating_mul(self.extent_y())
            .saturating_mul(self.extent_z())
    }

    // max >= min per construction; wrapping_sub yields the unsigned gap even
    // for extents spanning the full i64 range.
    fn extent_x(&self) -> u64 {
        (self.max.x.wrapping_sub(self.min.x) as u64).saturating_add(1)
    }

    fn extent_y(&self) -> u64 {
        (self.max.y.wrapping_sub(self.min.y) as u64).saturating_add(1)
    }

    fn extent_z(&self) -> u64 {
        (self.max.z.wrapping_sub(self.min.z) as u64).saturating_add(1)
    }
}

impl std::fmt::Display for Cuboid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {}) -> ({}, {}, {}) in {}",
            self.min.x, self.min.y, self.min.z, self.max.x, self.max.y, self.max.z, self.min.world
        )
    }
}

// =============================================================================
// Tests
// =============================================================================
