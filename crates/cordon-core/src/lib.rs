//! cordon-core: Core library for cordon
//!
//! An in-world volumetric region-selection tool for multiplayer hosts: a
//! user is handed tagged marker items, taps two points in the world, and
//! the tool derives a normalized axis-aligned cuboid from them.
//!
//! # Architecture
//!
//! ```text
//! host interaction event → Dispatcher (filter + classify)
//!                               ↓
//!                    SessionRegistry (per-identity lock)
//!                               ↓
//!                  selection transitions → SelectionUpdate
//!                               ↓
//!              messaging / inventory collaborators (host side)
//! ```
//!
//! # Modules
//!
//! - `cuboid`: world points and normalized cuboid geometry
//! - `session`: per-identity selection state and phase machine
//! - `registry`: lock-striped session store (one session per identity)
//! - `events`: inbound interaction shape and outbound selection updates
//! - `dispatch`: marker filtering and activation classification
//! - `selection`: state transitions applied to a session
//! - `items`: tagged marker items and held-inventory snapshots
//! - `messages`: plain status lines for the messaging collaborator
//! - `config`: cordon.toml loading and validation
//! - `logging`: tracing setup
//! - `error`: error taxonomy
//!
//! # Safety
//!
//! This crate forbids unsafe code.

#![forbid(unsafe_code)]

pub mod config;
pub mod cuboid;
pub mod dispatch;
pub mod error;
pub mod events;
pub mod items;
pub mod logging;
pub mod messages;
pub mod registry;
pub mod selection;
pub mod session;

pub use cuboid::{Cuboid, WorldPoint};
pub use dispatch::{Dispatcher, Disposition};
pub use error::{GeometryError, Result, SelectionError, SessionError};
pub use events::{Interaction, InteractionKind, MarkerKind, SelectionUpdate};
pub use items::{ItemSnapshot, ItemStack};
pub use registry::SessionRegistry;
pub use session::{Corner, SelectionPhase, Session};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
