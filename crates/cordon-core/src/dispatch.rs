//! Input dispatch: filters raw interactions and routes them to the
//! selection handler.
//!
//! The host calls [`Dispatcher::dispatch`] synchronously with every world
//! interaction. Interactions are ignored (passed through) unless the actor
//! holds a recognized marker AND the interaction targeted a solid surface.
//! Every recognized interaction is consumed, and the host must cancel the
//! default world effect (block break/place) whenever it gets
//! [`Disposition::Consumed`] back; this is a hard requirement, not
//! best-effort.
//!
//! # Classification
//!
//! | Activation | Precise | Action                      |
//! |------------|---------|-----------------------------|
//! | primary    | no      | set corner A                |
//! | secondary  | no      | set corner B                |
//! | primary    | yes     | set corner A, then commit   |
//! | secondary  | yes     | set corner B, then commit   |
//!
//! The commit marker is reserved for a future explicit confirm action and
//! currently performs no state change; it is still consumed.

use tracing::{debug, trace};

use crate::error::SelectionError;
use crate::events::{Interaction, InteractionKind, MarkerKind, SelectionUpdate};
use crate::registry::SessionRegistry;
use crate::selection::{self, SelectionAction};
use crate::session::Corner;

// =============================================================================
// Disposition
// =============================================================================

/// What the dispatcher decided about an interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disposition {
    /// Not ours; the default world effect proceeds.
    Pass,
    /// Recognized marker interaction; the host must cancel the default
    /// world effect. `update` is `None` for no-ops (stray interactions
    /// without a session, inert commit marker).
    Consumed { update: Option<SelectionUpdate> },
}

impl Disposition {
    /// Whether the host must suppress the default world effect.
    #[must_use]
    pub const fn is_consumed(&self) -> bool {
        matches!(self, Self::Consumed { .. })
    }

    /// The selection update to report, if any.
    #[must_use]
    pub fn update(&self) -> Option<&SelectionUpdate> {
        match self {
            Self::Pass => None,
            Self::Consumed { update } => update.as_ref(),
        }
    }
}

// =============================================================================
// Classification
// =============================================================================

/// Map an activation and the precise modifier to a selection action.
#[must_use]
pub fn classify(kind: InteractionKind, precise: bool) -> SelectionAction {
    match (kind, precise) {
        (InteractionKind::Primary, false) => SelectionAction::SetCorner(Corner::A),
        (InteractionKind::Secondary, false) => SelectionAction::SetCorner(Corner::B),
        (InteractionKind::Primary, true) => SelectionAction::Commit(Corner::A),
        (InteractionKind::Secondary, true) => SelectionAction::Commit(Corner::B),
    }
}

// =============================================================================
// Dispatcher
// =============================================================================

/// Routes recognized marker interactions into the registry's sessions.
#[derive(Debug)]
pub struct Dispatcher<'a> {
    registry: &'a SessionRegistry,
}

impl<'a> Dispatcher<'a> {
    /// Create a dispatcher over the given registry.
    #[must_use]
    pub fn new(registry: &'a SessionRegistry) -> Self {
        Self { registry }
    }

    /// Process one world interaction.
    ///
    /// Returns [`Disposition::Pass`] for unrecognized objects or
    /// interactions without a target point. Recognized interactions are
    /// always consumed; stray ones (no active session for the actor) are a
    /// silent no-op since residual markers commonly outlive a session.
    pub fn dispatch(&self, event: &Interaction) -> Result<Disposition, SelectionError> {
        let Some(marker) = event.marker() else {
            return Ok(Disposition::Pass);
        };
        let Some(target) = &event.target else {
            return Ok(Disposition::Pass);
        };

        match marker {
            MarkerKind::Commit => {
                // Inert placeholder until a confirmation flow exists.
                trace!(actor = %event.actor, "commit marker used; no action");
                Ok(Disposition::Consumed { update: None })
            }
            MarkerKind::Corner => {
                let action = classify(event.kind, event.precise);
                match self
                    .registry
                    .update(&event.actor, |s| selection::apply(s, action, target.clone()))
                {
                    None => {
                        debug!(actor = %event.actor, "stray marker interaction without session");
                        Ok(Disposition::Consumed { update: None })
                    }
                    Some(Ok(update)) => Ok(Disposition::Consumed {
                        update: Some(update),
                    }),
                    Some(Err(err)) => Err(err),
                }
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
