//! Script replay: drives the registry and dispatcher from a JSON-lines
//! file the way a host would from live world events.
//!
//! Script format, one directive per line (blank lines and `#` comments
//! ignored):
//!
//! ```text
//! {"op": "enable", "actor": "<uuid>"}
//! {"op": "interact", "event": {"actor": "<uuid>", "held_tag": "cornerMarker",
//!  "kind": "primary", "precise": false,
//!  "target": {"world": "world", "x": 10, "y": 64, "z": 10}}}
//! {"op": "disable", "actor": "<uuid>"}
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use tracing::debug;
use uuid::Uuid;

use cordon_core::config::Config;
use cordon_core::dispatch::Dispatcher;
use cordon_core::error::SelectionError;
use cordon_core::events::Interaction;
use cordon_core::items::{marker_kit, ItemSnapshot, ItemStack};
use cordon_core::messages;
use cordon_core::registry::SessionRegistry;

/// One line of a simulation script.
#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
enum Directive {
    /// Start a session; `held` stands in for the identity's inventory.
    Enable {
        actor: Uuid,
        #[serde(default)]
        held: Vec<Option<ItemStack>>,
    },
    /// End a session and restore the captured items.
    Disable { actor: Uuid },
    /// Feed one world interaction through the dispatcher.
    Interact { event: Interaction },
}

/// Replay `script` against a fresh registry, printing one status line per
/// observable outcome.
pub fn run(config: &Config, script: &Path) -> anyhow::Result<()> {
    let registry = SessionRegistry::with_shards(config.registry.shards);
    let dispatcher = Dispatcher::new(&registry);

    let file =
        File::open(script).with_context(|| format!("cannot open script {}", script.display()))?;

    for (lineno, line) in BufReader::new(file).lines().enumerate() {
        let line = line.with_context(|| format!("cannot read script line {}", lineno + 1))?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let directive: Directive = serde_json::from_str(line)
            .with_context(|| format!("bad directive on line {}", lineno + 1))?;
        step(config, &registry, &dispatcher, directive);
    }

    Ok(())
}

fn step(
    config: &Config,
    registry: &SessionRegistry,
    dispatcher: &Dispatcher<'_>,
    directive: Directive,
) {
    match directive {
        Directive::Enable { actor, held } => {
            match registry.enable(actor, ItemSnapshot::from_slots(held)) {
                Ok(()) => {
                    println!("{}", messages::ENABLED_NOTICE);
                    for (slot, item) in marker_kit(&config.markers).iter().enumerate() {
                        if let Some(item) = item {
                            let name = item.display_name.as_deref().unwrap_or(&item.id);
                            println!("Given: {name} (slot {slot})");
                        }
                    }
                }
                Err(err) => println!("{}", messages::render_error(&SelectionError::from(err))),
            }
        }
        Directive::Disable { actor } => match registry.disable(&actor) {
            Ok(snapshot) => {
                println!("{}", messages::DISABLED_NOTICE);
                println!("Restored {} held item(s).", snapshot.occupied());
            }
            Err(err) => println!("{}", messages::render_error(&SelectionError::from(err))),
        },
        Directive::Interact { event } => match dispatcher.dispatch(&event) {
            Ok(disposition) => {
                if let Some(update) = disposition.update() {
                    println!("{}", messages::render_update(update));
                } else if disposition.is_consumed() {
                    debug!(actor = %event.actor, "interaction consumed without update");
                }
            }
            Err(err) => println!("{}", messages::render_error(&err)),
        },
    }
}
