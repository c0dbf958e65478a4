//! Script format and runner for the imu replay tool.
//!
//! A script is a JSON array of commands:
//!
//! ```json
//! [
//!   {"op": "create", "domain": "characters", "entity": {"id": 42, "firstName": "Jeffrey"}},
//!   {"op": "update", "entity": {"id": 42, "firstName": "The Dude"}},
//!   {"op": "delete", "id": 42}
//! ]
//! ```
//!
//! `domain` defaults to `characters`. Commands go through the action
//! constructors, so creates without an `id` get a generated one.

use anyhow::{Context, Result};
use clap::ValueEnum;
use imu_store::{Action, Actions, Entity, RootState, Store, create_legacy_store, create_store};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// One scripted command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Command {
    Create {
        #[serde(default = "default_domain")]
        domain: String,
        entity: Entity,
    },
    Update {
        #[serde(default = "default_domain")]
        domain: String,
        entity: Entity,
    },
    Delete {
        #[serde(default = "default_domain")]
        domain: String,
        id: Value,
    },
}

fn default_domain() -> String {
    "characters".to_owned()
}

impl Command {
    /// Builds the action for this command with the domain's constructors.
    pub fn to_action(&self, actions: &Actions) -> imu_store::Result<Action> {
        Ok(match self {
            Self::Create { domain, entity } => actions.domain(domain)?.create(entity.clone()),
            Self::Update { domain, entity } => actions.domain(domain)?.update(entity.clone()),
            Self::Delete { domain, id } => actions.domain(domain)?.delete(id.clone()),
        })
    }
}

/// Which reducer the store runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Variant {
    /// Normalized reducer: ids are listed once.
    #[default]
    Canonical,
    /// Two-slice reducer: re-creating an id lists it again.
    Slices,
}

impl Variant {
    #[must_use]
    pub fn store(self) -> Store<RootState> {
        match self {
            Self::Canonical => create_store(),
            Self::Slices => create_legacy_store(),
        }
    }
}

/// Parses a script from JSON text.
pub fn parse_script(text: &str) -> Result<Vec<Command>> {
    serde_json::from_str(text).context("script is not a JSON array of commands")
}

/// Reads and parses a script file.
pub fn load_script(path: &Path) -> Result<Vec<Command>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read script {}", path.display()))?;
    parse_script(&text).with_context(|| format!("failed to parse script {}", path.display()))
}

/// Runs every command through a fresh store and returns the final state.
pub fn run(commands: &[Command], variant: Variant) -> Result<Arc<RootState>> {
    let actions = Actions::new();
    let mut store = variant.store();
    store.subscribe(|state: &Arc<RootState>| {
        info!(characters = state.characters.len(), "state updated");
    });

    for (index, command) in commands.iter().enumerate() {
        let action = command
            .to_action(&actions)
            .with_context(|| format!("command {index} is invalid"))?;
        info!(index, kind = %action.kind, "dispatching");
        store.dispatch(&action);
    }
    Ok(store.state())
}

/// Renders the state as JSON.
pub fn render(state: &RootState, pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(state)?
    } else {
        serde_json::to_string(state)?
    };
    Ok(text)
}
