//! Gesture scripts: JSON-lines input replayed through an [`EngineCore`].
//!
//! One event per line, tagged by `op`:
//!
//! ```text
//! {"op":"tool","tool":"rectangle"}
//! {"op":"down","x":10,"y":10}
//! {"op":"move","x":50,"y":50}
//! {"op":"up","x":50,"y":50}
//! {"op":"key","key":"z","modifiers":{"ctrl":true}}
//! ```
//!
//! Blank lines and lines starting with `#` are skipped. Scripts describe
//! input, not scenes; nothing here writes a scene out.

#[cfg(test)]
#[path = "script_test.rs"]
mod script_test;

use std::io::BufRead;

use serde::Deserialize;
use tracing::debug;

use crate::engine::{Action, EngineCore};
use crate::geom::Point;
use crate::input::{Key, Modifiers, Tool};

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("failed to read script: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: invalid event: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// One recorded input event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum ScriptEvent {
    Tool {
        tool: Tool,
    },
    Down {
        x: f64,
        y: f64,
    },
    Move {
        x: f64,
        y: f64,
    },
    Up {
        #[serde(default)]
        x: f64,
        #[serde(default)]
        y: f64,
    },
    /// Text typed into the editor opened by the last text-tool click.
    Text {
        text: String,
    },
    Key {
        key: String,
        #[serde(default)]
        modifiers: Modifiers,
    },
    Undo,
    Redo,
    Clear,
}

/// Parse every event in `reader`.
///
/// # Errors
///
/// Returns `Io` if reading fails and `Parse` (with a 1-based line number) for
/// the first malformed line.
pub fn parse(reader: impl BufRead) -> Result<Vec<ScriptEvent>, ScriptError> {
    let mut events = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let event = serde_json::from_str(trimmed).map_err(|source| ScriptError::Parse { line: idx + 1, source })?;
        events.push(event);
    }
    Ok(events)
}

/// Feed one event to `engine`.
pub fn apply(engine: &mut EngineCore, event: &ScriptEvent) -> Vec<Action> {
    match event {
        ScriptEvent::Tool { tool } => {
            engine.set_tool(*tool);
            Vec::new()
        }
        ScriptEvent::Down { x, y } => engine.on_pointer_down(Point::new(*x, *y)),
        ScriptEvent::Move { x, y } => engine.on_pointer_move(Point::new(*x, *y)),
        ScriptEvent::Up { x, y } => engine.on_pointer_up(Point::new(*x, *y)),
        ScriptEvent::Text { text } => engine.finish_text(text),
        ScriptEvent::Key { key, modifiers } => engine.on_key_down(&Key(key.clone()), *modifiers),
        ScriptEvent::Undo => changed(engine.undo()),
        ScriptEvent::Redo => changed(engine.redo()),
        ScriptEvent::Clear => {
            engine.clear();
            vec![Action::RenderNeeded]
        }
    }
}

/// Feed every event to `engine`, returning all actions in order.
pub fn replay(engine: &mut EngineCore, events: &[ScriptEvent]) -> Vec<Action> {
    let mut actions = Vec::new();
    for event in events {
        actions.extend(apply(engine, event));
    }
    debug!(events = events.len(), actions = actions.len(), "script replayed");
    actions
}

fn changed(did_change: bool) -> Vec<Action> {
    if did_change { vec![Action::RenderNeeded] } else { Vec::new() }
}
