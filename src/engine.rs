//! Interaction engine: turns pointer and keyboard events into history commits.
//!
//! `EngineCore` is the whole editor minus the host. It owns the [`History`],
//! the active [`Tool`] and the in-progress gesture, and answers each input
//! event with a list of [`Action`]s for the host (repaint, change cursor,
//! open the text editor). It never touches a drawing surface.
//!
//! A gesture makes exactly one new history entry, on pointer-down. Every
//! later update in the gesture amends that entry, and pointer-up
//! canonicalizes the edited element as the gesture's final amendment.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::element::{Element, ElementId, construct};
use crate::geom::Point;
use crate::history::{CommitMode, History};
use crate::hit::{self, CursorStyle, Position};
use crate::input::{InputState, Key, Modifiers, SelectedElement, Tool};
use crate::scene::{Scene, SceneError};
use crate::text::TextMeasure;
use crate::transform::{self, drag_offsets, dragged, resize_from};

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The scene changed and should be repainted.
    RenderNeeded,
    SetCursor(CursorStyle),
    /// Open a text editor over the new text element at `anchor`.
    /// Answer with [`EngineCore::finish_text`].
    EditTextRequested { id: ElementId, anchor: Point },
}

pub struct EngineCore {
    pub history: History,
    pub tool: Tool,
    pub input: InputState,
    text_measure: Box<dyn TextMeasure>,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::from_config(EngineConfig::default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_config(config: EngineConfig) -> Self {
        Self {
            history: History::new(),
            tool: config.default_tool,
            input: InputState::Idle,
            text_measure: Box::new(config.text_metrics),
        }
    }

    /// Replace the text measurement used for hit-testing text elements.
    #[must_use]
    pub fn with_text_measure(mut self, measure: impl TextMeasure + 'static) -> Self {
        self.text_measure = Box::new(measure);
        self
    }

    // --- Queries ---

    /// The scene currently shown.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        self.history.current()
    }

    /// The element grabbed by the current select gesture, if any.
    #[must_use]
    pub fn selection(&self) -> Option<&SelectedElement> {
        match &self.input {
            InputState::Moving(sel) | InputState::Resizing(sel) => Some(sel),
            _ => None,
        }
    }

    /// Which part of which element is under `pt`.
    #[must_use]
    pub fn hit(&self, pt: Point) -> Option<(ElementId, Position)> {
        hit::element_at(pt, self.history.current(), self.text_measure.as_ref()).map(|h| (h.element.id, h.position))
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // --- Tool / history ---

    pub fn set_tool(&mut self, tool: Tool) {
        debug!(tool = tool.name(), "tool changed");
        self.tool = tool;
    }

    pub fn undo(&mut self) -> bool {
        self.history.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.history.redo()
    }

    /// Wipe the canvas and all history.
    pub fn clear(&mut self) {
        self.history.clear();
        self.input = InputState::Idle;
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, pt: Point) -> Vec<Action> {
        if matches!(self.input, InputState::Writing { .. }) {
            return Vec::new();
        }
        match self.tool {
            Tool::Select => self.begin_select(pt),
            Tool::Text => self.begin_text(pt),
            tool if tool.is_drawing() => self.begin_drawing(pt, tool),
            _ => Vec::new(),
        }
    }

    /// Any tool but select keeps the crosshair, during a gesture as well as
    /// between gestures.
    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        match &self.input {
            InputState::Idle => return vec![Action::SetCursor(self.idle_cursor(pt))],
            InputState::Writing { .. } => return Vec::new(),
            _ => {}
        }
        let mut actions = self.update_gesture(pt);
        if self.tool != Tool::Select {
            actions.push(Action::SetCursor(CursorStyle::Crosshair));
        }
        actions
    }

    pub fn on_pointer_up(&mut self, _pt: Point) -> Vec<Action> {
        if matches!(self.input, InputState::Writing { .. }) {
            return Vec::new();
        }
        let gesture = std::mem::take(&mut self.input);
        let mut actions = match (&gesture, gesture.element_id()) {
            (InputState::Drawing { .. } | InputState::Resizing(_), Some(id)) => self.finalize(id),
            _ => Vec::new(),
        };
        debug!(id = ?gesture.element_id(), cursor = self.history.cursor(), "gesture finished");
        actions.push(Action::SetCursor(self.rest_cursor()));
        actions
    }

    /// Close the text editor opened by [`Action::EditTextRequested`].
    ///
    /// Non-empty `text` becomes the element's content. Empty text removes the
    /// element again.
    pub fn finish_text(&mut self, text: &str) -> Vec<Action> {
        let InputState::Writing { id } = self.input else {
            return Vec::new();
        };
        self.input = InputState::Idle;

        let scene = self.history.current();
        let next = if text.is_empty() {
            scene.without_last(id)
        } else {
            match scene.get(id) {
                Some(el) => scene.with_replaced(el.with_text(text)),
                None => Err(SceneError::OutOfRange { id, len: scene.len() }),
            }
        };
        match next {
            Ok(scene) => {
                self.history.commit(scene, CommitMode::Amend);
                vec![Action::RenderNeeded]
            }
            Err(e) => {
                warn!(error = %e, id, "text element missing from current scene; dropping edit");
                Vec::new()
            }
        }
    }

    /// Ctrl+Z undoes, Ctrl+Y redoes. Other keys are ignored.
    pub fn on_key_down(&mut self, key: &Key, modifiers: Modifiers) -> Vec<Action> {
        if !modifiers.ctrl {
            return Vec::new();
        }
        let changed = match key.0.as_str() {
            "z" | "Z" => self.history.undo(),
            "y" | "Y" => self.history.redo(),
            _ => false,
        };
        if changed { vec![Action::RenderNeeded] } else { Vec::new() }
    }

    // --- Gesture helpers ---

    fn update_gesture(&mut self, pt: Point) -> Vec<Action> {
        match &self.input {
            InputState::Idle | InputState::Writing { .. } => Vec::new(),
            InputState::Drawing { id, tool, origin } => {
                let (id, tool, origin) = (*id, *tool, *origin);
                self.update_drawing(id, tool, origin, pt)
            }
            InputState::Moving(sel) => {
                let next = dragged(&sel.element, pt, &sel.offsets);
                self.amend(next)
            }
            InputState::Resizing(sel) => {
                let Some(corners) = sel.element.corners() else {
                    return Vec::new();
                };
                let next = sel.element.with_corners(resize_from(pt, Some(sel.position), corners));
                self.amend(next)
            }
        }
    }

    fn begin_select(&mut self, pt: Point) -> Vec<Action> {
        let Some(hit) = hit::element_at(pt, self.history.current(), self.text_measure.as_ref()) else {
            return Vec::new();
        };
        let selected = SelectedElement {
            element: hit.element.clone(),
            position: hit.position,
            offsets: drag_offsets(hit.element, pt),
        };
        debug!(id = selected.element.id, position = selected.position.as_str(), "select gesture started");
        self.input = if selected.position.is_handle() {
            InputState::Resizing(selected)
        } else {
            InputState::Moving(selected)
        };

        // Open a fresh entry so the drag amends a copy, not the state being undone to.
        self.history.commit_with(CommitMode::NewEntry, Scene::clone);
        Vec::new()
    }

    fn begin_text(&mut self, pt: Point) -> Vec<Action> {
        let id = self.history.current().next_id();
        let Some(element) = construct(id, pt.x, pt.y, pt.x, pt.y, Tool::Text) else {
            return Vec::new();
        };
        if !self.append(element) {
            return Vec::new();
        }
        self.input = InputState::Writing { id };
        vec![Action::RenderNeeded, Action::EditTextRequested { id, anchor: pt }]
    }

    fn begin_drawing(&mut self, pt: Point, tool: Tool) -> Vec<Action> {
        let id = self.history.current().next_id();
        let Some(element) = construct(id, pt.x, pt.y, pt.x, pt.y, tool) else {
            return Vec::new();
        };
        if !self.append(element) {
            return Vec::new();
        }
        debug!(id, tool = tool.name(), "drawing started");
        self.input = InputState::Drawing { id, tool, origin: pt };
        vec![Action::RenderNeeded]
    }

    fn update_drawing(&mut self, id: ElementId, tool: Tool, origin: Point, pt: Point) -> Vec<Action> {
        let next = if tool == Tool::Pen {
            let Some(current) = self.history.current().get(id) else {
                warn!(id, "stroke missing from current scene; skipping update");
                return Vec::new();
            };
            current.with_point_appended(pt)
        } else {
            let Some(next) = construct(id, origin.x, origin.y, pt.x, pt.y, tool) else {
                return Vec::new();
            };
            next
        };
        self.amend(next)
    }

    /// Canonicalize the gesture's element as the gesture's last amendment.
    fn finalize(&mut self, id: ElementId) -> Vec<Action> {
        let Some(current) = self.history.current().get(id) else {
            warn!(id, "gesture element missing from current scene; skipping canonicalize");
            return Vec::new();
        };
        let next = transform::canonicalize(current);
        self.amend(next)
    }

    /// Add `element` at the tail as a new history entry.
    fn append(&mut self, element: Element) -> bool {
        match self.history.current().with_appended(element) {
            Ok(scene) => {
                self.history.commit(scene, CommitMode::NewEntry);
                true
            }
            Err(e) => {
                warn!(error = %e, "could not append element");
                false
            }
        }
    }

    /// Replace `element` in the current entry without adding a history step.
    fn amend(&mut self, element: Element) -> Vec<Action> {
        let id = element.id;
        match self.history.current().with_replaced(element) {
            Ok(scene) => {
                self.history.commit(scene, CommitMode::Amend);
                vec![Action::RenderNeeded]
            }
            Err(e) => {
                warn!(error = %e, id, "gesture element missing from current scene; skipping update");
                Vec::new()
            }
        }
    }

    fn idle_cursor(&self, pt: Point) -> CursorStyle {
        if self.tool == Tool::Select {
            hit::cursor_for(self.hit(pt).map(|(_, position)| position))
        } else {
            CursorStyle::Crosshair
        }
    }

    fn rest_cursor(&self) -> CursorStyle {
        if self.tool == Tool::Select { CursorStyle::Default } else { CursorStyle::Crosshair }
    }
}
