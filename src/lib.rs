//! Scene and geometry engine for a small 2-D sketching editor.
//!
//! The crate owns everything about the editor that is not drawing pixels or
//! wiring DOM events: the element model, hit-testing, resize and move
//! transforms, a snapshot-based undo history, and the gesture state machine
//! that ties them together. A host feeds pointer and keyboard events into
//! [`engine::EngineCore`] and renders whatever [`engine::EngineCore::scene`]
//! returns.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`element`] | Shape kinds, their geometry, and element construction |
//! | [`scene`] | Immutable element sequence held by each history entry |
//! | [`hit`] | Hit-testing elements and handles, cursor hints |
//! | [`transform`] | Canonical corner order, handle resize, drag replay |
//! | [`history`] | Linear undo/redo over scene snapshots |
//! | [`input`] | Tools, modifiers, and the gesture state |
//! | [`engine`] | Event handlers producing history commits and host actions |
//! | [`text`] | Text extent measurement used by hit-testing |
//! | [`config`] | Environment-driven engine configuration |
//! | [`script`] | JSON-lines gesture scripts for replay |
//! | [`geom`] | Points and corner pairs |
//! | [`consts`] | Hit tolerances and text metrics |

pub mod config;
pub mod consts;
pub mod element;
pub mod engine;
pub mod geom;
pub mod history;
pub mod hit;
pub mod input;
pub mod scene;
pub mod script;
pub mod text;
pub mod transform;
