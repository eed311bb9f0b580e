//! libdubeolsik crate root
//!
//! This crate provides the Dubeolsik (two-set) Korean keyboard layout, the
//! Colemak remap used on the Latin path, and a typing driver that runs the
//! shared `hangeul-core` engine against an in-memory text buffer.
//!
//! Public API exported here:
//! - `DubeolsikLayout` from `layout`
//! - `DubeolsikConfig` from `config`
//! - `create_ime_engine` and `Typist` from `engine`
//! - `parse_key_token` from `token`

pub mod colemak;
pub mod config;
pub mod engine;
pub mod layout;
pub mod token;

// Re-export core types used by callers.
pub use hangeul_core::{
    CompositionResult, Config, EditCommand, ImeEngine, InputSession, Key, KeyEvent, KeyOutcome,
    Modifiers, TextBuffer, TextSurface,
};

pub use config::DubeolsikConfig;
pub use engine::{create_ime_engine, DubeolsikEngine, Typist};
pub use layout::DubeolsikLayout;
pub use token::{parse_key_line, parse_key_token};
