//! hangeul-core
//!
//! Layout-independent Hangul composition shared by keyboard-layout crates
//! (libdubeolsik).
//!
//! The pipeline is classify → compose → translate → apply: a `KeyLayout`
//! classifies keys into jamo, `HangulComposer` builds syllables, the
//! translator turns each result into `EditCommand`s, and a `TextSurface`
//! applies them.
//!
//! Public API:
//! - `HangulComposer` - Syllable state machine over typed jamo indices
//! - `CompositionResult` - Outcome of one composer operation
//! - `EditCommand` / `CompositionTracker` - Text-surface command translation
//! - `InputSession` - Composer plus surface tracking for one field
//! - `ImeEngine` - Key routing, mode flags and one session
//! - `TextBuffer` - In-memory text surface
//! - `Config` - Mode defaults and toggle bindings
use anyhow::Context;
use serde::{Deserialize, Serialize};

pub mod jamo;
pub use jamo::{
    compose_syllable, decompose_syllable, encode_syllable, Choseong, JamoInput, Jongseong, Jungseong,
};

pub mod result;
pub use result::{Committed, CompositionResult};

pub mod composer;
pub use composer::{CompositionContext, CompositionState, HangulComposer};

pub mod composition;
pub use composition::{translate, translate_insert, CompositionTracker, EditCommand};

pub mod surface;
pub use surface::{CommandLog, TextBuffer, TextSurface};

pub mod session;
pub use session::{InputSession, SessionStep};

pub mod keys;
pub use keys::{Key, KeyBinding, KeyEvent, Modifiers};

pub mod layout;
pub use layout::KeyLayout;

pub mod routing;
pub use routing::{route_key, KeyAction, RouteState};

pub mod ime_engine;
pub use ime_engine::{ImeEngine, KeyOutcome};

/// Generic configuration for the input method.
///
/// Layout-specific options (semicolon swap, ...) belong in the layout
/// crate's config, which flattens this one.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Start in Korean mode rather than Latin
    pub start_in_korean: bool,

    /// Start with the alternate Latin layout remap active
    pub layout_remap: bool,

    /// Caps Lock acts as Backspace (Shift+Caps Lock toggles caps)
    pub caps_lock_as_backspace: bool,

    /// Keys that switch between Korean and Latin
    pub language_toggle: Vec<KeyBinding>,

    /// Keys that switch the Latin layout remap on and off
    pub layout_toggle: Vec<KeyBinding>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_in_korean: true,
            layout_remap: false,
            caps_lock_as_backspace: false,
            language_toggle: vec![
                KeyBinding::new(Key::Hangul, Modifiers::NONE),
                KeyBinding::new(Key::RightAlt, Modifiers::NONE),
            ],
            layout_toggle: vec![KeyBinding::new(
                Key::Space,
                Modifiers {
                    ctrl: true,
                    shift: true,
                    ..Modifiers::NONE
                },
            )],
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        let content = self.to_toml_string()?;
        std::fs::write(path, content).with_context(|| format!("writing config {}", path.display()))
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Toggle the Caps-Lock-as-Backspace preference.
    pub fn toggle_caps_lock_as_backspace(&mut self) {
        self.caps_lock_as_backspace = !self.caps_lock_as_backspace;
    }
}
