//! Keyboard layout seam.
//!
//! A `KeyLayout` classifies physical keys into jamo and supplies the Latin
//! remap used while the alternate layout is active. Concrete layouts live in
//! language crates; the core only depends on this trait.

use crate::jamo::JamoInput;
use crate::keys::Key;

pub trait KeyLayout {
    /// Short identifier for logs.
    fn name(&self) -> &str;

    /// Jamo produced by `key` in Korean mode, or `None` for "not a jamo".
    fn classify(&self, key: Key, shift: bool, layout_remap: bool) -> Option<JamoInput>;

    /// Character typed by `key` on the Latin path while the layout remap is
    /// active. `None` for keys that type nothing.
    fn remap_char(&self, key: Key, shift: bool) -> Option<char>;

    /// Identity of `key` for shortcuts under the layout remap. Keys that are
    /// not remapped return themselves.
    fn remap_key(&self, key: Key) -> Key;

    /// Keys claimed and classified in the given mode. Letters always are;
    /// the semicolon only while the layout remap is active.
    fn is_letter_key(&self, key: Key, _korean: bool, layout_remap: bool) -> bool {
        matches!(key, Key::Letter(_)) || (layout_remap && key == Key::Semicolon)
    }
}
