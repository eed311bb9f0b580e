//! Dubeolsik (두벌식) key classification.
//!
//! The standard KS X 5002 two-set layout: consonants on the left hand,
//! vowels on the right. Shift only changes Q/W/E/R/T (tense consonants) and
//! O/P (ㅒ ㅖ); every other shifted letter types its base jamo.
//!
//! ## Semicolon swap
//!
//! With the Latin layout remap active, the P position types `;` in Latin, so
//! the swap moves ㅔ/ㅖ from P to the semicolon key. P then produces no jamo
//! and falls through to the Latin remap.

use crate::colemak;
use hangeul_core::{Choseong, JamoInput, Jungseong, Key, KeyLayout};
use phf::phf_map;

const fn cons(cho: Choseong) -> JamoInput {
    JamoInput::Consonant(cho)
}

const fn vowel(jung: Jungseong) -> JamoInput {
    JamoInput::Vowel(jung)
}

/// Unshifted letter → jamo.
static BASE: phf::Map<char, JamoInput> = phf_map! {
    'q' => cons(Choseong::B),
    'w' => cons(Choseong::J),
    'e' => cons(Choseong::D),
    'r' => cons(Choseong::G),
    't' => cons(Choseong::S),
    'y' => vowel(Jungseong::YO),
    'u' => vowel(Jungseong::YEO),
    'i' => vowel(Jungseong::YA),
    'o' => vowel(Jungseong::AE),
    'p' => vowel(Jungseong::E),
    'a' => cons(Choseong::M),
    's' => cons(Choseong::N),
    'd' => cons(Choseong::NG),
    'f' => cons(Choseong::R),
    'g' => cons(Choseong::H),
    'h' => vowel(Jungseong::O),
    'j' => vowel(Jungseong::EO),
    'k' => vowel(Jungseong::A),
    'l' => vowel(Jungseong::I),
    'z' => cons(Choseong::K),
    'x' => cons(Choseong::T),
    'c' => cons(Choseong::CH),
    'v' => cons(Choseong::P),
    'b' => vowel(Jungseong::YU),
    'n' => vowel(Jungseong::U),
    'm' => vowel(Jungseong::EU),
};

/// Letters whose shifted form differs from the base.
static SHIFTED: phf::Map<char, JamoInput> = phf_map! {
    'q' => cons(Choseong::BB),
    'w' => cons(Choseong::JJ),
    'e' => cons(Choseong::DD),
    'r' => cons(Choseong::GG),
    't' => cons(Choseong::SS),
    'o' => vowel(Jungseong::YAE),
    'p' => vowel(Jungseong::YE),
};

/// Dubeolsik layout with the Colemak remap for the Latin path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DubeolsikLayout {
    semicolon_swap: bool,
}

impl DubeolsikLayout {
    pub fn new(semicolon_swap: bool) -> Self {
        Self { semicolon_swap }
    }

    pub fn semicolon_swap(&self) -> bool {
        self.semicolon_swap
    }

    /// Jamo for a letter by QWERTY position, ignoring the swap.
    pub fn jamo_for_letter(letter: char, shift: bool) -> Option<JamoInput> {
        let letter = letter.to_ascii_lowercase();
        if shift {
            if let Some(jamo) = SHIFTED.get(&letter) {
                return Some(*jamo);
            }
        }
        BASE.get(&letter).copied()
    }
}

impl KeyLayout for DubeolsikLayout {
    fn name(&self) -> &str {
        "dubeolsik"
    }

    fn classify(&self, key: Key, shift: bool, layout_remap: bool) -> Option<JamoInput> {
        let swapped = self.semicolon_swap && layout_remap;
        match key {
            Key::Letter('p') if swapped => None,
            Key::Semicolon if swapped => Some(if shift {
                vowel(Jungseong::YE)
            } else {
                vowel(Jungseong::E)
            }),
            Key::Letter(letter) => Self::jamo_for_letter(letter, shift),
            _ => None,
        }
    }

    fn is_letter_key(&self, key: Key, korean: bool, layout_remap: bool) -> bool {
        match key {
            Key::Letter(_) => true,
            Key::Semicolon => layout_remap && (!korean || self.semicolon_swap),
            _ => false,
        }
    }

    fn remap_char(&self, key: Key, shift: bool) -> Option<char> {
        colemak::remap_char(key, shift)
    }

    fn remap_key(&self, key: Key) -> Key {
        colemak::remap_key(key)
    }
}
