//! Jamo index types and the static Dubeolsik combination tables.
//!
//! Hangul syllables are built from three slots:
//!
//! - **Choseong** (initial consonant): 19 phonemes, `ㄱㄲㄴㄷㄸㄹㅁㅂㅃㅅㅆㅇㅈㅉㅊㅋㅌㅍㅎ`
//! - **Jungseong** (vowel): 21 phonemes, `ㅏㅐㅑㅒㅓㅔㅕㅖㅗㅘㅙㅚㅛㅜㅝㅞㅟㅠㅡㅢㅣ`
//! - **Jongseong** (final consonant): 27 slots plus "none",
//!   `ㄱㄲㄳㄴㄵㄶㄷㄹㄺㄻㄼㄽㄾㄿㅀㅁㅂㅄㅅㅆㅇㅈㅊㅋㅌㅍㅎ`
//!
//! Absence is expressed with `Option`, so a "no final consonant" syllable is
//! `Option::<Jongseong>::None` rather than index 0.
//!
//! The combine/decompose rules are stored as plain rows and turned into hash
//! lookups on first use.

use ahash::AHashMap;
use once_cell::sync::Lazy;

/// First precomposed syllable, `가`.
pub const SYLLABLE_BASE: u32 = 0xAC00;
/// Last precomposed syllable, `힣`.
pub const SYLLABLE_LAST: u32 = 0xD7A3;

pub const CHOSEONG_COUNT: u8 = 19;
pub const JUNGSEONG_COUNT: u8 = 21;
/// Final slots including the empty slot 0.
pub const JONGSEONG_COUNT: u8 = 28;

/// Initial consonant index (0..19).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Choseong(u8);

/// Vowel index (0..21). Seven indices are compound vowels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Jungseong(u8);

/// Final consonant index (1..28). The empty final is `None` at use sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Jongseong(u8);

/// A single classified key: either a consonant or a vowel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JamoInput {
    Consonant(Choseong),
    Vowel(Jungseong),
}

impl JamoInput {
    /// Build an input from the host's sentinel pair, where exactly one index
    /// is non-negative. Returns `None` for "not a jamo" or an out-of-range index.
    pub fn from_indices(cho: i32, jung: i32) -> Option<Self> {
        match (cho >= 0, jung >= 0) {
            (true, false) => Choseong::from_i32(cho).map(JamoInput::Consonant),
            (false, true) => Jungseong::from_i32(jung).map(JamoInput::Vowel),
            _ => None,
        }
    }

    /// Standalone display form of this jamo.
    pub fn compat(self) -> char {
        match self {
            JamoInput::Consonant(cho) => cho.compat(),
            JamoInput::Vowel(jung) => jung.compat(),
        }
    }
}

impl Choseong {
    pub const G: Self = Self(0);
    pub const GG: Self = Self(1);
    pub const N: Self = Self(2);
    pub const D: Self = Self(3);
    pub const DD: Self = Self(4);
    pub const R: Self = Self(5);
    pub const M: Self = Self(6);
    pub const B: Self = Self(7);
    pub const BB: Self = Self(8);
    pub const S: Self = Self(9);
    pub const SS: Self = Self(10);
    pub const NG: Self = Self(11);
    pub const J: Self = Self(12);
    pub const JJ: Self = Self(13);
    pub const CH: Self = Self(14);
    pub const K: Self = Self(15);
    pub const T: Self = Self(16);
    pub const P: Self = Self(17);
    pub const H: Self = Self(18);

    pub const fn new(index: u8) -> Option<Self> {
        if index < CHOSEONG_COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    pub fn from_i32(index: i32) -> Option<Self> {
        u8::try_from(index).ok().and_then(Self::new)
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    /// The final slot this consonant occupies when it closes a syllable.
    /// `ㄸ`, `ㅃ` and `ㅉ` cannot be finals.
    pub fn as_jongseong(self) -> Option<Jongseong> {
        match CHO_TO_JONG[self.0 as usize] {
            0 => None,
            jong => Some(Jongseong(jong)),
        }
    }

    pub fn compat(self) -> char {
        COMPAT_CHO[self.0 as usize]
    }

    pub fn iter() -> impl Iterator<Item = Self> {
        (0..CHOSEONG_COUNT).map(Self)
    }
}

impl Jungseong {
    pub const A: Self = Self(0);
    pub const AE: Self = Self(1);
    pub const YA: Self = Self(2);
    pub const YAE: Self = Self(3);
    pub const EO: Self = Self(4);
    pub const E: Self = Self(5);
    pub const YEO: Self = Self(6);
    pub const YE: Self = Self(7);
    pub const O: Self = Self(8);
    pub const WA: Self = Self(9);
    pub const WAE: Self = Self(10);
    pub const OE: Self = Self(11);
    pub const YO: Self = Self(12);
    pub const U: Self = Self(13);
    pub const WO: Self = Self(14);
    pub const WE: Self = Self(15);
    pub const WI: Self = Self(16);
    pub const YU: Self = Self(17);
    pub const EU: Self = Self(18);
    pub const UI: Self = Self(19);
    pub const I: Self = Self(20);

    pub const fn new(index: u8) -> Option<Self> {
        if index < JUNGSEONG_COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    pub fn from_i32(index: i32) -> Option<Self> {
        u8::try_from(index).ok().and_then(Self::new)
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    pub fn is_compound(self) -> bool {
        JUNG_SPLIT.contains_key(&self)
    }

    /// Combine with a following vowel, e.g. `ㅗ + ㅏ → ㅘ`.
    pub fn combine(self, next: Jungseong) -> Option<Jungseong> {
        JUNG_COMBINE.get(&(self, next)).copied()
    }

    /// Split a compound vowel into its two components.
    pub fn split(self) -> Option<(Jungseong, Jungseong)> {
        JUNG_SPLIT.get(&self).copied()
    }

    pub fn compat(self) -> char {
        COMPAT_JUNG[self.0 as usize]
    }

    pub fn iter() -> impl Iterator<Item = Self> {
        (0..JUNGSEONG_COUNT).map(Self)
    }
}

impl Jongseong {
    pub const G: Self = Self(1);
    pub const GG: Self = Self(2);
    pub const GS: Self = Self(3);
    pub const N: Self = Self(4);
    pub const NJ: Self = Self(5);
    pub const NH: Self = Self(6);
    pub const D: Self = Self(7);
    pub const L: Self = Self(8);
    pub const LG: Self = Self(9);
    pub const LM: Self = Self(10);
    pub const LB: Self = Self(11);
    pub const LS: Self = Self(12);
    pub const LT: Self = Self(13);
    pub const LP: Self = Self(14);
    pub const LH: Self = Self(15);
    pub const M: Self = Self(16);
    pub const B: Self = Self(17);
    pub const BS: Self = Self(18);
    pub const S: Self = Self(19);
    pub const SS: Self = Self(20);
    pub const NG: Self = Self(21);
    pub const J: Self = Self(22);
    pub const CH: Self = Self(23);
    pub const K: Self = Self(24);
    pub const T: Self = Self(25);
    pub const P: Self = Self(26);
    pub const H: Self = Self(27);

    /// Index 0 means "no final" and is rejected; use `Option<Jongseong>`.
    pub const fn new(index: u8) -> Option<Self> {
        if index >= 1 && index < JONGSEONG_COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    pub fn from_i32(index: i32) -> Option<Self> {
        u8::try_from(index).ok().and_then(Self::new)
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    pub fn is_compound(self) -> bool {
        JONG_SPLIT.contains_key(&self)
    }

    /// Extend this final with another consonant, e.g. `ㄹ + ㄱ → ㄺ`.
    pub fn combine(self, added: Choseong) -> Option<Jongseong> {
        JONG_COMBINE.get(&(self, added)).copied()
    }

    /// Split a compound final into the part that stays and the consonant
    /// that is freed, e.g. `ㄺ → (ㄹ, ㄱ)`.
    pub fn split(self) -> Option<(Jongseong, Choseong)> {
        JONG_SPLIT.get(&self).copied()
    }

    /// The initial consonant a simple final becomes when it migrates to the
    /// next syllable. Compound finals must be split first.
    pub fn as_choseong(self) -> Option<Choseong> {
        JONG_TO_CHO[self.0 as usize].map(Choseong)
    }

    pub fn compat(self) -> char {
        COMPAT_JONG[self.0 as usize - 1]
    }

    pub fn iter() -> impl Iterator<Item = Self> {
        (1..JONGSEONG_COUNT).map(Self)
    }
}

// Choseong -> jongseong slot, 0 where the consonant cannot close a syllable.
const CHO_TO_JONG: [u8; CHOSEONG_COUNT as usize] = [
    1, 2, 4, 7, 0, 8, 16, 17, 0, 19, 20, 21, 22, 0, 23, 24, 25, 26, 27,
];

// Jongseong slot -> choseong, None for the empty slot and compound finals.
const JONG_TO_CHO: [Option<u8>; JONGSEONG_COUNT as usize] = [
    None,
    Some(0),
    Some(1),
    None,
    Some(2),
    None,
    None,
    Some(3),
    Some(5),
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    Some(6),
    Some(7),
    None,
    Some(9),
    Some(10),
    Some(11),
    Some(12),
    Some(14),
    Some(15),
    Some(16),
    Some(17),
    Some(18),
];

/// (base final, added initial, combined final)
const JONG_RULES: [(u8, u8, u8); 11] = [
    (1, 9, 3),   // ㄱ + ㅅ -> ㄳ
    (4, 12, 5),  // ㄴ + ㅈ -> ㄵ
    (4, 18, 6),  // ㄴ + ㅎ -> ㄶ
    (8, 0, 9),   // ㄹ + ㄱ -> ㄺ
    (8, 6, 10),  // ㄹ + ㅁ -> ㄻ
    (8, 7, 11),  // ㄹ + ㅂ -> ㄼ
    (8, 9, 12),  // ㄹ + ㅅ -> ㄽ
    (8, 16, 13), // ㄹ + ㅌ -> ㄾ
    (8, 17, 14), // ㄹ + ㅍ -> ㄿ
    (8, 18, 15), // ㄹ + ㅎ -> ㅀ
    (17, 9, 18), // ㅂ + ㅅ -> ㅄ
];

/// (first vowel, second vowel, combined vowel)
const JUNG_RULES: [(u8, u8, u8); 7] = [
    (8, 0, 9),    // ㅗ + ㅏ -> ㅘ
    (8, 1, 10),   // ㅗ + ㅐ -> ㅙ
    (8, 20, 11),  // ㅗ + ㅣ -> ㅚ
    (13, 4, 14),  // ㅜ + ㅓ -> ㅝ
    (13, 5, 15),  // ㅜ + ㅔ -> ㅞ
    (13, 20, 16), // ㅜ + ㅣ -> ㅟ
    (18, 20, 19), // ㅡ + ㅣ -> ㅢ
];

static JONG_COMBINE: Lazy<AHashMap<(Jongseong, Choseong), Jongseong>> = Lazy::new(|| {
    JONG_RULES
        .iter()
        .map(|&(base, added, combined)| ((Jongseong(base), Choseong(added)), Jongseong(combined)))
        .collect()
});

static JONG_SPLIT: Lazy<AHashMap<Jongseong, (Jongseong, Choseong)>> = Lazy::new(|| {
    JONG_RULES
        .iter()
        .map(|&(base, added, combined)| (Jongseong(combined), (Jongseong(base), Choseong(added))))
        .collect()
});

static JUNG_COMBINE: Lazy<AHashMap<(Jungseong, Jungseong), Jungseong>> = Lazy::new(|| {
    JUNG_RULES
        .iter()
        .map(|&(first, second, combined)| ((Jungseong(first), Jungseong(second)), Jungseong(combined)))
        .collect()
});

static JUNG_SPLIT: Lazy<AHashMap<Jungseong, (Jungseong, Jungseong)>> = Lazy::new(|| {
    JUNG_RULES
        .iter()
        .map(|&(first, second, combined)| (Jungseong(combined), (Jungseong(first), Jungseong(second))))
        .collect()
});

// Compatibility jamo block (U+3131..U+3163) used for standalone display.
const COMPAT_CHO: [char; CHOSEONG_COUNT as usize] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ',
    'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

const COMPAT_JUNG: [char; JUNGSEONG_COUNT as usize] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ', 'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ',
    'ㅞ', 'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

const COMPAT_JONG: [char; JONGSEONG_COUNT as usize - 1] = [
    'ㄱ', 'ㄲ', 'ㄳ', 'ㄴ', 'ㄵ', 'ㄶ', 'ㄷ', 'ㄹ', 'ㄺ', 'ㄻ', 'ㄼ', 'ㄽ', 'ㄾ', 'ㄿ', 'ㅀ',
    'ㅁ', 'ㅂ', 'ㅄ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// Encode raw slot indices as a syllable codepoint.
///
/// Returns 0 ("no syllable") when any index is outside its documented range.
pub fn encode_syllable(cho: i32, jung: i32, jong: i32) -> u32 {
    let in_range = (0..CHOSEONG_COUNT as i32).contains(&cho)
        && (0..JUNGSEONG_COUNT as i32).contains(&jung)
        && (0..JONGSEONG_COUNT as i32).contains(&jong);
    if !in_range {
        return 0;
    }
    SYLLABLE_BASE + ((cho as u32 * JUNGSEONG_COUNT as u32 + jung as u32) * JONGSEONG_COUNT as u32)
        + jong as u32
}

/// Compose a precomposed syllable from typed indices.
pub fn compose_syllable(cho: Choseong, jung: Jungseong, jong: Option<Jongseong>) -> char {
    let code = encode_syllable(
        cho.0 as i32,
        jung.0 as i32,
        jong.map_or(0, |j| j.0 as i32),
    );
    char::from_u32(code).unwrap_or_default()
}

/// Split a precomposed syllable back into its slots.
pub fn decompose_syllable(ch: char) -> Option<(Choseong, Jungseong, Option<Jongseong>)> {
    let code = ch as u32;
    if !(SYLLABLE_BASE..=SYLLABLE_LAST).contains(&code) {
        return None;
    }
    let offset = code - SYLLABLE_BASE;
    let jong = (offset % JONGSEONG_COUNT as u32) as u8;
    let jung = ((offset / JONGSEONG_COUNT as u32) % JUNGSEONG_COUNT as u32) as u8;
    let cho = (offset / (JONGSEONG_COUNT as u32 * JUNGSEONG_COUNT as u32)) as u8;
    Some((Choseong(cho), Jungseong(jung), Jongseong::new(jong)))
}

/// True for the compatibility jamo letters ㄱ..ㅣ.
pub fn is_compat_jamo(ch: char) -> bool {
    ('\u{3131}'..='\u{3163}').contains(&ch)
}
