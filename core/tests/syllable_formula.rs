//! Cross-check the syllable formula against Unicode canonical composition.

use hangeul_core::{compose_syllable, decompose_syllable, encode_syllable, Choseong, Jongseong, Jungseong};
use unicode_normalization::UnicodeNormalization;

const L_BASE: u32 = 0x1100;
const V_BASE: u32 = 0x1161;
const T_BASE: u32 = 0x11A7;

fn nfc_of_conjoining(cho: u32, jung: u32, jong: u32) -> String {
    let mut jamo = String::new();
    jamo.extend(char::from_u32(L_BASE + cho));
    jamo.extend(char::from_u32(V_BASE + jung));
    if jong > 0 {
        jamo.extend(char::from_u32(T_BASE + jong));
    }
    jamo.nfc().collect()
}

#[test]
fn test_formula_matches_nfc() {
    for cho in 0..19u32 {
        for jung in 0..21u32 {
            for jong in 0..28u32 {
                let code = encode_syllable(cho as i32, jung as i32, jong as i32);
                let expected: String = char::from_u32(code).into_iter().collect();
                assert_eq!(nfc_of_conjoining(cho, jung, jong), expected, "{cho} {jung} {jong}");
            }
        }
    }
}

#[test]
fn test_boundaries() {
    assert_eq!(encode_syllable(0, 0, 0), 0xAC00);
    assert_eq!(encode_syllable(18, 20, 27), 0xD7A3);
    assert_eq!(encode_syllable(19, 0, 0), 0);
    assert_eq!(encode_syllable(0, -1, 0), 0);
    assert_eq!(encode_syllable(0, 0, 28), 0);
}

#[test]
fn test_typed_compose_matches_nfd_round_trip() {
    for cho in Choseong::iter() {
        for jung in Jungseong::iter() {
            for jong in std::iter::once(None).chain(Jongseong::iter().map(Some)) {
                let ch = compose_syllable(cho, jung, jong);
                assert_eq!(decompose_syllable(ch), Some((cho, jung, jong)));
                let nfd: String = ch.to_string().nfd().collect();
                let expected = if jong.is_some() { 3 } else { 2 };
                assert_eq!(nfd.chars().count(), expected);
            }
        }
    }
}
