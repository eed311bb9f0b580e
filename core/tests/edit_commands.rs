//! Edit-command translation over whole typing sequences.
//!
//! Each sequence is run through an `InputSession`, checked for the
//! one-open-composition invariant, and applied to a `TextBuffer`.

use hangeul_core::{
    Choseong as C, EditCommand, InputSession, JamoInput, Jungseong as V, TextBuffer, TextSurface,
};

#[derive(Clone, Copy)]
enum Op {
    J(JamoInput),
    Back,
    Flush,
    Cancel,
    Latin(char),
}

fn c(cho: C) -> Op {
    Op::J(JamoInput::Consonant(cho))
}

fn v(jung: V) -> Op {
    Op::J(JamoInput::Vowel(jung))
}

/// Run ops, asserting the surface invariants after every command.
fn run(ops: &[Op]) -> (TextBuffer, Vec<EditCommand>) {
    let mut session = InputSession::new();
    let mut buffer = TextBuffer::new();
    let mut all = Vec::new();
    let mut begins = 0usize;
    let mut ends = 0usize;
    let mut open = false;

    for &op in ops {
        let step = match op {
            Op::J(input) => session.process(input),
            Op::Back => session.backspace(),
            Op::Flush => session.flush(),
            Op::Cancel => session.cancel(),
            Op::Latin(ch) => session.insert(ch),
        };
        for command in &step.commands {
            match command {
                EditCommand::BeginComposition => {
                    assert!(!open, "begin while open");
                    open = true;
                    begins += 1;
                }
                EditCommand::EndComposition => {
                    assert!(open, "end while closed");
                    open = false;
                    ends += 1;
                }
                EditCommand::SetComposingText(_) | EditCommand::MoveCursorToCompositionEnd => {
                    assert!(open, "{command:?} while closed");
                }
                EditCommand::InsertCommittedText(_) => assert!(!open, "insert while open"),
            }
            assert!(begins <= ends + 1);
            buffer.apply(command);
        }
        assert_eq!(open, session.composition_open());
        all.extend(step.commands);
    }
    (buffer, all)
}

#[test]
fn test_hangeul_word() {
    // ㅎㅏㄴㄱㅡㄹ
    let (buffer, _) = run(&[
        c(C::H),
        v(V::A),
        c(C::N),
        c(C::G),
        v(V::EU),
        c(C::R),
        Op::Flush,
    ]);
    assert_eq!(buffer.text(), "한글");
    assert!(!buffer.is_composing());
}

#[test]
fn test_dak() {
    let (buffer, _) = run(&[c(C::D), v(V::A), c(C::R), c(C::G), Op::Flush]);
    assert_eq!(buffer.text(), "닭");
}

#[test]
fn test_anh_a() {
    // ㅇㅏㄴㅎㅇㅏ
    let (buffer, _) = run(&[
        c(C::NG),
        v(V::A),
        c(C::N),
        c(C::H),
        c(C::NG),
        v(V::A),
        Op::Flush,
    ]);
    assert_eq!(buffer.text(), "않아");
}

#[test]
fn test_anh_then_vowel_moves_h() {
    let (buffer, _) = run(&[c(C::NG), v(V::A), c(C::N), c(C::H), v(V::A), Op::Flush]);
    assert_eq!(buffer.text(), "안하");
}

#[test]
fn test_bwelg() {
    let (buffer, _) = run(&[c(C::B), v(V::U), v(V::E), c(C::R), c(C::G), Op::Flush]);
    assert_eq!(buffer.text(), "뷁");
}

#[test]
fn test_composition_visible_while_typing() {
    let mut session = InputSession::new();
    let mut buffer = TextBuffer::new();
    for input in [
        JamoInput::Consonant(C::G),
        JamoInput::Vowel(V::A),
        JamoInput::Consonant(C::N),
    ] {
        buffer.apply_all(&session.process(input).commands);
    }
    assert_eq!(buffer.composing_text(), Some("간"));
    buffer.apply_all(&session.process(JamoInput::Vowel(V::A)).commands);
    assert_eq!(buffer.text(), "가나");
    assert_eq!(buffer.composing_text(), Some("나"));
}

#[test]
fn test_backspace_to_nothing_leaves_text_untouched() {
    let (buffer, commands) = run(&[
        Op::Latin('x'),
        c(C::G),
        v(V::A),
        c(C::N),
        Op::Back,
        Op::Back,
        Op::Back,
        Op::Back,
        Op::Back,
    ]);
    assert_eq!(buffer.text(), "x");
    assert_eq!(
        &commands[commands.len() - 2..],
        &[EditCommand::SetComposingText(String::new()), EditCommand::EndComposition]
    );
}

#[test]
fn test_standalone_vowels_and_latin_mix() {
    let (buffer, _) = run(&[
        v(V::A),
        Op::Latin(' '),
        c(C::G),
        Op::Latin('1'),
        v(V::EO),
        v(V::I),
    ]);
    assert_eq!(buffer.text(), "ㅏ ㄱ1ㅓㅣ");
}

#[test]
fn test_cancel_discards_composition() {
    let (buffer, _) = run(&[c(C::S), v(V::A), c(C::R), Op::Cancel, c(C::G), v(V::O), Op::Flush]);
    assert_eq!(buffer.text(), "고");
}

#[test]
fn test_long_mixed_sequence_keeps_invariant() {
    let mut ops = Vec::new();
    let pattern = [
        c(C::G),
        c(C::S),
        v(V::A),
        c(C::R),
        c(C::B),
        c(C::S),
        v(V::O),
        v(V::AE),
        Op::Back,
        v(V::A),
        c(C::DD),
        v(V::I),
        Op::Back,
        Op::Back,
        Op::Back,
        v(V::YU),
        Op::Latin('.'),
        c(C::JJ),
        c(C::JJ),
        Op::Flush,
        Op::Flush,
    ];
    for _ in 0..25 {
        ops.extend_from_slice(&pattern);
    }
    let (buffer, commands) = run(&ops);
    assert!(!buffer.is_composing());
    let begins = commands
        .iter()
        .filter(|cmd| **cmd == EditCommand::BeginComposition)
        .count();
    let ends = commands
        .iter()
        .filter(|cmd| **cmd == EditCommand::EndComposition)
        .count();
    assert_eq!(begins, ends);
}
