//! End-to-end typing through the Dubeolsik engine and a text buffer.

use libdubeolsik::{
    create_ime_engine, parse_key_line, DubeolsikConfig, EditCommand, Key, KeyEvent, Modifiers, Typist,
};

fn typist() -> Typist {
    Typist::new(&DubeolsikConfig::default())
}

fn typed(keys: &str) -> String {
    let mut typist = typist();
    typist.type_str(keys);
    typist.finish();
    typist.text().to_string()
}

fn press_line(typist: &mut Typist, line: &str) -> Vec<EditCommand> {
    typist.press_all(parse_key_line(line).unwrap())
}

#[test]
fn test_hangeul() {
    assert_eq!(typed("gksrmf"), "한글");
}

#[test]
fn test_dak() {
    assert_eq!(typed("ekfr"), "닭");
}

#[test]
fn test_anh_a() {
    assert_eq!(typed("dksgdk"), "않아");
}

#[test]
fn test_bwelg() {
    assert_eq!(typed("qnpfr"), "뷁");
}

#[test]
fn test_sentence_with_spaces() {
    assert_eq!(typed("dkssudgktpdy tptkd"), "안녕하세요 세상");
}

#[test]
fn test_shifted_tense_consonants() {
    assert_eq!(typed("Rkt Ekf"), "깟 딸");
    assert_eq!(typed("dO"), "얘");
}

#[test]
fn test_composition_shown_until_finished() {
    let mut typist = typist();
    typist.type_str("gks");
    assert_eq!(typist.buffer().composing_text(), Some("한"));
    typist.type_str("r");
    assert_eq!(typist.text(), "한ㄱ");
    assert_eq!(typist.buffer().composing_text(), Some("ㄱ"));
}

#[test]
fn test_backspace_walks_back_jamo_then_text() {
    let mut typist = typist();
    typist.type_str("gks rkqt");
    assert_eq!(typist.buffer().composing_text(), Some("값"));
    press_line(&mut typist, "bs");
    assert_eq!(typist.buffer().composing_text(), Some("갑"));
    press_line(&mut typist, "bs bs bs");
    assert_eq!(typist.text(), "한 ");
    assert!(!typist.buffer().is_composing());
    press_line(&mut typist, "bs");
    assert_eq!(typist.text(), "한");
}

#[test]
fn test_escape_commits_and_is_swallowed() {
    let mut typist = typist();
    press_line(&mut typist, "r k esc");
    assert_eq!(typist.text(), "가");
    assert!(!typist.buffer().is_composing());
}

#[test]
fn test_navigation_commits_then_moves() {
    let mut typist = typist();
    press_line(&mut typist, "r k left");
    assert_eq!(typist.text(), "가");
    assert_eq!(typist.buffer().caret(), 0);
    press_line(&mut typist, "s k");
    typist.finish();
    assert_eq!(typist.text(), "나가");
}

#[test]
fn test_shift_key_does_not_end_composition() {
    let mut typist = typist();
    let commands = press_line(&mut typist, "r k shift");
    assert_eq!(commands.last(), Some(&EditCommand::SetComposingText("가".into())));
    assert_eq!(typist.buffer().composing_text(), Some("가"));
}

#[test]
fn test_language_toggle_commits_and_switches() {
    let mut typist = typist();
    press_line(&mut typist, "r k toggle r k");
    assert_eq!(typist.text(), "가rk");
    assert!(!typist.engine().is_korean());
    press_line(&mut typist, "ralt r k");
    typist.finish();
    assert_eq!(typist.text(), "가rk가");
}

#[test]
fn test_colemak_latin_path() {
    let mut config = DubeolsikConfig::default();
    config.base_mut().start_in_korean = false;
    config.base_mut().layout_remap = true;
    let mut typist = Typist::new(&config);
    typist.type_str("Hello;");
    assert_eq!(typist.text(), "Hfiiyo");
    press_line(&mut typist, "space a s d f");
    assert_eq!(typist.text(), "Hfiiyo arst");
}

#[test]
fn test_layout_toggle() {
    let mut typist = typist();
    press_line(&mut typist, "toggle layout e");
    assert!(typist.engine().is_layout_remap());
    assert_eq!(typist.text(), "f");
    press_line(&mut typist, "layout e");
    assert_eq!(typist.text(), "fe");
}

#[test]
fn test_semicolon_swap_with_colemak() {
    let mut config = DubeolsikConfig::default();
    config.semicolon_swap = true;
    config.base_mut().layout_remap = true;
    let mut typist = Typist::new(&config);
    typist.type_str("r;");
    assert_eq!(typist.buffer().composing_text(), Some("게"));
    press_line(&mut typist, "p");
    assert_eq!(typist.text(), "게;");
    press_line(&mut typist, "r :");
    typist.finish();
    assert_eq!(typist.text(), "게;계");
}

#[test]
fn test_without_swap_p_is_jamo_under_colemak() {
    let mut config = DubeolsikConfig::default();
    config.base_mut().layout_remap = true;
    let mut typist = Typist::new(&config);
    typist.type_str("rp;");
    assert_eq!(typist.text(), "게;");
    assert!(!typist.buffer().is_composing());
}

#[test]
fn test_without_swap_semicolon_passes_through_in_korean() {
    let mut config = DubeolsikConfig::default();
    config.base_mut().layout_remap = true;
    let mut typist = Typist::new(&config);
    typist.type_str("rk;");
    assert_eq!(typist.text(), "가;");
    typist.type_str(":");
    assert_eq!(typist.text(), "가;:");
}

#[test]
fn test_shortcut_remapped_under_colemak() {
    let mut config = DubeolsikConfig::default();
    config.base_mut().layout_remap = true;
    let mut engine = create_ime_engine(&config);
    let ctrl_e = KeyEvent::with_modifiers(Key::Letter('e'), Modifiers::CTRL);
    let outcome = engine.process_key(ctrl_e);
    assert!(outcome.eaten);
    let ctrl_f = KeyEvent::with_modifiers(Key::Letter('f'), Modifiers::CTRL);
    assert_eq!(outcome.reinject, Some(ctrl_f));
    assert!(!engine.process_key(ctrl_f).eaten);
}

#[test]
fn test_shortcut_untouched_without_remap() {
    let mut engine = create_ime_engine(&DubeolsikConfig::default());
    let outcome = engine.process_key(KeyEvent::with_modifiers(Key::Letter('c'), Modifiers::CTRL));
    assert!(!outcome.eaten);
    assert_eq!(outcome.reinject, None);
}

#[test]
fn test_caps_lock_as_backspace() {
    let mut config = DubeolsikConfig::default();
    config.base_mut().caps_lock_as_backspace = true;
    let mut typist = Typist::new(&config);
    press_line(&mut typist, "r k s caps");
    assert_eq!(typist.buffer().composing_text(), Some("가"));
    press_line(&mut typist, "esc caps");
    assert_eq!(typist.text(), "");
}

#[test]
fn test_caps_state_inverts_latin_case() {
    let mut config = DubeolsikConfig::default();
    config.base_mut().caps_lock_as_backspace = true;
    config.base_mut().start_in_korean = false;
    config.base_mut().layout_remap = true;
    let mut typist = Typist::new(&config);
    press_line(&mut typist, "shift+caps a S");
    assert_eq!(typist.text(), "Ar");
    assert!(typist.engine().is_caps_lock());
    typist.type_str(";:");
    assert_eq!(typist.text(), "ArOo");
}

#[test]
fn test_focus_loss_keeps_text() {
    let mut typist = typist();
    typist.type_str("rk");
    typist.focus_lost();
    assert!(!typist.engine().session().is_composing());
    assert!(!typist.buffer().is_composing());
    typist.type_str("s");
    assert_eq!(typist.text(), "가ㄴ");
}

#[test]
fn test_config_file_drives_engine() {
    let path = std::env::temp_dir().join(format!("dubeolsik-typing-{}.toml", std::process::id()));
    std::fs::write(
        &path,
        "start_in_korean = false\n\n[[language_toggle]]\nkey = \"tab\"\nctrl = true\n",
    )
    .unwrap();
    let config = DubeolsikConfig::load_toml(&path).unwrap();
    std::fs::remove_file(&path).ok();

    let mut typist = Typist::new(&config);
    press_line(&mut typist, "hangul r k");
    assert_eq!(typist.text(), "rk");
    press_line(&mut typist, "ctrl+tab r k");
    typist.finish();
    assert_eq!(typist.text(), "rk가");
}
