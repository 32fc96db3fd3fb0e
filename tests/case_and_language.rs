use vkbd_mini::{
    CaseIndicator, ControlKey, InputEvent, KeyCategory, Keyboard, KeyboardConfig, Language,
    Reaction,
};
mod support;
use support::mock_listener::MockHost;

fn letter_labels(kb: &Keyboard) -> Vec<String> {
    kb.layout()
        .keys()
        .filter(|k| k.category == KeyCategory::Letter)
        .map(|k| k.label().to_string())
        .collect()
}

#[test]
fn toggle_case_rewrites_labels_not_text() {
    let mut kb = Keyboard::new();
    kb.insert("abc");
    assert_eq!(kb.toggle_case(), Reaction::Case(vkbd_mini::CaseState::UPPER));

    assert!(letter_labels(&kb).iter().all(|l| *l == l.to_uppercase()));
    assert_eq!(kb.layout().key("en_q").unwrap().label(), "Q");
    assert_eq!(kb.text(), "abc");
    assert_eq!(
        kb.controller(Language::En).indicator(),
        CaseIndicator::Upper
    );

    kb.press("en_d").unwrap();
    assert_eq!(kb.text(), "abcD");
}

#[test]
fn toggle_case_twice_restores_labels() {
    let mut kb = Keyboard::new();
    kb.switch_language();
    let before = letter_labels(&kb);
    kb.toggle_case();
    kb.toggle_case();
    assert_eq!(letter_labels(&kb), before);
    assert!(!kb.case().upper);
}

#[test]
fn switch_preserves_text_cursor_and_case() {
    let (host, listener) = MockHost::shared();
    let mut kb = Keyboard::builder().listener(listener).build();
    kb.open("");
    for id in ["en_a", "en_b", "en_c"] {
        kb.press(id).unwrap();
    }
    assert_eq!((kb.text(), kb.cursor()), ("abc", 3));

    kb.toggle_case();
    assert_eq!(kb.text(), "abc");
    kb.backspace();
    assert_eq!((kb.text(), kb.cursor()), ("ab", 2));
    let reported = host.borrow().history.len();

    assert_eq!(kb.switch_language(), Some(Language::Ru));
    assert_eq!(kb.language(), Language::Ru);
    assert_eq!((kb.text(), kb.cursor()), ("ab", 2));
    assert!(kb.case().upper);
    assert_eq!(kb.layout().key("ru_a").unwrap().label(), "А");
    assert_eq!(host.borrow().history.len(), reported);
}

#[test]
fn round_trip_switch_restores_state() {
    let mut kb = Keyboard::new();
    kb.open("кот и пёс");
    kb.set_cursor(4);
    kb.toggle_case();
    let before = kb.snapshot();

    kb.switch_language();
    kb.switch_language();
    assert_eq!(kb.snapshot(), before);
}

#[test]
fn typing_continues_after_switch_at_carried_cursor() {
    let mut kb = Keyboard::new();
    kb.insert("hi");
    kb.set_cursor(1);
    kb.switch_language();
    kb.press("ru_zhe").unwrap();
    assert_eq!(kb.text(), "hжi");
    assert_eq!(kb.cursor(), 2);

    kb.switch_language();
    assert_eq!(kb.text(), "hжi");
    assert_eq!(kb.cursor(), 2);
}

#[test]
fn lowercase_is_synced_back() {
    let mut kb = Keyboard::new();
    kb.toggle_case();
    kb.switch_language();
    kb.toggle_case();
    kb.switch_language();
    assert_eq!(kb.language(), Language::En);
    assert!(!kb.case().upper);
    assert_eq!(kb.layout().key("en_q").unwrap().label(), "q");
}

#[test]
fn fixed_language_hides_switch() {
    let config = KeyboardConfig::default().restrict_to("ru");
    let mut kb = Keyboard::with_config(config);
    kb.open("");
    assert_eq!(kb.language(), Language::Ru);
    assert!(!kb.can_switch_language());
    assert_eq!(kb.switch_language(), None);
    assert_eq!(kb.control(ControlKey::Language), Reaction::Unchanged);
    assert_eq!(
        kb.handle_event(InputEvent::SwitchLanguage).unwrap(),
        Reaction::Unchanged
    );
    assert_eq!(kb.language(), Language::Ru);
}

#[test]
fn language_key_dispatches_switch() {
    let mut kb = Keyboard::new();
    assert_eq!(
        kb.handle_event(InputEvent::key("language")).unwrap(),
        Reaction::Language(Language::Ru)
    );
    assert_eq!(
        kb.handle_event(InputEvent::key("upper")).unwrap(),
        Reaction::Case(vkbd_mini::CaseState::UPPER)
    );
}
