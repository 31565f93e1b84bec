use std::cell::RefCell;
use std::rc::Rc;

use super::*;

const KEY: &str = "theme";

#[test]
fn parse_accepts_only_known_values() {
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("Dark"), None);
    assert_eq!(Theme::parse("sepia"), None);
    assert_eq!(Theme::parse(""), None);
}

#[test]
fn toggled_flips_between_two_states() {
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
}

#[test]
fn ui_strings_follow_theme() {
    assert_eq!(Theme::Dark.icon_class(), "fas fa-moon");
    assert_eq!(Theme::Light.icon_class(), "fas fa-sun");
    assert_eq!(Theme::Dark.label(), "Mode sombre");
    assert_eq!(Theme::Light.label(), "Mode clair");
}

#[test]
fn resolve_prefers_stored_then_attribute_then_dark() {
    assert_eq!(resolve_initial(Some("light"), Some("dark")), Theme::Light);
    assert_eq!(resolve_initial(None, Some("light")), Theme::Light);
    assert_eq!(resolve_initial(None, None), Theme::Dark);
}

#[test]
fn resolve_skips_corrupted_values() {
    assert_eq!(resolve_initial(Some("purple"), Some("light")), Theme::Light);
    assert_eq!(resolve_initial(Some("purple"), Some("neon")), Theme::Dark);
}

#[test]
fn load_reads_persisted_value() {
    let store = ThemeStore::load(MemoryStore::with(KEY, "light"), KEY, Some("dark"));
    assert_eq!(store.get(), Theme::Light);
}

#[test]
fn load_does_not_write_storage() {
    let store = ThemeStore::load(MemoryStore::default(), KEY, Some("light"));
    assert_eq!(store.get(), Theme::Light);
    assert_eq!(store.persisted(), None);
}

#[test]
fn toggle_persists_new_value() {
    let store = ThemeStore::load(MemoryStore::default(), KEY, None);
    assert_eq!(store.toggle(), Theme::Light);
    assert_eq!(store.get(), Theme::Light);
    assert_eq!(store.persisted().as_deref(), Some("light"));
}

#[test]
fn double_toggle_restores_theme_and_persisted_value() {
    let store = ThemeStore::load(MemoryStore::with(KEY, "dark"), KEY, None);
    store.toggle();
    store.toggle();
    assert_eq!(store.get(), Theme::Dark);
    assert_eq!(store.persisted().as_deref(), Some("dark"));
}

#[test]
fn toggle_overwrites_corrupted_persisted_value() {
    let store = ThemeStore::load(MemoryStore::with(KEY, "purple"), KEY, None);
    assert_eq!(store.persisted().as_deref(), Some("purple"));
    store.toggle();
    assert_eq!(store.persisted().as_deref(), Some("light"));
}

#[test]
fn clones_share_state() {
    let store = ThemeStore::load(MemoryStore::default(), KEY, None);
    let reader = store.clone();
    store.toggle();
    assert_eq!(reader.get(), Theme::Light);
}

#[test]
fn shared_backing_store_sees_writes() {
    let backing = Rc::new(MemoryStore::default());
    let store = ThemeStore::load(Rc::clone(&backing), KEY, None);
    store.toggle();
    assert_eq!(backing.load(KEY).as_deref(), Some("light"));
}

#[test]
fn subscribers_receive_each_change() {
    let store = ThemeStore::load(MemoryStore::default(), KEY, None);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let seen_cb = Rc::clone(&seen);
    let _sub = store.subscribe(move |theme| seen_cb.borrow_mut().push(theme));

    store.toggle();
    store.toggle();
    assert_eq!(*seen.borrow(), vec![Theme::Light, Theme::Dark]);
}

#[test]
fn dropping_subscription_stops_notifications() {
    let store = ThemeStore::load(MemoryStore::default(), KEY, None);
    let seen = Rc::new(RefCell::new(0_u32));
    let seen_cb = Rc::clone(&seen);
    let sub = store.subscribe(move |_| *seen_cb.borrow_mut() += 1);

    store.toggle();
    drop(sub);
    store.toggle();
    assert_eq!(*seen.borrow(), 1);
}

#[test]
fn subscription_outliving_store_drops_cleanly() {
    let store = ThemeStore::load(MemoryStore::default(), KEY, None);
    let sub = store.subscribe(|_| {});
    drop(store);
    drop(sub);
}

#[test]
fn listener_may_subscribe_during_notification() {
    let store = ThemeStore::load(MemoryStore::default(), KEY, None);
    let nested = Rc::new(RefCell::new(Vec::new()));
    let store_cb = store.clone();
    let nested_cb = Rc::clone(&nested);
    let _sub = store.subscribe(move |_| {
        nested_cb.borrow_mut().push(store_cb.subscribe(|_| {}));
    });
    store.toggle();
    assert_eq!(nested.borrow().len(), 1);
}
