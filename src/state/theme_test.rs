use super::*;
use crate::dom::fake::FakePage;
use crate::util::storage::MemoryStore;

const KEY: &str = "theme";

// =============================================================
// Theme parsing
// =============================================================

#[test]
fn parse_only_dark_selects_dark() {
    assert_eq!(Theme::parse(Some("dark")), Theme::Dark);
    assert_eq!(Theme::parse(Some("light")), Theme::Light);
    assert_eq!(Theme::parse(Some("Dark")), Theme::Light);
    assert_eq!(Theme::parse(Some("")), Theme::Light);
    assert_eq!(Theme::parse(None), Theme::Light);
}

#[test]
fn toggled_is_an_involution() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
}

#[test]
fn stored_form_reads_back_as_same_theme() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::parse(Some(theme.as_str())), theme);
    }
}

#[test]
fn icons_advertise_the_other_mode() {
    assert_eq!(Theme::Light.toggle_icon(), MOON_ICON);
    assert_eq!(Theme::Dark.toggle_icon(), SUN_ICON);
}

// =============================================================
// apply_persisted_theme
// =============================================================

#[test]
fn apply_with_nothing_stored_leaves_page_light() {
    let store = MemoryStore::new();
    let page = FakePage::full();
    assert_eq!(apply_persisted_theme(&store, &page, KEY), Theme::Light);
    assert_eq!(page.attribute(), None);
    assert_eq!(page.icon().as_deref(), Some(MOON_ICON));
}

#[test]
fn apply_with_dark_stored_sets_attribute_and_sun_icon() {
    let store = MemoryStore::new();
    store.set(KEY, "dark");
    let page = FakePage::full();
    assert_eq!(apply_persisted_theme(&store, &page, KEY), Theme::Dark);
    assert_eq!(page.attribute().as_deref(), Some("dark"));
    assert_eq!(page.icon().as_deref(), Some(SUN_ICON));
}

#[test]
fn apply_treats_unknown_values_as_light() {
    let store = MemoryStore::new();
    store.set(KEY, "sepia");
    let page = FakePage::full();
    assert_eq!(apply_persisted_theme(&store, &page, KEY), Theme::Light);
    assert_eq!(page.attribute(), None);
}

#[test]
fn apply_twice_is_idempotent() {
    let store = MemoryStore::new();
    store.set(KEY, "dark");
    let page = FakePage::full();
    apply_persisted_theme(&store, &page, KEY);
    let after_first = (page.attribute(), page.icon());
    apply_persisted_theme(&store, &page, KEY);
    assert_eq!((page.attribute(), page.icon()), after_first);
}

#[test]
fn apply_without_button_still_sets_attribute() {
    let store = MemoryStore::new();
    store.set(KEY, "dark");
    let page = FakePage::bare();
    apply_persisted_theme(&store, &page, KEY);
    assert_eq!(page.attribute().as_deref(), Some("dark"));
    assert_eq!(page.icon(), None);
}

// =============================================================
// toggle_theme
// =============================================================

#[test]
fn toggle_from_light_goes_dark_and_persists() {
    let store = MemoryStore::new();
    let page = FakePage::full();
    assert_eq!(toggle_theme(&store, &page, KEY), Theme::Dark);
    assert_eq!(page.attribute().as_deref(), Some("dark"));
    assert_eq!(store.get(KEY).as_deref(), Some("dark"));
    assert_eq!(page.icon().as_deref(), Some(SUN_ICON));
}

#[test]
fn toggle_from_dark_clears_attribute() {
    let store = MemoryStore::new();
    let page = FakePage::full();
    toggle_theme(&store, &page, KEY);
    assert_eq!(toggle_theme(&store, &page, KEY), Theme::Light);
    assert_eq!(page.attribute(), None);
    assert_eq!(store.get(KEY).as_deref(), Some("light"));
    assert_eq!(page.icon().as_deref(), Some(MOON_ICON));
}

#[test]
fn toggle_sequence_parity_decides_persisted_flag() {
    for n in 0..8 {
        let store = MemoryStore::new();
        let page = FakePage::full();
        for _ in 0..n {
            toggle_theme(&store, &page, KEY);
        }
        let dark = store.get(KEY).as_deref() == Some("dark");
        assert_eq!(dark, n % 2 == 1, "after {n} toggles");
        assert_eq!(current_theme(&page).is_dark(), dark);
    }
}

#[test]
fn toggle_without_button_skips_icon() {
    let store = MemoryStore::new();
    let page = FakePage::bare();
    assert_eq!(toggle_theme(&store, &page, KEY), Theme::Dark);
    assert_eq!(page.icon(), None);
    assert_eq!(store.get(KEY).as_deref(), Some("dark"));
}

#[test]
fn toggle_after_reload_continues_from_persisted_theme() {
    let store = MemoryStore::new();
    store.set(KEY, "dark");
    let page = FakePage::full();
    apply_persisted_theme(&store, &page, KEY);
    assert_eq!(toggle_theme(&store, &page, KEY), Theme::Light);
    assert_eq!(store.get(KEY).as_deref(), Some("light"));
}
