//! End-to-end navigation flows over the bundled dataset, driven only through
//! the public `update()` entry point.

use baseline_search::Language;
use baseline_search::core::action::{Action, Effect, update};
use baseline_search::core::catalog::{Baseline, Catalog, FeatureEntry};
use baseline_search::core::config::ResolvedConfig;
use baseline_search::core::screens::Screen;
use baseline_search::core::state::App;
use chrono::{Datelike, NaiveDate};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

fn bundled_app() -> App {
    let catalog = Catalog::bundled().expect("bundled data parses");
    App::new(catalog, &ResolvedConfig::default(), today())
}

fn press_all(app: &mut App, actions: &[Action]) {
    for action in actions {
        assert_eq!(update(app, *action), Effect::None, "{action:?} quit early");
    }
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        update(app, Action::Char(c));
    }
}

#[test]
fn test_bundled_catalog_shapes() {
    let catalog = Catalog::bundled().unwrap();
    assert!(catalog.len() > 20);

    let dialog = catalog.get("dialog").and_then(FeatureEntry::status).unwrap();
    assert_eq!(dialog.baseline, Baseline::High);

    let webgpu = catalog.get("webgpu").and_then(FeatureEntry::status).unwrap();
    assert_eq!(webgpu.baseline, Baseline::Limited);

    assert!(matches!(
        catalog.get("numeric-seperators"),
        Some(FeatureEntry::Moved { redirect_target }) if redirect_target == "numeric-separators"
    ));
    assert!(matches!(catalog.get("selectors-4"), Some(FeatureEntry::Split { .. })));

    let websockets = catalog.get("websockets").and_then(FeatureEntry::status).unwrap();
    assert!(websockets.baseline_low_date.as_ref().unwrap().approximate);
}

#[test]
fn test_search_detail_and_back() {
    let mut app = bundled_app();
    press_all(&mut app, &[Action::Char('1'), Action::Char('/')]);
    type_text(&mut app, "NEST");

    match app.screen() {
        Screen::Search(state) => {
            assert_eq!(state.results(), ["css-nesting"]);
            assert!(state.editing);
        }
        other => panic!("expected search, got {}", other.name()),
    }

    press_all(&mut app, &[Action::Enter]);
    match app.screen() {
        Screen::Detail(state) => assert_eq!(state.key, "css-nesting"),
        other => panic!("expected detail, got {}", other.name()),
    }

    // Back to the search exactly as it was left
    press_all(&mut app, &[Action::Escape]);
    match app.screen() {
        Screen::Search(state) => assert_eq!(state.term, "NEST"),
        other => panic!("expected search, got {}", other.name()),
    }

    // First Esc ends search mode, second leaves the screen
    press_all(&mut app, &[Action::Escape, Action::Escape]);
    assert_eq!(app.screen().name(), "menu");
    assert_eq!(app.depth(), 1);
}

#[test]
fn test_search_matches_names_case_insensitively() {
    let mut app = bundled_app();
    press_all(&mut app, &[Action::Char('1'), Action::Char('s')]);
    type_text(&mut app, "clipboard");
    match app.screen() {
        Screen::Search(state) => assert_eq!(state.results(), ["async-clipboard"]),
        other => panic!("expected search, got {}", other.name()),
    }

    // Ctrl+C empties the term and shows everything again
    press_all(&mut app, &[Action::Clear]);
    match app.screen() {
        Screen::Search(state) => {
            assert!(state.term.is_empty());
            assert_eq!(state.results().len(), app.catalog.len());
            assert_eq!(state.current_page().total_pages, app.catalog.len().div_ceil(10));
        }
        other => panic!("expected search, got {}", other.name()),
    }
}

/// Latest newly-available date in the bundled data.
fn newest_low_date(catalog: &Catalog) -> NaiveDate {
    catalog
        .features()
        .filter_map(|(_, data)| data.status.as_ref()?.baseline_low_date.as_ref())
        .map(|date| date.date)
        .max()
        .expect("bundled data has baseline dates")
}

#[test]
fn test_recent_window_follows_data() {
    let catalog = Catalog::bundled().unwrap();
    let newest = newest_low_date(&catalog);
    let since = newest - chrono::Duration::days(28);
    let mut app = App::new(catalog, &ResolvedConfig::default(), newest);

    press_all(&mut app, &[Action::Char('2')]);
    let first = match app.screen() {
        Screen::Recent(state) => {
            assert!(!state.entries.is_empty());
            assert!(
                state
                    .entries
                    .iter()
                    .all(|e| e.date.date >= since && e.date.date <= newest)
            );
            let low = &state.entries[state.high_count..];
            assert_eq!(low.first().map(|e| e.date.date), Some(newest));
            state.entries[0].key.clone()
        }
        other => panic!("expected recent, got {}", other.name()),
    };

    press_all(&mut app, &[Action::Enter]);
    match app.screen() {
        Screen::Detail(state) => assert_eq!(state.key, first),
        other => panic!("expected detail, got {}", other.name()),
    }
}

#[test]
fn test_recent_window_empty_long_after_data() {
    let catalog = Catalog::bundled().unwrap();
    let far_future = NaiveDate::from_ymd_opt(2100, 1, 1).unwrap();
    let mut app = App::new(catalog, &ResolvedConfig::default(), far_future);

    press_all(&mut app, &[Action::Char('2'), Action::Enter]);
    match app.screen() {
        Screen::Recent(state) => assert!(state.entries.is_empty()),
        other => panic!("expected recent, got {}", other.name()),
    }
}

#[test]
fn test_year_browse() {
    let mut app = bundled_app();
    let newest_year = newest_low_date(&app.catalog).year();

    press_all(&mut app, &[Action::Char('3')]);
    let years: Vec<i32> = match app.screen() {
        Screen::Years(state) => state.years.iter().map(|y| y.year).collect(),
        other => panic!("expected years, got {}", other.name()),
    };
    assert_eq!(years.first(), Some(&newest_year));
    assert!(years.windows(2).all(|pair| pair[0] > pair[1]));

    press_all(&mut app, &[Action::Enter]);
    let keys = match app.screen() {
        Screen::YearFeatures(state) => {
            assert_eq!(state.year, newest_year);
            state.keys.clone()
        }
        other => panic!("expected year features, got {}", other.name()),
    };
    assert!(!keys.is_empty());
    for key in &keys {
        let date = app
            .catalog
            .get(key)
            .and_then(FeatureEntry::status)
            .and_then(|status| status.baseline_low_date.as_ref())
            .unwrap();
        assert_eq!(date.year(), newest_year);
    }

    press_all(&mut app, &[Action::Escape]);
    assert_eq!(app.screen().name(), "years");
}

#[test]
fn test_quit_paths() {
    let mut app = bundled_app();
    assert_eq!(update(&mut app, Action::Char('4')), Effect::Quit);

    let mut app = bundled_app();
    press_all(&mut app, &[Action::Char('1'), Action::Char('/')]);
    assert_eq!(update(&mut app, Action::ForceQuit), Effect::Quit);
}

#[test]
fn test_language_comes_from_config() {
    let config = ResolvedConfig {
        language: Language::Ja,
        ..ResolvedConfig::default()
    };
    let app = App::new(Catalog::bundled().unwrap(), &config, today());
    assert_eq!(app.language, Language::Ja);
}
