//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use chrono::NaiveDate;

use crate::core::catalog::Catalog;
use crate::core::config::ResolvedConfig;
use crate::core::state::App;

/// Small catalog with hand-picked dates around [`fixture_today`].
pub const FIXTURE_JSON: &str = r#"{
    "container-queries": {
        "kind": "feature",
        "name": "Container queries",
        "status": {"baseline": "low", "baseline_low_date": "2023-02-14"}
    },
    "css-nesting": {
        "kind": "feature",
        "name": "Nesting",
        "status": {"baseline": "low", "baseline_low_date": "2023-12-11"}
    },
    "dialog": {
        "kind": "feature",
        "name": "<dialog>",
        "description": "The dialog element is a pop-up dialog box.",
        "spec": ["https://html.spec.whatwg.org/multipage/interactive-elements.html#the-dialog-element"],
        "group": ["html-elements"],
        "caniuse": ["dialog"],
        "compat_features": ["api.HTMLDialogElement", "html.elements.dialog"],
        "status": {
            "baseline": "high",
            "baseline_low_date": "2022-03-14",
            "baseline_high_date": "2024-06-10",
            "support": {"chrome": "37", "firefox": "98", "safari": "15.4"},
            "by_compat_key": {
                "html.elements.dialog": {
                    "baseline": "high",
                    "baseline_low_date": "2022-03-14",
                    "support": {"chrome": "37"}
                }
            }
        }
    },
    "edge-of-window": {
        "kind": "feature",
        "name": "Edge of window",
        "status": {"baseline": "low", "baseline_low_date": "2024-05-23"}
    },
    "future": {
        "kind": "feature",
        "name": "Future feature",
        "status": {"baseline": "low", "baseline_low_date": "2024-07-01"}
    },
    "grid": {
        "kind": "feature",
        "name": "Grid",
        "description": "CSS grid is a two-dimensional layout system.",
        "status": {"baseline": "high"}
    },
    "old-grid": {
        "kind": "moved",
        "redirect_target": "grid"
    },
    "popover": {
        "kind": "feature",
        "name": "Popover",
        "status": {"baseline": "low", "baseline_low_date": "2024-06-01"}
    },
    "selectors-4": {
        "kind": "split",
        "redirect_targets": ["has", "is"]
    },
    "subgrid": {
        "kind": "feature",
        "name": "Subgrid",
        "status": {"baseline": "low", "baseline_low_date": "2023-09-15"}
    },
    "webgpu": {
        "kind": "feature",
        "name": "WebGPU",
        "status": {"baseline": false, "support": {"chrome": "113"}}
    },
    "websockets": {
        "kind": "feature",
        "name": "WebSockets",
        "discouraged": {"according_to": ["https://example.com/discouraged"]},
        "status": {
            "baseline": "high",
            "baseline_low_date": "≤2020-07-29",
            "baseline_high_date": "≤2023-01-29"
        }
    }
}"#;

pub fn fixture_catalog() -> Catalog {
    Catalog::from_json(FIXTURE_JSON).expect("fixture catalog parses")
}

pub fn fixture_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 20).expect("valid date")
}

/// Creates a test App over the fixture catalog with default settings.
pub fn test_app() -> App {
    App::new(fixture_catalog(), &ResolvedConfig::default(), fixture_today())
}

/// Same as [`test_app`] with a custom page size.
pub fn test_app_with_page_size(page_size: usize) -> App {
    let config = ResolvedConfig {
        page_size,
        ..ResolvedConfig::default()
    };
    App::new(fixture_catalog(), &config, fixture_today())
}
