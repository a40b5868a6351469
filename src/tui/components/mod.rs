//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: Top bar with breadcrumb, badge legend and language
//! - `list_row`: Row and hint helpers shared by every list screen
//!
//! ### Screen Components (Transient Wrappers)
//!
//! One per screen. Each is created every frame around the screen state that
//! lives on the core navigation stack, renders it, and is dropped:
//! - `MainMenu`, `SearchView`, `RecentView`, `YearsView`, `YearFeaturesView`
//! - `FeatureDetail` borrows its state mutably to record the scroll limit
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs             (this file)
//! ├── title_bar.rs       (Top bar)
//! ├── list_row.rs        (Shared row rendering)
//! ├── main_menu.rs       (Main menu)
//! ├── search_view.rs     (Free text search + pagination)
//! ├── recent_view.rs     (Recent Baseline updates)
//! ├── year_view.rs       (Year list and per-year features)
//! └── feature_detail.rs  (Detail screen)
//! ```

pub mod feature_detail;
pub mod list_row;
pub mod main_menu;
pub mod recent_view;
pub mod search_view;
mod title_bar;
pub mod year_view;

pub use feature_detail::FeatureDetail;
pub use main_menu::MainMenu;
pub use recent_view::RecentView;
pub use search_view::SearchView;
pub use title_bar::TitleBar;
pub use year_view::{YearFeaturesView, YearsView};
