use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::screens::Screen;
use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{
    FeatureDetail, MainMenu, RecentView, SearchView, TitleBar, YearFeaturesView, YearsView,
};

pub fn draw_ui(frame: &mut Frame, app: &mut App) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(1), Min(0)]);
    let [title_area, _, main_area] = layout.areas(frame.area());

    let breadcrumb = app
        .screens()
        .iter()
        .map(|screen| app.language.text(screen.label()))
        .collect();
    TitleBar::new(breadcrumb, app.language).render(frame, title_area);

    let language = app.language;
    let visible_items = app.visible_items;
    let recent_days = app.recent_days;
    let (catalog, screen) = app.parts_mut();

    match screen {
        Screen::Menu(state) => {
            MainMenu::new(state, language, recent_days).render(frame, main_area);
        }
        Screen::Search(state) => {
            SearchView::new(state, catalog, language).render(frame, main_area);
        }
        Screen::Recent(state) => {
            RecentView::new(state, catalog, language, visible_items).render(frame, main_area);
        }
        Screen::Years(state) => {
            YearsView::new(state, language, visible_items).render(frame, main_area);
        }
        Screen::YearFeatures(state) => {
            YearFeaturesView::new(state, catalog, language, visible_items)
                .render(frame, main_area);
        }
        Screen::Detail(state) => {
            FeatureDetail::new(state, catalog, language).render(frame, main_area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::core::i18n::Language;
    use crate::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(app: &mut App) -> String {
        let backend = TestBackend::new(120, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_draw_ui_menu() {
        let mut app = test_app();
        let text = draw(&mut app);
        assert!(text.contains("[en]"));
        assert!(text.contains("=== Baseline Search ==="));
    }

    #[test]
    fn test_draw_ui_follows_navigation() {
        let mut app = test_app();
        update(&mut app, Action::Char('3'));
        let text = draw(&mut app);
        assert!(text.contains("Baseline Search › Years"));
        assert!(text.contains("Year Selection"));

        update(&mut app, Action::Enter);
        update(&mut app, Action::Enter);
        let text = draw(&mut app);
        assert!(text.contains("Years › Year features › Detail"));
        assert!(text.contains("=== EDGE-OF-WINDOW Details ==="));
    }

    /// Wide characters leave padding cells behind them, so rows are
    /// compared with spaces removed.
    fn title_row_without_spaces(app: &mut App) -> String {
        let backend = TestBackend::new(120, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        (0..120)
            .map(|x| buffer[(x, 0)].symbol())
            .collect::<String>()
            .replace(' ', "")
    }

    #[test]
    fn test_draw_ui_japanese_breadcrumb() {
        let mut app = test_app();
        app.language = Language::Ja;
        update(&mut app, Action::Char('3'));
        update(&mut app, Action::Enter);
        let title = title_row_without_spaces(&mut app);
        assert!(title.contains("BaselineSearch›年選択›年別機能"));
        assert!(title.contains("[ja]"));
        assert!(!title.contains("years"));
    }

    #[test]
    fn test_draw_ui_japanese_year_features_body() {
        let mut app = test_app();
        app.language = Language::Ja;
        update(&mut app, Action::Char('3'));
        update(&mut app, Action::Enter);
        let text: String = draw(&mut app).chars().filter(|c| *c != ' ').collect();
        assert!(text.contains("===2024年BaselineTarget機能一覧==="));
        assert!(text.contains("ESC:年選択に戻る"));
        assert!(!text.contains("Navigate"));
    }

    #[test]
    fn test_draw_ui_records_detail_scroll_limit() {
        let mut app = test_app();
        update(&mut app, Action::Char('2'));
        update(&mut app, Action::Enter);
        draw(&mut app);
        match app.screen() {
            Screen::Detail(state) => assert!(state.max_scroll < u16::MAX),
            other => panic!("expected detail, got {}", other.name()),
        }
    }
}
