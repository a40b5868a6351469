//! # Localization
//!
//! Every user-visible string has a [`Text`] key with an English and a
//! Japanese template. Templates use positional `{0}`, `{1}`, ... placeholders:
//!
//! ```rust,ignore
//! lang.tr(Text::SearchResults, &[&42]); // "42 features found"
//! ```
//!
//! Feature data (names, descriptions, URLs) comes straight from the dataset
//! and is never translated.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ja,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ja => "ja",
        }
    }

    /// Parses `en` / `ja` (case-insensitive). Used for env var overrides.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Language::En),
            "ja" => Some(Language::Ja),
            _ => None,
        }
    }

    /// The raw template for `key`.
    pub fn text(self, key: Text) -> &'static str {
        match self {
            Language::En => english(key),
            Language::Ja => japanese(key),
        }
    }

    /// The template for `key` with `{n}` replaced by `args[n]`.
    pub fn tr(self, key: Text, args: &[&dyn fmt::Display]) -> String {
        let mut text = self.text(key).to_string();
        for (index, arg) in args.iter().enumerate() {
            text = text.replacen(&format!("{{{index}}}"), &arg.to_string(), 1);
        }
        text
    }
}

/// Keys for every translatable string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Text {
    // Main menu
    MainTitle,
    MainSubtitle,
    MainMenuQuestion,
    MainMenuFreeSearch,
    MainMenuRecent,
    MainMenuBaselineTarget,
    MainMenuExit,
    MainMenuNavigation,

    // Search
    SearchTitle,
    SearchKeyword,
    SearchResults,
    SearchNoResults,
    SearchTermSuffix,
    SearchPageInfo,
    SearchInstructions,
    SearchInstructionsEditing,
    SearchPageJump,
    SearchTryOtherKeywords,
    SearchClearHint,

    // Recent updates
    RecentTitle,
    RecentNavigation,
    RecentWidelyAvailable,
    RecentNewlyAvailable,
    RecentNoResults,

    // Baseline Target (by year)
    BaselineYearSelection,
    BaselineYearNavigation,
    BaselineYearPosition,
    BaselineYearCount,
    BaselineNoYears,
    BaselineFeatureList,
    BaselineFeatureNavigation,
    BaselineFeaturePosition,
    BaselineNoFeatures,

    // Detail
    DetailTitle,
    DetailNavigation,
    DetailNotFound,

    // Breadcrumb labels
    CrumbMenu,
    CrumbSearch,
    CrumbRecent,
    CrumbYears,
    CrumbYearFeatures,
    CrumbDetail,

    // Shared
    ScrollInstructions,
    LegendLimited,
    Exit,
    ErrorLoadingData,
}

fn english(key: Text) -> &'static str {
    match key {
        Text::MainTitle => "=== Baseline Search ===",
        Text::MainSubtitle => "Web Features Data Search & Browse Tool",
        Text::MainMenuQuestion => "Which feature would you like to use?",
        Text::MainMenuFreeSearch => "Free Text Search (Pagination + Free Word)",
        Text::MainMenuRecent => "Recent Baseline Updates (Last {0} days)",
        Text::MainMenuBaselineTarget => "Baseline Target (By Year)",
        Text::MainMenuExit => "Exit",
        Text::MainMenuNavigation => "↑↓: Navigate | Enter: Select | 1-{0}: Direct | ESC/q: Exit",

        Text::SearchTitle => "=== Free Text Search + Pagination ===",
        Text::SearchKeyword => "Search keyword: ",
        Text::SearchResults => "{0} features found",
        Text::SearchNoResults => "No features found",
        Text::SearchTermSuffix => " (search: \"{0}\")",
        Text::SearchPageInfo => "Page: {0}/{1} | Showing: {2}-{3}",
        Text::SearchInstructions => {
            "↑↓: Select | ←→: Page | / or s: Search | Enter: Confirm | ESC/q: Back"
        }
        Text::SearchInstructionsEditing => {
            "Searching: ↑↓ to select | ←→ for page | Enter: confirm | ESC: end search"
        }
        Text::SearchPageJump => "Number keys (1-{0}) for page jump",
        Text::SearchTryOtherKeywords => "Try other keywords or Ctrl+C to clear search",
        Text::SearchClearHint => " (Ctrl+C: Clear)",

        Text::RecentTitle => "=== Recent Baseline Updates (Last {0} days) ===",
        Text::RecentNavigation => "↑↓: Navigate | Enter: Details | ESC: Back",
        Text::RecentWidelyAvailable => "Widely available",
        Text::RecentNewlyAvailable => "Newly available",
        Text::RecentNoResults => "No features reached Baseline in the last {0} days",

        Text::BaselineYearSelection => "=== Baseline Target Year Selection ===",
        Text::BaselineYearNavigation => "↑↓: Navigate | Enter: Select | ESC: Back",
        Text::BaselineYearPosition => "Year {0}/{1}",
        Text::BaselineYearCount => "{0} features",
        Text::BaselineNoYears => "No features have a Baseline date",
        Text::BaselineFeatureList => "=== {0} Baseline Target Features ===",
        Text::BaselineFeatureNavigation => {
            "↑↓: Navigate | Enter: Details | ESC: Back to year selection"
        }
        Text::BaselineFeaturePosition => "Feature {0}/{1}",
        Text::BaselineNoFeatures => "No Baseline Target features in this year",

        Text::DetailTitle => "=== {0} Details ===",
        Text::DetailNavigation => "Enter or ESC to go back | ↑↓/PgUp/PgDn: Scroll",
        Text::DetailNotFound => "Feature \"{0}\" is not in the loaded data",

        Text::CrumbMenu => "Menu",
        Text::CrumbSearch => "Search",
        Text::CrumbRecent => "Recent",
        Text::CrumbYears => "Years",
        Text::CrumbYearFeatures => "Year features",
        Text::CrumbDetail => "Detail",

        Text::ScrollInstructions => "↑↓ to scroll (showing: {0}-{1} of {2})",
        Text::LegendLimited => "Limited availability",
        Text::Exit => "Exiting.",
        Text::ErrorLoadingData => "Failed to load feature data: {0}",
    }
}

fn japanese(key: Text) -> &'static str {
    match key {
        Text::MainTitle => "=== Baseline Search ===",
        Text::MainSubtitle => "Web機能データの詳細検索・閲覧ツール",
        Text::MainMenuQuestion => "どの機能を利用しますか?",
        Text::MainMenuFreeSearch => "フリーワード検索（ページネーション+フリーワード）",
        Text::MainMenuRecent => "最近のBaseline更新（過去{0}日間）",
        Text::MainMenuBaselineTarget => "Baseline Target（年別一覧）",
        Text::MainMenuExit => "Exit (終了)",
        Text::MainMenuNavigation => "↑↓: 選択移動 | Enter: 決定 | 1-{0}: 直接選択 | ESC/q: 終了",

        Text::SearchTitle => "=== フリーワード検索+ページネーション ===",
        Text::SearchKeyword => "検索キーワード: ",
        Text::SearchResults => "{0}件の機能が見つかりました",
        Text::SearchNoResults => "機能が見つかりませんでした",
        Text::SearchTermSuffix => " (検索: \"{0}\")",
        Text::SearchPageInfo => "ページ: {0}/{1} | 表示中: {2}-{3}",
        Text::SearchInstructions => {
            "↑↓: 選択 | ←→: ページ | /またはs: 検索 | Enter: 決定 | ESC/q: 戻る"
        }
        Text::SearchInstructionsEditing => {
            "検索中: ↑↓で選択 | ←→でページ | Enter: 決定 | ESC: 検索終了"
        }
        Text::SearchPageJump => "数字キー (1-{0}) でページジャンプ",
        Text::SearchTryOtherKeywords => {
            "別のキーワードを試すか、Ctrl+Cで検索をクリアしてください"
        }
        Text::SearchClearHint => " (Ctrl+C: クリア)",

        Text::RecentTitle => "=== 最近のBaseline更新（過去{0}日間） ===",
        Text::RecentNavigation => "↑↓: 選択 | Enter: 詳細表示 | ESC: 戻る",
        Text::RecentWidelyAvailable => "広く利用可能",
        Text::RecentNewlyAvailable => "新たに利用可能",
        Text::RecentNoResults => "過去{0}日間にBaselineに到達した機能はありません",

        Text::BaselineYearSelection => "=== Baseline Target 年選択 ===",
        Text::BaselineYearNavigation => "↑↓: 選択 | Enter: 決定 | ESC: 戻る",
        Text::BaselineYearPosition => "年 {0}/{1}",
        Text::BaselineYearCount => "{0}件",
        Text::BaselineNoYears => "Baselineの日付を持つ機能がありません",
        Text::BaselineFeatureList => "=== {0}年 Baseline Target 機能一覧 ===",
        Text::BaselineFeatureNavigation => "↑↓: 選択 | Enter: 詳細表示 | ESC: 年選択に戻る",
        Text::BaselineFeaturePosition => "機能 {0}/{1}",
        Text::BaselineNoFeatures => "この年にはBaseline Target機能がありません",

        Text::DetailTitle => "=== {0} 詳細情報 ===",
        Text::DetailNavigation => "EnterまたはESCで戻る | ↑↓/PgUp/PgDn: スクロール",
        Text::DetailNotFound => "機能「{0}」は読み込まれたデータにありません",

        Text::CrumbMenu => "メニュー",
        Text::CrumbSearch => "検索",
        Text::CrumbRecent => "最近の更新",
        Text::CrumbYears => "年選択",
        Text::CrumbYearFeatures => "年別機能",
        Text::CrumbDetail => "詳細",

        Text::ScrollInstructions => "↑↓キーでスクロール (表示中: {0}-{1} / {2})",
        Text::LegendLimited => "限定的な利用可能性",
        Text::Exit => "終了します。",
        Text::ErrorLoadingData => "機能データの読み込みに失敗しました: {0}",
    }
}
