//! Smart search controller
//!
//! Owns the search box state and decides which backend call each user
//! action needs. It never performs I/O itself: operations return a
//! [`Request`] and the caller feeds the outcome back in.

use crate::backend::types::{CreateFormRequest, RateRequest, ResultKind, SearchResult};
use crate::backend::BackendError;

/// A previously run query shown in the history panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHistoryEntry {
    pub id: &'static str,
    pub query: &'static str,
    /// Already formatted for display
    pub timestamp: &'static str,
    pub rating: Option<u8>,
}

pub static SEARCH_HISTORY: [SearchHistoryEntry; 3] = [
    SearchHistoryEntry {
        id: "1",
        query: "Создай КС на 300 тыс. на канцелярию",
        timestamp: "10:30",
        rating: Some(5),
    },
    SearchHistoryEntry {
        id: "2",
        query: "Найти контракты на мебель",
        timestamp: "Вчера",
        rating: Some(4),
    },
    SearchHistoryEntry {
        id: "3",
        query: "Котировочная сессия ноутбуки",
        timestamp: "2 дня назад",
        rating: None,
    },
];

/// Example chips under the search box: (label, query)
pub const QUICK_EXAMPLES: [(&str, &str); 3] = [
    ("Создать КС на ноутбуки", "Создай КС на 500 тыс. на ноутбуки"),
    ("Поиск контрактов", "Найти контракты на мебель"),
    ("Управление профилем", "Добавить ЭЦП в профиль"),
];

pub const MAX_RATING: u8 = 5;

fn stationery_session() -> SearchResult {
    SearchResult {
        id: "1".to_string(),
        kind: ResultKind::Create,
        title: "Создать котировочную сессию".to_string(),
        description: "Канцелярские товары на сумму 300 000 руб.".to_string(),
        amount: Some("300 000".to_string()),
        category: Some("Канцелярские товары".to_string()),
        confidence: 95,
    }
}

/// Shown when the backend answered with a non-2xx status
pub fn rejected_fallback() -> Vec<SearchResult> {
    vec![
        stationery_session(),
        SearchResult {
            id: "2".to_string(),
            kind: ResultKind::Search,
            title: "Похожие контракты".to_string(),
            description: "Найдено 12 контрактов на канцелярские товары".to_string(),
            amount: None,
            category: None,
            confidence: 87,
        },
    ]
}

/// Shown when the backend could not be reached or sent garbage
pub fn unreachable_fallback() -> Vec<SearchResult> {
    vec![stationery_session()]
}

/// Outbound call the controller wants issued
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Search { seq: u64, query: String },
    CreateForm(CreateFormRequest),
    FetchResults { query: String },
    Rate(RateRequest),
}

/// Calls whose failure is reported through the notice line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    CreateForm,
    FetchResults,
    OpenForm,
    Rate,
}

impl Action {
    fn describe(self) -> &'static str {
        match self {
            Action::CreateForm => "Не удалось создать форму",
            Action::FetchResults => "Не удалось загрузить результаты",
            Action::OpenForm => "Не удалось открыть форму",
            Action::Rate => "Не удалось сохранить оценку",
        }
    }
}

#[derive(Debug, Default)]
pub struct SmartSearch {
    query: String,
    results: Vec<SearchResult>,
    loading: bool,
    history_visible: bool,
    /// Sequence number of the most recently issued search
    latest_seq: u64,
    /// Query that produced the displayed results
    results_query: String,
    notice: Option<String>,
}

impl SmartSearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn history_visible(&self) -> bool {
        self.history_visible
    }

    pub fn history(&self) -> &'static [SearchHistoryEntry] {
        &SEARCH_HISTORY
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn set_query(&mut self, query: String) {
        self.query = query;
    }

    pub fn hide_history(&mut self) {
        self.history_visible = false;
    }

    pub fn toggle_history(&mut self) {
        self.history_visible = !self.history_visible;
    }

    /// Start a search for the current query.
    ///
    /// Blank queries are ignored. An earlier search still in flight is not
    /// cancelled, its outcome is simply discarded when it arrives.
    pub fn submit(&mut self) -> Option<Request> {
        if self.query.trim().is_empty() {
            return None;
        }

        self.latest_seq += 1;
        self.loading = true;
        self.history_visible = false;

        tracing::debug!(seq = self.latest_seq, query = %self.query, "submitting search");
        Some(Request::Search {
            seq: self.latest_seq,
            query: self.query.clone(),
        })
    }

    /// Apply the outcome of search `seq`. Returns false if it was stale.
    pub fn finish_search(
        &mut self,
        seq: u64,
        query: &str,
        outcome: Result<Vec<SearchResult>, BackendError>,
    ) -> bool {
        if seq != self.latest_seq {
            tracing::debug!(seq, latest = self.latest_seq, "discarding stale search response");
            return false;
        }

        self.results = match outcome {
            Ok(results) => results,
            Err(err) if err.is_rejection() => {
                tracing::warn!("Search API rejected query: {}", err);
                rejected_fallback()
            }
            Err(err) => {
                tracing::error!("Search API error: {}", err);
                unreachable_fallback()
            }
        };
        self.results_query = query.to_string();
        self.loading = false;
        true
    }

    /// Work out what clicking the result card with `result_id` should do
    pub fn activate(&self, result_id: &str) -> Option<Request> {
        let result = self.results.iter().find(|r| r.id == result_id)?;

        Some(match result.kind {
            ResultKind::Create => Request::CreateForm(CreateFormRequest {
                amount: result.amount.clone(),
                category: result.category.clone(),
                title: result.title.clone(),
            }),
            ResultKind::Search => Request::FetchResults {
                query: self.results_query.clone(),
            },
        })
    }

    pub fn rate(&self, result_id: &str, stars: u8) -> Option<Request> {
        if !(1..=MAX_RATING).contains(&stars) {
            tracing::warn!(stars, "ignoring out of range rating");
            return None;
        }

        Some(Request::Rate(RateRequest {
            result_id: result_id.to_string(),
            rating: stars,
        }))
    }

    /// Copy a history entry into the search box. Does not search.
    pub fn pick_history(&mut self, entry_id: &str) {
        if let Some(entry) = SEARCH_HISTORY.iter().find(|e| e.id == entry_id) {
            self.query = entry.query.to_string();
        }
        self.history_visible = false;
    }

    pub fn report_failure(&mut self, action: Action, error: &str) {
        tracing::error!(?action, "{}", error);
        self.notice = Some(format!("{}: {}", action.describe(), error));
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(id: &str, kind: ResultKind) -> SearchResult {
        SearchResult {
            id: id.to_string(),
            kind,
            title: format!("Результат {}", id),
            description: String::new(),
            amount: None,
            category: None,
            confidence: 50,
        }
    }

    fn with_query(query: &str) -> SmartSearch {
        let mut search = SmartSearch::new();
        search.set_query(query.to_string());
        search
    }

    #[test]
    fn test_history_literal() {
        let search = SmartSearch::new();
        let history = search.history();
        assert_eq!(history.len(), 3);
        assert_eq!(history[1].query, "Найти контракты на мебель");
        assert!(history
            .iter()
            .filter_map(|e| e.rating)
            .all(|r| (1..=MAX_RATING).contains(&r)));
    }

    #[test]
    fn test_blank_query_is_ignored() {
        let mut search = with_query("   \t ");
        search.toggle_history();

        assert_eq!(search.submit(), None);
        assert!(search.results().is_empty());
        assert!(!search.is_loading());
        assert!(search.history_visible());
    }

    #[test]
    fn test_blank_query_keeps_previous_results() {
        let mut search = with_query("мебель");
        let Some(Request::Search { seq, query }) = search.submit() else {
            panic!("Expected Search request");
        };
        search.finish_search(seq, &query, Ok(vec![result("x", ResultKind::Search)]));

        search.set_query(String::new());
        assert_eq!(search.submit(), None);
        assert_eq!(search.results().len(), 1);
    }

    #[test]
    fn test_submit_sets_loading_and_hides_history() {
        let mut search = with_query("Найти контракты на мебель");
        search.toggle_history();

        let request = search.submit();

        assert_eq!(
            request,
            Some(Request::Search { seq: 1, query: "Найти контракты на мебель".to_string() })
        );
        assert!(search.is_loading());
        assert!(!search.history_visible());
    }

    #[test]
    fn test_success_replaces_results_verbatim() {
        let mut search = with_query("мебель");
        search.submit();
        let served = vec![result("a", ResultKind::Search), result("b", ResultKind::Create)];

        assert!(search.finish_search(1, "мебель", Ok(served.clone())));
        assert_eq!(search.results(), served.as_slice());
        assert!(!search.is_loading());
    }

    #[test]
    fn test_unreachable_backend_shows_single_fallback() {
        let mut search = with_query("Создай КС на 300 тыс. на канцелярию");
        search.submit();

        search.finish_search(
            1,
            "Создай КС на 300 тыс. на канцелярию",
            Err(BackendError::Transport("connection refused".to_string())),
        );

        let results = search.results();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].kind, ResultKind::Create);
        assert_eq!(results[0].title, "Создать котировочную сессию");
        assert_eq!(results[0].confidence, 95);
        assert!(!search.is_loading());
    }

    #[test]
    fn test_malformed_body_shows_single_fallback() {
        let mut search = with_query("мебель");
        search.submit();

        search.finish_search(1, "мебель", Err(BackendError::Decode("eof".to_string())));
        assert_eq!(search.results(), unreachable_fallback().as_slice());
    }

    #[test]
    fn test_rejected_search_shows_both_fallbacks() {
        let mut search = with_query("мебель");
        search.submit();

        search.finish_search(1, "мебель", Err(BackendError::Status(500)));

        let results = search.results();
        assert_eq!(results.len(), 2);
        assert_eq!(results[1].kind, ResultKind::Search);
        assert_eq!(results[1].confidence, 87);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut search = with_query("первый");
        search.submit();
        search.set_query("второй".to_string());
        search.submit();

        let newer = vec![result("new", ResultKind::Search)];
        assert!(search.finish_search(2, "второй", Ok(newer.clone())));
        assert!(!search.finish_search(1, "первый", Ok(vec![result("old", ResultKind::Search)])));

        assert_eq!(search.results(), newer.as_slice());
        assert!(!search.is_loading());
    }

    #[test]
    fn test_loading_held_until_latest_resolves() {
        let mut search = with_query("первый");
        search.submit();
        search.submit();

        search.finish_search(1, "первый", Ok(Vec::new()));
        assert!(search.is_loading());

        search.finish_search(2, "первый", Ok(Vec::new()));
        assert!(!search.is_loading());
    }

    #[test]
    fn test_pick_history_copies_query() {
        let mut search = SmartSearch::new();
        search.toggle_history();

        search.pick_history("2");

        assert_eq!(search.query(), "Найти контракты на мебель");
        assert!(!search.history_visible());
        assert!(!search.is_loading());
        assert!(search.results().is_empty());
    }

    #[test]
    fn test_rate_builds_single_request() {
        let mut search = with_query("мебель");
        search.submit();
        search.finish_search(1, "мебель", Err(BackendError::Status(502)));
        let before = search.results().to_vec();

        let request = search.rate("1", 3);

        assert_eq!(
            request,
            Some(Request::Rate(RateRequest { result_id: "1".to_string(), rating: 3 }))
        );
        assert_eq!(search.results(), before.as_slice());
    }

    #[test]
    fn test_rate_out_of_range() {
        let search = SmartSearch::new();
        assert_eq!(search.rate("1", 0), None);
        assert_eq!(search.rate("1", 6), None);
    }

    #[test]
    fn test_activate_create_result() {
        let mut search = with_query("канцелярия");
        search.submit();
        search.finish_search(1, "канцелярия", Err(BackendError::Transport("down".to_string())));

        match search.activate("1") {
            Some(Request::CreateForm(form)) => {
                assert_eq!(form.amount.as_deref(), Some("300 000"));
                assert_eq!(form.category.as_deref(), Some("Канцелярские товары"));
                assert_eq!(form.title, "Создать котировочную сессию");
            }
            other => panic!("Expected CreateForm, got {:?}", other),
        }
    }

    #[test]
    fn test_activate_search_result_uses_results_query() {
        let mut search = with_query("мебель");
        search.submit();
        search.finish_search(1, "мебель", Ok(vec![result("s", ResultKind::Search)]));
        search.set_query("что-то другое".to_string());

        assert_eq!(
            search.activate("s"),
            Some(Request::FetchResults { query: "мебель".to_string() })
        );
        assert_eq!(search.activate("missing"), None);
    }

    #[test]
    fn test_failure_notice() {
        let mut search = SmartSearch::new();
        search.report_failure(Action::Rate, "backend returned HTTP 500");

        assert_eq!(
            search.notice(),
            Some("Не удалось сохранить оценку: backend returned HTTP 500")
        );
        search.dismiss_notice();
        assert_eq!(search.notice(), None);
    }
}
