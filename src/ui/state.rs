//! Transient view state of the search page

use crate::TravelAiError;
use crate::models::Route;

/// Which of the page states the view is in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Prompt text, results, loading flag and error of one page.
///
/// Every `submit` bumps a generation counter; an outcome is applied only when
/// it carries the current generation, so a slow answer to an older search can
/// never replace the results of a newer one.
#[derive(Debug, Default, Clone)]
pub struct SearchView {
    prompt: String,
    results: Vec<Route>,
    loading: bool,
    error: Option<String>,
    generation: u64,
}

/// Handle for one in-flight search
#[derive(Debug)]
#[must_use]
pub struct Ticket {
    generation: u64,
    prompt: String,
}

impl Ticket {
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl SearchView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn results(&self) -> &[Route] {
        &self.results
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if self.error.is_some() {
            Phase::Failed
        } else if self.generation == 0 {
            Phase::Idle
        } else {
            Phase::Loaded
        }
    }

    /// Start a search for the current prompt. Empty prompts are not rejected.
    pub fn submit(&mut self) -> Ticket {
        self.generation += 1;
        self.loading = true;
        self.results.clear();
        self.error = None;
        Ticket {
            generation: self.generation,
            prompt: self.prompt.clone(),
        }
    }

    /// Apply the outcome of a search. Returns `false` when the ticket is stale
    /// and the outcome was dropped.
    pub fn resolve(&mut self, ticket: Ticket, outcome: Result<Vec<Route>, TravelAiError>) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                stale = ticket.generation,
                current = self.generation,
                "Dropping outdated search result"
            );
            return false;
        }

        self.loading = false;
        match outcome {
            Ok(routes) => self.results = routes,
            Err(err) => self.error = Some(err.user_message()),
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Distance, Hotel};

    fn route(description: &str) -> Route {
        Route {
            description: description.to_string(),
            data: vec![Hotel {
                name: "Sunset Inn".to_string(),
                rating: 4.5,
                distance: Distance {
                    value: 2.0,
                    unit: "km".to_string(),
                },
            }],
            amenities: vec!["wifi".to_string()],
        }
    }

    #[test]
    fn test_initial_state_is_idle() {
        let view = SearchView::new();
        assert_eq!(view.phase(), Phase::Idle);
        assert!(view.results().is_empty());
        assert!(!view.is_loading());
        assert!(view.error().is_none());
    }

    #[test]
    fn test_submit_then_resolve() {
        let mut view = SearchView::new();
        view.set_prompt("море");

        let ticket = view.submit();
        assert_eq!(ticket.prompt(), "море");
        assert_eq!(view.phase(), Phase::Loading);
        assert!(view.results().is_empty());

        assert!(view.resolve(ticket, Ok(vec![route("Beach trip")])));
        assert_eq!(view.phase(), Phase::Loaded);
        assert!(!view.is_loading());
        assert_eq!(view.results().len(), 1);
    }

    #[test]
    fn test_submit_clears_previous_results() {
        let mut view = SearchView::new();
        let first = view.submit();
        view.resolve(first, Ok(vec![route("Beach trip")]));

        let _second = view.submit();
        assert!(view.is_loading());
        assert!(view.results().is_empty());
    }

    #[test]
    fn test_empty_prompt_still_submits() {
        let mut view = SearchView::new();
        let ticket = view.submit();
        assert_eq!(ticket.prompt(), "");
        assert_eq!(ticket.generation(), 1);
        assert_eq!(view.phase(), Phase::Loading);
    }

    #[test]
    fn test_failure_leaves_loading() {
        let mut view = SearchView::new();
        let ticket = view.submit();

        assert!(view.resolve(ticket, Err(TravelAiError::Upstream { status: 500 })));
        assert_eq!(view.phase(), Phase::Failed);
        assert!(!view.is_loading());
        assert!(view.error().unwrap().contains("500"));

        // A failed search is not terminal
        let retry = view.submit();
        assert!(view.error().is_none());
        assert!(view.resolve(retry, Ok(vec![route("Retry")])));
        assert_eq!(view.phase(), Phase::Loaded);
    }

    #[test]
    fn test_stale_result_is_dropped() {
        let mut view = SearchView::new();
        view.set_prompt("перший");
        let older = view.submit();
        view.set_prompt("другий");
        let newer = view.submit();

        assert!(view.resolve(newer, Ok(vec![route("Newer")])));
        assert!(!view.resolve(older, Ok(vec![route("Older")])));

        assert_eq!(view.results().len(), 1);
        assert_eq!(view.results()[0].description, "Newer");
        assert_eq!(view.phase(), Phase::Loaded);
    }

    #[test]
    fn test_stale_result_does_not_end_loading() {
        let mut view = SearchView::new();
        let older = view.submit();
        let _newer = view.submit();

        assert!(!view.resolve(older, Err(TravelAiError::network("refused"))));
        assert_eq!(view.phase(), Phase::Loading);
        assert!(view.error().is_none());
    }

    #[test]
    fn test_loading_and_results_are_exclusive() {
        let mut view = SearchView::new();
        for round in 0..3 {
            let ticket = view.submit();
            assert!(view.is_loading() && view.results().is_empty());
            view.resolve(ticket, Ok(vec![route(&format!("round {round}"))]));
            assert!(!view.is_loading() && !view.results().is_empty());
        }
    }
}
