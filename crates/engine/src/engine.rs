use std::time::Duration;

use crate::compiler::{CompileOptions, CompiledPattern, DEFAULT_SIZE_LIMIT};
use crate::error::EngineError;
use crate::guard::{CancelToken, MatchGuard};
use crate::iterator::iterate_guarded;
use crate::matcher::{MatchRecord, MatchSet};
use crate::render::HighlightRenderer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    FirstOnly,
    #[default]
    Exhaustive,
}

impl SearchMode {
    pub fn from_exhaustive(exhaustive: bool) -> Self {
        if exhaustive {
            Self::Exhaustive
        } else {
            Self::FirstOnly
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub pattern: String,
    pub subject: String,
    pub ignore_case: bool,
    pub mode: SearchMode,
}

impl SearchRequest {
    pub fn new(pattern: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            subject: subject.into(),
            ignore_case: false,
            mode: SearchMode::default(),
        }
    }

    pub fn ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    pub fn mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }
}

/// Outcome of one evaluation: either the matches with the highlighted subject, or
/// an error, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedResult {
    Rendered {
        matches: MatchSet,
        highlighted: String,
    },
    Failed(EngineError),
}

impl RenderedResult {
    /// Matches found; empty on error.
    pub fn matches(&self) -> &[MatchRecord] {
        match self {
            Self::Rendered { matches, .. } => matches.records(),
            Self::Failed(_) => &[],
        }
    }

    /// Highlighted markup; empty on error.
    pub fn highlighted(&self) -> &str {
        match self {
            Self::Rendered { highlighted, .. } => highlighted,
            Self::Failed(_) => "",
        }
    }

    pub fn error(&self) -> Option<&EngineError> {
        match self {
            Self::Rendered { .. } => None,
            Self::Failed(error) => Some(error),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub size_limit: usize,
    pub match_timeout: Option<Duration>,
    pub renderer: HighlightRenderer,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            size_limit: DEFAULT_SIZE_LIMIT,
            match_timeout: None,
            renderer: HighlightRenderer::default(),
        }
    }
}

/// Runs requests through compile, iterate and render. Holds configuration only;
/// nothing is carried from one request to the next.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn evaluate(&self, request: &SearchRequest) -> RenderedResult {
        self.run(request, self.guard())
    }

    /// Evaluates `request`, returning [`EngineError::Cancelled`] if `token` is
    /// cancelled before matching finishes.
    pub fn evaluate_cancellable(&self, request: &SearchRequest, token: &CancelToken) -> RenderedResult {
        self.run(request, self.guard().with_cancel(token.clone()))
    }

    fn guard(&self) -> MatchGuard {
        match self.config.match_timeout {
            Some(budget) => MatchGuard::unlimited().with_budget(budget),
            None => MatchGuard::unlimited(),
        }
    }

    fn run(&self, request: &SearchRequest, guard: MatchGuard) -> RenderedResult {
        let options = CompileOptions {
            ignore_case: request.ignore_case,
            size_limit: self.config.size_limit,
        };

        let pattern = match CompiledPattern::new(&request.pattern, &options) {
            Ok(pattern) => pattern,
            Err(e) => return RenderedResult::Failed(e),
        };

        let matches = match iterate_guarded(&pattern, &request.subject, request.mode, &guard) {
            Ok(matches) => matches,
            Err(e) => return RenderedResult::Failed(e),
        };

        log::debug!(
            "pattern {:?} ({:?}, ignore_case={}) matched {} times",
            request.pattern,
            request.mode,
            request.ignore_case,
            matches.count()
        );

        let highlighted = self.config.renderer.render(&request.subject, &matches);
        RenderedResult::Rendered {
            matches,
            highlighted,
        }
    }
}

/// Evaluates one request with the default configuration.
pub fn evaluate(pattern: &str, subject: &str, ignore_case: bool, exhaustive: bool) -> RenderedResult {
    let request = SearchRequest::new(pattern, subject)
        .ignore_case(ignore_case)
        .mode(SearchMode::from_exhaustive(exhaustive));
    Engine::default().evaluate(&request)
}
