//! Pattern matching and highlight engine for the regex tester.

mod compiler;
mod engine;
mod error;
mod guard;
mod iterator;
mod matcher;
mod render;

pub use compiler::{CompileOptions, CompiledPattern, DEFAULT_SIZE_LIMIT, compile};
pub use engine::{Engine, EngineConfig, RenderedResult, SearchMode, SearchRequest, evaluate};
pub use error::{EngineError, EngineResult};
pub use guard::{CancelToken, MatchGuard};
pub use iterator::{iterate, iterate_guarded};
pub use matcher::{MatchRecord, MatchSet};
pub use render::{DEFAULT_HIGHLIGHT_TAG, HighlightRenderer, escape_html, is_valid_tag};
