use std::convert::Infallible;

use regex::Captures;

use crate::compiler::CompiledPattern;
use crate::engine::SearchMode;
use crate::error::EngineResult;
use crate::guard::MatchGuard;
use crate::matcher::{MatchRecord, MatchSet};

/// Enumerates matches of `pattern` in `subject` under `mode`.
///
/// After a zero-width match at `start` the next search resumes one character
/// later, so every position of the subject is visited at most once and the scan
/// always terminates. This does not defer to `Regex::captures_iter`, which drops
/// an empty match that directly follows a non-empty one.
pub fn iterate(pattern: &CompiledPattern, subject: &str, mode: SearchMode) -> MatchSet {
    match scan(pattern, subject, mode, || Ok::<(), Infallible>(())) {
        Ok(matches) => matches,
        Err(never) => match never {},
    }
}

/// Like [`iterate`], consulting `guard` before every search attempt. A tripped
/// guard discards whatever was collected so far.
pub fn iterate_guarded(
    pattern: &CompiledPattern,
    subject: &str,
    mode: SearchMode,
    guard: &MatchGuard,
) -> EngineResult<MatchSet> {
    scan(pattern, subject, mode, || guard.check()).inspect_err(|e| {
        log::warn!("matching {:?} aborted: {}", pattern.as_str(), e);
    })
}

fn scan<E>(
    pattern: &CompiledPattern,
    subject: &str,
    mode: SearchMode,
    mut check: impl FnMut() -> Result<(), E>,
) -> Result<MatchSet, E> {
    let regex = pattern.regex();
    let mut matches = MatchSet::new();
    let mut cursor = 0;

    while cursor <= subject.len() {
        check()?;

        let Some(caps) = regex.captures_at(subject, cursor) else {
            break;
        };
        let Some(record) = to_record(&caps) else {
            break;
        };

        let (start, end) = (record.start, record.end);
        matches.push(record);

        if mode == SearchMode::FirstOnly {
            break;
        }

        cursor = if end == start {
            next_char_boundary(subject, start)
        } else {
            end
        };
    }

    log::trace!(
        "pattern {:?} produced {} matches over {} bytes",
        pattern.as_str(),
        matches.count(),
        subject.len()
    );

    Ok(matches)
}

fn to_record(caps: &Captures<'_>) -> Option<MatchRecord> {
    let whole = caps.get(0)?;
    let groups = caps
        .iter()
        .skip(1)
        .map(|group| group.map(|m| m.as_str().to_string()))
        .collect();
    Some(MatchRecord::new(whole.as_str(), whole.start(), whole.end(), groups))
}

/// Offset of the character following the one at `offset`; past the end of the
/// subject this is simply `offset + 1`.
fn next_char_boundary(subject: &str, offset: usize) -> usize {
    subject
        .get(offset..)
        .and_then(|rest| rest.chars().next())
        .map_or(offset + 1, |c| offset + c.len_utf8())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::compiler::compile;
    use crate::error::EngineError;
    use crate::guard::CancelToken;

    fn spans(matches: &MatchSet) -> Vec<(usize, usize)> {
        matches.iter().map(|m| (m.start, m.end)).collect()
    }

    #[test]
    fn test_exhaustive_matches() {
        let pattern = compile("a+", false).unwrap();
        let matches = iterate(&pattern, "banana", SearchMode::Exhaustive);
        assert_eq!(spans(&matches), vec![(1, 2), (3, 4), (5, 6)]);
        assert!(matches.iter().all(|m| m.text == "a"));
    }

    #[test]
    fn test_first_only_with_groups() {
        let pattern = compile(r"(\d+)-(\d+)", false).unwrap();
        let matches = iterate(&pattern, "range 10-20 end", SearchMode::FirstOnly);
        assert_eq!(matches.count(), 1);

        let m = matches.first().unwrap();
        assert_eq!(m.text, "10-20");
        assert_eq!((m.start, m.end), (6, 11));
        assert_eq!(
            m.groups,
            vec![Some("10".to_string()), Some("20".to_string())]
        );
    }

    #[test]
    fn test_first_only_stops_after_one() {
        let pattern = compile(r"\d", false).unwrap();
        let matches = iterate(&pattern, "1 2 3", SearchMode::FirstOnly);
        assert_eq!(spans(&matches), vec![(0, 1)]);
    }

    #[test]
    fn test_case_insensitive_exhaustive() {
        let pattern = compile("ABC", true).unwrap();
        let matches = iterate(&pattern, "abcABC", SearchMode::Exhaustive);
        assert_eq!(spans(&matches), vec![(0, 3), (3, 6)]);
    }

    #[test]
    fn test_zero_width_matches_visit_every_position() {
        let pattern = compile("a*", false).unwrap();
        let matches = iterate(&pattern, "bb", SearchMode::Exhaustive);
        assert_eq!(spans(&matches), vec![(0, 0), (1, 1), (2, 2)]);
        assert!(matches.iter().all(|m| m.text.is_empty()));
    }

    #[test]
    fn test_empty_match_after_non_empty_match_is_kept() {
        let pattern = compile("a*", false).unwrap();
        let matches = iterate(&pattern, "baab", SearchMode::Exhaustive);
        assert_eq!(spans(&matches), vec![(0, 0), (1, 3), (3, 3), (4, 4)]);
    }

    #[test]
    fn test_zero_width_advance_respects_multibyte_characters() {
        let pattern = compile("x*", false).unwrap();
        let matches = iterate(&pattern, "é\u{1F600}", SearchMode::Exhaustive);
        assert_eq!(spans(&matches), vec![(0, 0), (2, 2), (6, 6)]);
    }

    #[test]
    fn test_empty_subject() {
        let pattern = compile("x", false).unwrap();
        assert!(iterate(&pattern, "", SearchMode::Exhaustive).is_empty());

        let pattern = compile("x*", false).unwrap();
        let matches = iterate(&pattern, "", SearchMode::Exhaustive);
        assert_eq!(spans(&matches), vec![(0, 0)]);
    }

    #[test]
    fn test_word_boundaries() {
        let pattern = compile(r"\b", false).unwrap();
        let matches = iterate(&pattern, "ab cd", SearchMode::Exhaustive);
        assert_eq!(spans(&matches), vec![(0, 0), (2, 2), (3, 3), (5, 5)]);
    }

    #[test]
    fn test_anchor_does_not_rematch_after_cursor_moves() {
        let pattern = compile("^a", false).unwrap();
        let matches = iterate(&pattern, "aaa", SearchMode::Exhaustive);
        assert_eq!(spans(&matches), vec![(0, 1)]);
    }

    #[test]
    fn test_non_participating_group_is_absent() {
        let pattern = compile("(a)|(b)", false).unwrap();
        let matches = iterate(&pattern, "b", SearchMode::FirstOnly);
        assert_eq!(matches.first().unwrap().groups, vec![None, Some("b".to_string())]);
    }

    #[test]
    fn test_empty_group_is_not_absent() {
        let pattern = compile("x(y*)", false).unwrap();
        let matches = iterate(&pattern, "x", SearchMode::FirstOnly);
        assert_eq!(matches.first().unwrap().groups, vec![Some(String::new())]);
    }

    #[test]
    fn test_no_match() {
        let pattern = compile("z", false).unwrap();
        assert!(iterate(&pattern, "banana", SearchMode::Exhaustive).is_empty());
        assert!(iterate(&pattern, "banana", SearchMode::FirstOnly).is_empty());
    }

    #[test]
    fn test_guarded_without_limits_matches_unguarded() {
        let pattern = compile(r"\w+", false).unwrap();
        let guarded =
            iterate_guarded(&pattern, "one two", SearchMode::Exhaustive, &MatchGuard::unlimited())
                .unwrap();
        assert_eq!(guarded, iterate(&pattern, "one two", SearchMode::Exhaustive));
    }

    #[test]
    fn test_cancelled_guard_returns_no_partial_set() {
        let pattern = compile("a", false).unwrap();
        let token = CancelToken::new();
        token.cancel();
        let guard = MatchGuard::unlimited().with_cancel(token);
        let result = iterate_guarded(&pattern, "aaaa", SearchMode::Exhaustive, &guard);
        assert_eq!(result, Err(EngineError::Cancelled));
    }

    #[test]
    fn test_expired_budget_times_out() {
        let pattern = compile("a", false).unwrap();
        let guard = MatchGuard::unlimited().with_budget(Duration::ZERO);
        let result = iterate_guarded(&pattern, "aaaa", SearchMode::Exhaustive, &guard);
        assert!(matches!(result, Err(EngineError::MatchTimeout { .. })));
    }
}
