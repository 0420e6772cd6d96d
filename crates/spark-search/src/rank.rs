//! Relevance scoring for card-name queries.
//!
//! Pure and deterministic: the same (query, items) pair always produces the
//! same order, and inputs are never mutated. An item survives only if its
//! name contains every whitespace-separated query token as a
//! case-insensitive substring.
//!
//! The constants and their interaction are a deliberate product choice
//! carried over from user testing: interior matches outrank prefix matches,
//! and exact-word occurrences are counted both at full weight and again
//! inside the substring total. Do not normalize the double count.

use std::cmp::Ordering;

/// Weight per exact-word (word-boundary) occurrence of a token.
const WORD_WEIGHT: i64 = 10;
/// Extra confidence bonus per exact-word occurrence.
const WORD_BONUS: i64 = 10;
/// Weight per substring occurrence, exact-word occurrences included.
const PARTIAL_WEIGHT: i64 = 5;
/// Flat bonus when the token occurs but the name does not start with it.
const INTERIOR_BONUS: i64 = 50;
/// Layered on top of `INTERIOR_BONUS` when an interior occurrence is also
/// an exact word.
const INTERIOR_WORD_BONUS: i64 = 25;
/// Flat bonus when the name starts with the token.
const PREFIX_BONUS: i64 = 30;

/// Lowercased whitespace tokens of a query. Empty for blank queries.
#[must_use]
pub fn tokenize(query: &str) -> Vec<String> {
    query.split_whitespace().map(str::to_lowercase).collect()
}

/// Score `name` against pre-lowercased `tokens`.
///
/// Returns `None` when any token is missing from the name (AND semantics
/// across tokens). A null name upstream is scored as the empty string.
#[must_use]
pub fn score_name(tokens: &[String], name: &str) -> Option<i64> {
    let lowered = name.to_lowercase();
    let mut score = 0i64;

    for token in tokens {
        let occurrences = count_occurrences(&lowered, token);
        if occurrences == 0 {
            return None;
        }
        let word_occurrences = count_word_occurrences(&lowered, token);

        score += word_occurrences * (WORD_WEIGHT + WORD_BONUS);
        score += occurrences * PARTIAL_WEIGHT;

        if lowered.starts_with(token.as_str()) {
            score += PREFIX_BONUS;
        } else {
            score += INTERIOR_BONUS;
            if word_occurrences > 0 {
                score += INTERIOR_WORD_BONUS;
            }
        }
    }

    Some(score)
}

/// Order `items` by descending relevance to `query`.
///
/// Items missing any query token are excluded. Ties break alphabetically,
/// case-insensitively. An empty or whitespace-only query returns every item
/// in alphabetical order, unscored.
#[must_use]
pub fn rank_by_relevance<T, F>(query: &str, items: Vec<T>, name_of: F) -> Vec<T>
where
    F: Fn(&T) -> &str,
{
    let tokens = tokenize(query);

    if tokens.is_empty() {
        let mut items = items;
        items.sort_by(|a, b| compare_names(name_of(a), name_of(b)));
        return items;
    }

    let mut scored: Vec<(T, i64)> = items
        .into_iter()
        .filter_map(|item| score_name(&tokens, name_of(&item)).map(|score| (item, score)))
        .collect();

    scored.sort_by(|(a, score_a), (b, score_b)| {
        score_b
            .cmp(score_a)
            .then_with(|| compare_names(name_of(a), name_of(b)))
    });

    scored.into_iter().map(|(item, _)| item).collect()
}

/// Case-insensitive alphabetical order, raw comparison as the final
/// tie-break so equal-ignoring-case names still order deterministically.
pub(crate) fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Non-overlapping substring occurrences of `token` in `lowered`.
fn count_occurrences(lowered: &str, token: &str) -> i64 {
    lowered.match_indices(token).count() as i64
}

/// Occurrences of `token` delimited by non-alphanumeric characters (or the
/// string boundary) on both sides.
fn count_word_occurrences(lowered: &str, token: &str) -> i64 {
    lowered
        .match_indices(token)
        .filter(|(start, matched)| {
            let before_ok = lowered[..*start]
                .chars()
                .next_back()
                .is_none_or(|c| !c.is_alphanumeric());
            let after_ok = lowered[start + matched.len()..]
                .chars()
                .next()
                .is_none_or(|c| !c.is_alphanumeric());
            before_ok && after_ok
        })
        .count() as i64
}
