//! Card search adapter over spark-db.
//!
//! Pulls a candidate working set with a LIKE filter (every token must appear
//! somewhere in the name) and re-ranks it in memory with the relevance
//! scorer, so the database never needs to know the scoring rules.

use spark_core::entities::Card;
use spark_core::responses::{RankedCard, RankedCardsResponse};
use spark_db::SparkDb;

use crate::error::SearchError;
use crate::rank::{compare_names, score_name, tokenize};

/// Upper bound on the candidate working set pulled from the database.
const CANDIDATE_CAP: u32 = 1000;

/// Ranked name search over the card table.
///
/// An empty query lists cards alphabetically, unscored, up to `limit`.
///
/// # Errors
///
/// Returns [`SearchError::Database`] when candidate lookup fails.
pub async fn search_cards(
    db: &SparkDb,
    query: &str,
    limit: u32,
) -> Result<RankedCardsResponse, SearchError> {
    let tokens = tokenize(query);

    if tokens.is_empty() {
        let cards = db.list_cards_alphabetical(limit).await?;
        let results: Vec<RankedCard> = cards.iter().map(|card| to_ranked(card, 0)).collect();
        return Ok(respond(query, results));
    }

    let candidates = db.candidates_by_tokens(&tokens, CANDIDATE_CAP).await?;
    tracing::debug!(candidates = candidates.len(), %query, "ranking candidates");

    let mut scored: Vec<(Card, i64)> = candidates
        .into_iter()
        .filter_map(|card| score_name(&tokens, &card.name).map(|score| (card, score)))
        .collect();
    scored.sort_by(|(a, score_a), (b, score_b)| {
        score_b
            .cmp(score_a)
            .then_with(|| compare_names(&a.name, &b.name))
    });
    scored.truncate(limit as usize);

    let results: Vec<RankedCard> = scored
        .iter()
        .map(|(card, score)| to_ranked(card, *score))
        .collect();
    Ok(respond(query, results))
}

fn to_ranked(card: &Card, score: i64) -> RankedCard {
    RankedCard {
        uuid: card.uuid.clone(),
        name: card.name.clone(),
        set_code: card.set_code.clone(),
        rarity: card.rarity.clone(),
        type_line: card.type_line.clone(),
        score,
    }
}

fn respond(query: &str, results: Vec<RankedCard>) -> RankedCardsResponse {
    RankedCardsResponse {
        query: query.to_string(),
        total_results: results.len() as u32,
        results,
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use spark_core::entities::Card;
    use spark_db::SparkDb;

    use super::search_cards;

    async fn db_with_names(names: &[(&str, &str)]) -> SparkDb {
        let db = SparkDb::open_local(":memory:").await.unwrap();
        for (uuid, name) in names {
            let card = Card::new(*uuid, *name, Utc::now());
            db.upsert_cards(&[card]).await.unwrap();
        }
        db
    }

    #[tokio::test]
    async fn ranked_search_end_to_end() {
        let db = db_with_names(&[
            ("u1", "Lightning Bolt"),
            ("u2", "Boltwing Hatchling"),
            ("u3", "Chain Lightning"),
        ])
        .await;

        let response = search_cards(&db, "bolt", 10).await.unwrap();
        let names: Vec<_> = response.results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Lightning Bolt", "Boltwing Hatchling"]);
        assert!(response.results[0].score > response.results[1].score);
        assert_eq!(response.total_results, 2);
    }

    #[tokio::test]
    async fn empty_query_lists_alphabetically_unscored() {
        let db = db_with_names(&[("u1", "Zap"), ("u2", "Ambush Viper"), ("u3", "Cure")]).await;

        let response = search_cards(&db, "", 10).await.unwrap();
        let names: Vec<_> = response.results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Ambush Viper", "Cure", "Zap"]);
        assert!(response.results.iter().all(|r| r.score == 0));
    }

    #[tokio::test]
    async fn limit_truncates_after_ranking() {
        let db = db_with_names(&[
            ("u1", "Bolt of Zeal"),
            ("u2", "Lightning Bolt"),
            ("u3", "Boltwing Hatchling"),
        ])
        .await;

        let response = search_cards(&db, "bolt", 1).await.unwrap();
        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].name, "Lightning Bolt");
    }
}
