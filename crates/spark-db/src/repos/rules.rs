//! Comprehensive-rules repository — content-diffed upserts keyed by rule number.

use spark_core::entities::Rule;

use crate::SparkDb;
use crate::error::DatabaseError;
use crate::helpers::{parse_datetime, parse_string_list, string_list_to_text};

/// What an upsert actually did to the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleWriteOutcome {
    Inserted,
    Updated,
    /// The stored row already carried identical content; nothing was written.
    Unchanged,
}

fn row_to_rule(row: &libsql::Row) -> Result<Rule, DatabaseError> {
    Ok(Rule {
        rule_number: row.get::<String>(0)?,
        text: row.get::<String>(1)?,
        examples: parse_string_list(&row.get::<String>(2)?)?,
        keywords: parse_string_list(&row.get::<String>(3)?)?,
        chapter: row.get::<String>(4)?,
        updated_at: parse_datetime(&row.get::<String>(5)?)?,
    })
}

impl SparkDb {
    /// Upsert a rule by number, skipping the write when the stored content
    /// is identical.
    pub async fn upsert_rule(&self, rule: &Rule) -> Result<RuleWriteOutcome, DatabaseError> {
        let existing = match self.get_rule(&rule.rule_number).await {
            Ok(existing) => Some(existing),
            Err(DatabaseError::NoResult) => None,
            Err(error) => return Err(error),
        };

        if let Some(existing) = &existing {
            if existing.same_content(rule) {
                return Ok(RuleWriteOutcome::Unchanged);
            }
        }

        self.conn()
            .execute(
                "INSERT INTO rules (rule_number, text, examples, keywords, chapter, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                 ON CONFLICT(rule_number) DO UPDATE SET
                 text = excluded.text, examples = excluded.examples,
                 keywords = excluded.keywords, chapter = excluded.chapter,
                 updated_at = excluded.updated_at",
                libsql::params![
                    rule.rule_number.as_str(),
                    rule.text.as_str(),
                    string_list_to_text(&rule.examples)?,
                    string_list_to_text(&rule.keywords)?,
                    rule.chapter.as_str(),
                    rule.updated_at.to_rfc3339()
                ],
            )
            .await?;

        Ok(if existing.is_some() {
            RuleWriteOutcome::Updated
        } else {
            RuleWriteOutcome::Inserted
        })
    }

    /// Fetch one rule by its number (e.g. `"100.1a"`).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the number is unknown.
    pub async fn get_rule(&self, rule_number: &str) -> Result<Rule, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT rule_number, text, examples, keywords, chapter, updated_at
                 FROM rules WHERE rule_number = ?1",
                [rule_number],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_rule(&row)
    }

    /// All rules sharing a leading chapter number, in rule-number order.
    pub async fn list_rules_in_chapter(&self, chapter: &str) -> Result<Vec<Rule>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT rule_number, text, examples, keywords, chapter, updated_at
                 FROM rules WHERE chapter = ?1 ORDER BY rule_number",
                [chapter],
            )
            .await?;

        let mut rules = Vec::new();
        while let Some(row) = rows.next().await? {
            rules.push(row_to_rule(&row)?);
        }
        Ok(rules)
    }

    /// Total number of rule rows.
    pub async fn rule_count(&self) -> Result<i64, DatabaseError> {
        let mut rows = self.conn().query("SELECT COUNT(*) FROM rules", ()).await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<i64>(0)?)
    }
}
