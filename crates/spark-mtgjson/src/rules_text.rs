//! Parser for the comprehensive-rules plain-text dump.
//!
//! The dump is line-oriented: numbered entries (`100.1.`, `100.1a`) begin a
//! rule, unnumbered lines continue the previous rule's wrapped text, and
//! `Example:` lines attach to the preceding rule. Section headings (`100.`,
//! `1.`) and the trailing `Glossary`/`Credits` sections carry no rule
//! content.

use chrono::{DateTime, Utc};
use spark_core::entities::Rule;

/// Ability words recognized as keyword tags when they appear in rule text.
const ABILITY_WORDS: &[&str] = &[
    "deathtouch",
    "defender",
    "double strike",
    "first strike",
    "flash",
    "flying",
    "haste",
    "hexproof",
    "indestructible",
    "lifelink",
    "menace",
    "protection",
    "reach",
    "trample",
    "vigilance",
    "ward",
    "cascade",
    "convoke",
    "cycling",
    "flashback",
    "kicker",
    "landfall",
    "morph",
    "mutate",
    "prowess",
    "scry",
    "storm",
];

/// Parse the whole dump into rule entries, in source order.
#[must_use]
pub fn parse_comprehensive_rules(text: &str, now: DateTime<Utc>) -> Vec<Rule> {
    let mut rules: Vec<Rule> = Vec::new();
    let mut open = false;

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if trimmed == "Glossary" || trimmed == "Credits" {
            open = false;
            continue;
        }

        if let Some(example) = trimmed.strip_prefix("Example:") {
            if open {
                if let Some(rule) = rules.last_mut() {
                    rule.examples.push(example.trim().to_string());
                }
            }
            continue;
        }

        if is_section_heading(trimmed) {
            open = false;
            continue;
        }

        if let Some((number, body)) = split_rule_heading(trimmed) {
            let chapter = number
                .split('.')
                .next()
                .unwrap_or_default()
                .to_string();
            rules.push(Rule {
                rule_number: number,
                text: body,
                examples: Vec::new(),
                keywords: Vec::new(),
                chapter,
                updated_at: now,
            });
            open = true;
        } else if open {
            // wrapped continuation of the previous entry
            if let Some(rule) = rules.last_mut() {
                if !rule.text.is_empty() {
                    rule.text.push(' ');
                }
                rule.text.push_str(trimmed);
            }
        }
    }

    for rule in &mut rules {
        rule.keywords = detect_ability_words(&rule.text);
    }
    rules
}

/// A heading like `100. General` or `1. Game Concepts`: a bare chapter
/// number with no sub-rule component.
fn is_section_heading(line: &str) -> bool {
    let Some(token) = line.split_whitespace().next() else {
        return false;
    };
    let Some(number) = token.strip_suffix('.') else {
        return false;
    };
    !number.is_empty() && number.chars().all(|c| c.is_ascii_digit())
}

/// Split `100.1a Some text` / `100.1. Some text` into (`100.1a`, `Some text`).
fn split_rule_heading(line: &str) -> Option<(String, String)> {
    let (token, rest) = match line.split_once(char::is_whitespace) {
        Some((token, rest)) => (token, rest.trim()),
        None => (line, ""),
    };

    let token = token.strip_suffix('.').unwrap_or(token);
    let (chapter, tail) = token.split_once('.')?;
    if chapter.is_empty() || !chapter.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    // tail is digits optionally followed by a sub-rule letter: `1`, `1a`
    let mut digits_seen = false;
    for ch in tail.chars() {
        if ch.is_ascii_digit() {
            if !digits_seen {
                digits_seen = true;
            }
        } else if !(ch.is_ascii_lowercase() && digits_seen) {
            return None;
        }
    }
    if !digits_seen {
        return None;
    }

    Some((token.to_string(), rest.to_string()))
}

fn detect_ability_words(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    ABILITY_WORDS
        .iter()
        .filter(|word| lowered.contains(*word))
        .map(|word| (*word).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    use super::{parse_comprehensive_rules, split_rule_heading};

    const SAMPLE: &str = "\
Magic: The Gathering Comprehensive Rules

1. Game Concepts

100. General

100.1. These Magic rules apply to any Magic game with two or more players.
100.1a A two-player game is a game that begins with only
two players.
100.2. A card with flying can't be blocked except by creatures
with flying or reach.
Example: A creature with flying attacks.
Example: A second example line.

101. The Magic Golden Rules

101.1. Whenever a card's text directly contradicts these rules, the card takes precedence.

Glossary

Flying
A keyword ability.
";

    #[test]
    fn parses_numbered_entries_in_order() {
        let rules = parse_comprehensive_rules(SAMPLE, Utc::now());
        let numbers: Vec<_> = rules.iter().map(|r| r.rule_number.as_str()).collect();
        assert_eq!(numbers, vec!["100.1", "100.1a", "100.2", "101.1"]);
        assert_eq!(rules[0].chapter, "100");
        assert_eq!(rules[3].chapter, "101");
    }

    #[test]
    fn wrapped_lines_join_the_entry_text() {
        let rules = parse_comprehensive_rules(SAMPLE, Utc::now());
        assert_eq!(
            rules[1].text,
            "A two-player game is a game that begins with only two players."
        );
    }

    #[test]
    fn examples_attach_to_the_preceding_rule() {
        let rules = parse_comprehensive_rules(SAMPLE, Utc::now());
        assert!(rules[0].examples.is_empty());
        assert_eq!(
            rules[2].examples,
            vec![
                "A creature with flying attacks.".to_string(),
                "A second example line.".to_string()
            ]
        );
    }

    #[test]
    fn ability_words_become_keywords() {
        let rules = parse_comprehensive_rules(SAMPLE, Utc::now());
        assert!(rules[2].keywords.contains(&"flying".to_string()));
        assert!(rules[2].keywords.contains(&"reach".to_string()));
        assert!(rules[0].keywords.is_empty());
    }

    #[test]
    fn glossary_text_is_not_swallowed_as_continuation() {
        let rules = parse_comprehensive_rules(SAMPLE, Utc::now());
        assert!(
            !rules[3].text.contains("keyword ability"),
            "text after the Glossary marker must not join the last rule"
        );
    }

    #[test]
    fn heading_splitter_accepts_rule_shapes_only() {
        assert_eq!(
            split_rule_heading("100.1. Text here"),
            Some(("100.1".to_string(), "Text here".to_string()))
        );
        assert_eq!(
            split_rule_heading("100.1a Text"),
            Some(("100.1a".to_string(), "Text".to_string()))
        );
        assert_eq!(split_rule_heading("100. General"), None);
        assert_eq!(split_rule_heading("Not a rule line"), None);
        assert_eq!(split_rule_heading("100.a broken"), None);
    }
}
