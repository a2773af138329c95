//! Flashcard synthesis from a structured summary.
//!
//! Four independent strategies (question/answer, cloze, term-definition
//! pairs, action-item cards) whose combined output is deduplicated by
//! normalized front text.

use std::collections::HashSet;

use regex::Regex;

use crate::summarize::{extract_keywords, Summary};

use super::models::{CardType, FlashcardDraft};

const MAX_CLOZE_CARDS: usize = 10;
const MAX_TERM_CARDS: usize = 10;
const MAX_STRATEGY_TAGS: usize = 3;

/// Keywords considered per sentence when picking a cloze target.
const CLOZE_KEYWORD_POOL: usize = 3;

/// Token shown in place of the masked keyword on a cloze front.
const CLOZE_PLACEHOLDER: &str = "_____";

/// Key points longer than this many tokens get the quoted-stem question
/// form; shorter ones just get "Explain:".
const QA_STEM_TOKENS: usize = 3;
const QA_QUOTE_TOKENS: usize = 5;

/// Synthesize flashcard drafts from a summary.
///
/// Strategy outputs are concatenated in a fixed order and deduplicated by
/// case- and whitespace-normalized front text; the first occurrence wins.
pub fn synthesize_flashcards(summary: &Summary) -> Vec<FlashcardDraft> {
    let mut drafts = Vec::new();
    drafts.extend(qa_cards(summary));
    drafts.extend(cloze_cards(summary));
    drafts.extend(term_cards(summary));
    drafts.extend(action_item_cards(summary));

    let mut seen = HashSet::new();
    drafts
        .into_iter()
        .filter(|d| seen.insert(normalize_front(&d.front)))
        .collect()
}

/// One question/answer card per key point.
fn qa_cards(summary: &Summary) -> Vec<FlashcardDraft> {
    let tags = strategy_tags(summary);
    summary
        .key_points
        .iter()
        .map(|point| {
            let words: Vec<&str> = point.split_whitespace().collect();
            let front = if words.len() > QA_STEM_TOKENS {
                let stem = words[..QA_QUOTE_TOKENS.min(words.len())].join(" ");
                format!("What is the key point about: \"{}...\"?", stem)
            } else {
                format!("Explain: {}", point)
            };
            FlashcardDraft::new(CardType::Qa, front, point.clone()).with_tags(tags.clone())
        })
        .collect()
}

/// Cloze cards over highlights and key points: mask the strongest keyword
/// of each sentence. Sentences without a usable keyword are skipped.
fn cloze_cards(summary: &Summary) -> Vec<FlashcardDraft> {
    let tags = strategy_tags(summary);

    // Highlights first, then key points not already present.
    let mut sentences: Vec<&String> = summary.highlights.iter().collect();
    for point in &summary.key_points {
        if !sentences.contains(&point) {
            sentences.push(point);
        }
    }

    let mut cards = Vec::new();
    for sentence in sentences {
        if cards.len() >= MAX_CLOZE_CARDS {
            break;
        }
        let keywords = extract_keywords(sentence, CLOZE_KEYWORD_POOL);
        let Some(keyword) = keywords.first() else {
            continue;
        };

        let whole_word = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(keyword))).unwrap();
        if !whole_word.is_match(sentence) {
            continue;
        }
        let front = whole_word.replace_all(sentence, CLOZE_PLACEHOLDER).to_string();
        cards.push(
            FlashcardDraft::new(CardType::Cloze, front, keyword.clone()).with_tags(tags.clone()),
        );
    }

    cards
}

/// Term-definition pairs: for each topic, the first key point mentioning it
/// becomes its definition, emitted in both directions.
fn term_cards(summary: &Summary) -> Vec<FlashcardDraft> {
    let mut cards = Vec::new();
    for topic in &summary.topics {
        if cards.len() >= MAX_TERM_CARDS {
            break;
        }
        let needle = topic.to_lowercase();
        let Some(definition) = summary
            .key_points
            .iter()
            .find(|p| p.to_lowercase().contains(&needle))
        else {
            continue;
        };

        cards.push(
            FlashcardDraft::new(CardType::TermDef, format!("Define: {}", topic), definition.clone())
                .with_tags(vec![topic.clone()]),
        );
        if cards.len() < MAX_TERM_CARDS {
            cards.push(
                FlashcardDraft::new(CardType::DefTerm, definition.clone(), topic.clone())
                    .with_tags(vec![topic.clone()]),
            );
        }
    }

    cards
}

/// One card per action item, asking who owns what.
fn action_item_cards(summary: &Summary) -> Vec<FlashcardDraft> {
    summary
        .action_items
        .iter()
        .map(|item| {
            let front = format!("What action item was assigned to {}?", item.owner);
            let back = match &item.due {
                Some(due) => format!("{} (due: {})", item.task, due),
                None => item.task.clone(),
            };
            FlashcardDraft::new(CardType::Qa, front, back)
                .with_tags(vec!["action-item".to_string()])
        })
        .collect()
}

fn strategy_tags(summary: &Summary) -> Vec<String> {
    summary.topics.iter().take(MAX_STRATEGY_TAGS).cloned().collect()
}

fn normalize_front(front: &str) -> String {
    front.to_lowercase().split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::ActionItem;

    fn summary_with(
        key_points: &[&str],
        highlights: &[&str],
        topics: &[&str],
        action_items: Vec<ActionItem>,
    ) -> Summary {
        Summary {
            key_points: key_points.iter().map(|s| s.to_string()).collect(),
            highlights: highlights.iter().map(|s| s.to_string()).collect(),
            topics: topics.iter().map(|s| s.to_string()).collect(),
            action_items,
            ..Default::default()
        }
    }

    #[test]
    fn test_qa_card_forms() {
        let summary = summary_with(
            &["Revenue grew by fifteen percent last quarter.", "Ship it soon."],
            &[],
            &["Revenue"],
            vec![],
        );
        let drafts = synthesize_flashcards(&summary);
        let qa: Vec<_> = drafts.iter().filter(|d| d.card_type == CardType::Qa).collect();

        assert!(qa[0]
            .front
            .starts_with("What is the key point about: \"Revenue grew by fifteen percent...\""));
        assert_eq!(qa[0].back, "Revenue grew by fifteen percent last quarter.");
        assert_eq!(qa[1].front, "Explain: Ship it soon.");
    }

    #[test]
    fn test_qa_tags_capped_at_three() {
        let summary = summary_with(
            &["The budget platform migration hiring review happened."],
            &[],
            &["Budget", "Platform", "Migration", "Hiring"],
            vec![],
        );
        let drafts = synthesize_flashcards(&summary);
        let qa = drafts.iter().find(|d| d.card_type == CardType::Qa).unwrap();
        assert_eq!(qa.tags, vec!["Budget", "Platform", "Migration"]);
    }

    #[test]
    fn test_cloze_masks_strongest_keyword() {
        let summary = summary_with(
            &[],
            &["The platform needs a platform owner for the rollout."],
            &[],
            vec![],
        );
        let drafts = synthesize_flashcards(&summary);
        let cloze = drafts.iter().find(|d| d.card_type == CardType::Cloze).unwrap();
        assert_eq!(cloze.back, "platform");
        assert_eq!(
            cloze.front,
            "The _____ needs a _____ owner for the rollout."
        );
    }

    #[test]
    fn test_cloze_skips_sentences_without_keywords() {
        let summary = summary_with(&[], &["Uh hm, so, the and of it."], &[], vec![]);
        let drafts = synthesize_flashcards(&summary);
        assert!(drafts.iter().all(|d| d.card_type != CardType::Cloze));
    }

    #[test]
    fn test_cloze_capped_at_ten() {
        let highlights: Vec<String> = (0..15)
            .map(|i| format!("Milestone number{} covers the delivery checkpoint fully.", i))
            .collect();
        let refs: Vec<&str> = highlights.iter().map(String::as_str).collect();
        let summary = summary_with(&[], &refs, &[], vec![]);
        let drafts = synthesize_flashcards(&summary);
        let cloze_count = drafts.iter().filter(|d| d.card_type == CardType::Cloze).count();
        assert!(cloze_count <= 10);
    }

    #[test]
    fn test_term_cards_mirror_pair() {
        let summary = summary_with(
            &["The budget covers platform work through June."],
            &[],
            &["Budget"],
            vec![],
        );
        let drafts = synthesize_flashcards(&summary);

        let term_def = drafts.iter().find(|d| d.card_type == CardType::TermDef).unwrap();
        assert_eq!(term_def.front, "Define: Budget");
        assert_eq!(term_def.back, "The budget covers platform work through June.");

        let def_term = drafts.iter().find(|d| d.card_type == CardType::DefTerm).unwrap();
        assert_eq!(def_term.front, "The budget covers platform work through June.");
        assert_eq!(def_term.back, "Budget");
        assert_eq!(def_term.tags, vec!["Budget"]);
    }

    #[test]
    fn test_term_cards_skip_unmatched_topics() {
        let summary = summary_with(
            &["Nothing about that term appears here."],
            &[],
            &["Zeppelin"],
            vec![],
        );
        let drafts = synthesize_flashcards(&summary);
        assert!(drafts.iter().all(|d| d.card_type != CardType::TermDef));
    }

    #[test]
    fn test_action_item_cards() {
        let items = vec![
            ActionItem::new("Alice", "prepare the Q2 budget report").with_due(Some("Friday".into())),
            ActionItem::new("Bob", "send the notes"),
        ];
        let summary = summary_with(&[], &[], &[], items);
        let drafts = synthesize_flashcards(&summary);

        assert_eq!(drafts[0].front, "What action item was assigned to Alice?");
        assert_eq!(drafts[0].back, "prepare the Q2 budget report (due: Friday)");
        assert_eq!(drafts[0].tags, vec!["action-item"]);
        assert_eq!(drafts[1].back, "send the notes");
    }

    #[test]
    fn test_no_duplicate_normalized_fronts() {
        // The same sentence as highlight and key point would produce one QA
        // and one cloze card with different fronts, but duplicate sources
        // must never yield duplicate fronts.
        let sentence = "The platform migration budget was approved today.";
        let summary = summary_with(
            &[sentence, sentence],
            &[sentence],
            &["Platform"],
            vec![
                ActionItem::new("Alice", "review the platform migration"),
                ActionItem::new("Alice", "review the platform migration again"),
            ],
        );
        let drafts = synthesize_flashcards(&summary);

        let mut seen = HashSet::new();
        for draft in &drafts {
            assert!(seen.insert(normalize_front(&draft.front)), "dup: {}", draft.front);
        }
    }

    #[test]
    fn test_empty_summary_yields_no_cards() {
        assert!(synthesize_flashcards(&Summary::default()).is_empty());
    }
}
