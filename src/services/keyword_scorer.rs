//! Keyword-based scoring strategy.
//!
//! Each of an agent's keywords that appears in the message (case-insensitive
//! substring match) contributes its weight once, plus a positional bonus
//! when the keyword shows up in the opening tokens of the message, plus a
//! bounded repetition bonus for extra occurrences.

use crate::domain::models::{AgentProfile, RoutingConfig};
use crate::domain::ports::ScoringStrategy;

/// Scoring strategy over weighted keywords.
#[derive(Debug, Clone)]
pub struct KeywordScorer {
    config: RoutingConfig,
}

impl KeywordScorer {
    pub fn new(config: RoutingConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(RoutingConfig::default())
    }
}

impl Default for KeywordScorer {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl ScoringStrategy for KeywordScorer {
    fn raw_score(&self, message: &str, agent: &AgentProfile) -> f64 {
        let lowered = message.to_lowercase();
        let opening_end = opening_window_end(&lowered, self.config.first_token_window);

        let mut score = 0.0;
        for keyword in &agent.keywords {
            let term = keyword.term.to_lowercase();
            if term.is_empty() {
                continue;
            }

            let occurrences = lowered.match_indices(&term).count();
            if occurrences == 0 {
                continue;
            }

            let mut contribution = keyword.weight;

            // "The user opened by naming the domain": bonus when the first
            // occurrence falls inside the opening token window.
            if let Some(first) = lowered.find(&term) {
                if first < opening_end {
                    contribution += self.config.positional_bonus;
                }
            }

            // Diminishing repetition bonus: flat per extra occurrence,
            // capped at the keyword's own weight so doubling occurrences
            // never more than doubles the contribution.
            if occurrences > 1 {
                #[allow(clippy::cast_precision_loss)]
                let extra = (occurrences - 1) as f64 * self.config.repetition_bonus;
                contribution += extra.min(keyword.weight);
            }

            score += contribution;
        }

        score
    }
}

/// Byte offset of the end of the first `tokens` whitespace-separated
/// tokens of `text`. Returns `text.len()` when the message is shorter.
fn opening_window_end(text: &str, tokens: usize) -> usize {
    if tokens == 0 {
        return 0;
    }

    let mut completed = 0;
    let mut in_token = false;
    for (idx, ch) in text.char_indices() {
        if ch.is_whitespace() {
            if in_token {
                completed += 1;
                in_token = false;
                if completed == tokens {
                    return idx;
                }
            }
        } else {
            in_token = true;
        }
    }
    text.len()
}
