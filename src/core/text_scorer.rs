//! Text scorer: heuristic authenticity score from lexical and structural signals
//!
//! Starts at 50, subtracts penalties for machine-like traits and adds
//! bonuses for human-like traits, then clamps to [0, 100].

use std::collections::HashSet;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;
use crate::{
    NEUTRAL_SCORE, PENALTY_REPETITION, PENALTY_AI_PHRASE,
    PENALTY_CONSISTENT_FORMATTING, PENALTY_PERFECT_PUNCTUATION,
    PENALTY_COMPLEX_WORDS, PENALTY_SHORT_TEXT, BONUS_SENTENCE_VARIETY,
    BONUS_PERSONAL_PRONOUNS, BONUS_INFORMAL_LANGUAGE,
    BONUS_EMOTIONAL_EXPRESSION, BONUS_CONTRACTIONS, BONUS_NATURAL_TRANSITIONS,
    SHORT_TEXT_FLOOR, SENTENCE_VARIETY_TOLERANCE,
};
use crate::types::{ScanError, ScanResult, ScoreResult, TextSignals, clamp_score};

/// Transition and formal phrases typical of generated prose
pub const AI_PHRASES: &[&str] = &[
    "in conclusion",
    "moreover",
    "furthermore",
    "nevertheless",
    "therefore",
    "it is important to note",
    "it is worth noting",
    "additionally",
    "consequently",
    "in summary",
    "to summarize",
    "thus",
    "hence",
    "notably",
    "in addition",
    "as a result",
    "ultimately",
    "overall",
];

/// Terminal punctuation that ends a sentence
const SENTENCE_TERMINATORS: &[char] = &['.', '!', '?'];

lazy_static! {
    // One matcher per phrase so each counts at most once
    static ref RE_AI_PHRASES: Vec<Regex> = AI_PHRASES
        .iter()
        .map(|phrase| {
            Regex::new(&format!(r"(?i)\b{}\b", regex::escape(phrase)))
                .expect("AI phrase pattern is valid")
        })
        .collect();

    static ref RE_PERSONAL_PRONOUNS: Regex = Regex::new(
        r"(?i)\b(i|me|my|mine|myself|we|us|our|ours|ourselves)\b"
    ).expect("pronoun pattern is valid");

    static ref RE_INFORMAL: Regex = Regex::new(
        r"(?i)\b(gonna|wanna|gotta|kinda|sorta|yeah|yep|nope|nah|lol|lmao|omg|btw|tbh|idk|imo|hey|ok|okay|cool|awesome|stuff|dude|guys)\b"
    ).expect("informal pattern is valid");

    // Repeated !/?, ellipses, emoji
    static ref RE_EMOTIONAL: Regex = Regex::new(
        r"[!?]{2,}|\.{3}|…|[\x{1F300}-\x{1FAFF}\x{2600}-\x{27BF}]"
    ).expect("emotional pattern is valid");

    static ref RE_CONTRACTIONS: Regex = Regex::new(
        r"(?i)\b[a-z]+['’](t|s|re|ve|ll|d|m)\b"
    ).expect("contraction pattern is valid");

    static ref RE_NATURAL_TRANSITIONS: Regex = Regex::new(
        r"(?i)\b(but|and|so|yet|or|anyway|though|although|still|also|plus|then)\b"
    ).expect("transition pattern is valid");

    static ref RE_COMPLEX_WORDS: Regex = Regex::new(
        r"(?i)\b(utiliz(e|ed|es|ing|ation)|methodolog(y|ies)|aforementioned|subsequently|facilitat(e|ed|es|ing)|comprehensive|paradigm|leverag(e|ed|es|ing)|optimal|optimiz(e|ed|es|ing|ation)|implementation|nuanced|multifaceted|intricate|pivotal|delve|tapestry|holistic|synergy|robust)\b"
    ).expect("complex vocabulary pattern is valid");
}

/// Heuristic text authenticity scorer
#[derive(Debug, Default, Clone, Copy)]
pub struct TextScorer;

impl TextScorer {
    /// Create new scorer
    pub fn new() -> Self {
        Self
    }

    /// Score text and return the result with full signal breakdown.
    ///
    /// Fails with [`ScanError::EmptyInput`] when the text has no words or
    /// no non-empty sentence fragments.
    pub fn score(&self, text: &str) -> ScanResult<ScoreResult> {
        let text = text.trim();

        let words: Vec<&str> = text.split_whitespace().collect();
        let sentences = split_sentences(text);
        if words.is_empty() || sentences.is_empty() {
            return Err(ScanError::EmptyInput);
        }

        let signals = self.extract_signals(text, &words, &sentences);
        let char_count = text.chars().count();
        let raw = raw_score(&signals, char_count);
        let score = clamp_score(raw);

        debug!(
            raw,
            score,
            words = words.len(),
            sentences = sentences.len(),
            ai_patterns = signals.ai_pattern_count,
            "scored text sample"
        );

        Ok(ScoreResult::new(
            score,
            build_indicators(&signals),
            signals,
            words.len(),
            sentences.len(),
            char_count,
        ))
    }

    /// Quick score - just the clamped authenticity score
    pub fn quick_score(&self, text: &str) -> ScanResult<f64> {
        self.score(text).map(|result| result.score)
    }

    fn extract_signals(&self, text: &str, words: &[&str], sentences: &[&str]) -> TextSignals {
        let wc = words.len() as f64;

        let unique: HashSet<String> = words.iter().map(|w| w.to_lowercase()).collect();
        let repetition_score = (wc - unique.len() as f64) / wc;

        TextSignals {
            repetition_score,
            sentence_length_variety: has_length_variety(sentences),
            ai_pattern_count: RE_AI_PHRASES.iter().filter(|re| re.is_match(text)).count(),
            has_consistent_formatting: sentences.iter().all(|s| starts_uppercase(s)),
            has_perfect_punctuation: sentences
                .iter()
                .all(|s| s.trim_end().ends_with(SENTENCE_TERMINATORS)),
            has_personal_pronouns: RE_PERSONAL_PRONOUNS.is_match(text),
            has_informal_language: RE_INFORMAL.is_match(text),
            has_emotional_expression: RE_EMOTIONAL.is_match(text),
            has_contractions: RE_CONTRACTIONS.is_match(text),
            has_natural_transitions: RE_NATURAL_TRANSITIONS.is_match(text),
            complex_word_score: RE_COMPLEX_WORDS.find_iter(text).count() as f64 / wc,
        }
    }
}

/// Split on . ! ? keeping fragments untrimmed; whitespace-only fragments are dropped
fn split_sentences(text: &str) -> Vec<&str> {
    text.split(SENTENCE_TERMINATORS)
        .filter(|s| !s.trim().is_empty())
        .collect()
}

fn has_length_variety(sentences: &[&str]) -> bool {
    let lengths: Vec<f64> = sentences
        .iter()
        .map(|s| s.trim().chars().count() as f64)
        .collect();
    let mean = lengths.iter().sum::<f64>() / lengths.len() as f64;
    lengths
        .iter()
        .any(|len| (len - mean).abs() > mean * SENTENCE_VARIETY_TOLERANCE)
}

// A fragment after ". " begins with a space, so this fails for most multi-sentence text
fn starts_uppercase(fragment: &str) -> bool {
    fragment.chars().next().is_some_and(char::is_uppercase)
}

/// Weighted combination before clamping
fn raw_score(signals: &TextSignals, char_count: usize) -> f64 {
    let mut score = NEUTRAL_SCORE;

    score -= signals.repetition_score * PENALTY_REPETITION;
    score -= signals.ai_pattern_count as f64 * PENALTY_AI_PHRASE;
    if signals.has_consistent_formatting {
        score -= PENALTY_CONSISTENT_FORMATTING;
    }
    if signals.has_perfect_punctuation {
        score -= PENALTY_PERFECT_PUNCTUATION;
    }
    score -= signals.complex_word_score * PENALTY_COMPLEX_WORDS;

    if signals.sentence_length_variety {
        score += BONUS_SENTENCE_VARIETY;
    }
    if signals.has_personal_pronouns {
        score += BONUS_PERSONAL_PRONOUNS;
    }
    if signals.has_informal_language {
        score += BONUS_INFORMAL_LANGUAGE;
    }
    if signals.has_emotional_expression {
        score += BONUS_EMOTIONAL_EXPRESSION;
    }
    if signals.has_contractions {
        score += BONUS_CONTRACTIONS;
    }
    if signals.has_natural_transitions {
        score += BONUS_NATURAL_TRANSITIONS;
    }

    if char_count < SHORT_TEXT_FLOOR {
        let shortfall = (SHORT_TEXT_FLOOR - char_count) as f64 / SHORT_TEXT_FLOOR as f64;
        score -= shortfall * PENALTY_SHORT_TEXT;
    }

    score
}

/// Eight "<Label>: <Value>" lines in fixed order
fn build_indicators(signals: &TextSignals) -> Vec<String> {
    let repetition = if signals.repetition_score < 0.3 {
        "Low"
    } else if signals.repetition_score < 0.5 {
        "Moderate"
    } else {
        "High"
    };
    let ai_phrases = match signals.ai_pattern_count {
        0 => "None detected",
        1 | 2 => "Few detected",
        _ => "Many detected",
    };
    let complexity = if signals.complex_word_score < 0.05 {
        "Simple"
    } else if signals.complex_word_score < 0.10 {
        "Moderate"
    } else {
        "Elevated"
    };

    vec![
        format!("Word repetition: {}", repetition),
        format!("Sentence variety: {}", if signals.sentence_length_variety { "Natural" } else { "Uniform" }),
        format!("AI-typical phrases: {}", ai_phrases),
        format!("Personal voice: {}", present(signals.has_personal_pronouns)),
        format!("Informal language: {}", present(signals.has_informal_language)),
        format!("Emotional expression: {}", present(signals.has_emotional_expression)),
        format!("Contractions: {}", if signals.has_contractions { "Used" } else { "Not used" }),
        format!("Vocabulary complexity: {}", complexity),
    ]
}

fn present(flag: bool) -> &'static str {
    if flag { "Present" } else { "Absent" }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Classification;

    const FORMAL_SAMPLE: &str = "In conclusion, moreover, furthermore, therefore, it is important to note that the aforementioned methodology, the aforementioned methodology, the aforementioned methodology, was utilized.";

    #[test]
    fn test_empty_input_rejected() {
        let scorer = TextScorer::new();
        assert!(matches!(scorer.score(""), Err(ScanError::EmptyInput)));
        assert!(matches!(scorer.score("   \n\t"), Err(ScanError::EmptyInput)));
    }

    #[test]
    fn test_punctuation_only_has_no_sentences() {
        let scorer = TextScorer::new();
        assert!(matches!(scorer.score("...!?"), Err(ScanError::EmptyInput)));
    }

    #[test]
    fn test_formal_sample_scores_deepfake() {
        let result = TextScorer::new().score(FORMAL_SAMPLE).unwrap();
        assert_eq!(result.signals.ai_pattern_count, 5);
        assert!(result.signals.complex_word_score > 0.25, "got {}", result.signals.complex_word_score);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.classification(), Classification::Deepfake);
        assert_eq!(result.confidence(), 100);
    }

    #[test]
    fn test_repetition_score() {
        let scorer = TextScorer::new();
        let varied = scorer.score("apple banana cherry grape").unwrap();
        let repeated = scorer.score("apple apple apple apple").unwrap();
        assert_eq!(varied.signals.repetition_score, 0.0);
        assert!((repeated.signals.repetition_score - 0.75).abs() < 1e-9);
        assert!(repeated.score < varied.score);
    }

    #[test]
    fn test_repetition_is_case_insensitive() {
        let result = TextScorer::new().score("Echo echo ECHO").unwrap();
        assert!((result.signals.repetition_score - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_sentence_variety() {
        let scorer = TextScorer::new();
        let varied = scorer
            .score("Short one. This sentence is considerably longer than the first one was.")
            .unwrap();
        let uniform = scorer.score("The cat sat. The dog ran. The cow ate.").unwrap();
        assert!(varied.signals.sentence_length_variety);
        assert!(!uniform.signals.sentence_length_variety);
    }

    #[test]
    fn test_consistent_formatting_is_fragile() {
        let scorer = TextScorer::new();
        let spaced = scorer.score("Hello there. General Kenobi.").unwrap();
        let packed = scorer.score("Hello there.General Kenobi.").unwrap();
        assert!(!spaced.signals.has_consistent_formatting);
        assert!(packed.signals.has_consistent_formatting);
    }

    #[test]
    fn test_perfect_punctuation_never_after_split() {
        let result = TextScorer::new().score("One. Two! Three?").unwrap();
        assert!(!result.signals.has_perfect_punctuation);
    }

    #[test]
    fn test_boolean_detectors() {
        let scorer = TextScorer::new();
        let result = scorer
            .score("Yeah, I can't wait!! We're gonna love it, but it's far 😀")
            .unwrap();
        assert!(result.signals.has_personal_pronouns);
        assert!(result.signals.has_informal_language);
        assert!(result.signals.has_emotional_expression);
        assert!(result.signals.has_contractions);
        assert!(result.signals.has_natural_transitions);

        let flat = scorer.score("The report covers quarterly revenue figures.").unwrap();
        assert!(!flat.signals.has_personal_pronouns);
        assert!(!flat.signals.has_informal_language);
        assert!(!flat.signals.has_emotional_expression);
        assert!(!flat.signals.has_contractions);
        assert!(!flat.signals.has_natural_transitions);
    }

    #[test]
    fn test_ai_phrases_counted_once_each() {
        let result = TextScorer::new()
            .score("Moreover, this works. Moreover, that works. Therefore we rest.")
            .unwrap();
        assert_eq!(result.signals.ai_pattern_count, 2);
    }

    #[test]
    fn test_short_text_penalty() {
        let signals = TextSignals::zero();
        assert_eq!(raw_score(&signals, 200), 50.0);
        assert_eq!(raw_score(&signals, 500), 50.0);
        assert_eq!(raw_score(&signals, 100), 40.0);
        assert_eq!(raw_score(&signals, 0), 30.0);
    }

    #[test]
    fn test_indicators_fixed_order() {
        let result = TextScorer::new().score(FORMAL_SAMPLE).unwrap();
        let labels: Vec<&str> = result
            .indicators
            .iter()
            .map(|line| line.split(": ").next().unwrap())
            .collect();
        assert_eq!(
            labels,
            vec![
                "Word repetition",
                "Sentence variety",
                "AI-typical phrases",
                "Personal voice",
                "Informal language",
                "Emotional expression",
                "Contractions",
                "Vocabulary complexity",
            ]
        );
        assert_eq!(result.indicators[2], "AI-typical phrases: Many detected");
        assert_eq!(result.indicators[7], "Vocabulary complexity: Elevated");
    }

    #[test]
    fn test_determinism() {
        let scorer = TextScorer::new();
        let text = "I think this is fine, but honestly I'm not sure.";
        let s1 = scorer.quick_score(text).unwrap();
        let s2 = scorer.quick_score(text).unwrap();
        assert!((s1 - s2).abs() < 1e-10);
    }
}
