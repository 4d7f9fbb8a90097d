use std::sync::LazyLock;

use regex::Regex;

use crate::config::PostRules;
use crate::models::{LengthCategory, Performance, PostFeatures};

static HASHTAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#\w+").expect("valid hashtag regex"));
static MENTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@\w+").expect("valid mention regex"));
static EMOJI_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        "[",
        r"\x{1F600}-\x{1F64F}",
        r"\x{1F300}-\x{1F5FF}",
        r"\x{1F680}-\x{1F6FF}",
        r"\x{1F1E0}-\x{1F1FF}",
        r"\x{2702}-\x{27B0}",
        r"\x{24C2}-\x{1F251}",
        "]+",
    ))
    .expect("valid emoji regex")
});
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"https?://(?:www\.)?[-a-zA-Z0-9@:%._+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b(?:[-a-zA-Z0-9()@:%_+.~#?&/=]*)",
    )
    .expect("valid link regex")
});

#[derive(Debug, Clone, PartialEq, Eq)]
struct TextCounts {
    word_count: usize,
    char_count: usize,
    question_count: usize,
    hashtag_count: usize,
    emoji_count: usize,
    link_count: usize,
    mentions_count: usize,
    all_caps_words: usize,
    exclamation_count: usize,
    paragraph_count: usize,
    has_line_breaks: bool,
    has_call_to_action: bool,
}

fn is_all_caps(word: &str) -> bool {
    word.chars().count() > 2
        && !word.starts_with('#')
        && word.chars().any(char::is_uppercase)
        && !word.chars().any(char::is_lowercase)
}

fn count_text(text: &str, rules: &PostRules) -> TextCounts {
    let lower = text.to_lowercase();
    let words: Vec<&str> = text.split_whitespace().collect();

    TextCounts {
        word_count: words.len(),
        char_count: text.chars().count(),
        question_count: text.matches('?').count(),
        hashtag_count: HASHTAG_RE.find_iter(text).count(),
        emoji_count: EMOJI_RE.find_iter(text).count(),
        link_count: LINK_RE.find_iter(text).count(),
        mentions_count: MENTION_RE.find_iter(text).count(),
        all_caps_words: words.iter().filter(|w| is_all_caps(w)).count(),
        exclamation_count: text.matches('!').count(),
        paragraph_count: text
            .split('\n')
            .filter(|line| !line.trim().is_empty())
            .count(),
        has_line_breaks: text.contains('\n'),
        has_call_to_action: rules
            .cta_phrases
            .iter()
            .any(|phrase| lower.contains(&phrase.to_lowercase())),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerformanceSignals {
    pub word_count: usize,
    pub hashtag_count: usize,
    pub has_question: bool,
    pub has_call_to_action: bool,
    pub paragraph_count: usize,
    pub emoji_count: usize,
    pub has_external_link: bool,
    pub engagement_words: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prediction {
    pub performance: Performance,
    pub score: i32,
    pub reason: String,
}

/// Distinct engagement-booster keywords present in the text.
pub fn engagement_word_count(text: &str, rules: &PostRules) -> usize {
    let lower = text.to_lowercase();
    rules
        .engagement_boosters
        .iter()
        .filter(|keyword| lower.contains(&keyword.to_lowercase()))
        .count()
}

pub fn predict_performance(signals: &PerformanceSignals) -> Prediction {
    let mut score = 0;
    let mut reasons: Vec<&str> = Vec::new();
    let mut award = |points: i32, tag: &'static str| {
        score += points;
        reasons.push(tag);
    };

    match signals.word_count {
        100..=200 => award(20, "OptimalLength"),
        50..=99 | 201..=300 => award(10, "GoodLength"),
        0..=49 => award(5, "TooShort"),
        _ => award(5, "TooLong"),
    }

    match signals.hashtag_count {
        3..=5 => award(15, "OptimalHashtags"),
        1..=2 | 6..=7 => award(8, "GoodHashtags"),
        0 => {}
        _ => award(3, "TooManyHashtags"),
    }

    if signals.has_question {
        award(15, "HasQuestion");
    }

    if signals.has_call_to_action {
        award(15, "HasCTA");
    }

    match signals.paragraph_count {
        3..=5 => award(10, "GoodStructure"),
        1..=2 => award(5, "SingleParagraph"),
        _ => {}
    }

    match signals.emoji_count {
        0 => {}
        1..=3 => award(10, "GoodEmojis"),
        _ => award(5, "ManyEmojis"),
    }

    if signals.has_external_link {
        award(10, "HasLink");
    }

    if signals.engagement_words >= 2 {
        award(5, "EngagementWords");
    }

    let score = score.clamp(0, 100);
    Prediction {
        performance: Performance::from_score(score),
        score,
        reason: if reasons.is_empty() {
            "NoOptimization".to_string()
        } else {
            reasons.join("+")
        },
    }
}

pub fn extract_features(text: &str, rules: &PostRules) -> PostFeatures {
    let counts = count_text(text, rules);
    let prediction = predict_performance(&PerformanceSignals {
        word_count: counts.word_count,
        hashtag_count: counts.hashtag_count,
        has_question: counts.question_count > 0,
        has_call_to_action: counts.has_call_to_action,
        paragraph_count: counts.paragraph_count,
        emoji_count: counts.emoji_count,
        has_external_link: counts.link_count > 0,
        engagement_words: engagement_word_count(text, rules),
    });

    PostFeatures {
        word_count: counts.word_count,
        char_count: counts.char_count,
        has_question: counts.question_count > 0,
        question_count: counts.question_count,
        hashtag_count: counts.hashtag_count,
        emoji_count: counts.emoji_count,
        has_external_link: counts.link_count > 0,
        link_count: counts.link_count,
        has_line_breaks: counts.has_line_breaks,
        paragraph_count: counts.paragraph_count,
        has_call_to_action: counts.has_call_to_action,
        mentions_count: counts.mentions_count,
        all_caps_words: counts.all_caps_words,
        exclamation_count: counts.exclamation_count,
        post_length_category: LengthCategory::from_word_count(counts.word_count),
        predicted_performance: prediction.performance,
        performance_score: prediction.score,
        performance_reason: prediction.reason,
    }
}
