use std::fmt::Write;

use chrono::NaiveDateTime;

use crate::models::{Geography, PostFeatures, ProfileRecord, RoleFunction, Seniority};
use crate::recommend;

pub const HIGH_VALUE_SCORE: i32 = 70;
const RULE: &str =
    "================================================================================";
const PREVIEW_CHARS: usize = 200;

#[derive(Debug, Clone, PartialEq)]
pub struct AudienceSummary {
    pub total: usize,
    pub valid: usize,
    pub excluded: usize,
    pub high_value: usize,
    pub average_score: Option<f64>,
    pub functions: Vec<(RoleFunction, usize)>,
    pub seniority: Vec<(Seniority, usize)>,
    pub geographies: Vec<(Geography, usize)>,
}

impl AudienceSummary {
    /// Share of valid profiles scoring at least [`HIGH_VALUE_SCORE`].
    pub fn high_value_rate(&self) -> Option<f64> {
        (self.valid > 0).then(|| self.high_value as f64 / self.valid as f64 * 100.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Strong,
    Moderate,
    Weak,
}

impl Alignment {
    pub fn from_rate(rate: f64) -> Self {
        if rate >= 30.0 {
            Alignment::Strong
        } else if rate >= 15.0 {
            Alignment::Moderate
        } else {
            Alignment::Weak
        }
    }

    fn label(self) -> &'static str {
        match self {
            Alignment::Strong => "STRONG",
            Alignment::Moderate => "MODERATE",
            Alignment::Weak => "WEAK",
        }
    }

    fn advice(self) -> &'static str {
        match self {
            Alignment::Strong => {
                "This post is resonating with your ICP. Continue similar content."
            }
            Alignment::Moderate => "Consider refining targeting or post theme.",
            Alignment::Weak => "Review content strategy and targeting approach.",
        }
    }
}

/// Counts per value, most frequent first; ties keep first-seen order.
fn top_counts<T: Copy + PartialEq>(
    values: impl Iterator<Item = T>,
    limit: usize,
) -> Vec<(T, usize)> {
    let mut counts: Vec<(T, usize)> = Vec::new();
    for value in values {
        match counts.iter_mut().find(|(seen, _)| *seen == value) {
            Some(entry) => entry.1 += 1,
            None => counts.push((value, 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(limit);
    counts
}

pub fn summarize_audience(records: &[ProfileRecord]) -> AudienceSummary {
    let valid: Vec<&ProfileRecord> = records.iter().filter(|r| !r.excluded).collect();
    let average_score = if valid.is_empty() {
        None
    } else {
        let total: f64 = valid.iter().map(|r| r.score as f64).sum();
        Some(total / valid.len() as f64)
    };

    AudienceSummary {
        total: records.len(),
        valid: valid.len(),
        excluded: records.len() - valid.len(),
        high_value: records
            .iter()
            .filter(|r| r.score >= HIGH_VALUE_SCORE)
            .count(),
        average_score,
        functions: top_counts(valid.iter().map(|r| r.role_function), 5),
        seniority: top_counts(valid.iter().map(|r| r.seniority), 5),
        geographies: top_counts(valid.iter().map(|r| r.geography), 5),
    }
}

fn write_recommendations(output: &mut String, features: &PostFeatures) {
    let items = recommend::recommendations(features);
    let _ = writeln!(output);
    if items.len() == 1 && items[0] == recommend::WELL_OPTIMIZED {
        let _ = writeln!(output, "{}", recommend::WELL_OPTIMIZED);
        return;
    }
    let _ = writeln!(output, "RECOMMENDATIONS:");
    for item in items {
        let _ = writeln!(output, "• {item}");
    }
}

fn write_distribution<T: std::fmt::Display>(
    output: &mut String,
    heading: &str,
    counts: &[(T, usize)],
    valid: usize,
) {
    let _ = writeln!(output, "{heading}:");
    for (value, count) in counts {
        let _ = writeln!(
            output,
            "  - {}: {} ({:.1}%)",
            value,
            count,
            *count as f64 / valid as f64 * 100.0
        );
    }
    let _ = writeln!(output);
}

pub fn build_post_report(text: &str, features: &PostFeatures) -> String {
    let mut output = String::new();
    let preview: String = text.chars().take(PREVIEW_CHARS).collect();
    let ellipsis = if text.chars().count() > PREVIEW_CHARS {
        "..."
    } else {
        ""
    };

    let _ = writeln!(output, "{RULE}");
    let _ = writeln!(output, "LINKEDIN POST PERFORMANCE ANALYSIS");
    let _ = writeln!(output, "{RULE}");
    let _ = writeln!(output);
    let _ = writeln!(output, "POST PREVIEW:");
    let _ = writeln!(output, "{preview}{ellipsis}");
    let _ = writeln!(output);
    let _ = writeln!(output, "{RULE}");
    let _ = writeln!(output, "FEATURE PROFILE");
    let _ = writeln!(output, "{RULE}");
    let _ = writeln!(output);
    let _ = writeln!(output, "Basic Metrics:");
    let _ = writeln!(output, "   Word count: {}", features.word_count);
    let _ = writeln!(output, "   Character count: {}", features.char_count);
    let _ = writeln!(output, "   Post length: {}", features.post_length_category);
    let _ = writeln!(output);
    let _ = writeln!(output, "Engagement Elements:");
    let _ = writeln!(output, "   Has question: {}", features.has_question);
    let _ = writeln!(output, "   Question count: {}", features.question_count);
    let _ = writeln!(output, "   Call to action: {}", features.has_call_to_action);
    let _ = writeln!(output);
    let _ = writeln!(output, "Formatting:");
    let _ = writeln!(output, "   Hashtags: {}", features.hashtag_count);
    let _ = writeln!(output, "   Emojis: {}", features.emoji_count);
    let _ = writeln!(output, "   Paragraphs: {}", features.paragraph_count);
    let _ = writeln!(output, "   Line breaks: {}", features.has_line_breaks);
    let _ = writeln!(output);
    let _ = writeln!(output, "Links & Mentions:");
    let _ = writeln!(output, "   External link: {}", features.has_external_link);
    let _ = writeln!(output, "   Link count: {}", features.link_count);
    let _ = writeln!(output, "   Mentions: {}", features.mentions_count);
    let _ = writeln!(output);
    let _ = writeln!(output, "Style Indicators:");
    let _ = writeln!(output, "   ALL CAPS words: {}", features.all_caps_words);
    let _ = writeln!(
        output,
        "   Exclamation marks: {}",
        features.exclamation_count
    );
    let _ = writeln!(output);
    let _ = writeln!(output, "{RULE}");
    let _ = writeln!(output, "PERFORMANCE PREDICTION");
    let _ = writeln!(output, "{RULE}");
    let _ = writeln!(output);
    let _ = writeln!(
        output,
        "Predicted Performance: {}",
        features.predicted_performance.as_str().to_uppercase()
    );
    let _ = writeln!(
        output,
        "Performance Score: {}/100",
        features.performance_score
    );
    let _ = writeln!(output, "Score Factors: {}", features.performance_reason);
    write_recommendations(&mut output, features);

    output
}

pub struct ReportInput<'a> {
    pub generated_at: NaiveDateTime,
    pub post_url: Option<&'a str>,
    pub post: Option<&'a PostFeatures>,
    /// Sorted as the batch pipeline leaves them.
    pub audience: Option<&'a [ProfileRecord]>,
}

pub fn build_report(input: &ReportInput<'_>) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "{RULE}");
    let _ = writeln!(
        output,
        "LINKEDIN AUDIENCE INTELLIGENCE & POST PERFORMANCE REPORT"
    );
    let _ = writeln!(output, "{RULE}");
    let _ = writeln!(output);
    let _ = writeln!(
        output,
        "Generated: {}",
        input.generated_at.format("%Y-%m-%d %H:%M:%S")
    );
    if let Some(url) = input.post_url {
        let _ = writeln!(output, "Post URL: {url}");
    }
    let _ = writeln!(output);

    if let Some(features) = input.post {
        let _ = writeln!(output, "{RULE}");
        let _ = writeln!(output, "POST PERFORMANCE ANALYSIS");
        let _ = writeln!(output, "{RULE}");
        let _ = writeln!(output);
        let _ = writeln!(
            output,
            "Performance Prediction: {}",
            features.predicted_performance.as_str().to_uppercase()
        );
        let _ = writeln!(
            output,
            "Performance Score: {}/100",
            features.performance_score
        );
        let _ = writeln!(output, "Score Factors: {}", features.performance_reason);
        let _ = writeln!(output);
        let _ = writeln!(output, "Feature Summary:");
        let _ = writeln!(output, "  - Word count: {}", features.word_count);
        let _ = writeln!(output, "  - Has question: {}", features.has_question);
        let _ = writeln!(output, "  - Hashtags: {}", features.hashtag_count);
        let _ = writeln!(output, "  - Emojis: {}", features.emoji_count);
        let _ = writeln!(output, "  - External link: {}", features.has_external_link);
        let _ = writeln!(
            output,
            "  - Call to action: {}",
            features.has_call_to_action
        );
        write_recommendations(&mut output, features);
    }

    let summary = input.audience.map(summarize_audience);

    if let (Some(records), Some(summary)) = (input.audience, summary.as_ref()) {
        let _ = writeln!(output);
        let _ = writeln!(output, "{RULE}");
        let _ = writeln!(output, "AUDIENCE INTELLIGENCE ANALYSIS");
        let _ = writeln!(output, "{RULE}");
        let _ = writeln!(output);
        let _ = writeln!(output, "Total profiles analyzed: {}", summary.total);
        let _ = writeln!(output, "Valid profiles: {}", summary.valid);
        let _ = writeln!(output, "Excluded profiles: {}", summary.excluded);
        let _ = writeln!(output);

        if let (Some(average), Some(rate)) = (summary.average_score, summary.high_value_rate()) {
            let _ = writeln!(output, "Average relevance score: {average:.1}/100");
            let _ = writeln!(
                output,
                "High-value profiles (>={HIGH_VALUE_SCORE}): {} ({rate:.1}%)",
                summary.high_value
            );
            let _ = writeln!(output);
            write_distribution(
                &mut output,
                "Top Functions",
                &summary.functions,
                summary.valid,
            );
            write_distribution(
                &mut output,
                "Seniority Distribution",
                &summary.seniority,
                summary.valid,
            );
            write_distribution(
                &mut output,
                "Geography Distribution",
                &summary.geographies,
                summary.valid,
            );

            let _ = writeln!(output, "{RULE}");
            let _ = writeln!(output, "TOP 10 HIGHEST-VALUE PROSPECTS");
            let _ = writeln!(output, "{RULE}");
            let _ = writeln!(output);
            let top = records.iter().filter(|r| !r.excluded).take(10);
            for (rank, record) in top.enumerate() {
                let _ = writeln!(
                    output,
                    "{}. {} (Score: {})",
                    rank + 1,
                    record.name,
                    record.score
                );
                let _ = writeln!(output, "   {}", record.title);
                let _ = writeln!(
                    output,
                    "   {} | {} | {} | {}",
                    record.seniority, record.role_function, record.company_type, record.geography
                );
                let _ = writeln!(output, "   Reason: {}", record.score_reason);
                let _ = writeln!(output);
            }
        }
    }

    if let (Some(features), Some(summary)) = (input.post, summary.as_ref()) {
        let _ = writeln!(output);
        let _ = writeln!(output, "{RULE}");
        let _ = writeln!(output, "STRATEGIC INSIGHTS & RECOMMENDATIONS");
        let _ = writeln!(output, "{RULE}");
        let _ = writeln!(output);
        let _ = writeln!(output, "Post-Audience Alignment:");

        if let Some(rate) = summary.high_value_rate() {
            let alignment = Alignment::from_rate(rate);
            let _ = writeln!(
                output,
                "{} alignment: {rate:.1}% high-value audience",
                alignment.label()
            );
            let _ = writeln!(output, "   {}", alignment.advice());
            let _ = writeln!(output);
        }

        if features.performance_score < HIGH_VALUE_SCORE {
            let _ = writeln!(output, "Content Optimization Priority:");
            let _ = writeln!(
                output,
                "  Focus on improving post structure to increase reach."
            );
            let _ = writeln!(output, "  Higher reach = more potential ICP engagement.");
            let _ = writeln!(output);
        }

        let priority: Vec<&str> = summary
            .functions
            .iter()
            .take(3)
            .map(|(function, _)| function.as_str())
            .collect();
        let _ = writeln!(output, "Engagement Strategy:");
        let _ = writeln!(output, "  Priority functions: {}", priority.join(", "));
        let _ = writeln!(output, "  - Engage directly with C-level and VP profiles");
        let _ = writeln!(output, "  - Create follow-up content for these functions");
        let _ = writeln!(output, "  - Consider targeted ads to similar profiles");
        let _ = writeln!(output);
    }

    output
}
