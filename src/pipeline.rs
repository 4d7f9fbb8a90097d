use tracing::debug;

use crate::classifier::Classifier;
use crate::config::AnalysisConfig;
use crate::models::{ProfileRecord, ProfileRow};
use crate::relevance::{self, EXCLUDED_REASON, EXCLUDED_SCORE};

/// Titles containing this are follower-count lines, not profiles.
const NOISE_MARKER: &str = "followers";

#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    pub records: Vec<ProfileRecord>,
    pub noise_rows: usize,
}

impl BatchOutcome {
    pub fn excluded_count(&self) -> usize {
        self.records.iter().filter(|r| r.excluded).count()
    }

    pub fn high_value_count(&self, threshold: i32) -> usize {
        self.records.iter().filter(|r| r.score >= threshold).count()
    }
}

pub fn classify_row(config: &AnalysisConfig, row: &ProfileRow) -> ProfileRecord {
    let classifier = Classifier::new(config);
    let classification = classifier.classify(&row.title);

    let (score, score_reason) = if classification.excluded {
        (EXCLUDED_SCORE, EXCLUDED_REASON.to_string())
    } else {
        let relevance = relevance::score_profile(&config.icp, &classification, &row.title);
        (relevance.score, relevance.reason)
    };

    ProfileRecord {
        name: row.name.clone(),
        title: row.title.clone(),
        company: classification.company_label().to_string(),
        role_function: classification.role_function,
        seniority: classification.seniority,
        company_type: classification.company_type,
        geography: classification.geography,
        score,
        score_reason,
        excluded: classification.excluded,
    }
}

pub fn process_rows(config: &AnalysisConfig, rows: &[ProfileRow]) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();

    for row in rows {
        if row.title.to_lowercase().contains(NOISE_MARKER) {
            debug!(name = %row.name, "skipping follower-count row");
            outcome.noise_rows += 1;
            continue;
        }
        outcome.records.push(classify_row(config, row));
    }

    sort_records(&mut outcome.records);
    outcome
}

/// Score descending, then seniority rank ascending. Stable, so input order
/// breaks any remaining ties.
pub fn sort_records(records: &mut [ProfileRecord]) {
    records.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.seniority.rank().cmp(&b.seniority.rank()))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RoleFunction, Seniority};

    fn row(name: &str, title: &str) -> ProfileRow {
        ProfileRow {
            name: name.to_string(),
            title: title.to_string(),
        }
    }

    #[test]
    fn follower_rows_are_dropped() {
        let config = AnalysisConfig::default();
        let rows = vec![
            row("Acme Page", "12,400 Followers"),
            row("Avery Lee", "CFO at Nordea"),
        ];
        let outcome = process_rows(&config, &rows);
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.noise_rows, 1);
        assert_eq!(outcome.records[0].name, "Avery Lee");
    }

    #[test]
    fn excluded_rows_score_minus_one_hundred() {
        let config = AnalysisConfig::default();
        let title = "Chief Climate Officer, spam account @ Klarna Stockholm";
        let record = classify_row(&config, &row("Spammy", title));
        assert!(record.excluded);
        assert_eq!(record.score, -100);
        assert_eq!(record.score_reason, "Excluded");
        // axes are still filled in
        assert_eq!(record.role_function, RoleFunction::Climate);
        assert_eq!(record.seniority, Seniority::CLevel);
    }

    #[test]
    fn output_sorted_by_score_then_seniority() {
        let config = AnalysisConfig::default();
        let rows = vec![
            row("Manager", "Sales Manager"),
            row("Gardener", "Gardener"),
            row("Cfo", "CFO at Nordea Bank | Stockholm"),
            row("Bot", "bot"),
            row("Junior", "Junior Gardener"),
        ];
        let outcome = process_rows(&config, &rows);
        let names: Vec<&str> = outcome.records.iter().map(|r| r.name.as_str()).collect();
        // Gardener (mid) and Junior (entry) tie at 0; mid ranks first
        assert_eq!(names, vec!["Cfo", "Manager", "Gardener", "Junior", "Bot"]);

        for pair in outcome.records.windows(2) {
            assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                assert!(pair[0].seniority.rank() <= pair[1].seniority.rank());
            }
        }
        assert_eq!(outcome.excluded_count(), 1);
        assert_eq!(outcome.high_value_count(70), 1);
    }

    #[test]
    fn full_ties_keep_input_order() {
        let config = AnalysisConfig::default();
        let rows = vec![row("First", "Gardener"), row("Second", "Baker")];
        let outcome = process_rows(&config, &rows);
        assert_eq!(outcome.records[0].name, "First");
        assert_eq!(outcome.records[1].name, "Second");
    }

    #[test]
    fn scores_stay_in_range() {
        let config = AnalysisConfig::default();
        let titles = [
            "CEO & Founder @ Stripe | Climate, carbon, sustainability | Oslo",
            "Head of Risk at Nordea Bank | Stockholm",
            "",
            "Partner at McKinsey",
            "Spam bot",
        ];
        for title in titles {
            let record = classify_row(&config, &row("x", title));
            if record.excluded {
                assert_eq!(record.score, -100);
            } else {
                assert!(
                    (0..=100).contains(&record.score),
                    "{title}: {}",
                    record.score
                );
            }
        }
    }
}
