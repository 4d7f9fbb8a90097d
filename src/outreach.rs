use crate::error::IntelError;
use crate::models::{OutreachPriority, ProfileRecord, Prospect};

pub const DEFAULT_MIN_SCORE: i32 = 70;

/// Non-excluded profiles at or above `min_score`, in input order, each tagged
/// with an outreach priority. An empty selection is reported as
/// [`IntelError::NoProspects`] so callers can treat it as a no-op.
pub fn select_prospects(
    records: &[ProfileRecord],
    min_score: i32,
) -> Result<Vec<Prospect>, IntelError> {
    let prospects: Vec<Prospect> = records
        .iter()
        .filter(|r| !r.excluded && r.score >= min_score)
        .map(|r| Prospect {
            name: r.name.clone(),
            title: r.title.clone(),
            company: r.company.clone(),
            role_function: r.role_function,
            seniority: r.seniority,
            score: r.score,
            outreach_priority: OutreachPriority::for_seniority(r.seniority),
            score_reason: r.score_reason.clone(),
        })
        .collect();

    if prospects.is_empty() {
        return Err(IntelError::NoProspects { min_score });
    }
    Ok(prospects)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriorityCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

pub fn priority_counts(prospects: &[Prospect]) -> PriorityCounts {
    prospects
        .iter()
        .fold(PriorityCounts::default(), |mut counts, p| {
            match p.outreach_priority {
                OutreachPriority::High => counts.high += 1,
                OutreachPriority::Medium => counts.medium += 1,
                OutreachPriority::Low => counts.low += 1,
            }
            counts
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CompanyType, Geography, RoleFunction, Seniority};

    fn record(name: &str, seniority: Seniority, score: i32, excluded: bool) -> ProfileRecord {
        ProfileRecord {
            name: name.to_string(),
            title: "title".to_string(),
            company: "Unknown".to_string(),
            role_function: RoleFunction::Finance,
            seniority,
            company_type: CompanyType::Other,
            geography: Geography::Unknown,
            score,
            score_reason: "Function".to_string(),
            excluded,
        }
    }

    #[test]
    fn threshold_is_inclusive_and_skips_excluded() {
        let records = vec![
            record("a", Seniority::CLevel, 95, false),
            record("b", Seniority::Director, 70, false),
            record("c", Seniority::Manager, 69, false),
            record("d", Seniority::Vp, -100, true),
        ];
        let prospects = select_prospects(&records, DEFAULT_MIN_SCORE).unwrap();
        let names: Vec<&str> = prospects.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(prospects[0].outreach_priority, OutreachPriority::High);
        assert_eq!(prospects[1].outreach_priority, OutreachPriority::Medium);
    }

    #[test]
    fn empty_selection_is_reported() {
        let records = vec![record("c", Seniority::Manager, 40, false)];
        let err = select_prospects(&records, 70).unwrap_err();
        assert!(matches!(err, IntelError::NoProspects { min_score: 70 }));
    }

    #[test]
    fn counts_by_priority() {
        let records = vec![
            record("a", Seniority::CLevel, 90, false),
            record("b", Seniority::Vp, 90, false),
            record("c", Seniority::Director, 90, false),
            record("d", Seniority::Senior, 90, false),
        ];
        let prospects = select_prospects(&records, 0).unwrap();
        assert_eq!(
            priority_counts(&prospects),
            PriorityCounts {
                high: 2,
                medium: 1,
                low: 1
            }
        );
    }
}
