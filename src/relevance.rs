use crate::classifier::Classification;
use crate::config::IcpConfig;

const FUNCTION_POINTS: i32 = 40;
const ADJACENT_FUNCTION_POINTS: i32 = 20;
const SENIORITY_POINTS: i32 = 25;
const NEAR_SENIORITY_POINTS: i32 = 10;
const COMPANY_TYPE_POINTS: i32 = 20;
const ADJACENT_COMPANY_TYPE_POINTS: i32 = 10;
const GEO_POINTS: i32 = 10;
const KEYWORD_POINTS: i32 = 5;
const KEYWORD_CAP: i32 = 10;
const MAX_SCORE: i32 = 100;

pub const EXCLUDED_SCORE: i32 = -100;
pub const EXCLUDED_REASON: &str = "Excluded";
const NO_MATCH_REASON: &str = "NoMatch";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelevanceScore {
    pub score: i32,
    pub reason: String,
}

/// Additive ICP fit. Every rule is checked; each axis awards either its full
/// or its partial credit, never both.
pub fn score_profile(icp: &IcpConfig, profile: &Classification, title: &str) -> RelevanceScore {
    let mut score = 0;
    let mut reasons: Vec<String> = Vec::new();

    if icp.target_functions.contains(&profile.role_function) {
        score += FUNCTION_POINTS;
        reasons.push("Function".to_string());
    } else if icp.adjacent_functions.contains(&profile.role_function) {
        score += ADJACENT_FUNCTION_POINTS;
        reasons.push("Function(partial)".to_string());
    }

    if icp.target_seniority.contains(&profile.seniority) {
        score += SENIORITY_POINTS;
        reasons.push("Seniority".to_string());
    } else if icp.near_seniority.contains(&profile.seniority) {
        score += NEAR_SENIORITY_POINTS;
        reasons.push("Seniority(near)".to_string());
    }

    if icp.target_company_types.contains(&profile.company_type) {
        score += COMPANY_TYPE_POINTS;
        reasons.push("CompanyType".to_string());
    } else if icp.adjacent_company_types.contains(&profile.company_type) {
        score += ADJACENT_COMPANY_TYPE_POINTS;
        reasons.push("CompanyType(adjacent)".to_string());
    }

    if icp.target_geographies.contains(&profile.geography) {
        score += GEO_POINTS;
        reasons.push("Geo".to_string());
    }

    let keyword_score = keyword_points(&icp.post_keywords, title);
    if keyword_score > 0 {
        score += keyword_score;
        reasons.push(format!("Keywords(+{keyword_score})"));
    }

    RelevanceScore {
        score: score.min(MAX_SCORE),
        reason: if reasons.is_empty() {
            NO_MATCH_REASON.to_string()
        } else {
            reasons.join("+")
        },
    }
}

fn keyword_points(keywords: &[String], title: &str) -> i32 {
    let title = title.to_lowercase();
    let hits = keywords
        .iter()
        .filter(|keyword| title.contains(&keyword.to_lowercase()))
        .count();
    (hits as i32 * KEYWORD_POINTS).min(KEYWORD_CAP)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CompanyType, Geography, RoleFunction, Seniority};

    fn profile(
        role_function: RoleFunction,
        seniority: Seniority,
        company_type: CompanyType,
        geography: Geography,
    ) -> Classification {
        Classification {
            company: None,
            role_function,
            seniority,
            company_type,
            geography,
            excluded: false,
        }
    }

    #[test]
    fn full_icp_match_is_capped_at_one_hundred() {
        let icp = IcpConfig::default();
        let p = profile(
            RoleFunction::Climate,
            Seniority::CLevel,
            CompanyType::ClimateTech,
            Geography::Nordics,
        );
        let result = score_profile(&icp, &p, "Chief Climate Officer, carbon and sustainability");
        assert_eq!(result.score, 100);
        assert_eq!(
            result.reason,
            "Function+Seniority+CompanyType+Geo+Keywords(+10)"
        );
    }

    #[test]
    fn partial_credit_tags() {
        let icp = IcpConfig::default();
        let p = profile(
            RoleFunction::Sales,
            Seniority::Manager,
            CompanyType::Consulting,
            Geography::Apac,
        );
        let result = score_profile(&icp, &p, "Sales Manager");
        assert_eq!(result.score, 40);
        assert_eq!(
            result.reason,
            "Function(partial)+Seniority(near)+CompanyType(adjacent)"
        );
    }

    #[test]
    fn nothing_matching_reports_no_match() {
        let icp = IcpConfig::default();
        let p = profile(
            RoleFunction::General,
            Seniority::Mid,
            CompanyType::Other,
            Geography::Unknown,
        );
        let result = score_profile(&icp, &p, "Gardener");
        assert_eq!(result.score, 0);
        assert_eq!(result.reason, "NoMatch");
    }

    #[test]
    fn keyword_bonus_is_five_per_hit_up_to_ten() {
        let icp = IcpConfig::default();
        let p = profile(
            RoleFunction::General,
            Seniority::Mid,
            CompanyType::Other,
            Geography::Unknown,
        );
        let one = score_profile(&icp, &p, "Resilience nerd");
        assert_eq!(one.score, 5);
        assert_eq!(one.reason, "Keywords(+5)");
        let three = score_profile(&icp, &p, "climate, carbon and resilience");
        assert_eq!(three.score, 10);
        assert_eq!(three.reason, "Keywords(+10)");
    }

    #[test]
    fn adding_an_icp_axis_never_lowers_the_score() {
        let icp = IcpConfig::default();
        let base = profile(
            RoleFunction::Sales,
            Seniority::Manager,
            CompanyType::Tech,
            Geography::Unknown,
        );
        let base_score = score_profile(&icp, &base, "x").score;

        let upgrades = [
            Classification {
                role_function: RoleFunction::Finance,
                ..base.clone()
            },
            Classification {
                seniority: Seniority::Vp,
                ..base.clone()
            },
            Classification {
                company_type: CompanyType::Fintech,
                ..base.clone()
            },
            Classification {
                geography: Geography::Europe,
                ..base.clone()
            },
        ];
        for upgraded in upgrades {
            let result = score_profile(&icp, &upgraded, "x");
            assert!(result.score >= base_score);
            assert!((0..=100).contains(&result.score));
        }
    }
}
