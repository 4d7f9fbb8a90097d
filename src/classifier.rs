use std::sync::LazyLock;

use regex::Regex;

use crate::config::{AnalysisConfig, KeywordGroup};
use crate::models::{CompanyType, Geography, RoleFunction, Seniority};

/// Tried in order; the first one that matches supplies the company.
static COMPANY_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)@\s*([^|]+?)(?:\s*\||$)",
        r"(?i)\bat\b\s+([^|]+?)(?:\s*\||$)",
        r"(?i)på\s+([^|]+?)(?:\s*\||$)",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("valid company regex"))
    .collect()
});

pub const UNKNOWN_COMPANY: &str = "Unknown";

/// "Stripe, leading climate strategy" names "Stripe"; the rest is role text.
fn leading_name(company: &str) -> &str {
    let end = [company.find(','), company.find(" - ")]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(company.len());
    company[..end].trim()
}

pub fn extract_company(title: &str) -> Option<&str> {
    COMPANY_PATTERNS.iter().find_map(|re| {
        re.captures(title)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim())
    })
}

// Plain substring search, no word boundaries: "pm" also hits "development".
fn first_match<T: Copy>(groups: &[KeywordGroup<T>], text: &str) -> Option<T> {
    let text = text.to_lowercase();
    groups.iter().find_map(|group| {
        group
            .keywords
            .iter()
            .any(|keyword| text.contains(&keyword.to_lowercase()))
            .then_some(group.category)
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub company: Option<String>,
    pub role_function: RoleFunction,
    pub seniority: Seniority,
    pub company_type: CompanyType,
    pub geography: Geography,
    pub excluded: bool,
}

impl Classification {
    pub fn company_label(&self) -> &str {
        self.company.as_deref().unwrap_or(UNKNOWN_COMPANY)
    }
}

pub struct Classifier<'a> {
    config: &'a AnalysisConfig,
}

impl<'a> Classifier<'a> {
    pub fn new(config: &'a AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn classify_function(&self, text: &str) -> RoleFunction {
        first_match(&self.config.dictionaries.functions, text).unwrap_or(RoleFunction::General)
    }

    pub fn classify_seniority(&self, text: &str) -> Seniority {
        first_match(&self.config.dictionaries.seniority, text).unwrap_or(Seniority::Mid)
    }

    pub fn classify_company_type(&self, title: &str, company: &str) -> CompanyType {
        first_match(
            &self.config.dictionaries.company_types,
            &format!("{title} {company}"),
        )
        .unwrap_or(CompanyType::Other)
    }

    pub fn classify_geography(&self, text: &str) -> Geography {
        first_match(&self.config.dictionaries.geographies, text).unwrap_or(Geography::Unknown)
    }

    pub fn is_excluded(&self, title: &str, company: &str) -> bool {
        let text = format!("{title} {company}").to_lowercase();
        self.config
            .exclusions
            .iter()
            .any(|keyword| text.contains(&keyword.to_lowercase()))
    }

    /// Function and seniority read the title with the company's leading name
    /// cut out, so "VP GTM @ TechCorp" is not a technology role.
    pub fn classify(&self, title: &str) -> Classification {
        let company = extract_company(title);
        let role_text = match company.map(leading_name) {
            Some(name) if !name.is_empty() => title.replacen(name, "", 1),
            _ => title.to_string(),
        };
        let company_label = company.unwrap_or(UNKNOWN_COMPANY);

        Classification {
            company: company.map(str::to_string),
            role_function: self.classify_function(&role_text),
            seniority: self.classify_seniority(&role_text),
            company_type: self.classify_company_type(title, company_label),
            geography: self.classify_geography(title),
            excluded: self.is_excluded(title, company_label),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Dictionaries;

    fn classify(title: &str) -> Classification {
        let config = AnalysisConfig::default();
        Classifier::new(&config).classify(title)
    }

    #[test]
    fn vp_gtm_title_is_sales_vp() {
        let result = classify("VP GTM @ TechCorp | Board Advisor");
        assert_eq!(result.company.as_deref(), Some("TechCorp"));
        assert_eq!(result.role_function, RoleFunction::Sales);
        assert_eq!(result.seniority, Seniority::Vp);
    }

    #[test]
    fn role_words_after_the_company_name_still_count() {
        let climate = classify("VP at Stripe, leading climate strategy");
        assert_eq!(
            climate.company.as_deref(),
            Some("Stripe, leading climate strategy")
        );
        assert_eq!(climate.role_function, RoleFunction::Climate);
        assert_eq!(climate.seniority, Seniority::Vp);

        let sales = classify("Founder at Acme - sales lead | Oslo");
        assert_eq!(sales.company_label(), "Acme - sales lead");
        assert_eq!(sales.role_function, RoleFunction::Sales);

        let gtm = classify("VP GTM @ TechCorp | Board Advisor");
        assert_eq!(gtm.role_function, RoleFunction::Sales);
    }

    #[test]
    fn leading_name_stops_at_first_separator() {
        assert_eq!(leading_name("Stripe, leading climate strategy"), "Stripe");
        assert_eq!(leading_name("Acme - sales, EMEA"), "Acme");
        assert_eq!(leading_name("TechCorp"), "TechCorp");
        assert_eq!(leading_name(", Acme"), "");
    }

    #[test]
    fn head_of_climate_at_klarna() {
        let result = classify("Head of Climate and Environment at Klarna");
        assert_eq!(result.company_label(), "Klarna");
        assert_eq!(result.role_function, RoleFunction::Climate);
        assert_eq!(result.seniority, Seniority::Director);
        assert_eq!(result.company_type, CompanyType::Fintech);
    }

    #[test]
    fn more_titles_from_real_exports() {
        let risk = classify("Global Lead, Risk & Compliance @ Klarna");
        assert_eq!(risk.company_label(), "Klarna");
        assert_eq!(risk.role_function, RoleFunction::Risk);
        assert_eq!(risk.seniority, Seniority::Manager);

        let cso = classify("Chief Sustainability Officer | Climate Tech Investor");
        assert_eq!(cso.company_label(), UNKNOWN_COMPANY);
        assert_eq!(cso.role_function, RoleFunction::Climate);
        assert_eq!(cso.seniority, Seniority::CLevel);

        let eng = classify("Senior Engineering Manager @ Klarna | Applied AI");
        assert_eq!(eng.company_label(), "Klarna");
        assert_eq!(eng.role_function, RoleFunction::Technology);
        assert_eq!(eng.seniority, Seniority::Manager);
    }

    #[test]
    fn company_pattern_order_wins() {
        assert_eq!(extract_company("Analyst at Bank @ Fund"), Some("Fund"));
        assert_eq!(extract_company("Ekonom på Volvo | Göteborg"), Some("Volvo"));
        assert_eq!(
            extract_company("Consultant at   Deloitte  "),
            Some("Deloitte")
        );
        assert_eq!(extract_company("Freelance designer"), None);
    }

    #[test]
    fn at_requires_a_word_boundary() {
        assert_eq!(extract_company("Data Scientist"), None);
        assert_eq!(extract_company("Chatbot trainer"), None);
    }

    #[test]
    fn every_axis_has_a_default() {
        let result = classify("Gardener");
        assert_eq!(result.role_function, RoleFunction::General);
        assert_eq!(result.seniority, Seniority::Mid);
        assert_eq!(result.company_type, CompanyType::Other);
        assert_eq!(result.geography, Geography::Unknown);
        assert!(!result.excluded);

        let empty = classify("");
        assert_eq!(empty.role_function, RoleFunction::General);
        assert_eq!(empty.company_label(), UNKNOWN_COMPANY);
    }

    #[test]
    fn earliest_declared_category_wins() {
        let config = AnalysisConfig::default();
        let classifier = Classifier::new(&config);
        // finance is declared before technology
        assert_eq!(
            classifier.classify_function("software engineer, treasury"),
            RoleFunction::Finance
        );
        // cfo sits in finance before executive
        assert_eq!(classifier.classify_function("CFO"), RoleFunction::Finance);
        // vp is declared before director
        assert_eq!(
            classifier.classify_seniority("Head of Sales, VP track"),
            Seniority::Vp
        );
        // "director" contains "cto"
        assert_eq!(classifier.classify_seniority("Director"), Seniority::CLevel);
        assert_eq!(
            classifier.classify_geography("Based in Stockholm, working across EMEA"),
            Geography::Nordics
        );
    }

    #[test]
    fn substring_matches_inside_words() {
        let config = AnalysisConfig::default();
        let classifier = Classifier::new(&config);
        // "pm" inside "development" lands in product, "us" inside "business" in north_america
        assert_eq!(
            classifier.classify_function("Development"),
            RoleFunction::Product
        );
        assert_eq!(
            classifier.classify_geography("Business"),
            Geography::NorthAmerica
        );
    }

    #[test]
    fn company_type_reads_title_and_company() {
        let config = AnalysisConfig::default();
        let classifier = Classifier::new(&config);
        assert_eq!(
            classifier.classify_company_type("Engineer", "Google"),
            CompanyType::Tech
        );
        assert_eq!(
            classifier.classify_company_type("Partner, Green Fund", "Unknown"),
            CompanyType::Finance
        );
    }

    #[test]
    fn exclusion_is_case_insensitive() {
        let config = AnalysisConfig::default();
        let classifier = Classifier::new(&config);
        assert!(classifier.is_excluded("SPAM account", "Unknown"));
        assert!(classifier.is_excluded("Growth lead", "ChatBot Labs"));
        assert!(!classifier.is_excluded("Growth lead", "Klarna"));
    }

    #[test]
    fn substituted_dictionaries_drive_classification() {
        let mut config = AnalysisConfig::default();
        config.dictionaries = Dictionaries {
            functions: vec![KeywordGroup {
                category: RoleFunction::Hr,
                keywords: vec!["Gardener".to_string()],
            }],
            ..Dictionaries::default()
        };
        let classifier = Classifier::new(&config);
        assert_eq!(
            classifier.classify_function("Head gardener"),
            RoleFunction::Hr
        );
        assert_eq!(classifier.classify_function("CFO"), RoleFunction::General);
    }

    #[test]
    fn classification_is_repeatable() {
        let title = "SVP Treasury at Nordea | Stockholm";
        assert_eq!(classify(title), classify(title));
    }
}
