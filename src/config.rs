use serde::{Deserialize, Serialize};

use crate::models::{CompanyType, Geography, RoleFunction, Seniority};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordGroup<T> {
    pub category: T,
    pub keywords: Vec<String>,
}

fn group<T>(category: T, keywords: &[&str]) -> KeywordGroup<T> {
    KeywordGroup {
        category,
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Ordered tables: the first category with a matching keyword wins, so
/// declaration order decides ties. JSON overrides keep the file's order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dictionaries {
    pub functions: Vec<KeywordGroup<RoleFunction>>,
    pub seniority: Vec<KeywordGroup<Seniority>>,
    pub company_types: Vec<KeywordGroup<CompanyType>>,
    pub geographies: Vec<KeywordGroup<Geography>>,
}

impl Default for Dictionaries {
    fn default() -> Self {
        Self {
            functions: vec![
                group(
                    RoleFunction::Climate,
                    &[
                        "climate",
                        "sustainability",
                        "esg",
                        "environmental",
                        "carbon",
                        "impact",
                    ],
                ),
                group(
                    RoleFunction::Finance,
                    &["finance", "financial", "treasury", "accounting", "cfo"],
                ),
                group(
                    RoleFunction::Risk,
                    &["risk", "compliance", "aml", "regulatory", "governance"],
                ),
                group(
                    RoleFunction::Technology,
                    &[
                        "engineer",
                        "developer",
                        "tech",
                        "software",
                        "data",
                        "ai",
                        "ml",
                        "genai",
                    ],
                ),
                group(
                    RoleFunction::Marketing,
                    &[
                        "marketing",
                        "brand",
                        "communications",
                        "pr",
                        "content",
                        "creative",
                    ],
                ),
                group(
                    RoleFunction::Sales,
                    &[
                        "sales",
                        "business development",
                        "bd",
                        "account",
                        "partnership",
                        "gtm",
                    ],
                ),
                group(RoleFunction::Product, &["product", "pm", "product manager"]),
                group(
                    RoleFunction::Operations,
                    &["operations", "ops", "delivery", "project management"],
                ),
                group(
                    RoleFunction::Hr,
                    &["people", "hr", "human resources", "talent"],
                ),
                group(
                    RoleFunction::Executive,
                    &[
                        "ceo",
                        "coo",
                        "cto",
                        "cfo",
                        "cmo",
                        "founder",
                        "co-founder",
                        "president",
                        "chief",
                    ],
                ),
            ],
            seniority: vec![
                group(
                    Seniority::CLevel,
                    &[
                        "ceo",
                        "cto",
                        "cfo",
                        "cmo",
                        "coo",
                        "cio",
                        "chief",
                        "president",
                    ],
                ),
                group(Seniority::Vp, &["vp", "vice president", "svp", "evp"]),
                group(Seniority::Director, &["director", "head of"]),
                group(Seniority::Manager, &["manager", "lead", "principal"]),
                group(Seniority::Senior, &["senior", "sr.", "sr "]),
                group(
                    Seniority::Mid,
                    &[
                        "specialist",
                        "analyst",
                        "engineer",
                        "developer",
                        "consultant",
                    ],
                ),
                group(
                    Seniority::Entry,
                    &["junior", "associate", "assistant", "coordinator"],
                ),
            ],
            company_types: vec![
                group(
                    CompanyType::Fintech,
                    &[
                        "klarna", "stripe", "paypal", "square", "revolut", "wise", "fintech",
                    ],
                ),
                group(
                    CompanyType::Consulting,
                    &[
                        "mckinsey",
                        "bcg",
                        "bain",
                        "pwc",
                        "ey",
                        "deloitte",
                        "kpmg",
                        "accenture",
                    ],
                ),
                group(
                    CompanyType::Tech,
                    &[
                        "google",
                        "microsoft",
                        "amazon",
                        "apple",
                        "meta",
                        "ibm",
                        "salesforce",
                    ],
                ),
                group(
                    CompanyType::Finance,
                    &[
                        "bank",
                        "capital",
                        "investment",
                        "venture",
                        "fund",
                        "financial",
                    ],
                ),
                group(
                    CompanyType::ClimateTech,
                    &[
                        "climate",
                        "sustainability",
                        "carbon",
                        "renewable",
                        "green",
                        "environmental",
                    ],
                ),
                group(
                    CompanyType::Startup,
                    &["startup", "founder", "co-founder", "venture"],
                ),
                group(
                    CompanyType::Enterprise,
                    &["enterprise", "corporation", "global", "multinational"],
                ),
            ],
            geographies: vec![
                group(
                    Geography::Nordics,
                    &[
                        "sweden",
                        "norway",
                        "denmark",
                        "finland",
                        "stockholm",
                        "oslo",
                        "copenhagen",
                        "helsinki",
                        "nordic",
                    ],
                ),
                group(
                    Geography::Europe,
                    &[
                        "uk",
                        "germany",
                        "france",
                        "spain",
                        "italy",
                        "portugal",
                        "netherlands",
                        "europe",
                        "emea",
                    ],
                ),
                group(
                    Geography::NorthAmerica,
                    &["usa", "us", "canada", "north america", "americas"],
                ),
                group(
                    Geography::Apac,
                    &[
                        "apac",
                        "asia",
                        "australia",
                        "singapore",
                        "japan",
                        "china",
                        "anz",
                    ],
                ),
                group(
                    Geography::Latam,
                    &["latam", "latin america", "brazil", "mexico"],
                ),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IcpConfig {
    pub target_functions: Vec<RoleFunction>,
    pub adjacent_functions: Vec<RoleFunction>,
    pub target_seniority: Vec<Seniority>,
    pub near_seniority: Vec<Seniority>,
    pub target_company_types: Vec<CompanyType>,
    pub adjacent_company_types: Vec<CompanyType>,
    pub target_geographies: Vec<Geography>,
    pub post_keywords: Vec<String>,
}

impl Default for IcpConfig {
    fn default() -> Self {
        Self {
            target_functions: vec![
                RoleFunction::Climate,
                RoleFunction::Finance,
                RoleFunction::Risk,
                RoleFunction::Executive,
            ],
            adjacent_functions: vec![
                RoleFunction::Sales,
                RoleFunction::Marketing,
                RoleFunction::Product,
            ],
            target_seniority: vec![Seniority::CLevel, Seniority::Vp, Seniority::Director],
            near_seniority: vec![Seniority::Manager],
            target_company_types: vec![
                CompanyType::Fintech,
                CompanyType::Finance,
                CompanyType::ClimateTech,
                CompanyType::Enterprise,
            ],
            adjacent_company_types: vec![CompanyType::Consulting, CompanyType::Tech],
            target_geographies: vec![Geography::Nordics, Geography::Europe],
            post_keywords: strings(&[
                "climate",
                "resilience",
                "sustainability",
                "carbon",
                "environmental",
            ]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostRules {
    pub cta_phrases: Vec<String>,
    pub engagement_boosters: Vec<String>,
}

impl Default for PostRules {
    fn default() -> Self {
        Self {
            cta_phrases: strings(&[
                "learn more",
                "read more",
                "click here",
                "sign up",
                "register",
                "join us",
                "get started",
                "download",
                "check out",
                "discover",
                "explore",
                "find out",
                "see how",
                "book",
                "apply",
                "comment below",
                "share your",
                "what do you think",
                "tell us",
                "let us know",
            ]),
            engagement_boosters: strings(&[
                "question",
                "?",
                "what",
                "how",
                "why",
                "share",
                "thoughts",
                "experience",
                "story",
                "announcement",
                "excited",
                "proud",
            ]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub dictionaries: Dictionaries,
    pub exclusions: Vec<String>,
    pub icp: IcpConfig,
    pub post: PostRules,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            dictionaries: Dictionaries::default(),
            exclusions: strings(&["competitor_company_name", "spam", "bot"]),
            icp: IcpConfig::default(),
            post: PostRules::default(),
        }
    }
}
