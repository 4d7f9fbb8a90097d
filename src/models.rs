use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleFunction {
    Climate,
    Finance,
    Risk,
    Technology,
    Marketing,
    Sales,
    Product,
    Operations,
    Hr,
    Executive,
    General,
}

impl RoleFunction {
    pub fn as_str(self) -> &'static str {
        match self {
            RoleFunction::Climate => "climate",
            RoleFunction::Finance => "finance",
            RoleFunction::Risk => "risk",
            RoleFunction::Technology => "technology",
            RoleFunction::Marketing => "marketing",
            RoleFunction::Sales => "sales",
            RoleFunction::Product => "product",
            RoleFunction::Operations => "operations",
            RoleFunction::Hr => "hr",
            RoleFunction::Executive => "executive",
            RoleFunction::General => "general",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Seniority {
    CLevel,
    Vp,
    Director,
    Manager,
    Senior,
    Mid,
    Entry,
}

/// Sort order used when two profiles share a score.
pub const SENIORITY_ORDER: [Seniority; 7] = [
    Seniority::CLevel,
    Seniority::Vp,
    Seniority::Director,
    Seniority::Manager,
    Seniority::Senior,
    Seniority::Mid,
    Seniority::Entry,
];

impl Seniority {
    pub fn as_str(self) -> &'static str {
        match self {
            Seniority::CLevel => "c_level",
            Seniority::Vp => "vp",
            Seniority::Director => "director",
            Seniority::Manager => "manager",
            Seniority::Senior => "senior",
            Seniority::Mid => "mid",
            Seniority::Entry => "entry",
        }
    }

    /// Position in [`SENIORITY_ORDER`]; anything unranked sorts after it.
    pub fn rank(self) -> usize {
        SENIORITY_ORDER
            .iter()
            .position(|level| *level == self)
            .unwrap_or(SENIORITY_ORDER.len())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanyType {
    Fintech,
    Consulting,
    Tech,
    Finance,
    ClimateTech,
    Startup,
    Enterprise,
    Other,
}

impl CompanyType {
    pub fn as_str(self) -> &'static str {
        match self {
            CompanyType::Fintech => "fintech",
            CompanyType::Consulting => "consulting",
            CompanyType::Tech => "tech",
            CompanyType::Finance => "finance",
            CompanyType::ClimateTech => "climate_tech",
            CompanyType::Startup => "startup",
            CompanyType::Enterprise => "enterprise",
            CompanyType::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Geography {
    Nordics,
    Europe,
    NorthAmerica,
    Apac,
    Latam,
    Unknown,
}

impl Geography {
    pub fn as_str(self) -> &'static str {
        match self {
            Geography::Nordics => "nordics",
            Geography::Europe => "europe",
            Geography::NorthAmerica => "north_america",
            Geography::Apac => "apac",
            Geography::Latam => "latam",
            Geography::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthCategory {
    Short,
    Medium,
    Long,
    VeryLong,
}

impl LengthCategory {
    pub fn from_word_count(word_count: usize) -> Self {
        match word_count {
            0..=49 => LengthCategory::Short,
            50..=149 => LengthCategory::Medium,
            150..=299 => LengthCategory::Long,
            _ => LengthCategory::VeryLong,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LengthCategory::Short => "short",
            LengthCategory::Medium => "medium",
            LengthCategory::Long => "long",
            LengthCategory::VeryLong => "very_long",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Performance {
    Overperform,
    Average,
    Underperform,
}

impl Performance {
    pub fn from_score(score: i32) -> Self {
        if score >= 75 {
            Performance::Overperform
        } else if score >= 50 {
            Performance::Average
        } else {
            Performance::Underperform
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Performance::Overperform => "overperform",
            Performance::Average => "average",
            Performance::Underperform => "underperform",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OutreachPriority {
    High,
    Medium,
    Low,
}

impl OutreachPriority {
    pub fn for_seniority(seniority: Seniority) -> Self {
        match seniority {
            Seniority::CLevel | Seniority::Vp => OutreachPriority::High,
            Seniority::Director => OutreachPriority::Medium,
            _ => OutreachPriority::Low,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OutreachPriority::High => "HIGH",
            OutreachPriority::Medium => "MEDIUM",
            OutreachPriority::Low => "LOW",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

display_as_str!(
    RoleFunction,
    Seniority,
    CompanyType,
    Geography,
    LengthCategory,
    Performance,
    OutreachPriority,
);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileRow {
    pub name: String,
    pub title: String,
}

/// A classified and scored profile. Field order is the output column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileRecord {
    pub name: String,
    pub title: String,
    pub company: String,
    pub role_function: RoleFunction,
    pub seniority: Seniority,
    pub company_type: CompanyType,
    #[serde(rename = "geo")]
    pub geography: Geography,
    pub score: i32,
    pub score_reason: String,
    pub excluded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostFeatures {
    pub word_count: usize,
    pub char_count: usize,
    pub has_question: bool,
    pub question_count: usize,
    pub hashtag_count: usize,
    pub emoji_count: usize,
    pub has_external_link: bool,
    pub link_count: usize,
    pub has_line_breaks: bool,
    pub paragraph_count: usize,
    pub has_call_to_action: bool,
    pub mentions_count: usize,
    pub all_caps_words: usize,
    pub exclamation_count: usize,
    pub post_length_category: LengthCategory,
    pub predicted_performance: Performance,
    pub performance_score: i32,
    pub performance_reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prospect {
    pub name: String,
    pub title: String,
    pub company: String,
    pub role_function: RoleFunction,
    pub seniority: Seniority,
    pub score: i32,
    pub outreach_priority: OutreachPriority,
    pub score_reason: String,
}
