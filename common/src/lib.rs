//! Plan AI Common Library
//!
//! CLI ve kurtarma hattı tarafından paylaşılan tipler ve yardımcılar

pub mod error;
pub mod fallback;
pub mod nace;
pub mod prompts;
pub mod recovery;
pub mod repair;
pub mod team;
pub mod types;

pub use error::{Error, Result};
pub use fallback::{extract_fallback, FALLBACK_SUGGESTIONS};
pub use nace::{classify_nace, normalize_nace, HazardClass};
pub use prompts::build_blueprint_prompt;
pub use recovery::{
    complete_analysis, derive_compliance_score, recover_analysis, recover_analysis_with_outcome,
    RecoveryOutcome,
};
pub use repair::repair_json;
pub use team::{required_team, validate_team, TeamAssignment, TeamRequirement};
pub use types::{
    AdequacyStatus, AnalysisResult, EquipmentItem, EquipmentType, ProjectInfo, SafetyViolation,
    Severity,
};
