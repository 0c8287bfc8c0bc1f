//! Analiz sonucu tip tanımları
//!
//! CLI ve kurtarma hattı tarafından paylaşılan tipler:
//! - ProjectInfo: kroki künyesi (alan tipi, kat, bina kategorisi, alan m²)
//! - EquipmentItem: güvenlik ekipmanı envanter kaydı
//! - SafetyViolation: tespit edilen mevzuat ihlali
//! - AnalysisResult: nihai çıktı (şema her zaman eksiksiz)

use serde::{Deserialize, Serialize};

/// Bina kategorisi belirtilmediğinde kullanılan varsayılan değer
pub const DEFAULT_BUILDING_CATEGORY: &str = "Belirtilmemiş";

/// Alan tipi tanınamadığında kullanılan varsayılan değer
pub const DEFAULT_AREA_TYPE: &str = "unknown";

/// Kroki künyesi
///
/// `area_type` model tarafından serbest metin olarak üretilir
/// (örn. "open_office", "production_hall"); tanınamazsa "unknown".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectInfo {
    pub area_type: String,
    pub detected_floor: i64,
    pub building_category: String,
    pub estimated_area_sqm: f64,
}

impl Default for ProjectInfo {
    fn default() -> Self {
        Self {
            area_type: DEFAULT_AREA_TYPE.to_string(),
            detected_floor: 1,
            building_category: DEFAULT_BUILDING_CATEGORY.to_string(),
            estimated_area_sqm: 0.0,
        }
    }
}

/// Güvenlik ekipmanı türü
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentType {
    Extinguisher,
    Exit,
    Hydrant,
    FirstAid,
    AssemblyPoint,
}

impl EquipmentType {
    /// JSON değerinden ekipman türünü çözümle (tanınmayan değer → None)
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "extinguisher" => Some(Self::Extinguisher),
            "exit" => Some(Self::Exit),
            "hydrant" => Some(Self::Hydrant),
            "first_aid" => Some(Self::FirstAid),
            "assembly_point" => Some(Self::AssemblyPoint),
            _ => None,
        }
    }

    /// Raporlarda kullanılan Türkçe etiket
    pub fn label(&self) -> &'static str {
        match self {
            Self::Extinguisher => "Yangın söndürücü",
            Self::Exit => "Acil çıkış",
            Self::Hydrant => "Yangın hidrantı",
            Self::FirstAid => "İlk yardım noktası",
            Self::AssemblyPoint => "Toplanma alanı",
        }
    }
}

/// Ekipman yeterlilik durumu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdequacyStatus {
    Sufficient,
    Insufficient,
    Excessive,
}

impl AdequacyStatus {
    /// JSON değerinden yeterlilik durumunu çözümle
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "sufficient" => Some(Self::Sufficient),
            "insufficient" => Some(Self::Insufficient),
            "excessive" => Some(Self::Excessive),
            _ => None,
        }
    }
}

/// İhlal önem derecesi
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

impl Severity {
    /// JSON değerinden önem derecesini çözümle
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "critical" => Some(Self::Critical),
            "warning" => Some(Self::Warning),
            "info" => Some(Self::Info),
            _ => None,
        }
    }
}

/// Ekipman envanter kaydı
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentItem {
    #[serde(rename = "type")]
    pub kind: EquipmentType,

    #[serde(default)]
    pub count: i64,

    #[serde(default)]
    pub locations: Vec<String>,

    pub adequacy_status: AdequacyStatus,
}

/// Tespit edilen mevzuat ihlali
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetyViolation {
    #[serde(default)]
    pub issue: String,

    /// İlgili mevzuat referansı (örn. "Binaların Yangından Korunması Yön. m.56")
    #[serde(default)]
    pub regulation_reference: String,

    pub severity: Severity,

    #[serde(default)]
    pub recommended_action: String,
}

/// Kroki analizi nihai çıktısı
///
/// Kurtarma hattının çıktısında bütün alanlar her zaman mevcuttur;
/// girdi metni ne kadar bozuk olursa olsun şema eksiksizdir.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisResult {
    pub project_info: ProjectInfo,
    pub equipment_inventory: Vec<EquipmentItem>,
    pub safety_violations: Vec<SafetyViolation>,
    pub expert_suggestions: Vec<String>,
    pub compliance_score: f64,
}

impl Default for AnalysisResult {
    fn default() -> Self {
        Self {
            project_info: ProjectInfo::default(),
            equipment_inventory: Vec::new(),
            safety_violations: Vec::new(),
            expert_suggestions: Vec::new(),
            compliance_score: 0.0,
        }
    }
}
