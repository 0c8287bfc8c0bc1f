//! Yedek çıkarıcı
//!
//! Onarım sonrası katı çözümleme de başarısız olduğunda devreye giren
//! son çare. Tam JSON çözümlemesi yerine hedefli desen eşleme ile ham
//! metinden asgari alan kümesini kurtarır ve çağırana her koşulda
//! işlenebilir, render edilebilir bir nesne garanti eder.

use regex::Regex;

use crate::types::{
    AdequacyStatus, AnalysisResult, EquipmentItem, EquipmentType, ProjectInfo, SafetyViolation,
    Severity,
};

/// Yedek yolda üretilen sabit uzman önerileri
pub const FALLBACK_SUGGESTIONS: [&str; 2] = [
    "Daha net, yüksek çözünürlüklü bir kroki görseli ile analizi tekrarlayın",
    "Kroki üzerinde acil çıkış ve yangın söndürücü konumlarının okunaklı işaretlendiğinden emin olun",
];

/// Ham metinden asgari geçerli sonuç çıkar
///
/// En fazla şunlar kurtarılır: `project_info` alanları ve varsa tek bir
/// yangın söndürücü kaydının adedi. `compliance_score` ekipman
/// kurtarıldıysa 50, aksi halde 0 olur. `safety_violations` analizin
/// tamamlanamadığını bildiren tek sentetik uyarı kaydı içerir.
/// Bu fonksiyonun hata yolu yoktur; her girdi için döner.
pub fn extract_fallback(raw: &str) -> AnalysisResult {
    lazy_static::lazy_static! {
        static ref AREA_TYPE_RE: Regex =
            Regex::new(r#""area_type"\s*:\s*"([^"]+)""#).unwrap();
        static ref FLOOR_RE: Regex =
            Regex::new(r#""detected_floor"\s*:\s*(-?\d+)"#).unwrap();
        static ref CATEGORY_RE: Regex =
            Regex::new(r#""building_category"\s*:\s*"([^"]+)""#).unwrap();
        static ref AREA_SQM_RE: Regex =
            Regex::new(r#""estimated_area_sqm"\s*:\s*(\d+(?:\.\d+)?)"#).unwrap();
        static ref EXTINGUISHER_RE: Regex =
            Regex::new(r#"(?s)"type"\s*:\s*"extinguisher".*?"count"\s*:\s*(\d+)"#).unwrap();
    }

    let mut project_info = ProjectInfo::default();

    if let Some(caps) = AREA_TYPE_RE.captures(raw) {
        project_info.area_type = caps[1].to_string();
    }
    if let Some(floor) = FLOOR_RE.captures(raw).and_then(|c| c[1].parse().ok()) {
        project_info.detected_floor = floor;
    }
    if let Some(caps) = CATEGORY_RE.captures(raw) {
        project_info.building_category = caps[1].to_string();
    }
    if let Some(sqm) = AREA_SQM_RE.captures(raw).and_then(|c| c[1].parse().ok()) {
        project_info.estimated_area_sqm = sqm;
    }

    let mut equipment_inventory = Vec::new();
    if let Some(count) = EXTINGUISHER_RE.captures(raw).and_then(|c| c[1].parse().ok()) {
        equipment_inventory.push(EquipmentItem {
            kind: EquipmentType::Extinguisher,
            count,
            locations: Vec::new(),
            adequacy_status: AdequacyStatus::Insufficient,
        });
    }

    let compliance_score = if equipment_inventory.is_empty() { 0.0 } else { 50.0 };

    AnalysisResult {
        project_info,
        equipment_inventory,
        safety_violations: vec![incomplete_analysis_violation()],
        expert_suggestions: FALLBACK_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
        compliance_score,
    }
}

/// Analizin tamamlanamadığını bildiren sentetik ihlal kaydı
fn incomplete_analysis_violation() -> SafetyViolation {
    SafetyViolation {
        issue: "Kroki analizi tamamlanamadı; model çıktısı çözümlenemedi".to_string(),
        regulation_reference: "-".to_string(),
        severity: Severity::Warning,
        recommended_action: "Krokiyi daha yüksek çözünürlükte yeniden yükleyip analizi tekrarlayın"
            .to_string(),
    }
}
