//! Toleranslı yapılandırılmış çıktı kurtarma
//!
//! Modelden gelen ham metni her koşulda şema açısından eksiksiz bir
//! [`AnalysisResult`]'a dönüştürür. Akış:
//! 1. Onarım hattı ([`crate::repair::repair_json`])
//! 2. Katı çözümleme (serbest `serde_json::Value` ara gösterimine)
//! 3. Şema tamamlama (eksik alanlara belgelenmiş varsayılanlar)
//! 4. Başarısızlıkta yedek çıkarıcı ([`crate::fallback`])
//!
//! Bu işlev dışarıya hata vermez; yalnızca sonucun *kalitesi* düşer,
//! şeklin *geçerliliği* asla.

use serde_json::{Map, Value};

use crate::fallback;
use crate::repair;
use crate::types::{
    AdequacyStatus, AnalysisResult, EquipmentItem, EquipmentType, ProjectInfo, SafetyViolation,
    Severity, DEFAULT_AREA_TYPE, DEFAULT_BUILDING_CATEGORY,
};

/// Kurtarmanın hangi yoldan tamamlandığı
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryOutcome {
    /// Onarım sonrası katı çözümleme başarılı; şema tamamlama uygulandı
    Parsed,
    /// Katı çözümleme başarısız; yedek çıkarıcı devreye girdi
    Fallback,
}

/// Ham model çıktısından şema açısından eksiksiz sonuç kurtar
///
/// `request_id` yalnızca tanı çıktısında etiket olarak kullanılır.
/// Aynı metinle iki kez çağrıldığında aynı sonucu üretir.
pub fn recover_analysis(raw: &str, request_id: &str) -> AnalysisResult {
    recover_analysis_with_outcome(raw, request_id).0
}

/// [`recover_analysis`] ile aynı; ek olarak izlenen yolu döndürür
pub fn recover_analysis_with_outcome(raw: &str, request_id: &str) -> (AnalysisResult, RecoveryOutcome) {
    if let Some(candidate) = repair::repair_json(raw) {
        match serde_json::from_str::<Value>(&candidate) {
            Ok(Value::Object(map)) => return (complete_analysis(&map), RecoveryOutcome::Parsed),
            Ok(_) => {
                eprintln!("  [{}] çözümlenen değer nesne değil, yedek çıkarıcı devrede", request_id);
            }
            Err(e) => {
                eprintln!("  [{}] onarım sonrası çözümleme başarısız ({}), yedek çıkarıcı devrede", request_id, e);
            }
        }
    } else {
        eprintln!("  [{}] metinde `{{` yok, yedek çıkarıcı devrede", request_id);
    }

    (fallback::extract_fallback(raw), RecoveryOutcome::Fallback)
}

/// Şema tamamlama
///
/// Serbest ara gösterimi katı tipe doğrula/zorla ve eksik üst düzey
/// alanları belgelenmiş varsayılanlarla doldur. Mevcut değerlerin
/// üzerine asla yazılmaz; geçerli girdi değişmeden geçer.
pub fn complete_analysis(map: &Map<String, Value>) -> AnalysisResult {
    let project_info = coerce_project_info(map.get("project_info"));
    let equipment_inventory = coerce_equipment(map.get("equipment_inventory"));
    let safety_violations = coerce_violations(map.get("safety_violations"));
    let expert_suggestions = coerce_string_list(map.get("expert_suggestions"));

    let compliance_score = match map.get("compliance_score").and_then(Value::as_f64) {
        Some(score) => score,
        None => derive_compliance_score(&equipment_inventory, &safety_violations),
    };

    AnalysisResult {
        project_info,
        equipment_inventory,
        safety_violations,
        expert_suggestions,
        compliance_score,
    }
}

/// Uygunluk puanı türetme
///
/// `clamp(0, 100, 50 + 5*toplam_ekipman - 10*ihlal_sayısı)`.
/// Sezgisel bir puanlama varsayılanıdır, mevzuat hesabı değildir;
/// çağıranlar bunu bağlayıcı kabul etmemelidir.
pub fn derive_compliance_score(
    equipment: &[EquipmentItem],
    violations: &[SafetyViolation],
) -> f64 {
    let total_equipment: i64 = equipment.iter().map(|item| item.count).sum();
    let raw = 50.0 + 5.0 * total_equipment as f64 - 10.0 * violations.len() as f64;
    raw.clamp(0.0, 100.0)
}

fn coerce_project_info(value: Option<&Value>) -> ProjectInfo {
    let obj = match value.and_then(Value::as_object) {
        Some(obj) => obj,
        None => return ProjectInfo::default(),
    };

    ProjectInfo {
        area_type: obj
            .get("area_type")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_AREA_TYPE)
            .to_string(),
        detected_floor: obj
            .get("detected_floor")
            .and_then(Value::as_i64)
            .unwrap_or(1),
        building_category: obj
            .get("building_category")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_BUILDING_CATEGORY)
            .to_string(),
        estimated_area_sqm: obj
            .get("estimated_area_sqm")
            .and_then(Value::as_f64)
            .unwrap_or(0.0),
    }
}

/// Ekipman listesini zorla
///
/// Türü tanınmayan kayıtlar atılır; eksik `count` 0, geçersiz
/// `adequacy_status` güvenli taraf olarak `insufficient` olur.
fn coerce_equipment(value: Option<&Value>) -> Vec<EquipmentItem> {
    let entries = match value.and_then(Value::as_array) {
        Some(arr) => arr,
        None => return Vec::new(),
    };

    entries
        .iter()
        .filter_map(|entry| {
            let obj = entry.as_object()?;
            let kind = obj
                .get("type")
                .and_then(Value::as_str)
                .and_then(EquipmentType::parse)?;

            Some(EquipmentItem {
                kind,
                count: obj.get("count").and_then(Value::as_i64).unwrap_or(0),
                locations: coerce_string_list(obj.get("locations")),
                adequacy_status: obj
                    .get("adequacy_status")
                    .and_then(Value::as_str)
                    .and_then(AdequacyStatus::parse)
                    .unwrap_or(AdequacyStatus::Insufficient),
            })
        })
        .collect()
}

/// İhlal listesini zorla
///
/// Geçersiz `severity` temkinli taraf olarak `warning` olur.
fn coerce_violations(value: Option<&Value>) -> Vec<SafetyViolation> {
    let entries = match value.and_then(Value::as_array) {
        Some(arr) => arr,
        None => return Vec::new(),
    };

    entries
        .iter()
        .filter_map(|entry| {
            let obj = entry.as_object()?;
            Some(SafetyViolation {
                issue: obj
                    .get("issue")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
                regulation_reference: obj
                    .get("regulation_reference")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
                severity: obj
                    .get("severity")
                    .and_then(Value::as_str)
                    .and_then(Severity::parse)
                    .unwrap_or(Severity::Warning),
                recommended_action: obj
                    .get("recommended_action")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
            })
        })
        .collect()
}

fn coerce_string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|arr| {
            arr.iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_payload() -> String {
        r#"{
            "project_info": {
                "area_type": "open_office",
                "detected_floor": 2,
                "building_category": "Ofis binası",
                "estimated_area_sqm": 350.0
            },
            "equipment_inventory": [
                {"type": "extinguisher", "count": 2, "locations": ["giriş"], "adequacy_status": "sufficient"},
                {"type": "exit", "count": 1, "locations": [], "adequacy_status": "insufficient"}
            ],
            "safety_violations": [
                {"issue": "Yangın merdiveni erişimi kapalı", "regulation_reference": "BYKY m.38", "severity": "critical", "recommended_action": "Erişimi açın"}
            ],
            "expert_suggestions": ["Tatbikat planlayın"],
            "compliance_score": 65.0
        }"#
        .to_string()
    }

    // =============================================
    // Toplam fonksiyon özelliği
    // =============================================

    #[test]
    fn test_never_fails_on_arbitrary_input() {
        let inputs = [
            "",
            "düz metin, JSON yok",
            "{",
            "}{",
            "{\"a\":",
            "```json\n```",
            "[1, 2, 3]",
            "{\"equipment_inventory\": \"dizi değil\"}",
        ];

        for input in inputs {
            let result = recover_analysis(input, "req_test");
            // Şema eksiksizliği: serileştirme her alanı içerir
            let json = serde_json::to_value(&result).unwrap();
            assert!(json.get("project_info").is_some(), "girdi: {:?}", input);
            assert!(json.get("compliance_score").is_some(), "girdi: {:?}", input);
        }
    }

    // =============================================
    // Geçerli girdide değişmezlik
    // =============================================

    #[test]
    fn test_valid_input_unchanged() {
        let raw = valid_payload();
        let (result, outcome) = recover_analysis_with_outcome(&raw, "req_test");

        assert_eq!(outcome, RecoveryOutcome::Parsed);
        assert_eq!(result.project_info.area_type, "open_office");
        assert_eq!(result.project_info.detected_floor, 2);
        assert_eq!(result.project_info.building_category, "Ofis binası");
        assert_eq!(result.equipment_inventory.len(), 2);
        assert_eq!(result.equipment_inventory[0].count, 2);
        assert_eq!(result.safety_violations.len(), 1);
        assert_eq!(result.safety_violations[0].severity, Severity::Critical);
        assert_eq!(result.expert_suggestions, vec!["Tatbikat planlayın"]);
        // mevcut puanın üzerine türetme yazılmaz
        assert_eq!(result.compliance_score, 65.0);
    }

    #[test]
    fn test_idempotent() {
        let raw = valid_payload();
        let first = recover_analysis(&raw, "req_a");
        let second = recover_analysis(&raw, "req_b");
        assert_eq!(first, second);
    }

    // =============================================
    // Şema tamamlama
    // =============================================

    #[test]
    fn test_missing_fields_get_defaults() {
        let raw = r#"{"project_info": {"detected_floor": 3}}"#;
        let result = recover_analysis(raw, "req_test");

        assert_eq!(result.project_info.detected_floor, 3);
        assert_eq!(result.project_info.area_type, "unknown");
        assert_eq!(result.project_info.building_category, "Belirtilmemiş");
        assert_eq!(result.project_info.estimated_area_sqm, 0.0);
        assert!(result.equipment_inventory.is_empty());
        assert!(result.safety_violations.is_empty());
        assert!(result.expert_suggestions.is_empty());
        // ekipman yok, ihlal yok: 50 + 0 - 0
        assert_eq!(result.compliance_score, 50.0);
    }

    #[test]
    fn test_score_derivation() {
        // 2 + 1 ekipman, 1 ihlal: 50 + 5*3 - 10*1 = 65
        let raw = r#"{
            "equipment_inventory": [
                {"type": "extinguisher", "count": 2, "adequacy_status": "sufficient"},
                {"type": "hydrant", "count": 1, "adequacy_status": "sufficient"}
            ],
            "safety_violations": [
                {"issue": "x", "severity": "warning"}
            ]
        }"#;
        let result = recover_analysis(raw, "req_test");
        assert_eq!(result.compliance_score, 65.0);
    }

    #[test]
    fn test_score_derivation_clamped() {
        // 50 - 10*7 = -20 → 0'a kenetlenir
        let violations = (0..7)
            .map(|i| format!(r#"{{"issue": "ihlal {}", "severity": "info"}}"#, i))
            .collect::<Vec<_>>()
            .join(",");
        let raw = format!(r#"{{"safety_violations": [{}]}}"#, violations);

        let result = recover_analysis(&raw, "req_test");
        assert_eq!(result.compliance_score, 0.0);
    }

    #[test]
    fn test_score_missing_count_treated_as_zero() {
        let raw = r#"{
            "equipment_inventory": [
                {"type": "exit", "adequacy_status": "sufficient"}
            ]
        }"#;
        let result = recover_analysis(raw, "req_test");
        assert_eq!(result.equipment_inventory[0].count, 0);
        assert_eq!(result.compliance_score, 50.0);
    }

    #[test]
    fn test_non_numeric_score_derived() {
        let raw = r#"{"compliance_score": "seksen"}"#;
        let result = recover_analysis(raw, "req_test");
        assert_eq!(result.compliance_score, 50.0);
    }

    #[test]
    fn test_unknown_equipment_type_dropped() {
        let raw = r#"{
            "equipment_inventory": [
                {"type": "extinguisher", "count": 1, "adequacy_status": "sufficient"},
                {"type": "jetpack", "count": 9, "adequacy_status": "sufficient"}
            ]
        }"#;
        let result = recover_analysis(raw, "req_test");
        assert_eq!(result.equipment_inventory.len(), 1);
        assert_eq!(result.equipment_inventory[0].kind, EquipmentType::Extinguisher);
    }

    #[test]
    fn test_invalid_enum_values_coerced() {
        let raw = r#"{
            "equipment_inventory": [
                {"type": "exit", "count": 1, "adequacy_status": "belki"}
            ],
            "safety_violations": [
                {"issue": "x", "severity": "çok kötü"}
            ]
        }"#;
        let result = recover_analysis(raw, "req_test");
        assert_eq!(
            result.equipment_inventory[0].adequacy_status,
            AdequacyStatus::Insufficient
        );
        assert_eq!(result.safety_violations[0].severity, Severity::Warning);
    }

    // =============================================
    // Kesik girdi kurtarma
    // =============================================

    #[test]
    fn test_truncated_array_recovery() {
        // dizi elemanın ortasında kesilmiş: kısmi kayıt sızmamalı
        let raw = r#"{"project_info":{"area_type":"warehouse","detected_floor":1,"building_category":"Depo","estimated_area_sqm":800},"equipment_inventory":[{"type":"extinguisher","count":2,"#;
        let (result, outcome) = recover_analysis_with_outcome(raw, "req_test");

        assert_eq!(outcome, RecoveryOutcome::Parsed);
        assert!(result.equipment_inventory.is_empty());
        assert_eq!(result.project_info.area_type, "warehouse");
        assert_eq!(result.project_info.building_category, "Depo");
    }

    #[test]
    fn test_truncated_string_recovery() {
        // tek sayıda tırnak: yarım değer varsayılana döner, bozuk
        // kısmi string sonuçta görünmez
        let raw = r#"{"project_info":{"area_type":"office","detected_floor":2,"building_category":"Ofis bin"#;
        let (result, outcome) = recover_analysis_with_outcome(raw, "req_test");

        assert_eq!(outcome, RecoveryOutcome::Parsed);
        assert_eq!(result.project_info.building_category, "Belirtilmemiş");
        assert_ne!(result.project_info.building_category, "Ofis bin");
        assert_eq!(result.project_info.area_type, "office");
    }

    #[test]
    fn test_fenced_input_parses_like_unfenced() {
        let bare = valid_payload();
        let fenced = format!("```json\n{}\n```", bare);

        let from_bare = recover_analysis(&bare, "req_a");
        let from_fenced = recover_analysis(&fenced, "req_b");
        assert_eq!(from_bare, from_fenced);
    }

    #[test]
    fn test_preamble_stripped() {
        let raw = format!("Analiz sonucu aşağıdadır:\n{}", valid_payload());
        let (result, outcome) = recover_analysis_with_outcome(&raw, "req_test");
        assert_eq!(outcome, RecoveryOutcome::Parsed);
        assert_eq!(result.compliance_score, 65.0);
    }

    // =============================================
    // Yedek yol
    // =============================================

    #[test]
    fn test_prose_goes_to_fallback() {
        let (result, outcome) =
            recover_analysis_with_outcome("Bu görselde kroki tespit edemedim.", "req_test");

        assert_eq!(outcome, RecoveryOutcome::Fallback);
        assert_eq!(result.compliance_score, 0.0);
        assert_eq!(result.safety_violations.len(), 1);
        assert_eq!(result.safety_violations[0].severity, Severity::Warning);
        assert_eq!(result.expert_suggestions.len(), 2);
    }

    #[test]
    fn test_top_level_array_goes_to_fallback() {
        // ilk `{`'den itibaren kırpılınca sonda `]` artığı kalır;
        // katı çözümleme başarısız olur ve yedek yol devreye girer
        let (result, outcome) = recover_analysis_with_outcome(r#"[{"a": 1}]"#, "req_test");
        assert_eq!(outcome, RecoveryOutcome::Fallback);
        assert_eq!(result.compliance_score, 0.0);
    }
}
