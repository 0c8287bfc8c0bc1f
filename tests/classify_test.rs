//! Tehlike sınıfı ve ekip gereksinimi uçtan uca testleri

use plan_ai_common::{classify_nace, required_team, validate_team, HazardClass, TeamAssignment};

/// İnşaat işyeri: çok tehlikeli, 35 çalışan
#[test]
fn test_construction_site_requirements() {
    let class = classify_nace("41.00.02").unwrap();
    assert_eq!(class, HazardClass::CokTehlikeli);

    let req = required_team(class, 35);
    assert_eq!(req.expert_minutes_total, 35 * 40);
    assert_eq!(req.physician_minutes_total, 35 * 15);
    assert!(req.needs_health_staff);
    assert_eq!(req.full_time_experts, 0);
}

/// Yazılım ofisi: az tehlikeli, küçük ekip yeterli
#[test]
fn test_software_office_small_team_sufficient() {
    let class = classify_nace("62.01").unwrap();
    assert_eq!(class, HazardClass::AzTehlikeli);

    let assigned = TeamAssignment {
        expert_minutes: 200,
        physician_minutes: 100,
        health_staff: false,
    };
    let findings = validate_team(class, 20, &assigned);
    assert!(findings.is_empty(), "bulgular: {:?}", findings);
}

/// Eksik atama bulgu üretir ve mesajlar kullanıcıya dönüktür
#[test]
fn test_understaffed_produces_findings() {
    let class = classify_nace("24.10").unwrap(); // ana metal sanayii
    assert_eq!(class, HazardClass::CokTehlikeli);

    let assigned = TeamAssignment::default();
    let findings = validate_team(class, 50, &assigned);

    assert_eq!(findings.len(), 3);
    assert!(findings.iter().any(|f| f.contains("İSG uzmanı")));
    assert!(findings.iter().any(|f| f.contains("İşyeri hekimi")));
    assert!(findings.iter().any(|f| f.contains("sağlık personeli")));
}

/// Geçersiz kod classify'dan hata döner
#[test]
fn test_invalid_nace_rejected() {
    assert!(classify_nace("inşaat").is_err());
    assert!(classify_nace("04").is_err());
    assert!(classify_nace("").is_err());
}
