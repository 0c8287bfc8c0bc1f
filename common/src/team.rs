//! İSG ekip gereksinimi doğrulayıcı
//!
//! 6331 sayılı kanunun ikincil mevzuatından derlenmiş kural tablosu:
//! tehlike sınıfı ve çalışan sayısına göre aylık İSG uzmanı / işyeri
//! hekimi süresi, diğer sağlık personeli zorunluluğu ve tam zamanlı
//! uzman eşikleri.

use serde::{Deserialize, Serialize};

use crate::nace::HazardClass;

/// Tam zamanlı uzman eşiği (çalışan sayısı), sınıfa göre
const FULL_TIME_EXPERT_THRESHOLDS: [(HazardClass, u32); 3] = [
    (HazardClass::AzTehlikeli, 2000),
    (HazardClass::Tehlikeli, 1500),
    (HazardClass::CokTehlikeli, 1000),
];

/// Çok tehlikeli sınıfta diğer sağlık personeli eşiği
const HEALTH_STAFF_THRESHOLD: u32 = 10;

/// Tehlike sınıfı ve çalışan sayısından hesaplanan asgari ekip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRequirement {
    /// Çalışan başına aylık İSG uzmanı süresi (dakika)
    pub expert_minutes_per_employee: u32,
    /// Çalışan başına aylık işyeri hekimi süresi (dakika)
    pub physician_minutes_per_employee: u32,
    /// Toplam aylık İSG uzmanı süresi (dakika)
    pub expert_minutes_total: u32,
    /// Toplam aylık işyeri hekimi süresi (dakika)
    pub physician_minutes_total: u32,
    /// Diğer sağlık personeli zorunlu mu
    pub needs_health_staff: bool,
    /// Zorunlu tam zamanlı İSG uzmanı sayısı
    pub full_time_experts: u32,
}

/// Mevcut (atanmış) ekip
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamAssignment {
    /// Sözleşmelenen aylık İSG uzmanı süresi (dakika)
    pub expert_minutes: u32,
    /// Sözleşmelenen aylık işyeri hekimi süresi (dakika)
    pub physician_minutes: u32,
    /// Diğer sağlık personeli atanmış mı
    pub health_staff: bool,
}

/// Sınıf başına çalışan başı aylık süreler (uzman, hekim)
fn minutes_per_employee(class: HazardClass) -> (u32, u32) {
    match class {
        HazardClass::AzTehlikeli => (10, 5),
        HazardClass::Tehlikeli => (20, 10),
        HazardClass::CokTehlikeli => (40, 15),
    }
}

/// Asgari ekip gereksinimini hesapla
pub fn required_team(class: HazardClass, employee_count: u32) -> TeamRequirement {
    let (expert_per, physician_per) = minutes_per_employee(class);

    let full_time_threshold = FULL_TIME_EXPERT_THRESHOLDS
        .iter()
        .find(|(c, _)| *c == class)
        .map(|(_, t)| *t)
        .unwrap_or(u32::MAX);

    TeamRequirement {
        expert_minutes_per_employee: expert_per,
        physician_minutes_per_employee: physician_per,
        expert_minutes_total: expert_per * employee_count,
        physician_minutes_total: physician_per * employee_count,
        needs_health_staff: class == HazardClass::CokTehlikeli
            && employee_count >= HEALTH_STAFF_THRESHOLD,
        full_time_experts: employee_count / full_time_threshold,
    }
}

/// Atanmış ekibi gereksinimle karşılaştır
///
/// Dönen liste eksiklik bulgularıdır (Türkçe, kullanıcıya gösterilir);
/// boş liste ekibin yeterli olduğu anlamına gelir.
pub fn validate_team(
    class: HazardClass,
    employee_count: u32,
    assigned: &TeamAssignment,
) -> Vec<String> {
    let requirement = required_team(class, employee_count);
    let mut findings = Vec::new();

    if assigned.expert_minutes < requirement.expert_minutes_total {
        findings.push(format!(
            "İSG uzmanı süresi yetersiz: aylık {} dk gerekli, {} dk atanmış",
            requirement.expert_minutes_total, assigned.expert_minutes
        ));
    }
    if assigned.physician_minutes < requirement.physician_minutes_total {
        findings.push(format!(
            "İşyeri hekimi süresi yetersiz: aylık {} dk gerekli, {} dk atanmış",
            requirement.physician_minutes_total, assigned.physician_minutes
        ));
    }
    if requirement.needs_health_staff && !assigned.health_staff {
        findings.push(
            "Çok tehlikeli sınıfta 10 ve üzeri çalışan için diğer sağlık personeli zorunludur"
                .to_string(),
        );
    }

    findings
}
