//! NACE tehlike sınıfı tablosu
//!
//! İşyeri Tehlike Sınıfları Tebliği'nden derlenmiş kural tablosu:
//! NACE Rev.2 faaliyet kodu → tehlike sınıfı. Tablo bölüm (2 hane)
//! düzeyinde tutulur; sınıfı bölümden sapan alt faaliyetler için daha
//! uzun önekler eklenir ve en uzun eşleşen önek kazanır.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// 6331 sayılı kanun kapsamındaki işyeri tehlike sınıfı
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HazardClass {
    AzTehlikeli,
    Tehlikeli,
    CokTehlikeli,
}

impl std::fmt::Display for HazardClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HazardClass::AzTehlikeli => write!(f, "Az Tehlikeli"),
            HazardClass::Tehlikeli => write!(f, "Tehlikeli"),
            HazardClass::CokTehlikeli => write!(f, "Çok Tehlikeli"),
        }
    }
}

/// Önek → tehlike sınıfı tablosu (tebliğ özeti)
///
/// En uzun eşleşen önek geçerlidir; 4 haneli girdiler 2 haneli
/// bölüm sınıfından sapan alt faaliyetlerdir.
const NACE_HAZARD_TABLE: &[(&str, HazardClass)] = &[
    // Tarım, ormancılık ve balıkçılık
    ("01", HazardClass::Tehlikeli),
    ("02", HazardClass::Tehlikeli),
    ("03", HazardClass::Tehlikeli),
    // Madencilik ve taş ocakçılığı
    ("05", HazardClass::CokTehlikeli),
    ("06", HazardClass::CokTehlikeli),
    ("07", HazardClass::CokTehlikeli),
    ("08", HazardClass::CokTehlikeli),
    ("09", HazardClass::CokTehlikeli),
    // İmalat
    ("10", HazardClass::Tehlikeli),
    ("11", HazardClass::Tehlikeli),
    ("12", HazardClass::Tehlikeli),
    ("13", HazardClass::Tehlikeli),
    ("14", HazardClass::Tehlikeli),
    ("15", HazardClass::Tehlikeli),
    ("16", HazardClass::Tehlikeli),
    ("17", HazardClass::Tehlikeli),
    ("18", HazardClass::Tehlikeli),
    ("19", HazardClass::CokTehlikeli),
    ("20", HazardClass::CokTehlikeli),
    ("21", HazardClass::Tehlikeli),
    ("22", HazardClass::Tehlikeli),
    ("23", HazardClass::CokTehlikeli),
    ("24", HazardClass::CokTehlikeli),
    ("25", HazardClass::Tehlikeli),
    ("2540", HazardClass::CokTehlikeli), // silah ve mühimmat imalatı
    ("26", HazardClass::Tehlikeli),
    ("27", HazardClass::Tehlikeli),
    ("28", HazardClass::Tehlikeli),
    ("29", HazardClass::Tehlikeli),
    ("30", HazardClass::Tehlikeli),
    ("3011", HazardClass::CokTehlikeli), // gemi inşası
    ("31", HazardClass::Tehlikeli),
    ("32", HazardClass::Tehlikeli),
    ("33", HazardClass::Tehlikeli),
    // Elektrik, gaz, su, atık
    ("35", HazardClass::CokTehlikeli),
    ("36", HazardClass::Tehlikeli),
    ("37", HazardClass::Tehlikeli),
    ("38", HazardClass::Tehlikeli),
    ("3812", HazardClass::CokTehlikeli), // tehlikeli atık toplama
    ("3822", HazardClass::CokTehlikeli), // tehlikeli atık bertarafı
    ("39", HazardClass::CokTehlikeli),
    // İnşaat
    ("41", HazardClass::CokTehlikeli),
    ("42", HazardClass::CokTehlikeli),
    ("43", HazardClass::CokTehlikeli),
    // Toptan/perakende ticaret, araç bakımı
    ("45", HazardClass::AzTehlikeli),
    ("452", HazardClass::Tehlikeli), // motorlu taşıt bakım ve onarımı
    ("46", HazardClass::AzTehlikeli),
    ("47", HazardClass::AzTehlikeli),
    // Ulaştırma ve depolama
    ("49", HazardClass::Tehlikeli),
    ("50", HazardClass::Tehlikeli),
    ("51", HazardClass::Tehlikeli),
    ("52", HazardClass::Tehlikeli),
    ("53", HazardClass::AzTehlikeli),
    // Konaklama ve yiyecek hizmetleri
    ("55", HazardClass::AzTehlikeli),
    ("56", HazardClass::AzTehlikeli),
    // Bilgi ve iletişim
    ("58", HazardClass::AzTehlikeli),
    ("59", HazardClass::AzTehlikeli),
    ("60", HazardClass::AzTehlikeli),
    ("61", HazardClass::AzTehlikeli),
    ("62", HazardClass::AzTehlikeli),
    ("63", HazardClass::AzTehlikeli),
    // Finans, sigorta, gayrimenkul
    ("64", HazardClass::AzTehlikeli),
    ("65", HazardClass::AzTehlikeli),
    ("66", HazardClass::AzTehlikeli),
    ("68", HazardClass::AzTehlikeli),
    // Mesleki, bilimsel ve teknik faaliyetler
    ("69", HazardClass::AzTehlikeli),
    ("70", HazardClass::AzTehlikeli),
    ("71", HazardClass::AzTehlikeli),
    ("72", HazardClass::AzTehlikeli),
    ("73", HazardClass::AzTehlikeli),
    ("74", HazardClass::AzTehlikeli),
    ("75", HazardClass::Tehlikeli), // veterinerlik hizmetleri
    // İdari ve destek hizmetleri
    ("77", HazardClass::AzTehlikeli),
    ("78", HazardClass::AzTehlikeli),
    ("79", HazardClass::AzTehlikeli),
    ("80", HazardClass::Tehlikeli), // güvenlik ve soruşturma faaliyetleri
    ("81", HazardClass::AzTehlikeli),
    ("82", HazardClass::AzTehlikeli),
    // Kamu yönetimi, eğitim, sağlık
    ("84", HazardClass::AzTehlikeli),
    ("85", HazardClass::AzTehlikeli),
    ("86", HazardClass::Tehlikeli),
    ("87", HazardClass::AzTehlikeli),
    ("88", HazardClass::AzTehlikeli),
    // Sanat, eğlence, diğer hizmetler
    ("90", HazardClass::AzTehlikeli),
    ("91", HazardClass::AzTehlikeli),
    ("92", HazardClass::AzTehlikeli),
    ("93", HazardClass::AzTehlikeli),
    ("94", HazardClass::AzTehlikeli),
    ("95", HazardClass::Tehlikeli), // bilgisayar ve ev eşyası onarımı
    ("96", HazardClass::AzTehlikeli),
    ("97", HazardClass::AzTehlikeli),
    ("98", HazardClass::AzTehlikeli),
    ("99", HazardClass::AzTehlikeli),
];

/// NACE kodunu normalize et: nokta ve boşluklar atılır
///
/// "41.00.02" → "410002". Kalan karakterlerin tamamı rakam ve uzunluk
/// 2-6 arasında olmalıdır.
pub fn normalize_nace(code: &str) -> Result<String> {
    let digits: String = code.chars().filter(|c| *c != '.' && !c.is_whitespace()).collect();

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::Parse(format!("Geçersiz NACE kodu: {}", code)));
    }
    if digits.len() < 2 || digits.len() > 6 {
        return Err(Error::Parse(format!(
            "NACE kodu 2-6 haneli olmalı: {}",
            code
        )));
    }

    Ok(digits)
}

/// NACE koduna göre tehlike sınıfı belirle
///
/// En uzun eşleşen önek kazanır. Tabloda karşılığı olmayan bölüm
/// kodları hata döndürür (tebliğde yer almayan bölümler: 04, 34, 40...).
pub fn classify_nace(code: &str) -> Result<HazardClass> {
    let digits = normalize_nace(code)?;

    let best = NACE_HAZARD_TABLE
        .iter()
        .filter(|(prefix, _)| digits.starts_with(prefix))
        .max_by_key(|(prefix, _)| prefix.len());

    match best {
        Some((_, class)) => Ok(*class),
        None => Err(Error::Parse(format!(
            "NACE kodu tehlike sınıfı tablosunda bulunamadı: {}",
            code
        ))),
    }
}
