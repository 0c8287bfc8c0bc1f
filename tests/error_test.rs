//! Hata durumu testleri
//!
//! Hata tiplerinin mesajları ve dönüşümleri

use plan_ai_rust::error::PlanAiError;

/// PlanAiError Display mesajları boş olmamalı
#[test]
fn test_error_display() {
    let errors = vec![
        PlanAiError::Config("test yapılandırma hatası".to_string()),
        PlanAiError::FileNotFound("kroki.jpg".to_string()),
        PlanAiError::ImageLoad("bozuk dosya".to_string()),
        PlanAiError::ApiCall("bağlantı reddedildi".to_string()),
        PlanAiError::ApiParse("metin parçası yok".to_string()),
        PlanAiError::InvalidNace("X1".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "hata mesajı boş: {:?}", err);
    }
}

/// MissingApiKey mesajı kullanıcıyı çözüme yönlendirmeli
#[test]
fn test_missing_api_key_message() {
    let err = PlanAiError::MissingApiKey;
    let display = format!("{}", err);

    assert!(display.contains("API anahtarı"));
    assert!(display.contains("plan-ai config"));
}

/// IO hatası From ile dönüşür
#[test]
fn test_error_from_io() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "yok");
    let err: PlanAiError = io_error.into();
    assert!(matches!(err, PlanAiError::Io(_)));
}

/// serde_json hatası From ile dönüşür
#[test]
fn test_error_from_json() {
    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: PlanAiError = json_error.into();
    assert!(matches!(err, PlanAiError::JsonParse(_)));
}

/// Ortak kütüphane hatası From ile dönüşür
#[test]
fn test_error_from_common() {
    let common = plan_ai_common::Error::Parse("Geçersiz NACE kodu: Z9".to_string());
    let err: PlanAiError = common.into();
    let display = format!("{}", err);
    assert!(display.contains("Geçersiz NACE kodu"));
}
