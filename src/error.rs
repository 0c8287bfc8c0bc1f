use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanAiError {
    #[error("Yapılandırma hatası: {0}")]
    Config(String),

    #[error("API anahtarı ayarlanmamış. `plan-ai config --set-api-key ANAHTAR` ile ayarlayın")]
    MissingApiKey,

    #[error("Dosya bulunamadı: {0}")]
    FileNotFound(String),

    #[error("Görsel yükleme hatası: {0}")]
    ImageLoad(String),

    #[error("API çağrı hatası: {0}")]
    ApiCall(String),

    #[error("API yanıtı çözümlenemedi: {0}")]
    ApiParse(String),

    #[error("Geçersiz NACE kodu: {0}")]
    InvalidNace(String),

    #[error("JSON hatası: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO hatası: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Common(#[from] plan_ai_common::Error),
}

pub type Result<T> = std::result::Result<T, PlanAiError>;
