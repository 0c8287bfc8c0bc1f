//! Yanıt zarfı tipleri
//!
//! HTTP/CLI sınırında analiz sonucunu saran zarf: `{success, analysis,
//! metadata}`. Kurtarma hattı hiç başarısız olmadığı için `success`
//! her zaman true'dur; düşük kaliteli sonuç `metadata.degraded` ile
//! işaretlenir.

use plan_ai_common::AnalysisResult;
use serde::{Deserialize, Serialize};

/// Analiz yanıt zarfı
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisEnvelope {
    pub success: bool,
    pub analysis: AnalysisResult,
    pub metadata: AnalysisMetadata,
}

/// Zarf üst verisi
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    /// Tanı etiketi (örn. "req_1724400000000")
    pub request_id: String,
    pub model: String,
    /// Analiz anı (Unix milisaniye)
    pub timestamp_ms: i64,
    pub duration_ms: u64,
    /// Yedek çıkarıcı devreye girdiyse true
    pub degraded: bool,
}
