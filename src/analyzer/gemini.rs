//! Gemini Vision API istemcisi
//!
//! Krokiyi base64 gömülü görsel olarak tek bir generateContent
//! çağrısıyla gönderir; yanıtın metin parçasını döndürür. Yanıt
//! metninin JSON olma garantisi yoktur, kurtarma hattı çağıranın
//! sorumluluğundadır.

use crate::config::Config;
use crate::error::{PlanAiError, Result};
use serde_json::json;
use std::time::Duration;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Vision çağrısını yürüt ve yanıt metnini döndür
pub async fn generate_vision(
    prompt: &str,
    image_base64: &str,
    mime_type: &str,
    config: &Config,
    verbose: bool,
) -> Result<String> {
    let api_key = config.get_api_key()?;

    let body = json!({
        "contents": [
            {
                "parts": [
                    { "text": prompt },
                    { "inline_data": { "mime_type": mime_type, "data": image_base64 } }
                ]
            }
        ],
        "generationConfig": {
            "temperature": 0.1,
            "responseMimeType": "application/json"
        }
    });

    if verbose {
        println!("  [API] model: {}, görsel: {} bayt (base64)", config.model, image_base64.len());
    }

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .build()
        .map_err(|e| PlanAiError::ApiCall(format!("HTTP istemcisi kurulamadı: {}", e)))?;

    let url = format!("{}/{}:generateContent?key={}", GEMINI_API_BASE, config.model, api_key);
    let response = client
        .post(&url)
        .json(&body)
        .send()
        .await
        .map_err(|e| PlanAiError::ApiCall(format!("İstek gönderilemedi: {}", e)))?;

    if !response.status().is_success() {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        return Err(PlanAiError::ApiCall(format!(
            "API {} döndürdü: {}",
            status, text
        )));
    }

    let payload: serde_json::Value = response
        .json()
        .await
        .map_err(|e| PlanAiError::ApiParse(format!("Yanıt gövdesi JSON değil: {}", e)))?;

    let text = payload["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .ok_or_else(|| PlanAiError::ApiParse("Yanıtta metin parçası yok".into()))?;

    if verbose {
        let preview: String = text.chars().take(500).collect();
        println!("  [API] yanıt önizleme: {}", preview);
    }

    Ok(text.to_string())
}
