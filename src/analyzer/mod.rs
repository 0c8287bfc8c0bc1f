//! Kroki analiz orkestrasyonu
//!
//! Akış: görseli yükle → boyutlandır/JPEG'e çevir → base64 gömülü
//! vision çağrısı → kurtarma hattı → yanıt zarfı. Aynı görselin
//! yeniden analizi SHA-256 önbelleğiyle atlanabilir.

mod cache;
mod gemini;
pub mod types;

pub use cache::{compute_image_hash, CacheFile};
pub use types::{AnalysisEnvelope, AnalysisMetadata};

use crate::config::Config;
use crate::error::{PlanAiError, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use plan_ai_common::{build_blueprint_prompt, recover_analysis_with_outcome, RecoveryOutcome};
use std::path::Path;
use std::time::Instant;

/// Kroki görselini analiz et
pub async fn analyze_blueprint(
    image_path: &Path,
    building_hint: Option<&str>,
    config: &Config,
    use_cache: bool,
    verbose: bool,
) -> Result<AnalysisEnvelope> {
    if !image_path.exists() {
        return Err(PlanAiError::FileNotFound(image_path.display().to_string()));
    }

    let bytes = std::fs::read(image_path)?;
    let file_size = bytes.len() as u64;
    let hash = compute_image_hash(&bytes);

    let cache_dir = image_path.parent().unwrap_or_else(|| Path::new("."));
    let mut cache_file = if use_cache {
        let loaded = CacheFile::load(cache_dir);
        if let Some(envelope) = loaded.get(&hash) {
            if verbose {
                println!("  önbellek isabeti: {}", hash);
            }
            return Ok(envelope.clone());
        }
        Some(loaded)
    } else {
        None
    };

    let started = Instant::now();
    let request_id = format!("req_{}", chrono::Utc::now().timestamp_millis());

    let image_base64 = prepare_image(&bytes, config, verbose)?;
    let prompt = build_blueprint_prompt(building_hint);

    let raw_response =
        gemini::generate_vision(&prompt, &image_base64, "image/jpeg", config, verbose).await?;

    if verbose {
        println!("  [{}] yanıt uzunluğu: {} karakter", request_id, raw_response.len());
    }

    let (analysis, outcome) = recover_analysis_with_outcome(&raw_response, &request_id);
    let degraded = outcome == RecoveryOutcome::Fallback;

    if degraded {
        eprintln!("  [{}] düşük kaliteli sonuç: yedek çıkarıcı kullanıldı", request_id);
    }

    let envelope = AnalysisEnvelope {
        success: true,
        analysis,
        metadata: AnalysisMetadata {
            request_id,
            model: config.model.clone(),
            timestamp_ms: chrono::Utc::now().timestamp_millis(),
            duration_ms: started.elapsed().as_millis() as u64,
            degraded,
        },
    };

    if let Some(cache) = cache_file.as_mut() {
        let file_name = image_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        cache.insert(hash, file_name, file_size, envelope.clone());
        if let Err(e) = cache.save(cache_dir) {
            eprintln!("Önbellek kaydedilemedi: {}", e);
        }
    }

    Ok(envelope)
}

/// Görseli API'ye uygun hale getir: üst kenarı sınırla, JPEG'e çevir,
/// base64 kodla
fn prepare_image(bytes: &[u8], config: &Config, verbose: bool) -> Result<String> {
    let img = image::load_from_memory(bytes)
        .map_err(|e| PlanAiError::ImageLoad(format!("Görsel çözümlenemedi: {}", e)))?;

    let max_edge = config.max_image_size;
    let resized = if img.width() > max_edge || img.height() > max_edge {
        if verbose {
            println!("  görsel {}x{} → en fazla {}px'e küçültülüyor", img.width(), img.height(), max_edge);
        }
        img.resize(max_edge, max_edge, image::imageops::FilterType::Triangle)
    } else {
        img
    };

    let rgb = resized.to_rgb8();
    let mut jpeg = Vec::new();
    let encoder =
        image::codecs::jpeg::JpegEncoder::new_with_quality(&mut jpeg, config.jpeg_quality);
    rgb.write_with_encoder(encoder)
        .map_err(|e| PlanAiError::ImageLoad(format!("JPEG kodlama hatası: {}", e)))?;

    Ok(BASE64.encode(&jpeg))
}
