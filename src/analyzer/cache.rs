//! Analiz sonucu önbellek modülü
//!
//! Görselin SHA-256 özetini anahtar yaparak analiz zarfını saklar;
//! aynı krokinin yeniden analizini atlar.

use super::types::AnalysisEnvelope;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

const CACHE_FILE_NAME: &str = ".plan-ai-cache.json";

/// Önbellek dosyası yapısı
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheFile {
    /// Sürüm (uyumluluk denetimi)
    version: u32,
    /// Görsel özeti → analiz zarfı
    entries: HashMap<String, CacheEntry>,
}

/// Önbellek kaydı
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    pub file_name: String,
    pub file_size: u64,
    pub envelope: AnalysisEnvelope,
}

impl CacheFile {
    const CURRENT_VERSION: u32 = 1;

    pub fn cache_path(folder: &Path) -> PathBuf {
        folder.join(CACHE_FILE_NAME)
    }

    /// Önbellek dosyasını oku; okunamazsa boş önbellek döner
    pub fn load(folder: &Path) -> Self {
        let cache_path = Self::cache_path(folder);
        if !cache_path.exists() {
            return Self::default();
        }

        let file = match File::open(&cache_path) {
            Ok(f) => f,
            Err(_) => return Self::default(),
        };

        let reader = BufReader::new(file);
        match serde_json::from_reader::<_, CacheFile>(reader) {
            Ok(cache) => {
                if cache.version != Self::CURRENT_VERSION {
                    eprintln!("Önbellek sürümü uyumsuz, yeniden oluşturulacak");
                    return Self::default();
                }
                cache
            }
            Err(_) => Self::default(),
        }
    }

    pub fn save(&self, folder: &Path) -> Result<()> {
        let file = File::create(Self::cache_path(folder))?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Önbelleği sil; dosya vardıysa true döner
    pub fn clear(folder: &Path) -> Result<bool> {
        let cache_path = Self::cache_path(folder);
        if cache_path.exists() {
            std::fs::remove_file(cache_path)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    pub fn get(&self, hash: &str) -> Option<&AnalysisEnvelope> {
        self.entries.get(hash).map(|e| &e.envelope)
    }

    pub fn insert(
        &mut self,
        hash: String,
        file_name: String,
        file_size: u64,
        envelope: AnalysisEnvelope,
    ) {
        self.entries.insert(
            hash,
            CacheEntry {
                file_name,
                file_size,
                envelope,
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CacheFile {
    fn default() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            entries: HashMap::new(),
        }
    }
}

/// Görsel baytlarının SHA-256 özetini hex olarak hesapla
pub fn compute_image_hash(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}
