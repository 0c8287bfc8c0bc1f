use clap::Parser;
use plan_ai_common::{classify_nace, recover_analysis, required_team, validate_team, TeamAssignment};
use plan_ai_rust::{analyzer, cli, config, error};

use cli::{Cli, Commands};
use config::Config;
use error::{PlanAiError, Result};
use std::path::Path;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Analyze { image, output, hint, use_cache } => {
            println!("📐 plan-ai - kroki analizi\n");

            println!("[1/2] AI analizi...{}", if use_cache { " (önbellek etkin)" } else { "" });
            let envelope = analyzer::analyze_blueprint(
                &image,
                hint.as_deref(),
                &config,
                use_cache,
                cli.verbose,
            )
            .await?;
            println!("✔ analiz tamamlandı (puan: {:.0})\n", envelope.analysis.compliance_score);

            println!("[2/2] sonuç yazılıyor...");
            write_json(&envelope, output.as_deref())?;

            if envelope.metadata.degraded {
                println!("\n⚠ Model çıktısı tam çözümlenemedi; sonuç yedek çıkarıcıdan geldi");
            }
            println!("\n✅ tamamlandı");
        }

        Commands::Recover { input, output, request_id } => {
            println!("🛠 plan-ai - çevrimdışı kurtarma\n");

            let raw = if input == Path::new("-") {
                std::io::read_to_string(std::io::stdin())?
            } else {
                if !input.exists() {
                    return Err(PlanAiError::FileNotFound(input.display().to_string()));
                }
                std::fs::read_to_string(&input)?
            };

            let request_id = request_id.unwrap_or_else(|| {
                format!("req_{}", chrono::Utc::now().timestamp_millis())
            });
            let result = recover_analysis(&raw, &request_id);

            write_json(&result, output.as_deref())?;
            println!("\n✅ kurtarma tamamlandı");
        }

        Commands::Classify { nace, employees, expert_minutes, physician_minutes, health_staff } => {
            println!("🏷 plan-ai - tehlike sınıfı\n");

            let hazard_class = classify_nace(&nace)
                .map_err(|e| PlanAiError::InvalidNace(format!("{} ({})", nace, e)))?;
            let requirement = required_team(hazard_class, employees);

            println!("NACE kodu       : {}", nace);
            println!("Tehlike sınıfı  : {}", hazard_class);
            println!("Çalışan sayısı  : {}", employees);
            println!();
            println!("Asgari İSG ekibi (aylık):");
            println!("  İSG uzmanı    : {} dk ({} dk/çalışan)",
                requirement.expert_minutes_total, requirement.expert_minutes_per_employee);
            println!("  İşyeri hekimi : {} dk ({} dk/çalışan)",
                requirement.physician_minutes_total, requirement.physician_minutes_per_employee);
            if requirement.needs_health_staff {
                println!("  Diğer sağlık personeli zorunlu");
            }
            if requirement.full_time_experts > 0 {
                println!("  Tam zamanlı İSG uzmanı: {}", requirement.full_time_experts);
            }

            // Atanmış ekip bildirildiyse yeterlilik denetimi
            if expert_minutes.is_some() || physician_minutes.is_some() || health_staff {
                let assigned = TeamAssignment {
                    expert_minutes: expert_minutes.unwrap_or(0),
                    physician_minutes: physician_minutes.unwrap_or(0),
                    health_staff,
                };
                let findings = validate_team(hazard_class, employees, &assigned);

                println!();
                if findings.is_empty() {
                    println!("✅ Atanmış ekip yeterli");
                } else {
                    println!("⚠ Eksiklikler:");
                    for finding in &findings {
                        println!("  - {}", finding);
                    }
                }
            }
        }

        Commands::Config { set_api_key, show } => {
            let mut config = config;

            if let Some(key) = set_api_key {
                config.set_api_key(key)?;
                println!("✔ API anahtarı kaydedildi");
            }

            if show {
                println!("Ayarlar:");
                println!("  model             : {}", config.model);
                println!("  max görsel boyutu : {}px", config.max_image_size);
                println!("  JPEG kalitesi     : {}", config.jpeg_quality);
                println!("  zaman aşımı       : {}s", config.timeout_seconds);
                println!("  API anahtarı      : {}", if config.api_key.is_some() { "ayarlı" } else { "ayarlı değil" });
            }
        }

        Commands::Cache { clear, folder, info } => {
            let target = folder.unwrap_or_else(|| std::path::PathBuf::from("."));
            let cache_path = analyzer::CacheFile::cache_path(&target);

            if info || !clear {
                if cache_path.exists() {
                    let cache = analyzer::CacheFile::load(&target);
                    println!("Önbellek bilgisi:");
                    println!("  yol   : {}", cache_path.display());
                    println!("  kayıt : {}", cache.len());
                    if let Ok(meta) = std::fs::metadata(&cache_path) {
                        println!("  boyut : {} bayt", meta.len());
                    }
                } else {
                    println!("Önbellek dosyası yok: {}", cache_path.display());
                }
            }

            if clear {
                match analyzer::CacheFile::clear(&target) {
                    Ok(true) => println!("✔ önbellek silindi: {}", cache_path.display()),
                    Ok(false) => println!("önbellek dosyası yok"),
                    Err(e) => println!("önbellek silme hatası: {}", e),
                }
            }
        }
    }

    Ok(())
}

/// Sonucu dosyaya ya da stdout'a güzel biçimli JSON olarak yaz
fn write_json<T: serde::Serialize>(value: &T, output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    match output {
        Some(path) => {
            std::fs::write(path, &json)?;
            println!("✔ sonuç kaydedildi: {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}
