use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "plan-ai")]
#[command(about = "İSG kroki AI analizi ve tehlike sınıfı araçları", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Detaylı log çıktısı
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Kroki görselini analiz edip JSON sonucu üret
    Analyze {
        /// Kroki görsel dosyası (jpg/png)
        #[arg(required = true)]
        image: PathBuf,

        /// Çıktı JSON dosyası (varsayılan: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Bina kategorisi ipucu (modele iletilir)
        #[arg(long)]
        hint: Option<String>,

        /// Önbelleği kullan (aynı görselin yeniden analizini atla)
        #[arg(long)]
        use_cache: bool,
    },

    /// Kaydedilmiş ham model çıktısı üzerinde kurtarma hattını çalıştır
    Recover {
        /// Ham yanıt dosyası ("-" stdin)
        #[arg(required = true)]
        input: PathBuf,

        /// Çıktı JSON dosyası (varsayılan: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Tanı etiketlerinde kullanılacak istek kimliği
        #[arg(long)]
        request_id: Option<String>,
    },

    /// NACE koduna göre tehlike sınıfı ve İSG ekip gereksinimi
    Classify {
        /// NACE Rev.2 faaliyet kodu (örn. 41.00.02)
        #[arg(long)]
        nace: String,

        /// Çalışan sayısı
        #[arg(short, long)]
        employees: u32,

        /// Atanmış aylık İSG uzmanı süresi (dakika)
        #[arg(long)]
        expert_minutes: Option<u32>,

        /// Atanmış aylık işyeri hekimi süresi (dakika)
        #[arg(long)]
        physician_minutes: Option<u32>,

        /// Diğer sağlık personeli atanmış
        #[arg(long)]
        health_staff: bool,
    },

    /// Ayarları görüntüle/düzenle
    Config {
        /// API anahtarını ayarla
        #[arg(long)]
        set_api_key: Option<String>,

        /// Ayarları görüntüle
        #[arg(long)]
        show: bool,
    },

    /// Önbellek yönetimi
    Cache {
        /// Önbelleği sil
        #[arg(long)]
        clear: bool,

        /// Hedef klasör (varsayılan: geçerli dizin)
        #[arg(short, long)]
        folder: Option<PathBuf>,

        /// Önbellek bilgisini görüntüle
        #[arg(long)]
        info: bool,
    },
}
