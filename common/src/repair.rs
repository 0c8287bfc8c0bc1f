//! Kesik JSON onarım adımları
//!
//! Modelin çıktı limiti yüzünden yarıda kalan JSON metnini katı çözümleme
//! öncesinde onaran saf string→string dönüşümleri. Adım sırası önemlidir:
//! - Markdown temizliği köşeli parantez aramasından önce gelir
//!   (çit içindeki düz metin parantez içerebilir)
//! - Yarım dizi kesmesi yarım string kesmesinden önce çalışır
//!   (en sık kesilme noktası dizi elemanıdır; önce onu düzeltmek
//!   kesmelerin üst üste binmesini önler)
//! - Parantez dengeleme her iki kesme adımından sonra çalışır ki
//!   sayımlar kırpılmış tamponu yansıtsın

use regex::Regex;

/// Markdown kod çiti işaretlerini kaldır (```json etiketi dahil)
pub fn strip_markdown_fences(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "")
}

/// İlk `{` öncesindeki her şeyi at
///
/// Hiç `{` yoksa çözümlenebilir nesne de yoktur; `None` döner ve
/// çağıran doğrudan yedek çıkarıcıya geçer.
pub fn trim_to_first_brace(text: &str) -> Option<String> {
    text.find('{').map(|idx| text[idx..].to_string())
}

/// Yarıda kalan dizi özelliğini at
///
/// Son `[` son `]`'den sonra geliyorsa dizi açılmış ama kapanmamıştır;
/// bu kesilme kanıtıdır. Tampon, `[`'den önceki son virgüle kadar
/// kırpılır ve yarım dizi özelliği bütünüyle atılır. Yarım yazılmış bir
/// dizi elemanı kurtarılamaz; kısmi kayıtların sonuca sızmaması gerekir.
/// `[`'den önce virgül yoksa dizi nesnenin ilk özelliğidir; kesme
/// yapılmaz, parantez dengeleme diziyi boş olarak kapatır.
pub fn drop_unclosed_array(text: &str) -> String {
    let last_open = match text.rfind('[') {
        Some(idx) => idx,
        None => return text.to_string(),
    };

    let closed_after = text.rfind(']').map_or(false, |idx| idx > last_open);
    if closed_after {
        return text.to_string();
    }

    match text[..last_open].rfind(',') {
        Some(comma) => text[..comma].to_string(),
        None => text.to_string(),
    }
}

/// Yarıda kalan string değerini at
///
/// Tek sayıda `"` varsa bir string değerin ortasında kesilmiştir.
/// Son tırnaktan önceki son virgüle kadar kırpılır ve yarım
/// anahtar/değer çifti atılır. Kaçışlı tırnaklar sayılmaz; bu bilinen
/// bir sezgisel sınırlamadır, başarısızlık yedek çıkarıcıya düşer.
pub fn drop_unclosed_string(text: &str) -> String {
    let quote_count = text.matches('"').count();
    if quote_count % 2 == 0 {
        return text.to_string();
    }

    let last_quote = match text.rfind('"') {
        Some(idx) => idx,
        None => return text.to_string(),
    };

    match text[..last_quote].rfind(',') {
        Some(comma) => text[..comma].to_string(),
        None => text.to_string(),
    }
}

/// Eşleşmemiş parantezleri kapat
///
/// Açık kalan her `[` için bir `]`, ardından açık kalan her `{` için
/// bir `}` eklenir; diziler kendilerini saran nesnelerden önce
/// kapanmalıdır. Sayım naiftir (string içi parantezleri ayırt etmez) ve
/// gerçek iç içe geçme sırası yeniden kurulmaz; derin bozuk girdide
/// çözümlenebilir ama anlamca kaymış bir yapı üretebilir. Bu bilinen
/// bir sezgisel sınırlamadır.
pub fn balance_brackets(text: &str) -> String {
    let open_brackets = text.matches('[').count();
    let close_brackets = text.matches(']').count();
    let open_braces = text.matches('{').count();
    let close_braces = text.matches('}').count();

    let mut balanced = text.to_string();
    for _ in 0..open_brackets.saturating_sub(close_brackets) {
        balanced.push(']');
    }
    for _ in 0..open_braces.saturating_sub(close_braces) {
        balanced.push('}');
    }
    balanced
}

/// Kapanış öncesi sarkan virgülleri kaldır
///
/// Kesme adımlarının yan etkisi olarak `,}` / `,]` kalıntıları oluşur.
pub fn strip_trailing_commas(text: &str) -> String {
    lazy_static::lazy_static! {
        static ref TRAILING_COMMA_RE: Regex = Regex::new(r",\s*([}\]])").unwrap();
    }
    TRAILING_COMMA_RE.replace_all(text, "$1").into_owned()
}

/// Boşluk dizilerini tek boşluğa indir
///
/// Bazı modellerin ürettiği çözümleyici düşmanı biçimlemeye karşı
/// normalizasyon; satır sonları ve sekmeler de kapsanır.
pub fn collapse_whitespace(text: &str) -> String {
    lazy_static::lazy_static! {
        static ref WHITESPACE_RE: Regex = Regex::new(r"\s+").unwrap();
    }
    WHITESPACE_RE.replace_all(text, " ").trim().to_string()
}

/// Onarım hattının tamamı
///
/// Adımlar sırayla uygulanır; hiç `{` bulunamazsa `None` döner
/// (çağıran yedek çıkarıcıya geçmelidir). Dönen string katı
/// çözümlemeyi garanti etmez, yalnızca en iyi çabayla onarılmıştır.
pub fn repair_json(raw: &str) -> Option<String> {
    let stripped = strip_markdown_fences(raw);
    let trimmed = trim_to_first_brace(&stripped)?;
    let cut_array = drop_unclosed_array(&trimmed);
    let cut_string = drop_unclosed_string(&cut_array);
    let balanced = balance_brackets(&cut_string);
    let no_commas = strip_trailing_commas(&balanced);
    Some(collapse_whitespace(&no_commas))
}
