//! Prompt üretim modülü
//!
//! Vision modeline gönderilen sabit sistem promptu. Model tek bir katı
//! JSON nesnesi üretmeye zorlanır; yine de kesik/bozuk çıktı olasılığı
//! kurtarma hattı tarafından karşılanır.

/// Kroki analizi promptu
///
/// # Arguments
/// * `building_hint` - Kullanıcının bildirdiği bina kategorisi ipucu
///   (örn. "Ofis binası"); verilirse modele iletilir
pub fn build_blueprint_prompt(building_hint: Option<&str>) -> String {
    let hint_line = building_hint
        .map(|hint| format!("\n- Bina kategorisi ipucu: \"{}\" (görselle çelişmiyorsa kullan)", hint))
        .unwrap_or_default();

    format!(
        r#"Sen bir iş sağlığı ve güvenliği (İSG) uzmanısın. Verilen mimari kroki/kat planı görselini yangın ve acil durum güvenliği açısından analiz et.

## Çıktı formatı (kesinlikle bu JSON nesne formatında, tek nesne)
{{
  "project_info": {{
    "area_type": "alan tipi (örn. open_office, production_hall, storage)",
    "detected_floor": 1,
    "building_category": "bina kategorisi",
    "estimated_area_sqm": 0
  }},
  "equipment_inventory": [
    {{
      "type": "extinguisher|exit|hydrant|first_aid|assembly_point",
      "count": 0,
      "locations": ["konum açıklaması"],
      "adequacy_status": "sufficient|insufficient|excessive"
    }}
  ],
  "safety_violations": [
    {{
      "issue": "tespit edilen sorun",
      "regulation_reference": "ilgili mevzuat maddesi",
      "severity": "critical|warning|info",
      "recommended_action": "önerilen düzeltici faaliyet"
    }}
  ],
  "expert_suggestions": ["serbest metin öneri"],
  "compliance_score": 0
}}

## Dikkat
- Yalnızca JSON nesnesi çıkar; açıklama metni, markdown çiti ekleme
- Görselde görmediğin ekipmanı envantere yazma
- equipment_inventory.type yalnızca listedeki beş değerden biri olsun
- severity için: can güvenliğini doğrudan tehdit eden eksik = critical
- compliance_score 0-100 arası tamsayı; emin değilsen alanı tamamen atla
- Kat numarası okunamıyorsa detected_floor için 1 kullan{hint_line}"#
    )
}
