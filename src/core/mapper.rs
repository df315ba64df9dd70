//! Translates registry wire payloads into domain records.
//!
//! The registry's payload shape changed over time: listing responses are either
//! a `{ content: [...], totalElements, totalPages }` envelope carrying English
//! field names, or a bare array of records with flat Polish field names. Both
//! shapes are handled as an exhaustive set of tagged variants; anything else is
//! rejected with a typed [`RegistryError::UnrecognizedShape`] instead of
//! silently producing partial data.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::Deserialize;

use crate::domain::model::{Record, RecordDetail, SearchResult};
use crate::utils::error::{RegistryError, Result};

/// Display labels for the registry's lodging-kind codes. Unknown codes pass
/// through verbatim.
const KIND_LABELS: &[(&str, &str)] = &[
    ("RODZ_HOT", "hotel"),
    ("RODZ_MOT", "motel"),
    ("RODZ_PEN", "pensjonat"),
    ("RODZ_KEM", "kemping"),
    ("RODZ_DW", "dom wycieczkowy"),
    ("RODZ_SCH", "schronisko"),
    ("RODZ_SM", "schronisko młodzieżowe"),
    ("RODZ_PB", "pole biwakowe"),
];

pub fn kind_label(code: &str) -> &str {
    KIND_LABELS
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, label)| *label)
        .unwrap_or(code)
}

/// Star count embedded in a category code: the digits preceding the `ST`
/// marker (`KAT_3ST_HOT` → 3). Absent or unparseable codes yield zero.
pub fn category_stars(code: &str) -> u8 {
    static STARS: OnceLock<Regex> = OnceLock::new();
    let re = STARS.get_or_init(|| Regex::new(r"(\d+)ST").unwrap());
    re.captures(code)
        .and_then(|caps| caps.get(1))
        .and_then(|digits| digits.as_str().parse().ok())
        .unwrap_or(0)
}

/// Display label for a category code. Star categories are rendered from the
/// embedded count; unknown codes pass through verbatim.
pub fn category_label(code: &str) -> String {
    match category_stars(code) {
        0 => code.to_string(),
        1 => "1 gwiazdka".to_string(),
        n @ 2..=4 => format!("{n} gwiazdki"),
        n => format!("{n} gwiazdek"),
    }
}

/// Parse a listing payload (either known shape) into a search result.
pub fn map_list_payload(payload: serde_json::Value) -> Result<SearchResult> {
    let parsed: ListPayload =
        serde_json::from_value(payload).map_err(|e| RegistryError::UnrecognizedShape {
            context: format!("listing payload: {e}"),
        })?;

    Ok(match parsed {
        ListPayload::Enveloped {
            content,
            total_elements,
            total_pages,
        } => SearchResult {
            total_count: total_elements.unwrap_or(content.len() as u64),
            total_pages: total_pages.unwrap_or(1),
            records: content.into_iter().map(WireRecord::into_record).collect(),
        },
        ListPayload::Bare(records) => SearchResult {
            total_count: records.len() as u64,
            total_pages: 1,
            records: records.into_iter().map(WireRecord::into_record).collect(),
        },
    })
}

/// Parse a detail payload (bare or `content`-wrapped) into a record detail.
pub fn map_detail_payload(payload: serde_json::Value) -> Result<RecordDetail> {
    let parsed: DetailPayload =
        serde_json::from_value(payload).map_err(|e| RegistryError::UnrecognizedShape {
            context: format!("detail payload: {e}"),
        })?;

    Ok(match parsed {
        DetailPayload::Enveloped { content } => content.into_detail(),
        DetailPayload::Bare(record) => record.into_detail(),
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListPayload {
    Enveloped {
        content: Vec<WireRecord>,
        #[serde(rename = "totalElements")]
        total_elements: Option<u64>,
        #[serde(rename = "totalPages")]
        total_pages: Option<u64>,
    },
    Bare(Vec<WireRecord>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DetailPayload {
    Enveloped { content: WireRecord },
    Bare(WireRecord),
}

/// One record as it appears on the wire, in either field-naming revision. The
/// required display-name field (`name` vs `nazwa`) discriminates the variants.
#[derive(Deserialize)]
#[serde(untagged)]
enum WireRecord {
    English(EnglishRecord),
    Polish(PolishRecord),
}

#[derive(Deserialize)]
struct EnglishRecord {
    #[serde(default)]
    uid: String,
    name: String,
    #[serde(default)]
    kind: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    voivodeship: String,
    #[serde(default)]
    district: String,
    #[serde(default)]
    community: String,
    #[serde(default)]
    city: String,
    #[serde(default)]
    street: String,
    #[serde(default, rename = "postalCode")]
    postal_code: String,
    #[serde(default)]
    status: String,
    #[serde(rename = "decisionDate")]
    decision_date: Option<String>,
    phone: Option<String>,
    email: Option<String>,
    website: Option<String>,
    description: Option<String>,
    #[serde(rename = "registryNumber")]
    registry_number: Option<String>,
    #[serde(rename = "decisionNumber")]
    decision_number: Option<String>,
    #[serde(rename = "bedCount")]
    bed_count: Option<u32>,
    #[serde(rename = "unitCount")]
    unit_count: Option<u32>,
    accessible: Option<bool>,
    affiliated: Option<bool>,
}

#[derive(Deserialize)]
struct PolishRecord {
    #[serde(default)]
    uid: String,
    nazwa: String,
    #[serde(default)]
    rodzaj: String,
    #[serde(default)]
    kategoria: String,
    #[serde(default)]
    wojewodztwo: String,
    #[serde(default)]
    powiat: String,
    #[serde(default)]
    gmina: String,
    #[serde(default)]
    miejscowosc: String,
    #[serde(default, alias = "adres")]
    ulica: String,
    #[serde(default, rename = "kodPocztowy")]
    kod_pocztowy: String,
    #[serde(default)]
    status: String,
    #[serde(rename = "dataDecyzji")]
    data_decyzji: Option<String>,
    telefon: Option<String>,
    email: Option<String>,
    www: Option<String>,
    opis: Option<String>,
    #[serde(rename = "numerEwidencyjny")]
    numer_ewidencyjny: Option<String>,
    #[serde(rename = "numerDecyzji")]
    numer_decyzji: Option<String>,
    #[serde(rename = "liczbaMiejscNoclegowych")]
    liczba_miejsc: Option<u32>,
    #[serde(rename = "liczbaJednostek")]
    liczba_jednostek: Option<u32>,
    #[serde(rename = "przystosowanyDlaNiepelnosprawnych")]
    przystosowany: Option<bool>,
    #[serde(rename = "obiektSieciowy")]
    obiekt_sieciowy: Option<bool>,
}

impl WireRecord {
    fn into_record(self) -> Record {
        self.into_detail().record
    }

    fn into_detail(self) -> RecordDetail {
        match self {
            WireRecord::English(r) => RecordDetail {
                record: Record {
                    uid: r.uid,
                    name: r.name,
                    kind: r.kind,
                    category: r.category,
                    region: r.voivodeship,
                    district: r.district,
                    municipality: r.community,
                    city: r.city,
                    street: r.street,
                    postal_code: r.postal_code,
                    status: r.status,
                    decision_date: r.decision_date.as_deref().and_then(parse_wire_date),
                    phone: r.phone,
                    email: r.email,
                    website: r.website,
                },
                description: r.description,
                registry_number: r.registry_number,
                decision_number: r.decision_number,
                bed_count: r.bed_count,
                unit_count: r.unit_count,
                accessible: r.accessible,
                affiliated: r.affiliated,
            },
            WireRecord::Polish(r) => RecordDetail {
                record: Record {
                    uid: r.uid,
                    name: r.nazwa,
                    kind: r.rodzaj,
                    category: r.kategoria,
                    region: r.wojewodztwo,
                    district: r.powiat,
                    municipality: r.gmina,
                    city: r.miejscowosc,
                    street: r.ulica,
                    postal_code: r.kod_pocztowy,
                    status: r.status,
                    decision_date: r.data_decyzji.as_deref().and_then(parse_wire_date),
                    phone: r.telefon,
                    email: r.email,
                    website: r.www,
                },
                description: r.opis,
                registry_number: r.numer_ewidencyjny,
                decision_number: r.numer_decyzji,
                bed_count: r.liczba_miejsc,
                unit_count: r.liczba_jednostek,
                accessible: r.przystosowany,
                affiliated: r.obiekt_sieciowy,
            },
        }
    }
}

/// Wire dates arrive as `YYYY-MM-DD`, sometimes with a time suffix. Anything
/// else is treated as absent.
fn parse_wire_date(raw: &str) -> Option<NaiveDate> {
    let date_part = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn maps_enveloped_english_listing() {
        let payload = json!({
            "content": [{
                "uid": "CWOH-1",
                "name": "Hotel Bristol",
                "kind": "RODZ_HOT",
                "category": "KAT_5ST_HOT",
                "voivodeship": "mazowieckie",
                "district": "Warszawa",
                "community": "Warszawa",
                "city": "Warszawa",
                "street": "Krakowskie Przedmieście 42/44",
                "postalCode": "00-325",
                "status": "AKTYWNY",
                "decisionDate": "2019-03-01",
                "phone": "+48 22 551 10 00",
                "website": "https://example.com"
            }],
            "totalElements": 97,
            "totalPages": 5,
            "number": 0,
            "size": 20
        });

        let result = map_list_payload(payload).unwrap();
        assert_eq!(result.total_count, 97);
        assert_eq!(result.total_pages, 5);
        assert_eq!(result.records.len(), 1);

        let record = &result.records[0];
        assert_eq!(record.uid, "CWOH-1");
        assert_eq!(record.name, "Hotel Bristol");
        assert_eq!(record.region, "mazowieckie");
        assert_eq!(record.municipality, "Warszawa");
        assert_eq!(
            record.decision_date,
            NaiveDate::from_ymd_opt(2019, 3, 1)
        );
    }

    #[test]
    fn maps_bare_polish_listing() {
        let payload = json!([{
            "uid": "CWOH-2",
            "nazwa": "Pensjonat Widok",
            "rodzaj": "RODZ_PEN",
            "kategoria": "KAT_2ST_PEN",
            "wojewodztwo": "małopolskie",
            "powiat": "tatrzański",
            "gmina": "Zakopane",
            "miejscowosc": "Zakopane",
            "kodPocztowy": "34-500",
            "status": "AKTYWNY",
            "dataDecyzji": "2021-07-15T00:00:00",
            "telefon": "+48 18 000 00 00"
        }]);

        let result = map_list_payload(payload).unwrap();
        assert_eq!(result.total_count, 1);
        assert_eq!(result.total_pages, 1);

        let record = &result.records[0];
        assert_eq!(record.name, "Pensjonat Widok");
        assert_eq!(record.district, "tatrzański");
        assert_eq!(record.phone.as_deref(), Some("+48 18 000 00 00"));
        assert_eq!(
            record.decision_date,
            NaiveDate::from_ymd_opt(2021, 7, 15)
        );
    }

    #[test]
    fn unrecognized_listing_shape_is_a_typed_error() {
        let err = map_list_payload(json!({"rows": []})).unwrap_err();
        assert!(matches!(err, RegistryError::UnrecognizedShape { .. }));

        let err = map_list_payload(json!("not a listing")).unwrap_err();
        assert!(matches!(err, RegistryError::UnrecognizedShape { .. }));
    }

    #[test]
    fn maps_wrapped_and_bare_detail_payloads() {
        let bare = json!({
            "uid": "CWOH-3",
            "nazwa": "Motel Zajazd",
            "rodzaj": "RODZ_MOT",
            "status": "ZAWIESZONY",
            "opis": "Przy trasie A2",
            "numerEwidencyjny": "123/2020",
            "liczbaMiejscNoclegowych": 44,
            "przystosowanyDlaNiepelnosprawnych": true
        });
        let wrapped = json!({ "content": bare.clone() });

        let detail = map_detail_payload(bare).unwrap();
        assert_eq!(detail.record.name, "Motel Zajazd");
        assert_eq!(detail.description.as_deref(), Some("Przy trasie A2"));
        assert_eq!(detail.bed_count, Some(44));
        assert_eq!(detail.accessible, Some(true));

        let detail = map_detail_payload(wrapped).unwrap();
        assert_eq!(detail.record.name, "Motel Zajazd");
        assert_eq!(detail.registry_number.as_deref(), Some("123/2020"));
    }

    #[test]
    fn kind_labels_translate_known_codes_and_pass_through_unknown() {
        assert_eq!(kind_label("RODZ_HOT"), "hotel");
        assert_eq!(kind_label("RODZ_SM"), "schronisko młodzieżowe");
        assert_eq!(kind_label("RODZ_XYZ"), "RODZ_XYZ");
    }

    #[test]
    fn star_count_comes_from_digits_before_the_st_marker() {
        assert_eq!(category_stars("KAT_3ST_HOT"), 3);
        assert_eq!(category_stars("KAT_1ST_MOT"), 1);
        assert_eq!(category_stars("KAT_5ST_HOT"), 5);
        assert_eq!(category_stars(""), 0);
        assert_eq!(category_stars("KAT_LUX"), 0);
    }

    #[test]
    fn category_labels_inflect_by_count() {
        assert_eq!(category_label("KAT_1ST_HOT"), "1 gwiazdka");
        assert_eq!(category_label("KAT_3ST_HOT"), "3 gwiazdki");
        assert_eq!(category_label("KAT_5ST_HOT"), "5 gwiazdek");
        assert_eq!(category_label("KAT_LUX"), "KAT_LUX");
    }
}
