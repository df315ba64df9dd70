//! CSV export of a result page or a single detail record.
//!
//! Every value is double-quote-wrapped but embedded quotes and newlines are
//! not escaped, matching the registry browser's historical export format; the
//! output is therefore not strictly RFC-4180 safe.

use chrono::NaiveDate;

use crate::core::mapper::{category_label, kind_label};
use crate::domain::model::{Record, RecordDetail};
use crate::domain::ports::{Notifier, NoticeKind, Storage};
use crate::utils::error::Result;
use std::sync::Arc;

/// Fixed, ordered column labels of the list export.
pub const LIST_COLUMNS: [&str; 9] = [
    "Nazwa",
    "Rodzaj",
    "Kategoria",
    "Miejscowość",
    "Województwo",
    "Status",
    "Data decyzji",
    "Telefon",
    "WWW",
];

/// Header of the per-field detail export.
pub const DETAIL_COLUMNS: [&str; 2] = ["Pole", "Wartość"];

/// Serialize a result page, one record per row.
pub fn list_to_csv(records: &[Record]) -> String {
    let mut lines = vec![LIST_COLUMNS.join(",")];
    for record in records {
        lines.push(csv_row(&[
            &record.name,
            kind_label(&record.kind),
            &category_label(&record.category),
            &record.city,
            &record.region,
            &record.status,
            &format_date(record.decision_date),
            record.phone.as_deref().unwrap_or(""),
            record.website.as_deref().unwrap_or(""),
        ]));
    }
    lines.join("\n")
}

/// Serialize one detail record, one field per row.
pub fn detail_to_csv(detail: &RecordDetail) -> String {
    let record = &detail.record;
    let rows: Vec<(&str, String)> = vec![
        ("Nazwa", record.name.clone()),
        ("Rodzaj", kind_label(&record.kind).to_string()),
        ("Kategoria", category_label(&record.category)),
        ("Miejscowość", record.city.clone()),
        ("Województwo", record.region.clone()),
        ("Powiat", record.district.clone()),
        ("Gmina", record.municipality.clone()),
        ("Adres", record.street.clone()),
        ("Kod pocztowy", record.postal_code.clone()),
        ("Status", record.status.clone()),
        ("Data decyzji", format_date(record.decision_date)),
        ("Telefon", record.phone.clone().unwrap_or_default()),
        ("Email", record.email.clone().unwrap_or_default()),
        ("WWW", record.website.clone().unwrap_or_default()),
        (
            "Numer ewidencyjny",
            detail.registry_number.clone().unwrap_or_default(),
        ),
        (
            "Numer decyzji",
            detail.decision_number.clone().unwrap_or_default(),
        ),
        (
            "Liczba miejsc noclegowych",
            detail.bed_count.map(|n| n.to_string()).unwrap_or_default(),
        ),
        (
            "Liczba jednostek",
            detail.unit_count.map(|n| n.to_string()).unwrap_or_default(),
        ),
        ("Dostępny dla niepełnosprawnych", format_flag(detail.accessible)),
        ("Obiekt sieciowy", format_flag(detail.affiliated)),
    ];

    let mut lines = vec![DETAIL_COLUMNS.join(",")];
    for (field, value) in rows {
        lines.push(csv_row(&[field, &value]));
    }
    lines.join("\n")
}

pub fn list_export_filename(today: NaiveDate) -> String {
    format!("obiekty_{}.csv", today.format("%Y-%m-%d"))
}

pub fn detail_export_filename(name: &str, today: NaiveDate) -> String {
    let slug: String = name.split_whitespace().collect::<Vec<_>>().join("_");
    format!("obiekt_{}_{}.csv", slug, today.format("%Y-%m-%d"))
}

fn csv_row(values: &[&str]) -> String {
    values
        .iter()
        .map(|value| format!("\"{value}\""))
        .collect::<Vec<_>>()
        .join(",")
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

fn format_flag(flag: Option<bool>) -> String {
    match flag {
        Some(true) => "tak".to_string(),
        Some(false) => "nie".to_string(),
        None => String::new(),
    }
}

/// Writes exports through the storage port and reports the outcome through
/// the notifier. An export failure never affects displayed data.
pub struct CsvExporter<S: Storage> {
    storage: S,
    notifier: Arc<dyn Notifier>,
}

impl<S: Storage> CsvExporter<S> {
    pub fn new(storage: S, notifier: Arc<dyn Notifier>) -> Self {
        Self { storage, notifier }
    }

    pub fn export_list(&self, records: &[Record], today: NaiveDate) -> Result<String> {
        let filename = list_export_filename(today);
        self.write(&filename, list_to_csv(records))
    }

    pub fn export_detail(&self, detail: &RecordDetail, today: NaiveDate) -> Result<String> {
        let filename = detail_export_filename(&detail.record.name, today);
        self.write(&filename, detail_to_csv(detail))
    }

    fn write(&self, filename: &str, content: String) -> Result<String> {
        match self.storage.write_file(filename, content.as_bytes()) {
            Ok(()) => {
                self.notifier
                    .notify(NoticeKind::Success, "Plik CSV został zapisany pomyślnie");
                Ok(filename.to_string())
            }
            Err(e) => {
                tracing::warn!("CSV export failed: {e}");
                self.notifier
                    .notify(NoticeKind::Error, "Nie udało się wyeksportować danych");
                Err(e)
            }
        }
    }
}
