//! Terminal renderings of the list, card and detail views.
//!
//! These functions are pure (state in, text out); the binary decides where
//! the text goes. Labels follow the registry's Polish UI conventions.

use crate::core::mapper::{category_stars, kind_label};
use crate::domain::model::{FetchState, Record, RecordDetail, SearchResult};

pub const EMPTY_STATE_MESSAGE: &str =
    "Nie znaleziono obiektów spełniających kryteria wyszukiwania.";

/// Star row for a category code: N filled, 5-N empty, plus a visible count.
/// Codes without an embedded star count render nothing.
pub fn render_stars(category_code: &str) -> String {
    let stars = category_stars(category_code) as usize;
    if stars == 0 {
        return String::new();
    }
    let filled = "★".repeat(stars.min(5));
    let empty = "☆".repeat(5usize.saturating_sub(stars));
    format!("{filled}{empty} ({stars})")
}

/// One listing card.
pub fn render_card(record: &Record) -> String {
    let mut lines = vec![
        record.name.clone(),
        format!("  {}, {}", record.city, record.region),
        format!("  Rodzaj: {}", kind_label(&record.kind)),
    ];

    let stars = render_stars(&record.category);
    if !stars.is_empty() {
        lines.push(format!("  Kategoria: {stars}"));
    }
    if !record.status.is_empty() {
        lines.push(format!("  Status: {}", record.status));
    }
    if let Some(date) = record.decision_date {
        lines.push(format!("  Data decyzji: {}", date.format("%d.%m.%Y")));
    }
    if let Some(phone) = &record.phone {
        lines.push(format!("  Telefon: {phone}"));
    }
    if let Some(website) = &record.website {
        lines.push(format!("  WWW: {website}"));
    }

    lines.join("\n")
}

/// The whole list view for one coordinator state.
pub fn render_list(state: &FetchState) -> String {
    match state {
        FetchState::Idle => String::new(),
        FetchState::Loading => "Ładowanie obiektów...".to_string(),
        FetchState::Failed(_) => {
            "Wystąpił błąd. Nie udało się pobrać danych z serwera.".to_string()
        }
        FetchState::Ready(result) => render_result_page(result),
    }
}

fn render_result_page(result: &SearchResult) -> String {
    if result.records.is_empty() {
        return EMPTY_STATE_MESSAGE.to_string();
    }

    let mut sections = vec![format!("Znaleziono {} obiektów", result.total_count)];
    for record in &result.records {
        sections.push(render_card(record));
    }
    sections.join("\n\n")
}

/// Full detail view for one establishment.
pub fn render_detail(detail: &RecordDetail) -> String {
    let record = &detail.record;
    let mut lines = vec![record.name.clone(), "=".repeat(record.name.chars().count())];

    push_field(&mut lines, "Rodzaj", kind_label(&record.kind));
    let stars = render_stars(&record.category);
    if !stars.is_empty() {
        push_field(&mut lines, "Kategoria", &stars);
    }
    push_field(&mut lines, "Województwo", &record.region);
    push_field(&mut lines, "Powiat", &record.district);
    push_field(&mut lines, "Gmina", &record.municipality);
    push_field(&mut lines, "Miejscowość", &record.city);
    push_field(&mut lines, "Adres", &record.street);
    push_field(&mut lines, "Kod pocztowy", &record.postal_code);
    push_field(&mut lines, "Status", &record.status);
    if let Some(date) = record.decision_date {
        push_field(&mut lines, "Data decyzji", &date.format("%d.%m.%Y").to_string());
    }
    push_field(&mut lines, "Telefon", record.phone.as_deref().unwrap_or(""));
    push_field(&mut lines, "Email", record.email.as_deref().unwrap_or(""));
    push_field(&mut lines, "WWW", record.website.as_deref().unwrap_or(""));
    push_field(
        &mut lines,
        "Numer ewidencyjny",
        detail.registry_number.as_deref().unwrap_or(""),
    );
    push_field(
        &mut lines,
        "Numer decyzji",
        detail.decision_number.as_deref().unwrap_or(""),
    );
    if let Some(beds) = detail.bed_count {
        push_field(&mut lines, "Liczba miejsc noclegowych", &beds.to_string());
    }
    if let Some(units) = detail.unit_count {
        push_field(&mut lines, "Liczba jednostek", &units.to_string());
    }
    if let Some(accessible) = detail.accessible {
        push_field(
            &mut lines,
            "Dostępny dla niepełnosprawnych",
            if accessible { "tak" } else { "nie" },
        );
    }
    if let Some(description) = &detail.description {
        lines.push(String::new());
        lines.push(description.clone());
    }

    lines.join("\n")
}

/// Pagination footer, 1-based for display.
pub fn render_pagination(page: usize, total_pages: u64) -> String {
    format!("Strona {}/{}", page + 1, total_pages.max(1))
}

fn push_field(lines: &mut Vec<String>, label: &str, value: &str) {
    if !value.is_empty() {
        lines.push(format!("{label}: {value}"));
    }
}
