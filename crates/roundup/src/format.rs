/// Renders a two-decimal minor-unit amount for display, e.g. `£0.85`.
pub fn format_minor_units(minor_units: u64, currency: Option<&str>) -> String {
    let whole = minor_units / 100;
    let fraction = minor_units % 100;

    match currency {
        Some("GBP") | None => format!("£{whole}.{fraction:02}"),
        Some("EUR") => format!("€{whole}.{fraction:02}"),
        Some("USD") => format!("${whole}.{fraction:02}"),
        Some(code) => format!("{whole}.{fraction:02} {code}"),
    }
}
