/// Formats a price held in integer cents as a "50.00" style string.
pub fn format_cents(cents: i64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}
