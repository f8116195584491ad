//! Text formatting shared by the renderers

use chrono::{DateTime, Utc};

/// Long date, e.g. `October 18, 2026`
pub fn format_date(at: DateTime<Utc>) -> String {
    at.format("%B %-d, %Y").to_string()
}
