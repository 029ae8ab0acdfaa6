//! Plain-text rendering of the business card. No terminal I/O here.

use crate::domain::{BusinessResult, MAX_RATING};
use chrono::{DateTime, Utc};

const FULL_STAR: char = '★';
const HALF_STAR: char = '⯪';
const EMPTY_STAR: char = '☆';

/// Five-slot star bar: full stars for the whole part, one half star for any
/// fractional part, empty stars for the rest.
pub fn render_stars(rating: f64) -> String {
    let rating = rating.clamp(0.0, MAX_RATING);
    let full = rating.floor() as usize;
    let half = rating.fract() != 0.0;
    let empty = (MAX_RATING - rating.ceil()) as usize;

    let mut out = String::with_capacity(5 * FULL_STAR.len_utf8());
    out.extend(std::iter::repeat_n(FULL_STAR, full));
    if half {
        out.push(HALF_STAR);
    }
    out.extend(std::iter::repeat_n(EMPTY_STAR, empty));
    out
}

/// Integer with comma thousands separators, e.g. `12,345`.
pub fn format_reviews(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// e.g. `January 1, 2024 at 10:00 AM`.
pub fn format_created_at(at: &DateTime<Utc>) -> String {
    at.format("%B %-d, %Y at %I:%M %p").to_string()
}

pub fn render_card(result: &BusinessResult) -> String {
    let mut card = String::new();

    card.push_str("Business Overview\n");
    card.push_str(&format!("Here's what we found about {}\n\n", result.name));

    card.push_str(&format!("{}\n", result.name));
    card.push_str(&format!("  @ {}\n\n", result.location));

    card.push_str(&format!(
        "Google Rating   {}  {}\n",
        result.rating,
        render_stars(result.rating)
    ));
    card.push_str(&format!(
        "Total Reviews   {}  customer reviews\n\n",
        format_reviews(result.reviews)
    ));

    card.push_str("AI-Generated SEO Headline\n");
    card.push_str(&format!("  \"{}\"\n\n", result.headline));

    card.push_str(&format!(
        "Data generated on {} UTC\n",
        format_created_at(&result.created_at)
    ));
    card
}

pub fn render_empty_state() -> &'static str {
    "Ready to get started?\nFill out the form to see your business insights\n"
}
