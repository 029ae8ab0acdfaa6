//! Welcome banner: "BIZ-DASH" in figlet with a blue -> indigo gradient.

use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};

const TITLE: &str = "BIZ-DASH";

/// Sky blue (#38bdf8).
const SKY: (u8, u8, u8) = (0x38, 0xbd, 0xf8);
/// Indigo (#6366f1).
const INDIGO: (u8, u8, u8) = (0x63, 0x66, 0xf1);

/// Linear interpolation between two RGB colors. `t` in [0.0, 1.0].
fn lerp_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let mix = |x: u8, y: u8| (f64::from(x) * (1.0 - t) + f64::from(y) * t).round() as u8;
    (mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
}

fn banner_art() -> String {
    FIGfont::standard()
        .ok()
        .and_then(|font| font.convert(TITLE).map(|fig| fig.to_string()))
        .unwrap_or_else(|| format!("{}\n", TITLE))
}

/// Prints the title art, the version and the tagline.
pub fn print_welcome() {
    let mut out = stdout();
    let art = banner_art();
    let lines: Vec<&str> = art.lines().collect();
    let last = lines.len().saturating_sub(1).max(1) as f64;

    for (i, line) in lines.iter().enumerate() {
        let (r, g, b) = lerp_rgb(SKY, INDIGO, i as f64 / last);
        let _ = out.execute(SetForegroundColor(Color::Rgb { r, g, b }));
        let _ = out.execute(Print(line));
        let _ = out.execute(Print("\r\n"));
        let _ = out.execute(ResetColor);
    }

    let _ = out.execute(SetForegroundColor(Color::Rgb {
        r: INDIGO.0,
        g: INDIGO.1,
        b: INDIGO.2,
    }));
    let _ = out.execute(Print(format!(
        "Local Business Dashboard v{}\r\n",
        env!("CARGO_PKG_VERSION")
    )));
    let _ = out.execute(Print(
        "Discover insights about your local business presence\r\n\r\n",
    ));
    let _ = out.execute(ResetColor);
    let _ = out.flush();
}
