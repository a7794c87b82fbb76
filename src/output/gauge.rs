//! Match score gauge: banded 0-100 dial with a threshold marker and readout

use colored::{Color, Colorize};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

pub const GAUGE_MIN: u32 = 0;
pub const GAUGE_MAX: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BandColor {
    Red,
    Yellow,
    Green,
}

impl BandColor {
    fn svg_fill(self) -> &'static str {
        match self {
            BandColor::Red => "lightcoral",
            BandColor::Yellow => "yellow",
            BandColor::Green => "lightgreen",
        }
    }

    fn terminal(self) -> Color {
        match self {
            BandColor::Red => Color::Red,
            BandColor::Yellow => Color::Yellow,
            BandColor::Green => Color::Green,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GaugeBand {
    pub start: u32,
    pub end: u32,
    pub color: BandColor,
}

pub const BANDS: [GaugeBand; 3] = [
    GaugeBand { start: 0, end: 50, color: BandColor::Red },
    GaugeBand { start: 50, end: 75, color: BandColor::Yellow },
    GaugeBand { start: 75, end: 100, color: BandColor::Green },
];

/// Gauge for a single match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gauge {
    /// Score as scraped, which may lie outside the domain.
    pub score: u32,
}

impl Gauge {
    pub fn new(score: u32) -> Self {
        Self { score }
    }

    /// Needle value, clamped to the dial's domain.
    pub fn needle_value(&self) -> u32 {
        self.score.clamp(GAUGE_MIN, GAUGE_MAX)
    }

    /// Marker position along the dial: 0.0 at the low end of red, 1.0 at the top of green.
    pub fn marker_fraction(&self) -> f64 {
        f64::from(self.needle_value() - GAUGE_MIN) / f64::from(GAUGE_MAX - GAUGE_MIN)
    }

    /// Band holding the marker. Boundaries belong to the upper band, 100 to green.
    pub fn band(&self) -> GaugeBand {
        let value = self.needle_value();
        BANDS
            .iter()
            .copied()
            .find(|band| value >= band.start && value < band.end)
            .unwrap_or(BANDS[BANDS.len() - 1])
    }

    /// Horizontal bar for terminals, e.g. `0% [███▲██] 100%  62%`.
    pub fn render_terminal(&self, width: usize, use_colors: bool) -> String {
        let width = width.max(10);
        let marker = (self.marker_fraction() * (width - 1) as f64).round() as usize;

        let mut bar = String::new();
        for i in 0..width {
            let cell_value = (i as f64 + 0.5) / width as f64 * f64::from(GAUGE_MAX);
            let band = band_at(cell_value);
            let glyph = if i == marker { "▲" } else { "█" };

            if use_colors {
                let colored = glyph.color(band.color.terminal());
                bar.push_str(&if i == marker { colored.bold().to_string() } else { colored.to_string() });
            } else if i == marker {
                bar.push('|');
            } else {
                bar.push(match band.color {
                    BandColor::Red => 'r',
                    BandColor::Yellow => 'y',
                    BandColor::Green => 'g',
                });
            }
        }

        let readout = format!("{}%", self.score);
        let readout = if use_colors {
            readout.color(self.band().color.terminal()).bold().to_string()
        } else {
            readout
        };

        format!("{}% [{}] {}%  {}", GAUGE_MIN, bar, GAUGE_MAX, readout)
    }

    /// Semicircular SVG dial with the three bands, a threshold needle and a numeric readout.
    pub fn render_svg(&self, title: &str) -> String {
        const CX: f64 = 200.0;
        const CY: f64 = 220.0;
        const OUTER: f64 = 160.0;
        const INNER: f64 = 110.0;

        let mut svg = String::new();
        svg.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 400 300" width="400" height="300" role="img">"#);
        svg.push_str(&format!(
            r#"<text x="{CX}" y="30" text-anchor="middle" font-size="24">{}</text>"#,
            escape_xml(title)
        ));

        for band in BANDS {
            let start = value_angle(f64::from(band.start));
            let end = value_angle(f64::from(band.end));
            svg.push_str(&format!(
                r#"<path class="band" d="{}" fill="{}"/>"#,
                annular_sector(CX, CY, INNER, OUTER, start, end),
                band.color.svg_fill()
            ));
        }

        // value bar along the inner edge of the dial
        let needle = value_angle(f64::from(self.needle_value()));
        if self.needle_value() > GAUGE_MIN {
            svg.push_str(&format!(
                r#"<path class="bar" d="{}" fill="green"/>"#,
                annular_sector(CX, CY, INNER - 20.0, INNER - 5.0, value_angle(0.0), needle)
            ));
        }

        let (x1, y1) = polar(CX, CY, INNER - 25.0, needle);
        let (x2, y2) = polar(CX, CY, OUTER + 5.0, needle);
        svg.push_str(&format!(
            r#"<line class="threshold" x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="red" stroke-width="4"/>"#,
            x1, y1, x2, y2
        ));

        svg.push_str(&format!(
            r#"<text class="readout" x="{CX}" y="{}" text-anchor="middle" font-size="48">{}</text>"#,
            CY - 10.0,
            self.score
        ));
        svg.push_str(&format!(
            r#"<text x="{:.0}" y="{:.0}" text-anchor="middle" font-size="14">{}</text><text x="{:.0}" y="{:.0}" text-anchor="middle" font-size="14">{}</text>"#,
            CX - OUTER + 25.0,
            CY + 20.0,
            GAUGE_MIN,
            CX + OUTER - 25.0,
            CY + 20.0,
            GAUGE_MAX
        ));
        svg.push_str("</svg>");
        svg
    }
}

fn band_at(value: f64) -> GaugeBand {
    BANDS
        .iter()
        .copied()
        .find(|band| value >= f64::from(band.start) && value < f64::from(band.end))
        .unwrap_or(BANDS[BANDS.len() - 1])
}

/// Angle in radians for a dial value: the minimum sits at the left (PI), the maximum at the right (0).
fn value_angle(value: f64) -> f64 {
    let span = f64::from(GAUGE_MAX - GAUGE_MIN);
    PI * (1.0 - (value - f64::from(GAUGE_MIN)) / span)
}

/// Point on a circle; SVG's y axis points down.
fn polar(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
    (cx + radius * angle.cos(), cy - radius * angle.sin())
}

fn annular_sector(cx: f64, cy: f64, inner: f64, outer: f64, start: f64, end: f64) -> String {
    let (ox1, oy1) = polar(cx, cy, outer, start);
    let (ox2, oy2) = polar(cx, cy, outer, end);
    let (ix2, iy2) = polar(cx, cy, inner, end);
    let (ix1, iy1) = polar(cx, cy, inner, start);
    format!(
        "M {:.2} {:.2} A {outer} {outer} 0 0 1 {:.2} {:.2} L {:.2} {:.2} A {inner} {inner} 0 0 0 {:.2} {:.2} Z",
        ox1, oy1, ox2, oy2, ix2, iy2, ix1, iy1
    )
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
