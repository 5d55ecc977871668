//! SVG chart rendering.
//!
//! Implements the engine's [`ChartRenderer`] contract by writing SVG markup
//! directly. The output is sent to the user as a document attachment.

use std::f64::consts::TAU;
use std::fmt::Write as _;

use engine::{ChartRenderer, Currency, Money, RenderError};

const WIDTH: u32 = 640;
const HEIGHT: u32 = 400;
const CENTER_X: f64 = 190.0;
const CENTER_Y: f64 = 210.0;
const RADIUS: f64 = 150.0;

const PALETTE: [&str; 8] = [
    "#4e79a7", "#f28e2b", "#e15759", "#76b7b2", "#59a14f", "#edc948", "#b07aa1", "#9c755f",
];

/// Pie chart over category totals, one slice per category.
#[derive(Debug, Default)]
pub struct SvgPieChart;

impl ChartRenderer for SvgPieChart {
    fn render(
        &self,
        slices: &[(String, Money)],
        currency: Currency,
    ) -> Result<Vec<u8>, RenderError> {
        let total: i64 = slices.iter().map(|(_, amount)| amount.cents()).sum();
        if total <= 0 {
            return Ok(placeholder().into_bytes());
        }

        let mut svg = header();
        let _ = write!(
            svg,
            r#"<text x="{x}" y="30" text-anchor="middle" font-size="20" font-weight="bold">Spending breakdown</text>
<text x="{x}" y="54" text-anchor="middle" font-size="14" fill="gray">Total: {total}</text>
"#,
            x = WIDTH / 2,
            total = Money::new(total).format(currency)
        );

        if slices.len() == 1 {
            // A single full slice degenerates as an arc; draw the disc.
            let _ = write!(
                svg,
                r#"<circle cx="{CENTER_X}" cy="{CENTER_Y}" r="{RADIUS}" fill="{color}"/>
"#,
                color = PALETTE[0]
            );
        } else {
            let mut start = 0.0_f64;
            for (index, (_, amount)) in slices.iter().enumerate() {
                let fraction = amount.cents() as f64 / total as f64;
                let end = start + fraction * TAU;
                let _ = write!(
                    svg,
                    r#"<path d="M{CENTER_X:.2} {CENTER_Y:.2} L{x0:.2} {y0:.2} A{RADIUS:.2} {RADIUS:.2} 0 {large} 1 {x1:.2} {y1:.2} Z" fill="{color}"/>
"#,
                    x0 = CENTER_X + RADIUS * start.sin(),
                    y0 = CENTER_Y - RADIUS * start.cos(),
                    large = i32::from(fraction > 0.5),
                    x1 = CENTER_X + RADIUS * end.sin(),
                    y1 = CENTER_Y - RADIUS * end.cos(),
                    color = PALETTE[index % PALETTE.len()]
                );
                start = end;
            }
        }

        for (index, (category, amount)) in slices.iter().enumerate() {
            let y = 90 + 24 * index as u32;
            let share = amount.cents() as f64 / total as f64 * 100.0;
            let _ = write!(
                svg,
                r#"<rect x="380" y="{box_y}" width="14" height="14" fill="{color}"/>
<text x="402" y="{y}" font-size="13">{category}: {amount} ({share:.1}%)</text>
"#,
                box_y = y - 12,
                color = PALETTE[index % PALETTE.len()],
                amount = amount.format(currency)
            );
        }

        svg.push_str("</svg>\n");
        Ok(svg.into_bytes())
    }
}

fn header() -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}" font-family="sans-serif">
<rect width="{WIDTH}" height="{HEIGHT}" fill="white"/>
"#
    )
}

/// The "no data" image: still a valid chart document, never an error.
fn placeholder() -> String {
    let mut svg = header();
    let _ = write!(
        svg,
        r#"<text x="{x}" y="{y}" text-anchor="middle" font-size="16" fill="gray">No expenses to display</text>
</svg>
"#,
        x = WIDTH / 2,
        y = HEIGHT / 2
    );
    svg
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slices(pairs: &[(&str, i64)]) -> Vec<(String, Money)> {
        pairs
            .iter()
            .map(|(category, cents)| (category.to_string(), Money::new(*cents)))
            .collect()
    }

    fn render(pairs: &[(&str, i64)]) -> String {
        let bytes = SvgPieChart
            .render(&slices(pairs), Currency::Inr)
            .unwrap();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn draws_one_path_per_category_with_legend() {
        let svg = render(&[("#food", 15_000), ("#transport", 8_000), ("#fun", 20_000)]);
        assert_eq!(svg.matches("<path").count(), 3);
        assert!(svg.contains("#food: ₹150.00 (34.9%)"));
        assert!(svg.contains("Total: ₹430.00"));
    }

    #[test]
    fn single_category_renders_a_full_disc() {
        let svg = render(&[("#food", 15_000)]);
        assert!(svg.contains("<circle"));
        assert_eq!(svg.matches("<path").count(), 0);
    }

    #[test]
    fn empty_input_yields_the_placeholder() {
        let svg = render(&[]);
        assert!(svg.contains("No expenses to display"));
        assert!(svg.starts_with("<svg"));
    }

    #[test]
    fn output_is_well_formed_enough_to_close() {
        let svg = render(&[("#a", 100), ("#b", 200)]);
        assert!(svg.trim_end().ends_with("</svg>"));
    }
}
