use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use textplots::{Chart, Plot, Shape};

use summonstat_core::UniqueDistribution;

use crate::config::ChartConfig;

/// `%g`-style formatting with `digits` significant digits.
pub fn format_significant(value: f64, digits: usize) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{value}");
    }

    let digits = digits.max(1);
    let scientific = format!("{:.*e}", digits - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    if exponent < -4 || exponent >= digits as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value))
    }
}

fn trim_fraction(s: &str) -> String {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s.to_string()
    }
}

/// Text shown for one bar.
pub fn annotation(k: u32, probability: f64, digits: usize) -> String {
    format!("k = {}\nP = {}", k, format_significant(probability, digits))
}

/// Bar heights; log10 in log scale, where underflowed zeros are dropped.
pub fn bar_points(dist: &UniqueDistribution, log_scale: bool) -> Vec<(f32, f32)> {
    dist.iter()
        .filter_map(|(k, p)| {
            if log_scale {
                (p > 0.0).then(|| (k as f32, p.log10() as f32))
            } else {
                Some((k as f32, p as f32))
            }
        })
        .collect()
}

pub fn y_range(points: &[(f32, f32)], log_scale: bool) -> (f32, f32) {
    let max = points.iter().map(|&(_, y)| y).fold(f32::NEG_INFINITY, f32::max);
    if !log_scale {
        let top = if max.is_finite() && max > 0.0 { max * 1.05 } else { 1.0 };
        return (0.0, top);
    }

    let min = points.iter().map(|&(_, y)| y).fold(f32::INFINITY, f32::min);
    if !min.is_finite() {
        return (-1.0, 0.0);
    }
    let low = min.floor();
    // ceil of a negative fraction is -0.0
    let high = max.ceil() + 0.0;
    if high - low < 1.0 {
        (high - 1.0, high)
    } else {
        (low, high)
    }
}

/// Half of a bar's width in units of k.
const BAR_HALF_WIDTH: f32 = 0.4;

/// One polyline filling every bar as a rectangle over [k - 0.4, k + 0.4] x [baseline, y].
///
/// Vertical strokes are half a braille dot apart so the rectangles render solid, and each
/// bar ends on the baseline so consecutive bars are only joined along it.
pub fn bar_path(points: &[(f32, f32)], baseline: f32, x_span: f32, width: u32) -> Vec<(f32, f32)> {
    let step = x_span / (2 * width.max(1)) as f32;
    let mut path = Vec::new();

    for &(x, y) in points {
        let left = x - BAR_HALF_WIDTH;
        let right = x + BAR_HALF_WIDTH;
        let strokes = ((right - left) / step).ceil().max(1.0) as usize;

        for stroke in 0..=strokes {
            let sx = (left + stroke as f32 * step).min(right);
            if stroke % 2 == 0 {
                path.push((sx, baseline));
                path.push((sx, y));
            } else {
                path.push((sx, y));
                path.push((sx, baseline));
            }
        }
        path.push((right, baseline));
    }

    path
}

/// The chart canvas with its axis labels, `None` when no bar is drawable.
pub fn render_chart(dist: &UniqueDistribution, config: &ChartConfig) -> Option<String> {
    let points = bar_points(dist, config.log_scale);
    if points.is_empty() {
        return None;
    }

    let support = dist.support();
    let x_min = *support.start() as f32 - 0.5;
    let x_max = *support.end() as f32 + 0.5;
    let (y_min, y_max) = y_range(&points, config.log_scale);
    // log bars grow up from the bottom of the axis, not from log10(1) = 0
    let baseline = if config.log_scale { y_min } else { 0.0 };

    let path = bar_path(&points, baseline, x_max - x_min, config.width);
    let shape = Shape::Lines(&path);
    let mut chart = Chart::new_with_y_range(config.width, config.height, x_min, x_max, y_min, y_max);
    let plot = chart.lineplot(&shape);
    plot.axis();
    plot.figures();
    Some(format!("{plot}"))
}

pub fn display_chart(dist: &UniqueDistribution, config: &ChartConfig) {
    println!("\n{}\n", config.title_for(dist.summons(), dist.heroes()));

    match render_chart(dist, config) {
        Some(chart) => {
            println!("  {}", config.y_axis_label());
            println!("{chart}");
            println!("  {}", config.x_label);
        }
        None => println!("  (Nothing to plot)"),
    }

    display_summary(dist, config.significant_digits);
}

pub fn display_summary(dist: &UniqueDistribution, digits: usize) {
    let summary = dist.summary();
    println!(
        "\nExpected unique heroes: {} (most likely: {}, std dev: {})",
        format_significant(summary.mean, digits),
        summary.mode,
        format_significant(summary.variance.sqrt(), digits),
    );
}

pub fn display_table(dist: &UniqueDistribution, config: &ChartConfig) {
    println!("\n{}\n", config.title_for(dist.summons(), dist.heroes()));

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["k", "P(K = k)", "P(K ≥ k)", ""]);

    let digits = config.significant_digits;
    let mode = dist.mode();
    let max_p = dist.max_probability();

    for (k, p) in dist.iter() {
        let bar = if max_p > 0.0 {
            "█".repeat((p / max_p * 30.0).round() as usize)
        } else {
            String::new()
        };
        let color = if k == mode { Color::Green } else { Color::White };
        table.add_row(vec![
            Cell::new(k.to_string()),
            Cell::new(format_significant(p, digits)),
            Cell::new(format_significant(dist.at_least(k), digits)),
            Cell::new(bar).fg(color),
        ]);
    }
    println!("{table}");

    display_summary(dist, digits);
}

pub fn display_json(dist: &UniqueDistribution) -> Result<()> {
    let json = serde_json::to_string_pretty(&dist.report())?;
    println!("{json}");
    Ok(())
}

pub fn warn_hero_count(heroes: u32, limit: u32) {
    log::warn!(
        "{} heroes requested, but the game only has {} cards (as of 2025-12-18). \
         A hero for every card is extremely unlikely.",
        heroes,
        limit
    );
}
