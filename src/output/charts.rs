//! Inline SVG charts for the HTML report
//!
//! Geometry is computed here; labels go through askama's HTML escaping.

use crate::error::Result;
use crate::output::report::SalaryScorePoint;
use crate::processing::aggregator::{RoleShare, SkillCount};
use askama::Template;
use std::f64::consts::PI;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 320.0;
const MARGIN: f64 = 48.0;

const PALETTE: [&str; 8] = [
    "#007acc", "#28a745", "#ffc107", "#dc3545", "#17a2b8", "#6f42c1", "#fd7e14", "#20c997",
];

#[derive(Template)]
#[template(source = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {{ frame.width }} {{ frame.height }}" width="{{ frame.width }}" height="{{ frame.height }}" font-family="sans-serif" font-size="11"><line x1="{{ frame.left }}" y1="{{ frame.bottom }}" x2="{{ frame.right }}" y2="{{ frame.bottom }}" stroke="#555"/><line x1="{{ frame.left }}" y1="{{ frame.top }}" x2="{{ frame.left }}" y2="{{ frame.bottom }}" stroke="#555"/>{% for bar in bars %}<rect x="{{ bar.x }}" y="{{ bar.y }}" width="{{ bar.width }}" height="{{ bar.height }}" fill="#87ceeb"><title>{{ bar.label }}: {{ bar.count }}</title></rect><text x="{{ bar.center }}" y="{{ bar.value_y }}" text-anchor="middle">{{ bar.count }}</text><text x="{{ bar.center }}" y="{{ label_y }}" text-anchor="end" transform="rotate(-30 {{ bar.center }} {{ label_y }})">{{ bar.label }}</text>{% endfor %}</svg>"##, ext = "html")]
struct BarChartSvg {
    frame: Frame,
    label_y: String,
    bars: Vec<Bar>,
}

#[derive(Template)]
#[template(source = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {{ frame.width }} {{ frame.height }}" width="{{ frame.width }}" height="{{ frame.height }}" font-family="sans-serif" font-size="11"><line x1="{{ frame.left }}" y1="{{ frame.bottom }}" x2="{{ frame.right }}" y2="{{ frame.bottom }}" stroke="#555"/><line x1="{{ frame.left }}" y1="{{ frame.top }}" x2="{{ frame.left }}" y2="{{ frame.bottom }}" stroke="#555"/><text x="{{ frame.left }}" y="{{ axis_label_y }}" text-anchor="start">{{ min_salary }}</text><text x="{{ frame.right }}" y="{{ axis_label_y }}" text-anchor="end">{{ max_salary }}</text><text x="{{ score_label_x }}" y="{{ top_label_y }}" text-anchor="end">100</text><text x="{{ score_label_x }}" y="{{ frame.bottom }}" text-anchor="end">0</text>{% for point in points %}<circle cx="{{ point.cx }}" cy="{{ point.cy }}" r="4" fill="green" fill-opacity="0.6"><title>{{ point.label }}: {{ point.salary }} / {{ point.score }}</title></circle>{% endfor %}</svg>"##, ext = "html")]
struct ScatterChartSvg {
    frame: Frame,
    axis_label_y: String,
    score_label_x: String,
    top_label_y: String,
    min_salary: String,
    max_salary: String,
    points: Vec<Point>,
}

#[derive(Template)]
#[template(source = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {{ frame.width }} {{ frame.height }}" width="{{ frame.width }}" height="{{ frame.height }}" font-family="sans-serif" font-size="11">{% if let Some(circle) = full_circle %}<circle cx="{{ circle.cx }}" cy="{{ circle.cy }}" r="{{ circle.radius }}" fill="{{ circle.color }}"><title>{{ circle.label }}</title></circle>{% endif %}{% for slice in slices %}<path d="{{ slice.path }}" fill="{{ slice.color }}"><title>{{ slice.label }}</title></path>{% endfor %}{% for entry in legend %}<rect x="{{ entry.x }}" y="{{ entry.y }}" width="12" height="12" fill="{{ entry.color }}"/><text x="{{ entry.text_x }}" y="{{ entry.text_y }}">{{ entry.label }} ({{ entry.percentage }}%)</text>{% endfor %}</svg>"##, ext = "html")]
struct PieChartSvg {
    frame: Frame,
    full_circle: Option<FullCircle>,
    slices: Vec<Slice>,
    legend: Vec<LegendEntry>,
}

/// Canvas size and plot bounds, pre-formatted.
struct Frame {
    width: String,
    height: String,
    left: String,
    right: String,
    top: String,
    bottom: String,
}

struct Bar {
    x: String,
    y: String,
    width: String,
    height: String,
    center: String,
    value_y: String,
    label: String,
    count: usize,
}

struct Point {
    cx: String,
    cy: String,
    label: String,
    salary: String,
    score: String,
}

struct FullCircle {
    cx: String,
    cy: String,
    radius: String,
    color: &'static str,
    label: String,
}

struct Slice {
    path: String,
    color: &'static str,
    label: String,
}

struct LegendEntry {
    x: String,
    y: String,
    text_x: String,
    text_y: String,
    color: &'static str,
    label: String,
    percentage: String,
}

fn coord(value: f64) -> String {
    format!("{:.1}", value)
}

impl Frame {
    fn new() -> Self {
        Self {
            width: format!("{}", WIDTH),
            height: format!("{}", HEIGHT),
            left: coord(MARGIN),
            right: coord(WIDTH - MARGIN),
            top: coord(MARGIN),
            bottom: coord(HEIGHT - MARGIN),
        }
    }
}

/// Vertical bar chart of skill counts. Empty input yields an empty string.
pub fn skill_bar_chart(skills: &[SkillCount]) -> Result<String> {
    if skills.is_empty() {
        return Ok(String::new());
    }

    let max = skills.iter().map(|s| s.count).max().unwrap_or(1).max(1) as f64;
    let plot_height = HEIGHT - 2.0 * MARGIN;
    let slot = (WIDTH - 2.0 * MARGIN) / skills.len() as f64;
    let bar_width = slot * 0.7;

    let bars = skills
        .iter()
        .enumerate()
        .map(|(i, skill)| {
            let height = skill.count as f64 / max * plot_height;
            let x = MARGIN + i as f64 * slot + (slot - bar_width) / 2.0;
            let y = HEIGHT - MARGIN - height;
            Bar {
                x: coord(x),
                y: coord(y),
                width: coord(bar_width),
                height: coord(height),
                center: coord(x + bar_width / 2.0),
                value_y: coord(y - 4.0),
                label: skill.skill.clone(),
                count: skill.count,
            }
        })
        .collect();

    let chart = BarChartSvg {
        frame: Frame::new(),
        label_y: coord(HEIGHT - MARGIN + 14.0),
        bars,
    };
    Ok(chart.render()?)
}

/// Scatter of expected salary (x) against suitability score (y, 0-100).
pub fn salary_scatter_chart(points: &[SalaryScorePoint]) -> Result<String> {
    if points.is_empty() {
        return Ok(String::new());
    }

    let min_salary = points.iter().map(|p| p.expected_salary).fold(f64::INFINITY, f64::min);
    let max_salary = points.iter().map(|p| p.expected_salary).fold(f64::NEG_INFINITY, f64::max);
    let span = if max_salary > min_salary { max_salary - min_salary } else { 1.0 };
    let plot_width = WIDTH - 2.0 * MARGIN;
    let plot_height = HEIGHT - 2.0 * MARGIN;

    let points = points
        .iter()
        .map(|point| {
            let x = if max_salary > min_salary {
                MARGIN + (point.expected_salary - min_salary) / span * plot_width
            } else {
                MARGIN + plot_width / 2.0
            };
            let y = HEIGHT - MARGIN - point.suitability_score.clamp(0.0, 100.0) / 100.0 * plot_height;
            Point {
                cx: coord(x),
                cy: coord(y),
                label: point.name.clone(),
                salary: format!("{:.0}", point.expected_salary),
                score: format!("{:.2}", point.suitability_score),
            }
        })
        .collect();

    let chart = ScatterChartSvg {
        frame: Frame::new(),
        axis_label_y: coord(HEIGHT - MARGIN + 16.0),
        score_label_x: coord(MARGIN - 6.0),
        top_label_y: coord(MARGIN + 4.0),
        min_salary: format!("{:.0}", min_salary),
        max_salary: format!("{:.0}", max_salary),
        points,
    };
    Ok(chart.render()?)
}

/// Pie of candidate share per role with a legend.
pub fn role_pie_chart(roles: &[RoleShare]) -> Result<String> {
    if roles.is_empty() {
        return Ok(String::new());
    }

    let cx = HEIGHT / 2.0;
    let cy = HEIGHT / 2.0;
    let radius = HEIGHT / 2.0 - 16.0;
    let total: usize = roles.iter().map(|r| r.count).sum();

    // A single role is a full circle; an arc from a point to itself draws nothing.
    let full_circle = match roles {
        [only] => Some(FullCircle {
            cx: coord(cx),
            cy: coord(cy),
            radius: coord(radius),
            color: PALETTE[0],
            label: only.role.clone(),
        }),
        _ => None,
    };

    let mut slices = Vec::new();
    if full_circle.is_none() {
        let mut angle = -PI / 2.0;
        for (i, role) in roles.iter().enumerate() {
            let fraction = role.count as f64 / total.max(1) as f64;
            let end = angle + fraction * 2.0 * PI;
            let large_arc = if fraction > 0.5 { 1 } else { 0 };
            slices.push(Slice {
                path: format!(
                    "M {:.1} {:.1} L {:.1} {:.1} A {:.1} {:.1} 0 {} 1 {:.1} {:.1} Z",
                    cx,
                    cy,
                    cx + radius * angle.cos(),
                    cy + radius * angle.sin(),
                    radius,
                    radius,
                    large_arc,
                    cx + radius * end.cos(),
                    cy + radius * end.sin()
                ),
                color: PALETTE[i % PALETTE.len()],
                label: role.role.clone(),
            });
            angle = end;
        }
    }

    let legend = roles
        .iter()
        .enumerate()
        .map(|(i, role)| {
            let y = 24.0 + i as f64 * 20.0;
            LegendEntry {
                x: coord(HEIGHT + 16.0),
                y: coord(y),
                text_x: coord(HEIGHT + 34.0),
                text_y: coord(y + 10.0),
                color: PALETTE[i % PALETTE.len()],
                label: role.role.clone(),
                percentage: format!("{:.1}", role.percentage),
            }
        })
        .collect();

    let chart = PieChartSvg {
        frame: Frame::new(),
        full_circle,
        slices,
        legend,
    };
    Ok(chart.render()?)
}
