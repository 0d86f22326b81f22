//! Output formatters - console, JSON, Markdown, HTML and CSV

use crate::config::OutputFormat;
use crate::error::{Result, WorkforceError};
use crate::output::charts::{role_pie_chart, salary_scatter_chart, skill_bar_chart};
use crate::output::report::WorkforceReport;
use crate::processing::candidate::EnrichedCandidate;
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

/// Rows shown by the console table unless detailed output is on.
const CONSOLE_ROW_LIMIT: usize = 25;
const BAR_WIDTH: usize = 40;

/// Trait for rendering a workforce report
pub trait OutputFormatter {
    fn format_report(&self, report: &WorkforceReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors and text charts
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for API integration and structured data
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for documentation and reports
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// HTML formatter with inline SVG charts
pub struct HtmlFormatter {
    include_styles: bool,
}

/// CSV export of the filtered, enriched table
pub struct CsvFormatter;

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
    csv_formatter: CsvFormatter,
}

#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Workforce Analysis Report</title>
    {% if include_styles %}
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.5;
            color: #333;
            max-width: 1100px;
            margin: 0 auto;
            padding: 20px;
            background: #f8f9fa;
        }
        .container { background: white; padding: 30px; border-radius: 8px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
        .header { text-align: center; border-bottom: 3px solid #007acc; padding-bottom: 16px; }
        .metrics { display: grid; grid-template-columns: repeat(3, 1fr); gap: 15px; margin: 20px 0; }
        .metric { background: #f8f9fa; padding: 15px; border-radius: 6px; border-left: 4px solid #007acc; }
        .metric strong { font-size: 1.6em; display: block; }
        .warning { background: #fff3cd; padding: 10px 15px; border-radius: 6px; border-left: 4px solid #ffc107; }
        .section h2 { color: #007acc; border-bottom: 2px solid #e9ecef; padding-bottom: 8px; }
        table { border-collapse: collapse; width: 100%; font-size: 0.9em; }
        th, td { border: 1px solid #dee2e6; padding: 6px 8px; text-align: left; }
        th { background: #e9ecef; }
        .empty { color: #6c757d; font-style: italic; }
        .metadata { background: #e9ecef; padding: 15px; border-radius: 6px; margin-top: 30px; font-size: 0.9em; color: #6c757d; }
    </style>
    {% endif %}
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>Workforce Analysis Report</h1>
            <p>Generated: {{ generated_at }} | Source: {{ source }}</p>
        </div>

        <div class="metrics">
            <div class="metric"><strong>{{ total_candidates }}</strong>Total Candidates</div>
            <div class="metric"><strong>{{ unique_roles }}</strong>Unique Roles</div>
            <div class="metric"><strong>{{ average_score }}</strong>Avg. Suitability Score</div>
        </div>

        {% if synthetic_ratings %}
        <p class="warning">Skill ratings in this dataset were generated synthetically. Treat scores as demo data only.</p>
        {% endif %}

        <div class="section">
            <h2>Filtered Candidates ({{ matching_candidates }})</h2>
            <p>Filters: {{ filters }}</p>
            {% if has_candidates %}
            <table>
                <tr><th>Name</th><th>Skills</th><th>Preferred Role</th><th>Assigned Role</th><th>Expected Salary</th><th>Market Salary</th><th>Salary Comparison</th><th>Suitability Score</th></tr>
                {% for row in rows %}
                <tr><td>{{ row.name }}</td><td>{{ row.skills }}</td><td>{{ row.preferred_role }}</td><td>{{ row.assigned_role }}</td><td>{{ row.expected_salary }}</td><td>{{ row.market_salary }}</td><td>{{ row.salary_comparison }}</td><td>{{ row.score }}</td></tr>
                {% endfor %}
            </table>
            {% else %}
            <p class="empty">No candidates match the current filters.</p>
            {% endif %}
        </div>

        <div class="section">
            <h2>Top Candidates per Role</h2>
            {% if has_top_groups %}
            {% for group in top_groups %}
            <h3>{{ group.role }}</h3>
            <table>
                <tr><th>Name</th><th>Skills</th><th>Expected Salary</th><th>Suitability Score</th></tr>
                {% for row in group.rows %}
                <tr><td>{{ row.name }}</td><td>{{ row.skills }}</td><td>{{ row.expected_salary }}</td><td>{{ row.score }}</td></tr>
                {% endfor %}
            </table>
            {% endfor %}
            {% else %}
            <p class="empty">No top candidates to display.</p>
            {% endif %}
        </div>

        <div class="section">
            <h2>Skill Distribution (Top Skills)</h2>
            {% if has_skill_chart %}{{ skill_chart | safe }}{% else %}<p class="empty">No skill data available to plot.</p>{% endif %}
        </div>

        <div class="section">
            <h2>Salary vs. Suitability Score</h2>
            {% if has_scatter_chart %}{{ scatter_chart | safe }}{% else %}<p class="empty">No data to plot.</p>{% endif %}
        </div>

        <div class="section">
            <h2>Candidates per Role</h2>
            {% if has_role_chart %}{{ role_chart | safe }}{% else %}<p class="empty">No role data to plot.</p>{% endif %}
        </div>

        {% if has_failures %}
        <div class="section">
            <h2>Rejected Records</h2>
            <table>
                <tr><th>Row</th><th>Name</th><th>Reason</th></tr>
                {% for failure in failures %}
                <tr><td>{{ failure.row }}</td><td>{{ failure.name }}</td><td>{{ failure.reason }}</td></tr>
                {% endfor %}
            </table>
        </div>
        {% endif %}

        <div class="metadata">
            <p><strong>Generated by Workforce Analyzer v{{ version }}</strong></p>
            <p>Top candidates per role: {{ top_n }}</p>
        </div>
    </div>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate {
    include_styles: bool,
    generated_at: String,
    source: String,
    total_candidates: usize,
    unique_roles: usize,
    average_score: String,
    synthetic_ratings: bool,
    matching_candidates: usize,
    filters: String,
    has_candidates: bool,
    rows: Vec<HtmlCandidateRow>,
    has_top_groups: bool,
    top_groups: Vec<HtmlRoleGroup>,
    skill_chart: String, // pre-rendered SVG
    has_skill_chart: bool,
    scatter_chart: String,
    has_scatter_chart: bool,
    role_chart: String,
    has_role_chart: bool,
    has_failures: bool,
    failures: Vec<HtmlFailure>,
    version: String,
    top_n: usize,
}

#[derive(Debug, Clone)]
struct HtmlCandidateRow {
    name: String,
    skills: String,
    preferred_role: String,
    assigned_role: String,
    expected_salary: String,
    market_salary: String,
    salary_comparison: String,
    score: String,
}

#[derive(Debug, Clone)]
struct HtmlRoleGroup {
    role: String,
    rows: Vec<HtmlCandidateRow>,
}

#[derive(Debug, Clone)]
struct HtmlFailure {
    row: usize,
    name: String,
    reason: String,
}

fn format_money(value: f64) -> String {
    format!("{:.0}", value)
}

fn format_optional_money(value: Option<f64>) -> String {
    value.map(format_money).unwrap_or_else(|| "unknown".to_string())
}

fn format_average(value: Option<f64>) -> String {
    value.map(|v| format!("{:.2}", v)).unwrap_or_else(|| "N/A".to_string())
}

fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

fn text_bar(value: f64, max: f64) -> String {
    let filled = if max > 0.0 {
        ((value / max) * BAR_WIDTH as f64).round() as usize
    } else {
        0
    };
    "█".repeat(filled.min(BAR_WIDTH))
}

fn markdown_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn score_color(score: f64) -> Color {
        match score {
            s if s >= 80.0 => Color::Green,
            s if s >= 60.0 => Color::Yellow,
            _ => Color::Red,
        }
    }

    fn format_candidate_row(&self, candidate: &EnrichedCandidate) -> String {
        let score = format!("{:>6.2}", candidate.suitability_score);
        let mut line = format!(
            "  {:<16} {:<34} {:<18} {:<18} {:>10} {:>10} {:>11} {}",
            truncate_text(candidate.name(), 16),
            truncate_text(&candidate.record.skills, 34),
            truncate_text(&candidate.record.preferred_role, 18),
            truncate_text(&candidate.assigned_role, 18),
            format_money(candidate.expected_salary()),
            format_optional_money(candidate.market_salary),
            format_optional_money(candidate.salary_comparison),
            self.colorize(&score, Self::score_color(candidate.suitability_score)),
        );
        if self.detailed {
            line.push_str(&format!("  [{}]", candidate.record.skill_ratings));
        }
        line.push('\n');
        line
    }

    fn format_table_header(&self) -> String {
        format!(
            "  {:<16} {:<34} {:<18} {:<18} {:>10} {:>10} {:>11} {:>6}\n",
            "Name", "Skills", "Preferred Role", "Assigned Role", "Expected", "Market", "Comparison", "Score"
        )
    }

    /// Only the top-per-role section, used by the `top` command.
    pub fn format_top_candidates(&self, report: &WorkforceReport) -> String {
        let mut output = self.format_header("🏆 Top Candidates per Role", 2);
        if report.top_candidates.is_empty() {
            output.push_str("  No top candidates to display.\n");
            return output;
        }

        for (role, candidates) in &report.top_candidates {
            output.push_str(&format!("\n  {}\n", self.colorize(role, Color::Cyan)));
            for (i, candidate) in candidates.iter().enumerate() {
                output.push_str(&format!(
                    "    {}. {} - {:.2} (expected {}, market {})\n",
                    i + 1,
                    candidate.name(),
                    candidate.suitability_score,
                    format_money(candidate.expected_salary()),
                    format_optional_money(candidate.market_salary)
                ));
            }
        }
        output
    }

    fn format_scatter(&self, report: &WorkforceReport) -> String {
        const COLUMNS: usize = 50;
        const ROWS: usize = 10;

        let points = &report.charts.salary_vs_score;
        let min = points.iter().map(|p| p.expected_salary).fold(f64::INFINITY, f64::min);
        let max = points.iter().map(|p| p.expected_salary).fold(f64::NEG_INFINITY, f64::max);
        let span = if max > min { max - min } else { 1.0 };

        let mut grid = vec![vec![' '; COLUMNS]; ROWS];
        for point in points {
            let col = (((point.expected_salary - min) / span) * (COLUMNS - 1) as f64).round() as usize;
            let row = ((point.suitability_score.clamp(0.0, 100.0) / 100.0) * (ROWS - 1) as f64).round() as usize;
            grid[ROWS - 1 - row][col.min(COLUMNS - 1)] = '•';
        }

        let mut output = String::new();
        for (i, line) in grid.iter().enumerate() {
            let label = match i {
                0 => "100",
                _ if i == ROWS - 1 => "  0",
                _ => "   ",
            };
            output.push_str(&format!("  {} │{}\n", label, line.iter().collect::<String>()));
        }
        output.push_str(&format!("      └{}\n", "─".repeat(COLUMNS)));
        output.push_str(&format!(
            "       {:<width$}{:>10}\n",
            format_money(min),
            format_money(max),
            width = COLUMNS - 10
        ));
        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &WorkforceReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("📊 WORKFORCE ANALYSIS", 1));
        output.push_str(&format!(
            "Generated: {} | Source: {}\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.metadata.source
        ));
        if report.metadata.synthetic_ratings {
            output.push_str(&self.colorize(
                "⚠️  Skill ratings were generated synthetically; scores are demo data only.\n",
                Color::Yellow,
            ));
        }

        // Dashboard metrics
        output.push_str(&self.format_header("Summary", 2));
        output.push_str(&format!("  Total Candidates: {}\n", report.summary.total_candidates));
        output.push_str(&format!("  Unique Roles: {}\n", report.summary.unique_roles));
        output.push_str(&format!(
            "  Avg. Suitability Score: {}\n",
            format_average(report.summary.average_score)
        ));
        if report.summary.failed_records > 0 {
            output.push_str(&self.colorize(
                &format!("  Rejected Records: {}\n", report.summary.failed_records),
                Color::Red,
            ));
        }

        // Filtered table
        output.push_str(&self.format_header(
            &format!("👥 Filtered Candidates ({})", report.summary.matching_candidates),
            2,
        ));
        output.push_str(&format!("  Filters: {}\n\n", report.filter_description()));
        if report.has_candidates() {
            output.push_str(&self.format_table_header());
            let limit = if self.detailed { usize::MAX } else { CONSOLE_ROW_LIMIT };
            for candidate in report.candidates.iter().take(limit) {
                output.push_str(&self.format_candidate_row(candidate));
            }
            if report.candidates.len() > limit {
                output.push_str(&format!(
                    "  ... and {} more (use --detailed to show all)\n",
                    report.candidates.len() - limit
                ));
            }
        } else {
            output.push_str("  No candidates match the current filters.\n");
        }

        output.push_str(&self.format_top_candidates(report));

        // Skill distribution
        output.push_str(&self.format_header("📈 Skill Distribution (Top Skills)", 2));
        let skills = &report.charts.skill_distribution;
        if skills.is_empty() {
            output.push_str("  No skill data available to plot.\n");
        } else {
            let max = skills.iter().map(|s| s.count).max().unwrap_or(0) as f64;
            for skill in skills {
                output.push_str(&format!(
                    "  {:<24} {} {}\n",
                    truncate_text(&skill.skill, 24),
                    self.colorize(&text_bar(skill.count as f64, max), Color::Cyan),
                    skill.count
                ));
            }
        }

        // Salary vs score
        output.push_str(&self.format_header("💰 Salary vs. Suitability Score", 2));
        if report.charts.salary_vs_score.is_empty() {
            output.push_str("  No data to plot.\n");
        } else {
            output.push_str(&self.format_scatter(report));
        }

        // Role distribution
        output.push_str(&self.format_header("🥧 Candidates per Role", 2));
        if report.charts.role_distribution.is_empty() {
            output.push_str("  No role data to plot.\n");
        } else {
            for share in &report.charts.role_distribution {
                output.push_str(&format!(
                    "  {:<24} {} {} ({:.1}%)\n",
                    truncate_text(&share.role, 24),
                    self.colorize(&text_bar(share.percentage, 100.0), Color::Magenta),
                    share.count,
                    share.percentage
                ));
            }
        }

        if !report.failures.is_empty() {
            output.push_str(&self.format_header("⚠️  Rejected Records", 3));
            for failure in &report.failures {
                output.push_str(&format!(
                    "  Row {} ({}): {}\n",
                    failure.row,
                    failure.name,
                    self.colorize(&failure.reason, Color::Red)
                ));
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &WorkforceReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &WorkforceReport) -> Result<String> {
        let mut md = String::new();

        md.push_str("# Workforce Analysis Report\n\n");
        if report.metadata.synthetic_ratings {
            md.push_str("> **Note:** skill ratings were generated synthetically; treat scores as demo data.\n\n");
        }

        md.push_str("## Summary\n\n");
        md.push_str("| Metric | Value |\n|---|---|\n");
        md.push_str(&format!("| Total Candidates | {} |\n", report.summary.total_candidates));
        md.push_str(&format!("| Unique Roles | {} |\n", report.summary.unique_roles));
        md.push_str(&format!(
            "| Avg. Suitability Score | {} |\n",
            format_average(report.summary.average_score)
        ));
        md.push_str(&format!("| Rejected Records | {} |\n\n", report.summary.failed_records));

        md.push_str(&format!(
            "## Filtered Candidates ({})\n\nFilters: {}\n\n",
            report.summary.matching_candidates,
            report.filter_description()
        ));
        if report.has_candidates() {
            md.push_str("| Name | Skills | Preferred Role | Assigned Role | Expected Salary | Market Salary | Salary Comparison | Suitability Score |\n");
            md.push_str("|---|---|---|---|---:|---:|---:|---:|\n");
            for c in &report.candidates {
                md.push_str(&format!(
                    "| {} | {} | {} | {} | {} | {} | {} | {:.2} |\n",
                    markdown_cell(c.name()),
                    markdown_cell(&c.record.skills),
                    markdown_cell(&c.record.preferred_role),
                    markdown_cell(&c.assigned_role),
                    format_money(c.expected_salary()),
                    format_optional_money(c.market_salary),
                    format_optional_money(c.salary_comparison),
                    c.suitability_score
                ));
            }
            md.push('\n');
        } else {
            md.push_str("_No candidates match the current filters._\n\n");
        }

        md.push_str("## Top Candidates per Role\n\n");
        if report.top_candidates.is_empty() {
            md.push_str("_No top candidates to display._\n\n");
        }
        for (role, candidates) in &report.top_candidates {
            md.push_str(&format!("### {}\n\n", role));
            for (i, c) in candidates.iter().enumerate() {
                md.push_str(&format!(
                    "{}. **{}** - {:.2} (expected {})\n",
                    i + 1,
                    c.name(),
                    c.suitability_score,
                    format_money(c.expected_salary())
                ));
            }
            md.push('\n');
        }

        md.push_str("## Skill Distribution\n\n");
        if report.charts.skill_distribution.is_empty() {
            md.push_str("_No skill data available._\n\n");
        } else {
            md.push_str("| Skill | Candidates |\n|---|---:|\n");
            for skill in &report.charts.skill_distribution {
                md.push_str(&format!("| {} | {} |\n", markdown_cell(&skill.skill), skill.count));
            }
            md.push('\n');
        }

        md.push_str("## Candidates per Role\n\n");
        if report.charts.role_distribution.is_empty() {
            md.push_str("_No role data available._\n\n");
        } else {
            md.push_str("| Role | Candidates | Share |\n|---|---:|---:|\n");
            for share in &report.charts.role_distribution {
                md.push_str(&format!(
                    "| {} | {} | {:.1}% |\n",
                    markdown_cell(&share.role),
                    share.count,
                    share.percentage
                ));
            }
            md.push('\n');
        }

        if !report.failures.is_empty() {
            md.push_str("## Rejected Records\n\n| Row | Name | Reason |\n|---:|---|---|\n");
            for failure in &report.failures {
                md.push_str(&format!(
                    "| {} | {} | {} |\n",
                    failure.row,
                    markdown_cell(&failure.name),
                    markdown_cell(&failure.reason)
                ));
            }
            md.push('\n');
        }

        if self.include_metadata {
            md.push_str("---\n\n");
            md.push_str(&format!(
                "_Generated by Workforce Analyzer v{} at {} from `{}`._\n",
                report.metadata.version,
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.source
            ));
        }

        Ok(md)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }

    fn candidate_row(candidate: &EnrichedCandidate) -> HtmlCandidateRow {
        HtmlCandidateRow {
            name: candidate.name().to_string(),
            skills: candidate.record.skills.clone(),
            preferred_role: candidate.record.preferred_role.clone(),
            assigned_role: candidate.assigned_role.clone(),
            expected_salary: format_money(candidate.expected_salary()),
            market_salary: format_optional_money(candidate.market_salary),
            salary_comparison: format_optional_money(candidate.salary_comparison),
            score: format!("{:.2}", candidate.suitability_score),
        }
    }

    fn create_template_data(&self, report: &WorkforceReport) -> Result<HtmlTemplate> {
        let skill_chart = skill_bar_chart(&report.charts.skill_distribution)?;
        let scatter_chart = salary_scatter_chart(&report.charts.salary_vs_score)?;
        let role_chart = role_pie_chart(&report.charts.role_distribution)?;

        let top_groups: Vec<HtmlRoleGroup> = report
            .top_candidates
            .iter()
            .filter(|(_, candidates)| !candidates.is_empty())
            .map(|(role, candidates)| HtmlRoleGroup {
                role: role.clone(),
                rows: candidates.iter().map(Self::candidate_row).collect(),
            })
            .collect();

        Ok(HtmlTemplate {
            include_styles: self.include_styles,
            generated_at: report
                .metadata
                .generated_at
                .format("%Y-%m-%d %H:%M:%S UTC")
                .to_string(),
            source: report.metadata.source.clone(),
            total_candidates: report.summary.total_candidates,
            unique_roles: report.summary.unique_roles,
            average_score: format_average(report.summary.average_score),
            synthetic_ratings: report.metadata.synthetic_ratings,
            matching_candidates: report.summary.matching_candidates,
            filters: report.filter_description(),
            has_candidates: report.has_candidates(),
            rows: report.candidates.iter().map(Self::candidate_row).collect(),
            has_top_groups: !top_groups.is_empty(),
            top_groups,
            has_skill_chart: !skill_chart.is_empty(),
            skill_chart,
            has_scatter_chart: !scatter_chart.is_empty(),
            scatter_chart,
            has_role_chart: !role_chart.is_empty(),
            role_chart,
            has_failures: !report.failures.is_empty(),
            failures: report
                .failures
                .iter()
                .map(|f| HtmlFailure {
                    row: f.row,
                    name: f.name.clone(),
                    reason: f.reason.clone(),
                })
                .collect(),
            version: report.metadata.version.clone(),
            top_n: report.metadata.top_n,
        })
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &WorkforceReport) -> Result<String> {
        let template = self.create_template_data(report)?;
        Ok(template.render()?)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl OutputFormatter for CsvFormatter {
    fn format_report(&self, report: &WorkforceReport) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record([
            "Name",
            "Skills",
            "Skill Ratings",
            "Preferred Job Role",
            "Expected Salary",
            "Assigned Role",
            "Market Salary",
            "Salary Comparison",
            "Suitability Score",
        ])?;

        for c in &report.candidates {
            writer.write_record([
                c.record.name.clone(),
                c.record.skills.clone(),
                c.record.skill_ratings.clone(),
                c.record.preferred_role.clone(),
                c.record.expected_salary.to_string(),
                c.assigned_role.clone(),
                c.market_salary.map(|v| v.to_string()).unwrap_or_default(),
                c.salary_comparison.map(|v| v.to_string()).unwrap_or_default(),
                format!("{:.2}", c.suitability_score),
            ])?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| WorkforceError::OutputFormatting(format!("Failed to flush CSV: {}", e)))?;
        String::from_utf8(bytes)
            .map_err(|e| WorkforceError::OutputFormatting(format!("CSV output is not UTF-8: {}", e)))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Csv
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false, true)
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(true),
            html_formatter: HtmlFormatter::new(true),
            csv_formatter: CsvFormatter,
        }
    }

    pub fn generate_report(&self, report: &WorkforceReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
            OutputFormat::Html => self.html_formatter.format_report(report),
            OutputFormat::Csv => self.csv_formatter.format_report(report),
        }
    }

    /// Top-per-role view only.
    pub fn generate_top_candidates(&self, report: &WorkforceReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => Ok(self.console_formatter.format_top_candidates(report)),
            OutputFormat::Json => {
                if self.json_formatter.pretty {
                    Ok(serde_json::to_string_pretty(&report.top_candidates)?)
                } else {
                    Ok(serde_json::to_string(&report.top_candidates)?)
                }
            }
            other => Err(WorkforceError::UnsupportedFormat(format!(
                "Top candidates view supports console and json output, not {:?}",
                other
            ))),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

// Utility functions for saving reports
pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, dataset_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(dataset_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_analysis{}.txt", base_name, timestamp_suffix),
        OutputFormat::Json => format!("{}_analysis{}.json", base_name, timestamp_suffix),
        OutputFormat::Markdown => format!("{}_analysis{}.md", base_name, timestamp_suffix),
        OutputFormat::Html => format!("{}_analysis{}.html", base_name, timestamp_suffix),
        OutputFormat::Csv => format!("{}_analysis{}.csv", base_name, timestamp_suffix),
    }
}
