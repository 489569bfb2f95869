use chrono::{DateTime, Duration, Utc};
use owo_colors::{OwoColorize, Style};
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::auth::Session;
use crate::insights::Severity;
use crate::prediction::PredictionResult;
use crate::scoring::ScoreBreakdown;
use crate::store::PredictionRecord;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

fn paint(text: &str, style: Style, use_colors: bool) -> String {
    if use_colors {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}

fn score_style(score: u8) -> Style {
    if score >= 70 {
        Style::new().green().bold()
    } else if score >= 40 {
        Style::new().yellow().bold()
    } else {
        Style::new().red().bold()
    }
}

fn severity_style(severity: Severity) -> Style {
    match severity {
        Severity::High => Style::new().red(),
        Severity::Medium => Style::new().yellow(),
        Severity::Low => Style::new().green(),
    }
}

fn heading(title: &str, use_colors: bool) -> String {
    paint(title, Style::new().bold().underline(), use_colors)
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate text to fit available width, accounting for Unicode
fn truncate(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format the full prediction report shown after `predict`.
pub fn format_report(startup_name: &str, result: &PredictionResult, use_colors: bool) -> String {
    let mut lines = Vec::new();
    let score = result.success_probability;

    lines.push(format!(
        "{}  {}",
        paint(startup_name, Style::new().bold(), use_colors),
        paint(&format!("{}%", score), score_style(score), use_colors)
    ));
    lines.push(format!(
        "  {} (confidence {}%)",
        result.verdict.message, result.verdict.confidence
    ));

    let a = &result.assessment;
    lines.push(String::new());
    lines.push(heading("Assessment", use_colors));
    lines.push(format!("  Risk level:        {}%", a.risk_level));
    lines.push(format!("  Market fit:        {}%", a.market_fit));
    lines.push(format!("  Funding adequacy:  {}%", a.funding_adequacy));
    lines.push(format!("  Team strength:     {}%", a.team_strength));
    lines.push(format!("  Experience level:  {:?}", a.experience_level));
    lines.push(format!("  Collaboration:     {}%", a.collaboration));

    lines.push(String::new());
    lines.push(heading("Strengths", use_colors));
    lines.extend(result.verdict.strengths.iter().map(|s| format!("  + {}", s)));
    lines.push(heading("Weaknesses", use_colors));
    lines.extend(result.verdict.weaknesses.iter().map(|w| format!("  - {}", w)));

    lines.push(String::new());
    lines.push(heading("Risk factors", use_colors));
    for risk in &result.risk_factors {
        let tag = format!("[{}]", risk.severity);
        lines.push(format!(
            "  {:<8} {}",
            paint(&tag, severity_style(risk.severity), use_colors),
            risk.factor
        ));
        lines.push(format!("           {}", risk.impact));
    }

    lines.push(String::new());
    lines.push(heading("Recommendations", use_colors));
    for rec in &result.recommendations {
        let tag = format!("[{}]", rec.priority);
        lines.push(format!(
            "  {:<8} {}",
            paint(&tag, severity_style(rec.priority), use_colors),
            rec.action
        ));
        lines.push(format!("           {}", rec.impact));
    }

    let market = &result.market_analysis;
    lines.push(String::new());
    lines.push(heading("Market", use_colors));
    lines.push(format!("  Size: {}  Growth: {}", market.size, market.growth));
    lines.extend(market.trends.iter().map(|t| format!("  * {}", t)));

    let landscape = &result.competitive_landscape;
    lines.push(String::new());
    lines.push(heading("Competition", use_colors));
    lines.push(format!("  {}", landscape.market_position));
    for c in &landscape.competitors {
        lines.push(format!(
            "  {} ({}): {}; {}",
            c.name, c.market_share, c.strength, c.weakness
        ));
    }

    let fp = &result.financial_projection;
    lines.push(String::new());
    lines.push(heading("Projection", use_colors));
    lines.push(format!("  6 months:  {}", fp.six_months));
    lines.push(format!("  1 year:    {}", fp.one_year));
    lines.push(format!("  3 years:   {}", fp.three_years));

    lines.push(String::new());
    lines.push(heading("Score breakdown", use_colors));
    lines.push(format_breakdown(&result.breakdown));

    lines.join("\n")
}

/// One line per factor: label, delta and running total.
pub fn format_breakdown(breakdown: &ScoreBreakdown) -> String {
    let mut lines = vec![format!("  {:<18} {:>7}", "Base", format!("{:.1}", breakdown.base_score))];
    for factor in &breakdown.factors {
        let delta = factor.after - factor.before;
        lines.push(format!(
            "  {:<18} {:>+7.1}  = {:<6.1} {}",
            factor.label, delta, factor.after, factor.description
        ));
    }
    lines.join("\n")
}

/// Format saved records as a table with columns: Index, Score, Name, Industry, Age
pub fn format_history_table(
    records: &[PredictionRecord],
    now: DateTime<Utc>,
    use_colors: bool,
) -> String {
    if records.is_empty() {
        return "No saved predictions.".to_string();
    }

    let term_width = get_terminal_width();
    let industry_width = 16;
    let age_width = 4;
    let fixed_width = 4 + 5 + industry_width + age_width + 6;

    records
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            let index_str = format!("{:>3}.", idx + 1);
            let score = record.result.success_probability;
            let score_str = format!("{:>4}", format!("{}%", score));
            let name = match term_width {
                Some(width) if width > fixed_width + 10 => {
                    truncate(record.startup_name(), width - fixed_width)
                }
                Some(_) => truncate(record.startup_name(), 20),
                None => record.startup_name().to_string(),
            };
            let industry = truncate(record.profile.industry_name(), industry_width);
            let age = format_age(now - record.created_at);

            format!(
                "{} {}  {}  {:<iw$}  {:>aw$}",
                paint(&index_str, Style::new().dimmed(), use_colors),
                paint(&score_str, score_style(score), use_colors),
                name,
                industry,
                age,
                iw = industry_width,
                aw = age_width
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a duration into a human-readable age string
/// "2h" for hours, "3d" for days, "1w" for weeks
pub fn format_age(duration: Duration) -> String {
    let hours = duration.num_hours();
    let days = duration.num_days();
    let weeks = days / 7;

    if weeks >= 1 {
        format!("{}w", weeks)
    } else if days >= 1 {
        format!("{}d", days)
    } else if hours >= 1 {
        format!("{}h", hours)
    } else {
        let minutes = duration.num_minutes();
        if minutes >= 1 {
            format!("{}m", minutes)
        } else {
            "now".to_string()
        }
    }
}

/// One-line summary of the current session for `whoami`.
pub fn format_session(session: &Session, now: DateTime<Utc>) -> String {
    let remaining = session.expires_at - now;
    format!(
        "{} <{}>, session expires in {}",
        session.name,
        session.email,
        format_age(remaining)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prediction::Predictor;
    use crate::profile::{FieldValue, StartupProfile};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample_result() -> PredictionResult {
        let profile = StartupProfile {
            startup_name: Some("Acme".to_string()),
            industry: Some("Healthcare".to_string()),
            founder_experience: Some(FieldValue::Number(1.0)),
            competition_level: Some("High".to_string()),
            ..Default::default()
        };
        Predictor::default().predict_with(&profile, &mut StdRng::seed_from_u64(5), Utc::now())
    }

    fn sample_record(name: &str, minutes_ago: i64) -> PredictionRecord {
        let profile = StartupProfile {
            startup_name: Some(name.to_string()),
            industry: Some("Gaming".to_string()),
            ..Default::default()
        };
        PredictionRecord {
            id: "abc".to_string(),
            user_email: "ada@example.com".to_string(),
            created_at: Utc::now() - Duration::minutes(minutes_ago),
            result: Predictor::default().predict(&profile),
            profile,
        }
    }

    #[test]
    fn test_format_age_minutes() {
        assert_eq!(format_age(Duration::minutes(5)), "5m");
        assert_eq!(format_age(Duration::seconds(30)), "now");
    }

    #[test]
    fn test_format_age_hours_days_weeks() {
        assert_eq!(format_age(Duration::hours(3)), "3h");
        assert_eq!(format_age(Duration::days(2)), "2d");
        assert_eq!(format_age(Duration::days(15)), "2w");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a much longer name", 10), "a much ...");
        assert_eq!(truncate("abcdef", 3), "abc");
    }

    #[test]
    fn test_report_without_colors_has_no_escape_codes() {
        let report = format_report("Acme", &sample_result(), false);
        assert!(!report.contains('\x1b'));
        assert!(report.starts_with("Acme  "));
        assert!(report.contains("Risk factors"));
        assert!(report.contains("[high]"));
        assert!(report.contains("High competition in the target market"));
        assert!(report.contains("3 years:"));
        assert!(report.contains("Score breakdown"));
    }

    #[test]
    fn test_report_with_colors() {
        let report = format_report("Acme", &sample_result(), true);
        assert!(report.contains('\x1b'));
    }

    #[test]
    fn test_breakdown_lines() {
        let result = sample_result();
        let text = format_breakdown(&result.breakdown);
        assert!(text.starts_with("  Base"));
        assert!(text.contains("Experience"));
        assert!(text.contains("-8.0"));
        assert_eq!(text.lines().count(), result.breakdown.factors.len() + 1);
    }

    #[test]
    fn test_history_table() {
        let records = vec![sample_record("Newest", 5), sample_record("Older", 60 * 24 * 3)];
        let table = format_history_table(&records, Utc::now(), false);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("  1."));
        assert!(lines[0].contains("Newest"));
        assert!(lines[0].contains("Gaming"));
        assert!(lines[1].trim_end().ends_with("3d"));
    }

    #[test]
    fn test_empty_history() {
        assert_eq!(
            format_history_table(&[], Utc::now(), false),
            "No saved predictions."
        );
    }
}
