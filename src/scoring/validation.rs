use super::config::ScoringConfig;
use super::factors::{match_bucket, Bucket, LevelTable, LinearFactor, RangeOp};

fn check_finite(errors: &mut Vec<String>, field: &str, value: f64) {
    if !value.is_finite() {
        errors.push(format!("scoring.{}: must be a finite number", field));
    }
}

fn check_linear(errors: &mut Vec<String>, field: &str, factor: &LinearFactor) {
    check_finite(errors, &format!("{}.per_unit", field), factor.per_unit);
    check_finite(errors, &format!("{}.neutral", field), factor.neutral);
    if factor.per_unit < 0.0 {
        errors.push(format!(
            "scoring.{}.per_unit: must be non-negative so more never scores lower",
            field
        ));
    }
    if let (Some(min), Some(max)) = (factor.min, factor.max) {
        if min > max {
            errors.push(format!("scoring.{}: min ({}) exceeds max ({})", field, min, max));
        }
    }
}

fn check_non_decreasing(errors: &mut Vec<String>, field: &str, names: &[&str], values: &[f64]) {
    for (i, value) in values.iter().enumerate() {
        check_finite(errors, &format!("{}.{}", field, names[i]), *value);
    }
    for i in 1..values.len() {
        if values[i] < values[i - 1] {
            errors.push(format!(
                "scoring.{}.{}: must not be lower than {} ({} < {})",
                field,
                names[i],
                names[i - 1],
                values[i],
                values[i - 1]
            ));
        }
    }
}

fn check_level_table(errors: &mut Vec<String>, field: &str, table: &LevelTable, higher_is_better: bool) {
    if higher_is_better {
        check_non_decreasing(
            errors,
            field,
            &["low", "medium", "high"],
            &[table.low, table.medium, table.high],
        );
    } else {
        check_non_decreasing(
            errors,
            field,
            &["high", "medium", "low"],
            &[table.high, table.medium, table.low],
        );
    }
}

fn check_buckets(errors: &mut Vec<String>, field: &str, buckets: &[Bucket]) {
    let mut edges = vec![0.0];
    for (i, bucket) in buckets.iter().enumerate() {
        check_finite(errors, &format!("{}[{}].bonus", field, i), bucket.bonus);
        match RangeOp::parse(&bucket.range) {
            Ok(range) => edges.extend(range.edges()),
            Err(e) => errors.push(format!(
                "scoring.{}[{}].range: invalid '{}' - {}",
                field, i, bucket.range, e
            )),
        }
    }

    // Probe around every edge; the staircase must never step down as the value grows.
    let mut probes: Vec<f64> = edges
        .iter()
        .flat_map(|e| [e - 0.5, *e, e + 0.5])
        .filter(|p| *p >= 0.0)
        .collect();
    probes.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    for pair in probes.windows(2) {
        let low = match_bucket(pair[0], buckets).bonus;
        let high = match_bucket(pair[1], buckets).bonus;
        if high < low {
            errors.push(format!(
                "scoring.{}: bonus drops from {} to {} between {} and {}",
                field, low, high, pair[0], pair[1]
            ));
            break;
        }
    }
}

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
///
/// Besides syntax, this enforces the monotonic shape of every table: more
/// experience, a later stage or lower competition must never lower a score.
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    check_finite(&mut errors, "base_score", config.base_score);
    if !(0.0..=100.0).contains(&config.base_score) {
        errors.push("scoring.base_score: must be between 0 and 100".to_string());
    }
    if !(0.0..=100.0).contains(&config.floor) {
        errors.push("scoring.floor: must be between 0 and 100".to_string());
    }
    if !(0.0..=100.0).contains(&config.ceiling) {
        errors.push("scoring.ceiling: must be between 0 and 100".to_string());
    }
    if config.floor > config.ceiling {
        errors.push(format!(
            "scoring.floor: {} exceeds ceiling {}",
            config.floor, config.ceiling
        ));
    }

    check_linear(&mut errors, "experience", &config.experience);
    check_linear(&mut errors, "team_diversity", &config.team_diversity);
    check_linear(&mut errors, "innovation", &config.innovation);
    check_linear(&mut errors, "social_presence", &config.social_presence);

    check_buckets(&mut errors, "market_size", &config.market_size);
    check_buckets(&mut errors, "runway", &config.runway);

    let r = &config.readiness;
    check_non_decreasing(
        &mut errors,
        "readiness",
        &["idea", "prototype", "mvp", "beta", "launched", "scaling", "established"],
        &[r.idea, r.prototype, r.mvp, r.beta, r.launched, r.scaling, r.established],
    );

    let f = &config.funding_stage;
    check_non_decreasing(
        &mut errors,
        "funding_stage",
        &["pre_seed", "seed", "series_a", "series_b", "series_c_plus"],
        &[f.pre_seed, f.seed, f.series_a, f.series_b, f.series_c_plus],
    );

    check_level_table(&mut errors, "competition", &config.competition, false);
    check_level_table(&mut errors, "market_growth", &config.market_growth, true);
    check_level_table(&mut errors, "regulatory_risk", &config.regulatory_risk, false);

    check_finite(&mut errors, "previous_startup", config.previous_startup);
    if config.previous_startup < 0.0 {
        errors.push("scoring.previous_startup: must be non-negative".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
