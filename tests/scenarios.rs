use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration as StdDuration;
use tempfile::TempDir;

use venture_ai::auth;
use venture_ai::insights::verdict::{bracket_for, NO_WEAKNESSES};
use venture_ai::insights::Severity;
use venture_ai::profile::{load_profile, validate_profile, StartupProfile};
use venture_ai::store;
use venture_ai::Predictor;

fn fixed_time() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2026-04-20T16:45:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

fn from_json(json: &str) -> StartupProfile {
    serde_json::from_str(json).unwrap()
}

#[test]
fn struggling_startup_lands_in_lowest_bracket() {
    let profile = from_json(
        r#"{
            "industry": "Technology",
            "founderExperienceYears": 0,
            "competitionLevel": "High",
            "runwayMonths": 2,
            "regulatoryRisk": "High"
        }"#,
    );

    let result = Predictor::default().predict(&profile);

    assert!(result.success_probability <= 35);
    let high = result
        .risk_factors
        .iter()
        .filter(|r| r.severity == Severity::High)
        .count();
    assert!(high >= 4);

    let lowest = bracket_for(0);
    assert!(result.verdict.message.starts_with(lowest.message));
    assert!((30..50).contains(&result.verdict.confidence));
}

#[test]
fn strong_startup_lands_near_the_top() {
    let profile = from_json(
        r#"{
            "founderExperienceYears": 15,
            "teamSkillDiversity": 10,
            "competitionLevel": "Low",
            "marketGrowth": "High",
            "productReadiness": "Established",
            "runwayMonths": 36
        }"#,
    );

    let result = Predictor::default().predict(&profile);

    assert!(result.success_probability >= 90);
    assert!(result.verdict.strengths.iter().any(|s| s == "Experienced founders"));
    assert!(result.verdict.strengths.iter().any(|s| s == "Excellent market fit"));
    assert_eq!(result.verdict.weaknesses, vec![NO_WEAKNESSES.to_string()]);
    assert!(result.verdict.message.starts_with("Exceptional potential!"));
}

#[test]
fn turning_cash_flow_positive_keeps_runway_credit() {
    let with_revenue = |revenue: u32| {
        from_json(&format!(
            r#"{{"fundingAmount": 1000000, "monthlyBurnRate": 10000, "revenue": {}, "founderExperience": 8}}"#,
            revenue
        ))
    };

    let predictor = Predictor::default();
    let burning = predictor.predict_with(&with_revenue(9_000), &mut StdRng::seed_from_u64(3), fixed_time());
    let profitable =
        predictor.predict_with(&with_revenue(11_000), &mut StdRng::seed_from_u64(3), fixed_time());

    assert!(profitable.success_probability >= burning.success_probability);
    assert!(!profitable
        .risk_factors
        .iter()
        .any(|r| r.factor == "Limited financial runway"));
}

#[test]
fn lenient_strings_score_like_numbers() {
    let typed = from_json(
        r#"{"fundingAmount": "$1,000,000", "runwayMonths": "18 months", "founderExperience": "4"}"#,
    );
    let numeric = from_json(r#"{"fundingAmount": 1000000, "runwayMonths": 18, "founderExperience": 4}"#);

    let predictor = Predictor::default();
    let a = predictor.predict_with(&typed, &mut StdRng::seed_from_u64(1), fixed_time());
    let b = predictor.predict_with(&numeric, &mut StdRng::seed_from_u64(1), fixed_time());
    assert_eq!(a, b);
}

#[test]
fn shared_predictor_is_consistent_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Predictor>();

    let predictor = Predictor::default();
    let profile = from_json(
        r#"{"industry": "AI", "founderExperience": 6, "competitionLevel": "Medium", "runway": 12}"#,
    );
    let expected = predictor.predict_with(&profile, &mut StdRng::seed_from_u64(11), fixed_time());

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    predictor.predict_with(&profile, &mut StdRng::seed_from_u64(11), fixed_time())
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn profile_file_to_saved_history() {
    let dir = TempDir::new().unwrap();
    let profile_path = dir.path().join("acme.yaml");
    std::fs::write(
        &profile_path,
        r#"
startupName: Acme Robotics
industry: Healthcare
country: Germany
businessModel: B2B
productReadiness: MVP
competitionLevel: Medium
marketMaturity: Developing
regulatoryRisk: High
founderExperience: 5
fundingAmount: 750000
"#,
    )
    .unwrap();

    let profile = load_profile(&profile_path).unwrap();
    validate_profile(&profile).unwrap();

    let session_path = dir.path().join("session.json");
    let session = auth::login("ada@example.com", None, StdDuration::from_secs(3600), fixed_time()).unwrap();
    auth::save_session(&session_path, &session).unwrap();
    let identity = auth::resolve_identity(&session_path, fixed_time() + Duration::minutes(10)).unwrap();

    let result = Predictor::default().predict(&profile);
    let store_path = store::get_store_path(&dir.path().join("data"));
    store::append(&store_path, &identity, &profile, &result, fixed_time()).unwrap();

    let history = store::list(&store_path, &identity).unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].startup_name(), "Acme Robotics");
    assert_eq!(history[0].profile, profile);
    assert_eq!(history[0].result.success_probability, result.success_probability);

    // Past the one-hour ttl the session no longer resolves
    let expired = auth::resolve_identity(&session_path, fixed_time() + Duration::hours(2));
    assert!(matches!(expired, Err(auth::AuthError::Expired { .. })));
}
