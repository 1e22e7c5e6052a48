//! Integration tests for AdrenoSim Core
//!
//! End-to-end flows across the catalogue, vital-effect model and assessment
//! engine.

use std::collections::{BTreeMap, BTreeSet};

use adrenosim_core::{
    assess_treatment_quality, calculate_drug_effect, calculate_receptor_activation, Catalogue,
    DoseRange, Drug, DrugEffects, EffectRange, FeedbackKind, Grade, Receptor, Scenario, Vitals,
};

fn builtin() -> Catalogue {
    Catalogue::builtin().unwrap()
}

fn simple_drug(hr: EffectRange) -> Drug {
    let mut receptors = BTreeMap::new();
    receptors.insert(Receptor::Beta1, 80.0);
    Drug {
        id: "testdrug".to_string(),
        name: "Testdrug".to_string(),
        class: "Test agonist".to_string(),
        receptors,
        pharmacology: None,
        dose: DoseRange {
            min: 0.0,
            max: 1.0,
            typical: 0.5,
            unit: "mg".to_string(),
            route: "IV".to_string(),
        },
        effects: DrugEffects {
            hr,
            sbp: EffectRange::NONE,
            dbp: EffectRange::NONE,
            svr: EffectRange::NONE,
            co: EffectRange::NONE,
            bronchodilation: EffectRange::NONE,
        },
        half_life: 5.0,
        indications: vec![],
    }
}

fn simple_scenario(contraindicated: &[&str]) -> Scenario {
    Scenario {
        id: "test_case".to_string(),
        name: "Test Case".to_string(),
        description: String::new(),
        baseline: Vitals {
            hr: 80.0,
            sbp: 120.0,
            dbp: 80.0,
            svr: 1000.0,
            co: 5.0,
            spo2: 98.0,
            bronchodilation: 0.0,
        },
        pathophysiology: String::new(),
        target_receptors: vec!["β1".to_string()],
        optimal_drug: None,
        contraindicated: contraindicated.iter().map(|s| s.to_string()).collect::<BTreeSet<_>>(),
    }
}

// =============================================================================
// Vital-effect model
// =============================================================================

#[test]
fn test_full_potency_end_to_end() {
    let drug = simple_drug(EffectRange::new(10.0, 40.0));
    let scenario = simple_scenario(&[]);
    let vitals = calculate_drug_effect(Some(&drug), 1.0, &scenario.baseline, &scenario);
    assert_eq!(vitals.hr, 120.0);
    assert_eq!(vitals.map, 93.0);
}

#[test]
fn test_max_dose_activation_matches_receptors_for_catalogue() {
    let catalogue = builtin();
    for drug in catalogue.drugs() {
        let at_max = calculate_receptor_activation(Some(drug), drug.dose.max);
        let at_min = calculate_receptor_activation(Some(drug), drug.dose.min);
        for (receptor, value) in at_max.iter() {
            assert_eq!(value, drug.activity(receptor), "{} {}", drug.id, receptor);
        }
        assert!(at_min.iter().all(|(_, v)| v == 0.0), "{}", drug.id);
    }
}

// =============================================================================
// Assessment engine
// =============================================================================

#[test]
fn test_contraindication_costs_exactly_fifty() {
    let drug = simple_drug(EffectRange::new(10.0, 40.0));
    let clean = simple_scenario(&[]);
    let flagged = simple_scenario(&["testdrug"]);

    let vitals = calculate_drug_effect(Some(&drug), 0.5, &clean.baseline, &clean);
    let without = assess_treatment_quality(&clean, &vitals, Some(&drug));
    let with = assess_treatment_quality(&flagged, &vitals, Some(&drug));

    assert_eq!(without.score - with.score, 50);
    assert_eq!(with.feedback[0].kind, FeedbackKind::Danger);
    assert!(with.feedback[0].message.contains("Testdrug"));
    assert_eq!(with.feedback.len(), without.feedback.len() + 1);
}

#[test]
fn test_feedback_order_is_stable() {
    let catalogue = builtin();
    let scenario = catalogue.scenario("cocaine_toxicity").unwrap();
    let drug = catalogue.drug("metoprolol").unwrap();
    let vitals = calculate_drug_effect(Some(drug), 5.0, &scenario.baseline, scenario);
    let result = assess_treatment_quality(scenario, &vitals, Some(drug));

    // Three contraindication lines, then targeting, then the alternative note
    assert!(result.feedback[0].message.contains("CONTRAINDICATED"));
    assert!(result.feedback[3].message.starts_with("Consider drugs targeting"));
    assert_eq!(result.feedback[4].message, "phentolamine may be more effective");

    // Vitals checks come last; HR lands at 110, which emits nothing
    let tail: Vec<_> = result.feedback[5..].iter().map(|f| f.message.as_str()).collect();
    assert_eq!(tail.len(), 3);
    assert!(tail[0].starts_with("MAP"));
}

#[test]
fn test_score_can_go_negative() {
    let catalogue = builtin();
    let scenario = catalogue.scenario("cardiogenic_shock").unwrap();
    let drug = catalogue.drug("propranolol").unwrap();
    let vitals = calculate_drug_effect(Some(drug), drug.dose.max, &scenario.baseline, scenario);
    let result = assess_treatment_quality(scenario, &vitals, Some(drug));

    assert!(result.score < 0, "score {}", result.score);
    assert_eq!(result.grade, Grade::Poor);
}

#[test]
fn test_partial_credit() {
    let catalogue = builtin();
    let scenario = catalogue.scenario("cardiogenic_shock").unwrap();
    let milrinone = catalogue.drug("milrinone").unwrap();
    let vitals = calculate_drug_effect(Some(milrinone), 0.5, &scenario.baseline, scenario);
    let result = assess_treatment_quality(scenario, &vitals, Some(milrinone));

    // No adrenergic β1 activity, so targeting warns before the partial credit lines
    assert_eq!(result.feedback[0].kind, FeedbackKind::Warning);
    assert!(result.feedback[1].message.contains("PDE3"));
    assert!(result.feedback[2].message.contains("dobutamine"));
}

#[test]
fn test_optimal_drug_scores_well_at_typical_dose() {
    let catalogue = builtin();
    for scenario in catalogue.scenarios() {
        let Some(optimal) = &scenario.optimal_drug else {
            continue;
        };
        let drug = catalogue.drug(optimal).unwrap();
        let vitals =
            calculate_drug_effect(Some(drug), drug.dose.typical, &scenario.baseline, scenario);
        let result = assess_treatment_quality(scenario, &vitals, Some(drug));
        assert!(result.score >= 40, "{} scored {}", scenario.id, result.score);
        assert!(!result.feedback.iter().any(|f| f.message.contains("CONTRAINDICATED")));
    }
}

// =============================================================================
// Catalogue
// =============================================================================

#[test]
fn test_catalogue_file_round_trip() {
    let catalogue = builtin();
    let dir = std::env::temp_dir().join(format!("adrenosim-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("catalogue.json");

    std::fs::write(&path, catalogue.to_json().unwrap()).unwrap();
    let loaded = Catalogue::from_path(&path).unwrap();
    assert_eq!(loaded, catalogue);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_hill_coefficient_defaults_when_omitted() {
    let json = r#"{
        "drugs": [{
            "id": "x", "name": "X", "class": "Test",
            "receptors": {"α1": 50},
            "pharmacology": {"α1": {"ec50": 10, "emax": 80, "kd": 12}},
            "dose": {"min": 1, "max": 2, "typical": 1.5, "unit": "mg", "route": "IV"},
            "effects": {
                "hr": {"min": 0, "max": 0}, "sbp": {"min": 0, "max": 0},
                "dbp": {"min": 0, "max": 0}, "svr": {"min": 0, "max": 0},
                "co": {"min": 0, "max": 0}, "bronchodilation": {"min": 0, "max": 0}
            },
            "half_life": 1
        }],
        "scenarios": [{
            "id": "s", "name": "S", "description": "",
            "baseline": {"hr": 70, "sbp": 120, "dbp": 80, "svr": 1000, "co": 5,
                         "spo2": 98, "bronchodilation": 50},
            "pathophysiology": "",
            "optimal_drug": "x"
        }]
    }"#;

    let catalogue = Catalogue::from_json_str(json).unwrap();
    let drug = catalogue.drug("x").unwrap();
    assert_eq!(drug.pharmacology_at(Receptor::Alpha1).unwrap().hill_coeff, 1.0);
    assert!(catalogue.scenario("s").unwrap().contraindicated.is_empty());
}

#[test]
fn test_invalid_baseline_rejected() {
    let catalogue = builtin();
    let mut scenarios = catalogue.scenarios().to_vec();
    scenarios[0].baseline.dbp = scenarios[0].baseline.sbp;
    let err = Catalogue::new(catalogue.drugs().to_vec(), scenarios).unwrap_err();
    assert!(err.to_string().contains("invalid baseline"));
}
