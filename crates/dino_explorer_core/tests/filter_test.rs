//! Filter and catalog behaviour as seen by the Browse, Home and Map screens.

mod common;

use chrono::NaiveDate;
use common::{dinosaur, sample_dinosaurs, sample_questions};
use dino_explorer_core::{
    Catalog, CatalogError, Diet, Environment, FilterCriteria, HipAnatomy, Screen, Selection,
    ViewContent, ViewRouter,
};

fn ids<'a>(dinos: &[&'a dino_explorer_core::Dinosaur]) -> Vec<&'a str> {
    dinos.iter().map(|d| d.id.as_str()).collect()
}

#[test]
fn all_selectors_return_full_catalog_in_order() {
    let dinos = sample_dinosaurs();
    let result = FilterCriteria::default().apply(&dinos);
    assert_eq!(
        ids(&result),
        vec!["t-rex", "stegosaurus", "pteranodon", "coelophysis", "allosaurus"]
    );
}

#[test]
fn diet_selector_is_exact() {
    let dinos = sample_dinosaurs();
    let criteria = FilterCriteria {
        diet: Selection::Only(Diet::Carnivore),
        ..FilterCriteria::default()
    };
    let result = criteria.apply(&dinos);
    assert_eq!(result.len(), 3);
    assert!(result.iter().all(|d| d.diet == Diet::Carnivore));
}

#[test]
fn era_selector_matches_by_containment() {
    let dinos = sample_dinosaurs();
    let criteria = FilterCriteria {
        era: Selection::era("Jurassic"),
        ..FilterCriteria::default()
    };
    let result = criteria.apply(&dinos);
    assert_eq!(ids(&result), vec!["stegosaurus", "allosaurus"]);
    assert!(result.iter().all(|d| d.period.contains("Jurassic")));
}

#[test]
fn missing_optional_facet_never_matches_a_value() {
    let dinos = sample_dinosaurs();
    let criteria = FilterCriteria {
        hip: Selection::Only(HipAnatomy::Saurischian),
        era: Selection::era("Triassic"),
        ..FilterCriteria::default()
    };
    assert!(criteria.apply(&dinos).is_empty());

    let by_era = FilterCriteria {
        era: Selection::era("Triassic"),
        ..FilterCriteria::default()
    };
    assert_eq!(ids(&by_era.apply(&dinos)), vec!["coelophysis"]);
}

#[test]
fn single_sky_record_is_found() {
    let dinos = vec![
        dinosaur("a", "Jurassic", Diet::Herbivore, None, Some(Environment::Land)),
        dinosaur("b", "Cretaceous", Diet::Piscivore, None, Some(Environment::Sky)),
        dinosaur("c", "Triassic", Diet::Carnivore, None, Some(Environment::Water)),
    ];
    let criteria = FilterCriteria {
        environment: Selection::Only(Environment::Sky),
        ..FilterCriteria::default()
    };
    assert_eq!(ids(&criteria.apply(&dinos)), vec!["b"]);
}

#[test]
fn filtering_is_idempotent() {
    let dinos = sample_dinosaurs();
    let criteria = FilterCriteria {
        era: Selection::era("Cretaceous"),
        environment: Selection::Only(Environment::Land),
        ..FilterCriteria::default()
    };
    assert_eq!(criteria.apply(&dinos), criteria.apply(&dinos));
}

#[test]
fn clearing_filters_restores_full_list() {
    let catalog = Catalog::new(sample_dinosaurs(), sample_questions()).unwrap();
    let today = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
    let mut router = ViewRouter::new();
    router.navigate(Screen::Browse);
    router.set_filters(FilterCriteria {
        diet: Selection::Only(Diet::Insectivore),
        ..FilterCriteria::default()
    });

    match router.render(&catalog, today) {
        ViewContent::Browse { results, .. } => assert!(results.is_empty()),
        other => panic!("unexpected content: {:?}", other),
    }

    router.clear_filters();
    match router.render(&catalog, today) {
        ViewContent::Browse { results, filters } => {
            assert_eq!(results.len(), catalog.len());
            assert!(filters.is_unfiltered());
        }
        other => panic!("unexpected content: {:?}", other),
    }
}

#[test]
fn select_record_navigates_to_detail() {
    let catalog = Catalog::new(sample_dinosaurs(), Vec::new()).unwrap();
    let today = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
    let mut router = ViewRouter::new();

    let stego = catalog.get("stegosaurus").unwrap().clone();
    router.select_record(stego);
    assert_eq!(router.screen(), Screen::Detail);
    match router.render(&catalog, today) {
        ViewContent::Detail { dinosaur } => assert_eq!(dinosaur.id, "stegosaurus"),
        other => panic!("unexpected content: {:?}", other),
    }

    router.back_to_browse();
    assert_eq!(router.screen(), Screen::Browse);
    assert_eq!(router.selected().map(|d| d.id.as_str()), Some("stegosaurus"));
}

#[test]
fn home_features_the_daily_pick() {
    let catalog = Catalog::new(sample_dinosaurs(), Vec::new()).unwrap();
    let today = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
    let router = ViewRouter::new();

    let expected = catalog.daily_feature(today).map(|d| d.id.clone());
    match router.render(&catalog, today) {
        ViewContent::Home { featured } => {
            assert_eq!(featured.map(|d| d.id.clone()), expected);
        }
        other => panic!("unexpected content: {:?}", other),
    }
}

#[test]
fn map_hides_records_flagged_off() {
    let mut dinos = sample_dinosaurs();
    dinos[1].show_on_map = Some(false);
    dinos[2].show_on_map = Some(true);
    let catalog = Catalog::new(dinos, Vec::new()).unwrap();

    let markers: Vec<_> = catalog.map_markers().map(|d| d.id.as_str()).collect();
    assert_eq!(markers, vec!["t-rex", "pteranodon", "coelophysis", "allosaurus"]);
}

#[test]
fn duplicate_ids_are_rejected() {
    let mut dinos = sample_dinosaurs();
    dinos.push(dinos[0].clone());
    assert_eq!(
        Catalog::new(dinos, Vec::new()).unwrap_err(),
        CatalogError::DuplicateId("t-rex".to_string())
    );
}

#[test]
fn out_of_range_answer_is_rejected() {
    let mut questions = sample_questions();
    questions[1].correct_answer = 4;
    let err = Catalog::new(Vec::new(), questions).unwrap_err();
    assert!(matches!(err, CatalogError::AnswerOutOfRange { index: 4, options: 4, .. }));
}
