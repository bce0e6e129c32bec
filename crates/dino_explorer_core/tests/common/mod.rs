//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use dino_explorer_core::{
    AnatomyNote, Diet, Dinosaur, DinosaurGroup, Environment, HipAnatomy, Location, QuizQuestion,
    Stats,
};

pub fn dinosaur(
    id: &str,
    period: &str,
    diet: Diet,
    hip: Option<HipAnatomy>,
    environment: Option<Environment>,
) -> Dinosaur {
    Dinosaur {
        id: id.to_string(),
        name: id.to_string(),
        pronunciation: String::new(),
        meaning: String::new(),
        period: period.to_string(),
        year: 1900,
        diet,
        group: DinosaurGroup::Theropods,
        length_meters: 5.0,
        weight_tons: 1.0,
        description: String::new(),
        habitat: String::new(),
        location: Location {
            name: "Somewhere".to_string(),
            lat: 0.0,
            lng: 0.0,
        },
        fun_fact: String::new(),
        image_url: String::new(),
        anatomy: vec![AnatomyNote {
            feature: "Tail".to_string(),
            description: "Long".to_string(),
        }],
        stats: Stats {
            intelligence: 5,
            speed: 5,
            defense: 5,
            attack: 5,
        },
        show_on_map: None,
        hip_anatomy: hip,
        environment,
    }
}

pub fn sample_dinosaurs() -> Vec<Dinosaur> {
    vec![
        dinosaur(
            "t-rex",
            "Late Cretaceous",
            Diet::Carnivore,
            Some(HipAnatomy::Saurischian),
            Some(Environment::Land),
        ),
        dinosaur(
            "stegosaurus",
            "Late Jurassic",
            Diet::Herbivore,
            Some(HipAnatomy::Ornithischian),
            Some(Environment::Land),
        ),
        dinosaur(
            "pteranodon",
            "Late Cretaceous",
            Diet::Piscivore,
            Some(HipAnatomy::Other),
            Some(Environment::Sky),
        ),
        dinosaur("coelophysis", "Late Triassic", Diet::Carnivore, None, None),
        dinosaur(
            "allosaurus",
            "Jurassic",
            Diet::Carnivore,
            Some(HipAnatomy::Saurischian),
            Some(Environment::Land),
        ),
    ]
}

pub fn sample_questions() -> Vec<QuizQuestion> {
    vec![
        QuizQuestion {
            id: "q1".to_string(),
            question: "Which dinosaur had plates on its back?".to_string(),
            options: vec![
                "T-Rex".to_string(),
                "Stegosaurus".to_string(),
                "Velociraptor".to_string(),
                "Brachiosaurus".to_string(),
            ],
            correct_answer: 1,
            explanation: "Stegosaurus had bony plates.".to_string(),
        },
        QuizQuestion {
            id: "q2".to_string(),
            question: "Was Pteranodon a dinosaur?".to_string(),
            options: vec![
                "Yes".to_string(),
                "No".to_string(),
                "Sometimes".to_string(),
                "Only on Tuesdays".to_string(),
            ],
            correct_answer: 1,
            explanation: "It was a flying reptile, a pterosaur.".to_string(),
        },
    ]
}
