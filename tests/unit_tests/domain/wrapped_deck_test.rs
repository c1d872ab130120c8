use serde_json::json;

use bkd_wrapped::domain::{AcademicWorkloadRecord, Slide, WrappedDeck};

fn sample_record() -> AcademicWorkloadRecord {
    AcademicWorkloadRecord::from_model_output(&json!({
        "nama": "Dr. Siti Rahma",
        "perguruan_tinggi": "Universitas Contoh",
        "total_sks_bkd": 16,
        "total_teaching_sks": 10.456,
        "total_research_sks": 4,
        "total_service_sks": 2,
        "total_advisees": 6,
        "number_of_courses": {"Kalkulus": 2, "Fisika": 4, "Statistika": 1, "Kimia": 4},
        "journal_publications": [
            {"title": "P1"}, {"title": "P2"}, {"title": "P3"}, {"title": "P4"}
        ],
        "semester_year": "GENAP 2024/2025"
    }))
}

#[test]
fn given_record_when_building_deck_then_produces_eight_slides_in_order() {
    let deck = WrappedDeck::from_record(&sample_record());

    let kinds: Vec<String> = deck
        .slides()
        .iter()
        .map(|slide| serde_json::to_value(slide).unwrap()["kind"].as_str().unwrap().to_string())
        .collect();

    assert_eq!(
        kinds,
        vec![
            "intro",
            "total_workload",
            "teaching",
            "top_courses",
            "research",
            "service",
            "breakdown",
            "outro"
        ]
    );
    assert_eq!(deck.len(), 8);
}

#[test]
fn given_record_when_building_deck_then_teaching_and_top_courses_use_derived_stats() {
    let deck = WrappedDeck::from_record(&sample_record());

    match &deck.slides()[2] {
        Slide::Teaching {
            teaching_credits,
            total_classes,
            distinct_courses,
            advisees,
        } => {
            assert_eq!(*teaching_credits, 10.46);
            assert_eq!(*total_classes, 11);
            assert_eq!(*distinct_courses, 4);
            assert_eq!(*advisees, 6);
        }
        other => panic!("expected teaching slide, got {other:?}"),
    }

    match &deck.slides()[3] {
        Slide::TopCourses { courses } => {
            let names: Vec<&str> = courses.iter().map(|c| c.course.as_str()).collect();
            assert_eq!(names, vec!["Fisika", "Kimia", "Kalkulus"]);
        }
        other => panic!("expected top courses slide, got {other:?}"),
    }
}

#[test]
fn given_many_publications_when_building_deck_then_lists_every_one_in_order() {
    let deck = WrappedDeck::from_record(&sample_record());

    match &deck.slides()[4] {
        Slide::Research {
            publication_count,
            publications,
            ..
        } => {
            assert_eq!(*publication_count, 4);
            let titles: Vec<&str> = publications.iter().map(|p| p.title.as_str()).collect();
            assert_eq!(titles, vec!["P1", "P2", "P3", "P4"]);
        }
        other => panic!("expected research slide, got {other:?}"),
    }
}

#[test]
fn given_record_when_building_deck_then_breakdown_reports_percentages() {
    let deck = WrappedDeck::from_record(&sample_record());

    let breakdown = serde_json::to_value(&deck.slides()[6]).unwrap();

    assert_eq!(breakdown["total_credits"], 16.0);
    assert_eq!(breakdown["teaching"]["percent"], 65.0);
    assert_eq!(breakdown["research"]["percent"], 25.0);
    assert_eq!(breakdown["service"]["percent"], 13.0);
}

#[test]
fn given_empty_record_when_building_deck_then_fallback_labels_and_null_percentages_are_used() {
    let deck = WrappedDeck::from_record(&AcademicWorkloadRecord::default());

    assert_eq!(
        deck.slides()[0],
        Slide::Intro {
            display_name: "Academic Professional".to_string(),
            period_label: "2024/2025".to_string(),
            institution: String::new(),
        }
    );

    let breakdown = serde_json::to_value(&deck.slides()[6]).unwrap();
    assert!(breakdown["teaching"]["percent"].is_null());
    assert!(breakdown["service"]["percent"].is_null());
}
