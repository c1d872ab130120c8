use bkd_wrapped::domain::{AcademicWorkloadRecord, CourseLoad, Publication, RankedCourse};

fn record_with_courses(courses: &[(&str, u32)]) -> AcademicWorkloadRecord {
    let course_load: CourseLoad = courses
        .iter()
        .map(|(course, classes)| (course.to_string(), *classes))
        .collect();
    AcademicWorkloadRecord {
        course_load,
        ..AcademicWorkloadRecord::default()
    }
}

fn names(ranked: &[RankedCourse]) -> Vec<&str> {
    ranked.iter().map(|r| r.course.as_str()).collect()
}

#[test]
fn given_tied_counts_when_ranking_top_courses_then_first_listed_wins() {
    let record = record_with_courses(&[("Algebra", 3), ("Calculus", 5), ("Physics", 5), ("Stats", 1)]);

    let top = record.top_courses(3);

    assert_eq!(names(&top), vec!["Calculus", "Physics", "Algebra"]);
    assert_eq!(top[0].classes, 5);
    assert_eq!(top[2].classes, 3);
}

#[test]
fn given_reversed_listing_when_ranking_top_courses_then_tie_break_follows_listing() {
    let record = record_with_courses(&[("Physics", 5), ("Calculus", 5), ("Algebra", 3), ("Stats", 1)]);

    let top = record.top_courses(3);

    assert_eq!(names(&top), vec!["Physics", "Calculus", "Algebra"]);
}

#[test]
fn given_fewer_courses_than_requested_when_ranking_then_returns_all() {
    let record = record_with_courses(&[("Algebra", 1)]);

    assert_eq!(record.top_courses(3).len(), 1);
    assert!(record.top_courses(0).is_empty());
}

#[test]
fn given_course_load_when_counting_then_sums_classes_and_counts_courses() {
    let record = record_with_courses(&[("Algebra", 3), ("Calculus", 5), ("Stats", 1)]);

    assert_eq!(record.total_class_count(), 9);
    assert_eq!(record.distinct_course_count(), 3);
}

#[test]
fn given_publications_when_counting_then_returns_length() {
    let record = AcademicWorkloadRecord {
        publications: vec![Publication::default(), Publication::default()],
        ..AcademicWorkloadRecord::default()
    };

    assert_eq!(record.publication_count(), 2);
}

#[test]
fn given_positive_total_when_computing_share_then_rounds_to_whole_percent() {
    let record = AcademicWorkloadRecord {
        total_workload_credits: 12.0,
        ..AcademicWorkloadRecord::default()
    };

    assert_eq!(record.credit_share_percent(8.0), Some(67.0));
    assert_eq!(record.credit_share_percent(4.0), Some(33.0));
    assert_eq!(record.credit_share_percent(0.0), Some(0.0));
}

#[test]
fn given_zero_total_when_computing_share_then_returns_none() {
    let record = AcademicWorkloadRecord::default();

    assert_eq!(record.credit_share_percent(5.0), None);
}
