use serde::Serialize;

use super::academic_workload_record::{AcademicWorkloadRecord, Publication};
use super::workload_stats::RankedCourse;

const FALLBACK_DISPLAY_NAME: &str = "Academic Professional";
const FALLBACK_PERIOD_LABEL: &str = "2024/2025";
const TOP_COURSE_COUNT: usize = 3;

/// One view of the wrapped slideshow, carrying only the numbers and labels it shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Slide {
    Intro {
        display_name: String,
        period_label: String,
        institution: String,
    },
    TotalWorkload {
        total_credits: f64,
        faculty: String,
        department_or_program: String,
    },
    Teaching {
        teaching_credits: f64,
        total_classes: u64,
        distinct_courses: usize,
        advisees: u32,
    },
    TopCourses {
        courses: Vec<RankedCourse>,
    },
    Research {
        research_credits: f64,
        publication_count: usize,
        publications: Vec<Publication>,
    },
    Service {
        service_credits: f64,
    },
    Breakdown {
        total_credits: f64,
        teaching: CreditShare,
        research: CreditShare,
        service: CreditShare,
    },
    Outro {
        display_name: String,
        total_credits: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreditShare {
    pub credits: f64,
    /// `None` when the total workload is zero.
    pub percent: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WrappedDeck {
    slides: Vec<Slide>,
}

impl WrappedDeck {
    pub fn from_record(record: &AcademicWorkloadRecord) -> Self {
        let display_name = non_empty_or(&record.name, FALLBACK_DISPLAY_NAME);
        let total_credits = round_credits(record.total_workload_credits);
        let share = |part: f64| CreditShare {
            credits: round_credits(part),
            percent: record.credit_share_percent(part),
        };

        let slides = vec![
            Slide::Intro {
                display_name: display_name.clone(),
                period_label: non_empty_or(&record.period_label, FALLBACK_PERIOD_LABEL),
                institution: record.institution.clone(),
            },
            Slide::TotalWorkload {
                total_credits,
                faculty: record.faculty.clone(),
                department_or_program: record.department_or_program.clone(),
            },
            Slide::Teaching {
                teaching_credits: round_credits(record.teaching_credits),
                total_classes: record.total_class_count(),
                distinct_courses: record.distinct_course_count(),
                advisees: record.advisee_count,
            },
            Slide::TopCourses {
                courses: record.top_courses(TOP_COURSE_COUNT),
            },
            Slide::Research {
                research_credits: round_credits(record.research_credits),
                publication_count: record.publication_count(),
                publications: record.publications.clone(),
            },
            Slide::Service {
                service_credits: round_credits(record.service_credits),
            },
            Slide::Breakdown {
                total_credits,
                teaching: share(record.teaching_credits),
                research: share(record.research_credits),
                service: share(record.service_credits),
            },
            Slide::Outro {
                display_name,
                total_credits,
            },
        ];

        Self { slides }
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

fn round_credits(credits: f64) -> f64 {
    (credits * 100.0).round() / 100.0
}
