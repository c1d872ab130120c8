use serde::Serialize;

use super::academic_workload_record::AcademicWorkloadRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedCourse {
    pub course: String,
    pub classes: u32,
}

impl AcademicWorkloadRecord {
    pub fn total_class_count(&self) -> u64 {
        self.course_load
            .iter()
            .map(|(_, classes)| u64::from(classes))
            .sum()
    }

    pub fn distinct_course_count(&self) -> usize {
        self.course_load.len()
    }

    /// The `n` courses with the most classes, highest first. Equal counts keep the
    /// order in which the courses were listed.
    pub fn top_courses(&self, n: usize) -> Vec<RankedCourse> {
        let mut ranked: Vec<RankedCourse> = self
            .course_load
            .iter()
            .map(|(course, classes)| RankedCourse {
                course: course.to_string(),
                classes,
            })
            .collect();

        // sort_by is stable
        ranked.sort_by(|a, b| b.classes.cmp(&a.classes));
        ranked.truncate(n);
        ranked
    }

    pub fn publication_count(&self) -> usize {
        self.publications.len()
    }

    /// `part` as a whole-number percentage of the total workload. `None` when the total
    /// is zero; callers decide how to show that.
    pub fn credit_share_percent(&self, part: f64) -> Option<f64> {
        let total = self.total_workload_credits;
        (total > 0.0).then(|| (100.0 * part / total).round())
    }
}
