use serde::Serialize;
use serde_json::Value;

use super::course_load::CourseLoad;
use super::lenient::{lenient_f64, lenient_string, lenient_u32};

/// Workload figures for one lecturer in one academic term.
///
/// Serialized keys follow the vocabulary of the BKD report itself, which is also what the
/// model is asked to produce. Credits are SKS and are not checked against each other:
/// teaching + research + service need not add up to the total.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AcademicWorkloadRecord {
    #[serde(rename = "nama")]
    pub name: String,
    #[serde(rename = "fakultas_departemen")]
    pub faculty: String,
    #[serde(rename = "jurusan_program_studi")]
    pub department_or_program: String,
    #[serde(rename = "perguruan_tinggi")]
    pub institution: String,
    #[serde(rename = "total_sks_bkd")]
    pub total_workload_credits: f64,
    #[serde(rename = "total_teaching_sks")]
    pub teaching_credits: f64,
    #[serde(rename = "total_research_sks")]
    pub research_credits: f64,
    #[serde(rename = "total_service_sks")]
    pub service_credits: f64,
    #[serde(rename = "total_advisees")]
    pub advisee_count: u32,
    #[serde(rename = "number_of_courses")]
    pub course_load: CourseLoad,
    #[serde(rename = "journal_publications")]
    pub publications: Vec<Publication>,
    #[serde(rename = "semester_year")]
    pub period_label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Publication {
    pub title: String,
    pub journal_name: String,
    pub publication_date: String,
}

impl AcademicWorkloadRecord {
    /// Builds a record from whatever JSON the model returned. Never fails: missing or
    /// mistyped fields fall back to `0`, `""`, or an empty collection, and a non-object
    /// value produces the all-default record.
    pub fn from_model_output(value: &Value) -> Self {
        let Some(fields) = value.as_object() else {
            return Self::default();
        };

        Self {
            name: lenient_string(fields.get("nama")),
            faculty: lenient_string(fields.get("fakultas_departemen")),
            department_or_program: lenient_string(fields.get("jurusan_program_studi")),
            institution: lenient_string(fields.get("perguruan_tinggi")),
            total_workload_credits: lenient_f64(fields.get("total_sks_bkd")),
            teaching_credits: lenient_f64(fields.get("total_teaching_sks")),
            research_credits: lenient_f64(fields.get("total_research_sks")),
            service_credits: lenient_f64(fields.get("total_service_sks")),
            advisee_count: lenient_u32(fields.get("total_advisees")),
            course_load: CourseLoad::from_model_output(fields.get("number_of_courses")),
            publications: Publication::list_from_model_output(fields.get("journal_publications")),
            period_label: lenient_string(fields.get("semester_year")),
        }
    }
}

impl Publication {
    fn list_from_model_output(value: Option<&Value>) -> Vec<Self> {
        let Some(Value::Array(items)) = value else {
            return Vec::new();
        };

        items.iter().filter_map(Self::from_model_output).collect()
    }

    fn from_model_output(item: &Value) -> Option<Self> {
        match item {
            Value::Object(fields) => Some(Self {
                title: lenient_string(fields.get("title")),
                journal_name: lenient_string(fields.get("journal_name")),
                publication_date: lenient_string(fields.get("publication_date")),
            }),
            // Some models answer with one line per publication.
            Value::String(title) => Some(Self {
                title: title.clone(),
                ..Self::default()
            }),
            _ => None,
        }
    }
}
