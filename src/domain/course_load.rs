use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

use super::lenient::lenient_u32;

/// Course name to number of classes taught, in the order the source listed them.
///
/// Keys are unique and non-empty. Equality ignores order; ranking does not, since ties
/// in [`top_courses`](super::AcademicWorkloadRecord::top_courses) go to the course seen first.
#[derive(Debug, Clone, Default)]
pub struct CourseLoad {
    entries: Vec<(String, u32)>,
}

impl CourseLoad {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites a course. An overwritten course keeps its original position.
    /// Empty names are ignored.
    pub fn insert(&mut self, course: impl Into<String>, classes: u32) -> Option<u32> {
        let course = course.into();
        if course.is_empty() {
            return None;
        }

        match self.entries.iter_mut().find(|(name, _)| *name == course) {
            Some((_, existing)) => Some(std::mem::replace(existing, classes)),
            None => {
                self.entries.push((course, classes));
                None
            }
        }
    }

    pub fn get(&self, course: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|(name, _)| name == course)
            .map(|(_, classes)| *classes)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries
            .iter()
            .map(|(name, classes)| (name.as_str(), *classes))
    }

    /// Anything other than a JSON object yields an empty load.
    pub(crate) fn from_model_output(value: Option<&Value>) -> Self {
        let Some(Value::Object(courses)) = value else {
            return Self::new();
        };

        courses
            .iter()
            .map(|(name, classes)| (name.clone(), lenient_u32(Some(classes))))
            .collect()
    }
}

impl FromIterator<(String, u32)> for CourseLoad {
    fn from_iter<I: IntoIterator<Item = (String, u32)>>(iter: I) -> Self {
        let mut load = Self::new();
        for (course, classes) in iter {
            load.insert(course, classes);
        }
        load
    }
}

impl PartialEq for CourseLoad {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(course, classes)| other.get(course) == Some(classes))
    }
}

impl Serialize for CourseLoad {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (course, classes) in &self.entries {
            map.serialize_entry(course, classes)?;
        }
        map.end()
    }
}
