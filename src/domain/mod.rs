mod academic_workload_record;
mod course_load;
mod document;
mod lenient;
mod workload_stats;
mod wrapped_deck;

pub use academic_workload_record::{AcademicWorkloadRecord, Publication};
pub use course_load::CourseLoad;
pub use document::{ContentType, DocumentId, UploadedDocument};
pub use workload_stats::RankedCourse;
pub use wrapped_deck::{CreditShare, Slide, WrappedDeck};
