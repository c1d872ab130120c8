use std::sync::Arc;

use crate::application::ports::DocumentTextExtractor;
use crate::application::services::WorkloadService;
use crate::presentation::config::Settings;

pub struct AppState<E>
where
    E: DocumentTextExtractor,
{
    pub workload_service: Arc<WorkloadService<E>>,
    pub settings: Settings,
}

impl<E> Clone for AppState<E>
where
    E: DocumentTextExtractor,
{
    fn clone(&self) -> Self {
        Self {
            workload_service: Arc::clone(&self.workload_service),
            settings: self.settings.clone(),
        }
    }
}
