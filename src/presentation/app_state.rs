// Application state for HTTP handlers
use crate::application::catalog_service::CatalogService;
use crate::application::live_metrics_service::LiveMetricsService;
use crate::application::submission_service::SubmissionService;

#[derive(Clone)]
pub struct AppState {
    pub catalog_service: CatalogService,
    pub live_metrics_service: LiveMetricsService,
    pub submission_service: SubmissionService,
}
