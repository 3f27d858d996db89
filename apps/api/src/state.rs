use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::cv::CvParserClient;
use crate::identity::OwnerResolver;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Resolves the owner of each request. Default: SingleTenant(DEFAULT_USER_ID).
    pub owner: Arc<dyn OwnerResolver>,
    pub cv_parser: CvParserClient,
}
