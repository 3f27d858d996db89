pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Router,
};
use tower_http::services::ServeDir;

use crate::cv::handlers::{self as cv, MAX_CV_BYTES};
use crate::generation::handlers as render;
use crate::portfolios::handlers as portfolios;
use crate::profile::handlers as profile;
use crate::projects::handlers as projects;
use crate::social::handlers as social;
use crate::state::AppState;
use crate::templates::handlers as templates;

fn api_routes() -> Router<AppState> {
    Router::new()
        // Templates
        .route(
            "/templates",
            get(templates::handle_list_templates).post(templates::handle_create_template),
        )
        .route("/templates/active", get(templates::handle_active_templates))
        .route(
            "/templates/category/:category",
            get(templates::handle_templates_by_category),
        )
        .route(
            "/templates/:id",
            get(templates::handle_get_template)
                .put(templates::handle_update_template)
                .delete(templates::handle_delete_template),
        )
        .route("/templates/:id/preview", get(render::handle_preview_template))
        // Profile
        .route(
            "/profile",
            get(profile::handle_get_profile).put(profile::handle_update_profile),
        )
        .route("/profile/template", put(profile::handle_select_template))
        .route(
            "/profile/cv",
            post(cv::handle_parse_cv).layer(DefaultBodyLimit::max(MAX_CV_BYTES)),
        )
        .route("/profile/cv/apply", post(cv::handle_apply_cv))
        .route(
            "/social-links",
            get(social::handle_get_social_links)
                .post(social::handle_upsert_social_links)
                .put(social::handle_update_social_links)
                .delete(social::handle_delete_social_links),
        )
        // Projects
        .route(
            "/projects",
            get(projects::handle_list_projects).post(projects::handle_create_project),
        )
        .route("/projects/status/:status", get(projects::handle_projects_by_status))
        .route("/projects/search", get(projects::handle_search_projects))
        .route("/projects/stats", get(projects::handle_project_stats))
        .route("/projects/recent", get(projects::handle_recent_projects))
        .route(
            "/projects/:id",
            get(projects::handle_get_project)
                .put(projects::handle_update_project)
                .delete(projects::handle_delete_project),
        )
        // Portfolios
        .route(
            "/portfolios",
            get(portfolios::handle_list_published).post(portfolios::handle_create_portfolio),
        )
        .route("/portfolios/user", get(portfolios::handle_list_owned))
        .route("/portfolios/my", get(portfolios::handle_my_portfolio))
        .route(
            "/portfolios/public/:slug",
            get(portfolios::handle_get_public_portfolio),
        )
        .route(
            "/portfolios/:id",
            get(portfolios::handle_get_portfolio)
                .put(portfolios::handle_update_portfolio)
                .delete(portfolios::handle_delete_portfolio),
        )
        .route("/portfolios/:id/publish", put(portfolios::handle_publish_portfolio))
        .route(
            "/portfolios/:id/regenerate",
            post(portfolios::handle_regenerate_portfolio),
        )
        // Stateless rendering
        .route("/render", post(render::handle_render))
}

pub fn build_router(state: AppState) -> Router {
    let uploads = ServeDir::new(&state.config.uploads_dir);

    Router::new()
        .route("/health", get(health::health_handler))
        .nest("/api/v1", api_routes())
        .route("/p/:slug", get(portfolios::handle_view_public_portfolio))
        .nest_service("/uploads", uploads)
        .with_state(state)
}
