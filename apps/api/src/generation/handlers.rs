//! Axum route handlers for stateless rendering and template previews.

use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::generate_portfolio_html;
use crate::generation::model::{ProjectView, TemplateView, UserProfile};
use crate::identity::CurrentUser;
use crate::portfolios::service::load_owner_content;
use crate::state::AppState;
use crate::templates::handlers::fetch_template;

#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    pub template: TemplateView,
    #[serde(default)]
    pub profile: Option<UserProfile>,
    #[serde(default)]
    pub projects: Vec<ProjectView>,
}

/// POST /api/v1/render
///
/// Renders the supplied data without touching storage.
pub async fn handle_render(Json(request): Json<RenderRequest>) -> Html<String> {
    Html(generate_portfolio_html(
        &request.template,
        request.profile.as_ref(),
        &request.projects,
    ))
}

/// GET /api/v1/templates/:id/preview
///
/// Renders a template against the caller's current profile and projects.
/// Nothing is persisted.
pub async fn handle_preview_template(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(template_id): Path<Uuid>,
) -> Result<Html<String>, AppError> {
    let template = fetch_template(&state.db, template_id).await?;
    let (profile, projects) = load_owner_content(&state.db, user_id).await?;

    Ok(Html(generate_portfolio_html(
        &TemplateView::from(&template),
        profile.as_ref(),
        &projects,
    )))
}
