//! Portfolio regeneration: load the owner's data, render it through a
//! template, and persist the result.
//!
//! Flow: load profile + social links + projects concurrently → render →
//!       reject empty output → insert or update the portfolio row.

use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::generation::generate_portfolio_html;
use crate::generation::model::{ProjectView, TemplateView, UserProfile};
use crate::models::portfolio::PortfolioRow;
use crate::models::project::ProjectRow;
use crate::models::template::TemplateRow;
use crate::models::user::{SocialLinksRow, UserRow};
use crate::portfolios::slug::public_url_for;
use crate::templates::handlers::fetch_template;

/// Output of one render against a stored template.
#[derive(Debug, Clone)]
pub struct GeneratedPortfolio {
    pub html: String,
    pub default_title: String,
    pub default_description: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Pure helpers
// ────────────────────────────────────────────────────────────────────────────

pub fn default_title(profile: Option<&UserProfile>) -> String {
    match profile.map(|p| p.username.trim()).filter(|u| !u.is_empty()) {
        Some(username) => format!("{username} Portfolio"),
        None => "Portfolio".to_string(),
    }
}

pub fn default_description(template_name: &str) -> String {
    format!("Portfolio generated with template {template_name}")
}

/// `value` unless it is blank, in which case `fallback`.
fn non_blank_or(value: Option<String>, fallback: &str) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

// ────────────────────────────────────────────────────────────────────────────
// Loading and rendering
// ────────────────────────────────────────────────────────────────────────────

/// Fetches the owner's profile and projects concurrently. Projects are newest
/// first; that order becomes the card index order in the rendered document.
pub async fn load_owner_content(
    db: &PgPool,
    user_id: Uuid,
) -> Result<(Option<UserProfile>, Vec<ProjectView>), AppError> {
    let user = sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(db);
    let social = sqlx::query_as::<_, SocialLinksRow>("SELECT * FROM social_links WHERE user_id = $1")
        .bind(user_id)
        .fetch_optional(db);
    let projects = sqlx::query_as::<_, ProjectRow>(
        "SELECT * FROM projects WHERE user_id = $1 ORDER BY created_at DESC, id",
    )
    .bind(user_id)
    .fetch_all(db);

    let (user, social, projects) = tokio::try_join!(user, social, projects)?;

    let profile = user.map(|u| UserProfile::from_rows(&u, social.as_ref()));
    let projects = projects.iter().map(ProjectView::from).collect();
    Ok((profile, projects))
}

/// Renders the owner's current data through `template`.
pub async fn generate_for_owner(
    db: &PgPool,
    user_id: Uuid,
    template: &TemplateRow,
) -> Result<GeneratedPortfolio, AppError> {
    let (profile, projects) = load_owner_content(db, user_id).await?;
    if profile.is_none() {
        warn!("No profile for user {user_id}; rendering placeholder portfolio");
    }

    let html = generate_portfolio_html(&TemplateView::from(template), profile.as_ref(), &projects);
    if html.trim().is_empty() {
        return Err(AppError::Generation(format!(
            "Template '{}' produced an empty document",
            template.name
        )));
    }

    info!(
        "Generated portfolio for user {user_id}: template={} projects={} bytes={}",
        template.name,
        projects.len(),
        html.len()
    );

    Ok(GeneratedPortfolio {
        html,
        default_title: default_title(profile.as_ref()),
        default_description: default_description(&template.name),
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Persistence
// ────────────────────────────────────────────────────────────────────────────

/// Loads a portfolio owned by `user_id`; anyone else's portfolio is a 404.
pub async fn fetch_owned_portfolio(
    db: &PgPool,
    user_id: Uuid,
    portfolio_id: Uuid,
) -> Result<PortfolioRow, AppError> {
    sqlx::query_as::<_, PortfolioRow>("SELECT * FROM portfolios WHERE id = $1 AND user_id = $2")
        .bind(portfolio_id)
        .bind(user_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Portfolio {portfolio_id} not found")))
}

/// Generates and inserts a new draft portfolio.
pub async fn create_portfolio(
    db: &PgPool,
    user_id: Uuid,
    template_id: Uuid,
    title: Option<String>,
    description: Option<String>,
) -> Result<PortfolioRow, AppError> {
    let template = fetch_template(db, template_id).await?;
    let generated = generate_for_owner(db, user_id, &template).await?;

    let title = non_blank_or(title, &generated.default_title);
    let description = non_blank_or(description, &generated.default_description);

    let portfolio = sqlx::query_as::<_, PortfolioRow>(
        "INSERT INTO portfolios
            (id, user_id, template_id, title, description, html_content, public_url)
         VALUES ($1, $2, $3, $4, $5, $6, $7)
         RETURNING *",
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(template_id)
    .bind(&title)
    .bind(&description)
    .bind(&generated.html)
    .bind(public_url_for(&title))
    .fetch_one(db)
    .await?;

    info!("Created portfolio {} ({})", portfolio.id, portfolio.public_url);
    Ok(portfolio)
}

/// Re-renders `portfolio` with `template_id`, filling a blank title or
/// description with the defaults.
pub async fn regenerate_portfolio(
    db: &PgPool,
    portfolio: &PortfolioRow,
    template_id: Uuid,
) -> Result<PortfolioRow, AppError> {
    let template = fetch_template(db, template_id).await?;
    let generated = generate_for_owner(db, portfolio.user_id, &template).await?;

    let title = non_blank_or(Some(portfolio.title.clone()), &generated.default_title);
    let description = non_blank_or(
        Some(portfolio.description.clone()),
        &generated.default_description,
    );

    let updated = sqlx::query_as::<_, PortfolioRow>(
        "UPDATE portfolios SET
            template_id = $2, title = $3, description = $4, html_content = $5,
            updated_at = now()
         WHERE id = $1
         RETURNING *",
    )
    .bind(portfolio.id)
    .bind(template_id)
    .bind(&title)
    .bind(&description)
    .bind(&generated.html)
    .fetch_one(db)
    .await?;

    Ok(updated)
}

/// Regenerates the owner's most recent portfolio with `template_id`, or
/// creates one when the owner has none.
pub async fn upsert_owner_portfolio(
    db: &PgPool,
    user_id: Uuid,
    template_id: Uuid,
) -> Result<PortfolioRow, AppError> {
    let existing = sqlx::query_as::<_, PortfolioRow>(
        "SELECT * FROM portfolios WHERE user_id = $1 ORDER BY created_at DESC LIMIT 1",
    )
    .bind(user_id)
    .fetch_optional(db)
    .await?;

    match existing {
        Some(portfolio) => regenerate_portfolio(db, &portfolio, template_id).await,
        None => create_portfolio(db, user_id, template_id, None, None).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_title_uses_username() {
        let profile = UserProfile {
            username: "Ada".to_string(),
            ..Default::default()
        };
        assert_eq!(default_title(Some(&profile)), "Ada Portfolio");
        assert_eq!(default_title(Some(&UserProfile::default())), "Portfolio");
        assert_eq!(default_title(None), "Portfolio");
    }

    #[test]
    fn test_default_description_names_template() {
        assert_eq!(
            default_description("Minimal"),
            "Portfolio generated with template Minimal"
        );
    }

    #[test]
    fn test_blank_values_fall_back() {
        assert_eq!(non_blank_or(Some("  ".to_string()), "x"), "x");
        assert_eq!(non_blank_or(None, "x"), "x");
        assert_eq!(non_blank_or(Some("Mine".to_string()), "x"), "Mine");
    }
}
