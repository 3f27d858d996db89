//! Composes the region fragments into one standalone HTML document.

use chrono::{Datelike, Utc};

use crate::generation::copy;
use crate::generation::html::escape;
use crate::generation::model::{ProjectView, TemplateView, UserProfile};
use crate::generation::palette::Palette;
use crate::generation::regions::{self, RenderContext};
use crate::generation::stylesheet::placeholder_stylesheet;

/// Renders a portfolio for the current calendar year.
///
/// A missing profile yields the placeholder document. Never fails: absent
/// values fall back to fixed copy, placeholder images and default colors.
pub fn generate_portfolio_html(
    template: &TemplateView,
    profile: Option<&UserProfile>,
    projects: &[ProjectView],
) -> String {
    render_portfolio(template, profile, projects, Utc::now().year())
}

/// Deterministic form of [`generate_portfolio_html`] with the footer year fixed.
pub fn render_portfolio(
    template: &TemplateView,
    profile: Option<&UserProfile>,
    projects: &[ProjectView],
    year: i32,
) -> String {
    let Some(profile) = profile else {
        return empty_portfolio(template);
    };

    let ctx = RenderContext::new(template);

    let mut body = regions::navigation(&ctx, profile);
    let optional = [
        regions::hero(&ctx, profile),
        regions::about(&ctx, profile),
        regions::skills(&ctx, profile),
        regions::projects(&ctx, projects),
        regions::contact(&ctx, profile),
    ];
    for fragment in optional.into_iter().flatten() {
        body.push_str(&fragment);
    }
    body.push_str(&regions::footer(profile, year));
    body.push_str(regions::BEHAVIOR_SCRIPT);

    format!(
        "<!DOCTYPE html>\n<html lang=\"{lang}\">\n{head}\n<body>{body}\n</body>\n</html>",
        lang = copy::DOCUMENT_LANG,
        head = regions::head(&ctx, profile),
    )
}

/// Minimal "portfolio in preparation" document used when no profile exists.
pub fn empty_portfolio(template: &TemplateView) -> String {
    let palette = Palette::for_template(template);

    format!(
        r##"<!DOCTYPE html>
<html lang="{lang}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - {name}</title>
    <link rel="stylesheet" href="{icons}">
    <style>{css}    </style>
</head>
<body>
    <div class="empty-container">
        <div class="empty-icon"><i class="fas fa-user-edit"></i></div>
        <h1>{heading}</h1>
        <p>{message}</p>
        <a href="#" class="cta-button"><i class="fas fa-edit"></i> {cta}</a>
    </div>
</body>
</html>"##,
        lang = copy::DOCUMENT_LANG,
        title = copy::FALLBACK_TITLE,
        name = escape(&template.name),
        icons = copy::ICON_FONT_HREF,
        css = placeholder_stylesheet(&palette),
        heading = copy::EMPTY_HEADING,
        message = copy::EMPTY_BODY,
        cta = copy::EMPTY_CTA,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::model::{Layout, SocialLinks, TechStack, Theme};

    fn minimal() -> TemplateView {
        TemplateView {
            name: "Minimal".to_string(),
            colors: vec!["#111111".to_string()],
            layout: Layout {
                sections: vec![],
                theme: Theme::Light,
            },
        }
    }

    fn ada() -> UserProfile {
        UserProfile {
            username: "Ada".to_string(),
            email: "a@example.com".to_string(),
            ..Default::default()
        }
    }

    fn compiler() -> ProjectView {
        ProjectView {
            title: "Compiler".to_string(),
            tech_stack: TechStack::Csv("Rust, LLVM".to_string()),
            status: Some("Active".to_string()),
            ..Default::default()
        }
    }

    fn with_sections(sections: &[&str]) -> TemplateView {
        let mut t = minimal();
        t.layout.sections = sections.iter().map(|s| s.to_string()).collect();
        t
    }

    #[test]
    fn test_ada_single_project() {
        let html = render_portfolio(&minimal(), Some(&ada()), &[compiler()], 2024);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="fr">"#));
        assert!(html.contains("<title>Ada - Minimal</title>"));
        assert!(html.contains("#111111"));
        assert!(html.contains(r#"id="home""#));
        assert!(html.contains(r#"id="profile""#));
        assert!(html.contains(r#"id="projects""#));
        assert!(html.contains(r#"id="contact""#));
        assert!(!html.contains(r#"id="skills""#));
        assert_eq!(html.matches("project-card animate-fadeInUp").count(), 1);
        assert!(html.contains(r#"<span class="tech-badge">Rust</span>"#));
        assert!(html.contains(r#"<span class="tech-badge">LLVM</span>"#));
        assert!(html.contains("En cours"));
        assert!(html.matches("a@example.com").count() >= 2);
        assert!(html.contains("&copy; 2024 Ada."));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let a = render_portfolio(&minimal(), Some(&ada()), &[compiler()], 2024);
        let b = render_portfolio(&minimal(), Some(&ada()), &[compiler()], 2024);
        assert_eq!(a, b);
    }

    #[test]
    fn test_missing_profile_renders_placeholder() {
        let html = render_portfolio(&minimal(), None, &[compiler()], 2024);
        assert!(html.contains(copy::EMPTY_HEADING));
        assert!(html.contains("<title>Portfolio - Minimal</title>"));
        assert!(!html.contains("project-card"));
        assert!(!html.contains("skill-tag"));
        assert!(!html.contains("Compiler"));
    }

    #[test]
    fn test_only_projects_section() {
        let html = render_portfolio(
            &with_sections(&["projects"]),
            Some(&ada()),
            &[compiler()],
            2024,
        );
        assert!(html.contains(r#"id="projects""#));
        assert!(!html.contains(r#"id="home""#));
        assert!(!html.contains(r#"id="profile""#));
        assert!(!html.contains(r#"id="contact""#));
        assert!(!html.contains(r##"href="#contact""##));
        assert!(!html.contains(r##"href="#profile""##));
        assert!(html.contains(r##"href="#projects""##));
    }

    #[test]
    fn test_unknown_section_keys_enable_nothing() {
        let html = render_portfolio(
            &with_sections(&["testimonials"]),
            Some(&ada()),
            &[compiler()],
            2024,
        );
        assert!(!html.contains(r#"id="home""#));
        assert!(!html.contains(r#"id="projects""#));
        assert!(html.contains("main-footer"));
    }

    #[test]
    fn test_csv_and_list_tech_stacks_render_identically() {
        let mut listed = compiler();
        listed.tech_stack = TechStack::List(vec!["Rust".to_string(), "LLVM".to_string()]);
        let a = render_portfolio(&minimal(), Some(&ada()), &[compiler()], 2024);
        let b = render_portfolio(&minimal(), Some(&ada()), &[listed], 2024);
        assert_eq!(a, b);
    }

    #[test]
    fn test_project_indices_follow_input_order() {
        let mut b = compiler();
        b.title = "Debugger".to_string();
        let html = render_portfolio(&minimal(), Some(&ada()), &[compiler(), b], 2024);

        let first = html.find(r#"data-project-index="0""#).unwrap();
        let second = html.find(r#"data-project-index="1""#).unwrap();
        let compiler_at = html.find("Compiler").unwrap();
        let debugger_at = html.find("Debugger").unwrap();
        assert!(first < compiler_at && compiler_at < second);
        assert!(second < debugger_at);
    }

    #[test]
    fn test_skills_region_groups_by_category() {
        let mut profile = ada();
        profile.skills = vec!["React".to_string(), "Docker".to_string()];
        let html = render_portfolio(&minimal(), Some(&profile), &[], 2024);
        assert!(html.contains(r#"id="skills""#));
        assert!(html.contains("Frontend"));
        assert!(html.contains("DevOps"));
        assert!(!html.contains(r#"id="projects""#));
    }

    #[test]
    fn test_dark_theme_surfaces() {
        let mut t = minimal();
        t.layout.theme = Theme::Dark;
        let html = render_portfolio(&t, Some(&ada()), &[], 2024);
        assert!(html.contains("background: #111827"));
    }

    #[test]
    fn test_social_icons_rendered() {
        let mut profile = ada();
        profile.social_links = SocialLinks {
            github: Some("https://github.com/ada".to_string()),
            ..Default::default()
        };
        let html = render_portfolio(&minimal(), Some(&profile), &[], 2024);
        assert!(html.contains(r#"href="https://github.com/ada""#));
        assert!(html.contains("fab fa-github"));
    }
}
