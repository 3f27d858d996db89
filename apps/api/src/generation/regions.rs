//! Region renderers. Each is a pure function of its inputs returning one
//! self-contained HTML fragment; optional regions return `None` when gated off
//! or when they have nothing to show.

use crate::generation::assets::{
    profile_image_url, project_image_url, DEFAULT_AVATAR_URL, DEFAULT_PROJECT_PHOTO_URL,
};
use crate::generation::copy;
use crate::generation::html::{escape, or_fallback};
use crate::generation::model::{ProjectView, SocialLinks, TemplateView, UserProfile};
use crate::generation::palette::{Palette, Surfaces};
use crate::generation::sections::{Section, SectionFilter};
use crate::generation::skills::group_skills;
use crate::generation::stylesheet::portfolio_stylesheet;
use crate::models::project::ProjectStatus;

/// Tech badges shown per card before collapsing the rest into `+N`.
pub const MAX_TECH_BADGES: usize = 6;

/// Everything a region needs besides the user data.
pub struct RenderContext<'a> {
    pub template: &'a TemplateView,
    pub palette: Palette,
    pub surfaces: Surfaces,
    pub sections: SectionFilter<'a>,
}

impl<'a> RenderContext<'a> {
    pub fn new(template: &'a TemplateView) -> Self {
        let palette = Palette::for_template(template);
        let surfaces = Surfaces::new(template.layout.theme, &palette);
        Self {
            template,
            palette,
            surfaces,
            sections: SectionFilter::for_template(template),
        }
    }

    pub fn has(&self, section: Section) -> bool {
        self.sections.has(section)
    }
}

fn display_name(profile: &UserProfile) -> &str {
    or_fallback(&profile.username, copy::FALLBACK_TITLE)
}

/// Staggered fade-in delay, in seconds.
fn animation_delay(index: usize) -> String {
    format!("{:.1}s", index as f64 * 0.1)
}

// ────────────────────────────────────────────────────────────────────────────
// Document chrome
// ────────────────────────────────────────────────────────────────────────────

pub fn head(ctx: &RenderContext, profile: &UserProfile) -> String {
    format!(
        r#"<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{name} - {template}</title>
    <link rel="stylesheet" href="{icons}">
    <style>{css}    </style>
</head>"#,
        name = escape(display_name(profile)),
        template = escape(&ctx.template.name),
        icons = copy::ICON_FONT_HREF,
        css = portfolio_stylesheet(&ctx.palette, &ctx.surfaces),
    )
}

pub fn navigation(ctx: &RenderContext, profile: &UserProfile) -> String {
    let links = [
        (
            ctx.has(Section::Summary) || ctx.has(Section::About),
            "#profile",
            copy::NAV_PROFILE,
        ),
        (ctx.has(Section::Skills), "#skills", copy::NAV_SKILLS),
        (ctx.has(Section::Projects), "#projects", copy::NAV_PROJECTS),
        (ctx.has(Section::Contact), "#contact", copy::NAV_CONTACT),
    ];
    let links: String = links
        .iter()
        .filter(|(enabled, _, _)| *enabled)
        .map(|(_, href, label)| format!(r#"<a href="{href}">{label}</a>"#))
        .collect::<Vec<_>>()
        .join("\n                ");

    format!(
        r#"
    <nav class="navbar">
        <div class="container">
            <div class="logo">{name}</div>
            <div class="nav-links">
                {links}
            </div>
        </div>
    </nav>"#,
        name = escape(display_name(profile)),
    )
}

pub fn footer(profile: &UserProfile, year: i32) -> String {
    format!(
        r#"
    <footer class="main-footer">
        <div class="container">
            <p class="footer-text">&copy; {year} {name}. {rights}</p>
            <p class="footer-text footer-credit">{credit}</p>
        </div>
    </footer>"#,
        name = escape(display_name(profile)),
        rights = copy::FOOTER_RIGHTS,
        credit = copy::FOOTER_CREDIT,
    )
}

/// Smooth in-page scrolling and fade-in of sections as they scroll into view.
pub const BEHAVIOR_SCRIPT: &str = r##"
    <script>
        document.querySelectorAll('a[href^="#"]').forEach(anchor => {
            anchor.addEventListener('click', function (e) {
                e.preventDefault();
                const targetId = this.getAttribute('href');
                if (targetId === '#') return;
                const targetElement = document.querySelector(targetId);
                if (targetElement) {
                    window.scrollTo({
                        top: targetElement.offsetTop - 80,
                        behavior: 'smooth'
                    });
                }
            });
        });

        const observer = new IntersectionObserver((entries) => {
            entries.forEach(entry => {
                if (entry.isIntersecting) {
                    entry.target.classList.add('animate-fadeInUp');
                }
            });
        }, { threshold: 0.1, rootMargin: '0px 0px -50px 0px' });

        document.querySelectorAll('section').forEach(section => {
            observer.observe(section);
        });
    </script>"##;

// ────────────────────────────────────────────────────────────────────────────
// Hero (summary)
// ────────────────────────────────────────────────────────────────────────────

pub fn hero(ctx: &RenderContext, profile: &UserProfile) -> Option<String> {
    if !ctx.has(Section::Summary) {
        return None;
    }

    let mut actions = String::new();
    if ctx.has(Section::Projects) {
        actions.push_str(&format!(
            r##"<a href="#projects" class="btn btn-primary"><i class="fas fa-rocket"></i> {}</a>"##,
            copy::CTA_PROJECTS
        ));
    }
    if ctx.has(Section::Contact) {
        actions.push_str(&format!(
            r##"<a href="#contact" class="btn btn-outline"><i class="fas fa-envelope"></i> {}</a>"##,
            copy::CTA_CONTACT
        ));
    }

    Some(format!(
        r#"
    <header class="main-header" id="home">
        <div class="container">
            <div class="header-content">
                <h1 class="header-title animate-fadeInUp">{title}</h1>
                <p class="header-subtitle animate-fadeInUp" style="animation-delay: 0.2s;">{subtitle}</p>
                <div class="animate-fadeInUp" style="animation-delay: 0.4s; margin-top: 2rem;">{actions}</div>
            </div>
        </div>
    </header>"#,
        title = escape(display_name(profile)),
        subtitle = escape(or_fallback(&profile.bio, copy::FALLBACK_TAGLINE)),
    ))
}

// ────────────────────────────────────────────────────────────────────────────
// About (profile card)
// ────────────────────────────────────────────────────────────────────────────

fn detail_rows(profile: &UserProfile) -> String {
    [
        ("fas fa-envelope", &profile.email),
        ("fas fa-phone", &profile.phone),
        ("fas fa-map-marker-alt", &profile.location),
    ]
    .iter()
    .filter(|(_, value)| !value.is_empty())
    .map(|(icon, value)| {
        format!(
            r#"
                        <div class="detail-item"><i class="{icon}"></i><span>{}</span></div>"#,
            escape(value)
        )
    })
    .collect()
}

pub fn about(ctx: &RenderContext, profile: &UserProfile) -> Option<String> {
    if !ctx.has(Section::About) {
        return None;
    }

    Some(format!(
        r#"
    <section class="profile-section" id="profile">
        <div class="container">
            <h2 class="section-title">{heading}</h2>
            <div class="profile-card animate-fadeInUp">
                <div class="profile-image-container">
                    <img src="{image}" alt="{alt}" class="profile-image" onerror="this.src='{avatar}'">
                </div>
                <div class="profile-info">
                    <h1 class="profile-name">{name}</h1>
                    <p class="profile-title">{role_line}</p>
                    <p class="profile-about">{about}</p>
                    <div class="profile-details">{details}
                    </div>
                </div>
            </div>
        </div>
    </section>"#,
        heading = copy::ABOUT_HEADING,
        image = escape(&profile_image_url(&profile.profile_image)),
        alt = escape(&profile.username),
        avatar = DEFAULT_AVATAR_URL,
        name = escape(or_fallback(&profile.username, copy::FALLBACK_NAME)),
        role_line = escape(or_fallback(&profile.bio, copy::FALLBACK_ROLE_LINE)),
        about = escape(or_fallback(&profile.bio, copy::FALLBACK_ABOUT)),
        details = detail_rows(profile),
    ))
}

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

/// Rendered only when enabled and the profile lists at least one skill.
pub fn skills(ctx: &RenderContext, profile: &UserProfile) -> Option<String> {
    if !ctx.has(Section::Skills) || profile.skills.is_empty() {
        return None;
    }

    let categories: String = group_skills(&profile.skills)
        .iter()
        .enumerate()
        .map(|(index, group)| {
            let tags: String = group
                .skills
                .iter()
                .map(|s| format!(r#"<span class="skill-tag">{}</span>"#, escape(s)))
                .collect();
            format!(
                r#"
                <div class="skill-category animate-fadeInUp" style="animation-delay: {delay};">
                    <h3 class="skill-category-title"><i class="{icon}"></i> {label}</h3>
                    <div class="skill-tags">{tags}</div>
                </div>"#,
                delay = animation_delay(index),
                icon = group.category.icon(),
                label = group.category.label(),
            )
        })
        .collect();

    Some(format!(
        r#"
    <section class="skills-section" id="skills">
        <div class="container">
            <h2 class="section-title">{heading}</h2>
            <div class="skills-grid">{categories}
            </div>
        </div>
    </section>"#,
        heading = copy::SKILLS_HEADING,
    ))
}

// ────────────────────────────────────────────────────────────────────────────
// Projects
// ────────────────────────────────────────────────────────────────────────────

fn status_badge(status: ProjectStatus) -> (&'static str, &'static str) {
    match status {
        ProjectStatus::Active => ("#10b981", "En cours"),
        ProjectStatus::Complete => ("#3b82f6", "Terminé"),
        ProjectStatus::Pending => ("#f59e0b", "En attente"),
    }
}

fn tech_badges(project: &ProjectView) -> String {
    let techs = project.tech_stack.normalize();
    if techs.is_empty() {
        return String::new();
    }

    let mut badges: String = techs
        .iter()
        .take(MAX_TECH_BADGES)
        .map(|t| format!(r#"<span class="tech-badge">{}</span>"#, escape(t)))
        .collect();
    if techs.len() > MAX_TECH_BADGES {
        badges.push_str(&format!(
            r#"<span class="tech-badge">+{}</span>"#,
            techs.len() - MAX_TECH_BADGES
        ));
    }

    format!(
        r#"
                            <div class="project-tech-stack">{badges}</div>"#
    )
}

fn project_links(project: &ProjectView) -> String {
    let demo = project.link_demo.as_deref().filter(|l| !l.is_empty());
    let github = project.link_github.as_deref().filter(|l| !l.is_empty());

    let mut links = String::new();
    if let Some(href) = demo {
        links.push_str(&format!(
            r#"<a href="{}" target="_blank" rel="noopener" class="project-link demo"><i class="fas fa-external-link-alt"></i> {}</a>"#,
            escape(href),
            copy::PROJECT_DEMO_LINK
        ));
    }
    if let Some(href) = github {
        links.push_str(&format!(
            r#"<a href="{}" target="_blank" rel="noopener" class="project-link github"><i class="fab fa-github"></i> {}</a>"#,
            escape(href),
            copy::PROJECT_SOURCE_LINK
        ));
    }
    if demo.is_none() && github.is_none() {
        links.push_str(&format!(
            r#"<span class="project-link demo private"><i class="fas fa-lock"></i> {}</span>"#,
            copy::PROJECT_PRIVATE
        ));
    }
    links
}

/// One project card. `index` is the project's position in the caller's list
/// and is the only link back to the project record.
pub fn project_card(index: usize, project: &ProjectView) -> String {
    let (status_color, status_label) = status_badge(project.resolved_status());
    let company = if project.company_name.is_empty() {
        String::new()
    } else {
        format!(
            r#"
                                <div class="project-company"><i class="fas fa-building"></i> {}</div>"#,
            escape(&project.company_name)
        )
    };

    format!(
        r#"
                    <div class="project-card animate-fadeInUp" data-project-index="{index}" style="animation-delay: {delay};"
                         onclick="window.dispatchEvent(new CustomEvent('{event}', {{ detail: {{ index: {index} }} }}))">
                        <div class="project-image-container">
                            <img src="{image}" alt="{alt}" class="project-image" onerror="this.src='{placeholder}'">
                            <div class="project-overlay">
                                <span class="project-status" style="background: {status_color}">{status_label}</span>
                            </div>
                        </div>
                        <div class="project-content">
                            <div class="project-header">
                                <h3 class="project-title">{title}</h3>{company}
                            </div>
                            <p class="project-description">{description}</p>{badges}
                            <div class="project-links">{links}</div>
                        </div>
                    </div>"#,
        delay = animation_delay(index),
        event = copy::PROJECT_CLICK_EVENT,
        image = escape(&project_image_url(&project.image)),
        alt = escape(&project.title),
        placeholder = DEFAULT_PROJECT_PHOTO_URL,
        title = escape(or_fallback(&project.title, copy::PROJECT_FALLBACK_TITLE)),
        description = escape(or_fallback(
            &project.description,
            copy::PROJECT_FALLBACK_DESCRIPTION
        )),
        badges = tech_badges(project),
        links = project_links(project),
    )
}

/// Rendered only when enabled and there is at least one project. Cards keep
/// the caller's order.
pub fn projects(ctx: &RenderContext, projects: &[ProjectView]) -> Option<String> {
    if !ctx.has(Section::Projects) || projects.is_empty() {
        return None;
    }

    let cards: String = projects
        .iter()
        .enumerate()
        .map(|(index, project)| project_card(index, project))
        .collect();

    Some(format!(
        r#"
    <section class="projects-section" id="projects">
        <div class="container">
            <h2 class="section-title">{heading}</h2>
            <p class="projects-intro">{intro}</p>
            <div class="projects-container">
                <div class="project-grid">{cards}
                </div>
            </div>
        </div>
    </section>"#,
        heading = copy::PROJECTS_HEADING,
        intro = copy::PROJECTS_INTRO,
    ))
}

// ────────────────────────────────────────────────────────────────────────────
// Contact
// ────────────────────────────────────────────────────────────────────────────

fn contact_cards(profile: &UserProfile) -> String {
    [
        ("fas fa-envelope", copy::CONTACT_EMAIL, &profile.email),
        ("fas fa-phone", copy::CONTACT_PHONE, &profile.phone),
        ("fas fa-map-marker-alt", copy::CONTACT_LOCATION, &profile.location),
    ]
    .iter()
    .filter(|(_, _, value)| !value.is_empty())
    .map(|(icon, label, value)| {
        format!(
            r#"
                    <div class="contact-item"><i class="{icon}"></i><h4>{label}</h4><p>{}</p></div>"#,
            escape(value)
        )
    })
    .collect()
}

fn social_row(links: &SocialLinks) -> String {
    let icons: String = [
        (&links.linkedin, "fab fa-linkedin-in"),
        (&links.github, "fab fa-github"),
        (&links.facebook, "fab fa-facebook-f"),
        (&links.instagram, "fab fa-instagram"),
    ]
    .iter()
    .filter_map(|(href, icon)| {
        href.as_deref()
            .filter(|h| !h.is_empty())
            .map(|h| {
                format!(
                    r#"
                    <a href="{}" target="_blank" rel="noopener" class="social-link"><i class="{icon}"></i></a>"#,
                    escape(h)
                )
            })
    })
    .collect();

    if icons.is_empty() {
        return String::new();
    }
    format!(
        r#"
                <div class="social-links">{icons}
                </div>"#
    )
}

pub fn contact(ctx: &RenderContext, profile: &UserProfile) -> Option<String> {
    if !ctx.has(Section::Contact) {
        return None;
    }

    let quote = if profile.bio.is_empty() {
        String::new()
    } else {
        format!("\"{}\" - ", escape(&profile.bio))
    };

    Some(format!(
        r#"
    <section class="contact-section" id="contact">
        <div class="container">
            <div class="contact-content">
                <h2 class="contact-title">{heading}</h2>
                <p class="contact-description">{quote}{pitch}</p>
                <div class="contact-info-grid">{cards}
                </div>{social}
            </div>
        </div>
    </section>"#,
        heading = copy::CONTACT_HEADING,
        pitch = copy::CONTACT_PITCH,
        cards = contact_cards(profile),
        social = social_row(&profile.social_links),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::model::TechStack;

    fn template() -> TemplateView {
        TemplateView {
            name: "Minimal".to_string(),
            ..Default::default()
        }
    }

    fn project(techs: &[&str]) -> ProjectView {
        ProjectView {
            title: "Compiler".to_string(),
            tech_stack: TechStack::List(techs.iter().map(|s| s.to_string()).collect()),
            ..Default::default()
        }
    }

    #[test]
    fn test_overflow_badge_after_six() {
        let card = project_card(0, &project(&["a", "b", "c", "d", "e", "f", "g", "h"]));
        assert_eq!(card.matches(r#"class="tech-badge""#).count(), 7);
        assert!(card.contains(r#"<span class="tech-badge">+2</span>"#));
        assert!(!card.contains(r#"<span class="tech-badge">g</span>"#));
    }

    #[test]
    fn test_exactly_six_has_no_overflow() {
        let card = project_card(0, &project(&["a", "b", "c", "d", "e", "f"]));
        assert_eq!(card.matches(r#"class="tech-badge""#).count(), 6);
        assert!(!card.contains(r#"<span class="tech-badge">+"#));
    }

    #[test]
    fn test_no_tech_no_badge_row() {
        let card = project_card(0, &project(&[]));
        assert!(!card.contains("project-tech-stack"));
    }

    #[test]
    fn test_private_badge_without_links() {
        let card = project_card(0, &project(&[]));
        assert!(card.contains(copy::PROJECT_PRIVATE));

        let mut linked = project(&[]);
        linked.link_github = Some("https://github.com/ada/compiler".to_string());
        let card = project_card(0, &linked);
        assert!(!card.contains(copy::PROJECT_PRIVATE));
        assert!(card.contains(r#"href="https://github.com/ada/compiler""#));
        assert!(!card.contains("project-link demo"));
    }

    #[test]
    fn test_empty_link_strings_count_as_absent() {
        let mut p = project(&[]);
        p.link_demo = Some(String::new());
        assert!(project_card(0, &p).contains(copy::PROJECT_PRIVATE));
    }

    #[test]
    fn test_card_carries_index_in_event() {
        let card = project_card(3, &project(&[]));
        assert!(card.contains(r#"data-project-index="3""#));
        assert!(card.contains("{ detail: { index: 3 } }"));
        assert!(card.contains("portfolio-project-click"));
    }

    #[test]
    fn test_status_label_and_color() {
        let mut p = project(&[]);
        p.status = Some("Active".to_string());
        let card = project_card(0, &p);
        assert!(card.contains("background: #10b981"));
        assert!(card.contains("En cours"));
    }

    #[test]
    fn test_about_omits_empty_details() {
        let t = template();
        let ctx = RenderContext::new(&t);
        let profile = UserProfile {
            username: "Ada".to_string(),
            phone: "+33 1 23".to_string(),
            ..Default::default()
        };
        let html = about(&ctx, &profile).unwrap();
        assert_eq!(html.matches("detail-item").count(), 1);
        assert!(html.contains("fa-phone"));
        assert!(html.contains(copy::FALLBACK_ROLE_LINE));
        assert!(html.contains(copy::FALLBACK_ABOUT));
    }

    #[test]
    fn test_hero_actions_follow_sections() {
        let mut t = template();
        t.layout.sections = vec!["summary".to_string(), "contact".to_string()];
        let ctx = RenderContext::new(&t);
        let html = hero(&ctx, &UserProfile::default()).unwrap();
        assert!(html.contains(r##"href="#contact""##));
        assert!(!html.contains(r##"href="#projects""##));
        assert!(html.contains(copy::FALLBACK_TITLE));
        assert!(html.contains(copy::FALLBACK_TAGLINE));
    }

    #[test]
    fn test_social_row_only_known_non_empty_links() {
        let links = SocialLinks {
            linkedin: Some("https://linkedin.com/in/ada".to_string()),
            github: Some(String::new()),
            ..Default::default()
        };
        let row = social_row(&links);
        assert_eq!(row.matches("social-link\"").count(), 1);
        assert!(row.contains("fa-linkedin-in"));
        assert!(social_row(&SocialLinks::default()).is_empty());
    }

    #[test]
    fn test_contact_quotes_bio() {
        let t = template();
        let ctx = RenderContext::new(&t);
        let profile = UserProfile {
            bio: "Builds compilers".to_string(),
            ..Default::default()
        };
        let html = contact(&ctx, &profile).unwrap();
        assert!(html.contains("\"Builds compilers\" - "));
        assert!(!html.contains("contact-item"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let p = ProjectView {
            title: "<script>alert(1)</script>".to_string(),
            ..Default::default()
        };
        let card = project_card(0, &p);
        assert!(!card.contains("<script>"));
        assert!(card.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_animation_delay_format() {
        assert_eq!(animation_delay(0), "0.0s");
        assert_eq!(animation_delay(3), "0.3s");
    }

    #[test]
    fn test_behavior_script_keeps_anchor_selector() {
        assert!(BEHAVIOR_SCRIPT.contains(r##"document.querySelectorAll('a[href^="#"]')"##));
        assert!(BEHAVIOR_SCRIPT.contains("new IntersectionObserver"));
        assert!(BEHAVIOR_SCRIPT.trim_end().ends_with("</script>"));
    }
}
