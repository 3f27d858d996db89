//! Inline stylesheets. Tokens in `{braces}` are filled from the palette and
//! theme surfaces; CSS block braces are never followed directly by a token name.

use crate::generation::palette::{Palette, Surfaces};

const PORTFOLIO_STYLESHEET: &str = r#"
        * { margin: 0; padding: 0; box-sizing: border-box; }
        html { scroll-behavior: smooth; }
        body {
            font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, sans-serif;
            line-height: 1.6;
            color: {text};
            background: {page_bg};
            overflow-x: hidden;
        }
        .container { max-width: 1280px; margin: 0 auto; padding: 0 2rem; }
        h1, h2, h3, h4, h5, h6 { font-weight: 700; line-height: 1.2; }

        .main-header {
            background: linear-gradient(135deg, {primary} 0%, {secondary} 100%);
            color: white;
            padding: 6rem 0;
            position: relative;
            overflow: hidden;
        }
        .header-content { text-align: center; position: relative; z-index: 1; }
        .header-title {
            font-size: 3.5rem;
            margin-bottom: 1rem;
            background: linear-gradient(120deg, #ffffff 0%, rgba(255,255,255,0.9) 100%);
            -webkit-background-clip: text;
            -webkit-text-fill-color: transparent;
            background-clip: text;
        }
        .header-subtitle { font-size: 1.5rem; opacity: 0.9; max-width: 600px; margin: 0 auto; line-height: 1.5; }

        .profile-section { padding: 6rem 0; background: {section_bg}; }
        .profile-card {
            display: grid;
            grid-template-columns: auto 1fr;
            gap: 3rem;
            align-items: start;
            background: {card_bg};
            border-radius: 1.5rem;
            padding: 3rem;
            box-shadow: 0 20px 40px rgba(0,0,0,0.08);
        }
        @media (max-width: 768px) {
            .profile-card { grid-template-columns: 1fr; text-align: center; }
        }
        .profile-image-container { position: relative; }
        .profile-image {
            width: 200px;
            height: 200px;
            border-radius: 1rem;
            object-fit: cover;
            border: 5px solid {primary};
            box-shadow: 0 10px 30px rgba(0,0,0,0.15);
            transition: transform 0.3s ease;
        }
        .profile-image:hover { transform: scale(1.02); }
        .profile-info { flex: 1; }
        .profile-name { font-size: 2.5rem; color: {name_text}; margin-bottom: 0.5rem; }
        .profile-title { font-size: 1.25rem; color: {subtle_text}; margin-bottom: 1.5rem; font-weight: 500; }
        .profile-about { color: {body_text}; line-height: 1.6; margin-bottom: 1.5rem; }
        .profile-details {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
            gap: 1rem;
            margin-top: 2rem;
        }
        .detail-item { display: flex; align-items: center; gap: 0.75rem; color: {body_text}; }
        .detail-item i { color: {primary}; width: 20px; }

        .skills-section { padding: 6rem 0; background: {alt_section_bg}; }
        .section-title {
            font-size: 2.5rem;
            text-align: center;
            margin-bottom: 3rem;
            color: {primary};
            position: relative;
            display: inline-block;
            left: 50%;
            transform: translateX(-50%);
        }
        .section-title::after {
            content: '';
            position: absolute;
            bottom: -10px;
            left: 0;
            width: 100%;
            height: 4px;
            background: linear-gradient(90deg, {primary}, {secondary});
            border-radius: 2px;
        }
        .skills-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(250px, 1fr)); gap: 1.5rem; }
        .skill-category {
            background: {section_bg};
            border-radius: 1rem;
            padding: 2rem;
            box-shadow: 0 10px 30px rgba(0,0,0,0.05);
            border: 1px solid {border};
            transition: transform 0.3s ease, box-shadow 0.3s ease;
        }
        .skill-category:hover { transform: translateY(-5px); box-shadow: 0 20px 40px rgba(0,0,0,0.1); }
        .skill-category-title {
            font-size: 1.25rem;
            color: {strong_text};
            margin-bottom: 1rem;
            display: flex;
            align-items: center;
            gap: 0.5rem;
        }
        .skill-tags { display: flex; flex-wrap: wrap; gap: 0.5rem; }
        .skill-tag {
            background: {primary}15;
            color: {primary};
            padding: 0.5rem 1rem;
            border-radius: 2rem;
            font-size: 0.875rem;
            font-weight: 500;
            border: 1px solid {primary}30;
            transition: all 0.3s ease;
        }
        .skill-tag:hover { background: {primary}; color: white; transform: translateY(-2px); }

        .projects-section { padding: 6rem 0; background: {section_bg}; }
        .projects-intro { text-align: center; margin: 0 auto 2rem; color: {muted_text}; max-width: 600px; }
        .projects-container { margin-top: 3rem; }
        .project-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(350px, 1fr)); gap: 2rem; }
        .project-card {
            background: {raised_bg};
            border-radius: 1.25rem;
            overflow: hidden;
            box-shadow: 0 15px 40px rgba(0,0,0,0.08);
            border: 1px solid {raised_border};
            transition: all 0.4s ease;
            height: 100%;
            display: flex;
            flex-direction: column;
            cursor: pointer;
        }
        .project-card:hover {
            transform: translateY(-8px);
            box-shadow: 0 25px 60px rgba(0,0,0,0.15);
            border-color: {primary}50;
        }
        .project-image-container { position: relative; height: 200px; overflow: hidden; }
        .project-image { width: 100%; height: 100%; object-fit: cover; transition: transform 0.6s ease; }
        .project-card:hover .project-image { transform: scale(1.05); }
        .project-overlay {
            position: absolute;
            top: 0;
            left: 0;
            right: 0;
            bottom: 0;
            background: linear-gradient(to bottom, transparent 0%, rgba(0,0,0,0.7) 100%);
            display: flex;
            align-items: flex-end;
            padding: 1.5rem;
        }
        .project-status {
            background: {primary};
            color: white;
            padding: 0.375rem 0.875rem;
            border-radius: 2rem;
            font-size: 0.75rem;
            font-weight: 600;
            text-transform: uppercase;
            letter-spacing: 0.5px;
        }
        .project-content { padding: 1.5rem; flex: 1; display: flex; flex-direction: column; }
        .project-header { margin-bottom: 1rem; }
        .project-title { font-size: 1.5rem; color: {strong_text}; margin-bottom: 0.5rem; line-height: 1.3; }
        .project-company {
            color: {muted_text};
            font-size: 0.95rem;
            font-weight: 500;
            display: flex;
            align-items: center;
            gap: 0.5rem;
        }
        .project-description { color: {body_text}; line-height: 1.6; margin-bottom: 1.5rem; flex: 1; }
        .project-tech-stack { display: flex; flex-wrap: wrap; gap: 0.5rem; margin-bottom: 1.5rem; }
        .tech-badge {
            background: {accent}15;
            color: {accent};
            padding: 0.375rem 0.75rem;
            border-radius: 1rem;
            font-size: 0.75rem;
            font-weight: 500;
            border: 1px solid {accent}30;
            transition: all 0.3s ease;
        }
        .tech-badge:hover { background: {accent}; color: white; transform: translateY(-1px); }
        .project-links { display: flex; gap: 0.75rem; margin-top: auto; }
        .project-link {
            flex: 1;
            display: flex;
            align-items: center;
            justify-content: center;
            gap: 0.5rem;
            padding: 0.75rem;
            border-radius: 0.75rem;
            text-decoration: none;
            font-weight: 500;
            font-size: 0.875rem;
            transition: all 0.3s ease;
        }
        .project-link.demo { background: {primary}; color: white; }
        .project-link.demo:hover {
            background: {secondary};
            transform: translateY(-2px);
            box-shadow: 0 8px 20px rgba(79, 70, 229, 0.3);
        }
        .project-link.github { background: {chip_bg}; color: {chip_text}; border: 1px solid {chip_border}; }
        .project-link.github:hover { background: {chip_border}; transform: translateY(-2px); }
        .project-link.private { cursor: default; opacity: 0.7; }

        .contact-section {
            padding: 6rem 0;
            background: linear-gradient(135deg, {primary} 0%, {secondary} 100%);
            color: white;
        }
        .contact-content { text-align: center; max-width: 600px; margin: 0 auto; }
        .contact-title {
            font-size: 2.5rem;
            margin-bottom: 1.5rem;
            background: linear-gradient(120deg, #ffffff 0%, rgba(255,255,255,0.9) 100%);
            -webkit-background-clip: text;
            -webkit-text-fill-color: transparent;
            background-clip: text;
        }
        .contact-description { font-size: 1.1rem; opacity: 0.9; margin-bottom: 2.5rem; line-height: 1.6; }
        .contact-info-grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
            gap: 2rem;
            margin-bottom: 3rem;
        }
        .contact-item {
            background: rgba(255, 255, 255, 0.1);
            padding: 1.5rem;
            border-radius: 1rem;
            backdrop-filter: blur(10px);
            border: 1px solid rgba(255, 255, 255, 0.2);
            transition: transform 0.3s ease;
        }
        .contact-item:hover { transform: translateY(-5px); background: rgba(255, 255, 255, 0.15); }
        .contact-item i { font-size: 2rem; margin-bottom: 1rem; color: white; opacity: 0.9; }
        .contact-item h4 { font-size: 1.1rem; margin-bottom: 0.5rem; }
        .contact-item p { opacity: 0.8; font-size: 0.95rem; }
        .social-links { display: flex; justify-content: center; gap: 1rem; flex-wrap: wrap; }
        .social-link {
            width: 50px;
            height: 50px;
            border-radius: 50%;
            background: rgba(255, 255, 255, 0.1);
            display: flex;
            align-items: center;
            justify-content: center;
            color: white;
            text-decoration: none;
            font-size: 1.25rem;
            transition: all 0.3s ease;
            border: 1px solid rgba(255, 255, 255, 0.2);
        }
        .social-link:hover {
            background: white;
            color: {primary};
            transform: scale(1.1) translateY(-5px);
            box-shadow: 0 10px 20px rgba(0,0,0,0.2);
        }

        .main-footer {
            padding: 3rem 0;
            background: {alt_section_bg};
            text-align: center;
            border-top: 1px solid {border};
        }
        .footer-text { color: {muted_text}; font-size: 0.9rem; }
        .footer-credit { margin-top: 0.5rem; font-size: 0.8rem; }

        .navbar {
            position: fixed;
            top: 0;
            width: 100%;
            z-index: 1000;
            background: rgba(255,255,255,0.95);
            backdrop-filter: blur(10px);
            padding: 1rem 0;
            border-bottom: 1px solid #e5e7eb;
        }
        .navbar .container { display: flex; justify-content: space-between; align-items: center; }
        .logo { font-size: 1.5rem; font-weight: 700; color: {primary}; }
        .nav-links { display: flex; gap: 2rem; }
        .nav-links a { color: #4b5563; text-decoration: none; font-weight: 500; transition: color 0.3s; }

        @media (max-width: 768px) {
            .container { padding: 0 1.5rem; }
            .header-title { font-size: 2.5rem; }
            .header-subtitle { font-size: 1.25rem; }
            .profile-card { padding: 2rem; }
            .profile-name { font-size: 2rem; }
            .section-title { font-size: 2rem; }
            .project-grid { grid-template-columns: 1fr; }
            .contact-title { font-size: 2rem; }
        }
        @media (max-width: 480px) {
            .header-title { font-size: 2rem; }
            .profile-name { font-size: 1.75rem; }
            .section-title { font-size: 1.75rem; }
            .project-links { flex-direction: column; }
        }

        @keyframes fadeInUp {
            from { opacity: 0; transform: translateY(30px); }
            to { opacity: 1; transform: translateY(0); }
        }
        .animate-fadeInUp { animation: fadeInUp 0.6s ease forwards; }

        .btn {
            display: inline-flex;
            align-items: center;
            justify-content: center;
            gap: 0.5rem;
            padding: 0.875rem 1.75rem;
            border-radius: 0.75rem;
            font-weight: 600;
            text-decoration: none;
            transition: all 0.3s ease;
            border: none;
            cursor: pointer;
            font-size: 1rem;
        }
        .btn-primary { background: {primary}; color: white; margin-right: 1rem; }
        .btn-primary:hover {
            background: {secondary};
            transform: translateY(-2px);
            box-shadow: 0 10px 25px rgba(79, 70, 229, 0.3);
        }
        .btn-outline { background: transparent; color: {primary}; border: 2px solid {primary}; }
        .btn-outline:hover { background: {primary}; color: white; }

        ::-webkit-scrollbar { width: 10px; }
        ::-webkit-scrollbar-track { background: {scroll_track}; }
        ::-webkit-scrollbar-thumb { background: {primary}; border-radius: 5px; }
        ::-webkit-scrollbar-thumb:hover { background: {secondary}; }
"#;

const PLACEHOLDER_STYLESHEET: &str = r#"
        * { margin: 0; padding: 0; box-sizing: border-box; }
        body {
            font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            display: flex;
            align-items: center;
            justify-content: center;
            min-height: 100vh;
            background: linear-gradient(135deg, {primary} 0%, {secondary} 100%);
            color: white;
            text-align: center;
            padding: 2rem;
        }
        .empty-container {
            max-width: 500px;
            padding: 3rem;
            background: rgba(255, 255, 255, 0.1);
            backdrop-filter: blur(10px);
            border-radius: 1.5rem;
            border: 1px solid rgba(255, 255, 255, 0.2);
        }
        .empty-icon { font-size: 4rem; margin-bottom: 1.5rem; opacity: 0.9; }
        h1 {
            font-size: 2.5rem;
            margin-bottom: 1rem;
            background: linear-gradient(120deg, #ffffff 0%, rgba(255,255,255,0.8) 100%);
            -webkit-background-clip: text;
            -webkit-text-fill-color: transparent;
            background-clip: text;
        }
        p { font-size: 1.1rem; opacity: 0.9; line-height: 1.6; margin-bottom: 2rem; }
        .cta-button {
            display: inline-flex;
            align-items: center;
            gap: 0.5rem;
            padding: 0.875rem 2rem;
            background: white;
            color: {primary};
            text-decoration: none;
            border-radius: 0.75rem;
            font-weight: 600;
            transition: all 0.3s ease;
        }
        .cta-button:hover { transform: translateY(-2px); box-shadow: 0 10px 25px rgba(0,0,0,0.2); }
"#;

/// Builds the full portfolio stylesheet for a palette and theme.
pub fn portfolio_stylesheet(palette: &Palette, surfaces: &Surfaces) -> String {
    PORTFOLIO_STYLESHEET
        .replace("{primary}", &palette.primary)
        .replace("{secondary}", &palette.secondary)
        .replace("{accent}", &palette.accent)
        .replace("{text}", surfaces.text)
        .replace("{page_bg}", surfaces.page_bg)
        .replace("{section_bg}", surfaces.section_bg)
        .replace("{alt_section_bg}", surfaces.alt_section_bg)
        .replace("{card_bg}", &surfaces.card_bg)
        .replace("{raised_bg}", surfaces.raised_bg)
        .replace("{raised_border}", surfaces.raised_border)
        .replace("{border}", surfaces.border)
        .replace("{name_text}", &surfaces.name_text)
        .replace("{strong_text}", surfaces.strong_text)
        .replace("{body_text}", surfaces.body_text)
        .replace("{subtle_text}", surfaces.subtle_text)
        .replace("{muted_text}", surfaces.muted_text)
        .replace("{chip_bg}", surfaces.chip_bg)
        .replace("{chip_text}", surfaces.chip_text)
        .replace("{chip_border}", surfaces.chip_border)
        .replace("{scroll_track}", surfaces.scroll_track)
}

/// Stylesheet for the "portfolio in preparation" document. Only the first two
/// palette slots are used.
pub fn placeholder_stylesheet(palette: &Palette) -> String {
    PLACEHOLDER_STYLESHEET
        .replace("{primary}", &palette.primary)
        .replace("{secondary}", &palette.secondary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::model::Theme;

    fn palette() -> Palette {
        Palette::from_colors(&["#111111".to_string(), "#222222".to_string()])
    }

    #[test]
    fn test_all_tokens_replaced() {
        for theme in [Theme::Light, Theme::Dark] {
            let p = palette();
            let css = portfolio_stylesheet(&p, &Surfaces::new(theme, &p));
            for token in [
                "{primary}", "{secondary}", "{accent}", "{text}", "{page_bg}", "{card_bg}",
                "{border}", "{muted_text}", "{scroll_track}", "{chip_bg}", "{name_text}",
            ] {
                assert!(!css.contains(token), "{token} left in {theme:?} stylesheet");
            }
        }
    }

    #[test]
    fn test_dark_theme_page_background() {
        let p = palette();
        let css = portfolio_stylesheet(&p, &Surfaces::new(Theme::Dark, &p));
        assert!(css.contains("background: #111827;"));
        assert!(css.contains("background: linear-gradient(135deg, #111111 0%, #222222 100%);"));
    }

    #[test]
    fn test_placeholder_uses_two_colors() {
        let css = placeholder_stylesheet(&palette());
        assert!(css.contains("#111111"));
        assert!(css.contains("#222222"));
        assert!(!css.contains("{primary}"));
    }
}
