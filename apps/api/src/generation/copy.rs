//! Fixed locale strings rendered into every generated portfolio.
//!
//! The published documents are French-language (`<html lang="fr">`); viewers
//! match on some of these labels, so change them together with the frontend.

pub const DOCUMENT_LANG: &str = "fr";

pub const ICON_FONT_HREF: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css";

pub const FALLBACK_TITLE: &str = "Portfolio";
pub const FALLBACK_NAME: &str = "Utilisateur";
pub const FALLBACK_TAGLINE: &str = "Développeur passionné créant des solutions innovantes";
pub const FALLBACK_ROLE_LINE: &str = "Développeur Full Stack";
pub const FALLBACK_ABOUT: &str =
    "Passionné par la création de solutions numériques innovantes et performantes.";

pub const NAV_PROFILE: &str = "Profil";
pub const NAV_SKILLS: &str = "Compétences";
pub const NAV_PROJECTS: &str = "Projets";
pub const NAV_CONTACT: &str = "Contact";

pub const CTA_PROJECTS: &str = "Voir mes projets";
pub const CTA_CONTACT: &str = "Me contacter";

pub const ABOUT_HEADING: &str = "À propos de moi";
pub const SKILLS_HEADING: &str = "Mes Compétences";
pub const PROJECTS_HEADING: &str = "Mes Projets";
pub const PROJECTS_INTRO: &str = "Découvrez une sélection de mes projets les plus significatifs";

pub const PROJECT_FALLBACK_TITLE: &str = "Projet";
pub const PROJECT_FALLBACK_DESCRIPTION: &str = "Description du projet";
pub const PROJECT_DEMO_LINK: &str = "Voir le projet";
pub const PROJECT_SOURCE_LINK: &str = "Code source";
pub const PROJECT_PRIVATE: &str = "Privé";

pub const CONTACT_HEADING: &str = "Travaillons ensemble";
pub const CONTACT_PITCH: &str = "N'hésitez pas à me contacter pour discuter de vos projets ou opportunités de collaboration.";
pub const CONTACT_EMAIL: &str = "Email";
pub const CONTACT_PHONE: &str = "Téléphone";
pub const CONTACT_LOCATION: &str = "Localisation";

pub const FOOTER_RIGHTS: &str = "Tous droits réservés.";
pub const FOOTER_CREDIT: &str = "Portfolio généré avec PortfolioBuilder";

pub const EMPTY_HEADING: &str = "Portfolio en préparation";
pub const EMPTY_BODY: &str = "Votre portfolio est en cours de création. Veuillez compléter votre profil et ajouter vos projets pour générer un portfolio personnalisé.";
pub const EMPTY_CTA: &str = "Compléter mon profil";

/// Event name dispatched on `window` when a project card is clicked.
/// `detail.index` is the card's position in the project list used for generation.
pub const PROJECT_CLICK_EVENT: &str = "portfolio-project-click";
