use crate::errors::AppError;
use crate::generation::model::TechStack;
use crate::models::project::ProjectStatus;
use crate::validation::{check_length, finish, is_web_url};

/// Fields of a project write. `None` means "not being set" and is skipped;
/// a create passes every required field as `Some`.
#[derive(Debug, Default)]
pub struct ProjectFields<'a> {
    pub company_name: Option<&'a str>,
    pub duration: Option<&'a str>,
    pub category: Option<&'a str>,
    pub title: Option<&'a str>,
    pub description: Option<&'a str>,
    pub tech_stack: Option<&'a TechStack>,
    pub link_demo: Option<&'a str>,
    pub link_github: Option<&'a str>,
    pub status: Option<&'a str>,
}

/// Checks every present field and reports all violations together.
pub fn validate_project(fields: &ProjectFields) -> Result<(), AppError> {
    let mut errors = Vec::new();

    let lengths = [
        ("company_name", fields.company_name, 1, 100),
        ("duration", fields.duration, 1, 50),
        ("category", fields.category, 1, 50),
        ("title", fields.title, 3, 200),
        ("description", fields.description, 10, 2000),
    ];
    for (field, value, min, max) in lengths {
        if let Some(value) = value {
            check_length(&mut errors, field, value, min, max);
        }
    }

    if let Some(stack) = fields.tech_stack {
        if let TechStack::Other(_) = stack {
            errors.push("tech_stack must be a list or a comma-separated string".to_string());
        }
        for tech in stack.normalize() {
            let len = tech.trim().chars().count();
            if !(2..=50).contains(&len) {
                errors.push(format!(
                    "technology '{tech}' must be between 2 and 50 characters"
                ));
            }
        }
    }

    for (field, link) in [("link_demo", fields.link_demo), ("link_github", fields.link_github)] {
        if let Some(link) = link.map(str::trim).filter(|l| !l.is_empty()) {
            if !is_web_url(link) {
                errors.push(format!("{field} must be a valid URL"));
            }
        }
    }

    if let Some(status) = fields.status {
        if ProjectStatus::parse(status).is_none() {
            errors.push(format!(
                "status must be one of {}",
                ProjectStatus::ALL.map(|s| s.as_str()).join(", ")
            ));
        }
    }

    finish(errors)
}

/// Trimmed technologies, stored in input order.
pub fn stored_tech_stack(stack: &TechStack) -> Vec<String> {
    stack
        .normalize()
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid(stack: &TechStack) -> ProjectFields<'_> {
        ProjectFields {
            company_name: Some("Analytical Engines Ltd"),
            duration: Some("6 mois"),
            category: Some("Compilers"),
            title: Some("Compiler"),
            description: Some("A small optimizing compiler."),
            tech_stack: Some(stack),
            link_demo: Some(""),
            link_github: Some("https://github.com/ada/compiler"),
            status: Some("Active"),
        }
    }

    #[test]
    fn test_valid_project_passes() {
        let stack = TechStack::Csv("Rust, LLVM".to_string());
        assert!(validate_project(&valid(&stack)).is_ok());
    }

    #[test]
    fn test_partial_update_checks_only_present_fields() {
        let fields = ProjectFields {
            title: Some("Debugger"),
            ..Default::default()
        };
        assert!(validate_project(&fields).is_ok());
    }

    #[test]
    fn test_violations_are_collected() {
        let stack = TechStack::List(vec!["C".to_string(), "Rust".to_string()]);
        let fields = ProjectFields {
            title: Some("ab"),
            description: Some("too short"),
            tech_stack: Some(&stack),
            link_demo: Some("not a url"),
            status: Some("Done"),
            ..Default::default()
        };
        let Err(AppError::Validation(msg)) = validate_project(&fields) else {
            panic!("expected a validation error");
        };
        assert!(msg.contains("title"));
        assert!(msg.contains("description"));
        assert!(msg.contains("'C'"));
        assert!(!msg.contains("'Rust'"));
        assert!(msg.contains("link_demo"));
        assert!(msg.contains("Active, Complete, Pending"));
    }

    #[test]
    fn test_malformed_tech_stack_rejected() {
        let stack = TechStack::Other(serde_json::json!({ "lang": "Rust" }));
        let fields = ProjectFields {
            tech_stack: Some(&stack),
            ..Default::default()
        };
        assert!(validate_project(&fields).is_err());
    }

    #[test]
    fn test_stored_tech_stack_from_csv_and_list() {
        let csv = TechStack::Csv(" Rust ,LLVM,, ".to_string());
        let list = TechStack::List(vec![" Rust".to_string(), "LLVM ".to_string()]);
        assert_eq!(stored_tech_stack(&csv), vec!["Rust", "LLVM"]);
        assert_eq!(stored_tech_stack(&list), vec!["Rust", "LLVM"]);
    }
}
