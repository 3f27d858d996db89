use crate::errors::AppError;
use crate::generation::model::Theme;
use crate::models::template::TEMPLATE_CATEGORIES;
use crate::validation::finish;

/// Fields of a template write. `None` means "not being set" and is skipped.
#[derive(Debug, Default)]
pub struct TemplateFields<'a> {
    pub name: Option<&'a str>,
    pub colors: Option<&'a [String]>,
    pub theme: Option<&'a str>,
    pub category: Option<&'a str>,
}

/// Collects every violation and reports them together.
pub fn validate_template(fields: &TemplateFields) -> Result<(), AppError> {
    let mut errors = Vec::new();

    if let Some(name) = fields.name {
        if name.trim().is_empty() {
            errors.push("name cannot be empty".to_string());
        }
    }
    if let Some(colors) = fields.colors {
        if colors.is_empty() {
            errors.push("colors must contain at least one color".to_string());
        }
    }
    if let Some(theme) = fields.theme {
        if Theme::parse(theme).is_none() {
            errors.push(format!("theme must be 'light' or 'dark', got '{theme}'"));
        }
    }
    if let Some(category) = fields.category {
        if !is_category(category) {
            errors.push(format!(
                "category must be one of {}",
                TEMPLATE_CATEGORIES.join(", ")
            ));
        }
    }

    finish(errors)
}

pub fn is_category(category: &str) -> bool {
    TEMPLATE_CATEGORIES.contains(&category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_template_passes() {
        let colors = vec!["#000000".to_string()];
        let fields = TemplateFields {
            name: Some("Minimal"),
            colors: Some(&colors),
            theme: Some("dark"),
            category: Some("technical"),
        };
        assert!(validate_template(&fields).is_ok());
    }

    #[test]
    fn test_absent_fields_are_skipped() {
        assert!(validate_template(&TemplateFields::default()).is_ok());
    }

    #[test]
    fn test_all_violations_reported() {
        let colors: Vec<String> = vec![];
        let fields = TemplateFields {
            name: Some("  "),
            colors: Some(&colors),
            theme: Some("sepia"),
            category: Some("games"),
        };
        let Err(AppError::Validation(msg)) = validate_template(&fields) else {
            panic!("expected a validation error");
        };
        assert!(msg.contains("name"));
        assert!(msg.contains("colors"));
        assert!(msg.contains("sepia"));
        assert!(msg.contains("category"));
    }
}
