use crate::generation::model::TemplateView;

/// Independently toggleable regions of a portfolio document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Hero banner.
    Summary,
    /// Profile card.
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Summary,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Section::Summary => "summary",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }
}

/// Gates each optional region on the template's section list.
///
/// An empty list enables everything. Keys that name no known section are inert.
#[derive(Debug, Clone, Copy)]
pub struct SectionFilter<'a> {
    sections: &'a [String],
}

impl<'a> SectionFilter<'a> {
    pub fn new(sections: &'a [String]) -> Self {
        Self { sections }
    }

    pub fn for_template(template: &'a TemplateView) -> Self {
        Self::new(&template.layout.sections)
    }

    pub fn has(&self, section: Section) -> bool {
        self.sections.is_empty() || self.sections.iter().any(|s| s == section.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_sections_enable_everything() {
        let sections = Vec::new();
        let filter = SectionFilter::new(&sections);
        assert!(Section::ALL.iter().all(|s| filter.has(*s)));
    }

    #[test]
    fn test_listed_sections_only() {
        let sections = keys(&["projects"]);
        let filter = SectionFilter::new(&sections);
        assert!(filter.has(Section::Projects));
        assert!(!filter.has(Section::Summary));
        assert!(!filter.has(Section::About));
        assert!(!filter.has(Section::Skills));
        assert!(!filter.has(Section::Contact));
    }

    #[test]
    fn test_unknown_keys_are_inert() {
        let sections = keys(&["testimonials", "contact"]);
        let filter = SectionFilter::new(&sections);
        assert!(filter.has(Section::Contact));
        assert!(!filter.has(Section::Projects));

        // Only unknown keys: the list is non-empty, so nothing is enabled.
        let unknown_only = keys(&["testimonials"]);
        let filter = SectionFilter::new(&unknown_only);
        assert!(Section::ALL.iter().all(|s| !filter.has(*s)));
    }
}
