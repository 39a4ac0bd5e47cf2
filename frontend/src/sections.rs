use std::collections::HashSet;
use std::rc::Rc;

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
    /// Whether the sticky header links to this section.
    pub in_nav: bool,
}

impl Section {
    pub const fn new(id: &'static str, label: &'static str, in_nav: bool) -> Self {
        Self { id, label, in_nav }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("section registry is empty")]
    Empty,
    #[error("section id `{0}` is registered more than once")]
    DuplicateId(&'static str),
}

/// Ordered section ids shared by a page, its scroll spy and its navigation.
/// Every id must be rendered as exactly one element with the same `id`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionRegistry {
    sections: Rc<[Section]>,
}

/// Element ids of the courier page. Pages render `<section id={..}>` from
/// these, so the registry and the markup cannot drift apart.
pub mod courier_ids {
    pub const ABOUT: &str = "about";
    pub const HOW: &str = "how";
    pub const FEATURES: &str = "features";
    pub const SUPPORT: &str = "support";
    pub const CTA: &str = "cta";
}

pub mod portfolio_ids {
    pub const ABOUT: &str = "about";
    pub const WORK: &str = "work";
    pub const SKILLS: &str = "skills";
    pub const TESTIMONIALS: &str = "testimonials";
    pub const CONTACT: &str = "contact";
}

const COURIER_SECTIONS: &[Section] = &[
    Section::new(courier_ids::ABOUT, "About", true),
    Section::new(courier_ids::HOW, "How it Works ?", true),
    Section::new(courier_ids::FEATURES, "Features", true),
    Section::new(courier_ids::SUPPORT, "Contact", true),
    Section::new(courier_ids::CTA, "Get started", false),
];

const PORTFOLIO_SECTIONS: &[Section] = &[
    Section::new(portfolio_ids::ABOUT, "About", true),
    Section::new(portfolio_ids::WORK, "Work", true),
    Section::new(portfolio_ids::SKILLS, "Skills", true),
    Section::new(portfolio_ids::TESTIMONIALS, "Testimonials", true),
    Section::new(portfolio_ids::CONTACT, "Contact", true),
];

impl SectionRegistry {
    pub fn from_static(sections: &'static [Section]) -> Self {
        Self {
            sections: sections.into(),
        }
    }

    pub fn courier() -> Self {
        Self::from_static(COURIER_SECTIONS)
    }

    pub fn portfolio() -> Self {
        Self::from_static(PORTFOLIO_SECTIONS)
    }

    /// Checks the registry is non-empty and its ids are unique.
    pub fn validate(&self) -> Result<(), RegistryError> {
        if self.sections.is_empty() {
            return Err(RegistryError::Empty);
        }
        let mut seen = HashSet::new();
        for section in self.sections.iter() {
            if !seen.insert(section.id) {
                return Err(RegistryError::DuplicateId(section.id));
            }
        }
        Ok(())
    }

    pub fn first_id(&self) -> Option<&'static str> {
        self.sections.first().map(|s| s.id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.sections.iter().map(|s| s.id)
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn nav_links(&self) -> impl Iterator<Item = &Section> + '_ {
        self.sections.iter().filter(|s| s.in_nav)
    }
}

pub fn href(id: &str) -> String {
    format!("#{}", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_registries_are_valid() {
        assert_eq!(SectionRegistry::courier().validate(), Ok(()));
        assert_eq!(SectionRegistry::portfolio().validate(), Ok(()));
    }

    #[test]
    fn courier_order_matches_page_layout() {
        let ids: Vec<_> = SectionRegistry::courier().ids().collect();
        assert_eq!(ids, ["about", "how", "features", "support", "cta"]);
    }

    #[test]
    fn portfolio_exposes_its_extra_anchors() {
        let registry = SectionRegistry::portfolio();
        for id in ["work", "skills", "testimonials", "contact"] {
            assert!(registry.ids().any(|known| known == id), "missing #{}", id);
        }
        assert_eq!(registry.first_id(), Some("about"));
    }

    #[test]
    fn rejects_empty_and_duplicate_ids() {
        assert_eq!(
            SectionRegistry::from_static(&[]).validate(),
            Err(RegistryError::Empty)
        );
        static DUP: [Section; 2] = [
            Section::new("about", "About", true),
            Section::new("about", "Again", false),
        ];
        assert_eq!(
            SectionRegistry::from_static(&DUP).validate(),
            Err(RegistryError::DuplicateId("about"))
        );
    }

    #[test]
    fn nav_links_skip_hidden_sections() {
        let labels: Vec<_> = SectionRegistry::courier()
            .nav_links()
            .map(|s| s.label)
            .collect();
        assert_eq!(labels, ["About", "How it Works ?", "Features", "Contact"]);
    }

    #[test]
    fn href_prefixes_hash() {
        assert_eq!(href("support"), "#support");
    }
}
