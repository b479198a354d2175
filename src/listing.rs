//! Browse-page filtering over an already fetched collection.
//!
//! Every predicate is a case-insensitive substring test; blank inputs are
//! ignored and active predicates are AND-combined.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{portfolio, properties};

/// Type selector value that disables type filtering.
pub const ALL_TYPES: &str = "All";

/// Number of skills shown on a profile card before the "+N more" badge.
pub const CARD_SKILLS: usize = 3;

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn active(input: &Option<String>) -> Option<&str> {
    input.as_deref().filter(|s| !s.trim().is_empty())
}

/// `?role=` matches the hero title, `?skill=` matches any skill.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PortfolioFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill: Option<String>,
}

impl PortfolioFilter {
    pub fn active_count(&self) -> usize {
        [active(&self.role), active(&self.skill)]
            .iter()
            .filter(|f| f.is_some())
            .count()
    }

    pub fn matches(&self, item: &portfolio::Model) -> bool {
        if let Some(role) = active(&self.role) {
            if !contains_ci(&item.hero.title, role) {
                return false;
            }
        }
        if let Some(skill) = active(&self.skill) {
            if !item.skills.iter().any(|s| contains_ci(s, skill)) {
                return false;
            }
        }
        true
    }

    pub fn apply(&self, items: Vec<portfolio::Model>) -> Vec<portfolio::Model> {
        items.into_iter().filter(|item| self.matches(item)).collect()
    }
}

/// `?search=` matches name or location, `?type=` is an exact type name ("All" or blank disables it).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PropertyFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,
}

impl PropertyFilter {
    pub fn matches(&self, item: &properties::Model) -> bool {
        if let Some(wanted) = active(&self.property_type) {
            if wanted != ALL_TYPES && wanted != item.property_type.as_str() {
                return false;
            }
        }
        if let Some(term) = active(&self.search) {
            if !contains_ci(&item.name, term) && !contains_ci(&item.location, term) {
                return false;
            }
        }
        true
    }

    pub fn apply(&self, items: Vec<properties::Model>) -> Vec<properties::Model> {
        items.into_iter().filter(|item| self.matches(item)).collect()
    }
}

/// Compact summary shown in the professionals list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileCard {
    pub id: Uuid,
    pub template_id: i32,
    pub name: String,
    pub title: String,
    pub profile_image: String,
    pub initials: String,
    pub skills: Vec<String>,
    pub more_skills: usize,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub twitter: Option<String>,
}

impl From<&portfolio::Model> for ProfileCard {
    fn from(m: &portfolio::Model) -> Self {
        let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());
        Self {
            id: m.id,
            template_id: m.template_id,
            name: m.hero.name.clone(),
            title: m.hero.title.clone(),
            profile_image: m.hero.profile_image.clone(),
            initials: initials(&m.hero.name),
            skills: m.skills.iter().take(CARD_SKILLS).cloned().collect(),
            more_skills: m.skills.len().saturating_sub(CARD_SKILLS),
            linkedin: non_empty(&m.about.socials.linkedin),
            github: non_empty(&m.about.socials.github),
            twitter: non_empty(&m.about.socials.twitter),
        }
    }
}

/// First letter of the first two words, upper-cased; "NA" for a blank name.
pub fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect();

    if letters.is_empty() {
        "NA".to_string()
    } else {
        letters
    }
}
