use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use super::Step;
use crate::models::portfolio::{About, Contact, CreatePortfolio, Hero, Skills};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static email pattern"));

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9\s\-+()]+$").expect("static phone pattern"));

const MIN_NAME_CHARS: usize = 2;
const MIN_BIO_CHARS: usize = 50;
const MIN_PHONE_CHARS: usize = 10;

/// Form fields that can carry a validation message.
///
/// Serialized with the keys the builder UI uses (`heroName`, `aboutBio`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKey {
    HeroName,
    HeroTitle,
    HeroImage,
    AboutBio,
    AboutEmail,
    AboutPhone,
    Linkedin,
    Github,
    Twitter,
    Skills,
    ContactMessage,
    ContactEmail,
    ContactPhone,
}

/// Failing fields only; an empty map means the step is valid.
pub type FieldErrors = BTreeMap<FieldKey, &'static str>;

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Empty is valid (the field is optional); otherwise at least ten characters
/// of digits, spaces, `-`, `+` and parentheses.
pub fn is_valid_phone(phone: &str) -> bool {
    phone.is_empty() || (phone.chars().count() >= MIN_PHONE_CHARS && PHONE_RE.is_match(phone))
}

pub fn is_valid_url(raw: &str) -> bool {
    url::Url::parse(raw).is_ok()
}

/// Run the rules of one wizard step against the draft.
///
/// Services, Portfolio, Testimonials and Blog are optional sections and
/// always pass.
pub fn validate_step(step: Step, draft: &CreatePortfolio) -> FieldErrors {
    let mut errors = FieldErrors::new();
    match step {
        Step::Hero => check_hero(&draft.hero, &mut errors),
        Step::About => check_about(&draft.about, &mut errors),
        Step::Skills => check_skills(&draft.skills, &mut errors),
        Step::Contact => check_contact(&draft.contact, &mut errors),
        Step::Services | Step::Portfolio | Step::Testimonials | Step::Blog => {}
    }
    errors
}

/// Every step's rules at once; used for server-side enforcement on create.
pub fn validate_document(draft: &CreatePortfolio) -> FieldErrors {
    Step::ALL
        .iter()
        .flat_map(|step| validate_step(*step, draft))
        .collect()
}

fn check_hero(hero: &Hero, errors: &mut FieldErrors) {
    if hero.name.trim().is_empty() {
        errors.insert(FieldKey::HeroName, "Name is required");
    } else if hero.name.chars().count() < MIN_NAME_CHARS {
        errors.insert(FieldKey::HeroName, "Name must be at least 2 characters");
    }

    if hero.title.trim().is_empty() {
        errors.insert(FieldKey::HeroTitle, "Professional title is required");
    }

    if hero.profile_image.trim().is_empty() {
        errors.insert(FieldKey::HeroImage, "Profile image URL is required");
    } else if !is_valid_url(&hero.profile_image) {
        errors.insert(FieldKey::HeroImage, "Please enter a valid URL");
    }
}

fn check_about(about: &About, errors: &mut FieldErrors) {
    if about.bio.trim().is_empty() {
        errors.insert(FieldKey::AboutBio, "Bio is required");
    } else if about.bio.chars().count() < MIN_BIO_CHARS {
        errors.insert(FieldKey::AboutBio, "Bio must be at least 50 characters");
    }

    if about.email.trim().is_empty() {
        errors.insert(FieldKey::AboutEmail, "Email is required");
    } else if !is_valid_email(&about.email) {
        errors.insert(FieldKey::AboutEmail, "Please enter a valid email");
    }

    if !is_valid_phone(&about.phone) {
        errors.insert(FieldKey::AboutPhone, "Please enter a valid phone number");
    }

    let socials = [
        (&about.socials.linkedin, FieldKey::Linkedin, "Please enter a valid LinkedIn URL"),
        (&about.socials.github, FieldKey::Github, "Please enter a valid GitHub URL"),
        (&about.socials.twitter, FieldKey::Twitter, "Please enter a valid Twitter URL"),
    ];
    for (link, key, message) in socials {
        if !link.is_empty() && !is_valid_url(link) {
            errors.insert(key, message);
        }
    }
}

fn check_skills(skills: &Skills, errors: &mut FieldErrors) {
    if skills.is_empty() {
        errors.insert(FieldKey::Skills, "Please add at least one skill");
    }
}

fn check_contact(contact: &Contact, errors: &mut FieldErrors) {
    if contact.message.trim().is_empty() {
        errors.insert(FieldKey::ContactMessage, "Contact message is required");
    }

    if contact.email.trim().is_empty() {
        errors.insert(FieldKey::ContactEmail, "Contact email is required");
    } else if !is_valid_email(&contact.email) {
        errors.insert(FieldKey::ContactEmail, "Please enter a valid email");
    }

    if !is_valid_phone(&contact.phone) {
        errors.insert(FieldKey::ContactPhone, "Please enter a valid phone number");
    }
}
