#![allow(dead_code)]

use chrono::Utc;
use uuid::Uuid;

use showcase_backend::intake::IntakeWizard;
use showcase_backend::models::portfolio::{
    self, About, Blog, Contact, CreatePortfolio, Hero, Project, Service, Socials, Testimonial,
};
use showcase_backend::models::properties::{self, Coordinates, PropertyType};

/// Exactly fifty characters, the shortest bio the About step accepts.
pub const BIO_50: &str = "I build reliable web services and enjoy it a lot!!";

/// Turn a draft into what the store would hand back for it.
pub fn model_from_draft(draft: &CreatePortfolio) -> portfolio::Model {
    let now = Utc::now();
    portfolio::Model {
        id: Uuid::new_v4(),
        template_id: draft.template_id,
        hero: draft.hero.clone(),
        about: draft.about.clone(),
        skills: draft.skills.clone(),
        services: draft.services.clone(),
        projects: draft.projects.clone(),
        testimonials: draft.testimonials.clone(),
        blog: draft.blog.clone(),
        contact: draft.contact.clone(),
        created_at: now,
        updated_at: now,
    }
}

/// A fully populated portfolio.
pub fn sample_portfolio(template_id: i32) -> portfolio::Model {
    let draft = CreatePortfolio {
        template_id,
        hero: Hero {
            name: "Jane Doe".to_string(),
            title: "Backend Engineer".to_string(),
            tagline: "Shipping boring software".to_string(),
            profile_image: "https://img.example.com/jane.png".to_string(),
        },
        about: About {
            bio: BIO_50.to_string(),
            email: "jane@example.com".to_string(),
            phone: "+1 555 123 4567".to_string(),
            location: "Lisbon".to_string(),
            socials: Socials {
                linkedin: "https://linkedin.com/in/jane".to_string(),
                github: "https://github.com/jane".to_string(),
                twitter: String::new(),
            },
        },
        skills: vec!["Rust".to_string(), "Postgres".to_string(), "Go".to_string()].into(),
        services: vec![
            Service {
                title: "API Design".to_string(),
                description: "REST and event APIs".to_string(),
            },
            Service::default(),
        ]
        .into(),
        projects: vec![
            Project {
                title: "Ledger".to_string(),
                image: String::new(),
                description: "Double-entry bookkeeping".to_string(),
            },
            Project::default(),
        ]
        .into(),
        testimonials: vec![Testimonial {
            name: "Sam".to_string(),
            quote: "Delivered early".to_string(),
            company: "Acme".to_string(),
        }]
        .into(),
        blog: Blog {
            title: "On Latency".to_string(),
            summary: "Notes from production".to_string(),
        },
        contact: Contact {
            message: "Let us talk".to_string(),
            email: "hire@example.com".to_string(),
            phone: String::new(),
        },
    };
    model_from_draft(&draft)
}

pub fn sample_property(name: &str, location: &str, property_type: PropertyType) -> properties::Model {
    let now = Utc::now();
    properties::Model {
        id: Uuid::new_v4(),
        name: name.to_string(),
        property_type,
        price: 250_000.0,
        location: location.to_string(),
        description: "Bright and quiet".to_string(),
        image: properties::DEFAULT_PROPERTY_IMAGE.to_string(),
        coordinates: Coordinates {
            lat: 19.076,
            lng: 72.8777,
        },
        created_at: now,
        updated_at: now,
    }
}

/// Walk a wizard through the three required steps with valid data and
/// leave it on the Contact step.
pub fn wizard_at_contact(template_id: i32) -> IntakeWizard {
    let mut wizard = IntakeWizard::new(template_id);
    wizard.edit(&[], |d| {
        d.hero.name = "Jo".to_string();
        d.hero.title = "Dev".to_string();
        d.hero.profile_image = "https://x/y.png".to_string();
    });
    wizard.advance().expect("hero step should pass");
    wizard.edit(&[], |d| {
        d.about.bio = BIO_50.to_string();
        d.about.email = "jo@x.com".to_string();
    });
    wizard.advance().expect("about step should pass");
    wizard.add_skill("Go");
    for _ in 0..5 {
        wizard.advance().expect("skills and optional steps should pass");
    }
    wizard
}
