use serde::Serialize;

use crate::models::portfolio::{self, Service};

/// Image shown for a project card that has no image of its own.
pub const PROJECT_PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/600x400/1e293b/475569";

/// Top-level blocks of a rendered page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Hero,
    About,
    Skills,
    Services,
    Projects,
    Testimonials,
    Blog,
    Contact,
}

impl Section {
    /// Value of the `data-section` attribute both layouts put on the block.
    pub fn marker(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Services => "services",
            Section::Projects => "projects",
            Section::Testimonials => "testimonials",
            Section::Blog => "blog",
            Section::Contact => "contact",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeroView {
    pub name: String,
    pub title: String,
    pub tagline: Option<String>,
    pub profile_image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SocialLink {
    pub network: &'static str,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AboutView {
    pub bio: String,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub socials: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectCard {
    pub title: String,
    pub image: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestimonialView {
    pub name: String,
    pub quote: String,
    pub company: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlogView {
    pub title: String,
    pub summary: String,
}

/// Targets of the "Send Email" / "Call Me" actions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactView {
    pub message: String,
    pub email: String,
    pub phone: Option<String>,
}

/// What a layout is allowed to show.
///
/// Built once per document; both layouts read only from here, so content
/// inclusion cannot drift between them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioView {
    pub hero: HeroView,
    pub about: AboutView,
    pub skills: Vec<String>,
    pub services: Vec<Service>,
    pub projects: Vec<ProjectCard>,
    pub testimonials: Vec<TestimonialView>,
    pub blog: Option<BlogView>,
    pub contact: ContactView,
}

fn present(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn prefer(primary: &str, fallback: &str) -> String {
    if primary.is_empty() {
        fallback.to_string()
    } else {
        primary.to_string()
    }
}

impl PortfolioView {
    pub fn project(doc: &portfolio::Model) -> Self {
        let socials = [
            ("LinkedIn", &doc.about.socials.linkedin),
            ("GitHub", &doc.about.socials.github),
            ("Twitter", &doc.about.socials.twitter),
        ]
        .into_iter()
        .filter(|(_, url)| !url.is_empty())
        .map(|(network, url)| SocialLink {
            network,
            url: url.clone(),
        })
        .collect();

        Self {
            hero: HeroView {
                name: doc.hero.name.clone(),
                title: doc.hero.title.clone(),
                tagline: present(&doc.hero.tagline),
                profile_image: doc.hero.profile_image.clone(),
            },
            about: AboutView {
                bio: doc.about.bio.clone(),
                email: doc.about.email.clone(),
                phone: present(&doc.about.phone),
                location: present(&doc.about.location),
                socials,
            },
            skills: doc.skills.to_vec(),
            services: doc
                .services
                .iter()
                .filter(|s| !s.title.is_empty())
                .cloned()
                .collect(),
            projects: doc
                .projects
                .iter()
                .filter(|p| !p.title.is_empty())
                .map(|p| ProjectCard {
                    title: p.title.clone(),
                    image: prefer(&p.image, PROJECT_PLACEHOLDER_IMAGE),
                    description: p.description.clone(),
                })
                .collect(),
            testimonials: doc
                .testimonials
                .iter()
                .filter(|t| !t.name.is_empty())
                .map(|t| TestimonialView {
                    name: t.name.clone(),
                    quote: t.quote.clone(),
                    company: present(&t.company),
                })
                .collect(),
            blog: (!doc.blog.title.is_empty()).then(|| BlogView {
                title: doc.blog.title.clone(),
                summary: doc.blog.summary.clone(),
            }),
            contact: ContactView {
                message: doc.contact.message.clone(),
                email: prefer(&doc.contact.email, &doc.about.email),
                phone: present(&prefer(&doc.contact.phone, &doc.about.phone)),
            },
        }
    }

    /// Blocks the page will contain, in page order.
    pub fn sections(&self) -> Vec<Section> {
        let mut sections = vec![
            Section::Hero,
            Section::About,
            Section::Skills,
            Section::Services,
            Section::Projects,
        ];
        if !self.testimonials.is_empty() {
            sections.push(Section::Testimonials);
        }
        if self.blog.is_some() {
            sections.push(Section::Blog);
        }
        sections.push(Section::Contact);
        sections
    }
}
