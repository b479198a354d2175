use sea_orm::FromJsonQueryResult;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};

/// Template used when a create body omits `templateId`.
pub const DEFAULT_TEMPLATE_ID: i32 = 1;

/// SeaORM entity for the `portfolios` table.
///
/// Every section of the public page lives in its own JSONB column; the wire
/// format is the camelCase document the builder front end produces.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "portfolios")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub template_id: i32,
    #[sea_orm(column_type = "JsonBinary")]
    pub hero: Hero,
    #[sea_orm(column_type = "JsonBinary")]
    pub about: About,
    #[sea_orm(column_type = "JsonBinary")]
    pub skills: Skills,
    #[sea_orm(column_type = "JsonBinary")]
    pub services: Services,
    #[sea_orm(column_type = "JsonBinary")]
    #[serde(rename = "portfolio")]
    pub projects: Projects,
    #[sea_orm(column_type = "JsonBinary")]
    pub testimonials: Testimonials,
    #[sea_orm(column_type = "JsonBinary")]
    pub blog: Blog,
    #[sea_orm(column_type = "JsonBinary")]
    pub contact: Contact,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// ── Sections ──
//
// Optional text fields are plain strings; an empty string means "not given".

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(rename_all = "camelCase", default)]
pub struct Hero {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub profile_image: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(default)]
pub struct About {
    pub bio: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub socials: Socials,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Socials {
    pub linkedin: String,
    pub github: String,
    pub twitter: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Service {
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub title: String,
    pub image: String,
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Testimonial {
    pub name: String,
    pub quote: String,
    pub company: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(default)]
pub struct Blog {
    pub title: String,
    pub summary: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(default)]
pub struct Contact {
    pub message: String,
    pub email: String,
    pub phone: String,
}

/// Ordered list section stored as a single JSON array column.
macro_rules! json_list {
    ($name:ident, $item:ty) => {
        #[derive(
            Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult,
        )]
        #[serde(transparent)]
        pub struct $name(pub Vec<$item>);

        impl Deref for $name {
            type Target = Vec<$item>;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl DerefMut for $name {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.0
            }
        }

        impl From<Vec<$item>> for $name {
            fn from(items: Vec<$item>) -> Self {
                Self(items)
            }
        }
    };
}

json_list!(Skills, String);
json_list!(Services, Service);
json_list!(Projects, Project);
json_list!(Testimonials, Testimonial);

// ── DTOs ──

fn default_template_id() -> i32 {
    DEFAULT_TEMPLATE_ID
}

/// `templateId` may be absent or `null`; both mean the default template.
fn template_id_or_default<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<i32>::deserialize(deserializer)?.unwrap_or(DEFAULT_TEMPLATE_ID))
}

/// Body of `POST /api/portfolios`, and the draft the intake wizard builds up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePortfolio {
    #[serde(
        default = "default_template_id",
        deserialize_with = "template_id_or_default"
    )]
    pub template_id: i32,
    #[serde(default)]
    pub hero: Hero,
    #[serde(default)]
    pub about: About,
    #[serde(default)]
    pub skills: Skills,
    #[serde(default)]
    pub services: Services,
    #[serde(default, rename = "portfolio")]
    pub projects: Projects,
    #[serde(default)]
    pub testimonials: Testimonials,
    #[serde(default)]
    pub blog: Blog,
    #[serde(default)]
    pub contact: Contact,
}

impl CreatePortfolio {
    /// An empty draft for the given template: three blank service and
    /// project slots and one blank testimonial, everything else empty.
    pub fn blank(template_id: i32) -> Self {
        Self {
            template_id,
            hero: Hero::default(),
            about: About::default(),
            skills: Skills::default(),
            services: vec![Service::default(); 3].into(),
            projects: vec![Project::default(); 3].into(),
            testimonials: vec![Testimonial::default()].into(),
            blog: Blog::default(),
            contact: Contact::default(),
        }
    }
}

/// Body of `PUT /api/portfolios/{id}`; absent sections are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePortfolio {
    pub template_id: Option<i32>,
    pub hero: Option<Hero>,
    pub about: Option<About>,
    pub skills: Option<Skills>,
    pub services: Option<Services>,
    #[serde(rename = "portfolio")]
    pub projects: Option<Projects>,
    pub testimonials: Option<Testimonials>,
    pub blog: Option<Blog>,
    pub contact: Option<Contact>,
}
