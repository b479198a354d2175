//! Server-side rendering of a stored portfolio into its public page.
//!
//! The stored `templateId` picks a [`Layout`]; the document is projected once
//! into a [`PortfolioView`] and the layout only arranges what the view holds.

pub mod view;

use askama::Template;
use chrono::Datelike;
use serde::Serialize;

use crate::models::portfolio;

pub use view::{PortfolioView, Section};

/// The closed set of page layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Layout {
    ModernProfessional,
    CreativePortfolio,
}

impl Layout {
    pub const DEFAULT: Layout = Layout::ModernProfessional;

    /// Map a stored discriminator to a layout. Total: anything unknown,
    /// including a missing value, gets the default layout.
    pub fn select(template_id: Option<i32>) -> Layout {
        match template_id {
            Some(1) => Layout::ModernProfessional,
            Some(2) => Layout::CreativePortfolio,
            _ => Layout::DEFAULT,
        }
    }

    pub fn for_document(doc: &portfolio::Model) -> Layout {
        Layout::select(Some(doc.template_id))
    }

    pub fn template_id(self) -> i32 {
        match self {
            Layout::ModernProfessional => 1,
            Layout::CreativePortfolio => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Layout::ModernProfessional => "Modern Professional",
            Layout::CreativePortfolio => "Creative Portfolio",
        }
    }
}

#[derive(Template)]
#[template(path = "modern_professional.html")]
struct ModernProfessionalPage<'a> {
    view: &'a PortfolioView,
    year: i32,
}

#[derive(Template)]
#[template(path = "creative_portfolio.html")]
struct CreativePortfolioPage<'a> {
    view: &'a PortfolioView,
    year: i32,
}

/// Render an already projected view through `layout`.
pub fn render_view(layout: Layout, view: &PortfolioView) -> Result<String, askama::Error> {
    let year = chrono::Utc::now().year();
    match layout {
        Layout::ModernProfessional => ModernProfessionalPage { view, year }.render(),
        Layout::CreativePortfolio => CreativePortfolioPage { view, year }.render(),
    }
}

/// Project `doc` and render it through `layout`.
pub fn render(layout: Layout, doc: &portfolio::Model) -> Result<String, askama::Error> {
    render_view(layout, &PortfolioView::project(doc))
}

/// Render `doc` through the layout its own `templateId` selects.
pub fn render_document(doc: &portfolio::Model) -> Result<String, askama::Error> {
    render(Layout::for_document(doc), doc)
}
