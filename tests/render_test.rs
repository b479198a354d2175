//! Tests for template selection, content suppression and layout symmetry.
//!
//! Run with: `cargo test --test render_test`
mod common;

use showcase_backend::models::portfolio::{Project, Service, Testimonial};
use showcase_backend::render::view::PROJECT_PLACEHOLDER_IMAGE;
use showcase_backend::render::{self, Layout, PortfolioView, Section};

use common::sample_portfolio;

fn count(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}

fn both_layouts(doc: &showcase_backend::models::portfolio::Model) -> (String, String) {
    let modern = render::render(Layout::ModernProfessional, doc).expect("modern render");
    let creative = render::render(Layout::CreativePortfolio, doc).expect("creative render");
    (modern, creative)
}

#[test]
fn test_layout_selection_is_total() {
    assert_eq!(Layout::select(Some(1)), Layout::ModernProfessional);
    assert_eq!(Layout::select(Some(2)), Layout::CreativePortfolio);
    assert_eq!(Layout::select(Some(3)), Layout::DEFAULT);
    assert_eq!(Layout::select(Some(0)), Layout::DEFAULT);
    assert_eq!(Layout::select(Some(-1)), Layout::DEFAULT);
    assert_eq!(Layout::select(None), Layout::DEFAULT);
    assert_eq!(Layout::DEFAULT, Layout::ModernProfessional);
}

#[test]
fn test_layout_ids_round_trip_through_select() {
    for layout in [Layout::ModernProfessional, Layout::CreativePortfolio] {
        assert_eq!(Layout::select(Some(layout.template_id())), layout);
    }
}

#[test]
fn test_document_picks_its_own_layout() {
    let html = render::render_document(&sample_portfolio(2)).unwrap();
    assert!(html.contains("layout-creative-portfolio"));

    let html = render::render_document(&sample_portfolio(1)).unwrap();
    assert!(html.contains("layout-modern-professional"));

    let html = render::render_document(&sample_portfolio(42)).unwrap();
    assert!(html.contains("layout-modern-professional"));
}

#[test]
fn test_view_drops_untitled_entries() {
    let view = PortfolioView::project(&sample_portfolio(1));

    assert_eq!(view.services.len(), 1);
    assert_eq!(view.services[0].title, "API Design");
    assert_eq!(view.projects.len(), 1);
    assert_eq!(view.projects[0].title, "Ledger");
    assert_eq!(view.testimonials.len(), 1);
    assert_eq!(view.testimonials[0].company.as_deref(), Some("Acme"));
}

#[test]
fn test_project_without_image_gets_placeholder() {
    let view = PortfolioView::project(&sample_portfolio(1));
    assert_eq!(view.projects[0].image, PROJECT_PLACEHOLDER_IMAGE);

    let mut doc = sample_portfolio(1);
    doc.projects[0].image = "https://img.example.com/ledger.png".to_string();
    let view = PortfolioView::project(&doc);
    assert_eq!(view.projects[0].image, "https://img.example.com/ledger.png");
}

#[test]
fn test_socials_only_for_present_links() {
    let view = PortfolioView::project(&sample_portfolio(1));
    let networks: Vec<&str> = view.about.socials.iter().map(|s| s.network).collect();
    assert_eq!(networks, vec!["LinkedIn", "GitHub"]);

    let (modern, creative) = both_layouts(&sample_portfolio(1));
    assert_eq!(count(&modern, "class=\"social\""), 2);
    assert_eq!(count(&creative, "class=\"social\""), 2);
}

#[test]
fn test_empty_sections_are_suppressed() {
    let mut doc = sample_portfolio(1);
    doc.hero.tagline.clear();
    doc.about.phone.clear();
    doc.about.location.clear();
    doc.testimonials.clear();
    doc.blog.title.clear();

    let view = PortfolioView::project(&doc);
    assert_eq!(view.hero.tagline, None);
    assert_eq!(view.about.phone, None);
    assert_eq!(view.about.location, None);
    assert!(view.blog.is_none());
    assert_eq!(
        view.sections(),
        vec![
            Section::Hero,
            Section::About,
            Section::Skills,
            Section::Services,
            Section::Projects,
            Section::Contact,
        ]
    );

    let (modern, creative) = both_layouts(&doc);
    for html in [&modern, &creative] {
        assert!(!html.contains("data-section=\"testimonials\""));
        assert!(!html.contains("data-section=\"blog\""));
        assert!(!html.contains("class=\"tagline\""));
        assert!(!html.contains("about-phone"));
        assert!(!html.contains("about-location"));
        assert!(!html.contains("action-phone"));
    }
}

#[test]
fn test_testimonial_without_name_is_hidden() {
    let mut doc = sample_portfolio(1);
    doc.testimonials = vec![Testimonial {
        name: String::new(),
        quote: "Anonymous praise".to_string(),
        company: "Nowhere".to_string(),
    }]
    .into();

    let view = PortfolioView::project(&doc);
    assert!(view.testimonials.is_empty());
    assert!(!view.sections().contains(&Section::Testimonials));

    let html = render::render(Layout::CreativePortfolio, &doc).unwrap();
    assert!(!html.contains("Anonymous praise"));
}

#[test]
fn test_testimonial_company_is_optional() {
    let mut doc = sample_portfolio(2);
    doc.testimonials[0].company.clear();

    let (modern, creative) = both_layouts(&doc);
    for html in [&modern, &creative] {
        assert_eq!(count(html, "class=\"testimonial\""), 1);
        assert!(!html.contains("class=\"company\""));
    }
}

#[test]
fn test_blog_renders_when_titled() {
    let (modern, creative) = both_layouts(&sample_portfolio(1));
    for html in [&modern, &creative] {
        assert!(html.contains("data-section=\"blog\""));
        assert!(html.contains("On Latency"));
    }
}

#[test]
fn test_contact_email_falls_back_to_about() {
    let mut doc = sample_portfolio(1);
    doc.about.email = "a@b.com".to_string();
    doc.contact.email.clear();

    let view = PortfolioView::project(&doc);
    assert_eq!(view.contact.email, "a@b.com");

    let (modern, creative) = both_layouts(&doc);
    for html in [&modern, &creative] {
        assert!(html.contains("class=\"action-email\" href=\"mailto:a@b.com\""));
    }
}

#[test]
fn test_contact_email_prefers_contact_section() {
    let view = PortfolioView::project(&sample_portfolio(1));
    assert_eq!(view.contact.email, "hire@example.com");
}

#[test]
fn test_call_action_uses_about_phone_when_contact_has_none() {
    let doc = sample_portfolio(1);
    let view = PortfolioView::project(&doc);
    assert_eq!(view.contact.phone.as_deref(), Some("+1 555 123 4567"));

    let (modern, creative) = both_layouts(&doc);
    for html in [&modern, &creative] {
        assert_eq!(count(html, "class=\"action-phone\""), 1);
    }
}

#[test]
fn test_content_is_escaped() {
    let mut doc = sample_portfolio(1);
    doc.hero.name = "<script>alert(1)</script>".to_string();

    let (modern, creative) = both_layouts(&doc);
    for html in [&modern, &creative] {
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}

#[test]
fn test_layouts_show_the_same_content() {
    let mut doc = sample_portfolio(1);
    doc.services.push(Service {
        title: "Mentoring".to_string(),
        description: String::new(),
    });
    doc.projects.push(Project {
        title: "Relay".to_string(),
        image: String::new(),
        description: "Message broker".to_string(),
    });

    let (modern, creative) = both_layouts(&doc);
    let view = PortfolioView::project(&doc);

    for section in view.sections() {
        let marker = format!("data-section=\"{}\"", section.marker());
        assert_eq!(count(&modern, &marker), 1, "modern {marker}");
        assert_eq!(count(&creative, &marker), 1, "creative {marker}");
    }

    for class in [
        "class=\"skill\"",
        "class=\"service\"",
        "class=\"project\"",
        "class=\"testimonial\"",
        "class=\"company\"",
        "class=\"social\"",
        "class=\"about-phone\"",
        "class=\"about-location\"",
        "class=\"action-email\"",
        "class=\"action-phone\"",
    ] {
        assert_eq!(count(&modern, class), count(&creative, class), "{class}");
    }

    assert_eq!(count(&modern, "class=\"skill\""), 3);
    assert_eq!(count(&modern, "class=\"service\""), 2);
    assert_eq!(count(&modern, "class=\"project\""), 2);
}
