//! Tests for the typed HTTP client against a mock API server.
//!
//! Run with: `cargo test --test client_test`
mod common;

use serde_json::{Value, json};
use uuid::Uuid;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use showcase_backend::client::{ApiClient, ClientError};
use showcase_backend::intake::IntakeWizard;
use showcase_backend::listing::PropertyFilter;
use showcase_backend::models::portfolio::CreatePortfolio;
use showcase_backend::models::properties::{PropertyType, UpdateProperty};

use common::{model_from_draft, sample_property, wizard_at_contact};

async fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(&format!("{}/api", server.uri()))
}

fn contact_ready(template_id: i32) -> IntakeWizard {
    let mut wizard = wizard_at_contact(template_id);
    wizard.edit(&[], |d| {
        d.contact.message = "Hi".to_string();
        d.contact.email = "jo@x.com".to_string();
    });
    wizard
}

#[tokio::test]
async fn test_create_portfolio_returns_stored_document() {
    let server = MockServer::start().await;
    let draft = contact_ready(1).draft().clone();
    let stored = model_from_draft(&draft);

    Mock::given(method("POST"))
        .and(path("/api/portfolios"))
        .and(body_partial_json(json!({ "templateId": 1 })))
        .respond_with(ResponseTemplate::new(201).set_body_json(&stored))
        .expect(1)
        .mount(&server)
        .await;

    let created = client_for(&server)
        .await
        .create_portfolio(&draft)
        .await
        .expect("create should succeed");

    assert_eq!(created.id, stored.id);
    assert_eq!(created.hero.name, "Jo");
}

#[tokio::test]
async fn test_error_statuses_map_to_client_errors() {
    let server = MockServer::start().await;
    let missing = Uuid::new_v4();
    let broken = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path(format!("/api/portfolios/{missing}")))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({ "error": format!("Portfolio {missing} not found") })),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/api/portfolios/{broken}")))
        .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;

    match client.get_portfolio(missing).await {
        Err(ClientError::NotFound(message)) => {
            assert_eq!(message, format!("Portfolio {missing} not found"));
        }
        other => panic!("expected not found, got {other:?}"),
    }

    match client.get_portfolio(broken).await {
        Err(err @ ClientError::Server { status: 500, .. }) => assert!(err.is_retryable()),
        other => panic!("expected server error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_validation_rejection_is_not_retryable() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/portfolios"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "Portfolio validation failed: Name is required"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .await
        .create_portfolio(&CreatePortfolio::blank(1))
        .await
        .unwrap_err();

    match &err {
        ClientError::Rejected(message) => assert!(message.contains("Name is required")),
        other => panic!("expected rejection, got {other:?}"),
    }
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_wizard_submits_once_through_the_client() {
    let server = MockServer::start().await;
    let mut wizard = contact_ready(2);
    let stored = model_from_draft(wizard.draft());

    Mock::given(method("POST"))
        .and(path("/api/portfolios"))
        .respond_with(ResponseTemplate::new(201).set_body_json(&stored))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let created = wizard.submit(&client).await.expect("submit should succeed");
    assert_eq!(created.template_id, 2);
    assert!(wizard.is_submitted());

    let requests = server.received_requests().await.expect("request recording");
    assert_eq!(requests.len(), 1);
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();

    for section in [
        "hero",
        "about",
        "skills",
        "services",
        "portfolio",
        "testimonials",
        "blog",
        "contact",
    ] {
        assert!(body.get(section).is_some(), "missing section {section}");
    }
    assert_eq!(body["templateId"], 2);
    assert_eq!(body["skills"], json!(["Go"]));
    assert_eq!(body["hero"]["profileImage"], "https://x/y.png");
    assert_eq!(body["contact"]["message"], "Hi");
}

#[tokio::test]
async fn test_wizard_keeps_draft_when_server_fails() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/portfolios"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({ "error": "down" })))
        .mount(&server)
        .await;

    let mut wizard = contact_ready(1);
    let before = wizard.draft().clone();
    let client = client_for(&server).await;

    assert!(wizard.submit(&client).await.is_err());
    assert!(!wizard.is_submitted());
    assert_eq!(wizard.draft(), &before);
}

#[tokio::test]
async fn test_list_properties_sends_filter_as_query() {
    let server = MockServer::start().await;
    let villa = sample_property("Palm Villa", "Goa", PropertyType::Villa);

    Mock::given(method("GET"))
        .and(path("/api/properties"))
        .and(query_param("search", "goa"))
        .and(query_param("type", "Villa"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([villa])))
        .expect(1)
        .mount(&server)
        .await;

    let filter = PropertyFilter {
        search: Some("goa".to_string()),
        property_type: Some("Villa".to_string()),
    };
    let items = client_for(&server)
        .await
        .list_properties(&filter)
        .await
        .expect("list should succeed");

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].property_type, PropertyType::Villa);
}

#[tokio::test]
async fn test_delete_property_returns_message() {
    let server = MockServer::start().await;
    let id = Uuid::new_v4();

    Mock::given(method("DELETE"))
        .and(path(format!("/api/properties/{id}")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "message": format!("Property {id} deleted") })),
        )
        .mount(&server)
        .await;

    let message = client_for(&server)
        .await
        .delete_property(id)
        .await
        .expect("delete should succeed");

    assert_eq!(message, format!("Property {id} deleted"));
}

#[tokio::test]
async fn test_update_property_sends_only_given_fields() {
    let server = MockServer::start().await;
    let mut item = sample_property("Harbour View", "Pune", PropertyType::House);
    item.price = 300_000.0;

    Mock::given(method("PUT"))
        .and(path(format!("/api/properties/{}", item.id)))
        .and(body_partial_json(json!({ "name": "Harbour View", "price": 300000.0 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&item))
        .expect(1)
        .mount(&server)
        .await;

    let input = UpdateProperty {
        name: Some("Harbour View".to_string()),
        price: Some(300_000.0),
        ..UpdateProperty::default()
    };
    let updated = client_for(&server)
        .await
        .update_property(item.id, &input)
        .await
        .expect("update should succeed");

    assert_eq!(updated.name, "Harbour View");
    assert_eq!(updated.price, 300_000.0);
}

#[tokio::test]
async fn test_update_property_surfaces_validation_message() {
    let server = MockServer::start().await;
    let id = Uuid::new_v4();

    Mock::given(method("PUT"))
        .and(path(format!("/api/properties/{id}")))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "Price must be a number of at least 0"
        })))
        .mount(&server)
        .await;

    let input = UpdateProperty {
        price: Some(-5.0),
        ..UpdateProperty::default()
    };
    let err = client_for(&server)
        .await
        .update_property(id, &input)
        .await
        .unwrap_err();

    match err {
        ClientError::Rejected(message) => {
            assert_eq!(message, "Price must be a number of at least 0");
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[tokio::test]
async fn test_get_property() {
    let server = MockServer::start().await;
    let item = sample_property("Hill House", "Pune", PropertyType::House);

    Mock::given(method("GET"))
        .and(path(format!("/api/properties/{}", item.id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(&item))
        .mount(&server)
        .await;

    let fetched = client_for(&server)
        .await
        .get_property(item.id)
        .await
        .expect("get should succeed");

    assert_eq!(fetched, item);
}
