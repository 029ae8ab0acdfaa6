//! Integration tests for `HttpBusinessAdapter` using wiremock HTTP mocks.

use biz_dash::adapters::business::HttpBusinessAdapter;
use biz_dash::domain::{validate, DomainError, Draft};
use biz_dash::ports::BusinessDataPort;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn adapter(base_url: &str) -> HttpBusinessAdapter {
    HttpBusinessAdapter::new(base_url, Some(Duration::from_secs(5)))
        .expect("adapter construction should not fail")
}

fn cake_body() -> serde_json::Value {
    serde_json::json!({
        "name": "Cake & Co",
        "location": "Mumbai",
        "rating": 4.5,
        "reviews": 128,
        "headline": "Best Cakes in Mumbai",
        "createdAt": "2024-01-01T10:00:00Z"
    })
}

#[tokio::test]
async fn fetch_posts_json_and_parses_result() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/business-data"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({"name": "Cake & Co", "location": "Mumbai"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(cake_body()))
        .expect(1)
        .mount(&server)
        .await;

    let request = validate(&Draft::new(" Cake & Co ", "Mumbai ")).unwrap();
    let result = adapter(&server.uri())
        .fetch_business_data(&request)
        .await
        .expect("should parse result");

    assert_eq!(result.name, "Cake & Co");
    assert_eq!(result.location, "Mumbai");
    assert_eq!(result.rating, 4.5);
    assert_eq!(result.reviews, 128);
    assert_eq!(result.headline, "Best Cakes in Mumbai");
    assert_eq!(result.created_at.to_rfc3339(), "2024-01-01T10:00:00+00:00");
}

#[tokio::test]
async fn fetch_maps_non_success_status() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/business-data"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let request = validate(&Draft::new("Cake & Co", "Mumbai")).unwrap();
    let err = adapter(&server.uri())
        .fetch_business_data(&request)
        .await
        .unwrap_err();

    match err {
        DomainError::Status { status, body } => {
            assert_eq!(status, 503);
            assert_eq!(body, "upstream down");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn fetch_rejects_missing_fields() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/business-data"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"name": "Cake & Co"})),
        )
        .mount(&server)
        .await;

    let request = validate(&Draft::new("Cake & Co", "Mumbai")).unwrap();
    let err = adapter(&server.uri())
        .fetch_business_data(&request)
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::MalformedResponse(_)));
}

#[tokio::test]
async fn fetch_rejects_rating_out_of_range() {
    let server = MockServer::start().await;
    let mut body = cake_body();
    body["rating"] = serde_json::json!(7.2);

    Mock::given(method("POST"))
        .and(path("/business-data"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let request = validate(&Draft::new("Cake & Co", "Mumbai")).unwrap();
    let err = adapter(&server.uri())
        .fetch_business_data(&request)
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::MalformedResponse(_)));
}

#[tokio::test]
async fn fetch_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/business-data"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(cake_body())
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let slow = HttpBusinessAdapter::new(&server.uri(), Some(Duration::from_millis(200))).unwrap();
    let request = validate(&Draft::new("Cake & Co", "Mumbai")).unwrap();
    let err = slow.fetch_business_data(&request).await.unwrap_err();

    assert!(matches!(err, DomainError::Timeout));
}

#[tokio::test]
async fn fetch_reports_connection_failure() {
    // nothing listens on the discard port
    let request = validate(&Draft::new("Cake & Co", "Mumbai")).unwrap();
    let err = adapter("http://127.0.0.1:9")
        .fetch_business_data(&request)
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Transport(_) | DomainError::Timeout));
}

#[tokio::test]
async fn regenerate_sends_encoded_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/regenerate-headline"))
        .and(query_param("name", "Cake & Co"))
        .and(query_param("location", "Mumbai"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"headline": "Mumbai's #1 Bakery"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let update = adapter(&server.uri())
        .regenerate_headline("Cake & Co", "Mumbai")
        .await
        .expect("should parse headline");

    assert_eq!(update.headline, "Mumbai's #1 Bakery");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].url.query(),
        Some("name=Cake%20%26%20Co&location=Mumbai")
    );
}

#[tokio::test]
async fn regenerate_maps_non_success_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/regenerate-headline"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = adapter(&server.uri())
        .regenerate_headline("Cake & Co", "Mumbai")
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Status { status: 500, .. }));
}

#[tokio::test]
async fn regenerate_rejects_non_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/regenerate-headline"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = adapter(&server.uri())
        .regenerate_headline("Cake & Co", "Mumbai")
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::MalformedResponse(_)));
}
