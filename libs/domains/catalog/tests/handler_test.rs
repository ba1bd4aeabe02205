//! Handler tests for the catalog domain
//!
//! These drive the catalog router end to end over an in-memory product
//! source: request routing, query-string deserialization, response
//! serialization, and status codes. Only the catalog domain is mounted,
//! not the full application router.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_catalog::{
    handlers, CatalogService, CategoryIndex, IdRef, Product, StaticProductSource,
};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt; // For oneshot()

fn product(id: &str, category: IdRef) -> Product {
    Product {
        id: id.to_string(),
        name: format!("Product {}", id),
        brand: "Garutech".to_string(),
        description: String::new(),
        price: 250_000,
        original_price: None,
        image: String::new(),
        category,
        sub_category: None,
        in_stock: true,
        stock_count: 3,
        rating: 0.0,
        reviews: 0,
        specifications: Default::default(),
        features: Vec::new(),
        priority: None,
        videos: Vec::new(),
        featured: None,
    }
}

fn catalog() -> Vec<Product> {
    let mut lift = product("two-post-lift", IdRef::from("garagetools"));
    lift.sub_category = Some(IdRef::from("lifting-equipment"));
    lift.featured = Some(true);

    let mut booth = product("spray-booth", IdRef::from(vec!["spraybooth", "bodyparts"]));
    booth.rating = 4.8;

    let scanner = product("obd-scanner", IdRef::from("diagnosticscanners"));

    vec![lift, booth, scanner]
}

async fn app() -> axum::Router {
    let service = CatalogService::new(
        StaticProductSource::new(catalog()),
        CategoryIndex::default(),
    );
    service.refresh().await;
    handlers::router(Arc::new(service))
}

async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

#[tokio::test]
async fn list_returns_snapshot_with_status_fields() {
    let (status, body) = get_json(app().await, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["products"].as_array().unwrap().len(), 3);
    assert_eq!(body["loading"], false);
    assert!(body.get("error").is_none());
}

#[tokio::test]
async fn filter_handles_scalar_and_list_categories() {
    let (status, body) = get_json(app().await, "/filter?category=bodyparts").await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["_id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["spray-booth"]);
}

#[tokio::test]
async fn filter_with_sub_category_narrows() {
    let (_, narrowed) = get_json(
        app().await,
        "/filter?category=garagetools&subCategory=lifting-equipment",
    )
    .await;
    assert_eq!(narrowed.as_array().unwrap().len(), 1);

    let (_, none) = get_json(
        app().await,
        "/filter?category=garagetools&subCategory=air-tools",
    )
    .await;
    assert_eq!(none.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn featured_prefers_the_flagged_product() {
    let (status, body) = get_json(app().await, "/featured").await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["_id"].as_str().unwrap())
        .collect();
    // spray-booth is rated higher but two-post-lift carries the flag
    assert_eq!(ids, ["two-post-lift"]);
}

#[tokio::test]
async fn get_product_returns_404_for_unknown_id() {
    let (status, body) = get_json(app().await, "/no-such-product").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn get_product_returns_the_record() {
    let (status, body) = get_json(app().await, "/spray-booth").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["_id"], "spray-booth");
    assert_eq!(body["brand"], "Garutech");
}

#[tokio::test]
async fn related_excludes_the_anchor() {
    let (status, body) = get_json(app().await, "/two-post-lift/related?limit=2").await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["_id"].as_str().unwrap())
        .collect();
    assert_eq!(ids.len(), 2);
    assert!(!ids.contains(&"two-post-lift"));
}

#[tokio::test]
async fn search_matches_brand_text() {
    let (status, body) = get_json(app().await, "/search?q=garutech").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn categories_in_use_lists_distinct_sorted_ids() {
    let (status, body) = get_json(app().await, "/categories-in-use").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["categories"],
        serde_json::json!(["bodyparts", "diagnosticscanners", "garagetools", "spraybooth"])
    );
    assert_eq!(body["subCategories"], serde_json::json!(["lifting-equipment"]));
}

#[tokio::test]
async fn refresh_reports_snapshot_status() {
    let app = app().await;
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/refresh")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["count"], 3);
    assert_eq!(body["loading"], false);
}

#[tokio::test]
async fn taxonomy_router_serves_categories_and_sub_categories() {
    let router = handlers::taxonomy_router(CategoryIndex::default());

    let (status, body) = get_json(router.clone(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 7);

    let (status, body) = get_json(router.clone(), "/garagetools/sub-categories").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 6);

    // unknown parent degrades to an empty list, not an error
    let (status, body) = get_json(router.clone(), "/unknown/sub-categories").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 0);

    let (status, _) = get_json(router, "/unknown").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
