//! HTTP handlers for the catalog API

use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use axum_helpers::{
    errors::responses::{InternalServerErrorResponse, NotFoundResponse},
    AppError,
};
use serde::Serialize;
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

use crate::models::{CategoryFilter, Product};
use crate::query::{SortKey, DEFAULT_FEATURED_LIMIT, DEFAULT_RELATED_LIMIT};
use crate::service::CatalogService;
use crate::source::ProductSource;
use crate::taxonomy::{Category, CategoryIndex, SubCategory};

/// OpenAPI documentation for the products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        products_by_filter,
        featured_products,
        search_products,
        categories_in_use,
        get_product,
        related_products,
        refresh_catalog,
    ),
    components(
        schemas(Product, crate::models::IdRef, CategoryFilter, CatalogResponse, CatalogStatus, CategoryUsage, SortKey),
        responses(NotFoundResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Catalog", description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// OpenAPI documentation for the taxonomy API
#[derive(OpenApi)]
#[openapi(
    paths(list_categories, get_category, list_sub_categories),
    components(
        schemas(Category, SubCategory),
        responses(NotFoundResponse)
    ),
    tags(
        (name = "Taxonomy", description = "Category taxonomy endpoints")
    )
)]
pub struct TaxonomyApiDoc;

/// Create the products router with all HTTP endpoints
///
/// Takes the service behind an `Arc` so the app can keep a handle for
/// its warm-up fetch and readiness probe; the router and those callers
/// then share one snapshot.
pub fn router<S: ProductSource + 'static>(service: Arc<CatalogService<S>>) -> Router {
    let shared_service = service;

    Router::new()
        .route("/", get(list_products))
        .route("/filter", get(products_by_filter))
        .route("/featured", get(featured_products))
        .route("/search", get(search_products))
        .route("/categories-in-use", get(categories_in_use))
        .route("/refresh", post(refresh_catalog))
        .route("/{id}", get(get_product))
        .route("/{id}/related", get(related_products))
        .with_state(shared_service)
}

/// Create the category taxonomy router
pub fn taxonomy_router(index: CategoryIndex) -> Router {
    Router::new()
        .route("/", get(list_categories))
        .route("/{id}", get(get_category))
        .route("/{id}/sub-categories", get(list_sub_categories))
        .with_state(Arc::new(index))
}

/// The catalog snapshot as the frontend consumes it: the product list
/// plus the fetch status passthrough.
#[derive(Debug, Serialize, ToSchema)]
pub struct CatalogResponse {
    pub products: Vec<Product>,
    pub loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Snapshot status without the product payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct CatalogStatus {
    pub count: usize,
    pub loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// List the whole catalog with its fetch status
#[utoipa::path(
    get,
    path = "",
    tag = "Catalog",
    responses(
        (status = 200, description = "Current catalog snapshot", body = CatalogResponse)
    )
)]
async fn list_products<S: ProductSource>(
    State(service): State<Arc<CatalogService<S>>>,
) -> Json<CatalogResponse> {
    let snapshot = service.snapshot().await;
    Json(CatalogResponse {
        products: snapshot.products.as_ref().clone(),
        loading: snapshot.loading,
        error: snapshot.error,
    })
}

/// Filter products by category and optional sub-category
#[utoipa::path(
    get,
    path = "/filter",
    tag = "Catalog",
    params(CategoryFilter),
    responses(
        (status = 200, description = "Products matching the filter", body = Vec<Product>)
    )
)]
async fn products_by_filter<S: ProductSource>(
    State(service): State<Arc<CatalogService<S>>>,
    Query(filter): Query<CategoryFilter>,
) -> Json<Vec<Product>> {
    let products = service.products_by_filter(&filter).await;
    Json(products)
}

/// Featured shelf query parameters
#[derive(Debug, serde::Deserialize, utoipa::IntoParams)]
pub struct FeaturedQuery {
    /// Maximum number of products
    #[serde(default = "default_featured_limit")]
    pub limit: usize,
}

fn default_featured_limit() -> usize {
    DEFAULT_FEATURED_LIMIT
}

/// Featured products: curated entries first, top-rated fallback
#[utoipa::path(
    get,
    path = "/featured",
    tag = "Catalog",
    params(FeaturedQuery),
    responses(
        (status = 200, description = "Featured products", body = Vec<Product>)
    )
)]
async fn featured_products<S: ProductSource>(
    State(service): State<Arc<CatalogService<S>>>,
    Query(query): Query<FeaturedQuery>,
) -> Json<Vec<Product>> {
    let products = service.featured_products(query.limit).await;
    Json(products)
}

/// Search query parameters
#[derive(Debug, serde::Deserialize, utoipa::IntoParams)]
pub struct SearchQuery {
    /// Search term, matched case-insensitively
    pub q: String,
    /// Optional sort key for the result view
    pub sort: Option<SortKey>,
}

/// Search products by name, description, brand, or raw category ids
#[utoipa::path(
    get,
    path = "/search",
    tag = "Catalog",
    params(SearchQuery),
    responses(
        (status = 200, description = "Search results", body = Vec<Product>)
    )
)]
async fn search_products<S: ProductSource>(
    State(service): State<Arc<CatalogService<S>>>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<Product>> {
    let mut products = service.search_products(&query.q).await;
    if let Some(sort) = query.sort {
        let sorted = crate::query::sort_view(products.iter().collect(), sort);
        products = sorted.into_iter().cloned().collect();
    }
    Json(products)
}

/// Category usage across the current snapshot.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryUsage {
    /// Distinct category ids, sorted
    pub categories: Vec<String>,
    /// Distinct sub-category ids, sorted
    pub sub_categories: Vec<String>,
}

/// Distinct category and sub-category ids with products behind them
#[utoipa::path(
    get,
    path = "/categories-in-use",
    tag = "Catalog",
    responses(
        (status = 200, description = "Ids present on the current snapshot", body = CategoryUsage)
    )
)]
async fn categories_in_use<S: ProductSource>(
    State(service): State<Arc<CatalogService<S>>>,
) -> Json<CategoryUsage> {
    let (categories, sub_categories) = service.ids_in_use().await;
    Json(CategoryUsage {
        categories,
        sub_categories,
    })
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Catalog",
    params(
        ("id" = String, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn get_product<S: ProductSource>(
    State(service): State<Arc<CatalogService<S>>>,
    Path(id): Path<String>,
) -> Result<Json<Product>, AppError> {
    service
        .product(&id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Product {} not found", id)))
}

/// Related shelf query parameters
#[derive(Debug, serde::Deserialize, utoipa::IntoParams)]
pub struct RelatedQuery {
    /// Maximum number of products
    #[serde(default = "default_related_limit")]
    pub limit: usize,
}

fn default_related_limit() -> usize {
    DEFAULT_RELATED_LIMIT
}

/// Products related to the given product
#[utoipa::path(
    get,
    path = "/{id}/related",
    tag = "Catalog",
    params(
        ("id" = String, Path, description = "Anchor product id"),
        RelatedQuery
    ),
    responses(
        (status = 200, description = "Related products", body = Vec<Product>)
    )
)]
async fn related_products<S: ProductSource>(
    State(service): State<Arc<CatalogService<S>>>,
    Path(id): Path<String>,
    Query(query): Query<RelatedQuery>,
) -> Json<Vec<Product>> {
    let products = service.related_products(&id, query.limit).await;
    Json(products)
}

/// Refetch the catalog from the product source
#[utoipa::path(
    post,
    path = "/refresh",
    tag = "Catalog",
    responses(
        (status = 200, description = "Snapshot status after the refetch", body = CatalogStatus),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn refresh_catalog<S: ProductSource>(
    State(service): State<Arc<CatalogService<S>>>,
) -> Json<CatalogStatus> {
    service.refresh().await;
    let snapshot = service.snapshot().await;
    Json(CatalogStatus {
        count: snapshot.products.len(),
        loading: snapshot.loading,
        error: snapshot.error,
    })
}

/// List all categories with their sub-categories
#[utoipa::path(
    get,
    path = "",
    tag = "Taxonomy",
    responses(
        (status = 200, description = "The category taxonomy", body = Vec<Category>)
    )
)]
async fn list_categories(State(index): State<Arc<CategoryIndex>>) -> Json<Vec<Category>> {
    Json(index.categories().to_vec())
}

/// Get a category by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Taxonomy",
    params(
        ("id" = String, Path, description = "Category id")
    ),
    responses(
        (status = 200, description = "Category found", body = Category),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn get_category(
    State(index): State<Arc<CategoryIndex>>,
    Path(id): Path<String>,
) -> Result<Json<Category>, AppError> {
    index
        .category_by_id(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))
}

/// List the sub-categories of a category
///
/// Unknown and leaf categories both yield an empty list.
#[utoipa::path(
    get,
    path = "/{id}/sub-categories",
    tag = "Taxonomy",
    params(
        ("id" = String, Path, description = "Parent category id")
    ),
    responses(
        (status = 200, description = "Sub-categories in declared order", body = Vec<SubCategory>)
    )
)]
async fn list_sub_categories(
    State(index): State<Arc<CategoryIndex>>,
    Path(id): Path<String>,
) -> Json<Vec<SubCategory>> {
    Json(index.sub_categories_of(&id).to_vec())
}
