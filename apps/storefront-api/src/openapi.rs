//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the Storefront API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Storefront API",
        version = "0.1.0",
        description = "Automotive-equipment storefront: catalog, contacts, and checkout handoff",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/products", api = domain_catalog::ApiDoc),
        (path = "/api/categories", api = domain_catalog::handlers::TaxonomyApiDoc),
        (path = "/api/contacts", api = domain_contacts::ApiDoc),
        (path = "/api/checkout", api = domain_orders::ApiDoc)
    ),
    tags(
        (name = "Catalog", description = "Product catalog endpoints"),
        (name = "Taxonomy", description = "Category taxonomy endpoints"),
        (name = "Contacts", description = "Contact message endpoints"),
        (name = "Checkout", description = "Checkout handoff endpoints")
    )
)]
pub struct ApiDoc;
