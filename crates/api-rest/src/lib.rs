//! # API REST
//!
//! REST API implementation for Shelf.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (query parsing, redirects, static assets, CORS)
//!
//! Uses `api-shared` for response types and `shelf-core` for the catalogue queries.

#![warn(rust_2018_idioms)]

use axum::{
    extract::{Path, Query, State},
    response::{Json, Redirect},
    routing::get,
    Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use utoipa::{IntoParams, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use api_shared::{
    selected_category_label, Book, BookDetailRes, HealthRes, HealthService, ListBooksRes,
};
use shelf_core::{
    category_filter_from_param, CatalogQuery, CoreConfig, BOOK_DETAILS_PANEL, BOOK_TITLES_PANEL,
};

/// Listing route; the home page and lookup misses redirect here.
pub const BOOK_TITLES_ROUTE: &str = "/booktitles";

/// Application state shared across REST API handlers
///
/// Holds the catalogue query service and the startup configuration. Both are immutable after
/// startup; `CatalogQuery` already shares its catalogue through an `Arc`.
#[derive(Clone)]
pub struct AppState {
    query: CatalogQuery,
    cfg: Arc<CoreConfig>,
}

impl AppState {
    pub fn new(query: CatalogQuery, cfg: Arc<CoreConfig>) -> Self {
        Self { query, cfg }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(health, book_titles, view_book_detail),
    components(schemas(HealthRes, Book, ListBooksRes, BookDetailRes))
)]
pub struct ApiDoc;

/// Query string accepted by the listing route.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListBooksParams {
    /// Category to filter by; omit or pass `All` for every book.
    pub category: Option<String>,
}

/// Build the REST router for the given state.
///
/// Routes:
/// - `GET /` redirects to the listing
/// - `GET /booktitles?category=<c>` lists books
/// - `GET /viewBookDetail/:title` shows one book, redirecting to the listing if it is unknown
/// - `GET /health`
/// - `GET /assets/*` serves files from the configured assets directory
pub fn router(state: AppState) -> Router {
    let assets = ServeDir::new(state.cfg.assets_dir());

    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .route(BOOK_TITLES_ROUTE, get(book_titles))
        .route("/viewBookDetail/:title", get(view_book_detail))
        .nest_service("/assets", assets)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Home page: send the browser to the book listing.
async fn home() -> Redirect {
    Redirect::to(BOOK_TITLES_ROUTE)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Returns the current health status of the Shelf service.
/// This endpoint is used for monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/booktitles",
    params(ListBooksParams),
    responses(
        (status = 200, description = "Books in the selected category", body = ListBooksRes)
    )
)]
/// List books, optionally filtered by category
///
/// A missing `category` parameter or `All` lists the whole catalogue. Any other value, blank
/// included, filters by exact match; a category no book has produces an empty `books` list.
///
/// # Returns
/// * `Json<ListBooksRes>` - The listing, the effective filter and every known category
#[axum::debug_handler]
async fn book_titles(
    State(state): State<AppState>,
    Query(params): Query<ListBooksParams>,
) -> Json<ListBooksRes> {
    let filter = category_filter_from_param(params.category.as_deref());
    let books = state
        .query
        .get_all_books(filter.as_ref())
        .into_iter()
        .map(Book::from)
        .collect();

    Json(ListBooksRes {
        panel: BOOK_TITLES_PANEL.to_string(),
        selected_category: selected_category_label(filter.as_ref()),
        categories: state
            .query
            .categories()
            .into_iter()
            .map(ToString::to_string)
            .collect(),
        books,
    })
}

#[utoipa::path(
    get,
    path = "/viewBookDetail/{title}",
    params(
        ("title" = String, Path, description = "Exact title of the book")
    ),
    responses(
        (status = 200, description = "Book details", body = BookDetailRes),
        (status = 303, description = "No book has this title; redirect to the listing")
    )
)]
/// Show a single book
///
/// # Returns
/// * `Ok(Json<BookDetailRes>)` - The book with exactly this title
/// * `Err(Redirect)` - `303 See Other` to `/booktitles` when no book has this title
#[axum::debug_handler]
async fn view_book_detail(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<Json<BookDetailRes>, Redirect> {
    match state.query.get_book_by_title(&title) {
        Ok(record) => Ok(Json(BookDetailRes {
            panel: BOOK_DETAILS_PANEL.to_string(),
            book: Book::from(record),
        })),
        Err(e) => {
            tracing::info!("Book detail lookup failed: {}", e);
            Err(Redirect::to(BOOK_TITLES_ROUTE))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use shelf_core::Catalog;
    use std::fs;
    use tempfile::TempDir;
    use tower::ServiceExt;

    const SAMPLE: &str = r#"books:
  - title: Dune
    category: SciFi
    author: Frank Herbert
  - title: Emma
    category: Classic
  - title: Pride and Prejudice
    category: Classic
"#;

    fn test_app(temp_dir: &TempDir) -> Router {
        let catalog_path = temp_dir.path().join("books.yaml");
        fs::write(&catalog_path, SAMPLE).expect("write catalogue");
        let assets_dir = temp_dir.path().join("assets");
        fs::create_dir_all(&assets_dir).expect("create assets dir");
        fs::write(assets_dir.join("custom.css"), "body { margin: 0; }").expect("write css");

        let cfg = Arc::new(
            CoreConfig::new(catalog_path, assets_dir).expect("CoreConfig::new should succeed"),
        );
        let catalog = Catalog::load(cfg.catalog_path()).expect("load catalogue");
        router(AppState::new(CatalogQuery::new(Arc::new(catalog)), cfg))
    }

    async fn fetch(app: Router, uri: &str) -> axum::response::Response {
        app.oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("build request"),
        )
        .await
        .expect("router is infallible")
    }

    async fn json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("read body")
            .to_bytes();
        serde_json::from_slice(&bytes).expect("valid JSON body")
    }

    fn location(response: &axum::response::Response) -> &str {
        response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    }

    #[tokio::test]
    async fn home_redirects_to_listing() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let response = fetch(test_app(&temp_dir), "/").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/booktitles");
    }

    #[tokio::test]
    async fn listing_defaults_to_all_books() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let response = fetch(test_app(&temp_dir), "/booktitles").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: ListBooksRes = json(response).await;
        assert_eq!(body.panel, "BOOK TITLES");
        assert_eq!(body.selected_category, "All");
        assert_eq!(body.categories, vec!["SciFi", "Classic"]);
        let titles: Vec<&str> = body.books.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["Dune", "Emma", "Pride and Prejudice"]);
    }

    #[tokio::test]
    async fn explicit_all_lists_everything() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let body: ListBooksRes =
            json(fetch(test_app(&temp_dir), "/booktitles?category=All").await).await;
        assert_eq!(body.books.len(), 3);
    }

    #[tokio::test]
    async fn listing_filters_by_category() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let body: ListBooksRes =
            json(fetch(test_app(&temp_dir), "/booktitles?category=Classic").await).await;
        assert_eq!(body.selected_category, "Classic");
        assert!(body.books.iter().all(|b| b.category == "Classic"));
        assert_eq!(body.books.len(), 2);
    }

    #[tokio::test]
    async fn unknown_category_is_an_empty_listing() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let response = fetch(test_app(&temp_dir), "/booktitles?category=Poetry").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: ListBooksRes = json(response).await;
        assert_eq!(body.selected_category, "Poetry");
        assert!(body.books.is_empty());
        assert_eq!(body.categories.len(), 2);
    }

    #[tokio::test]
    async fn blank_category_is_an_empty_listing() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let response = fetch(test_app(&temp_dir), "/booktitles?category=").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: ListBooksRes = json(response).await;
        assert_eq!(body.selected_category, "");
        assert!(body.books.is_empty());
    }

    #[tokio::test]
    async fn detail_returns_the_book() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let response = fetch(test_app(&temp_dir), "/viewBookDetail/Dune").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: BookDetailRes = json(response).await;
        assert_eq!(body.panel, "BOOK DETAILS");
        assert_eq!(body.book.title, "Dune");
        assert_eq!(body.book.author.as_deref(), Some("Frank Herbert"));
    }

    #[tokio::test]
    async fn detail_decodes_percent_encoded_titles() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let response = fetch(
            test_app(&temp_dir),
            "/viewBookDetail/Pride%20and%20Prejudice",
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: BookDetailRes = json(response).await;
        assert_eq!(body.book.title, "Pride and Prejudice");
    }

    #[tokio::test]
    async fn unknown_title_redirects_to_listing() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let response = fetch(test_app(&temp_dir), "/viewBookDetail/Nope").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/booktitles");
    }

    #[tokio::test]
    async fn health_reports_alive() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let body: HealthRes = json(fetch(test_app(&temp_dir), "/health").await).await;
        assert!(body.ok);
    }

    #[tokio::test]
    async fn serves_static_assets() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let response = fetch(test_app(&temp_dir), "/assets/custom.css").await;
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("read body")
            .to_bytes();
        assert_eq!(&bytes[..], b"body { margin: 0; }");
    }

    #[test]
    fn openapi_lists_catalogue_routes() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/booktitles"));
        assert!(doc.paths.paths.contains_key("/viewBookDetail/{title}"));
        assert!(doc.paths.paths.contains_key("/health"));
    }
}
