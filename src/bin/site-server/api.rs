use actix_web::{
    error::{PathError, QueryPayloadError},
    http::StatusCode,
    web, HttpRequest, HttpResponse, ResponseError,
};
use shawarma_site::{
    catalog::{self, MENU_ITEMS, OUTLETS, REVIEWS},
    data::{MenuItem, Review},
    filter::{self, MenuQuery},
    reviews::{self, Distribution},
    showcase::{Showcase, Slide},
    SiteError,
};

/// How many fuzzy suggestions accompany an empty search.
pub(crate) const SUGGESTIONS: usize = 3;

#[derive(serde::Serialize)]
struct ErrJsonResp {
    message: String,
}

#[derive(Debug)]
pub(crate) struct ApiError(pub(crate) SiteError);

impl From<SiteError> for ApiError {
    fn from(err: SiteError) -> Self {
        Self(err)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        if self.0.is_not_found() {
            StatusCode::NOT_FOUND
        } else {
            StatusCode::BAD_REQUEST
        }
    }

    fn error_response(&self) -> HttpResponse {
        tracing::warn!("rejecting request: {}", self.0);
        HttpResponse::build(self.status_code()).json(ErrJsonResp {
            message: self.0.to_string(),
        })
    }
}

/// Undecodable query strings get the JSON error body instead of actix's plain text.
pub(crate) fn query_error(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError(SiteError::MalformedRequest(err.to_string())).into()
}

pub(crate) fn path_error(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    ApiError(SiteError::MalformedRequest(err.to_string())).into()
}

/// Raw query of the menu page and the menu API.
#[derive(Debug, Default, serde::Deserialize)]
pub(crate) struct MenuParams {
    pub(crate) category: Option<String>,
    pub(crate) diet: Option<String>,
    pub(crate) q: Option<String>,
}

impl MenuParams {
    pub(crate) fn query(&self) -> Result<MenuQuery, SiteError> {
        MenuQuery::parse(
            self.category.as_deref(),
            self.diet.as_deref(),
            self.q.as_deref(),
        )
    }
}

#[derive(serde::Serialize)]
struct MenuResp<'a> {
    total: usize,
    items: Vec<&'a MenuItem>,
    suggestions: Vec<&'a str>,
}

#[actix_web::get("/api/v1/menu")]
pub(crate) async fn menu(params: web::Query<MenuParams>) -> Result<HttpResponse, ApiError> {
    let query = params.query()?;
    let items = filter::filter(&MENU_ITEMS, &query);
    tracing::debug!(?query, found = items.len(), "menu api");

    let suggestions = match (items.is_empty(), query.search_text()) {
        (true, Some(search)) => filter::suggest(&MENU_ITEMS, search, SUGGESTIONS),
        _ => Vec::new(),
    };
    Ok(HttpResponse::Ok().json(MenuResp {
        total: items.len(),
        items,
        suggestions,
    }))
}

#[actix_web::get("/api/v1/menu/popular")]
pub(crate) async fn popular() -> HttpResponse {
    HttpResponse::Ok().json(filter::popular_preview(&MENU_ITEMS))
}

#[actix_web::get("/api/v1/categories")]
pub(crate) async fn categories() -> HttpResponse {
    HttpResponse::Ok().json(filter::category_counts(&MENU_ITEMS))
}

#[actix_web::get("/api/v1/outlets")]
pub(crate) async fn outlets() -> HttpResponse {
    HttpResponse::Ok().json(&OUTLETS)
}

#[derive(serde::Deserialize)]
pub(crate) struct OutletPath {
    id: u32,
}

#[actix_web::get("/api/v1/outlets/{id}")]
pub(crate) async fn outlet(path: web::Path<OutletPath>) -> Result<HttpResponse, ApiError> {
    let outlet = catalog::outlet(path.id).ok_or(SiteError::UnknownOutlet(path.id))?;
    Ok(HttpResponse::Ok().json(outlet))
}

#[derive(serde::Serialize)]
struct ReviewsResp {
    rating: f32,
    total: usize,
    distribution: Distribution,
    featured: Vec<&'static Review>,
    reviews: &'static [Review],
}

#[actix_web::get("/api/v1/reviews")]
pub(crate) async fn all_reviews() -> HttpResponse {
    HttpResponse::Ok().json(ReviewsResp {
        rating: catalog::GOOGLE_RATING,
        total: REVIEWS.len(),
        distribution: reviews::distribution(&REVIEWS),
        featured: reviews::featured(&REVIEWS),
        reviews: &REVIEWS,
    })
}

#[derive(serde::Deserialize)]
pub(crate) struct ShowcaseParams {
    #[serde(default)]
    at: usize,
}

#[derive(serde::Serialize)]
struct ShowcaseResp {
    name: &'static str,
    len: usize,
    index: usize,
    prev: usize,
    next: usize,
    period_ms: u64,
    slide: Slide,
}

#[actix_web::get("/api/v1/showcases/{name}")]
pub(crate) async fn showcase(
    path: web::Path<String>,
    params: web::Query<ShowcaseParams>,
) -> Result<HttpResponse, ApiError> {
    let showcase: Showcase = path.parse()?;
    let carousel = showcase.open(params.at, std::time::Instant::now())?;
    let slide = showcase
        .slide(carousel.current())
        .ok_or(SiteError::SlideOutOfRange {
            index: params.at,
            len: carousel.len(),
        })?;

    Ok(HttpResponse::Ok().json(ShowcaseResp {
        name: showcase.name(),
        len: carousel.len(),
        index: carousel.current(),
        prev: carousel.prev_index(),
        next: carousel.next_index(),
        period_ms: showcase.period().as_millis() as u64,
        slide,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use serde_json::Value;

    async fn get(uri: &str) -> (StatusCode, Value) {
        let app = test::init_service(
            App::new()
                .app_data(crate::test_state())
                .configure(crate::routes),
        )
        .await;
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        let status = resp.status();
        let body = test::read_body(resp).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[actix_web::test]
    async fn full_menu() {
        let (status, body) = get("/api/v1/menu").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 54);
        assert_eq!(body["items"].as_array().unwrap().len(), 54);
        assert_eq!(body["items"][0]["category"], "Shawarma");
    }

    #[actix_web::test]
    async fn filtered_menu() {
        let (_, body) = get("/api/v1/menu?category=Momos&diet=veg&q=CHEESE").await;
        assert_eq!(body["total"], 1);
        assert_eq!(body["items"][0]["name"], "Cheese Corn Momos");
        assert_eq!(body["items"][0]["veg"], true);
    }

    #[actix_web::test]
    async fn empty_search_comes_with_suggestions() {
        let (status, body) = get("/api/v1/menu?q=shwrma").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 0);
        assert_eq!(body["suggestions"].as_array().unwrap().len(), SUGGESTIONS);
    }

    #[actix_web::test]
    async fn unknown_category_is_bad_request() {
        let (status, body) = get("/api/v1/menu?category=Desserts").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].as_str().unwrap().contains("Desserts"));
    }

    #[actix_web::test]
    async fn popular_preview() {
        let (_, body) = get("/api/v1/menu/popular").await;
        let items = body.as_array().unwrap();
        assert_eq!(items.len(), 6);
        assert!(items.iter().all(|item| item["popular"] == true));
    }

    #[actix_web::test]
    async fn category_tabs() {
        let (_, body) = get("/api/v1/categories").await;
        assert_eq!(body[0]["label"], "All");
        assert_eq!(body[0]["count"], 54);
        assert_eq!(body[6]["label"], "Fries & Sides");
    }

    #[actix_web::test]
    async fn outlets_by_id() {
        let (_, body) = get("/api/v1/outlets").await;
        assert_eq!(body.as_array().unwrap().len(), OUTLETS.len());

        let (status, body) = get("/api/v1/outlets/3").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Two Brothers Shawarma – Dharampeth");

        let (status, _) = get("/api/v1/outlets/99").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn review_digest() {
        let (_, body) = get("/api/v1/reviews").await;
        assert_eq!(body["total"], 18);
        assert_eq!(body["featured"].as_array().unwrap().len(), 5);
        assert_eq!(body["distribution"]["rows"][0]["count"], 16);
        assert_eq!(body["reviews"][1]["price_range"], Value::Null);
    }

    #[actix_web::test]
    async fn showcase_slides() {
        let (status, body) = get("/api/v1/showcases/hero?at=4").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["index"], 4);
        assert_eq!(body["next"], 0);
        assert_eq!(body["prev"], 3);
        assert_eq!(body["period_ms"], 6000);
        assert_eq!(body["slide"]["kind"], "image");

        let (_, body) = get("/api/v1/showcases/dishes?at=2").await;
        assert_eq!(body["slide"]["kind"], "dish");
        assert_eq!(body["slide"]["item"]["name"], "Double Cheese Chicken");
    }

    #[actix_web::test]
    async fn showcase_errors() {
        let (status, body) = get("/api/v1/showcases/hero?at=5").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].as_str().unwrap().contains("out of range"));

        let (status, _) = get("/api/v1/showcases/footer").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn malformed_numbers_are_json_errors() {
        for uri in [
            "/api/v1/showcases/hero?at=x",
            "/api/v1/showcases/hero?at=-1",
            "/api/v1/outlets/dharampeth",
        ] {
            let (status, body) = get(uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            assert!(
                body["message"].as_str().unwrap().starts_with("malformed request"),
                "{uri}"
            );
        }
    }
}
