//! Server-sent slide changes for the home page carousels.
//!
//! Each connection owns its carousel. Closing the page drops the stream, which
//! drops the carousel and its pending timer with it.

use std::convert::Infallible;

use actix_web::{web, HttpResponse};
use shawarma_site::{carousel::Carousel, showcase::Showcase};

use crate::api::ApiError;

/// The runtime's clock, so a paused tokio clock also governs the carousel.
fn now() -> std::time::Instant {
    tokio::time::Instant::now().into_std()
}

#[derive(serde::Deserialize)]
pub(crate) struct LiveParams {
    #[serde(default)]
    start: usize,
    /// reduced motion: report the current slide once and stop
    #[serde(default)]
    still: bool,
}

#[actix_web::get("/live/showcases/{name}")]
pub(crate) async fn showcase_stream(
    path: web::Path<String>,
    params: web::Query<LiveParams>,
) -> Result<HttpResponse, ApiError> {
    let showcase: Showcase = path.parse()?;
    let mut carousel = showcase.open(params.start, now())?;
    if params.still {
        carousel.pause();
    }
    tracing::debug!(%showcase, start = params.start, still = params.still, "live showcase opened");

    let slides = LiveSlides {
        showcase,
        carousel,
        started: false,
    };
    Ok(HttpResponse::Ok()
        .content_type("text/event-stream")
        .insert_header(("Cache-Control", "no-cache"))
        .streaming(futures::stream::unfold(slides, LiveSlides::next)))
}

fn frame(index: usize) -> web::Bytes {
    web::Bytes::from(format!("event: slide\ndata: {index}\n\n"))
}

struct LiveSlides {
    showcase: Showcase,
    carousel: Carousel,
    started: bool,
}

impl LiveSlides {
    /// The current slide first, then one frame per automatic advance.
    async fn next(mut self) -> Option<(Result<web::Bytes, Infallible>, Self)> {
        if self.started {
            let deadline = self.carousel.deadline()?;
            tokio::time::sleep_until(deadline.into()).await;
            self.carousel.tick(now());
        }
        self.started = true;
        Some((Ok(frame(self.carousel.current())), self))
    }
}

impl Drop for LiveSlides {
    fn drop(&mut self) {
        tracing::debug!(showcase = %self.showcase, at = self.carousel.current(), "live showcase closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test as actix_test, App};

    #[test]
    fn frame_format() {
        assert_eq!(frame(3), "event: slide\ndata: 3\n\n");
    }

    #[actix_web::test]
    async fn still_stream_sends_one_frame() {
        let app = actix_test::init_service(App::new().configure(crate::routes)).await;
        let req = actix_test::TestRequest::get()
            .uri("/live/showcases/photos?start=7&still=true")
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get("content-type").unwrap(),
            "text/event-stream"
        );
        let body = actix_test::read_body(resp).await;
        assert_eq!(body, "event: slide\ndata: 7\n\n");
    }

    #[actix_web::test]
    async fn live_stream_rejects_bad_requests() {
        let app = actix_test::init_service(App::new().configure(crate::routes)).await;

        let req = actix_test::TestRequest::get()
            .uri("/live/showcases/hero?start=9")
            .to_request();
        assert_eq!(
            actix_test::call_service(&app, req).await.status(),
            StatusCode::BAD_REQUEST
        );

        let req = actix_test::TestRequest::get().uri("/live/showcases/menu").to_request();
        assert_eq!(
            actix_test::call_service(&app, req).await.status(),
            StatusCode::NOT_FOUND
        );

        let req = actix_test::TestRequest::get()
            .uri("/live/showcases/hero?start=-1")
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = actix_test::read_body_json(resp).await;
        assert!(body["message"].as_str().unwrap().starts_with("malformed request"));
    }

    #[actix_web::test]
    async fn autoplay_stream_waits_for_the_deadline() {
        tokio::time::pause();
        let start = now();
        let carousel = Showcase::Reviews
            .open(4, start)
            .unwrap();
        let deadline = carousel.deadline().unwrap();
        let slides = LiveSlides {
            showcase: Showcase::Reviews,
            carousel,
            started: false,
        };

        let (first, slides) = slides.next().await.unwrap();
        assert_eq!(first.unwrap(), frame(4));

        let (second, slides) = slides.next().await.unwrap();
        assert_eq!(second.unwrap(), frame(0));
        assert!(now() >= deadline);
        assert!(slides.carousel.deadline().unwrap() > deadline);
    }
}
