//! Server-rendered pages. Every interactive piece of the site is a link or a
//! GET form, so the pages work without scripts; the only script wires the home
//! page carousels to their live streams.

use std::time::Instant;

use actix_web::{http::header::ContentType, web, HttpRequest, HttpResponse};
use maud::{html, Markup, PreEscaped, DOCTYPE};
use shawarma_site::{
    carousel::Carousel,
    catalog::{self, FOUNDER, GALLERY, LINKS, MENU_ITEMS, OUTLETS, REVIEWS},
    data::{MenuItem, Outlet, Review},
    filter::{self, Diet, MenuQuery},
    reviews,
    showcase::{Showcase, Slide, THUMB_RADIUS},
};

use crate::{api::MenuParams, api::SUGGESTIONS, SiteState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Nav {
    Home,
    Menu,
    Founder,
    None,
}

const NAV_LINKS: [(&str, &str, Nav); 6] = [
    ("Home", "/", Nav::Home),
    ("Menu", "/menu", Nav::Menu),
    ("About", "/#about", Nav::None),
    ("Locations", "/#locations", Nav::None),
    ("Reviews", "/#reviews", Nav::None),
    ("Founder", "/founder", Nav::Founder),
];

fn html_page(status: actix_web::http::StatusCode, page: Markup) -> HttpResponse {
    HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(page.into_string())
}

fn layout(state: &SiteState, title: &str, active: Nav, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " | " (catalog::BRAND) }
                link rel="icon" href=(state.asset("/logo.png"));
            }
            body {
                header.navbar {
                    a.brand href="/" {
                        img src=(state.asset("/logo.png")) alt=(catalog::BRAND);
                        span { (catalog::BRAND) }
                    }
                    nav {
                        @for (label, href, nav) in NAV_LINKS {
                            a.active[nav != Nav::None && nav == active] href=(href) { (label) }
                        }
                    }
                    a.order-now href=(LINKS.swiggy) target="_blank" rel="noopener" { "Order Now" }
                }
                main { (body) }
                (footer(state))
            }
        }
    }
}

fn footer(state: &SiteState) -> Markup {
    html! {
        footer {
            section.footer-brand {
                img src=(state.asset("/logo.png")) alt=(catalog::BRAND);
                p { "Authentic shawarma, rolls and momos across " (catalog::CITY) "." }
                a href=(LINKS.instagram) target="_blank" rel="noopener" { "Instagram" }
            }
            section.footer-outlets {
                h4 { "Our Outlets" }
                ul {
                    @for outlet in &OUTLETS {
                        li {
                            strong { (outlet.short_name()) }
                            " " span { (outlet.short_address()) }
                            " " a href=(outlet.tel_href()) { (outlet.phone) }
                        }
                    }
                }
            }
            section.footer-order {
                h4 { "Order Online" }
                a href=(LINKS.swiggy) target="_blank" rel="noopener" { "Swiggy" }
                a href=(LINKS.zomato) target="_blank" rel="noopener" { "Zomato" }
                a href=(LINKS.whatsapp) target="_blank" rel="noopener" { "WhatsApp" }
                a href=(LINKS.phone) { "Call Us" }
            }
            p.copyright { "© " (catalog::BRAND) ", " (catalog::CITY) }
        }
    }
}

fn stars(rating: u8) -> Markup {
    html! {
        span.stars aria-label=(format!("{rating} out of 5 stars")) {
            @for star in 1..=5u8 {
                @if star <= rating { "★" } @else { "☆" }
            }
        }
    }
}

fn menu_card(state: &SiteState, item: &MenuItem) -> Markup {
    html! {
        article.menu-card {
            img src=(state.asset(item.image)) alt=(item.name) loading="lazy";
            span.diet.veg[item.veg].non-veg[!item.veg]
                title=(if item.veg { "Vegetarian" } else { "Non-vegetarian" }) {}
            @if item.popular {
                span.badge { "Popular" }
            }
            h3 { (item.name) }
            p { (item.description) }
            @if item.is_rated() {
                span.rating { "★ " (format!("{:.1}", item.rating)) }
            }
            div.price {
                strong { "₹" (item.price) }
                @if let (Some(original), Some(saved)) = (item.original_price, item.discount()) {
                    " " s { "₹" (original) }
                    " " span.save { "Save ₹" (saved) }
                }
            }
        }
    }
}

fn review_card(review: &Review) -> Markup {
    html! {
        article.review-card {
            div.avatar { (review.initials()) }
            div {
                strong { (review.author) }
                " " span.when { (review.time_ago) }
            }
            (stars(review.rating))
            p { (review.text) }
            @if let Some(range) = review.price_range {
                span.price-range { (range) " per person" }
            }
        }
    }
}

fn slide_body(state: &SiteState, slide: &Slide) -> Markup {
    match slide {
        Slide::Image { photo } => html! {
            img src=(state.asset(photo.url)) alt=(photo.alt);
        },
        Slide::Dish { item, tag } => html! {
            figure.dish {
                img src=(state.asset(item.image)) alt=(item.name);
                figcaption {
                    span.badge { (tag) }
                    h3 { (item.name) }
                    p { (item.description) }
                    strong { "₹" (item.price) }
                }
            }
        },
        Slide::Review { review } => html! {
            blockquote.featured-review {
                (stars(review.rating))
                p { "\u{201c}" (review.text) "\u{201d}" }
                footer { (review.author) ", " (review.time_ago) }
            }
        },
    }
}

/// A position that does not parse is treated like one out of range: ignored.
fn lenient<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: std::str::FromStr,
{
    let raw: Option<String> = serde::Deserialize::deserialize(de)?;
    Ok(raw.and_then(|raw| raw.trim().parse().ok()))
}

fn flag<'de, D: serde::Deserializer<'de>>(de: D) -> Result<bool, D::Error> {
    Ok(lenient::<D, bool>(de)?.unwrap_or(false))
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
pub(crate) struct HomeParams {
    #[serde(default, deserialize_with = "lenient")]
    hero: Option<usize>,
    #[serde(default, deserialize_with = "lenient")]
    dish: Option<usize>,
    #[serde(default, deserialize_with = "lenient")]
    photo: Option<usize>,
    #[serde(default, deserialize_with = "lenient")]
    review: Option<usize>,
    #[serde(default, deserialize_with = "lenient")]
    outlet: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    shot: Option<usize>,
    reviews: Option<String>,
    #[serde(default, deserialize_with = "flag")]
    still: bool,
}

impl HomeParams {
    fn show_all_reviews(&self) -> bool {
        self.reviews.as_deref() == Some("all")
    }

    /// Link back to the home page with one piece of state changed and the rest kept.
    fn href(&self, anchor: &str, change: impl FnOnce(&mut Self)) -> String {
        let mut next = self.clone();
        change(&mut next);

        let mut pairs = Vec::new();
        for (key, value) in [
            ("hero", next.hero),
            ("dish", next.dish),
            ("photo", next.photo),
            ("review", next.review),
        ] {
            if let Some(value) = value {
                pairs.push(format!("{key}={value}"));
            }
        }
        if let Some(id) = next.outlet {
            pairs.push(format!("outlet={id}"));
        }
        if let Some(shot) = next.shot {
            pairs.push(format!("shot={shot}"));
        }
        if next.show_all_reviews() {
            pairs.push("reviews=all".to_string());
        }
        if next.still {
            pairs.push("still=true".to_string());
        }

        if pairs.is_empty() {
            format!("/#{anchor}")
        } else {
            format!("/?{}#{anchor}", pairs.join("&"))
        }
    }
}

/// One auto-advancing carousel of the home page, positioned from the query.
struct Rotator<'a> {
    showcase: Showcase,
    carousel: Carousel,
    params: &'a HomeParams,
    anchor: &'static str,
    set: fn(&mut HomeParams, usize),
}

impl<'a> Rotator<'a> {
    /// Out-of-range positions fall back to the first slide.
    fn open(
        showcase: Showcase,
        params: &'a HomeParams,
        anchor: &'static str,
        at: Option<usize>,
        set: fn(&mut HomeParams, usize),
        now: Instant,
    ) -> Option<Self> {
        let carousel = match showcase.open(at.unwrap_or(0), now) {
            Ok(carousel) => carousel,
            Err(err) => {
                tracing::debug!(%showcase, %err, "showing the first slide instead");
                showcase.open(0, now).ok()?
            }
        };
        Some(Self {
            showcase,
            carousel,
            params,
            anchor,
            set,
        })
    }

    fn link(&self, index: usize) -> String {
        self.params.href(self.anchor, |params| (self.set)(params, index))
    }

    fn slides(&self, render: impl Fn(&Slide) -> Markup) -> Markup {
        let current = self.carousel.current();
        html! {
            div.slides data-showcase=(self.showcase.name()) data-start=(current) {
                @for (index, slide) in self.showcase.slides().iter().enumerate() {
                    div.slide data-slide=(index) hidden[index != current] { (render(slide)) }
                }
            }
        }
    }

    fn controls(&self) -> Markup {
        let current = self.carousel.current();
        html! {
            nav.carousel-controls {
                a.prev href=(self.link(self.carousel.prev_index())) aria-label="Previous slide" { "‹" }
                @for index in 0..self.carousel.len() {
                    a.dot.active[index == current]
                        href=(self.link(index))
                        aria-label=(format!("Go to slide {}", index + 1)) {}
                }
                a.next href=(self.link(self.carousel.next_index())) aria-label="Next slide" { "›" }
            }
        }
    }
}

const LIVE_SCRIPT: &str = r#"
if (!window.matchMedia('(prefers-reduced-motion: reduce)').matches) {
  document.querySelectorAll('[data-showcase]').forEach(function (el) {
    var url = '/live/showcases/' + el.dataset.showcase + '?start=' + el.dataset.start;
    new EventSource(url).addEventListener('slide', function (e) {
      el.querySelectorAll('[data-slide]').forEach(function (slide) {
        slide.hidden = slide.dataset.slide !== e.data;
      });
    });
  });
}
"#;

#[actix_web::get("/")]
pub(crate) async fn home(
    state: web::Data<SiteState>,
    params: web::Query<HomeParams>,
) -> HttpResponse {
    let now = Instant::now();
    let params = params.into_inner();
    tracing::debug!(?params, "home page");

    let hero = Rotator::open(Showcase::Hero, &params, "home", params.hero, |p, i| p.hero = Some(i), now);
    let dishes = Rotator::open(Showcase::Dishes, &params, "signature", params.dish, |p, i| p.dish = Some(i), now);
    let reviews = Rotator::open(Showcase::Reviews, &params, "reviews", params.review, |p, i| p.review = Some(i), now);
    let photos = Rotator::open(Showcase::Photos, &params, "gallery", params.photo, |p, i| p.photo = Some(i), now);

    let body = html! {
        (hero_section(&state, hero.as_ref()))
        (signature_section(&state, dishes.as_ref()))
        (popular_section(&state))
        (about_section(&state, params.still))
        (locations_section(&state, &params, now))
        (reviews_section(&state, &params, reviews.as_ref()))
        (gallery_section(&state, photos.as_ref()))
        (order_section())
        @if !params.still {
            script { (PreEscaped(LIVE_SCRIPT)) }
        }
    };
    html_page(
        actix_web::http::StatusCode::OK,
        layout(&state, "Authentic Shawarma in Nagpur", Nav::Home, body),
    )
}

fn hero_section(state: &SiteState, hero: Option<&Rotator>) -> Markup {
    html! {
        section #home.hero {
            @if let Some(hero) = hero {
                (hero.slides(|slide| slide_body(state, slide)))
                (hero.controls())
            }
            div.hero-text {
                h1 { (catalog::BRAND) }
                p { "Nagpur's favourite shawarma, rolled fresh at " (OUTLETS.len()) " outlets." }
                a.button href="/menu" { "View Menu" }
                a.button href=(LINKS.swiggy) target="_blank" rel="noopener" { "Order Now" }
            }
        }
    }
}

fn signature_section(state: &SiteState, dishes: Option<&Rotator>) -> Markup {
    html! {
        section #signature.signature {
            h2 { "Our Signature Dishes" }
            @if let Some(dishes) = dishes {
                (dishes.slides(|slide| slide_body(state, slide)))
                (dishes.controls())
            }
        }
    }
}

fn popular_section(state: &SiteState) -> Markup {
    html! {
        section #menu.popular {
            h2 { "Popular Picks" }
            div.menu-grid {
                @for item in filter::popular_preview(&MENU_ITEMS) {
                    (menu_card(state, item))
                }
            }
            a.button href="/menu" { "View Full Menu" }
        }
    }
}

fn about_section(state: &SiteState, still: bool) -> Markup {
    html! {
        section #about.about {
            h2 { "About " (catalog::BRAND) }
            p {
                "Two brothers, one recipe and a lot of garlic sauce. What began as a single counter in "
                (catalog::CITY) " now serves shawarma lovers across the city."
            }
            ul.stats {
                li { strong { (OUTLETS.len()) } " Outlets" }
                li { strong { (format!("{:.1}", catalog::GOOGLE_RATING)) } " Google Rating" }
                li { strong { (MENU_ITEMS.len()) "+" } " Menu Items" }
                li { strong { "₹" (catalog::PRICE_FOR_TWO) } " for two" }
            }
            video src=(state.asset(catalog::VIDEO)) controls muted playsinline autoplay[!still] {}
        }
    }
}

fn locations_section(state: &SiteState, params: &HomeParams, now: Instant) -> Markup {
    let selected = params.outlet.and_then(catalog::outlet).unwrap_or(&OUTLETS[0]);
    html! {
        section #locations.locations {
            h2 { "Find Us" }
            nav.outlet-tabs {
                @for outlet in &OUTLETS {
                    a.active[outlet.id == selected.id]
                        href=(params.href("locations", |p| { p.outlet = Some(outlet.id); p.shot = None; })) {
                        (outlet.short_name())
                    }
                }
            }
            (outlet_detail(state, params, selected, now))
            div.outlet-grid {
                @for outlet in &OUTLETS {
                    article.outlet-card {
                        h4 { (outlet.short_name()) }
                        p { (outlet.short_address()) }
                        a href=(outlet.tel_href()) { (outlet.phone) }
                    }
                }
            }
        }
    }
}

fn outlet_detail(state: &SiteState, params: &HomeParams, outlet: &Outlet, now: Instant) -> Markup {
    let photos = Carousel::new(outlet.photos.len()).map(|mut photos| {
        if let Some(at) = params.shot {
            if let Err(err) = photos.jump(at, now) {
                tracing::debug!(outlet = outlet.id, %err, "showing the first outlet photo instead");
            }
        }
        photos
    });
    let shot_href = |index: usize| params.href("locations", |p| {
        p.outlet = Some(outlet.id);
        p.shot = Some(index);
    });

    html! {
        article.outlet-detail {
            h3 { (outlet.name) }
            span.kind { (outlet.kind) }
            span.rating { "★ " (format!("{:.1}", outlet.rating)) }
            p.address { (outlet.address) }
            p.hours { (outlet.hours) }
            a href=(outlet.tel_href()) { "Call " (outlet.phone) }
            ul.services {
                @for service in outlet.services {
                    li { (service) }
                }
            }
            @match &photos {
                Some(photos) => {
                    div.outlet-photos {
                        @for (index, photo) in outlet.photos.iter().enumerate() {
                            img src=(state.asset(photo.url)) alt=(photo.alt) hidden[index != photos.current()];
                        }
                        @if photos.len() > 1 {
                            a.prev href=(shot_href(photos.prev_index())) aria-label="Previous photo" { "‹" }
                            span { (photos.current() + 1) " / " (photos.len()) }
                            a.next href=(shot_href(photos.next_index())) aria-label="Next photo" { "›" }
                        }
                    }
                }
                None => {
                    p.no-photos { "Photos coming soon." }
                }
            }
            a href=(outlet.photos_url) target="_blank" rel="noopener" { "More photos on Google" }
            iframe src=(outlet.embed_url) title=(outlet.name) loading="lazy" {}
            a.button href=(outlet.map_url) target="_blank" rel="noopener" { "Get Directions" }
        }
    }
}

fn reviews_section(state: &SiteState, params: &HomeParams, featured: Option<&Rotator>) -> Markup {
    let distribution = reviews::distribution(&REVIEWS);
    let show_all = params.show_all_reviews();
    html! {
        section #reviews.reviews {
            h2 { "What Our Customers Say" }
            div.summary {
                strong.score { (format!("{:.1}", catalog::GOOGLE_RATING)) }
                (stars(catalog::GOOGLE_RATING.round() as u8))
                p { "Based on " (distribution.total) " Google reviews" }
                @for row in &distribution.rows {
                    div.bar {
                        span { (row.stars) "★" }
                        span.fill style=(format!("width: {:.0}%", distribution.share(row.count))) {}
                        span { (row.count) }
                    }
                }
            }
            @if let Some(featured) = featured {
                (featured.slides(|slide| slide_body(state, slide)))
                (featured.controls())
            }
            div.review-grid {
                @for review in reviews::grid(&REVIEWS, show_all) {
                    (review_card(review))
                }
            }
            @if show_all {
                a href=(params.href("reviews", |p| p.reviews = None)) { "Show fewer reviews" }
            } @else if REVIEWS.len() > reviews::GRID_PREVIEW {
                a href=(params.href("reviews", |p| p.reviews = Some("all".to_string()))) {
                    "Show all " (REVIEWS.len()) " reviews"
                }
            }
        }
    }
}

fn gallery_section(state: &SiteState, photos: Option<&Rotator>) -> Markup {
    html! {
        section #gallery.gallery {
            h2 { "Gallery" }
            @if let Some(photos) = photos {
                (photos.slides(|slide| slide_body(state, slide)))
                (photos.controls())
                div.thumbnails {
                    @for index in photos.carousel.window(THUMB_RADIUS) {
                        a.active[index == photos.carousel.current()] href=(photos.link(index)) {
                            img src=(state.asset(GALLERY[index].url)) alt=(GALLERY[index].alt) loading="lazy";
                        }
                    }
                }
            }
            div.masonry {
                @for photo in &GALLERY {
                    img src=(state.asset(photo.url)) alt=(photo.alt) loading="lazy";
                }
            }
        }
    }
}

fn order_section() -> Markup {
    html! {
        section #order.order {
            h2 { "Hungry? Order Now" }
            p { "Get your favourite shawarma delivered hot, or call the outlet nearest to you." }
            a.button href=(LINKS.swiggy) target="_blank" rel="noopener" { "Order on Swiggy" }
            a.button href=(LINKS.zomato) target="_blank" rel="noopener" { "Order on Zomato" }
            a.button href=(LINKS.whatsapp) target="_blank" rel="noopener" { "WhatsApp Us" }
            a.button href=(LINKS.phone) { "Call Now" }
        }
    }
}

#[actix_web::get("/menu")]
pub(crate) async fn menu(
    state: web::Data<SiteState>,
    params: web::Query<MenuParams>,
) -> HttpResponse {
    match params.query() {
        Ok(query) => {
            let items = filter::filter(&MENU_ITEMS, &query);
            tracing::debug!(?query, found = items.len(), "menu page");
            html_page(
                actix_web::http::StatusCode::OK,
                layout(&state, "Menu", Nav::Menu, menu_body(&state, &query, &items)),
            )
        }
        Err(err) => {
            tracing::warn!("rejecting menu page: {err}");
            let body = html! {
                section.error-page {
                    h1 { "Bad request" }
                    p { (err) }
                    a.button href="/menu" { "Back to the menu" }
                }
            };
            html_page(
                actix_web::http::StatusCode::BAD_REQUEST,
                layout(&state, "Bad request", Nav::Menu, body),
            )
        }
    }
}

/// Hidden inputs that carry the other two filters through a form submit.
fn keep_filters(query: &MenuQuery, except: &str) -> Markup {
    let category = query.category.map_or("All", |c| c.label());
    html! {
        @if except != "category" {
            input type="hidden" name="category" value=(category);
        }
        @if except != "diet" {
            input type="hidden" name="diet" value=(query.diet.as_str());
        }
        @if except != "q" {
            input type="hidden" name="q" value=(query.search);
        }
    }
}

fn menu_body(state: &SiteState, query: &MenuQuery, items: &[&MenuItem]) -> Markup {
    let active_label = query.category.map_or("All", |c| c.label());
    html! {
        section.menu-banner {
            h1 { "Our Menu" }
            p { "Fresh shawarma, rolls, platters and momos, made to order." }
        }
        form.search action="/menu" method="get" {
            (keep_filters(query, "q"))
            input type="search" name="q" value=(query.search) placeholder="Search dishes...";
            button type="submit" { "Search" }
        }
        form.diet-filter action="/menu" method="get" {
            (keep_filters(query, "diet"))
            @for (diet, label) in [(Diet::All, "All"), (Diet::Veg, "Veg"), (Diet::NonVeg, "Non-Veg")] {
                button.active[query.diet == diet] type="submit" name="diet" value=(diet.as_str()) { (label) }
            }
        }
        form.category-tabs action="/menu" method="get" {
            (keep_filters(query, "category"))
            @for tab in filter::category_counts(&MENU_ITEMS) {
                button.active[tab.label == active_label] type="submit" name="category" value=(tab.label) {
                    (tab.label) " " span.count { "(" (tab.count) ")" }
                }
            }
        }
        p.result-count {
            (items.len()) " item" @if items.len() != 1 { "s" } " found"
            @if let Some(search) = query.search_text() {
                " for \u{201c}" (search) "\u{201d}"
            }
        }
        @if items.is_empty() {
            (empty_menu(query))
        } @else {
            div.menu-grid {
                @for item in items {
                    (menu_card(state, item))
                }
            }
        }
    }
}

fn empty_menu(query: &MenuQuery) -> Markup {
    let suggestions = query
        .search_text()
        .map(|search| filter::suggest(&MENU_ITEMS, search, SUGGESTIONS))
        .unwrap_or_default();
    html! {
        section.empty {
            h2 { "No items found" }
            p { "Try a different search or category." }
            a.button href="/menu" { "Clear Filters" }
            @if !suggestions.is_empty() {
                form.suggestions action="/menu" method="get" {
                    span { "Did you mean: " }
                    @for name in suggestions {
                        button type="submit" name="q" value=(name) { (name) }
                    }
                }
            }
        }
    }
}

#[actix_web::get("/founder")]
pub(crate) async fn founder(state: web::Data<SiteState>) -> HttpResponse {
    let body = html! {
        section.founder-hero {
            img src=(state.asset(FOUNDER.portrait.url)) alt=(FOUNDER.portrait.alt);
            h1 { (FOUNDER.name) }
            p.title { (FOUNDER.title) }
            @for paragraph in FOUNDER.bio {
                p { (paragraph) }
            }
            blockquote { (FOUNDER.quote) }
        }
        section.expertise {
            h2 { "Expertise" }
            @for highlight in FOUNDER.expertise {
                article { h3 { (highlight.title) } p { (highlight.text) } }
            }
        }
        section.journey {
            h2 { "The Journey" }
            ol {
                @for milestone in FOUNDER.journey {
                    li {
                        span.stage { (milestone.stage) }
                        h3 { (milestone.title) }
                        p { (milestone.text) }
                    }
                }
            }
        }
        section.vision {
            h2 { "Mission & Vision" }
            @for highlight in FOUNDER.vision {
                article { h3 { (highlight.title) } p { (highlight.text) } }
            }
        }
        section.contact {
            h2 { "Get in Touch" }
            a href=(format!("tel:{}", FOUNDER.phone.replace(' ', ""))) { (FOUNDER.phone) }
            a href=(format!("mailto:{}", FOUNDER.email)) { (FOUNDER.email) }
        }
    };
    html_page(
        actix_web::http::StatusCode::OK,
        layout(&state, FOUNDER.name, Nav::Founder, body),
    )
}

pub(crate) async fn not_found(state: web::Data<SiteState>, req: HttpRequest) -> HttpResponse {
    tracing::debug!(path = req.path(), "no such page");
    let body = html! {
        section.error-page {
            h1 { "404" }
            p { "Page not found" }
            a.button href="/" { "Back to Home" }
        }
    };
    html_page(
        actix_web::http::StatusCode::NOT_FOUND,
        layout(&state, "Page not found", Nav::None, body),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test as actix_test, App};

    async fn get(uri: &str) -> (StatusCode, String) {
        let app = actix_test::init_service(
            App::new()
                .app_data(crate::test_state())
                .configure(crate::routes),
        )
        .await;
        let resp = actix_test::call_service(&app, actix_test::TestRequest::get().uri(uri).to_request()).await;
        let status = resp.status();
        let body = actix_test::read_body(resp).await;
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[actix_web::test]
    async fn menu_search() {
        let (status, body) = get("/menu?q=cheese").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Double Cheese Chicken"));
        assert!(!body.contains("Maharaja Paneer Shawarma"));
        assert!(body.contains("found for \u{201c}cheese\u{201d}"));
    }

    #[actix_web::test]
    async fn menu_empty_state() {
        let (status, body) = get("/menu?category=Beverages&q=shawarma").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("No items found"));
        assert!(body.contains("Clear Filters"));
        assert!(body.contains("0 items found"));
        assert!(body.contains("Did you mean"));
    }

    #[actix_web::test]
    async fn menu_rejects_unknown_category() {
        let (status, body) = get("/menu?category=Nope").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("Nope"));
    }

    #[actix_web::test]
    async fn unknown_page() {
        let (status, body) = get("/specials").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Page not found"));
    }

    #[actix_web::test]
    async fn home_page() {
        let (status, body) = get("/").await;
        assert_eq!(status, StatusCode::OK);
        for item in filter::popular_preview(&MENU_ITEMS) {
            assert!(body.contains(item.name), "{}", item.name);
        }
        assert!(body.contains("data-showcase=\"hero\""));
        assert!(body.contains("EventSource"));
        assert!(body.contains("Show all 18 reviews"));
    }

    #[actix_web::test]
    async fn home_page_still_has_no_script() {
        let (_, body) = get("/?still=true&reviews=all&hero=99").await;
        assert!(!body.contains("EventSource"));
        assert!(body.contains("Show fewer reviews"));
        assert!(body.contains("data-showcase=\"hero\" data-start=\"0\""));
        assert!(body.contains("Neha Chaudhari"));
    }

    #[actix_web::test]
    async fn outlet_without_photos() {
        let (status, body) = get("/?outlet=4").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Photos coming soon."));
    }

    #[actix_web::test]
    async fn malformed_positions_fall_back_to_first_slide() {
        for uri in ["/?hero=-1", "/?hero=abc&dish=1.5&still=maybe", "/?outlet=x&shot=-3"] {
            let (status, body) = get(uri).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert!(body.contains("data-showcase=\"hero\" data-start=\"0\""), "{uri}");
        }
    }

    #[actix_web::test]
    async fn outlet_photo_navigation() {
        let (_, body) = get("/?outlet=3&shot=2").await;
        assert!(body.contains("3 / 4"));
        assert!(body.contains("alt=\"Platters served at Dharampeth\">"));
        assert!(body.contains("alt=\"Dharampeth outlet at night\" hidden>"));

        // out of range shows the first photo, and the arrows wrap around it
        let (_, body) = get("/?outlet=3&shot=9").await;
        assert!(body.contains("1 / 4"));
        assert!(body.contains("alt=\"Dharampeth outlet at night\">"));
        assert!(body.contains("href=\"/?outlet=3&amp;shot=3#locations\" aria-label=\"Previous photo\""));
        assert!(body.contains("href=\"/?outlet=3&amp;shot=1#locations\" aria-label=\"Next photo\""));
    }

    #[actix_web::test]
    async fn founder_page() {
        let (status, body) = get("/founder").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(FOUNDER.name));
        assert!(body.contains("The Journey"));
    }

    #[test]
    fn home_links_keep_other_state() {
        let params = HomeParams {
            hero: Some(2),
            still: true,
            ..Default::default()
        };
        assert_eq!(
            params.href("gallery", |p| p.photo = Some(5)),
            "/?hero=2&photo=5&still=true#gallery"
        );
        assert_eq!(HomeParams::default().href("home", |_| ()), "/#home");
    }
}
