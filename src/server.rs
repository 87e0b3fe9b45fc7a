//! Web server serving the dashboard page.
//!
//! One route, `GET /`, runs the whole pipeline per request. The bank
//! clients live in shared [`AppState`], so their response caches outlive
//! single requests.

use actix_web::http::StatusCode;
use actix_web::{App, HttpResponse, HttpServer, web};
use chrono::Utc;

use crate::api::BankApi;
use crate::client::MonobankClient;
use crate::config::Config;
use crate::dashboard::{Outcome, load_dashboard};
use crate::error::Result;
use crate::render::{HtmlRenderer, Page, Renderer};

/// State shared by every request handler.
#[derive(Debug)]
pub struct AppState<A, R> {
    /// Client of the first tracked account.
    first: A,
    /// Client of the second tracked account.
    second: A,
    /// Page renderer.
    renderer: R,
}

impl<A: BankApi, R: Renderer> AppState<A, R> {
    /// Bundles both bank clients with a renderer.
    #[inline]
    #[must_use]
    pub const fn new(first: A, second: A, renderer: R) -> Self {
        Self {
            first,
            second,
            renderer,
        }
    }
}

/// Registers the dashboard route; expects `web::Data<AppState<A, R>>` to be
/// registered as app data.
#[inline]
pub fn configure<A, R>(cfg: &mut web::ServiceConfig)
where
    A: BankApi + 'static,
    R: Renderer + 'static,
{
    _ = cfg.route("/", web::get().to(index::<A, R>));
}

/// Renders the dashboard, or the matching message page.
#[tracing::instrument(skip_all)]
async fn index<A, R>(state: web::Data<AppState<A, R>>) -> HttpResponse
where
    A: BankApi + 'static,
    R: Renderer + 'static,
{
    let outcome = load_dashboard(&state.first, &state.second, Utc::now()).await;
    let (status, rendered) = match outcome {
        Ok(Outcome::Ready(dashboard)) => (
            StatusCode::OK,
            state.renderer.render(&Page::Dashboard(&dashboard)),
        ),
        Ok(Outcome::WhiteCardNotFound) => (
            StatusCode::OK,
            state.renderer.render(&Page::WhiteCardNotFound),
        ),
        Err(err) => {
            tracing::error!(error = %err, "can't fetch bank history");
            (
                StatusCode::BAD_GATEWAY,
                state.renderer.render(&Page::FetchFailed),
            )
        }
    };

    match rendered {
        Ok(body) => HttpResponse::build(status)
            .content_type(state.renderer.content_type())
            .body(body),
        Err(err) => {
            tracing::error!(error = %err, "failed to render page");
            HttpResponse::InternalServerError()
                .content_type("text/plain; charset=utf-8")
                .body("internal server error")
        }
    }
}

/// Builds the bank clients from `config` and serves the dashboard until
/// the server is stopped.
///
/// # Errors
///
/// Returns an error if a client cannot be built or the address cannot be
/// bound.
#[inline]
pub async fn serve(config: Config) -> Result<()> {
    let (first, second) = config.bank_clients()?;
    let state = web::Data::new(AppState::new(
        first,
        second,
        HtmlRenderer::new(config.money()),
    ));

    tracing::info!(bind = %config.bind, "starting dashboard server");
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::clone(&state))
            .configure(configure::<MonobankClient, HtmlRenderer>)
    })
    .bind(config.bind.as_str())?
    .run()
    .await?;
    tracing::info!("dashboard server stopped");
    Ok(())
}
