//! Demo server: renders a page with loadable panels, serves the embedded
//! client assets, and answers their postbacks.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

use lazypanel::{
    CommandBinding, HostConfiguration, HtmlElement, LoadablePanel, Node, RequestContext,
    ValueBinding, add_loadable_panel_configuration, assets, render_to_string,
};

struct OrdersViewModel;

#[derive(Clone)]
struct AppState {
    config: Arc<HostConfiguration>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let mut config = HostConfiguration::new();
    add_loadable_panel_configuration(&mut config);
    let state = AppState {
        config: Arc::new(config),
    };

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let app = Router::new()
        .route("/", get(index))
        .route("/_lzp/postback", post(postback))
        .route("/_lzp/{key}", get(asset))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "lazypanel demo listening");
    axum::serve(listener, app).await.expect("server failed");
}

fn orders_content(_ctx: &mut RequestContext, container: &mut HtmlElement) {
    container.add_text("Orders will appear here.");
}

fn orders_progress(_ctx: &mut RequestContext, container: &mut HtmlElement) {
    let mut spinner = HtmlElement::new("div");
    spinner.set_attribute("class", "spin-spinner");
    container.add_child(Node::Element(spinner));
    container.add_text("Loading orders\u{2026}");
}

fn ticker_content(_ctx: &mut RequestContext, container: &mut HtmlElement) {
    container.add_text("Waiting for the first tick.");
}

async fn index(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    let mut ctx = RequestContext::new();

    let mut orders = LoadablePanel::new(orders_content, CommandBinding::new("orders:load"))
        .with_progress_template(orders_progress)
        .hide_until_loaded(true)
        .with_loading_items(ValueBinding::new("LoadingItems"))
        .with_data_context::<OrdersViewModel>()
        .with_attribute("id", "orders-panel")
        .with_attribute("class", "panel");
    let orders_html =
        render_to_string(&mut orders, &mut ctx).map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let mut ticker = LoadablePanel::new(ticker_content, CommandBinding::new("ticker:load"))
        .with_attribute("id", "ticker-panel")
        .with_attribute("class", "panel");
    let ticker_html =
        render_to_string(&mut ticker, &mut ctx).map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let resource_tags = ctx
        .resource_manager
        .render_tags(&state.config.resources)
        .map_err(|e| {
            tracing::error!(error = %e, "resource resolution failed");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    Ok(Html(format!(
        "<!doctype html>\n<html>\n<head>\n<title>lazypanel demo</title>\n{resource_tags}\
         <style>.panel {{ border: 1px solid #ccc; margin: 1em; padding: 1em; }}</style>\n\
         </head>\n<body>\n<h1>Loadable panels</h1>\n{orders_html}\n{ticker_html}\n\
         <script>lzp.viewModel = {{ LoadingItems: [] }}; lzp.applyBindings(document.body);</script>\n\
         </body>\n</html>\n"
    )))
}

async fn asset(Path(key): Path<String>) -> Response {
    match assets::lookup(&key) {
        Some(asset) => ([(header::CONTENT_TYPE, asset.content_type)], asset.body).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

#[derive(Deserialize)]
struct PostbackRequest {
    command: String,
    #[serde(default)]
    args: Vec<serde_json::Value>,
}

#[derive(Serialize)]
struct PostbackResponse {
    html: String,
}

async fn postback(
    Json(request): Json<PostbackRequest>,
) -> Result<Json<PostbackResponse>, StatusCode> {
    tracing::info!(command = %request.command, args = request.args.len(), "postback");
    match request.command.as_str() {
        "orders:load" => {
            // Simulate slow data so the progress template is visible.
            tokio::time::sleep(Duration::from_millis(600)).await;
            Ok(Json(PostbackResponse {
                html: "<ul><li>Order #1001 - 3 items</li>\
                       <li>Order #1002 - 1 item</li>\
                       <li>Order #1003 - 7 items</li></ul>"
                    .to_owned(),
            }))
        }
        "ticker:load" => {
            let uptime = std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or_default();
            Ok(Json(PostbackResponse {
                html: format!("<p>Server epoch seconds: {uptime}</p>"),
            }))
        }
        _ => Err(StatusCode::NOT_FOUND),
    }
}
