use actix_web::{get, web::Data, HttpResponse, Responder};

use crate::api::types::HealthResponse;
use crate::api::AppState;
use crate::config::ScrollMode;
use crate::view::render::{render_document, DocumentOptions};
use crate::view::{run_fetch, OrderListView};

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .insert_header(("Cache-Control", "no-store"))
        .body(body)
}

/// Live page. Rows arrive over `/ws`; the shell is the view right after
/// mount, with the first fetch in flight.
#[get("/")]
pub async fn index(state: Data<AppState>) -> HttpResponse {
    if state.config.scroll_mode == ScrollMode::Single {
        return render_snapshot(&state).await;
    }

    let mut view = OrderListView::new(state.config.page_size, ScrollMode::Infinite);
    view.begin_fetch();

    html(render_document(
        &view,
        DocumentOptions {
            live: true,
            root_margin_px: state.config.root_margin_px,
        },
    ))
}

/// First page only, rendered server side.
#[get("/snapshot")]
pub async fn snapshot(state: Data<AppState>) -> HttpResponse {
    render_snapshot(&state).await
}

async fn render_snapshot(state: &AppState) -> HttpResponse {
    let mut view = OrderListView::new(state.config.page_size, ScrollMode::Single);
    run_fetch(&mut view, state.source.as_ref()).await;

    html(render_document(
        &view,
        DocumentOptions {
            live: false,
            root_margin_px: state.config.root_margin_px,
        },
    ))
}

#[get("/health")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        service: "order-list-view".to_string(),
    })
}
