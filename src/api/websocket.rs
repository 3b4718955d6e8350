use actix::{Actor, ActorContext, ActorFutureExt, AsyncContext, StreamHandler, WrapFuture};
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use std::sync::Arc;
use std::time::{Duration, Instant};
use uuid::Uuid;

use crate::api::types::{ViewCommand, ViewUpdate};
use crate::api::AppState;
use crate::source::OrderSource;
use crate::view::render::render_rows;
use crate::view::{FetchOutcome, OrderListView};

const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(5);
const CLIENT_TIMEOUT: Duration = Duration::from_secs(10);

/// One browser tab. Owns its own order list; fetches run as futures on the
/// actor context so they are dropped with the session.
pub struct ViewSession {
    id: Uuid,
    hb: Instant,
    view: OrderListView,
    source: Arc<dyn OrderSource>,
}

impl ViewSession {
    pub fn new(view: OrderListView, source: Arc<dyn OrderSource>) -> Self {
        Self {
            id: Uuid::new_v4(),
            hb: Instant::now(),
            view,
            source,
        }
    }

    fn hb(&self, ctx: &mut ws::WebsocketContext<Self>) {
        ctx.run_interval(HEARTBEAT_INTERVAL, |act, ctx| {
            if Instant::now().duration_since(act.hb) > CLIENT_TIMEOUT {
                log::warn!("session {} heartbeat failed, disconnecting", act.id);
                ctx.stop();
                return;
            }

            ctx.ping(b"");
        });
    }

    fn send(&self, ctx: &mut ws::WebsocketContext<Self>, update: &ViewUpdate) {
        match serde_json::to_string(update) {
            Ok(json) => ctx.text(json),
            Err(e) => log::error!("session {} failed to encode update: {}", self.id, e),
        }
    }

    fn send_status(&self, ctx: &mut ws::WebsocketContext<Self>) {
        let update = ViewUpdate::Status {
            text: self.view.status().text().to_string(),
        };
        self.send(ctx, &update);
    }

    /// The fetch effect: runs on mount and after every page advance.
    fn fetch(&mut self, ctx: &mut ws::WebsocketContext<Self>) {
        let Some(request) = self.view.begin_fetch() else {
            return;
        };
        self.send_status(ctx);

        let source = self.source.clone();
        let fut = async move { source.fetch_page(request).await };

        ctx.spawn(fut.into_actor(self).map(move |result, act, ctx| {
            let outcome = act.view.complete_fetch(request, result);
            if let FetchOutcome::Loaded { page, replaced, added } = outcome {
                if replaced || added > 0 {
                    let update = ViewUpdate::Rows {
                        page,
                        replace: replaced,
                        html: render_rows(act.view.latest_rows(outcome)),
                    };
                    act.send(ctx, &update);
                }
            }
            act.send_status(ctx);
        }));
    }

    fn handle_command(&mut self, command: ViewCommand, ctx: &mut ws::WebsocketContext<Self>) {
        match command {
            ViewCommand::SentinelVisible => {
                if self.view.on_sentinel(true) {
                    self.fetch(ctx);
                }
            }
        }
    }
}

impl Actor for ViewSession {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        log::info!("session {} opened", self.id);
        self.hb(ctx);
        self.fetch(ctx);
    }

    fn stopped(&mut self, _: &mut Self::Context) {
        log::info!(
            "session {} closed after {} orders across {} page(s)",
            self.id,
            self.view.orders().len(),
            self.view.page() + 1
        );
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for ViewSession {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Ping(msg)) => {
                self.hb = Instant::now();
                ctx.pong(&msg);
            }
            Ok(ws::Message::Pong(_)) => {
                self.hb = Instant::now();
            }
            Ok(ws::Message::Text(text)) => match ViewCommand::parse(&text) {
                Some(command) => self.handle_command(command, ctx),
                None => log::debug!("session {} unknown command: {}", self.id, text),
            },
            Ok(ws::Message::Binary(_)) => {
                log::debug!("session {} unexpected binary message", self.id);
            }
            Ok(ws::Message::Close(reason)) => {
                ctx.close(reason);
                ctx.stop();
            }
            _ => ctx.stop(),
        }
    }
}

pub async fn ws_index(
    req: HttpRequest,
    stream: web::Payload,
    state: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let view = OrderListView::new(state.config.page_size, state.config.scroll_mode);
    let session = ViewSession::new(view, state.source.clone());
    ws::start(session, &req, stream)
}
