//! HTML rendering for the order list.
//!
//! Everything here is a pure function of [`OrderListView`], so the same
//! markup is used for the server-rendered snapshot, the initial live page
//! and the row fragments pushed over the websocket.

use crate::config::ScrollMode;
use crate::model::Order;
use crate::view::state::OrderListView;

const COLUMNS: [&str; 7] = ["ID", "Order No", "User", "Product", "Qty", "Total", "Status"];

pub const ROWS_ID: &str = "order-rows";
pub const SENTINEL_ID: &str = "order-sentinel";
pub const STATUS_ID: &str = "order-status";

const LIVE_SCRIPT: &str = r#"<script>
(() => {
  const tbody = document.getElementById("order-rows");
  const statusEl = document.getElementById("order-status");
  const sentinel = document.getElementById("order-sentinel");
  const proto = location.protocol === "https:" ? "wss:" : "ws:";
  const socket = new WebSocket(proto + "//" + location.host + "/ws");
  const observer = new IntersectionObserver((entries) => {
    if (entries[0].isIntersecting && socket.readyState === WebSocket.OPEN) socket.send("sentinel");
  }, { root: null, rootMargin: "__ROOT_MARGIN__px 0px", threshold: 0 });
  socket.onmessage = (event) => {
    const msg = JSON.parse(event.data);
    if (msg.type === "Rows") {
      if (msg.replace) tbody.innerHTML = msg.html;
      else tbody.insertAdjacentHTML("beforeend", msg.html);
    } else if (msg.type === "Status") {
      statusEl.textContent = msg.text;
      // fresh intersection check once the new rows are laid out
      observer.unobserve(sentinel);
      observer.observe(sentinel);
    }
  };
  observer.observe(sentinel);
})();
</script>"#;

#[derive(Debug, Clone, Copy)]
pub struct DocumentOptions {
    /// Attach the websocket/observer script that drives infinite scroll.
    pub live: bool,
    pub root_margin_px: u32,
}

/// Two decimals, dollar prefix. `19.5` becomes `$19.50`; a missing amount
/// leaves just the prefix.
pub fn format_total(amount: Option<f64>) -> String {
    match amount {
        Some(amount) => format!("${:.2}", amount),
        None => "$".to_string(),
    }
}

fn format_quantity(quantity: Option<i64>) -> String {
    quantity.map(|q| q.to_string()).unwrap_or_default()
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render_row(order: &Order) -> String {
    format!(
        "<tr data-id=\"{id}\"><td>{id}</td><td>{no}</td><td>{user}</td><td>{product}</td><td>{qty}</td><td>{total}</td><td>{status}</td></tr>",
        id = order.id,
        no = escape_html(&order.order_no),
        user = escape_html(&order.username),
        product = escape_html(&order.product_name),
        qty = format_quantity(order.quantity),
        total = format_total(order.total_amount),
        status = escape_html(&order.status),
    )
}

pub fn render_rows(orders: &[Order]) -> String {
    let mut html = String::with_capacity(orders.len() * 160);
    for order in orders {
        html.push_str(&render_row(order));
        html.push('\n');
    }
    html
}

pub fn render_table(orders: &[Order]) -> String {
    let header: String = COLUMNS
        .iter()
        .map(|column| format!("<th>{}</th>", column))
        .collect();
    format!(
        "<table border=\"1\" cellpadding=\"6\" style=\"border-collapse: collapse; width: 100%\">\n<thead><tr>{}</tr></thead>\n<tbody id=\"{}\">\n{}</tbody>\n</table>",
        header,
        ROWS_ID,
        render_rows(orders)
    )
}

pub fn render_status(view: &OrderListView) -> String {
    format!(
        "<div id=\"{}\" style=\"padding: 8px; text-align: center; color: #666\">{}</div>",
        STATUS_ID,
        view.status().text()
    )
}

/// The view body: table, sentinel, status line. Single-page mode shows a
/// placeholder until the first response lands.
pub fn render_body(view: &OrderListView) -> String {
    if view.mode() == ScrollMode::Single && !view.has_received_first() {
        return "<p>Loading...</p>".to_string();
    }
    format!(
        "{}\n<div id=\"{}\" style=\"height: 1px\"></div>\n{}",
        render_table(view.orders()),
        SENTINEL_ID,
        render_status(view)
    )
}

pub fn render_document(view: &OrderListView, options: DocumentOptions) -> String {
    let script = if options.live {
        LIVE_SCRIPT.replace("__ROOT_MARGIN__", &options.root_margin_px.to_string())
    } else {
        String::new()
    };
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>Order List</title></head>\n<body>\n<div style=\"padding: 20px; font-family: Arial\">\n<h2>Order List</h2>\n{}\n</div>\n{}\n</body>\n</html>\n",
        render_body(view),
        script
    )
}
