mod common;

use common::{orders, ScriptedSource};
use order_list_view::view::run_fetch;
use order_list_view::{FetchOutcome, OrderListView, PageRequest, ScrollMode, StatusLine};

#[tokio::test]
async fn scrolls_through_every_page_then_stops() {
    let source = ScriptedSource::new()
        .with_page(0, orders(0..20), false)
        .with_page(1, orders(20..40), false)
        .with_page(2, Vec::new(), true);
    let mut view = OrderListView::new(20, ScrollMode::Infinite);

    run_fetch(&mut view, &source).await;
    assert_eq!(view.orders().len(), 20);
    assert!(view.has_more());

    assert!(view.on_sentinel(true));
    run_fetch(&mut view, &source).await;
    assert!(view.on_sentinel(true));
    run_fetch(&mut view, &source).await;

    assert!(!view.has_more());
    assert_eq!(view.status(), StatusLine::NoMoreData);
    let ids: Vec<u64> = view.orders().iter().map(|o| o.id).collect();
    assert_eq!(ids, (0..40).collect::<Vec<_>>());

    // further scrolling is inert
    assert!(!view.on_sentinel(true));
    assert_eq!(run_fetch(&mut view, &source).await, None);

    assert_eq!(
        source.calls(),
        vec![PageRequest::new(0, 20), PageRequest::new(1, 20), PageRequest::new(2, 20)]
    );
}

#[tokio::test]
async fn one_sentinel_hit_means_one_fetch() {
    let source = ScriptedSource::new()
        .with_page(0, orders(0..20), false)
        .with_page(1, orders(20..40), false);
    let mut view = OrderListView::new(20, ScrollMode::Infinite);
    run_fetch(&mut view, &source).await;

    assert!(view.on_sentinel(true));
    let request = view.begin_fetch().unwrap();
    assert!(!view.on_sentinel(true), "gate must hold while loading");
    let result = order_list_view::OrderSource::fetch_page(&source, request).await;
    view.complete_fetch(request, result);

    assert_eq!(view.page(), 1);
    assert_eq!(source.calls().len(), 2);
}

#[tokio::test]
async fn failed_page_keeps_rows_and_next_scroll_moves_on() {
    let source = ScriptedSource::new()
        .with_page(0, orders(0..20), false)
        .failing(1);
    let mut view = OrderListView::new(20, ScrollMode::Infinite);
    run_fetch(&mut view, &source).await;

    view.on_sentinel(true);
    let outcome = run_fetch(&mut view, &source).await;

    assert_eq!(outcome, Some(FetchOutcome::Failed { page: 1 }));
    assert_eq!(view.orders().len(), 20);
    assert!(!view.is_loading());
    assert_eq!(view.status(), StatusLine::Idle);

    // page already advanced, so the next hit moves on to page 2
    assert!(view.on_sentinel(true));
    assert_eq!(view.page(), 2);
}

#[tokio::test]
async fn single_mode_fetches_page_zero_once() {
    let source = ScriptedSource::new().with_page(0, orders(0..20), false);
    let mut view = OrderListView::new(20, ScrollMode::Single);

    run_fetch(&mut view, &source).await;
    assert!(!view.on_sentinel(true));
    assert_eq!(view.orders().len(), 20);
    assert_eq!(source.calls(), vec![PageRequest::new(0, 20)]);
}
