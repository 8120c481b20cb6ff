mod common;

use std::sync::Arc;

use common::{StubSource, daily_bars, date};
use kline_chart::{
    ChartSession, FetchFailure,
    indicators::Indicator,
    render::ChartTheme,
    session::{
        ChartSlot, Dispatched, FetchOrchestrator, FetchOutcome, FetchState, Handled, InputField,
        PendingFetch, RecordingSurface, Region, UiEvent,
    },
};
use market_data_client::{BarSeries, Period};

fn session_with(source: Arc<StubSource>) -> ChartSession<RecordingSurface> {
    let mut session = ChartSession::new(source, ChartTheme::default(), RecordingSurface::new());
    session.init(date(2025, 6, 30));
    session
}

async fn type_code(session: &mut ChartSession<RecordingSurface>, code: &str) {
    session
        .handle(UiEvent::Edit {
            field: InputField::StockCode,
            value: code.into(),
        })
        .await;
}

fn series(bars: usize) -> BarSeries {
    BarSeries {
        symbol: "600519".into(),
        stock_name: "贵州茅台".into(),
        period: Period::Day,
        bars: daily_bars(bars),
    }
}

#[tokio::test]
async fn test_domain_error_is_shown_verbatim() {
    let source = Arc::new(StubSource::failing("未找到股票代码 999999"));
    let mut session = session_with(source.clone());
    type_code(&mut session, "999999").await;

    let handled = session.handle(UiEvent::Submit).await;

    assert_eq!(
        handled,
        Handled::Fetched(FetchOutcome::Error {
            message: "未找到股票代码 999999".into()
        })
    );
    let surface = session.surface();
    assert!(surface.is_visible(Region::ErrorMessage));
    assert_eq!(surface.text(Region::ErrorMessage), "未找到股票代码 999999");
    assert!(!surface.is_visible(Region::Results));
    assert!(!surface.is_visible(Region::Loading));
    assert!(matches!(session.fetch_state(), FetchState::Error(_)));
}

#[tokio::test]
async fn test_blank_code_never_reaches_the_source() {
    let source = Arc::new(StubSource::with_bars("x", daily_bars(10)));
    let mut session = session_with(source.clone());
    type_code(&mut session, "   ").await;

    let handled = session.handle(UiEvent::Submit).await;

    assert!(matches!(handled, Handled::Fetched(FetchOutcome::Error { .. })));
    assert_eq!(source.calls(), 0);
    assert!(session.surface().is_visible(Region::ErrorMessage));
}

#[tokio::test]
async fn test_inverted_range_never_reaches_the_source() {
    let source = Arc::new(StubSource::with_bars("x", daily_bars(10)));
    let mut session = session_with(source.clone());
    type_code(&mut session, "600519").await;
    session
        .handle(UiEvent::Edit {
            field: InputField::StartDate,
            value: "2025-07-01".into(),
        })
        .await;

    let handled = session.handle(UiEvent::Submit).await;

    let Handled::Fetched(FetchOutcome::Error { message }) = handled else {
        panic!("expected an error outcome");
    };
    assert!(message.contains("2025-07-01"));
    assert_eq!(source.calls(), 0);
}

#[tokio::test]
async fn test_period_switch_refetches_with_new_period() {
    let source = Arc::new(StubSource::with_bars("x", daily_bars(40)));
    let mut session = session_with(source.clone());
    type_code(&mut session, "600519").await;

    session.handle(UiEvent::Submit).await;
    let handled = session.handle(UiEvent::SelectPeriod(Period::Month)).await;

    assert!(matches!(handled, Handled::Fetched(FetchOutcome::Success { .. })));
    let periods: Vec<Period> = source.requests().iter().map(|r| r.period).collect();
    assert_eq!(periods, vec![Period::Day, Period::Month]);
    assert_eq!(session.state().period(), Period::Month);
}

#[tokio::test]
async fn test_period_switch_with_empty_dates_does_not_fetch() {
    let source = Arc::new(StubSource::with_bars("x", daily_bars(40)));
    let mut session = ChartSession::new(
        source.clone(),
        ChartTheme::default(),
        RecordingSurface::new(),
    );
    type_code(&mut session, "600519").await;

    let handled = session.handle(UiEvent::SelectPeriod(Period::Week)).await;

    assert_eq!(handled, Handled::StateOnly);
    assert_eq!(source.calls(), 0);
    assert_eq!(session.state().period(), Period::Week);
    assert!(session.surface().events().is_empty());
}

#[tokio::test]
async fn test_indicator_switch_leaves_charts_alone() {
    let source = Arc::new(StubSource::with_bars("x", daily_bars(40)));
    let mut session = session_with(source.clone());
    let before = session.surface().events().len();

    let handled = session.handle(UiEvent::SelectIndicator(Indicator::Rsi)).await;

    assert_eq!(handled, Handled::IndicatorPending(Indicator::Rsi));
    assert_eq!(session.state().indicator(), Indicator::Rsi);
    assert_eq!(session.surface().events().len(), before);
    assert_eq!(source.calls(), 0);
}

#[tokio::test]
async fn test_single_bar_degrades_summary() {
    let source = Arc::new(StubSource::with_bars("新股", daily_bars(1)));
    let mut session = session_with(source);
    type_code(&mut session, "301999").await;

    let handled = session.handle(UiEvent::Submit).await;

    assert_eq!(
        handled,
        Handled::Fetched(FetchOutcome::Success {
            bars: 1,
            degraded: true
        })
    );
    let surface = session.surface();
    assert!(surface.chart(ChartSlot::Price).is_some());
    assert!(surface.chart(ChartSlot::Volume).is_some());
    for region in [
        Region::CurrentPrice,
        Region::PriceChange,
        Region::Volume,
        Region::Turnover,
    ] {
        assert_eq!(surface.text(region), "--");
    }
    assert_eq!(surface.trend(), None);
    assert!(surface.is_visible(Region::Results));
}

#[tokio::test]
async fn test_empty_series_degrades_summary() {
    let source = Arc::new(StubSource::with_bars("空", Vec::new()));
    let mut session = session_with(source);
    type_code(&mut session, "000000").await;

    let handled = session.handle(UiEvent::Submit).await;

    assert_eq!(
        handled,
        Handled::Fetched(FetchOutcome::Success {
            bars: 0,
            degraded: true
        })
    );
    let price = session.surface().chart(ChartSlot::Price).unwrap();
    assert!(price.x_axis.data.is_empty());
}

#[tokio::test]
async fn test_unordered_series_is_rejected_before_rendering() {
    let mut bars = daily_bars(10);
    bars.swap(3, 4);
    let source = Arc::new(StubSource::with_bars("x", bars));
    let mut session = session_with(source);
    type_code(&mut session, "600519").await;

    let handled = session.handle(UiEvent::Submit).await;

    let Handled::Fetched(FetchOutcome::Error { message }) = handled else {
        panic!("expected an error outcome");
    };
    assert!(message.contains("bar 4"), "{message}");
    assert!(session.surface().chart(ChartSlot::Price).is_none());
    assert!(!session.surface().is_visible(Region::Results));
}

#[test]
fn test_stale_completion_changes_nothing() {
    let source = Arc::new(StubSource::with_bars("x", Vec::new()));
    let mut orchestrator = FetchOrchestrator::new(source, ChartTheme::default());
    let mut surface = RecordingSurface::new();

    let first = orchestrator.begin(&mut surface);
    let second = orchestrator.begin(&mut surface);
    let events_before = surface.events().len();

    let stale = orchestrator.complete(first, Ok(series(30)), &mut surface);
    assert_eq!(stale, FetchOutcome::Stale);
    assert_eq!(surface.events().len(), events_before);
    assert!(surface.is_visible(Region::Loading));
    assert_eq!(orchestrator.state(), &FetchState::Loading);

    let fresh = orchestrator.complete(second, Ok(series(30)), &mut surface);
    assert_eq!(
        fresh,
        FetchOutcome::Success {
            bars: 30,
            degraded: false
        }
    );
    assert!(!surface.is_visible(Region::Loading));
    assert_eq!(surface.visibility_changes(Region::Loading, false), 1);
    assert_eq!(surface.text(Region::StockName), "贵州茅台");
}

#[test]
fn test_stale_error_does_not_mask_newer_success() {
    let source = Arc::new(StubSource::with_bars("x", Vec::new()));
    let mut orchestrator = FetchOrchestrator::new(source, ChartTheme::default());
    let mut surface = RecordingSurface::new();

    let first = orchestrator.begin(&mut surface);
    let second = orchestrator.begin(&mut surface);
    orchestrator.complete(second, Ok(series(5)), &mut surface);
    let late = orchestrator.complete(
        first,
        Err(FetchFailure::InvalidRequest("late".into())),
        &mut surface,
    );

    assert_eq!(late, FetchOutcome::Stale);
    assert!(!surface.is_visible(Region::ErrorMessage));
    assert!(surface.is_visible(Region::Results));
    assert_eq!(orchestrator.state(), &FetchState::Success);
}

#[tokio::test]
async fn test_resize_and_teardown() {
    let source = Arc::new(StubSource::with_bars("x", daily_bars(10)));
    let mut session = session_with(source);
    type_code(&mut session, "600519").await;
    session.handle(UiEvent::Submit).await;

    assert_eq!(session.handle(UiEvent::Resize).await, Handled::Resized);
    session.handle(UiEvent::Resize).await;
    for slot in ChartSlot::ALL {
        assert_eq!(session.surface().resize_count(slot), 2);
    }

    session.teardown();
    assert_eq!(session.fetch_state(), &FetchState::Idle);
    let surface = session.into_surface();
    for slot in ChartSlot::ALL {
        assert!(surface.is_disposed(slot));
        assert!(surface.chart(slot).is_none());
    }
}

fn start_fetch(session: &mut ChartSession<RecordingSurface>, event: UiEvent) -> PendingFetch {
    match session.dispatch(event) {
        Dispatched::Fetch(pending) => pending,
        Dispatched::Done(handled) => panic!("expected a fetch, got {handled:?}"),
    }
}

#[tokio::test]
async fn test_overlapping_submits_keep_only_the_newest_result() {
    let source = Arc::new(StubSource::with_bars("贵州茅台", daily_bars(30)));
    let mut session = session_with(source.clone());
    type_code(&mut session, "600519").await;

    let first = start_fetch(&mut session, UiEvent::Submit);
    let second = start_fetch(&mut session, UiEvent::SelectPeriod(Period::Week));
    assert_ne!(first.ticket(), second.ticket());
    assert_eq!(second.request().unwrap().period, Period::Week);

    let (ticket, result) = second.run().await;
    assert_eq!(
        session.complete(ticket, result),
        FetchOutcome::Success {
            bars: 30,
            degraded: false
        }
    );

    let events_before = session.surface().events().len();
    let (late_ticket, late_result) = first.run().await;
    assert_eq!(session.complete(late_ticket, late_result), FetchOutcome::Stale);
    assert_eq!(session.surface().events().len(), events_before);
    assert_eq!(session.fetch_state(), &FetchState::Success);
    assert_eq!(source.calls(), 2);
}

#[tokio::test]
async fn test_events_are_handled_while_a_fetch_is_in_flight() {
    let source = Arc::new(StubSource::with_bars("x", daily_bars(10)));
    let mut session = session_with(source);
    type_code(&mut session, "600519").await;

    let pending = start_fetch(&mut session, UiEvent::Submit);
    assert!(session.surface().is_visible(Region::Loading));
    assert!(matches!(session.dispatch(UiEvent::Resize), Dispatched::Done(Handled::Resized)));
    assert!(matches!(
        session.dispatch(UiEvent::SelectIndicator(Indicator::Kdj)),
        Dispatched::Done(Handled::IndicatorPending(Indicator::Kdj))
    ));
    assert_eq!(session.fetch_state(), &FetchState::Loading);

    let (ticket, result) = pending.run().await;
    assert!(matches!(
        session.complete(ticket, result),
        FetchOutcome::Success { .. }
    ));
    assert!(!session.surface().is_visible(Region::Loading));
}

#[tokio::test]
async fn test_teardown_turns_in_flight_fetch_stale() {
    let source = Arc::new(StubSource::with_bars("x", daily_bars(10)));
    let mut session = session_with(source);
    type_code(&mut session, "600519").await;

    let pending = start_fetch(&mut session, UiEvent::Submit);
    session.teardown();

    let (ticket, result) = pending.run().await;
    assert_eq!(session.complete(ticket, result), FetchOutcome::Stale);
    assert_eq!(session.fetch_state(), &FetchState::Idle);
    assert!(session.surface().chart(ChartSlot::Price).is_none());
    assert!(!session.surface().is_visible(Region::Results));
}

#[tokio::test]
async fn test_rejected_input_pending_fetch_skips_the_source() {
    let source = Arc::new(StubSource::with_bars("x", daily_bars(10)));
    let mut session = session_with(source.clone());

    let pending = start_fetch(&mut session, UiEvent::Submit);
    assert!(pending.request().is_none());
    let (ticket, result) = pending.run().await;
    assert!(matches!(result, Err(FetchFailure::InvalidRequest(_))));
    assert!(matches!(session.complete(ticket, result), FetchOutcome::Error { .. }));
    assert_eq!(source.calls(), 0);
}
