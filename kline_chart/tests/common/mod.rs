#![allow(dead_code)]

use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use chrono::{Days, NaiveDate};
use market_data_client::{
    Bar, BarSeries, DataSource, ProviderError, StockDataRequest, providers::DomainSnafu,
};

/// Serves a fixed answer and records every request it receives.
pub struct StubSource {
    stock_name: String,
    answer: Result<Vec<Bar>, String>,
    calls: AtomicUsize,
    requests: Mutex<Vec<StockDataRequest>>,
}

impl StubSource {
    pub fn with_bars(stock_name: &str, bars: Vec<Bar>) -> Self {
        Self {
            stock_name: stock_name.to_string(),
            answer: Ok(bars),
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            stock_name: String::new(),
            answer: Err(message.to_string()),
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<StockDataRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl DataSource for StubSource {
    async fn fetch_series(&self, request: &StockDataRequest) -> Result<BarSeries, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());
        match &self.answer {
            Ok(bars) => Ok(BarSeries {
                symbol: request.code.clone(),
                stock_name: self.stock_name.clone(),
                period: request.period,
                bars: bars.clone(),
            }),
            Err(message) => DomainSnafu {
                message: message.clone(),
            }
            .fail(),
        }
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// `count` daily bars from 2024-01-01. Even-indexed bars close above their
/// open, odd-indexed ones below.
pub fn daily_bars(count: usize) -> Vec<Bar> {
    let start = date(2024, 1, 1);
    (0..count)
        .map(|i| {
            let base = 10.0 + i as f64 * 0.1;
            let (open, close) = if i % 2 == 0 {
                (base, base + 0.05)
            } else {
                (base + 0.05, base)
            };
            Bar {
                date: start + Days::new(i as u64),
                open,
                close,
                low: base - 0.1,
                high: base + 0.15,
                volume: 1_000_000 + i as u64 * 1_000,
            }
        })
        .collect()
}
