//! Core contracts for volspan.
//!
//! This crate contains:
//! - Canonical domain models and validation
//! - The period-comparison analysis engine (enrich, slice, align,
//!   monthly roll-up, summary)
//! - Data source trait and the Yahoo Finance adapter

pub mod adapters;
pub mod analysis;
pub mod data_source;
pub mod domain;
pub mod error;
pub mod http_client;

pub use adapters::YahooAdapter;
pub use analysis::{
    aggregate_monthly, align, enrich, month_ticks, slice_period, summarize, AlignedPoint,
    ComparisonReport, MonthTick, MonthlyBucket, PeriodReport, PeriodSummary,
};
pub use data_source::{DailyBarsRequest, DataSource, ProviderId, SourceError, SourceErrorKind};
pub use domain::{DailyRecord, DailySeries, EnrichedRecord, Period, Symbol, TradeDate};
pub use error::{CoreError, ValidationError};
pub use http_client::{HttpClient, HttpError, HttpRequest, HttpResponse, NoopHttpClient, ReqwestHttpClient};
