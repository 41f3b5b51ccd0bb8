//! Client for the GDELT DOC 2.0 news search API.
//!
//! ```no_run
//! # async fn run() -> Result<(), gdeltdoc_client::GdeltError> {
//! use gdeltdoc_client::{FilterSet, GdeltClient, Mode};
//!
//! let client = GdeltClient::new()?;
//! let filters = FilterSet::for_timespan("24h", 10).with_keyword("climate change");
//! let articles = client.article_search(&filters).await?;
//! let timeline = client.timeline_search(Mode::TimelineVolRaw, &filters).await?;
//! # let _ = (articles, timeline);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod decode;
pub mod error;
pub mod filters;
pub mod fragments;
pub mod mode;
pub mod query;
pub mod service;
pub mod shape;
pub mod types;

pub use client::GdeltClient;
pub use decode::RawDocument;
pub use error::{ApiError, ApiErrorKind, DecodeError, GdeltError, ShapeError, ValidationError};
pub use filters::{FilterSet, ToneOp, MAX_RECORDS};
pub use fragments::{multi_near, multi_repeat, near, repeat, Combinator, NearConfig, RepeatConfig};
pub use mode::Mode;
pub use query::CompiledQuery;
pub use service::{ArticleSearchRequest, ErrorCode, TimelineRequest};
pub use types::{Article, QueryDetails, TimelineResult, TimelineRow};
