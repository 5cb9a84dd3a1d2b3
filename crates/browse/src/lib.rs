//! Browse engine: result ranking, filtering, and quota padding.
//!
//! Turns a raw catalog snapshot plus a free-text query or a structured
//! filter set into a bounded, ordered, reproducible list for display.
//! Everything in this crate is a pure, synchronous computation over
//! borrowed product records: no IO, no shared state, no errors under
//! normal operation. Callers own invocation timing: recompute whenever
//! the snapshot or the criteria change.

pub mod criteria;
pub mod filter;
pub mod flow;
pub mod quota;
pub mod rank;

pub use criteria::{FilterCriteria, Selection, StockStatus};
pub use filter::filter;
pub use flow::{candidate_pool, recommend, search, Recommendations};
pub use quota::{pad, DISPLAY_CAP, REPEAT_QUOTA};
pub use rank::{rank, MatchTier};
