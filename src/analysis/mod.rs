//! Pure analysis over a validated budget book: severity classification,
//! aggregation, trend comparison, and advice generation. Everything here is
//! recomputed from scratch per query; nothing is cached.

pub mod advice;
pub mod aggregate;
pub mod status;
pub mod trend;

pub use advice::{advise, CategoryKind};
pub use aggregate::{aggregate, period_totals, rank_categories, GroupBy, GroupTotals};
pub use status::{classify, Severity};
pub use trend::{
    category_deltas, compare, headroom_leader, notable_deltas, top_subcategory, Direction,
    TopSubcategory, TrendDelta,
};
