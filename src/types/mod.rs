pub mod identifiers;
pub mod ranking;
pub mod time;

pub use identifiers::{CatalogVersion, ProductId};
pub use ranking::{
    RankedProduct, RankingMetadata, RankingResult, RecommendationWhy, ScoreWhy, ScoredCandidate,
    TrendingWhy,
};
pub use time::{now_millis, Millis, DAY_MS, WEEK_MS};
