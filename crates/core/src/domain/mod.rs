pub mod contract;
pub mod market;
pub mod prediction;
pub mod recommendation;

pub use market::Market;
pub use prediction::{Headline, NewsSentiment, Prediction, PricePoint};
pub use recommendation::{Analysis, Fundamental, KeyMetrics, Recommendation};
