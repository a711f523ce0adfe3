mod metrics;
mod score;

#[doc(inline)]
pub use metrics::{IDEAL_AISLE_RATIO, MetricsResult, aggregate_metrics};
#[doc(inline)]
pub use score::{
    ACCESSIBILITY_WEIGHT, DEFAULT_DENSITY_PLACEHOLDER, DENSITY_WEIGHT, EFFICIENCY_WEIGHT,
    ScoreResult, Scorer, WORKFLOW_WEIGHT, accessibility, layout_efficiency, workflow,
};
