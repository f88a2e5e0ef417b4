//! Static analysis results
//!
//! Everything the dashboard renders comes from here. The tables are
//! pre-computed results of a payment default modelling exercise, fixed at
//! build time and never mutated at runtime.

pub mod metrics;
pub mod notebook;

pub use metrics::{
    DistributionSlice, FeatureImportance, ModelPerformance, PaymentStatusBucket, RocPoint,
    ThresholdMetrics,
};
