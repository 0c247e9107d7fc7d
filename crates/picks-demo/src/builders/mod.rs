//! Fluent builder for scenario datasets.
//!
//! The [`DatasetBuilder`] assembles the generators into a complete
//! [`DemoData`](crate::dataset::DemoData) for one scenario.

mod dataset;

pub use dataset::{DatasetBuilder, build_dataset};
