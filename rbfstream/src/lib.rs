//! Synthetic data streams drawn from a randomized mixture of radial-basis
//! centroids, for benchmarking online learners on controlled, reproducible
//! distributions.

pub mod error;
pub mod model;
pub mod row;
pub mod stream;
