//! Cross-mode integration tests for the stream pipeline

pub mod unordered;
