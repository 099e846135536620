//! Shared test utilities for the meta gateway crates
//!
//! This crate provides in-process stand-ins for the gateway's two upstreams:
//! - `TestMetaStore`: `meta.v1.Meta` server over an in-memory bidirectional map
//! - `TestVectorBackend`: `gateway.v1.VectorGateway` server doing exact L2 search
//! - `TestDataBuilder`: Deterministic keys and vectors
//! - `assertions`: Custom assertion helpers
//!
//! Each server binds an ephemeral `127.0.0.1` port, reports `SERVING` on
//! `grpc.health.v1.Health`, accepts zstd, and stops when dropped.
//!
//! # Usage
//!
//! ```rust,no_run
//! use test_utils::{TestDataBuilder, TestMetaStore, TestVectorBackend};
//!
//! #[tokio::test]
//! async fn my_gateway_test() {
//!     let meta = TestMetaStore::new().await;
//!     let agent = TestVectorBackend::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_gateway_test");
//!
//!     let key = builder.key("main");
//!     let vector = builder.vector(8);
//!     // Connect clients to meta.url() and agent.url()
//! }
//! ```

mod meta_store;
mod server;
mod vector_backend;

use rand::SeedableRng;
use rand::distr::{Distribution, StandardUniform};
use rand::rngs::StdRng;

pub use meta_store::{FakeMetaStore, TestMetaStore};
pub use server::TestServer;
pub use vector_backend::{FakeVectorBackend, TestVectorBackend};

/// Builder for test data with deterministic randomization
///
/// This ensures tests are reproducible by using seeded data.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    /// Create a new builder with a seed (for deterministic tests)
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_insert_then_search");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Generate a caller key unique to this builder
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::new(7);
    /// assert_eq!(builder.key("a"), "test-key-7-a");
    /// ```
    pub fn key(&self, suffix: &str) -> String {
        format!("test-key-{}-{}", self.seed, suffix)
    }

    /// Generate a vector of `dim` values in `[0, 1)`
    pub fn vector(&self, dim: usize) -> Vec<f32> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        StandardUniform.sample_iter(&mut rng).take(dim).collect()
    }
}

/// Test assertion helpers
pub mod assertions {
    use tonic::{Code, Status};

    /// Assert that a call failed with the expected gRPC code
    pub fn assert_code<T: std::fmt::Debug>(result: Result<T, Status>, expected: Code, context: &str) -> Status {
        match result {
            Ok(value) => panic!("{}: expected {:?}, got Ok({:?})", context, expected, value),
            Err(status) => {
                assert_eq!(
                    status.code(),
                    expected,
                    "{}: expected {:?}, got {:?} ({})",
                    context,
                    expected,
                    status.code(),
                    status.message()
                );
                status
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_builder_deterministic() {
        let builder1 = TestDataBuilder::new(42);
        let builder2 = TestDataBuilder::new(42);

        assert_eq!(builder1.key("a"), builder2.key("a"));
        assert_eq!(builder1.vector(16), builder2.vector(16));
    }

    #[test]
    fn test_data_builder_different_names() {
        let builder1 = TestDataBuilder::from_test_name("test1");
        let builder2 = TestDataBuilder::from_test_name("test2");

        // Different test names should generate different data
        assert_ne!(builder1.key("a"), builder2.key("a"));
        assert_ne!(builder1.vector(4), builder2.vector(4));
    }

    #[test]
    fn test_vector_values_in_unit_range() {
        let v = TestDataBuilder::new(0).vector(64);
        assert_eq!(v.len(), 64);
        assert!(v.iter().all(|x| (0.0..1.0).contains(x)));
    }
}
