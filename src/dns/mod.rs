//! DNS TXT resolution seam.
//!
//! Verification only ever needs one primitive: all TXT record values
//! published at a name. [`TxtResolver`] abstracts that primitive so the
//! verifier can run against live DNS ([`hickory::HickoryTxtResolver`]) or a
//! fixed answer set ([`static_resolver::StaticTxtResolver`]) in tests.
//!
//! Resolution failure and an empty answer are the same thing to callers:
//! no values, no match. A domain owner who hasn't published records yet is
//! the common case, not an error.

use std::sync::Arc;

pub mod hickory;
pub mod static_resolver;

#[allow(clippy::module_name_repetitions)]
pub use hickory::HickoryTxtResolver;
#[allow(clippy::module_name_repetitions)]
pub use static_resolver::StaticTxtResolver;

/// `DynTxtResolver` is a type alias for a shared [`TxtResolver`] trait
/// object.
#[allow(clippy::module_name_repetitions)]
pub type DynTxtResolver = Arc<dyn TxtResolver + Send + Sync>;

/// An async trait describing TXT record resolution for a DNS name.
#[async_trait::async_trait]
pub trait TxtResolver {
    /// Resolve all TXT record values published at `name`.
    ///
    /// Returns an empty `Vec` both when the name has no TXT records and when
    /// resolution fails outright; callers treat the two identically.
    async fn txt_records(&self, name: &str) -> Vec<String>;
}
