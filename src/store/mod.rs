//! Domain data store seam.
//!
//! The identity core reads and writes [`Domain`] records and resolves
//! credentials to their owning [`Server`], but owns no storage technology.
//! [`DomainStore`] is the explicit repository interface injected into the
//! [`DomainService`][crate::service::DomainService]; one implementation is
//! provided, [`memory::InMemoryDomainStore`].

use crate::error::Error;
use crate::model::{Domain, Server};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

pub mod memory;

#[allow(clippy::module_name_repetitions)]
pub use memory::InMemoryDomainStore;

/// `DynDomainStore` is a type alias for a [`DomainStore`] that can be used by
/// multiple read/write consumers that coordinate through an [`Arc`] and a
/// [`RwLock`] wrapping the [`DomainStore`].
#[allow(clippy::module_name_repetitions)]
pub type DynDomainStore = Arc<RwLock<dyn DomainStore + Send + Sync>>;

/// An async trait describing persistence of mail-sending domains and the
/// credential-to-server lookup that scopes API access.
#[async_trait::async_trait]
pub trait DomainStore {
    /// Fetch a domain by its globally unique name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DomainNotFound`] when no such domain exists.
    async fn domain_by_name(&self, name: &str) -> Result<Domain, Error>;

    /// Persist a newly created domain.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DomainExists`] when the name is already taken.
    async fn create_domain(&mut self, domain: Domain) -> Result<(), Error>;

    /// Overwrite the stored record for a domain. Concurrent writers race
    /// with last-write-wins semantics; there is no field-level merging.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DomainNotFound`] when no such domain exists.
    async fn update_domain(&mut self, domain: Domain) -> Result<(), Error>;

    /// Delete a domain by name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DomainNotFound`] when no such domain exists.
    async fn delete_domain(&mut self, name: &str) -> Result<(), Error>;

    /// List the domains owned by a server (empty when none).
    async fn domains_for_server(&self, server_id: Uuid) -> Vec<Domain>;

    /// Resolve a credential key to its owning server. The key comparison is
    /// byte-sensitive and credentials on hold never match.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CredentialNotFound`] when no live credential carries
    /// the key, and [`Error::ServerNotFound`] when the credential references
    /// a server that no longer exists.
    async fn server_for_credential(&self, key: &str) -> Result<Server, Error>;

    /// Fetch a server by name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ServerNotFound`] when no such server exists.
    async fn server_by_name(&self, name: &str) -> Result<Server, Error>;
}
