//! mailident
//!
//! The domain-identity core of a mail-sending platform: manages the DKIM key
//! material and DNS TXT record for each sending domain, and verifies the
//! domain's published [SPF] and [DKIM] records against live DNS.
//!
//! A domain gets a 2048-bit RSA keypair and a random selector once, at
//! creation. The record to publish at
//! `<prefix><selector>._domainkey.<domain>` is re-derived from the stored
//! private key on demand. Verification resolves TXT records at the domain
//! (SPF, byte-exact match) and at the DKIM record name (case-insensitive
//! substring match), persists the outcome, and never retries: unpublished
//! records are the normal state while a domain owner is still setting up
//! DNS, not an error.
//!
//! Storage and DNS resolution sit behind the [`store::DomainStore`] and
//! [`dns::TxtResolver`] traits; HTTP routing, authentication and response
//! shaping belong to the embedding application.
//!
//! [SPF]: https://www.rfc-editor.org/rfc/rfc7208
//! [DKIM]: https://www.rfc-editor.org/rfc/rfc6376
//!
#![warn(clippy::pedantic)]

pub mod config;
pub mod dkim;
pub mod dns;
pub mod error;
pub mod model;
pub mod service;
pub mod store;
pub mod verify;

pub use config::{Config, SharedConfig};
pub use dkim::{derive_dkim_record, generate_key_material, generate_selector, DkimRecord};
pub use dns::{DynTxtResolver, HickoryTxtResolver, StaticTxtResolver, TxtResolver};
pub use error::Error;
pub use model::{Credential, Domain, Server, VerificationResult, VerifyStatus};
pub use service::DomainService;
pub use store::{DomainStore, DynDomainStore, InMemoryDomainStore};
pub use verify::{verify_dkim, verify_spf};
