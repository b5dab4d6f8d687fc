//! Error types.

/// Error enumerates the possible mailident error states.
///
/// DNS resolution failures are deliberately absent: a lookup that errors or
/// returns no records is a normal "Missing" verification outcome, not an
/// error (the domain owner simply hasn't published the record yet).
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Returned when the RSA primitive cannot produce or export a keypair
    /// during [`generate_key_material`][crate::dkim::generate_key_material].
    ///
    /// Fatal for domain creation: no partial Domain record may be persisted
    /// after this error.
    #[error("RSA key generation failed: {0}")]
    KeyGeneration(String),

    /// Returned when a stored DKIM private key cannot be parsed, or its
    /// public key cannot be extracted, in
    /// [`derive_dkim_record`][crate::dkim::derive_dkim_record].
    ///
    /// Indicates corrupted stored key material. Kept distinct from the
    /// "Missing" verification statuses so operators can tell data corruption
    /// apart from a user who hasn't configured DNS yet.
    #[error("DKIM private key cannot be parsed or its public key extracted")]
    InvalidKey,

    /// Returned when no [`Domain`][crate::model::Domain] with the given name
    /// exists in the store.
    #[error("domain \"{0}\" not found")]
    DomainNotFound(String),

    /// Returned when creating a [`Domain`][crate::model::Domain] whose name
    /// is already taken. Domain names are globally unique.
    #[error("domain \"{0}\" already exists")]
    DomainExists(String),

    /// Returned when no credential matches the presented API key, or the
    /// matching credential is on hold.
    #[error("invalid or expired credential key")]
    CredentialNotFound,

    /// Returned when a credential references a server that no longer exists,
    /// or no server with the given name exists.
    #[error("server \"{0}\" not found")]
    ServerNotFound(String),

    /// Returned when [`Config::try_from_file`][crate::config::Config::try_from_file]
    /// loads an RSA key size below the accepted floor. Published DKIM records
    /// derived from undersized keys are rejected by receiving MTAs.
    #[error("configured RSA key size ({0} bits) is below the {1} bit minimum")]
    WeakKeySize(usize, usize),

    /// Returned when a generic IO error occurs.
    #[error("an IO error occurred")]
    IO(#[from] std::io::Error),

    /// Returned when [trying to load a `Config`][crate::config::Config::try_from_file]
    /// fails due to invalid JSON content.
    #[error("invalid JSON")]
    InvalidJSON(#[from] serde_json::Error),
}
