use crate::error::Error;
use serde::Deserialize;
use serde_with::{serde_as, DurationSeconds};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

pub type SharedConfig = Arc<Config>;

/// Key sizes below this are refused when loading config from a file. Tests
/// construct `Config` directly and may use smaller keys for speed.
pub const MIN_RSA_KEY_BITS: usize = 1024;

const DEFAULT_RSA_KEY_BITS: usize = 2048;
const DEFAULT_SELECTOR_LEN: usize = 6;
const DEFAULT_DNS_TIMEOUT_SECS: u64 = 5;
const DEFAULT_DKIM_RECORD_PREFIX: &str = "postal-";

#[serde_as]
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Config {
    /// Modulus size for generated DKIM keypairs.
    pub rsa_key_bits: usize,
    /// Length of the random alphanumeric DKIM selector assigned at domain
    /// creation.
    pub selector_len: usize,
    /// Upper bound on each TXT lookup. The platform resolver's own timeout
    /// still applies if shorter.
    #[serde_as(as = "DurationSeconds<u64>")]
    pub dns_timeout: Duration,
    /// Prefix for derived DKIM record names, e.g. `postal-` yields
    /// `postal-<selector>._domainkey.<domain>`.
    pub dkim_record_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            rsa_key_bits: DEFAULT_RSA_KEY_BITS,
            selector_len: DEFAULT_SELECTOR_LEN,
            dns_timeout: Duration::from_secs(DEFAULT_DNS_TIMEOUT_SECS),
            dkim_record_prefix: DEFAULT_DKIM_RECORD_PREFIX.to_string(),
        }
    }
}

impl Config {
    /// Load a `Config` from the JSON file at the given path, or return an
    /// Error. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IO`] if the path can't be opened or read.
    ///
    /// Returns [`Error::InvalidJSON`] if the file content is invalid.
    ///
    /// Returns [`Error::WeakKeySize`] if `rsa_key_bits` is below
    /// [`MIN_RSA_KEY_BITS`].
    pub fn try_from_file(p: impl AsRef<Path>) -> Result<Self, Error> {
        let f = File::open(p)?;
        let reader = BufReader::new(f);
        let conf: Config = serde_json::from_reader(reader)?;
        conf.key_size_is_sufficient()?;
        Ok(conf)
    }

    fn key_size_is_sufficient(&self) -> Result<(), Error> {
        if self.rsa_key_bits < MIN_RSA_KEY_BITS {
            return Err(Error::WeakKeySize(self.rsa_key_bits, MIN_RSA_KEY_BITS));
        }
        Ok(())
    }
}
