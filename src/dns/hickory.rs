//! Live TXT resolution over `hickory-resolver`.

use crate::config::SharedConfig;
use crate::dns::TxtResolver;
use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::TokioResolver;
use std::time::Duration;

/// A [`TxtResolver`] backed by the system's configured nameservers.
///
/// Every lookup is bounded by the configured DNS timeout; the source
/// behavior relied on whatever default the platform resolver used, which
/// could block a verification call indefinitely.
pub struct HickoryTxtResolver {
    resolver: TokioResolver,
    timeout: Duration,
}

impl HickoryTxtResolver {
    #[must_use]
    pub fn new(config: &SharedConfig) -> Self {
        let provider = TokioConnectionProvider::default();
        let resolver = TokioResolver::builder_with_config(ResolverConfig::default(), provider)
            .with_options(ResolverOpts::default())
            .build();
        HickoryTxtResolver {
            resolver,
            timeout: config.dns_timeout,
        }
    }
}

#[async_trait::async_trait]
impl TxtResolver for HickoryTxtResolver {
    async fn txt_records(&self, name: &str) -> Vec<String> {
        match tokio::time::timeout(self.timeout, self.resolver.txt_lookup(name)).await {
            Ok(Ok(response)) => response
                .iter()
                .map(|txt| {
                    // A TXT record arrives as one or more character-string
                    // chunks; the published value is their concatenation.
                    txt.iter()
                        .map(|chunk| String::from_utf8_lossy(chunk).to_string())
                        .collect::<String>()
                })
                .collect(),
            Ok(Err(err)) => {
                tracing::debug!("TXT lookup for \"{name}\" failed: {err}");
                Vec::new()
            }
            Err(_) => {
                tracing::debug!("TXT lookup for \"{name}\" timed out");
                Vec::new()
            }
        }
    }
}
