//! A fixed-answer implementation of the [`TxtResolver`][super::TxtResolver]
//! trait, for tests and offline use.

use crate::dns::TxtResolver;
use std::collections::HashMap;

/// A [`TxtResolver`][super::TxtResolver] that answers from a fixed in-memory
/// map instead of querying DNS. Names without an entry resolve to no records.
#[derive(Default, Debug, Clone)]
pub struct StaticTxtResolver {
    txt_records: HashMap<String, Vec<String>>,
}

impl StaticTxtResolver {
    #[must_use]
    pub fn new() -> Self {
        StaticTxtResolver::default()
    }

    /// Add a TXT record value to be served for the given name.
    pub fn add_txt(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.txt_records
            .entry(name.into())
            .or_default()
            .push(value.into());
    }
}

#[async_trait::async_trait]
impl TxtResolver for StaticTxtResolver {
    async fn txt_records(&self, name: &str) -> Vec<String> {
        self.txt_records.get(name).cloned().unwrap_or_default()
    }
}
