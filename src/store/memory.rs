use crate::error::Error;
use crate::model::{Credential, Domain, Server};
use crate::store::DomainStore;
use std::collections::HashMap;
use uuid::Uuid;

/// An in-memory implementation of [`DomainStore`][super::DomainStore].
/// Not durable across restarts; servers and credentials are seeded at
/// construction time since their lifecycle is managed elsewhere.
#[derive(Default, Debug, Clone)]
pub struct InMemoryDomainStore {
    domains: HashMap<String, Domain>,
    servers: HashMap<Uuid, Server>,
    credentials: Vec<Credential>,
}

impl InMemoryDomainStore {
    #[must_use]
    pub fn new() -> Self {
        InMemoryDomainStore::default()
    }

    pub fn add_server(&mut self, server: Server) {
        self.servers.insert(server.id, server);
    }

    pub fn add_credential(&mut self, credential: Credential) {
        self.credentials.push(credential);
    }
}

#[async_trait::async_trait]
impl DomainStore for InMemoryDomainStore {
    async fn domain_by_name(&self, name: &str) -> Result<Domain, Error> {
        self.domains
            .get(name)
            .cloned()
            .ok_or_else(|| Error::DomainNotFound(name.to_string()))
    }

    async fn create_domain(&mut self, domain: Domain) -> Result<(), Error> {
        if self.domains.contains_key(&domain.name) {
            return Err(Error::DomainExists(domain.name));
        }
        self.domains.insert(domain.name.clone(), domain);
        Ok(())
    }

    async fn update_domain(&mut self, domain: Domain) -> Result<(), Error> {
        if !self.domains.contains_key(&domain.name) {
            return Err(Error::DomainNotFound(domain.name));
        }
        self.domains.insert(domain.name.clone(), domain);
        Ok(())
    }

    async fn delete_domain(&mut self, name: &str) -> Result<(), Error> {
        self.domains
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| Error::DomainNotFound(name.to_string()))
    }

    async fn domains_for_server(&self, server_id: Uuid) -> Vec<Domain> {
        self.domains
            .values()
            .filter(|d| d.server_id == server_id)
            .cloned()
            .collect()
    }

    async fn server_for_credential(&self, key: &str) -> Result<Server, Error> {
        let credential = self
            .credentials
            .iter()
            .find(|c| !c.hold && c.key == key)
            .ok_or(Error::CredentialNotFound)?;
        self.servers
            .get(&credential.server_id)
            .cloned()
            .ok_or_else(|| Error::ServerNotFound(credential.server_id.to_string()))
    }

    async fn server_by_name(&self, name: &str) -> Result<Server, Error> {
        self.servers
            .values()
            .find(|s| s.name == name)
            .cloned()
            .ok_or_else(|| Error::ServerNotFound(name.to_string()))
    }
}
