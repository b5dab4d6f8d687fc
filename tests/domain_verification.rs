//! End-to-end scenario: create a domain, publish its records at a static
//! resolver, verify, and confirm the persisted outcome.

use mailident::{
    Config, Credential, DkimRecord, DomainService, DynDomainStore, InMemoryDomainStore, Server,
    StaticTxtResolver, VerifyStatus,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

const SPF_RECORD: &str = "v=spf1 a mx include:spf.example.com ~all";

/// Capture the service's tracing output in test output. Safe to call from
/// every test; only the first call installs the subscriber.
fn tracing_init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mailident=debug".into()),
        )
        .with_test_writer()
        .try_init();
}

fn test_config() -> Arc<Config> {
    Arc::new(Config {
        rsa_key_bits: 512,
        ..Config::default()
    })
}

fn seeded_store() -> (DynDomainStore, Server, String) {
    let server = Server {
        id: Uuid::new_v4(),
        name: "mail01".to_string(),
    };
    let key = "api-key-1".to_string();
    let mut store = InMemoryDomainStore::new();
    store.add_server(server.clone());
    store.add_credential(Credential {
        id: Uuid::new_v4(),
        server_id: server.id,
        key: key.clone(),
        hold: false,
    });
    (Arc::new(RwLock::new(store)), server, key)
}

#[tokio::test]
async fn create_publish_verify() {
    tracing_init();
    let (store, server, credential_key) = seeded_store();

    // Creation assigns the selector and key material the record derives from.
    let service = DomainService::new(
        test_config(),
        store.clone(),
        Arc::new(StaticTxtResolver::new()),
    );
    let domain = service.create_domain("example.com", server.id).await.unwrap();
    let record = service.dkim_record(&domain).unwrap();
    assert_eq!(
        record.name,
        format!("postal-{}._domainkey.example.com", domain.dkim_selector)
    );
    assert!(record.value.starts_with("v=DKIM1; t=s; h=sha256; p="));
    assert!(record.value.ends_with(';'));

    // The domain shows up for its owner's credential, with the same record
    // derivable before any DNS is published.
    let listed = service.domains_for_credential(&credential_key).await.unwrap();
    assert_eq!(listed.len(), 1);
    let (shown, shown_record) = service.domain_with_record("example.com").await.unwrap();
    assert_eq!(shown.name, "example.com");
    assert_eq!(shown_record, record);

    // "Publish" both records, then verify.
    let mut resolver = StaticTxtResolver::new();
    resolver.add_txt("example.com", SPF_RECORD);
    resolver.add_txt(record.name.clone(), record.value.clone());
    let service = DomainService::new(test_config(), store.clone(), Arc::new(resolver));

    let result = service.verify_domain("example.com", SPF_RECORD).await.unwrap();
    assert_eq!(result.spf_status, VerifyStatus::Ok);
    assert_eq!(result.spf_error, None);
    assert_eq!(result.dkim_status, VerifyStatus::Ok);
    assert_eq!(result.dkim_error, None);
    assert_eq!(result.identity_status, VerifyStatus::Missing);
    assert_eq!(result.dkim_record, record);

    let verified = store
        .read()
        .await
        .domain_by_name("example.com")
        .await
        .unwrap();
    assert!(verified.verified_at.is_some());
    assert!(verified.dns_checked_at.is_some());
    assert_eq!(verified.spf_status, Some(VerifyStatus::Ok));
    assert_eq!(verified.dkim_status, Some(VerifyStatus::Ok));

    // A later pass re-derives the identical record name from stored state.
    let result = service.verify_domain("example.com", SPF_RECORD).await.unwrap();
    assert_eq!(result.dkim_record.name, record.name);
    assert_eq!(result.identity_status, VerifyStatus::Ok);
}

#[tokio::test]
async fn dkim_verification_tolerates_provider_casing() {
    tracing_init();
    let (store, server, _) = seeded_store();
    let service = DomainService::new(
        test_config(),
        store.clone(),
        Arc::new(StaticTxtResolver::new()),
    );
    let domain = service.create_domain("example.com", server.id).await.unwrap();
    let record: DkimRecord = service.dkim_record(&domain).unwrap();

    // SPF published verbatim, DKIM published upper-cased by the provider.
    let mut resolver = StaticTxtResolver::new();
    resolver.add_txt("example.com", SPF_RECORD);
    resolver.add_txt(record.name.clone(), record.value.to_uppercase());
    let service = DomainService::new(test_config(), store, Arc::new(resolver));

    let result = service.verify_domain("example.com", SPF_RECORD).await.unwrap();
    assert_eq!(result.dkim_status, VerifyStatus::Ok);

    // The same tolerance never applies to SPF: casing must match exactly.
    let result = service
        .verify_domain("example.com", &SPF_RECORD.to_uppercase())
        .await
        .unwrap();
    assert_eq!(result.spf_status, VerifyStatus::Missing);
}

#[tokio::test]
async fn deleted_domains_stop_resolving() {
    tracing_init();
    let (store, server, credential_key) = seeded_store();
    let service = DomainService::new(test_config(), store, Arc::new(StaticTxtResolver::new()));
    service.create_domain("example.com", server.id).await.unwrap();

    service.delete_domain("example.com").await.unwrap();
    assert!(service.domain_with_record("example.com").await.is_err());
    assert!(service
        .domains_for_credential(&credential_key)
        .await
        .unwrap()
        .is_empty());
}
