//! SPF and DKIM record checks over the resolver seam.
//!
//! Each check performs exactly one TXT lookup and scans the returned values.
//! No retries: a transient resolution failure reads as "Missing", and a
//! caller wanting resilience re-invokes verification itself.
//!
//! The two checks deliberately match differently. SPF is byte-exact: the
//! caller states the record they published and must get it exactly right.
//! DKIM is a case-insensitive substring check, because some DNS providers
//! append extra attributes or alter casing when publishing TXT records.

use crate::dkim::DkimRecord;
use crate::dns::TxtResolver;

/// True iff any TXT record at `domain_name` equals `expected` byte-for-byte.
/// No case-folding, no trimming.
pub async fn verify_spf(resolver: &dyn TxtResolver, domain_name: &str, expected: &str) -> bool {
    resolver
        .txt_records(domain_name)
        .await
        .iter()
        .any(|published| published == expected)
}

/// True iff any TXT record at `record.name` contains `record.value` as a
/// case-insensitive substring.
pub async fn verify_dkim(resolver: &dyn TxtResolver, record: &DkimRecord) -> bool {
    let needle = record.value.to_lowercase();
    resolver
        .txt_records(&record.name)
        .await
        .iter()
        .any(|published| published.to_lowercase().contains(&needle))
}
