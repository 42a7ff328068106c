//! Integration tests for the registry boundary using the in-memory backend.

use std::fs;

use trustypub_core::{Nanopub, Profile, ProfileBuilder};
use trustypub_registry::{publish_signed, MemoryRegistry, Registry, RegistryError};

fn fixture_rdf() -> String {
    fs::read_to_string("../trustypub-core/tests/resources/simple1-rsa.trig").unwrap()
}

fn fixture_profile() -> Profile {
    let key = fs::read_to_string("../trustypub-core/tests/resources/id_rsa").unwrap();
    ProfileBuilder::new(key).build().unwrap()
}

#[tokio::test]
async fn publish_then_fetch_verifies() {
    let registry = MemoryRegistry::new();
    let np = Nanopub::new(&fixture_rdf()).unwrap();

    let (signed, info) = publish_signed(&np, Some(&fixture_profile()), &registry)
        .await
        .unwrap();
    assert!(signed.is_signed());
    assert_eq!(info.server, "memory");
    assert_eq!(info.uri, signed.info().uri);
    assert_eq!(signed.summary().published_at, Some(info.published_at.clone()));
    assert_eq!(registry.len(), 1);

    // Fetch by full URI and by bare identifier; both verify.
    let by_uri = registry.fetch(&info.uri).await.unwrap();
    assert!(by_uri.check().is_valid());

    let identity = signed.info().trusty.clone().unwrap();
    let by_id = registry.fetch(identity.as_str()).await.unwrap();
    assert_eq!(by_id.info().trusty, signed.info().trusty);
    assert!(by_id.check().integrity);
}

#[tokio::test]
async fn already_signed_objects_publish_without_key_material() {
    let registry = MemoryRegistry::new();
    let signed = Nanopub::new(&fixture_rdf())
        .unwrap()
        .sign(&fixture_profile())
        .unwrap();

    // No profile needed: the object is already finalized.
    let (published, info) = publish_signed(&signed, None, &registry).await.unwrap();
    assert_eq!(published.info().trusty, signed.info().trusty);
    assert_eq!(info.uri, signed.info().uri);
}

#[tokio::test]
async fn unfinalized_objects_are_rejected_by_the_registry() {
    let registry = MemoryRegistry::new();
    let np = Nanopub::new(&fixture_rdf()).unwrap();
    let err = registry.publish(&np).await.unwrap_err();
    assert!(matches!(err, RegistryError::Unfinalized));
}

#[tokio::test]
async fn fetching_an_unknown_identity_fails() {
    let registry = MemoryRegistry::new();
    let err = registry
        .fetch("RAe_LF_8hl-wFdzgbxnLS2T3zNWwic2jFiF-tjuWCdkr4")
        .await
        .unwrap_err();
    assert!(matches!(err, RegistryError::NotFound(_)));
}

#[tokio::test]
async fn tampered_registry_content_is_never_trusted() {
    let registry = MemoryRegistry::new();
    let signed = Nanopub::new(&fixture_rdf())
        .unwrap()
        .sign(&fixture_profile())
        .unwrap();
    registry.publish(&signed).await.unwrap();

    // Simulated registry tampering: the stored bytes change, the key stays.
    let tampered = signed
        .rdf()
        .unwrap()
        .replace("http://example.org/malaria", "http://example.org/dengue");
    registry.insert_raw(&signed.info().uri, tampered);

    let err = registry.fetch(&signed.info().uri).await.unwrap_err();
    assert!(matches!(err, RegistryError::FailedVerification(_)));
}

#[tokio::test]
async fn fetched_identity_must_match_the_request() {
    let registry = MemoryRegistry::new();
    let signed = Nanopub::new(&fixture_rdf())
        .unwrap()
        .sign(&fixture_profile())
        .unwrap();
    // Stored under a URI unrelated to the object's own identity.
    registry.insert_raw("https://w3id.org/np/RBwrong-home", signed.rdf().unwrap());

    let err = registry
        .fetch("https://w3id.org/np/RBwrong-home")
        .await
        .unwrap_err();
    assert!(matches!(err, RegistryError::FailedVerification(_)));
}
