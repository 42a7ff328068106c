use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use rsa::pkcs8::DecodePublicKey;
use rsa::sha2::{Digest as _, Sha256};
use rsa::{Pkcs1v15Sign, RsaPublicKey};
use serde::Serialize;
use tracing::debug;

use trustypub_canonical::{
    make_trusty, normalize, relabel_blank_nodes, rewrite_namespace, ArtifactKind, DigestAlg,
    TrustyId,
};
use trustypub_rdf::{parse_trig, serialize_trig, vocab, GraphStore, Literal, Quad, Term};

use crate::error::{ParseError, SignError};
use crate::info::{extract_info, NpInfo, SignatureInfo};
use crate::profile::Profile;
use crate::report::ValidationReport;

/// A nanopublication: four named graphs under one base IRI, with a
/// self-naming trusty identity once finalized.
///
/// Instances are constructed unsigned from TriG, finalized by
/// [`Nanopub::make_trusty`] or [`Nanopub::sign`], and frozen from then on.
/// Finalization always builds a new instance; the input is never left
/// half-mutated.
#[derive(Debug, Clone)]
pub struct Nanopub {
    store: GraphStore,
    info: NpInfo,
    published: Option<String>,
}

/// Compact description of a nanopublication, as reported by
/// [`Nanopub::summary`].
#[derive(Debug, Clone, Serialize)]
pub struct NpSummary {
    /// IRI denoting the nanopublication.
    pub uri: String,
    /// Trusty identifier, if finalized.
    pub identity: Option<TrustyId>,
    /// Whether signature quads are present.
    pub signed: bool,
    /// When the object was published, if it was.
    pub published_at: Option<String>,
}

impl Nanopub {
    /// Parses a TriG document holding exactly one nanopublication.
    ///
    /// Objects that already carry a trusty identifier arrive frozen;
    /// placeholder-based ones stay mutable until finalization.
    pub fn new(rdf: &str) -> Result<Self, ParseError> {
        let mut store = parse_trig(rdf)?;
        let info = extract_info(&store)?;
        store.set_labels(info.labels.clone());
        if info.trusty.is_some() {
            store.freeze();
        }
        Ok(Self {
            store,
            info,
            published: None,
        })
    }

    /// The quads of this nanopublication.
    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    /// Structural facts extracted from the quads.
    pub fn info(&self) -> &NpInfo {
        &self.info
    }

    /// Whether signature quads are present.
    pub fn is_signed(&self) -> bool {
        self.info.is_signed()
    }

    /// Compact description: identity, signedness, publication time.
    pub fn summary(&self) -> NpSummary {
        NpSummary {
            uri: self.info.uri.clone(),
            identity: self.info.trusty.clone(),
            signed: self.is_signed(),
            published_at: self.published.clone(),
        }
    }

    /// Serializes the nanopublication back to TriG.
    pub fn rdf(&self) -> Result<String, trustypub_rdf::RdfError> {
        serialize_trig(&self.store, &self.info.uri, &self.info.ns)
    }

    /// Records when the object was accepted by a registry.
    pub fn mark_published(&mut self, at: impl Into<String>) {
        self.published = Some(at.into());
    }

    /// Finalizes without a signature: relabels blank nodes, mints the
    /// unsigned identifier, substitutes the placeholder namespace, and
    /// freezes. Returns a new instance.
    pub fn make_trusty(&self) -> Result<Self, SignError> {
        if self.info.trusty.is_some() {
            return Err(SignError::AlreadyTrusty);
        }
        let working = relabel_blank_nodes(&self.store, &self.info.ns, &self.info.uri)?;
        let info = extract_info(&working)?;
        let trusty = make_trusty(
            &working,
            &info.ns,
            &info.normalized_ns,
            &info.separator_after_trusty,
            ArtifactKind::Unsigned,
            DigestAlg::Sha256,
        )?;
        debug!(id = %trusty, "finalized unsigned nanopublication");
        Self::finalized(substitute_identity(&working, &info, &trusty)?)
    }

    /// Signs with the given profile, producing a new frozen instance whose
    /// identifier covers the signature bytes.
    ///
    /// Fails with [`SignError::AlreadySigned`] if signature quads are
    /// already present; replacing a signature requires [`Nanopub::resign`].
    pub fn sign(&self, profile: &Profile) -> Result<Self, SignError> {
        if self.info.signature.is_some() {
            return Err(SignError::AlreadySigned);
        }
        finalize_signed(&self.store, &self.info, profile)
    }

    /// Replaces an existing signature: strips the previous signature quads,
    /// then signs again. Also accepts unsigned input.
    pub fn resign(&self, profile: &Profile) -> Result<Self, SignError> {
        let Some(previous) = &self.info.signature else {
            return finalize_signed(&self.store, &self.info, profile);
        };
        let mut working = self.store.working_copy();
        let stale: Vec<Quad> = working
            .iter()
            .filter(|q| {
                q.graph == self.info.labels.pubinfo
                    && q.subject.as_iri() == Some(previous.subject.as_str())
                    && matches!(
                        q.predicate.as_str(),
                        vocab::HAS_SIGNATURE
                            | vocab::HAS_PUBLIC_KEY
                            | vocab::HAS_ALGORITHM
                            | vocab::HAS_SIGNATURE_TARGET
                    )
            })
            .cloned()
            .collect();
        for quad in &stale {
            working.remove(quad)?;
        }
        let info = extract_info(&working)?;
        finalize_signed(&working, &info, profile)
    }

    /// Confirms integrity and, when signature quads are present,
    /// authenticity. Read-only and deterministic; never fails for
    /// well-formed-but-invalid content.
    pub fn check(&self) -> ValidationReport {
        let mut messages = Vec::new();
        let signed = self.info.signature.is_some();

        let (trusty, integrity) = match &self.info.trusty {
            None => {
                messages.push("the nanopublication has no trusty identifier".to_string());
                (None, false)
            }
            Some(embedded) => {
                match make_trusty(
                    &self.store,
                    &self.info.ns,
                    &self.info.normalized_ns,
                    &self.info.separator_after_trusty,
                    embedded.kind(),
                    DigestAlg::Sha256,
                ) {
                    Ok(recomputed) => {
                        let matches = recomputed == *embedded;
                        if !matches {
                            messages.push(format!(
                                "trusty mismatch: embedded {embedded}, recomputed {recomputed}"
                            ));
                        }
                        (Some(embedded.clone()), matches)
                    }
                    Err(e) => {
                        messages.push(format!("canonicalization failed: {e}"));
                        (Some(embedded.clone()), false)
                    }
                }
            }
        };

        let authenticity = self
            .info
            .signature
            .as_ref()
            .map(|sig| self.verify_signature(sig, &mut messages));

        ValidationReport {
            trusty,
            integrity,
            signed,
            authenticity,
            messages,
        }
    }

    /// Validates the embedded signature against the declared public key,
    /// re-deriving the signable bytes exactly as the signer did.
    fn verify_signature(&self, sig: &SignatureInfo, messages: &mut Vec<String>) -> bool {
        if let Some(algorithm) = &sig.algorithm {
            if algorithm != "RSA" {
                messages.push(format!("unsupported signature algorithm: {algorithm}"));
                return false;
            }
        }
        let Some(public_key) = &sig.public_key else {
            messages.push("signature without a declared public key".to_string());
            return false;
        };

        // The signable subset is everything except the signature value quad.
        let stripped = GraphStore::from_quads(
            self.store
                .iter()
                .filter(|q| {
                    !(q.graph == self.info.labels.pubinfo
                        && q.subject.as_iri() == Some(sig.subject.as_str())
                        && q.predicate == vocab::HAS_SIGNATURE)
                })
                .cloned(),
        );
        let signable = normalize(
            &stripped,
            &self.info.ns,
            &self.info.normalized_ns,
            &self.info.separator_after_trusty,
        );

        let key_bytes = match STANDARD.decode(public_key) {
            Ok(bytes) => bytes,
            Err(e) => {
                messages.push(format!("undecodable public key: {e}"));
                return false;
            }
        };
        let key = match RsaPublicKey::from_public_key_der(&key_bytes) {
            Ok(key) => key,
            Err(e) => {
                messages.push(format!("invalid public key: {e}"));
                return false;
            }
        };
        let signature = match STANDARD.decode(&sig.value) {
            Ok(bytes) => bytes,
            Err(e) => {
                messages.push(format!("undecodable signature: {e}"));
                return false;
            }
        };
        match key.verify(
            Pkcs1v15Sign::new::<Sha256>(),
            &Sha256::digest(signable.as_bytes()),
            &signature,
        ) {
            Ok(()) => true,
            Err(e) => {
                messages.push(format!("signature verification failed: {e}"));
                false
            }
        }
    }

    /// Wraps a finalized store: re-extracts its info, freezes, done.
    fn finalized(mut store: GraphStore) -> Result<Self, SignError> {
        let info = extract_info(&store)?;
        store.set_labels(info.labels.clone());
        store.freeze();
        Ok(Self {
            store,
            info,
            published: None,
        })
    }
}

/// Runs the signing pipeline over an unsigned store.
///
/// The signature covers the canonical form of everything inserted before the
/// signature value quad; the trusty identifier minted afterwards covers the
/// signature bytes too, so the final identity transitively certifies them.
fn finalize_signed(
    store: &GraphStore,
    info: &NpInfo,
    profile: &Profile,
) -> Result<Nanopub, SignError> {
    let mut working = relabel_blank_nodes(store, &info.ns, &info.uri)?;
    let info = extract_info(&working)?;
    working.set_labels(info.labels.clone());
    let pubinfo = info.labels.pubinfo.clone();
    let sig_subject = format!("{}sig", info.ns);

    working.insert(Quad::new(
        Term::iri(&sig_subject),
        vocab::HAS_PUBLIC_KEY,
        Term::Literal(Literal::string(&profile.public_key)),
        &pubinfo,
    )?)?;
    working.insert(Quad::new(
        Term::iri(&sig_subject),
        vocab::HAS_ALGORITHM,
        Term::Literal(Literal::string("RSA")),
        &pubinfo,
    )?)?;
    working.insert(Quad::new(
        Term::iri(&sig_subject),
        vocab::HAS_SIGNATURE_TARGET,
        Term::iri(&info.uri),
        &pubinfo,
    )?)?;
    if let Some(orcid) = &profile.orcid {
        if info.attributed_to.is_none() {
            working.insert(Quad::new(
                Term::iri(&info.uri),
                vocab::DCT_CREATOR,
                Term::iri(orcid),
                &pubinfo,
            )?)?;
        }
    }

    let signable = normalize(
        &working,
        &info.ns,
        &info.normalized_ns,
        &info.separator_after_trusty,
    );
    let key = profile.rsa_private_key()?;
    let signature = key.sign(
        Pkcs1v15Sign::new::<Sha256>(),
        &Sha256::digest(signable.as_bytes()),
    )?;
    working.insert(Quad::new(
        Term::iri(&sig_subject),
        vocab::HAS_SIGNATURE,
        Term::Literal(Literal::string(STANDARD.encode(signature))),
        &pubinfo,
    )?)?;

    let trusty = make_trusty(
        &working,
        &info.ns,
        &info.normalized_ns,
        &info.separator_after_trusty,
        ArtifactKind::Signed,
        DigestAlg::Sha256,
    )?;
    debug!(id = %trusty, signer = ?profile.orcid, "signed nanopublication");
    Nanopub::finalized(substitute_identity(&working, &info, &trusty)?)
}

/// Substitutes the placeholder namespace with the trusty-bearing one.
fn substitute_identity(
    store: &GraphStore,
    info: &NpInfo,
    trusty: &TrustyId,
) -> Result<GraphStore, SignError> {
    let trusty_uri = format!("{}{}", info.normalized_ns, trusty);
    let trusty_ns = format!("{trusty_uri}#");
    Ok(rewrite_namespace(
        store,
        &info.ns,
        &info.uri,
        &trusty_ns,
        &trusty_uri,
    )?)
}
