use regex::Regex;

use trustypub_canonical::TrustyId;
use trustypub_rdf::{vocab, GraphLabels, GraphStore, Term};

use crate::error::ParseError;

/// Signature quads found in the pubinfo graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureInfo {
    /// IRI of the signature element the quads hang off.
    pub subject: String,
    /// Base64-encoded signature bytes.
    pub value: String,
    /// Declared digest/signature algorithm, e.g. `RSA`.
    pub algorithm: Option<String>,
    /// Base64-encoded public key of the signer.
    pub public_key: Option<String>,
}

/// Structural facts extracted from a nanopublication's quads: graph labels,
/// base IRI decomposition, embedded identifier, and signature metadata.
#[derive(Debug, Clone)]
pub struct NpInfo {
    /// IRI denoting the nanopublication itself.
    pub uri: String,
    /// Namespace the graph names and the signature element hang off.
    pub ns: String,
    /// Namespace a fresh identifier would be minted under.
    pub normalized_ns: String,
    /// IRIs of the four named graphs.
    pub labels: GraphLabels,
    /// Base IRI with trusty identifier and separators removed.
    pub base_uri: String,
    /// Separator between the base IRI and the identifier.
    pub separator_before_trusty: String,
    /// Separator between the identifier and graph fragments.
    pub separator_after_trusty: String,
    /// Identifier embedded in the base IRI, if finalized.
    pub trusty: Option<TrustyId>,
    /// Signature metadata, if the pubinfo graph carries signature quads.
    pub signature: Option<SignatureInfo>,
    /// ORCID (or other agent IRI) the pubinfo graph attributes the object to.
    pub attributed_to: Option<String>,
}

impl NpInfo {
    /// Whether the nanopublication carries signature quads.
    pub fn is_signed(&self) -> bool {
        self.signature.is_some()
    }
}

/// Extracts the [`NpInfo`] of the single nanopublication held by `store`.
pub fn extract_info(store: &GraphStore) -> Result<NpInfo, ParseError> {
    // The head graph is the one asserting the nanopublication type.
    let mut np_uri = String::new();
    let mut head = String::new();
    for quad in store.iter() {
        if quad.predicate == vocab::RDF_TYPE
            && quad.object.as_iri() == Some(vocab::NANOPUBLICATION)
        {
            let Some(subject) = quad.subject.as_iri() else {
                continue;
            };
            if !np_uri.is_empty() {
                return Err(ParseError::MultipleNanopubs);
            }
            np_uri = subject.to_string();
            head = quad.graph.clone();
        }
    }
    if np_uri.is_empty() {
        return Err(ParseError::NoNanopub);
    }
    if head.is_empty() {
        return Err(ParseError::MissingGraph("head"));
    }

    // The head graph declares the other three graphs.
    let mut assertion = String::new();
    let mut provenance = String::new();
    let mut pubinfo = String::new();
    for quad in store.quads_in(&head) {
        if quad.subject.as_iri() != Some(np_uri.as_str()) {
            continue;
        }
        let Some(object) = quad.object.as_iri() else {
            continue;
        };
        match quad.predicate.as_str() {
            vocab::HAS_ASSERTION => assertion = object.to_string(),
            vocab::HAS_PROVENANCE => provenance = object.to_string(),
            vocab::HAS_PUBLICATION_INFO => pubinfo = object.to_string(),
            _ => {}
        }
    }
    if assertion.is_empty() {
        return Err(ParseError::MissingGraph("assertion"));
    }
    if provenance.is_empty() {
        return Err(ParseError::MissingGraph("provenance"));
    }
    if pubinfo.is_empty() {
        return Err(ParseError::MissingGraph("pubinfo"));
    }
    if store.quads_in(&assertion).next().is_none() {
        return Err(ParseError::EmptyAssertion);
    }

    // Trusty identifier, if the base IRI already carries one.
    let re_trusty =
        Regex::new(r"^.*?[/#\.]?(R[AB][A-Za-z0-9_-]{43})$").expect("invalid regex");
    let trusty = re_trusty
        .captures(&np_uri)
        .and_then(|caps| caps.get(1))
        .and_then(|m| TrustyId::parse(m.as_str()).ok());

    // The namespace is the head graph name with its final fragment removed.
    let ns_len = if trusty.is_none() {
        np_uri.len()
    } else {
        np_uri.len() + 1
    };
    let ns = head.get(..ns_len).unwrap_or(head.as_str()).to_string();

    // The bare URI drops a terminal separator, if any.
    let uri = match np_uri.strip_suffix(['#', '/', '.']) {
        Some(stripped) => stripped.to_string(),
        None => np_uri,
    };

    // Decompose the namespace into base URI and the separators around the
    // identifier slot.
    let mut base_uri = String::new();
    let mut separator_before_trusty = ".".to_string();
    let mut separator_after_trusty = String::new();
    let re_ns = Regex::new(r"^(.*?)(/|#|\.)?(R[AB][A-Za-z0-9_-]{43})?([#/\.])?$")
        .expect("invalid regex");
    if let Some(caps) = re_ns.captures(&ns) {
        if let Some(m) = caps.get(1) {
            base_uri = m.as_str().to_string();
        }
        if let Some(m) = caps.get(2) {
            separator_before_trusty = m.as_str().to_string();
        }
        if let Some(m) = caps.get(4) {
            separator_after_trusty = m.as_str().to_string();
        }
    }
    if trusty.is_none() && separator_after_trusty.is_empty() {
        separator_after_trusty = "#".to_string();
    }

    // Namespace a fresh identifier would be minted under.
    let normalized_ns = if trusty.is_some() {
        format!("{base_uri}{separator_before_trusty}")
    } else if ns.starts_with(vocab::TEMP_NP_URI) {
        vocab::NP_PREF_NS.to_string()
    } else if !ns.ends_with(['#', '/', '.']) {
        format!("{ns}.")
    } else {
        ns.clone()
    };

    // Signature quads, if present in the pubinfo graph.
    let mut signature: Option<SignatureInfo> = None;
    for quad in store.quads_in(&pubinfo) {
        if quad.predicate != vocab::HAS_SIGNATURE {
            continue;
        }
        if let (Some(subject), Some(lit)) = (quad.subject.as_iri(), quad.object.as_literal()) {
            signature = Some(SignatureInfo {
                subject: subject.to_string(),
                value: lit.lexical.clone(),
                algorithm: None,
                public_key: None,
            });
        }
    }
    if let Some(sig) = signature.as_mut() {
        for quad in store.quads_in(&pubinfo) {
            if quad.subject.as_iri() != Some(sig.subject.as_str()) {
                continue;
            }
            let Some(lit) = quad.object.as_literal() else {
                continue;
            };
            match quad.predicate.as_str() {
                vocab::HAS_PUBLIC_KEY => sig.public_key = Some(lit.lexical.clone()),
                vocab::HAS_ALGORITHM => sig.algorithm = Some(lit.lexical.clone()),
                _ => {}
            }
        }
    }

    // Attribution of the object itself, scanned across the usual predicates.
    let mut attributed_to = None;
    for quad in store.quads_in(&pubinfo) {
        let subject_is_np = quad.subject.as_iri() == Some(uri.as_str())
            || quad.subject.as_iri() == Some(ns.as_str());
        if !subject_is_np {
            continue;
        }
        if matches!(
            quad.predicate.as_str(),
            vocab::DCT_CREATOR | vocab::PROV_WAS_ATTRIBUTED_TO | vocab::PAV_CREATED_BY
        ) {
            if let Term::Iri(agent) = &quad.object {
                attributed_to = Some(agent.clone());
            }
        }
    }

    Ok(NpInfo {
        uri,
        ns,
        normalized_ns,
        labels: GraphLabels {
            head,
            assertion,
            provenance,
            pubinfo,
        },
        base_uri,
        separator_before_trusty,
        separator_after_trusty,
        trusty,
        signature,
        attributed_to,
    })
}
