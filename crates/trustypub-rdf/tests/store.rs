//! Integration tests for the quad store and the TriG boundary.

use trustypub_rdf::{
    parse_trig, serialize_trig, vocab, GraphLabels, GraphStore, Literal, Quad, StoreError, Term,
};

const NS: &str = "http://purl.org/nanopub/temp/mynanopub#";

fn labels() -> GraphLabels {
    GraphLabels {
        head: format!("{NS}Head"),
        assertion: format!("{NS}assertion"),
        provenance: format!("{NS}provenance"),
        pubinfo: format!("{NS}pubinfo"),
    }
}

fn assertion_quad() -> Quad {
    Quad::new(
        Term::iri("http://example.org/mosquito"),
        "http://example.org/transmits",
        Term::iri("http://example.org/malaria"),
        format!("{NS}assertion"),
    )
    .unwrap()
}

#[test]
fn insert_keeps_insertion_order_and_set_semantics() {
    let mut store = GraphStore::new();
    let a = assertion_quad();
    let b = Quad::new(
        Term::iri("http://example.org/a"),
        "http://example.org/p",
        Term::Literal(Literal::string("v")),
        format!("{NS}provenance"),
    )
    .unwrap();

    assert!(store.insert(a.clone()).unwrap());
    assert!(store.insert(b.clone()).unwrap());
    // Re-inserting an identical quad is a no-op.
    assert!(!store.insert(a.clone()).unwrap());

    let quads: Vec<_> = store.iter().cloned().collect();
    assert_eq!(quads, vec![a, b]);
}

#[test]
fn literal_subjects_are_rejected() {
    let err = Quad::new(
        Term::Literal(Literal::string("nope")),
        "http://example.org/p",
        Term::iri("http://example.org/o"),
        format!("{NS}assertion"),
    )
    .unwrap_err();
    assert!(matches!(err, StoreError::InvalidQuad(_)));
}

#[test]
fn labels_reject_quads_in_unknown_graphs() {
    let mut store = GraphStore::new();
    store.set_labels(labels());
    assert!(store.insert(assertion_quad()).is_ok());

    let stray = Quad::new(
        Term::iri("http://example.org/a"),
        "http://example.org/p",
        Term::iri("http://example.org/o"),
        "http://example.org/other-graph",
    )
    .unwrap();
    assert!(matches!(
        store.insert(stray),
        Err(StoreError::UnknownGraph(_))
    ));
}

#[test]
fn frozen_store_rejects_all_mutation() {
    let mut store = GraphStore::new();
    let quad = assertion_quad();
    store.insert(quad.clone()).unwrap();
    store.freeze();

    assert!(matches!(
        store.insert(assertion_quad()),
        Err(StoreError::Frozen)
    ));
    assert!(matches!(store.remove(&quad), Err(StoreError::Frozen)));
    // Reading still works, and a working copy is mutable again.
    assert_eq!(store.len(), 1);
    let mut copy = store.working_copy();
    assert!(copy.remove(&quad).unwrap());
}

#[test]
fn trig_round_trip_preserves_quads() {
    let rdf = format!(
        r#"@prefix : <{NS}> .
@prefix np: <{np}> .
@prefix ex: <http://example.org/> .

:Head {{
    : np:hasAssertion :assertion ;
        np:hasProvenance :provenance ;
        np:hasPublicationInfo :pubinfo ;
        a np:Nanopublication .
}}
:assertion {{ ex:mosquito ex:transmits ex:malaria . }}
:provenance {{ :assertion ex:note "plain"@en . }}
:pubinfo {{ : ex:label "hi" . }}
"#,
        np = vocab::NP_SCHEMA,
    );

    let store = parse_trig(&rdf).unwrap();
    assert_eq!(store.len(), 7);
    let out = serialize_trig(&store, "http://purl.org/nanopub/temp/mynanopub", NS).unwrap();
    let reparsed = parse_trig(&out).unwrap();
    assert_eq!(reparsed.len(), store.len());
    for quad in store.iter() {
        assert!(reparsed.iter().any(|q| q == quad), "lost {quad}");
    }
}

#[test]
fn default_graph_triples_are_rejected() {
    let err = parse_trig("<http://s> <http://p> <http://o> .").unwrap_err();
    assert!(err.to_string().contains("default graph"));
}

#[test]
fn language_and_datatype_survive_parsing() {
    let rdf = format!(
        r#"<{NS}g> {{
  <http://example.org/s> <http://example.org/p> "hello"@en .
  <http://example.org/s> <http://example.org/q> "1"^^<http://www.w3.org/2001/XMLSchema#integer> .
  <http://example.org/s> <http://example.org/r> "plain" .
}}"#
    );
    let store = parse_trig(&rdf).unwrap();
    let mut lang = None;
    let mut typed = None;
    let mut plain = None;
    for quad in store.iter() {
        if let Term::Literal(lit) = &quad.object {
            match quad.predicate.as_str() {
                "http://example.org/p" => lang = Some(lit.clone()),
                "http://example.org/q" => typed = Some(lit.clone()),
                "http://example.org/r" => plain = Some(lit.clone()),
                _ => {}
            }
        }
    }
    let lang = lang.unwrap();
    assert_eq!(lang.language.as_deref(), Some("en"));
    assert_eq!(lang.datatype, vocab::RDF_LANG_STRING);
    assert_eq!(
        typed.unwrap().datatype,
        "http://www.w3.org/2001/XMLSchema#integer"
    );
    assert_eq!(plain.unwrap().datatype, vocab::XSD_STRING);
}
