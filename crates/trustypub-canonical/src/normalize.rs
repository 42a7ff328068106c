use std::collections::HashMap;

use regex::Regex;

use trustypub_rdf::{GraphStore, Quad, Term};

use crate::CanonicalError;

/// One quad projected to the normalized strings that feed sorting and hashing.
struct NormQuad {
    graph: String,
    subject: String,
    predicate: String,
    object: String,
    datatype: String,
    lang: String,
}

/// Produces the canonical form of a store's quads.
///
/// Occurrences of `base_ns` (or of the IRI it names, `base_ns` minus its
/// terminal separator) are rewritten onto `norm_ns` followed by a space; the
/// space acts as the reserved placeholder boundary, so the output is
/// identical before and after an identifier has been minted. Statements are
/// sorted by (graph, subject, predicate, language, datatype, object) and
/// emitted as four newline-terminated lines each.
///
/// Pure function of its inputs: re-running it on unchanged content yields
/// byte-identical output regardless of quad insertion order.
pub fn normalize(store: &GraphStore, base_ns: &str, norm_ns: &str, separator: &str) -> String {
    let norm_base = format!("{} ", norm_ns.strip_suffix('#').unwrap_or(norm_ns));
    let base_uri = base_ns
        .get(..base_ns.len().saturating_sub(1))
        .unwrap_or(base_ns);

    let norm_entity = |iri: &str| -> String {
        if iri == base_ns {
            align_fragment(&norm_base, separator)
        } else {
            align_fragment(&iri.replace(base_uri, &norm_base), separator)
        }
    };

    let mut quads: Vec<NormQuad> = store
        .iter()
        .map(|quad| {
            let subject = match &quad.subject {
                Term::Iri(iri) => norm_entity(iri),
                Term::BlankNode(label) => align_fragment(label, separator),
                Term::Literal(lit) => lit.lexical.clone(),
            };
            let predicate = if quad.predicate == base_ns {
                norm_base.clone()
            } else {
                quad.predicate.replace(base_uri, &norm_base)
            };
            let (object, datatype, lang) = match &quad.object {
                Term::Iri(iri) => (norm_entity(iri), String::new(), String::new()),
                Term::BlankNode(label) => (label.clone(), String::new(), String::new()),
                Term::Literal(lit) => (
                    lit.lexical.replace('\\', "\\\\").replace('\n', "\\n"),
                    lit.datatype.clone(),
                    lit.language.clone().unwrap_or_default(),
                ),
            };
            NormQuad {
                graph: norm_entity(&quad.graph),
                subject,
                predicate,
                object,
                datatype,
                lang,
            }
        })
        .collect();

    quads.sort_by(|a, b| {
        a.graph
            .cmp(&b.graph)
            .then_with(|| a.subject.cmp(&b.subject))
            .then_with(|| a.predicate.cmp(&b.predicate))
            .then_with(|| a.lang.cmp(&b.lang))
            .then_with(|| a.datatype.cmp(&b.datatype))
            .then_with(|| a.object.cmp(&b.object))
    });

    let mut out = String::new();
    for quad in quads {
        out.push_str(&quad.graph);
        out.push('\n');
        out.push_str(&quad.subject);
        out.push('\n');
        out.push_str(&quad.predicate);
        out.push('\n');
        if !quad.lang.is_empty() {
            out.push_str(&format!("@{} {}", quad.lang, quad.object));
        } else if !quad.datatype.is_empty() {
            out.push_str(&format!("^{} {}", quad.datatype, quad.object));
        } else {
            out.push_str(&quad.object);
        }
        out.push('\n');
    }
    out
}

/// Makes a normalized IRI's trailing fragment start with the separator.
///
/// The placeholder boundary is the space introduced by [`normalize`]; a
/// fragment that already starts with the separator (or that is empty) is kept
/// as-is, a leading `/` or `.` is dropped in favor of the separator.
fn align_fragment(uri: &str, separator: &str) -> String {
    let Some(boundary) = uri.rfind(' ') else {
        return uri.to_string();
    };
    let fragment = &uri[boundary + 1..];
    if fragment.starts_with(separator) || fragment.is_empty() {
        uri.to_string()
    } else if fragment.starts_with('/') || fragment.starts_with('.') {
        format!("{} {separator}{}", &uri[..boundary], &uri[boundary + 2..])
    } else {
        format!("{} {separator}{}", &uri[..boundary], fragment)
    }
}

/// Replaces blank nodes by IRIs `<base_ns>_1`, `<base_ns>_2`, … in
/// first-appearance order, so two structurally identical stores normalize
/// identically whatever their internal labels were.
///
/// Pre-existing IRIs under `base_uri` that already end in an underscore
/// fragment get that underscore doubled, so relabeling can never collide
/// with them.
pub fn relabel_blank_nodes(
    store: &GraphStore,
    base_ns: &str,
    base_uri: &str,
) -> Result<GraphStore, CanonicalError> {
    let mut out = GraphStore::new();
    let mut labels: HashMap<String, usize> = HashMap::new();
    let mut counter = 1usize;
    let underscore_re = Regex::new(&format!(r"{}.?(_+[a-zA-Z0-9^_]+)$", base_uri))?;

    for quad in store.iter() {
        let subject = match &quad.subject {
            Term::BlankNode(id) => {
                let n = *labels.entry(id.clone()).or_insert_with(|| {
                    let next = counter;
                    counter += 1;
                    next
                });
                Term::Iri(format!("{base_ns}_{n}"))
            }
            Term::Iri(iri) => Term::Iri(double_underscore(iri, &underscore_re)),
            other => other.clone(),
        };
        let object = match &quad.object {
            Term::BlankNode(id) => {
                let n = *labels.entry(id.clone()).or_insert_with(|| {
                    let next = counter;
                    counter += 1;
                    next
                });
                Term::Iri(format!("{base_ns}_{n}"))
            }
            Term::Iri(iri) => Term::Iri(double_underscore(iri, &underscore_re)),
            other => other.clone(),
        };
        let graph = double_underscore(&quad.graph, &underscore_re);
        out.insert(Quad::new(subject, &quad.predicate, object, graph)?)?;
    }
    Ok(out)
}

fn double_underscore(iri: &str, re: &Regex) -> String {
    let Some(m) = re.captures(iri).and_then(|caps| caps.get(1)) else {
        return iri.to_string();
    };
    let mut out = iri[..iri.len() - m.as_str().len()].to_string();
    out.push_str(&m.as_str().replacen('_', "__", 1));
    out
}

/// Rewrites every occurrence of the old base namespace onto a new one.
///
/// Terms equal to the bare old namespace or old URI become exactly the new
/// URI; everything else gets a plain substring replacement. This is the
/// second half of placeholder substitution: after hashing, the temporary
/// namespace is rewritten to the trusty-bearing one.
pub fn rewrite_namespace(
    store: &GraphStore,
    old_ns: &str,
    old_uri: &str,
    new_ns: &str,
    new_uri: &str,
) -> Result<GraphStore, CanonicalError> {
    let old_ns = old_ns.strip_suffix('.').unwrap_or(old_ns);
    let mut out = GraphStore::new();
    for quad in store.iter() {
        let subject = rewrite_term(&quad.subject, old_ns, old_uri, new_ns, new_uri);
        let object = rewrite_term(&quad.object, old_ns, old_uri, new_ns, new_uri);
        let graph = quad.graph.replace(old_ns, new_ns);
        out.insert(Quad::new(subject, &quad.predicate, object, graph)?)?;
    }
    Ok(out)
}

fn rewrite_term(term: &Term, old_ns: &str, old_uri: &str, new_ns: &str, new_uri: &str) -> Term {
    match term {
        Term::Iri(iri) if iri == old_ns || iri == old_uri => Term::Iri(new_uri.to_string()),
        Term::Iri(iri) => Term::Iri(iri.replace(old_ns, new_ns)),
        other => other.clone(),
    }
}
