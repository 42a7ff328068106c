use serde::Serialize;

use trustypub_canonical::TrustyId;

/// Outcome of checking a nanopublication.
///
/// Well-formed-but-invalid content never raises an error: failures show up
/// as `false` fields here, with the reasons accumulated in `messages`.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    /// Identifier embedded in the nanopublication, if finalized.
    pub trusty: Option<TrustyId>,
    /// Whether the identifier recomputed from current content matches the
    /// embedded one.
    pub integrity: bool,
    /// Whether signature quads are present.
    pub signed: bool,
    /// Whether the embedded signature validates against the declared public
    /// key; `None` when the object is unsigned.
    pub authenticity: Option<bool>,
    /// Reasons for any failed field.
    pub messages: Vec<String>,
}

impl ValidationReport {
    /// Whether every applicable check passed.
    pub fn is_valid(&self) -> bool {
        self.integrity && self.authenticity.unwrap_or(true)
    }
}
