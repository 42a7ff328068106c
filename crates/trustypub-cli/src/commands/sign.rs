//! Sign command implementation.

use std::fs;
use std::path::Path;

use trustypub_core::Nanopub;

use super::resolve_profile;

pub fn run(
    file: String,
    key: Option<String>,
    profile: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let profile = resolve_profile(key, profile)?;
    let rdf = fs::read_to_string(&file)?;

    let signed = Nanopub::new(&rdf)?.sign(&profile)?;
    let identity = signed
        .info()
        .trusty
        .clone()
        .ok_or("signing did not produce an identity")?;

    let path = Path::new(&file);
    let parent = path.parent().unwrap_or_else(|| Path::new(""));
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| format!("cannot derive an output name from {file}"))?;
    let signed_path = parent.join(format!("signed.{file_name}"));
    fs::write(&signed_path, signed.rdf()?)?;

    println!("Signed: {}", identity);
    println!("Stored: {}", signed_path.display());
    Ok(())
}
