//! Publish command implementation.

use std::fs;
use std::time::Duration;

use trustypub_core::Nanopub;
use trustypub_registry::{publish_signed, HttpRegistry, TEST_SERVER};

use super::resolve_profile;

pub fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

pub async fn run(
    file: String,
    key: Option<String>,
    profile: Option<String>,
    server: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let rdf = fs::read_to_string(&file)?;
    let np = Nanopub::new(&rdf)?;

    let profile = if np.is_signed() {
        None
    } else {
        Some(resolve_profile(key, profile)?)
    };
    let server = server.unwrap_or_else(|| TEST_SERVER.to_string());
    let registry = HttpRegistry::new(&server, default_timeout())?;

    let (published, info) = publish_signed(&np, profile.as_ref(), &registry).await?;
    println!("Published: {}", published.info().uri);
    println!("Server: {}", info.server);
    println!("At: {}", info.published_at);
    Ok(())
}
