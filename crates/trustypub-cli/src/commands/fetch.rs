//! Fetch command implementation.

use trustypub_registry::{HttpRegistry, Registry, TEST_SERVER};

use super::publish::default_timeout;

pub async fn run(
    identity: String,
    server: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let server = server.unwrap_or_else(|| TEST_SERVER.to_string());
    let registry = HttpRegistry::new(&server, default_timeout())?;

    let np = registry.fetch(&identity).await?;
    println!("{}", np.rdf()?);
    Ok(())
}
