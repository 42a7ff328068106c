//! Subcommand implementations.

pub mod check;
pub mod fetch;
pub mod keygen;
pub mod publish;
pub mod sign;

use std::fs;

use trustypub_core::{default_profile_path, Profile, ProfileBuilder};

/// Resolves key material from `--key`, `--profile`, or the default profile.
pub fn resolve_profile(
    key: Option<String>,
    profile: Option<String>,
) -> Result<Profile, Box<dyn std::error::Error>> {
    if let Some(key_path) = key {
        let private_key = fs::read_to_string(&key_path)
            .map_err(|e| format!("failed to read key file {key_path}: {e}"))?;
        return Ok(ProfileBuilder::new(private_key).build()?);
    }
    let path = match profile {
        Some(path) => path.into(),
        None => default_profile_path(),
    };
    Ok(ProfileBuilder::from_file(&path)
        .map_err(|e| format!("failed to load profile {}: {e}", path.display()))?)
}
