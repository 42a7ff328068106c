use tracing::debug;

use trustypub_core::{default_profile_path, Nanopub, Profile, ProfileBuilder, SignError};

use crate::{PublishedInfo, Registry, RegistryError};

/// Signs the nanopublication if it is not finalized yet, then hands it to
/// the registry.
///
/// When no profile is supplied, the default profile
/// (`~/.trustypub/profile.toml`) is loaded; this is the anonymous/testing
/// publication path. Returns the published (possibly freshly signed)
/// instance together with the registry's acknowledgement.
pub async fn publish_signed(
    np: &Nanopub,
    profile: Option<&Profile>,
    registry: &impl Registry,
) -> Result<(Nanopub, PublishedInfo), RegistryError> {
    let mut finalized = if np.info().trusty.is_some() {
        np.clone()
    } else {
        let default_profile;
        let profile = match profile {
            Some(profile) => profile,
            None => {
                let path = default_profile_path();
                debug!(path = %path.display(), "loading default profile");
                default_profile = ProfileBuilder::from_file(&path).map_err(|e| {
                    RegistryError::Sign(SignError::MissingProfile(format!(
                        "no profile given and the default one could not be loaded: {e}"
                    )))
                })?;
                &default_profile
            }
        };
        np.sign(profile)?
    };

    let info = registry.publish(&finalized).await?;
    finalized.mark_published(info.published_at.clone());
    Ok((finalized, info))
}
