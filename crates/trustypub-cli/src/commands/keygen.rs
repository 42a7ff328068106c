//! Keygen command implementation.

use std::fs;
use std::path::PathBuf;

use trustypub_core::{default_profile_path, generate_keys};

pub fn run(dir: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let dir = match dir {
        Some(dir) => PathBuf::from(dir),
        None => default_profile_path()
            .parent()
            .map(PathBuf::from)
            .ok_or("cannot resolve the default key directory")?,
    };
    fs::create_dir_all(&dir)?;

    let (private_key, public_key) = generate_keys()?;
    let key_path = dir.join("id_rsa");
    fs::write(&key_path, &private_key)?;
    fs::write(dir.join("id_rsa.pub"), &public_key)?;

    let profile_path = dir.join("profile.toml");
    if !profile_path.exists() {
        fs::write(
            &profile_path,
            format!(
                "private_key = \"{}\"\n# orcid_id = \"https://orcid.org/0000-0000-0000-0000\"\n# name = \"Your Name\"\n",
                key_path.display()
            ),
        )?;
    }

    println!("Keys written to {}", dir.display());
    println!("Profile: {}", profile_path.display());
    Ok(())
}
