use crate::config::{CONFIG_FILE_NAME, DEFAULT_CONFIG_TOML};
use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub fn init_config(force: bool) -> Result<()> {
    let path = init_config_in(Path::new("."), force)?;
    println!("Created {} configuration file", path.display());
    Ok(())
}

/// Write the default configuration into `dir`, returning the file path.
pub fn init_config_in(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(&config_path, DEFAULT_CONFIG_TOML)?;
    log::debug!("Wrote default configuration to {}", config_path.display());

    Ok(config_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config_from;
    use crate::config::RiskRatingConfig;
    use tempfile::TempDir;

    #[test]
    fn writes_loadable_default_config() {
        let dir = TempDir::new().unwrap();
        let path = init_config_in(dir.path(), false).unwrap();

        assert!(path.exists());
        assert_eq!(load_config_from(dir.path()), RiskRatingConfig::default());
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        let existing = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&existing, "[output]\nprecision = 1\n").unwrap();

        let err = init_config_in(dir.path(), false).unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert_eq!(
            std::fs::read_to_string(&existing).unwrap(),
            "[output]\nprecision = 1\n"
        );

        init_config_in(dir.path(), true).unwrap();
        assert_eq!(
            std::fs::read_to_string(&existing).unwrap(),
            DEFAULT_CONFIG_TOML
        );
    }
}
