// ── Run configuration ──
//
// Built once from command-line flags and the config layer, then passed
// by reference to every stage. Nothing downstream mutates it.

use std::path::PathBuf;

use secrecy::SecretString;
use strum::{Display, EnumString};

/// Direction of the migration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Mode {
    /// Read switch ports from the organization into the transfer file.
    #[default]
    Export,
    /// Replay the transfer file onto the organization.
    Import,
}

/// Everything a migration run needs.
#[derive(Debug, Clone)]
pub struct MigrationConfig {
    pub api_key: SecretString,
    /// Organization display name, matched exactly.
    pub org_name: String,
    pub mode: Mode,
    pub file: PathBuf,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn mode_parses_exact_lowercase_names() {
        assert_eq!(Mode::from_str("export").unwrap(), Mode::Export);
        assert_eq!(Mode::from_str("import").unwrap(), Mode::Import);
        assert!(Mode::from_str("Import").is_err());
        assert!(Mode::from_str("replicate").is_err());
        assert!(Mode::from_str("").is_err());
    }

    #[test]
    fn mode_defaults_to_export() {
        assert_eq!(Mode::default(), Mode::Export);
        assert_eq!(Mode::Import.to_string(), "import");
    }
}
