// ============================================================================
// Module Metadata
// Version, authorship and the exported symbol list
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Crate version, taken from Cargo.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate author.
pub const AUTHOR: &str = "Your Name";

/// Author contact address.
pub const EMAIL: &str = "your.email@example.com";

/// Names of the public entry points.
pub const EXPORTS: [&str; 2] = ["greet", "Calculator"];

/// Snapshot of the module metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ModuleInfo {
    pub name: String,
    pub version: String,
    pub author: String,
    pub email: String,
    pub exports: Vec<String>,
}

#[cfg(feature = "serde")]
impl ModuleInfo {
    /// Render as a JSON object.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Collect the module metadata.
pub fn module_info() -> ModuleInfo {
    ModuleInfo {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: VERSION.to_string(),
        author: AUTHOR.to_string(),
        email: EMAIL.to_string(),
        exports: EXPORTS.iter().map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_metadata_present() {
        assert!(!VERSION.is_empty());
        assert!(!AUTHOR.is_empty());
        assert!(EMAIL.contains('@'));
    }

    #[test]
    fn test_exports() {
        let exports: HashSet<&str> = EXPORTS.into_iter().collect();
        assert_eq!(exports, HashSet::from(["greet", "Calculator"]));
    }

    #[test]
    fn test_module_info() {
        let info = module_info();
        assert_eq!(info.name, "my-module");
        assert_eq!(info.version, VERSION);
        assert_eq!(info.exports, vec!["greet", "Calculator"]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_module_info_json() {
        let info = module_info();
        let json = info.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["author"], AUTHOR);
        assert_eq!(value["exports"][1], "Calculator");

        let back: ModuleInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, info);
    }
}
