//! Store configuration

/// Value pre-filled in the link editor when an item has no link yet
pub const LINK_PLACEHOLDER: &str = "https://";

/// Storage keys for the persisted state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Key holding the serialized board
    pub data_key: String,
    /// Key holding the theme preference
    pub theme_key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_key: "myListManagerData".to_string(),
            theme_key: "theme".to_string(),
        }
    }
}
