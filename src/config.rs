use log::Level;

pub const FORM_SCRIPT_URL: &str = "https://rheicom.formstack.com/forms/js.php/video_data_licensing";
pub const FORM_PROVIDER_DOMAIN: &str = "formstack.com";
pub const FORM_MOUNT_ID: &str = "formstackForm";
// Marks script tags we injected ourselves.
pub const FORM_OWNER_TAG: &str = "datastream-form";

pub const VALUE_IMAGE_URL: &str = "https://images.unsplash.com/photo-1551288049-bebda4e38f71?ixlib=rb-4.0.3&auto=format&fit=crop&w=2070&q=80";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Where the hosted form comes from and where it gets mounted.
#[derive(Clone, Debug, PartialEq)]
pub struct EmbedConfig {
    pub script_url: String,
    pub provider_domain: String,
    pub mount_id: String,
    pub owner_tag: String,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            script_url: FORM_SCRIPT_URL.to_string(),
            provider_domain: FORM_PROVIDER_DOMAIN.to_string(),
            mount_id: FORM_MOUNT_ID.to_string(),
            owner_tag: FORM_OWNER_TAG.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_url_is_served_from_provider_domain() {
        let config = EmbedConfig::default();
        assert!(config.script_url.starts_with("https://"));
        assert!(config.script_url.contains(&config.provider_domain));
    }

    #[test]
    fn default_embed_config_uses_constants() {
        let config = EmbedConfig::default();
        assert_eq!(config.mount_id, "formstackForm");
        assert_eq!(config.owner_tag, FORM_OWNER_TAG);
    }
}
