use std::{collections::HashMap, fs};

#[derive(Debug, Clone)]
pub struct Settings {
    pub server_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:8787/api".into(),
        }
    }
}

/// Defaults, overlaid by an optional `blogctl.toml` in the working
/// directory, overlaid by `BLOGCTL_SERVER_URL`.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("blogctl.toml") {
        apply_file_overrides(&mut settings, &raw);
    }

    if let Ok(v) = std::env::var("BLOGCTL_SERVER_URL") {
        settings.server_url = v;
    }

    settings
}

fn apply_file_overrides(settings: &mut Settings, raw: &str) {
    if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(raw) {
        if let Some(v) = file_cfg.get("server_url") {
            settings.server_url = v.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_override_replaces_the_default() {
        let mut settings = Settings::default();
        apply_file_overrides(&mut settings, "server_url = \"http://example.net/api\"\n");
        assert_eq!(settings.server_url, "http://example.net/api");
    }

    #[test]
    fn unknown_keys_and_malformed_toml_are_ignored() {
        let mut settings = Settings::default();
        apply_file_overrides(&mut settings, "retries = \"3\"\n");
        apply_file_overrides(&mut settings, "not toml at all [");
        assert_eq!(settings.server_url, Settings::default().server_url);
    }
}
