use std::collections::HashMap;
use std::fs;

#[derive(Debug)]
pub struct Settings {
    pub server_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:8080".into(),
        }
    }
}

/// Defaults, then `guestdesk.toml` in the working directory, then
/// environment overrides.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("guestdesk.toml") {
        apply_file(&mut settings, &raw);
    }

    if let Ok(v) = std::env::var("GUESTDESK_SERVER_URL") {
        settings.server_url = v;
    }
    if let Ok(v) = std::env::var("APP__SERVER_URL") {
        settings.server_url = v;
    }

    settings
}

fn apply_file(settings: &mut Settings, raw: &str) {
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
    fn file_value_overrides_the_default() {
        let mut settings = Settings::default();
        apply_file(&mut settings, "server_url = \"http://records.example:9000\"");
        assert_eq!(settings.server_url, "http://records.example:9000");
    }

    #[test]
    fn malformed_or_unrelated_file_keeps_the_default() {
        let mut settings = Settings::default();
        apply_file(&mut settings, "not valid toml ===");
        apply_file(&mut settings, "other_key = \"zzz\"");
        assert_eq!(settings.server_url, Settings::default().server_url);
    }
}
