pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// Credentials for the email relay. All three are required to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayCredentials {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayConfig {
    Configured(RelayCredentials),
    Unconfigured,
}

impl RelayConfig {
    pub fn credentials(&self) -> Option<&RelayCredentials> {
        match self {
            RelayConfig::Configured(c) => Some(c),
            RelayConfig::Unconfigured => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub api_base_url: String,
    pub contact_email: Option<String>,
    pub relay: RelayConfig,
}

impl SiteConfig {
    /// Configuration baked in by `build.rs`.
    pub fn from_build_env() -> Self {
        Self::from_lookup(|key| {
            let value = match key {
                "PORTFOLIO_API_URL" => option_env!("PORTFOLIO_API_URL"),
                "EMAILJS_SERVICE_ID" => option_env!("EMAILJS_SERVICE_ID"),
                "EMAILJS_TEMPLATE_ID" => option_env!("EMAILJS_TEMPLATE_ID"),
                "EMAILJS_PUBLIC_KEY" => option_env!("EMAILJS_PUBLIC_KEY"),
                "CONTACT_EMAIL" => option_env!("CONTACT_EMAIL"),
                _ => None,
            };
            value.map(str::to_string)
        })
    }

    /// Builds the config from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let relay = match (
            get("EMAILJS_SERVICE_ID"),
            get("EMAILJS_TEMPLATE_ID"),
            get("EMAILJS_PUBLIC_KEY"),
        ) {
            (Some(service_id), Some(template_id), Some(public_key)) => {
                RelayConfig::Configured(RelayCredentials {
                    service_id,
                    template_id,
                    public_key,
                })
            }
            _ => RelayConfig::Unconfigured,
        };

        Self {
            api_base_url: get("PORTFOLIO_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            contact_email: get("CONTACT_EMAIL"),
            relay,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
        assert_eq!(config.contact_email, None);
        assert_eq!(config.relay, RelayConfig::Unconfigured);
    }

    #[test]
    fn test_relay_configured() {
        let config = SiteConfig::from_lookup(lookup(&[
            ("EMAILJS_SERVICE_ID", "service_1"),
            ("EMAILJS_TEMPLATE_ID", "template_1"),
            ("EMAILJS_PUBLIC_KEY", "pk"),
            ("PORTFOLIO_API_URL", "https://api.example.com/api"),
        ]));
        let creds = config.relay.credentials().expect("relay should be configured");
        assert_eq!(creds.service_id, "service_1");
        assert_eq!(creds.template_id, "template_1");
        assert_eq!(creds.public_key, "pk");
        assert_eq!(config.api_base_url, "https://api.example.com/api");
    }

    #[test]
    fn test_any_blank_relay_value_is_unconfigured() {
        let config = SiteConfig::from_lookup(lookup(&[
            ("EMAILJS_SERVICE_ID", "service_1"),
            ("EMAILJS_TEMPLATE_ID", "  "),
            ("EMAILJS_PUBLIC_KEY", "pk"),
        ]));
        assert_eq!(config.relay, RelayConfig::Unconfigured);

        let config = SiteConfig::from_lookup(lookup(&[
            ("EMAILJS_SERVICE_ID", "service_1"),
            ("EMAILJS_TEMPLATE_ID", "template_1"),
        ]));
        assert!(config.relay.credentials().is_none());
    }
}
