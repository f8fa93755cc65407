/// Build-time settings, baked in by Trunk from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub login_url: Option<&'static str>,
    pub requires_auth: bool,
    pub support_email: &'static str,
}

pub const DEFAULT_SUPPORT_EMAIL: &str = "support@vroomie.app";

impl AppConfig {
    pub fn from_build_env() -> Self {
        Self::from_parts(
            option_env!("VROOMIE_LOGIN_URL"),
            option_env!("VROOMIE_REQUIRES_AUTH"),
            option_env!("VROOMIE_SUPPORT_EMAIL"),
        )
    }

    fn from_parts(
        login_url: Option<&'static str>,
        requires_auth: Option<&'static str>,
        support_email: Option<&'static str>,
    ) -> Self {
        Self {
            login_url: login_url.map(str::trim).filter(|u| !u.is_empty()),
            requires_auth: requires_auth.is_some_and(parse_flag),
            support_email: support_email
                .map(str::trim)
                .filter(|e| !e.is_empty())
                .unwrap_or(DEFAULT_SUPPORT_EMAIL),
        }
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_env_means_public_site() {
        let cfg = AppConfig::from_parts(None, None, None);
        assert_eq!(cfg.login_url, None);
        assert!(!cfg.requires_auth);
        assert_eq!(cfg.support_email, DEFAULT_SUPPORT_EMAIL);
    }

    #[test]
    fn flags_accept_the_usual_spellings() {
        for raw in ["1", "true", "TRUE", " yes ", "on"] {
            assert!(AppConfig::from_parts(None, Some(raw), None).requires_auth, "{raw}");
        }
        for raw in ["0", "false", "", "nope"] {
            assert!(!AppConfig::from_parts(None, Some(raw), None).requires_auth, "{raw}");
        }
    }

    #[test]
    fn blank_values_are_ignored() {
        let cfg = AppConfig::from_parts(Some("  "), None, Some(""));
        assert_eq!(cfg.login_url, None);
        assert_eq!(cfg.support_email, DEFAULT_SUPPORT_EMAIL);
    }
}
