use std::fmt;

use url::Url;

use crate::config::AppConfig;

pub const TOKEN_KEY: &str = "vroomie_access_token";
const TOKEN_PARAM: &str = "access_token";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    MissingLoginUrl,
    InvalidLoginUrl(url::ParseError),
    InvalidHref(url::ParseError),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::MissingLoginUrl => {
                write!(f, "auth is required but VROOMIE_LOGIN_URL was not set at build time")
            }
            AuthError::InvalidLoginUrl(e) => write!(f, "invalid login url: {e}"),
            AuthError::InvalidHref(e) => write!(f, "invalid page url: {e}"),
        }
    }
}

impl std::error::Error for AuthError {}

/// Splits an `access_token` query parameter off `href`.
///
/// Returns the token and, when one was present, the URL without it.
pub fn take_access_token(href: &str) -> Result<(Option<String>, Option<Url>), AuthError> {
    let mut url = Url::parse(href).map_err(AuthError::InvalidHref)?;

    let token = url
        .query_pairs()
        .find(|(k, _)| k == TOKEN_PARAM)
        .map(|(_, v)| v.into_owned())
        .filter(|t| !t.is_empty());

    if token.is_none() {
        return Ok((None, None));
    }

    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| k != TOKEN_PARAM)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    if kept.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut().clear().extend_pairs(kept);
    }

    Ok((token, Some(url)))
}

/// Where to send the visitor, if anywhere.
pub fn login_redirect_url(
    config: &AppConfig,
    href: &str,
    has_token: bool,
) -> Result<Option<Url>, AuthError> {
    if !config.requires_auth || has_token {
        return Ok(None);
    }

    let login = config.login_url.ok_or(AuthError::MissingLoginUrl)?;
    let mut login = Url::parse(login).map_err(AuthError::InvalidLoginUrl)?;
    let current = Url::parse(href).map_err(AuthError::InvalidHref)?;

    if current.origin() == login.origin() && current.path() == login.path() {
        return Ok(None);
    }

    login.query_pairs_mut().append_pair("from_url", href);
    Ok(Some(login))
}

/// Runs the start-up session check without holding up the first render.
#[cfg(feature = "web")]
pub fn maybe_redirect_to_login() {
    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = check_session(&AppConfig::from_build_env()) {
            leptos::logging::error!("login redirect check failed: {e:#}");
        }
    });
}

#[cfg(feature = "web")]
fn check_session(config: &AppConfig) -> anyhow::Result<()> {
    use anyhow::Context;
    use wasm_bindgen::JsValue;

    let js = |e: JsValue| anyhow::anyhow!("{e:?}");

    let window = web_sys::window().context("no window")?;
    let location = window.location();
    let href = location.href().map_err(js)?;
    let storage = window.local_storage().map_err(js)?;

    let (token, cleaned) = take_access_token(&href)?;

    if let Some(token) = &token {
        if let Some(storage) = &storage {
            storage.set_item(TOKEN_KEY, token).map_err(js)?;
        }
        if let Some(clean) = &cleaned {
            window
                .history()
                .map_err(js)?
                .replace_state_with_url(&JsValue::NULL, "", Some(clean.as_str()))
                .map_err(js)?;
        }
    }

    let stored = storage
        .as_ref()
        .and_then(|s| s.get_item(TOKEN_KEY).ok().flatten())
        .is_some();

    let current = cleaned.map(String::from).unwrap_or(href);

    if let Some(target) = login_redirect_url(config, &current, token.is_some() || stored)? {
        leptos::logging::log!("no session, redirecting to {}", target);
        location.set_href(target.as_str()).map_err(js)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guarded(login: &'static str) -> AppConfig {
        AppConfig {
            login_url: Some(login),
            requires_auth: true,
            support_email: "support@vroomie.app",
        }
    }

    #[test]
    fn public_site_never_redirects() {
        let cfg = AppConfig {
            requires_auth: false,
            ..guarded("https://auth.vroomie.app/login")
        };
        assert_eq!(login_redirect_url(&cfg, "https://vroomie.app/CarOps", false), Ok(None));
    }

    #[test]
    fn existing_session_stays_put() {
        let cfg = guarded("https://auth.vroomie.app/login");
        assert_eq!(login_redirect_url(&cfg, "https://vroomie.app/CarOps", true), Ok(None));
    }

    #[test]
    fn anonymous_visitor_goes_to_login_with_return_url() {
        let cfg = guarded("https://auth.vroomie.app/login");
        let target = login_redirect_url(&cfg, "https://vroomie.app/CarOps?x=1", false)
            .unwrap()
            .unwrap();

        assert_eq!(target.host_str(), Some("auth.vroomie.app"));
        assert_eq!(target.path(), "/login");
        let from: Vec<_> = target.query_pairs().filter(|(k, _)| k == "from_url").collect();
        assert_eq!(from.len(), 1);
        assert_eq!(from[0].1, "https://vroomie.app/CarOps?x=1");
    }

    #[test]
    fn login_page_does_not_redirect_to_itself() {
        let cfg = guarded("https://vroomie.app/login");
        assert_eq!(
            login_redirect_url(&cfg, "https://vroomie.app/login?from_url=x", false),
            Ok(None)
        );
    }

    #[test]
    fn bad_configuration_is_reported() {
        let mut cfg = guarded("not a url");
        assert!(matches!(
            login_redirect_url(&cfg, "https://vroomie.app/", false),
            Err(AuthError::InvalidLoginUrl(_))
        ));

        cfg.login_url = None;
        assert_eq!(
            login_redirect_url(&cfg, "https://vroomie.app/", false),
            Err(AuthError::MissingLoginUrl)
        );
    }

    #[test]
    fn token_is_lifted_out_of_the_url() {
        let (token, clean) =
            take_access_token("https://vroomie.app/CarOps?access_token=abc&tab=2").unwrap();
        assert_eq!(token.as_deref(), Some("abc"));
        assert_eq!(clean.unwrap().as_str(), "https://vroomie.app/CarOps?tab=2");

        let (token, clean) = take_access_token("https://vroomie.app/?access_token=abc").unwrap();
        assert_eq!(token.as_deref(), Some("abc"));
        assert_eq!(clean.unwrap().as_str(), "https://vroomie.app/");
    }

    #[test]
    fn url_without_token_is_left_alone() {
        assert_eq!(take_access_token("https://vroomie.app/CarOps?tab=2"), Ok((None, None)));
        assert_eq!(take_access_token("https://vroomie.app/?access_token="), Ok((None, None)));
    }
}
