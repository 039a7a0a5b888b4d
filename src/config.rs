use dioxus::prelude::*;
use serde::Deserialize;

const DEFAULT_BASE_PATH: &str = "/";
const CONFIG_FILE: &str = "config.json";
const FALLBACK_CONFIG_FILE: &str = "assets/config.json";

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RuntimeConfig {
    /// Prefix for every static asset reference. Used verbatim by the media resolver.
    #[serde(rename = "basePath", default)]
    pub base_path: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            base_path: DEFAULT_BASE_PATH.to_string(),
        }
    }
}

impl RuntimeConfig {
    /// Config used when none could be loaded: assets resolve against the deploy root.
    pub fn for_deploy_base(deploy_base: Option<&str>) -> Self {
        Self {
            base_path: site_root(deploy_base),
        }
    }

    pub fn from_json(text: &str, deploy_base: Option<&str>) -> Result<Self, String> {
        let config: RuntimeConfig =
            serde_json::from_str(text).map_err(|err| format!("config decode failed: {err}"))?;
        Ok(config.normalized(deploy_base))
    }

    /// Empty base paths fall back to the deploy root.
    pub fn normalized(mut self, deploy_base: Option<&str>) -> Self {
        if self.base_path.trim().is_empty() {
            self.base_path = site_root(deploy_base);
        }
        self
    }
}

/// Path prefix the bundle was built for, without slashes (`IHC-pagina-web`).
pub fn deploy_base() -> Option<String> {
    dioxus::cli_config::base_path()
        .map(|base| base.trim_matches('/').to_string())
        .filter(|base| !base.is_empty())
}

/// `/` or `/{deploy_base}/`.
pub fn site_root(deploy_base: Option<&str>) -> String {
    match deploy_base
        .map(|base| base.trim_matches('/'))
        .filter(|base| !base.is_empty())
    {
        Some(base) => format!("/{base}/"),
        None => DEFAULT_BASE_PATH.to_string(),
    }
}

/// Locations tried for the runtime config, in order.
pub fn config_urls(deploy_base: Option<&str>) -> [String; 2] {
    let root = site_root(deploy_base);
    [
        format!("{root}{CONFIG_FILE}"),
        format!("{root}{FALLBACK_CONFIG_FILE}"),
    ]
}

/// Resolves to the loaded config, or to the deploy-root default when none is reachable.
pub fn use_runtime_config() -> Resource<RuntimeConfig> {
    use_resource(|| async move {
        let deploy_base = deploy_base();
        match fetch_runtime_config(deploy_base.as_deref()).await {
            Ok(config) => {
                tracing::debug!("config: base path {}", config.base_path);
                config
            }
            Err(message) => {
                let config = RuntimeConfig::for_deploy_base(deploy_base.as_deref());
                tracing::warn!("config: {message}; using base path {}", config.base_path);
                config
            }
        }
    })
}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config(deploy_base: Option<&str>) -> Result<RuntimeConfig, String> {
    let [primary, fallback] = config_urls(deploy_base);
    match fetch_config_from(&primary, deploy_base).await {
        Ok(config) => Ok(config),
        Err(_) => fetch_config_from(&fallback, deploy_base).await,
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch_config_from(url: &str, deploy_base: Option<&str>) -> Result<RuntimeConfig, String> {
    let response = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|err| format!("config fetch failed: {err}"))?;
    if !response.ok() {
        return Err(format!("config fetch failed: {url} status {}", response.status()));
    }
    let text = response
        .text()
        .await
        .map_err(|err| format!("config fetch failed: {err}"))?;
    RuntimeConfig::from_json(&text, deploy_base)
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_runtime_config(deploy_base: Option<&str>) -> Result<RuntimeConfig, String> {
    let base_path = std::env::var("NEXTZONE_BASE_PATH")
        .or_else(|_| std::env::var("BASE_URL"))
        .unwrap_or_default();
    Ok(RuntimeConfig { base_path }.normalized(deploy_base))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decodes_base_path() {
        let config = RuntimeConfig::from_json(r#"{"basePath": "/IHC-pagina-web/"}"#, None).unwrap();
        assert_eq!(config.base_path, "/IHC-pagina-web/");
    }

    #[test]
    fn missing_base_path_defaults_to_root() {
        let config = RuntimeConfig::from_json("{}", None).unwrap();
        assert_eq!(config, RuntimeConfig::default());
    }

    #[test]
    fn blank_base_path_defaults_to_deploy_root() {
        let config = RuntimeConfig::from_json(r#"{"basePath": "  "}"#, Some("IHC-pagina-web")).unwrap();
        assert_eq!(config.base_path, "/IHC-pagina-web/");
    }

    #[test]
    fn reports_decode_errors() {
        let err = RuntimeConfig::from_json("not json", None).unwrap_err();
        assert!(err.starts_with("config decode failed"));
    }

    #[test]
    fn config_is_fetched_under_the_deploy_base() {
        assert_eq!(
            config_urls(Some("IHC-pagina-web")),
            [
                "/IHC-pagina-web/config.json".to_string(),
                "/IHC-pagina-web/assets/config.json".to_string(),
            ]
        );
        assert_eq!(
            config_urls(None),
            ["/config.json".to_string(), "/assets/config.json".to_string()]
        );
    }

    #[test]
    fn unreachable_config_falls_back_to_deploy_root() {
        assert_eq!(
            RuntimeConfig::for_deploy_base(Some("/IHC-pagina-web/")).base_path,
            "/IHC-pagina-web/"
        );
        assert_eq!(RuntimeConfig::for_deploy_base(Some("")), RuntimeConfig::default());
        assert_eq!(RuntimeConfig::for_deploy_base(None), RuntimeConfig::default());
    }
}
