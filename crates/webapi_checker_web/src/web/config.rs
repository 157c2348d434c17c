use webapi_checker::config::ProbeConfig;
use webapi_checker::error::ConfigError;

/// Inline `<script type="application/json">` holding the deployment config.
const CONFIG_ELEMENT_ID: &str = "webapi-checker-config";

/// Runs before logging is installed, so problems are returned, not logged.
pub(super) fn load_config() -> Result<ProbeConfig, ConfigError> {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match raw {
        Some(raw) => ProbeConfig::try_from_json_str(&raw),
        None => Ok(ProbeConfig::default()),
    }
}
