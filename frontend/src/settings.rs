use common::config::DashboardConfig;

/// Id of the optional `<script type="application/json">` block in `index.html`.
pub const CONFIG_ELEMENT_ID: &str = "dashboard-config";

/// Reads the embedded dashboard config, falling back to defaults.
///
/// Runs before the logger is installed, so problems go straight to the
/// console.
pub fn load() -> DashboardConfig {
    let json = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|e| e.text_content());

    let Some(json) = json.filter(|j| !j.trim().is_empty()) else {
        return DashboardConfig::default();
    };

    match DashboardConfig::from_json(&json) {
        Ok(config) => config,
        Err(err) => {
            gloo_console::warn!(format!("{}; using defaults", err));
            DashboardConfig::default()
        }
    }
}
