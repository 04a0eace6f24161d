use serde::Serialize;

pub const OTLRW_EXTENSION_TYPE: &str = "OTLRW";
pub const OTLRW_PLUGIN_NAME: &str = "ExternalDataSource-OTLRW";
pub const EXTERNAL_DATA_SOURCE_PLUGIN_TYPE: &str = "ExternalDataSource";

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ExtensionInfo {
    #[serde(rename = "type")]
    pub extension_type: &'static str,
}

/// Metadata the dashboard platform reads when registering the plugin.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct PluginRegistrationMeta {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub plugin_type: &'static str,
    pub title: &'static str,
    pub version: &'static str,
}

impl ExtensionInfo {
    pub fn otlrw() -> Self {
        Self {
            extension_type: OTLRW_EXTENSION_TYPE,
        }
    }
}

impl PluginRegistrationMeta {
    pub fn otlrw() -> Self {
        Self {
            name: OTLRW_PLUGIN_NAME,
            plugin_type: EXTERNAL_DATA_SOURCE_PLUGIN_TYPE,
            title: "OTL read/write data source",
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}
