use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct PluginMetaResource {
    pub extension_type: String,
    pub name: String,
    pub plugin_type: String,
    pub title: String,
    pub version: String,
}
