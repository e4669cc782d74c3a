use serde::{Deserialize, Serialize};

/// Usage limits of the workspace's cloud plan. Absent groups or fields mean
/// the plan does not limit them.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Limits {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integrations: Option<IntegrationsLimits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages: Option<MessagesLimits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<FilesLimits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teams: Option<TeamsLimits>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boards: Option<BoardsLimits>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct IntegrationsLimits {
    pub enabled: Option<i64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct MessagesLimits {
    pub history: Option<i64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct FilesLimits {
    pub total_storage: Option<i64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TeamsLimits {
    pub active: Option<i64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct BoardsLimits {
    pub cards: Option<i64>,
    pub views: Option<i64>,
}
