//! Analysis payloads. Each backend endpoint wraps its result in a one-field
//! envelope (`{"languages": {...}}`, `{"components": [...]}`, ...).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::LabelMap;

/// Language name -> line count.
pub type LanguagesMap = LabelMap<u64>;

/// Framework name -> detection confidence in `[0, 1]`.
pub type FrameworksMap = LabelMap<f64>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LanguageAnalysis {
    pub languages: LanguagesMap,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FrameworkAnalysis {
    pub frameworks: FrameworksMap,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct InfrastructureAnalysis {
    pub components: Vec<String>,
}

/// An HTTP route detected in the project's source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ApiEndpoint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub http_method: String,
    pub path: String,
    pub framework: String,
    pub language: String,
    pub source_file: String,
    #[serde(default)]
    pub source_symbol: Option<String>,
    pub confidence: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EndpointAnalysis {
    pub endpoints: Vec<ApiEndpoint>,
}

/// A dependency declared in one of the project's manifest files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Dependency {
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
    /// Package-manager family: `pypi`, `npm`, `cargo`, ...
    pub ecosystem: String,
    /// `runtime`, `dev`, `build`, ...
    pub scope: String,
    /// Manifest the dependency was read from, e.g. `package.json`.
    pub source_file: String,
}

impl Dependency {
    #[must_use]
    pub fn is_runtime(&self) -> bool {
        self.scope.eq_ignore_ascii_case("runtime")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DependencyAnalysis {
    pub dependencies: Vec<Dependency>,
}
