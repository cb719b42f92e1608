//! Built-in check identifiers
//!
//! The registry is keyed by name so new checks can be added at runtime, but the
//! checks shipped with the tool are an enumerated set.

use serde::{Deserialize, Serialize};

/// Checks shipped with mesh-inspector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuiltinCheck {
    /// Triangle budget per object
    TriangleCount,
    /// Faces sharing all of their edges with another face
    LaminaFaces,
    /// Objects without any UV shell
    MissingUvShells,
    /// Required substrings in object names
    NamingConvention,
    /// Construction history beyond the creation node
    ConstructionHistory,
}

impl BuiltinCheck {
    /// Every built-in check, in registry order
    pub const ALL: [Self; 5] = [
        Self::TriangleCount,
        Self::LaminaFaces,
        Self::MissingUvShells,
        Self::NamingConvention,
        Self::ConstructionHistory,
    ];

    /// Registry name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::TriangleCount => "triangle_count",
            Self::LaminaFaces => "lamina_faces",
            Self::MissingUvShells => "missing_uv_shells",
            Self::NamingConvention => "naming_convention",
            Self::ConstructionHistory => "construction_history",
        }
    }

    /// One-line description shown in listings
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::TriangleCount => "Fails objects with more triangles than the configured maximum",
            Self::LaminaFaces => "Fails objects containing lamina faces (faces sharing all edges)",
            Self::MissingUvShells => "Fails objects without any UV shell",
            Self::NamingConvention => "Fails objects whose name lacks a required prefix",
            Self::ConstructionHistory => "Fails objects with construction history",
        }
    }

    /// Preset category the check belongs to by default
    #[must_use]
    pub const fn category(self) -> &'static str {
        match self {
            Self::TriangleCount | Self::LaminaFaces => "Geometry",
            Self::MissingUvShells => "UVs",
            Self::NamingConvention | Self::ConstructionHistory => "Scene",
        }
    }
}

impl std::fmt::Display for BuiltinCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for BuiltinCheck {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|check| check.name() == normalized)
            .ok_or_else(|| {
                let names: Vec<_> = Self::ALL.iter().map(|c| c.name()).collect();
                format!("Invalid check: {s}. Use: {}", names.join(", "))
            })
    }
}
