//! Build targets and the target groups that own scripting defines.
//!
//! Scripting defines are stored per target group, not per target: every
//! standalone desktop target shares the `Standalone` symbol set.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A concrete build target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildTarget {
    StandaloneWindows,
    StandaloneWindows64,
    StandaloneOSX,
    StandaloneLinux64,
    Android,
    #[serde(rename = "iOS")]
    Ios,
    WebGL,
    #[serde(rename = "tvOS")]
    TvOs,
    PS4,
    PS5,
    XboxOne,
    Switch,
}

/// The group a target's scripting defines are stored under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetGroup {
    Standalone,
    Android,
    #[serde(rename = "iOS")]
    Ios,
    WebGL,
    #[serde(rename = "tvOS")]
    TvOs,
    PS4,
    PS5,
    XboxOne,
    Switch,
}

impl BuildTarget {
    /// All known targets.
    pub const ALL: [BuildTarget; 12] = [
        BuildTarget::StandaloneWindows,
        BuildTarget::StandaloneWindows64,
        BuildTarget::StandaloneOSX,
        BuildTarget::StandaloneLinux64,
        BuildTarget::Android,
        BuildTarget::Ios,
        BuildTarget::WebGL,
        BuildTarget::TvOs,
        BuildTarget::PS4,
        BuildTarget::PS5,
        BuildTarget::XboxOne,
        BuildTarget::Switch,
    ];

    /// Map the target to its target group.
    pub fn group(&self) -> TargetGroup {
        match self {
            BuildTarget::StandaloneWindows
            | BuildTarget::StandaloneWindows64
            | BuildTarget::StandaloneOSX
            | BuildTarget::StandaloneLinux64 => TargetGroup::Standalone,
            BuildTarget::Android => TargetGroup::Android,
            BuildTarget::Ios => TargetGroup::Ios,
            BuildTarget::WebGL => TargetGroup::WebGL,
            BuildTarget::TvOs => TargetGroup::TvOs,
            BuildTarget::PS4 => TargetGroup::PS4,
            BuildTarget::PS5 => TargetGroup::PS5,
            BuildTarget::XboxOne => TargetGroup::XboxOne,
            BuildTarget::Switch => TargetGroup::Switch,
        }
    }

    /// Get the canonical name.
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildTarget::StandaloneWindows => "StandaloneWindows",
            BuildTarget::StandaloneWindows64 => "StandaloneWindows64",
            BuildTarget::StandaloneOSX => "StandaloneOSX",
            BuildTarget::StandaloneLinux64 => "StandaloneLinux64",
            BuildTarget::Android => "Android",
            BuildTarget::Ios => "iOS",
            BuildTarget::WebGL => "WebGL",
            BuildTarget::TvOs => "tvOS",
            BuildTarget::PS4 => "PS4",
            BuildTarget::PS5 => "PS5",
            BuildTarget::XboxOne => "XboxOne",
            BuildTarget::Switch => "Switch",
        }
    }

    /// Target matching the host platform, used when none is configured.
    pub fn host() -> Self {
        if cfg!(target_os = "windows") {
            BuildTarget::StandaloneWindows64
        } else if cfg!(target_os = "macos") {
            BuildTarget::StandaloneOSX
        } else {
            BuildTarget::StandaloneLinux64
        }
    }
}

impl Default for BuildTarget {
    fn default() -> Self {
        BuildTarget::host()
    }
}

impl TargetGroup {
    /// Get the canonical name, also used as the key in the symbol store.
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetGroup::Standalone => "Standalone",
            TargetGroup::Android => "Android",
            TargetGroup::Ios => "iOS",
            TargetGroup::WebGL => "WebGL",
            TargetGroup::TvOs => "tvOS",
            TargetGroup::PS4 => "PS4",
            TargetGroup::PS5 => "PS5",
            TargetGroup::XboxOne => "XboxOne",
            TargetGroup::Switch => "Switch",
        }
    }
}

impl fmt::Display for BuildTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TargetGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BuildTarget::ALL
            .iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| {
                let known: Vec<&str> = BuildTarget::ALL.iter().map(|t| t.as_str()).collect();
                format!(
                    "unknown build target '{}'; expected one of: {}",
                    s,
                    known.join(", ")
                )
            })
    }
}
