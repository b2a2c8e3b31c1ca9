use std::fmt;

/// Host operating system as seen by the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    Linux,
    MacOs,
    Windows,
    /// Any other OS name; resolved through [`PlatformTarget::fallback_for_unknown`].
    Unknown(String),
}

/// Platform whose overlay and profile are actually applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformTarget {
    Linux,
    MacOs,
    Windows,
}

impl Platform {
    /// Detect the platform this binary was compiled for.
    pub fn detect() -> Self {
        Self::parse(std::env::consts::OS)
    }

    /// Parse an OS name. Accepts Rust target names and Node-style names.
    pub fn parse(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "linux" => Platform::Linux,
            "macos" | "darwin" => Platform::MacOs,
            "windows" | "win32" => Platform::Windows,
            _ => Platform::Unknown(name.to_string()),
        }
    }

    /// Resolve to the target whose settings are applied.
    pub fn target(&self) -> PlatformTarget {
        match self {
            Platform::Linux => PlatformTarget::Linux,
            Platform::MacOs => PlatformTarget::MacOs,
            Platform::Windows => PlatformTarget::Windows,
            Platform::Unknown(_) => PlatformTarget::fallback_for_unknown(),
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Platform::Unknown(_))
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Unknown(name) => write!(f, "{}", name),
            known => write!(f, "{}", known.target().label()),
        }
    }
}

impl PlatformTarget {
    /// All targets in persist order.
    pub const ALL: [PlatformTarget; 3] =
        [PlatformTarget::Linux, PlatformTarget::MacOs, PlatformTarget::Windows];

    /// Unrecognized hosts degrade to the macOS settings.
    pub const fn fallback_for_unknown() -> Self {
        PlatformTarget::MacOs
    }

    pub fn label(self) -> &'static str {
        match self {
            PlatformTarget::Linux => "linux",
            PlatformTarget::MacOs => "macos",
            PlatformTarget::Windows => "windows",
        }
    }
}
