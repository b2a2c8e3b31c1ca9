//! Per-platform derived paths and bundle values.

use super::{AppParams, PlatformTarget, paths};

/// Icon file that must exist before bundling, with the file copied in when it does not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSpec {
    pub path: String,
    pub default_path: String,
}

/// Linux desktop entry location and its deb install mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopEntrySpec {
    /// Project-relative path the entry is written to.
    pub path: String,
    /// Absolute install destination inside the deb package.
    pub install_path: String,
    /// Source path relative to `src-tauri/`, as the bundler expects it.
    pub asset_path: String,
}

/// Everything platform-specific the generator needs for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformProfile {
    pub target: PlatformTarget,
    pub icon: IconSpec,
    pub hd_icon: Option<IconSpec>,
    /// Value for the overlay's `bundle.icon`.
    pub bundle_icons: Vec<String>,
    /// Value for the overlay's `bundle.resources`.
    pub resources: Option<Vec<String>>,
    pub desktop_entry: Option<DesktopEntrySpec>,
}

impl PlatformProfile {
    pub fn for_target(target: PlatformTarget, params: &AppParams) -> Self {
        let name = &params.name;

        match target {
            PlatformTarget::Linux => {
                let icon = format!("png/{}_512.png", name);
                let entry_file = format!("{}.desktop", params.package_name());
                let asset_path = format!("assets/{}", entry_file);
                Self {
                    target,
                    icon: IconSpec {
                        path: paths::in_tauri_dir(&icon),
                        default_path: paths::in_tauri_dir("png/icon_512.png"),
                    },
                    hd_icon: None,
                    bundle_icons: vec![icon],
                    resources: None,
                    desktop_entry: Some(DesktopEntrySpec {
                        path: paths::in_tauri_dir(&asset_path),
                        install_path: format!("/usr/share/applications/{}", entry_file),
                        asset_path,
                    }),
                }
            }
            PlatformTarget::MacOs => {
                let icon = format!("icons/{}.icns", name);
                Self {
                    target,
                    icon: IconSpec {
                        path: paths::in_tauri_dir(&icon),
                        default_path: paths::in_tauri_dir("icons/icon.icns"),
                    },
                    hd_icon: None,
                    bundle_icons: vec![icon],
                    resources: None,
                    desktop_entry: None,
                }
            }
            PlatformTarget::Windows => {
                let icon = format!("png/{}_32.ico", name);
                let hd_icon = format!("png/{}_256.ico", name);
                Self {
                    target,
                    icon: IconSpec {
                        path: paths::in_tauri_dir(&icon),
                        default_path: paths::in_tauri_dir("png/icon_32.ico"),
                    },
                    hd_icon: Some(IconSpec {
                        path: paths::in_tauri_dir(&hd_icon),
                        default_path: paths::in_tauri_dir("png/icon_256.ico"),
                    }),
                    bundle_icons: vec![hd_icon, icon.clone()],
                    resources: Some(vec![icon]),
                    desktop_entry: None,
                }
            }
        }
    }

    /// Icons to resolve, in order: high-resolution first, then the primary icon.
    pub fn icons(&self) -> impl Iterator<Item = &IconSpec> {
        self.hd_icon.iter().chain(std::iter::once(&self.icon))
    }
}
