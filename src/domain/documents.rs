//! JSON configuration documents and the field-level mutations applied to them.

use serde_json::{Map, Value};

use super::{AppError, IconPolicy, PlatformTarget};

/// One JSON document together with the project-relative path it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigDocument {
    pub path: String,
    pub value: Value,
}

impl ConfigDocument {
    pub fn parse(path: impl Into<String>, content: &str) -> Result<Self, AppError> {
        let path = path.into();
        let value = serde_json::from_str(content)
            .map_err(|e| AppError::JsonParse { path: path.clone(), details: e.to_string() })?;
        Ok(Self { path, value })
    }

    /// Pretty JSON with two-space indentation and no trailing newline.
    pub fn to_pretty_json(&self) -> Result<String, AppError> {
        serde_json::to_string_pretty(&self.value)
            .map_err(|e| AppError::JsonParse { path: self.path.clone(), details: e.to_string() })
    }

    /// Walk `keys` from the root, creating empty objects for missing keys.
    fn object_at_mut(&mut self, keys: &[&str]) -> Result<&mut Map<String, Value>, AppError> {
        let path = &self.path;
        let mut current = self
            .value
            .as_object_mut()
            .ok_or_else(|| AppError::malformed(path.as_str(), "root is not a JSON object"))?;

        for (depth, key) in keys.iter().enumerate() {
            let entry =
                current.entry(key.to_string()).or_insert_with(|| Value::Object(Map::new()));
            current = entry.as_object_mut().ok_or_else(|| {
                AppError::malformed(
                    path.as_str(),
                    format!("'{}' is not a JSON object", keys[..=depth].join(".")),
                )
            })?;
        }

        Ok(current)
    }

    /// Set the URL of the first window in the packaging document.
    pub fn set_window_url(&mut self, url: &str) -> Result<(), AppError> {
        let window = self
            .value
            .get_mut("windows")
            .and_then(Value::as_array_mut)
            .and_then(|windows| windows.first_mut())
            .and_then(Value::as_object_mut)
            .ok_or_else(|| AppError::malformed(self.path.as_str(), "missing 'windows[0]' object"))?;
        window.insert("url".to_string(), Value::from(url));
        Ok(())
    }

    pub fn set_product_name(&mut self, name: &str) -> Result<(), AppError> {
        self.object_at_mut(&[])?.insert("productName".to_string(), Value::from(name));
        Ok(())
    }

    pub fn set_identifier(&mut self, identifier: &str) -> Result<(), AppError> {
        self.object_at_mut(&[])?.insert("identifier".to_string(), Value::from(identifier));
        Ok(())
    }

    /// Assign `bundle.icon` if `policy` allows it. Returns whether the list was written.
    pub fn set_bundle_icons(
        &mut self,
        icons: &[String],
        policy: IconPolicy,
        explicit_icon: bool,
    ) -> Result<bool, AppError> {
        let bundle = self.object_at_mut(&["bundle"])?;
        let has_existing = match bundle.get("icon") {
            Some(Value::Array(list)) => !list.is_empty(),
            Some(Value::Null) | None => false,
            Some(_) => true,
        };

        if !policy.should_assign(has_existing, explicit_icon) {
            return Ok(false);
        }
        bundle.insert("icon".to_string(), Value::from(icons.to_vec()));
        Ok(true)
    }

    pub fn set_bundle_resources(&mut self, resources: &[String]) -> Result<(), AppError> {
        self.object_at_mut(&["bundle"])?
            .insert("resources".to_string(), Value::from(resources.to_vec()));
        Ok(())
    }

    /// Replace `bundle.linux.deb.files` with the single given mapping.
    pub fn reset_deb_files(&mut self, install_path: &str, asset_path: &str) -> Result<(), AppError> {
        let mut files = Map::new();
        files.insert(install_path.to_string(), Value::from(asset_path));
        self.object_at_mut(&["bundle", "linux", "deb"])?
            .insert("files".to_string(), Value::Object(files));
        Ok(())
    }

    /// Remove the fields addressed by JSON pointers. Absent fields are ignored.
    pub fn strip_fields(&mut self, pointers: &[String]) {
        for pointer in pointers {
            let Some((parent, last)) = pointer.rsplit_once('/') else {
                continue;
            };
            let key = last.replace("~1", "/").replace("~0", "~");
            if let Some(object) = self.value.pointer_mut(parent).and_then(Value::as_object_mut)
                && object.remove(&key).is_some()
            {
                tracing::debug!("Stripped {} from {}", pointer, self.path);
            }
        }
    }
}

/// The five documents a run loads, mutates, and writes back.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigDocuments {
    pub pake: ConfigDocument,
    pub tauri: ConfigDocument,
    pub linux: ConfigDocument,
    pub macos: ConfigDocument,
    pub windows: ConfigDocument,
}

impl ConfigDocuments {
    pub fn overlay(&self, target: PlatformTarget) -> &ConfigDocument {
        match target {
            PlatformTarget::Linux => &self.linux,
            PlatformTarget::MacOs => &self.macos,
            PlatformTarget::Windows => &self.windows,
        }
    }

    pub fn overlay_mut(&mut self, target: PlatformTarget) -> &mut ConfigDocument {
        match target {
            PlatformTarget::Linux => &mut self.linux,
            PlatformTarget::MacOs => &mut self.macos,
            PlatformTarget::Windows => &mut self.windows,
        }
    }

    /// Documents in write order: packaging, base app, the selected overlay,
    /// then the remaining overlays in Linux, macOS, Windows order.
    pub fn write_order(&self, selected: PlatformTarget) -> Vec<&ConfigDocument> {
        let mut order = vec![&self.pake, &self.tauri, self.overlay(selected)];
        order.extend(
            PlatformTarget::ALL
                .into_iter()
                .filter(|target| *target != selected)
                .map(|target| self.overlay(target)),
        );
        order
    }
}
