//! Rewrite the packaging configuration for one app.

use crate::adapters::assets::render_desktop_entry;
use crate::app::AppContext;
use crate::domain::{
    AppError, AppParams, ConfigDocument, ConfigDocuments, GeneratorConfig, Platform,
    PlatformProfile, PlatformTarget, paths,
};
use crate::ports::RepositoryFilesystem;

/// Options for a generator run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub platform: Platform,
    pub config: GeneratorConfig,
}

/// What a generator run changed.
#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    pub platform: Platform,
    pub target: PlatformTarget,
    /// Icon files created from their defaults.
    pub copied_icons: Vec<String>,
    /// Whether the selected overlay's `bundle.icon` was replaced.
    pub icons_assigned: bool,
    /// Files written, in write order.
    pub written: Vec<String>,
}

/// A text file produced alongside the JSON documents.
struct GeneratedFile {
    path: String,
    content: String,
}

/// Execute the generator against an already validated parameter set.
pub fn execute<F: RepositoryFilesystem>(
    ctx: &AppContext<F>,
    params: &AppParams,
    options: &GenerateOptions,
) -> Result<GenerateOutcome, AppError> {
    let repository = ctx.repository();

    let mut documents = load_documents(repository)?;
    apply_base(&mut documents, params)?;

    let target = resolve_target(&options.platform);
    let profile = PlatformProfile::for_target(target, params);

    let copied_icons = resolve_icons(repository, &profile)?;
    let (icons_assigned, desktop_entry) =
        apply_platform(&mut documents, &profile, params, &options.config)?;

    let written =
        persist(repository, &mut documents, target, &options.config.strip_fields, desktop_entry)?;

    Ok(GenerateOutcome {
        platform: options.platform.clone(),
        target,
        copied_icons,
        icons_assigned,
        written,
    })
}

fn load_document<F: RepositoryFilesystem>(
    repository: &F,
    path: String,
) -> Result<ConfigDocument, AppError> {
    let content = repository.read_file(&path)?;
    ConfigDocument::parse(path, &content)
}

/// Read all five documents. Nothing is written before every read succeeds.
pub fn load_documents<F: RepositoryFilesystem>(repository: &F) -> Result<ConfigDocuments, AppError> {
    Ok(ConfigDocuments {
        pake: load_document(repository, paths::pake_config())?,
        tauri: load_document(repository, paths::tauri_config())?,
        linux: load_document(repository, paths::overlay_config(PlatformTarget::Linux))?,
        macos: load_document(repository, paths::overlay_config(PlatformTarget::MacOs))?,
        windows: load_document(repository, paths::overlay_config(PlatformTarget::Windows))?,
    })
}

/// Apply the URL and display name to the base documents.
pub fn apply_base(documents: &mut ConfigDocuments, params: &AppParams) -> Result<(), AppError> {
    documents.pake.set_window_url(&params.url)?;
    documents.tauri.set_product_name(params.display_name())?;
    Ok(())
}

/// Pick the target whose settings are applied, warning on unsupported hosts.
pub fn resolve_target(platform: &Platform) -> PlatformTarget {
    let target = platform.target();
    if platform.is_unknown() {
        tracing::warn!("Unsupported platform: {}, using {} settings", platform, target.label());
    }
    target
}

/// Ensure `path` exists, copying `default_path` there when it does not.
///
/// Returns whether a copy was made. An existing file is never replaced.
pub fn ensure_icon<F: RepositoryFilesystem>(
    repository: &F,
    path: &str,
    default_path: &str,
) -> Result<bool, AppError> {
    if repository.file_exists(path) {
        return Ok(false);
    }
    tracing::warn!("Icon {} not found, using default icon {}", path, default_path);
    repository.copy_file(default_path, path)?;
    Ok(true)
}

fn resolve_icons<F: RepositoryFilesystem>(
    repository: &F,
    profile: &PlatformProfile,
) -> Result<Vec<String>, AppError> {
    let mut copied = Vec::new();
    for icon in profile.icons() {
        if ensure_icon(repository, &icon.path, &icon.default_path)? {
            copied.push(icon.path.clone());
        }
    }
    Ok(copied)
}

fn apply_platform(
    documents: &mut ConfigDocuments,
    profile: &PlatformProfile,
    params: &AppParams,
    config: &GeneratorConfig,
) -> Result<(bool, Option<GeneratedFile>), AppError> {
    let overlay = documents.overlay_mut(profile.target);

    let icons_assigned =
        overlay.set_bundle_icons(&profile.bundle_icons, config.icon_policy, params.explicit_icon)?;
    if !icons_assigned {
        tracing::info!(
            "Keeping existing bundle icons in {} ({} policy)",
            overlay.path,
            config.icon_policy
        );
    }
    overlay.set_identifier(&params.identifier())?;

    if let Some(resources) = &profile.resources {
        overlay.set_bundle_resources(resources)?;
    }

    let desktop_entry = match &profile.desktop_entry {
        Some(entry) => {
            overlay.reset_deb_files(&entry.install_path, &entry.asset_path)?;
            Some(GeneratedFile { path: entry.path.clone(), content: render_desktop_entry(params)? })
        }
        None => None,
    };

    Ok((icons_assigned, desktop_entry))
}

/// Write every document back, then the generated desktop entry if any.
///
/// There is no rollback: a failure leaves earlier files written.
fn persist<F: RepositoryFilesystem>(
    repository: &F,
    documents: &mut ConfigDocuments,
    selected: PlatformTarget,
    strip_fields: &[String],
    desktop_entry: Option<GeneratedFile>,
) -> Result<Vec<String>, AppError> {
    if !strip_fields.is_empty() {
        for target in PlatformTarget::ALL {
            documents.overlay_mut(target).strip_fields(strip_fields);
        }
    }

    let mut written = Vec::new();
    for document in documents.write_order(selected) {
        repository.write_file(&document.path, &document.to_pretty_json()?)?;
        written.push(document.path.clone());
    }

    if let Some(file) = desktop_entry {
        repository.write_file(&file.path, &file.content)?;
        written.push(file.path);
    }

    Ok(written)
}
