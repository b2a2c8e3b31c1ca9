use include_dir::{Dir, include_dir};
use minijinja::{AutoEscape, Environment, context};

use crate::domain::{AppError, AppParams};

static TEMPLATE_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

const DESKTOP_ENTRY_TEMPLATE: &str = "desktop_entry.desktop.j2";

fn load_template(name: &str) -> Result<&'static str, AppError> {
    TEMPLATE_DIR
        .get_file(name)
        .and_then(|file| file.contents_utf8())
        .ok_or_else(|| AppError::Template(format!("Embedded template '{}' not found", name)))
}

/// Render the freedesktop entry registering the packaged app.
pub fn render_desktop_entry(params: &AppParams) -> Result<String, AppError> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.set_auto_escape_callback(|_| AutoEscape::None);

    let source = load_template(DESKTOP_ENTRY_TEMPLATE)?;
    env.add_template(DESKTOP_ENTRY_TEMPLATE, source).map_err(|e| {
        AppError::Template(format!(
            "Failed to register template '{}': {}",
            DESKTOP_ENTRY_TEMPLATE, e
        ))
    })?;

    let template = env.get_template(DESKTOP_ENTRY_TEMPLATE).map_err(|e| {
        AppError::Template(format!("Failed to load template '{}': {}", DESKTOP_ENTRY_TEMPLATE, e))
    })?;

    let ctx = context! {
        package_name => params.package_name(),
        name_zh => &params.name_zh,
    };

    template.render(ctx).map_err(|e| {
        AppError::Template(format!("Failed to render template '{}': {}", DESKTOP_ENTRY_TEMPLATE, e))
    })
}
