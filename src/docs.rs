//! Markdown reference pages for the plugins.
//!
//! Each page carries the plugin name, the accepted/generated data kinds, the
//! description and the plugin's help screen.

use log::info;
use std::path::{Path, PathBuf};

use crate::plugins::{catalog, PluginInfo};
use crate::types::Role;
use crate::utils::{create_output_directory, doc_file_name, write_text_file};

pub const INDEX_FILE: &str = "README.md";

/// Help screen of a plugin as plain text.
pub fn help_text(info: &PluginInfo) -> String {
    let mut command = info.command();
    command.render_help().to_string().trim_end().to_string()
}

/// The Markdown page of a single plugin.
pub fn render_markdown(info: &PluginInfo) -> String {
    let mut md = format!("# {}\n\n", info.name);
    let accepts: Vec<&str> = info.accepts.iter().map(|k| k.qualified_name()).collect();
    md.push_str(&format!("* accepts: {}\n", accepts.join(", ")));
    if info.role == Role::Filter {
        let generates: Vec<&str> = info.generates.iter().map(|k| k.qualified_name()).collect();
        md.push_str(&format!("* generates: {}\n", generates.join(", ")));
    }
    md.push_str(&format!("\n{}\n\n", info.description));
    md.push_str("```\n");
    md.push_str(&help_text(info));
    md.push_str("\n```\n");
    md
}

/// Index page linking all plugin pages, grouped by role.
pub fn render_index(plugins: &[PluginInfo]) -> String {
    let mut md = String::from("# Plugins\n");
    for (role, title) in [(Role::Filter, "Filters"), (Role::Writer, "Writers")] {
        md.push_str(&format!("\n## {}\n\n", title));
        for info in plugins.iter().filter(|p| p.role == role) {
            md.push_str(&format!(
                "* [{}]({}): {}\n",
                info.name,
                doc_file_name(info.name),
                info.description
            ));
        }
    }
    md
}

/// Writes one page per plugin plus the index into `output_dir`.
pub fn write_docs(output_dir: &Path) -> crate::error::Result<Vec<PathBuf>> {
    let output_dir = create_output_directory(output_dir)?;
    let plugins = catalog();
    let mut written = Vec::with_capacity(plugins.len() + 1);

    for plugin in &plugins {
        let path = output_dir.join(doc_file_name(plugin.name));
        write_text_file(&path, &render_markdown(plugin))?;
        written.push(path);
    }

    let index = output_dir.join(INDEX_FILE);
    write_text_file(&index, &render_index(&plugins))?;
    written.push(index);

    info!("Wrote {} documentation file(s) to {}", written.len(), output_dir.display());
    Ok(written)
}
