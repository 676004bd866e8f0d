use super::editor_utils::{create_editor_buffer, resolve_editor};
use crate::{cli::SaveArgs, render::Renderer};
use anyhow::Result;
use nostalgia_core::Nostalgia;
use tracing::debug;

pub fn save_mode(args: &SaveArgs, renderer: &Renderer, nostalgia: &Nostalgia) -> Result<()> {
    let content = if args.content.is_empty() {
        let editor = resolve_editor(&nostalgia.config.editor);
        debug!(editor = %editor, "no inline content, opening editor");
        let input = create_editor_buffer(&editor)?;
        let trimmed = input.trim();
        if trimmed.is_empty() {
            renderer.print_info("No entry to save, because no text was received.");
            return Ok(());
        }
        trimmed.to_string()
    } else {
        args.content.join(" ")
    };

    let entry = nostalgia.store.append(&args.weather, &content)?;

    if entry.content().len() < content.len() {
        renderer.print_info(&format!(
            "Content was cut to {} of {} bytes to fit one record.",
            entry.content().len(),
            content.len()
        ));
    }
    if entry.weather().len() < args.weather.len() {
        renderer.print_info(&format!("Weather was cut to \"{}\".", entry.weather()));
    }
    renderer.print_info(&format!(
        "Added new entry to {}",
        nostalgia.store.path().display()
    ));
    renderer.print_entry_line(&entry);
    Ok(())
}
