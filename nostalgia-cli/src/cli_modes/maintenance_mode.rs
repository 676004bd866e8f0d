use crate::render::Renderer;
use anyhow::Result;
use nostalgia_core::{Nostalgia, RECORD_SIZE};

pub fn count_mode(renderer: &Renderer, nostalgia: &Nostalgia) -> Result<()> {
    let count = nostalgia.store.record_count()?;
    renderer.print_info(&format!("{count} records in {}", nostalgia.store.path().display()));
    Ok(())
}

pub fn repair_mode(renderer: &Renderer, nostalgia: &Nostalgia) -> Result<()> {
    let removed = nostalgia.store.repair()?;
    if removed == 0 {
        renderer.print_info("Nothing to repair.");
    } else {
        renderer.print_info(&format!(
            "Removed {removed} bytes of a torn record (records are {RECORD_SIZE} bytes)."
        ));
    }
    Ok(())
}
