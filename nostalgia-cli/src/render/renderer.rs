use super::theme::Sepia;
use crate::cli::Style;
use nostalgia_core::{
    Entry,
    render::{format_day_header, format_entry_block, format_entry_line, format_raw_entry},
};
use termimad::{
    MadSkin,
    crossterm::style::{Color, Stylize},
};

#[derive(Clone)]
pub struct RenderOptions {
    pub date_format: String,
    pub use_color: bool,
}

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(opts: RenderOptions) -> Self {
        Self {
            skin: Sepia::skin(),
            opts,
        }
    }

    pub fn print_md(&self, md: &str) {
        if self.opts.use_color {
            self.skin.print_text(md);
        } else {
            print!("{md}");
        }
    }

    pub fn print_info(&self, message: &str) {
        if self.opts.use_color {
            println!("{}", message.with(Sepia::FADED));
        } else {
            println!("{message}");
        }
    }

    pub fn print_entry_line(&self, entry: &Entry) {
        let line = format_entry_line(entry);
        if self.opts.use_color {
            // Color the date and weekday, leave the rest as is.
            let split = entry.date().len() + 1 + entry.weekday().len();
            let (head, tail) = line.split_at(split.min(line.len()));
            println!("{}{}", head.with(Color::Cyan), tail);
        } else {
            println!("{line}");
        }
    }

    /// Prints all records of one day, numbered in write order.
    pub fn print_entries(&self, entries: &[Entry], style: Style) {
        match style {
            Style::Raw => {
                let blocks: Vec<String> = entries.iter().map(format_raw_entry).collect();
                print!("{}", blocks.join("\n"));
            }
            Style::Short => {
                for entry in entries {
                    self.print_entry_line(entry);
                }
            }
            Style::Long => {
                let Some(first) = entries.first() else {
                    return;
                };
                if let Some(date) = first.calendar_date() {
                    let header = format_day_header(
                        date,
                        first.weekday(),
                        entries.len(),
                        &self.opts.date_format,
                    );
                    self.print_md(&format!("{header}\n\n"));
                }
                for (i, entry) in entries.iter().enumerate() {
                    self.print_md(&format_entry_block(i + 1, entry));
                }
            }
        }
    }
}
