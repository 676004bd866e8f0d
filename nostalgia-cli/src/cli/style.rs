use clap::ValueEnum;

/// How `view` prints the records it finds.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Style {
    /// Day header followed by every record with its full body.
    #[default]
    Long,
    /// One line per record.
    Short,
    /// `KEY:value` lines for scripts; no colors, no headers.
    Raw,
}
