use termimad::{
    Alignment, MadSkin,
    crossterm::style::{Attribute, Color},
};

/// Warm, faded palette.
pub struct Sepia;

impl Sepia {
    pub fn skin() -> MadSkin {
        let mut skin = MadSkin::default();

        skin.paragraph.set_fg(Sepia::PAPER);
        skin.bold.set_fg(Sepia::PAPER);
        skin.italic.set_fg(Sepia::FADED);

        skin.headers[0].set_fg(Sepia::RUST);
        skin.headers[0].add_attr(Attribute::Bold);
        skin.headers[0].align = Alignment::Left;

        skin.headers[1].set_fg(Sepia::AMBER);
        skin.headers[1].add_attr(Attribute::Bold);
        skin.headers[1].align = Alignment::Left;

        skin.table.set_fg(Sepia::FADED);
        skin.bullet.set_fg(Sepia::RUST);
        skin.quote_mark.set_fg(Sepia::FADED);
        skin.inline_code.set_fg(Sepia::OLIVE);
        skin.code_block.set_fg(Sepia::AMBER);

        skin
    }

    pub const PAPER: Color = Color::Rgb {
        r: 0xE8,
        g: 0xDC,
        b: 0xC4,
    }; // #E8DCC4
    pub const FADED: Color = Color::Rgb {
        r: 0x9C,
        g: 0x8B,
        b: 0x73,
    }; // #9C8B73
    pub const RUST: Color = Color::Rgb {
        r: 0xC2,
        g: 0x6B,
        b: 0x3F,
    }; // #C26B3F
    pub const AMBER: Color = Color::Rgb {
        r: 0xD9,
        g: 0xA4,
        b: 0x41,
    }; // #D9A441
    pub const OLIVE: Color = Color::Rgb {
        r: 0x9A,
        g: 0xA2,
        b: 0x5B,
    }; // #9AA25B
}
