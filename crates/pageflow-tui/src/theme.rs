use ratatui::style::Color;

/// Fixed palette: neon accents over a deep blue-black background.
pub struct NightDrive;

impl NightDrive {
    // Backgrounds
    pub const BG0: Color = Color::Rgb(0x0f, 0x0f, 0x23);
    pub const BG1: Color = Color::Rgb(0x16, 0x16, 0x2e);
    pub const BG2: Color = Color::Rgb(0x1f, 0x1f, 0x3a);

    // Foregrounds
    pub const FG0: Color = Color::Rgb(0xe8, 0xe8, 0xf0);
    pub const FG1: Color = Color::Rgb(0xc0, 0xc0, 0xd8);
    pub const GREY1: Color = Color::Rgb(0x6a, 0x6a, 0x8a);
    pub const GREY2: Color = Color::Rgb(0x48, 0x48, 0x68);

    // Accents
    pub const CYAN: Color = Color::Rgb(0x00, 0xff, 0xff);
    pub const MAGENTA: Color = Color::Rgb(0xff, 0x00, 0xff);
    pub const GREEN: Color = Color::Rgb(0x43, 0xe9, 0x7b);
    pub const RED: Color = Color::Rgb(0xff, 0x6b, 0x6b);

    pub const ACCENT: Color = Self::CYAN;
}
