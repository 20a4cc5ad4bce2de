use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::BrightCyan;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const IPV4_ADDR: Color = Color::TrueColor {
    r: 120,
    g: 200,
    b: 255,
};
pub const IPV6_ADDR: Color = Color::TrueColor {
    r: 190,
    g: 150,
    b: 255,
};
pub const NUMBER: Color = Color::Yellow;
pub const NULL: Color = Color::Red;
