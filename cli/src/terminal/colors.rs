use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 94, g: 196, b: 255 };
pub const SEPARATOR: Color = Color::TrueColor { r: 110, g: 110, b: 110 };
pub const TEXT_DEFAULT: Color = Color::TrueColor { r: 220, g: 220, b: 220 };
pub const RECORD: Color = Color::TrueColor { r: 255, g: 95, b: 95 };
