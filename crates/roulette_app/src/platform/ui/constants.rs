use ratatui::style::Color;

pub const TITLE: &str = " 🎰 Topic Roulette ";
pub const TAGLINE: &str = "Spin the roulette to pick a topic!";
pub const SPINNING_PLACEHOLDER: &str = "Spinning...";

pub const ACCENT: Color = Color::Rgb(255, 140, 60);
pub const HIGHLIGHT: Color = Color::Rgb(255, 220, 80);
pub const RESULT: Color = Color::Rgb(255, 255, 255);
pub const MUTED: Color = Color::Rgb(120, 120, 140);
pub const DANGER: Color = Color::Rgb(240, 90, 90);
pub const BACKGROUND: Color = Color::Rgb(15, 15, 25);

pub const MANAGER_WIDTH: u16 = 60;
pub const MANAGER_HEIGHT: u16 = 22;
