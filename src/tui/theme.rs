use ratatui::style::Color;

// Brand colors (amber on near-black)
pub const AMBER: Color = Color::Rgb(245, 158, 11);       // #F59E0B
pub const AMBER_DARK: Color = Color::Rgb(217, 119, 6);   // #D97706
pub const AMBER_DIM: Color = Color::Rgb(120, 75, 20);

// UI colors
pub const TEXT_WHITE: Color = Color::Rgb(255, 255, 255); // #FFFFFF
pub const TEXT_BODY: Color = Color::Rgb(161, 161, 170);  // zinc-400
pub const TEXT_DIM: Color = Color::Rgb(113, 113, 122);   // zinc-500
pub const BORDER: Color = Color::Rgb(63, 63, 70);        // zinc-700
pub const PANEL: Color = Color::Rgb(24, 24, 27);         // zinc-900
pub const BACKGROUND: Color = Color::Rgb(8, 8, 8);
