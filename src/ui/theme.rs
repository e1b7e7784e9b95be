use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub warning: Color,   // Yellow
    pub keyword: Color,
    pub number: Color,
    pub symbol: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub bar_bg: Color,
    pub type_name: Color, // Cyan for type names
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),
    secondary: Color::Rgb(250, 179, 135),
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    warning: Color::Rgb(249, 226, 175),
    keyword: Color::Rgb(137, 180, 250),        // Blue for keywords
    number: Color::Rgb(250, 179, 135),         // Orange for numbers
    symbol: Color::Rgb(137, 180, 250),         // Brackets and '='
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    bar_bg: Color::Rgb(50, 50, 70),
    type_name: Color::Rgb(148, 226, 213),
};
