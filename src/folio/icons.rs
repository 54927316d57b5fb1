//! Icons as a closed set.
//!
//! Every icon the catalogs reference is a variant of [`Icon`] and maps to a terminal
//! glyph at compile time, so there is no "icon not found" case to handle.

use crate::keyword::keyword_enum;

keyword_enum! {
    pub enum Icon("icon") {
        Star => "star",
        StarHalf => "star-half",
        StarEmpty => "star-empty",
        FilePdf => "file-pdf",
        FileWord => "file-word",
        FileExcel => "file-excel",
        Book => "book",
        BookOpen => "book-open",
        GraduationCap => "graduation-cap",
        Code => "code",
        Palette => "palette",
        Mobile => "mobile",
        Rocket => "rocket",
        LaptopCode => "laptop-code",
        ChartLine => "chart-line",
        Server => "server",
        Cloud => "cloud",
        Brain => "brain",
        Home => "home",
        Download => "download",
        Search => "search",
        Info => "info",
        Sun => "sun",
        Moon => "moon",
        Bolt => "bolt",
    }
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Star => "★",
            Icon::StarHalf => "⯨",
            Icon::StarEmpty => "☆",
            Icon::FilePdf => "📕",
            Icon::FileWord => "📘",
            Icon::FileExcel => "📗",
            Icon::Book => "📚",
            Icon::BookOpen => "📖",
            Icon::GraduationCap => "🎓",
            Icon::Code => "⌨",
            Icon::Palette => "🎨",
            Icon::Mobile => "📱",
            Icon::Rocket => "🚀",
            Icon::LaptopCode => "💻",
            Icon::ChartLine => "📈",
            Icon::Server => "🖧",
            Icon::Cloud => "☁",
            Icon::Brain => "🧠",
            Icon::Home => "⌂",
            Icon::Download => "⤓",
            Icon::Search => "⌕",
            Icon::Info => "ℹ",
            Icon::Sun => "☀",
            Icon::Moon => "☾",
            Icon::Bolt => "⚡",
        }
    }
}
