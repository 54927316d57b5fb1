use crate::keyword::keyword_enum;

keyword_enum! {
    #[derive(Default)]
    pub enum Page("page") {
        #[default]
        Home => "home",
        Courses => "courses" | "course-files",
        Books => "books",
        SourceCode => "source-code" | "cards" | "services",
    }
}

impl Page {
    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Courses => "Course Files",
            Page::Books => "Books",
            Page::SourceCode => "Source Code",
        }
    }
}

/// Current page and scroll position. Every page change starts at the top.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigator {
    current: Page,
    scroll_offset: usize,
}

impl Navigator {
    pub fn new(page: Page) -> Self {
        Self {
            current: page,
            scroll_offset: 0,
        }
    }

    pub fn current(&self) -> Page {
        self.current
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn navigate(&mut self, page: Page) {
        self.current = page;
        self.scroll_offset = 0;
    }

    pub fn scroll_down(&mut self, rows: usize) {
        self.scroll_offset = self.scroll_offset.saturating_add(rows);
    }

    pub fn scroll_up(&mut self, rows: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(rows);
    }

    /// Keeps the offset inside a list of `len` rows shown `page_size` at a time.
    pub fn clamp(&mut self, len: usize, page_size: usize) {
        let last_page_start = len.saturating_sub(1) / page_size.max(1) * page_size.max(1);
        self.scroll_offset = self.scroll_offset.min(last_page_start);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigating_resets_scroll() {
        let mut nav = Navigator::default();
        nav.navigate(Page::Books);
        nav.scroll_down(20);
        assert_eq!(nav.scroll_offset(), 20);

        nav.navigate(Page::Books);
        assert_eq!(nav.scroll_offset(), 0);

        nav.scroll_down(5);
        nav.navigate(Page::SourceCode);
        assert_eq!(nav.current(), Page::SourceCode);
        assert_eq!(nav.scroll_offset(), 0);
    }

    #[test]
    fn scroll_never_goes_negative() {
        let mut nav = Navigator::new(Page::Courses);
        nav.scroll_down(3);
        nav.scroll_up(10);
        assert_eq!(nav.scroll_offset(), 0);
    }

    #[test]
    fn clamp_stops_at_last_page() {
        let mut nav = Navigator::new(Page::Courses);
        nav.scroll_down(40);
        nav.clamp(10, 4);
        assert_eq!(nav.scroll_offset(), 8);

        nav.clamp(0, 4);
        assert_eq!(nav.scroll_offset(), 0);
    }

    #[test]
    fn page_aliases() {
        assert_eq!("cards".parse::<Page>().unwrap(), Page::SourceCode);
        assert_eq!(Page::SourceCode.to_string(), "source-code");
        assert!("about".parse::<Page>().is_err());
    }
}
