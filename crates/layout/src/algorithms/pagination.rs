use crate::PositionedElement;

/// Tracks the vertical cursor and splits emitted elements into pages.
///
/// `y` grows downward from the top of the page. Advancing past
/// `low_threshold` schedules a break: the next call to [`PageCursor::line_y`]
/// closes the page and restarts at `continuation_top`. Breaking lazily means
/// a trailing advance never produces an empty page.
#[derive(Debug)]
pub struct PageCursor {
    pages: Vec<Vec<PositionedElement>>,
    y: f32,
    low_threshold: f32,
    continuation_top: f32,
}

impl PageCursor {
    pub fn new(start_y: f32, low_threshold: f32, continuation_top: f32) -> Self {
        Self {
            pages: vec![Vec::new()],
            y: start_y,
            low_threshold,
            continuation_top,
        }
    }

    /// Baseline for the next line, breaking the page first if needed.
    pub fn line_y(&mut self) -> f32 {
        if self.y > self.low_threshold {
            self.break_page();
        }
        self.y
    }

    pub fn advance(&mut self, dy: f32) {
        self.y += dy;
    }

    pub fn break_page(&mut self) {
        log::debug!("Page {} full, continuing on a new page", self.pages.len());
        self.pages.push(Vec::new());
        self.y = self.continuation_top;
    }

    pub fn push(&mut self, element: PositionedElement) {
        // `pages` is never empty: it starts with one page and only grows.
        if let Some(page) = self.pages.last_mut() {
            page.push(element);
        }
    }

    pub fn page_index(&self) -> usize {
        self.pages.len() - 1
    }

    pub fn finish(self) -> Vec<Vec<PositionedElement>> {
        self.pages
    }
}
