//! "Know more" slideshow modal state: paging and swipe tracking.

#[cfg(test)]
#[path = "slideshow_test.rs"]
mod slideshow_test;

/// Number of slides under `/assets/knowmore/`.
pub const TOTAL_PAGES: u32 = 8;

/// Horizontal travel in CSS pixels that counts as a swipe.
pub const MIN_SWIPE_DISTANCE: f64 = 50.0;

/// Modal visibility, current 1-based page and in-progress touch.
#[derive(Clone, Debug, PartialEq)]
pub struct SlideshowState {
    pub open: bool,
    pub page: u32,
    touch_start: Option<f64>,
    touch_end: Option<f64>,
}

impl Default for SlideshowState {
    fn default() -> Self {
        Self { open: false, page: 1, touch_start: None, touch_end: None }
    }
}

impl SlideshowState {
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Hide the modal. The current page is kept for the next open.
    pub fn close(&mut self) {
        self.open = false;
    }

    #[must_use]
    pub fn can_next(&self) -> bool {
        self.page < TOTAL_PAGES
    }

    #[must_use]
    pub fn can_prev(&self) -> bool {
        self.page > 1
    }

    pub fn next(&mut self) {
        self.page = (self.page + 1).min(TOTAL_PAGES);
    }

    pub fn prev(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    #[must_use]
    pub fn image_src(&self) -> String {
        format!("/assets/knowmore/{}.jpg", self.page)
    }

    #[must_use]
    pub fn page_label(&self) -> String {
        format!("Page {} of {TOTAL_PAGES}", self.page)
    }

    pub fn touch_start(&mut self, x: f64) {
        self.touch_end = None;
        self.touch_start = Some(x);
    }

    pub fn touch_move(&mut self, x: f64) {
        self.touch_end = Some(x);
    }

    /// Finish a touch gesture, paging when it travelled far enough.
    ///
    /// A leftward swipe advances, a rightward swipe goes back. Touches that
    /// never moved are ignored.
    pub fn touch_end(&mut self) {
        let (Some(start), Some(end)) = (self.touch_start, self.touch_end) else {
            return;
        };
        let distance = start - end;
        if distance > MIN_SWIPE_DISTANCE && self.can_next() {
            self.next();
        } else if distance < -MIN_SWIPE_DISTANCE && self.can_prev() {
            self.prev();
        }
    }
}
