/// Scroll position of a content block inside a fixed-size window.
///
/// Offsets never pass the point where the last row/column reaches the window edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    pub row: usize,
    pub col: usize,
    content_width: usize,
    content_height: usize,
    view_width: usize,
    view_height: usize,
}

impl Viewport {
    /// New content starts at the top-left corner.
    pub fn set_content(&mut self, width: usize, height: usize) {
        self.content_width = width;
        self.content_height = height;
        self.row = 0;
        self.col = 0;
    }

    pub fn resize_view(&mut self, width: usize, height: usize) {
        self.view_width = width;
        self.view_height = height;
        self.row = self.row.min(self.max_row());
        self.col = self.col.min(self.max_col());
    }

    pub fn view_size(&self) -> (usize, usize) {
        (self.view_width, self.view_height)
    }

    fn max_row(&self) -> usize {
        self.content_height.saturating_sub(self.view_height)
    }

    fn max_col(&self) -> usize {
        self.content_width.saturating_sub(self.view_width)
    }

    pub fn scroll_rows(&mut self, delta: isize) {
        self.row = (self.row as isize + delta).clamp(0, self.max_row() as isize) as usize;
    }

    pub fn scroll_cols(&mut self, delta: isize) {
        self.col = (self.col as isize + delta).clamp(0, self.max_col() as isize) as usize;
    }

    pub fn page_down(&mut self) {
        self.scroll_rows(self.view_height.max(1) as isize);
    }

    pub fn page_up(&mut self) {
        self.scroll_rows(-(self.view_height.max(1) as isize));
    }

    pub fn top(&mut self) {
        self.row = 0;
        self.col = 0;
    }

    pub fn bottom(&mut self) {
        self.row = self.max_row();
    }

    /// Index range of the content rows currently visible.
    pub fn visible_rows(&self) -> std::ops::Range<usize> {
        self.row..(self.row + self.view_height).min(self.content_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sized(width: usize, height: usize) -> Viewport {
        let mut v = Viewport::default();
        v.resize_view(width, height);
        v
    }

    fn viewport() -> Viewport {
        let mut v = sized(10, 5);
        v.set_content(30, 12);
        v
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut v = viewport();
        v.scroll_rows(-3);
        assert_eq!(v.row, 0);
        v.scroll_rows(100);
        assert_eq!(v.row, 7);
        v.scroll_cols(100);
        assert_eq!(v.col, 20);
    }

    #[test]
    fn test_paging() {
        let mut v = viewport();
        v.page_down();
        assert_eq!(v.row, 5);
        v.page_down();
        assert_eq!(v.row, 7);
        v.page_up();
        assert_eq!(v.row, 2);
        v.bottom();
        assert_eq!(v.visible_rows(), 7..12);
        v.top();
        assert_eq!((v.row, v.col), (0, 0));
    }

    #[test]
    fn test_small_content_never_scrolls() {
        let mut v = sized(80, 24);
        v.set_content(10, 3);
        v.page_down();
        v.scroll_cols(5);
        assert_eq!((v.row, v.col), (0, 0));
        assert_eq!(v.visible_rows(), 0..3);
    }

    #[test]
    fn test_new_content_resets_position() {
        let mut v = viewport();
        v.bottom();
        v.set_content(30, 40);
        assert_eq!(v.row, 0);
    }

    #[test]
    fn test_growing_view_reclamps() {
        let mut v = viewport();
        v.bottom();
        v.resize_view(10, 10);
        assert_eq!(v.row, 2);
    }
}
