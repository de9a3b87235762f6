//! Scroll-driven page chrome: active nav link and back-to-top visibility.

/// Anchor a nav link must point at for `section_id` to highlight it.
/// Sections without an id stand for the top of the page.
pub fn section_anchor(section_id: &str) -> String {
    if section_id.is_empty() {
        "#home".to_string()
    } else {
        format!("#{section_id}")
    }
}

/// The `href`s of the nav links, in document order.
#[derive(Clone, Debug, Default)]
pub struct NavLinks {
    hrefs: Vec<Option<String>>,
}

impl NavLinks {
    pub fn new(hrefs: Vec<Option<String>>) -> Self {
        Self { hrefs }
    }

    pub fn len(&self) -> usize {
        self.hrefs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hrefs.is_empty()
    }

    /// Per-link `active` flag once `section_id` scrolls into the band.
    pub fn activate(&self, section_id: &str) -> Vec<bool> {
        let anchor = section_anchor(section_id);
        self.hrefs
            .iter()
            .map(|h| h.as_deref() == Some(anchor.as_str()))
            .collect()
    }
}

/// Scroll offset (px) past which the back-to-top button shows.
pub const BACK_TO_TOP_AFTER_PX: f64 = 600.0;

#[inline]
pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_AFTER_PX
}
