//! Notebook scroll state
//!
//! Line-based vertical scrolling clamped to the content height. The offset
//! never exceeds `content_height - viewport_height`, so the last line of
//! content can always reach the bottom of the viewport but never scroll
//! past it.

/// Messages that can change the scroll state
pub enum Message {
    /// The view was scrolled up one line
    ScrolledUp,
    /// The view was scrolled down one line
    ScrolledDown,
    /// The view was scrolled to the first line
    ScrolledToTop,
    /// The view was scrolled to the last page
    ScrolledToBottom,
    /// Content or viewport dimensions changed (e.g. on resize)
    BoundsChanged {
        content_height: u16,
        viewport_height: u16,
    },
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Scroll {
    offset: u16,
    content_height: u16,
    viewport_height: u16,
}

impl Scroll {
    pub fn offset(&self) -> u16 {
        self.offset
    }

    fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::ScrolledUp => self.offset = self.offset.saturating_sub(1),
            Message::ScrolledDown => self.offset = (self.offset + 1).min(self.max_offset()),
            Message::ScrolledToTop => self.offset = 0,
            Message::ScrolledToBottom => self.offset = self.max_offset(),
            Message::BoundsChanged {
                content_height,
                viewport_height,
            } => {
                self.content_height = content_height;
                self.viewport_height = viewport_height;
                self.offset = self.offset.min(self.max_offset());
            }
        }
    }
}
