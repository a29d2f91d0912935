use ratatui::widgets::ScrollbarState;

const PAGE_SIZE: u16 = 10;

#[derive(Default)]
pub struct Scroll {
    content_length: u16,
    viewport_height: u16,
    pub position: u16,
    pub scrollbar_state: ScrollbarState,
}

impl Scroll {
    pub fn up(&mut self) {
        self.position = self.position.saturating_sub(1);
        self.scrollbar_state.prev();
    }

    pub fn down(&mut self) {
        self.position = self.position.saturating_add(1).min(self.max_position());
        self.scrollbar_state.next();
    }

    pub fn up_page(&mut self) {
        for _ in 0..PAGE_SIZE {
            self.up();
        }
    }

    pub fn down_page(&mut self) {
        for _ in 0..PAGE_SIZE {
            self.down();
        }
    }

    pub fn jump_to_last(&mut self) {
        self.position = self.max_position();
        self.scrollbar_state.last();
    }

    pub fn sync(&mut self, content_length: u16, viewport_height: u16) {
        self.content_length = content_length;
        self.viewport_height = viewport_height;
        self.scrollbar_state = self
            .scrollbar_state
            .content_length(content_length)
            .viewport_content_length(viewport_height);
    }

    fn max_position(&self) -> u16 {
        if self.content_length <= self.viewport_height {
            return 0;
        }

        return self.content_length - self.viewport_height;
    }
}
