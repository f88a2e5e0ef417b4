//! Tick and frame rate counter, shown in the top-right corner.

use std::time::Instant;

use color_eyre::eyre::Result;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::action::Action;
use crate::components::Component;
use crate::tui::Frame;

pub struct FpsCounter {
    app_start_time: Instant,
    app_frames: u32,
    app_fps: f64,
    render_start_time: Instant,
    render_frames: u32,
    render_fps: f64,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl FpsCounter {
    pub fn new() -> Self {
        Self {
            app_start_time: Instant::now(),
            app_frames: 0,
            app_fps: 0.0,
            render_start_time: Instant::now(),
            render_frames: 0,
            render_fps: 0.0,
        }
    }

    fn app_tick(&mut self) {
        self.app_frames += 1;
        let now = Instant::now();
        let elapsed = (now - self.app_start_time).as_secs_f64();
        if elapsed >= 1.0 {
            self.app_fps = f64::from(self.app_frames) / elapsed;
            self.app_start_time = now;
            self.app_frames = 0;
        }
    }

    fn render_tick(&mut self) {
        self.render_frames += 1;
        let now = Instant::now();
        let elapsed = (now - self.render_start_time).as_secs_f64();
        if elapsed >= 1.0 {
            self.render_fps = f64::from(self.render_frames) / elapsed;
            self.render_start_time = now;
            self.render_frames = 0;
        }
    }
}

impl Component for FpsCounter {
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::Tick => self.app_tick(),
            Action::Render => self.render_tick(),
            _ => {}
        };
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        let top = Rect::new(area.x, area.y, area.width, 1);

        let message = format!(
            "{:.2} ticks/sec, {:.2} FPS",
            self.app_fps, self.render_fps
        );
        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Right);
        f.render_widget(paragraph, top);

        Ok(())
    }
}
