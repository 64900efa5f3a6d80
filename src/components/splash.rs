//! Splash screen component
//!
//! Displays the SecureVendor mark briefly before transitioning to the main app.

use crate::action::Action;
use crate::component::Component;
use crate::model::ui::colors;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};

/// Splash screen component
pub struct SplashComponent {
    /// When the splash screen was shown
    start_time: Option<Instant>,
    /// Duration to show splash before auto-advancing
    duration: Duration,
}

impl Default for SplashComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl SplashComponent {
    pub fn new() -> Self {
        Self {
            start_time: None,
            duration: Duration::from_millis(1500),
        }
    }

    /// Check if splash duration has elapsed
    pub fn is_complete(&self) -> bool {
        self.start_time
            .map(|t| t.elapsed() >= self.duration)
            .unwrap_or(false)
    }

    fn shield() -> [&'static str; 7] {
        [
            "   ▄▄▄▄▄▄▄▄▄   ",
            "  █████████████  ",
            "  ████  ▀  ████  ",
            "  ████ ▄█▄ ████  ",
            "   ███▄▄▄▄▄███   ",
            "     ▀█████▀     ",
            "       ▀▀▀       ",
        ]
    }
}

impl Component for SplashComponent {
    fn init(&mut self) -> Result<()> {
        self.start_time = Some(Instant::now());
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // Any key press skips the splash screen
        match key.code {
            KeyCode::Char('q') => Ok(Some(Action::ForceQuit)),
            _ => Ok(Some(Action::SplashComplete)),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action == Action::Tick && self.is_complete() {
            return Ok(Some(Action::SplashComplete));
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let bg = Color::Rgb(15, 23, 42);

        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(Style::default().bg(bg)), area);

        let shield = Self::shield();
        let shield_height = shield.len() as u16;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(area.height.saturating_sub(shield_height + 4) / 2),
                Constraint::Length(shield_height),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        let logo: Vec<Line> = shield
            .iter()
            .map(|row| Line::from(Span::styled(*row, Style::default().fg(colors::BLUE).bg(bg))))
            .collect();
        frame.render_widget(Paragraph::new(logo).alignment(Alignment::Center), chunks[1]);

        let title = Line::from(vec![
            Span::styled(
                "Secure",
                Style::default().fg(Color::White).bg(bg).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "Vendor",
                Style::default().fg(colors::BLUE).bg(bg).add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(Paragraph::new(title).alignment(Alignment::Center), chunks[3]);

        let subtitle = Line::from(Span::styled(
            "Vendor security at a glance",
            Style::default().fg(Color::DarkGray).bg(bg),
        ));
        frame.render_widget(Paragraph::new(subtitle).alignment(Alignment::Center), chunks[4]);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_not_complete_before_init() {
        let mut splash = SplashComponent::new();
        assert!(!splash.is_complete());
        assert_eq!(splash.update(Action::Tick).unwrap(), None);
    }

    #[test]
    fn test_completes_after_duration() {
        let mut splash = SplashComponent {
            start_time: None,
            duration: Duration::ZERO,
        };
        splash.init().unwrap();
        assert_eq!(splash.update(Action::Tick).unwrap(), Some(Action::SplashComplete));
    }

    #[test]
    fn test_keys_skip_or_quit() {
        let mut splash = SplashComponent::new();
        let key = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);
        assert_eq!(splash.handle_key_event(key('q')).unwrap(), Some(Action::ForceQuit));
        assert_eq!(splash.handle_key_event(key(' ')).unwrap(), Some(Action::SplashComplete));
    }
}
