//! Shared transient message widget, auto-dismissed after three seconds.
//!
//! One implementation for every panel; errors are also logged when shown.

use std::time::{Duration, Instant};

use eframe::egui;

const DISMISS_AFTER: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

pub struct Toast {
    current: Option<(String, ToastKind, Instant)>,
}

impl Toast {
    pub fn new() -> Self {
        Self { current: None }
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.current = Some((message.into(), ToastKind::Success, Instant::now()));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!("{}", message);
        self.current = Some((message, ToastKind::Error, Instant::now()));
    }

    pub fn ui(&mut self, ui: &mut egui::Ui) {
        let Some((message, kind, shown_at)) = &self.current else {
            return;
        };

        if shown_at.elapsed() >= DISMISS_AFTER {
            self.current = None;
            return;
        }

        let color = match kind {
            ToastKind::Success => egui::Color32::from_rgb(60, 180, 75),
            ToastKind::Error => egui::Color32::from_rgb(220, 60, 60),
        };
        ui.label(egui::RichText::new(message).color(color));
    }

    #[cfg(test)]
    pub fn current_message(&self) -> Option<&str> {
        self.current.as_ref().map(|(m, _, _)| m.as_str())
    }
}

impl Default for Toast {
    fn default() -> Self {
        Self::new()
    }
}
