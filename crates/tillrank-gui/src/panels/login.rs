use std::sync::mpsc::{Receiver, TryRecvError};

use eframe::egui;
use tillrank_services::{Services, StoreError};

use crate::panels::toast::Toast;

pub struct LoginPanel {
    email: String,
    password: String,

    login_rx: Option<Receiver<Result<bool, StoreError>>>,
    pending_email: String,
    login_success: Option<String>,
}

impl LoginPanel {
    pub fn new() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            login_rx: None,
            pending_email: String::new(),
            login_success: None,
        }
    }

    /// Taken by the app root to flip the session to logged in.
    pub fn take_login_success(&mut self) -> Option<String> {
        self.login_success.take()
    }

    /// Called on logout so stale credentials don't linger in the form.
    pub fn reset(&mut self) {
        self.email.clear();
        self.password.clear();
        self.login_rx = None;
        self.pending_email.clear();
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, services: &Services, toast: &mut Toast) {
        self.poll(toast);

        let in_flight = self.login_rx.is_some();

        ui.vertical_centered(|ui| {
            ui.add_space(60.0);
            ui.label(
                egui::RichText::new("TillRank")
                    .heading()
                    .color(egui::Color32::from_rgb(230, 160, 30)),
            );
            ui.label("Cashier Evaluation & Performance");
            ui.add_space(30.0);

            ui.add_enabled_ui(!in_flight, |ui| {
                egui::Grid::new("login_form")
                    .num_columns(2)
                    .spacing([10.0, 8.0])
                    .show(ui, |ui| {
                        ui.label("Email:");
                        ui.text_edit_singleline(&mut self.email);
                        ui.end_row();

                        ui.label("Password:");
                        ui.add(egui::TextEdit::singleline(&mut self.password).password(true));
                        ui.end_row();
                    });

                ui.add_space(15.0);
                if ui.button("Login").clicked() {
                    self.start_login(services, toast);
                }
            });

            if in_flight {
                ui.add_space(10.0);
                ui.spinner();
                ui.label("Logging in...");
            }
        });
    }

    fn start_login(&mut self, services: &Services, toast: &mut Toast) {
        let email = self.email.trim().to_string();
        let password = self.password.clone();

        if email.is_empty() || password.is_empty() {
            toast.error("Please enter email and password");
            return;
        }

        self.pending_email = email.clone();
        self.login_rx = Some(services.store.login_async(&email, &password));
    }

    fn poll(&mut self, toast: &mut Toast) {
        let Some(rx) = &self.login_rx else {
            return;
        };

        match rx.try_recv() {
            Ok(Ok(true)) => {
                tracing::info!(email = %self.pending_email, "Login accepted");
                self.login_success = Some(self.pending_email.clone());
                self.password.clear();
                self.login_rx = None;
            }
            Ok(Ok(false)) => {
                toast.error("Invalid email or password");
                self.login_rx = None;
            }
            Ok(Err(e)) => {
                toast.error(format!("Login failed: {}", e));
                self.login_rx = None;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                toast.error("Login worker stopped unexpectedly");
                self.login_rx = None;
            }
        }
    }
}
