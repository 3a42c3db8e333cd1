use eframe::egui;
use tillrank_services::{AppModels, Services, Session};

use crate::panels::{
    evaluation::EvaluationPanel, login::LoginPanel, performance::PerformancePanel, toast::Toast,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Evaluation,
    Performance,
}

pub struct TillRankApp {
    session: Session,
    current_tab: Tab,

    // Models and services (owned directly)
    models: AppModels,
    services: Services,
    toast: Toast,

    // Panels (views)
    login: LoginPanel,
    evaluation: EvaluationPanel,
    performance: PerformancePanel,
}

impl TillRankApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            session: Session::new(),
            current_tab: Tab::Evaluation,
            models: AppModels::new(),
            services: Services::new(),
            toast: Toast::new(),
            login: LoginPanel::new(),
            evaluation: EvaluationPanel::new(),
            performance: PerformancePanel::new(),
        }
    }

    fn render_top_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.current_tab, Tab::Evaluation, "Evaluation");
            ui.selectable_value(&mut self.current_tab, Tab::Performance, "Performance");

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Logout").clicked() {
                    tracing::info!("Logging out");
                    self.session.logout();
                    self.login.reset();
                }
                if let Some(email) = self.session.email() {
                    ui.label(egui::RichText::new(email).weak());
                }
            });
        });
    }
}

impl eframe::App for TillRankApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Flip the session when the login panel reports success.
        if let Some(email) = self.login.take_login_success() {
            self.session.login(email);
            self.current_tab = Tab::Evaluation;
        }

        if self.session.is_logged_in() {
            egui::TopBottomPanel::top("tabs").show(ctx, |ui| {
                self.render_top_bar(ui);
            });
        }

        egui::TopBottomPanel::bottom("messages").show(ctx, |ui| {
            self.toast.ui(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if !self.session.is_logged_in() {
                self.login.ui(ui, &self.services, &mut self.toast);
                return;
            }

            match self.current_tab {
                Tab::Evaluation => {
                    self.evaluation
                        .ui(ui, &mut self.models, &self.services, &mut self.toast)
                }
                Tab::Performance => {
                    self.performance
                        .ui(ui, &mut self.models, &self.services, &mut self.toast)
                }
            }
        });

        // Keep polling the background request channels.
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}
