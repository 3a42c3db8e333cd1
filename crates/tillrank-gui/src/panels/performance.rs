use std::sync::mpsc::{Receiver, TryRecvError};

use eframe::egui;
use tillrank_services::{
    default_range, parse_range, AppModels, Rank, ReportOutcome, Services, StoreError,
};

use crate::panels::toast::Toast;

const RANK_GOLD: egui::Color32 = egui::Color32::from_rgb(255, 215, 0);
const RANK_SILVER: egui::Color32 = egui::Color32::from_rgb(192, 192, 192);
const RANK_BRONZE: egui::Color32 = egui::Color32::from_rgb(205, 127, 50);

pub struct PerformancePanel {
    start_input: String,
    end_input: String,

    report_rx: Option<Receiver<Result<ReportOutcome, StoreError>>>,
    auto_fetched: bool,
}

impl PerformancePanel {
    pub fn new() -> Self {
        let (start, end) = default_range();
        Self {
            start_input: start.format("%Y-%m-%d").to_string(),
            end_input: end.format("%Y-%m-%d").to_string(),
            report_rx: None,
            auto_fetched: false,
        }
    }

    pub fn ui(
        &mut self,
        ui: &mut egui::Ui,
        models: &mut AppModels,
        services: &Services,
        toast: &mut Toast,
    ) {
        self.poll(models, toast);

        // The current month's report loads itself the first time the
        // panel is opened.
        if !self.auto_fetched {
            self.auto_fetched = true;
            self.start_fetch(models, services, toast);
        }

        ui.heading("Performance Report");
        ui.add_space(10.0);

        let loading = models.report.loading;
        ui.add_enabled_ui(!loading, |ui| {
            ui.horizontal(|ui| {
                ui.label("From:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.start_input)
                        .hint_text("YYYY-MM-DD")
                        .desired_width(100.0),
                );
                ui.label("To:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.end_input)
                        .hint_text("YYYY-MM-DD")
                        .desired_width(100.0),
                );
                if ui.button("Get Performance").clicked() {
                    self.start_fetch(models, services, toast);
                }
            });
        });

        if loading {
            ui.add_space(10.0);
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading performance data...");
            });
        }

        ui.add_space(15.0);
        self.render_report(ui, models);
    }

    fn start_fetch(&mut self, models: &mut AppModels, services: &Services, toast: &mut Toast) {
        let (start, end) = match parse_range(&self.start_input, &self.end_input) {
            Ok(range) => range,
            Err(e) => {
                toast.error(e.to_string());
                return;
            }
        };

        models.report.start_loading();
        // Replacing the receiver drops any still-running fetch; its late
        // result is discarded when the worker's send fails.
        self.report_rx = Some(services.store.get_performance_async(start, end));
    }

    fn poll(&mut self, models: &mut AppModels, toast: &mut Toast) {
        let Some(rx) = &self.report_rx else {
            return;
        };

        match rx.try_recv() {
            Ok(Ok(outcome)) => {
                models.report.set_outcome(outcome);
                self.report_rx = None;
            }
            Ok(Err(e)) => {
                let message = e.to_string();
                models.report.set_error(message.clone());
                toast.error(message);
                self.report_rx = None;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                models.report.loading = false;
                self.report_rx = None;
            }
        }
    }

    fn render_report(&self, ui: &mut egui::Ui, models: &AppModels) {
        if let Some(error) = &models.report.error {
            ui.label(
                egui::RichText::new(format!("Error: {}", error)).color(egui::Color32::RED),
            );
            ui.add_space(5.0);
        }

        let Some(outcome) = &models.report.outcome else {
            return;
        };

        match outcome {
            ReportOutcome::NoData(message) => {
                ui.label(message);
            }
            ReportOutcome::Ranked(rows) => {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        egui::Grid::new("performance_table")
                            .num_columns(7)
                            .spacing([16.0, 6.0])
                            .striped(true)
                            .show(ui, |ui| {
                                ui.label(egui::RichText::new("#").strong());
                                ui.label(egui::RichText::new("Employee").strong());
                                ui.label(egui::RichText::new("Shortage").strong());
                                ui.label(egui::RichText::new("Surplus").strong());
                                ui.label(egui::RichText::new("Missing Receipts").strong());
                                ui.label(egui::RichText::new("Cancellations").strong());
                                ui.label(egui::RichText::new("Score").strong());
                                ui.end_row();

                                for ranked in rows {
                                    let color = rank_color(ranked.rank);
                                    let cell = |text: String| match color {
                                        Some(c) => egui::RichText::new(text).color(c).strong(),
                                        None => egui::RichText::new(text),
                                    };

                                    ui.label(cell(ranked.position.to_string()));
                                    ui.label(cell(ranked.row.name.clone()));
                                    ui.label(cell(format!("{:.2}", ranked.row.shortage_amount)));
                                    ui.label(cell(format!("{:.2}", ranked.row.surplus_amount)));
                                    ui.label(cell(format!(
                                        "{}",
                                        ranked.row.missing_exit_receipts
                                    )));
                                    ui.label(cell(format!("{:.2}", ranked.row.cancel_amount)));
                                    ui.label(cell(format!("{:.1}%", ranked.score)));
                                    ui.end_row();
                                }
                            });
                    });
            }
        }
    }
}

fn rank_color(rank: Rank) -> Option<egui::Color32> {
    match rank {
        Rank::First => Some(RANK_GOLD),
        Rank::Second => Some(RANK_SILVER),
        Rank::Third => Some(RANK_BRONZE),
        Rank::Unranked => None,
    }
}
