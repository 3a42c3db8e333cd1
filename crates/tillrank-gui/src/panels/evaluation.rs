use std::sync::mpsc::{Receiver, TryRecvError};

use chrono::Utc;
use eframe::egui;
use tillrank_services::{
    parse_amount, parse_count, AppModels, Employee, EmployeeList, EvaluationMetrics,
    EvaluationRecord, Services, StoreError, TillRankError,
};

use crate::panels::toast::Toast;

pub struct EvaluationPanel {
    selected_code: String,

    // Form inputs (raw text; empty parses as 0)
    shortage_input: String,
    surplus_input: String,
    receipts_input: String,
    cancel_input: String,

    employees_rx: Option<Receiver<Result<Vec<Employee>, StoreError>>>,
    fetch_started: bool,
}

impl EvaluationPanel {
    pub fn new() -> Self {
        Self {
            selected_code: String::new(),
            shortage_input: String::new(),
            surplus_input: String::new(),
            receipts_input: String::new(),
            cancel_input: String::new(),
            employees_rx: None,
            fetch_started: false,
        }
    }

    pub fn ui(
        &mut self,
        ui: &mut egui::Ui,
        models: &mut AppModels,
        services: &Services,
        toast: &mut Toast,
    ) {
        self.poll_employees(models, toast);

        // Populate the dropdown on first open.
        if !self.fetch_started {
            self.start_employee_fetch(models, services);
        }

        ui.heading("Cashier Evaluation");
        ui.add_space(10.0);

        let loading = models.employees.loading;
        ui.add_enabled_ui(!loading, |ui| {
            self.render_form(ui, models, services, toast);
        });

        if loading {
            ui.add_space(10.0);
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading employees...");
            });
        }
    }

    fn render_form(
        &mut self,
        ui: &mut egui::Ui,
        models: &mut AppModels,
        services: &Services,
        toast: &mut Toast,
    ) {
        let selected_label = models
            .employees
            .find_by_code(&self.selected_code)
            .map(|e| e.display_label())
            .unwrap_or_else(|_| "Choose Employee".to_string());

        ui.horizontal(|ui| {
            ui.label("Employee:");
            egui::ComboBox::from_id_salt("employee_select")
                .selected_text(selected_label)
                .width(260.0)
                .show_ui(ui, |ui| {
                    for employee in &models.employees.employees {
                        ui.selectable_value(
                            &mut self.selected_code,
                            employee.code.clone(),
                            employee.display_label(),
                        );
                    }
                });

            if ui.button("Refresh").clicked() {
                self.start_employee_fetch(models, services);
            }
        });

        ui.add_space(10.0);
        egui::Grid::new("evaluation_form")
            .num_columns(2)
            .spacing([10.0, 8.0])
            .show(ui, |ui| {
                ui.label("Shortage amount:");
                ui.text_edit_singleline(&mut self.shortage_input);
                ui.end_row();

                ui.label("Surplus amount:");
                ui.text_edit_singleline(&mut self.surplus_input);
                ui.end_row();

                ui.label("Missing exit receipts:");
                ui.text_edit_singleline(&mut self.receipts_input);
                ui.end_row();

                ui.label("Cancellation amount:");
                ui.text_edit_singleline(&mut self.cancel_input);
                ui.end_row();
            });

        ui.add_space(15.0);
        if ui.button("Save Evaluation").clicked() {
            self.submit(&models.employees, services, toast);
        }
    }

    /// Validate the form and build the record to send. No network traffic
    /// happens here; a validation failure means nothing is ever sent.
    fn build_record(&self, employees: &EmployeeList) -> Result<EvaluationRecord, TillRankError> {
        if self.selected_code.is_empty() {
            return Err(TillRankError::NoEmployeeSelected);
        }

        let metrics = EvaluationMetrics {
            shortage_amount: parse_amount("shortage amount", &self.shortage_input)?,
            surplus_amount: parse_amount("surplus amount", &self.surplus_input)?,
            missing_exit_receipts: parse_count("missing exit receipts", &self.receipts_input)?,
            cancel_amount: parse_amount("cancellation amount", &self.cancel_input)?,
        };

        let employee = employees.find_by_code(&self.selected_code)?;
        Ok(EvaluationRecord::new(employee, metrics, Utc::now()))
    }

    fn submit(&mut self, employees: &EmployeeList, services: &Services, toast: &mut Toast) {
        let record = match self.build_record(employees) {
            Ok(record) => record,
            Err(e) => {
                toast.error(e.to_string());
                return;
            }
        };

        // Fire and forget: the store's response body is never read, so the
        // UI reports success as soon as the record is handed off.
        services.store.submit_evaluation_async(record);
        toast.success("Evaluation saved successfully");
        self.reset_form();
    }

    fn reset_form(&mut self) {
        self.selected_code.clear();
        self.shortage_input.clear();
        self.surplus_input.clear();
        self.receipts_input.clear();
        self.cancel_input.clear();
    }

    fn start_employee_fetch(&mut self, models: &mut AppModels, services: &Services) {
        self.fetch_started = true;
        models.employees.start_loading();
        self.employees_rx = Some(services.store.get_employees_async());
    }

    fn poll_employees(&mut self, models: &mut AppModels, toast: &mut Toast) {
        let Some(rx) = &self.employees_rx else {
            return;
        };

        match rx.try_recv() {
            Ok(Ok(employees)) => {
                if employees.is_empty() {
                    toast.error("No employees found in the store");
                }
                models.employees.set_employees(employees);
                self.employees_rx = None;
            }
            Ok(Err(e)) => {
                toast.error(format!("Failed to load employees: {}", e));
                models.employees.loading = false;
                self.employees_rx = None;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                models.employees.loading = false;
                self.employees_rx = None;
            }
        }
    }
}
