//! Employee directory - read-only data owned by the remote store

use serde::{Deserialize, Serialize};

use crate::error::{Result, TillRankError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub code: String,
    pub name: String,
    pub title: String,
}

impl Employee {
    /// Dropdown label, "Name - Title"
    pub fn display_label(&self) -> String {
        format!("{} - {}", self.name, self.title)
    }
}

/// Employee list - owns the fetched directory and its loading state
#[derive(Debug, Clone, Default)]
pub struct EmployeeList {
    pub employees: Vec<Employee>,
    pub loading: bool,
}

impl EmployeeList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_loading(&mut self) {
        self.loading = true;
    }

    pub fn set_employees(&mut self, employees: Vec<Employee>) {
        self.employees = employees;
        self.loading = false;
    }

    pub fn has_employees(&self) -> bool {
        !self.employees.is_empty()
    }

    /// Resolve a dropdown selection back to the full employee record.
    pub fn find_by_code(&self, code: &str) -> Result<&Employee> {
        self.employees
            .iter()
            .find(|e| e.code == code)
            .ok_or_else(|| TillRankError::EmployeeNotFound(code.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_list() -> EmployeeList {
        let mut list = EmployeeList::new();
        list.set_employees(vec![
            Employee {
                code: "E001".to_string(),
                name: "Amal".to_string(),
                title: "Cashier".to_string(),
            },
            Employee {
                code: "E002".to_string(),
                name: "Basem".to_string(),
                title: "Senior Cashier".to_string(),
            },
        ]);
        list
    }

    #[test]
    fn find_by_code_resolves_full_record() {
        let list = sample_list();
        let emp = list.find_by_code("E002").unwrap();
        assert_eq!(emp.name, "Basem");
        assert_eq!(emp.title, "Senior Cashier");
    }

    #[test]
    fn find_by_code_missing_is_not_found() {
        let list = sample_list();
        let err = list.find_by_code("E999").unwrap_err();
        assert!(matches!(err, TillRankError::EmployeeNotFound(_)));
    }

    #[test]
    fn display_label_joins_name_and_title() {
        let list = sample_list();
        assert_eq!(list.employees[0].display_label(), "Amal - Cashier");
    }

    #[test]
    fn set_employees_clears_loading() {
        let mut list = EmployeeList::new();
        list.start_loading();
        assert!(list.loading);
        list.set_employees(vec![]);
        assert!(!list.loading);
        assert!(!list.has_employees());
    }
}
