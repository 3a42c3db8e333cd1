pub mod evaluation;
pub mod login;
pub mod performance;
pub mod toast;
