pub mod balance_modal;
pub mod fields;
