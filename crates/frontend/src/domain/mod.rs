pub mod contacts;
pub mod customers;
pub mod deals;
pub mod leads;
pub mod tasks;
