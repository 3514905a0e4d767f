pub mod contact;
pub mod customer;
pub mod deal;
pub mod lead;
pub mod task;
