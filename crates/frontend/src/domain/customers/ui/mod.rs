pub mod list;

pub use list::CustomersListPage;
