pub mod list;

pub use list::DealsListPage;
