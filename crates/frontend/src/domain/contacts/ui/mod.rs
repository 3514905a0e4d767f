pub mod list;

pub use list::ContactsListPage;
