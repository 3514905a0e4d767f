pub mod list;

pub use list::TasksListPage;
