pub mod api_utils;
pub mod datagrid;
pub mod date_utils;
pub mod icons;
