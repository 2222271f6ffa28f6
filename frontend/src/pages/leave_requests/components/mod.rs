pub mod pagination;
pub mod search_bar;
pub mod table;
