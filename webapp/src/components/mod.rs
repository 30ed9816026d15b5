pub mod header;
pub mod navigation;
pub mod page;
pub mod preferences;
pub mod search_bar;
