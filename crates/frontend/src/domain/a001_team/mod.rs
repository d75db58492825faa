pub mod favorite;
pub mod ui;
