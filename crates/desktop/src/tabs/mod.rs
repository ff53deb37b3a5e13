pub mod about_tab;
pub mod main_tab;
