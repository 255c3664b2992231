pub mod get_current_menu;
pub mod regenerate_meal;
pub mod save_current_menu;
