pub mod weekly_menu_repository;
