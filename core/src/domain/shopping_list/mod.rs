pub mod aggregator;
pub mod entities;

pub use aggregator::{build_shopping_list, categorize};
pub use entities::{ShoppingCategory, ShoppingList};
