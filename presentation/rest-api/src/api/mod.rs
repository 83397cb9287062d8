pub mod error;
pub mod health;
pub mod item;
pub mod shopping_list;
pub mod tags;
