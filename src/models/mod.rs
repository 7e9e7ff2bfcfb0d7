mod item;

pub use item::{CreateItem, Item, UpdateItem};
