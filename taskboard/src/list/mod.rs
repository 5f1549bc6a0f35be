//! List commands

mod add;

pub use add::AddList;
