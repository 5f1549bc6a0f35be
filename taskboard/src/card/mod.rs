//! Card commands

mod add;
mod delete;
mod find;
mod mv;

pub use add::AddCard;
pub use delete::DeleteCard;
pub use find::FindCard;
pub use mv::MoveCard;
