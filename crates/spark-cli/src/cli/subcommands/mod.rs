mod backfill;
mod card;
mod deck;
mod import;
mod set;
mod user;

pub use backfill::BackfillCommands;
pub use card::CardCommands;
pub use deck::DeckCommands;
pub use import::ImportCommands;
pub use set::SetCommands;
pub use user::UserCommands;
