// Game core: no GUI types in here. The GUI owns a Board and forwards
// widget presses into `flip`/`check_pair`.
mod board;
mod card;

pub use board::{Board, CheckOutcome, DEFAULT_COLUMNS};
pub use card::Card;
