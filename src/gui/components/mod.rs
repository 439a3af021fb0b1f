// GUI Components module
mod card_tile;
mod status_bar;

pub use card_tile::{CardTile, TILE_SIZE};
pub use status_bar::StatusBar;
