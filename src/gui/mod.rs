mod app;
mod board_view;
mod components;
mod styles;

pub use app::MemoryApp;
