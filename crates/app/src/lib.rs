mod actions;
mod handlers;
mod state;

pub use state::App;
