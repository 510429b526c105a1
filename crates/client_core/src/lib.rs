pub mod config;
pub mod controller;
pub mod source;

pub use config::{load_settings, Settings};
pub use controller::{FetchOutcome, PokemonListController};
pub use source::{CreatureSource, HttpCreatureSource};
