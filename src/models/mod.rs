pub mod analysis;
pub mod menu;
pub mod preference;
pub mod recommendation;
