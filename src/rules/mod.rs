//! Game rules: win detection

pub mod win;

pub use win::has_five_in_row;
