pub mod outfit;
pub mod palette;
pub mod scores;
