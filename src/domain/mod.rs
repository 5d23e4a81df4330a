pub mod bolt;
pub mod palette;
pub mod random;
