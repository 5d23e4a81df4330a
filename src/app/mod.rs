pub mod effect;
pub mod events;
pub mod scheduler;
pub mod state;
