pub mod guidance;
pub mod stage;
pub mod zone;
