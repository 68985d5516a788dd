// Service exports
pub mod intake;

pub use intake::{FileIntake, IntakeError, IntakeOptions, PendingIntake};
