// Storage module - checking files on disk against manifest entries

pub mod verification;

pub use verification::validate;
