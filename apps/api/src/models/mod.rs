pub mod cv;
pub mod library;
pub mod profile;
