pub mod dashboard;
pub mod help;
pub mod landing;
pub mod login;
pub mod not_found;
pub mod placeholder;
pub mod profile;
pub mod simulator;
