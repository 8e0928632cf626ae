pub mod blog;
pub mod home;
pub mod legal;
pub mod profile;
