pub mod reply;
pub mod sessions;
