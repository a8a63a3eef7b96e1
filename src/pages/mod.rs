pub mod favorites;
pub mod home;
pub mod map;
pub mod profile;
pub mod submit;
