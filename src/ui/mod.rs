pub mod camera;
pub mod home;
