pub mod discovery;
pub mod system;
pub mod vendors;
