pub mod drawings;
pub mod maintenance;
pub mod requirements;
pub mod system;
