pub mod deploy;
pub mod draft;
pub mod preview;
pub mod render;
pub mod site;
