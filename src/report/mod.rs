//----------------------------------------
// report mod
//----------------------------------------
mod render;

pub use render::{DisplayMode, render};
