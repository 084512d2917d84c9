pub mod bounds;
pub mod color;
pub mod headful;
pub mod input;
pub mod logic;
pub mod motion;
pub mod phase;
pub mod render;
pub mod settings;
pub mod state;
pub mod tick;
pub mod view_tree;
