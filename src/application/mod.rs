mod config;
mod editor;

pub use config::EditorConfig;
pub use editor::{Command, DragState, Editor, InputEvent};
