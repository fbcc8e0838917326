pub mod defaults;
pub mod editor;
pub mod entities;
pub mod policies;
