// Module exports for models

pub mod cell;
pub mod date_ref;
pub mod hour;
pub mod settings;
pub mod template;
pub mod ui;
pub mod week;
