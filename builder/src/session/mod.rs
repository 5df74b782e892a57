mod command;
mod menu;
mod session;

pub use command::{Applied, Command};
pub use menu::SelectableTable;
pub use session::Session;
