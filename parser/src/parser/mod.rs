mod date;
mod interval;
mod number;
mod operator;
mod utils;

pub use date::date_comparison;
pub use interval::interval;
pub use number::{loose_number, number_comparison};
pub use utils::complete;
