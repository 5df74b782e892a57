mod constants;
mod context;
mod formatter;
mod rendering;

pub use formatter::Formatter;
