mod predicate;
mod validator;

pub use predicate::render_predicate;
pub use validator::FilterValidator;
