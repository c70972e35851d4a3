pub mod constants;
pub mod formatter;
pub mod validator;
