pub mod factory;
pub mod http;
pub mod lookup;
pub mod source;
