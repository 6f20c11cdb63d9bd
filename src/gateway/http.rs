pub mod lookup;
pub mod source;
