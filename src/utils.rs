pub mod date;
pub mod http;
pub mod logs;

#[cfg(test)]
pub(crate) mod testing;
