pub mod log;
#[cfg(test)]
pub mod test_support;
