pub mod api_utils;
pub mod components;

#[cfg(test)]
pub mod test_log;
