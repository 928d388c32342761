pub mod constants;
pub mod i18n;
pub mod types;
pub mod validation;

#[cfg(test)]
pub mod test_helpers;
