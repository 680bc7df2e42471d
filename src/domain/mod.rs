pub mod conversion_target;
pub mod png_export;
pub mod source_icon;

#[cfg(test)]
pub(crate) mod test_fixtures;
