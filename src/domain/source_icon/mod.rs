pub mod icon_path;
pub mod source_error;
pub mod source_image;
