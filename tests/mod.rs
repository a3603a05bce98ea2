mod common;
mod decode_properties;
