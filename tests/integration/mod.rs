//! Integration tests for benchttp configuration resolution

mod config_files;
mod test_utils;
