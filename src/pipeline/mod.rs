//! Processing pipeline components.

mod coordinator;
mod processor;

pub use coordinator::{
    ProcessCheck, collect_input_files, first_variant_path, output_dir_for, should_process,
    variant_path_for,
};
pub use processor::{ProcessResult, process_file};
