mod cleaner;
mod pragma;
mod stripper_config;
mod source_stripper;
#[cfg(feature = "multi_thread")]
mod source_stripper_mt;
mod error;

pub use cleaner::{CommentStripper, TextCleaner};
pub use pragma::truncate_to_pragma;
pub use stripper_config::{StripConfig, DEFAULT_INPUT, DEFAULT_OUTPUT};
pub use source_stripper::{read_source, SourceStripper, SourceStripperBuilder, StripReport, Stripped};
#[cfg(feature = "multi_thread")]
pub use source_stripper_mt::batch_jobs;
pub use error::StripError;
