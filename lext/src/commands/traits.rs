//! Command trait for the lext CLI.
//!
//! Every subcommand is a value built from its arguments and the loaded
//! configuration, then executed once.

use crate::config::Config;
use crate::error::Result;

/// Standard command trait that all lext commands implement.
///
/// # Type Parameters
/// * `Args` - The arguments type for this command
/// * `Output` - The output type returned by this command
pub trait Command: Sized {
    /// The arguments type for this command.
    type Args;

    /// The output type returned by this command.
    type Output;

    /// Create a command, merging arguments over configuration.
    fn new(args: Self::Args, config: &Config) -> Result<Self>;

    /// Execute the command.
    fn execute(&self) -> Result<Self::Output>;

    /// The subcommand name, as typed on the command line.
    fn name() -> &'static str;
}

/// Summary shared by commands that process a list of inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Inputs lexed successfully.
    pub files_processed: usize,
    /// Inputs that could not be read.
    pub files_failed: usize,
    /// Error tokens found across all inputs.
    pub lexical_errors: usize,
}

impl RunSummary {
    /// Whether every input was read.
    pub fn all_read(&self) -> bool {
        self.files_failed == 0
    }
}
