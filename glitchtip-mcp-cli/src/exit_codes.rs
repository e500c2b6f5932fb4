//! Exit code constants for CLI commands
//!
//! These constants define the standard exit codes used throughout the application:
//! - 0: Success
//! - 1: A tool reported an error, or doctor found warnings
//! - 2: Configuration errors, invalid input or critical failures

/// Successful execution
pub const EXIT_SUCCESS: i32 = 0;

/// Tool error or warnings found
pub const EXIT_WARNING: i32 = 1;

/// Configuration, validation or critical failures
pub const EXIT_ERROR: i32 = 2;
