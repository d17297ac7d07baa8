//! Process exit codes returned by [`crate::run`].

/// The command completed, including an interactive session ended by EOF.
pub const SUCCESS: i32 = 0;

/// Usage errors, unparseable hands, configuration and I/O failures.
pub const ERROR: i32 = 2;

