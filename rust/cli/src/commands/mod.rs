//! Command handler modules for the Showdown CLI.
//!
//! Each command lives in its own file and follows the same pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) and input (`&mut dyn BufRead`) passed as parameters
//! - Error propagation through `CliError`

mod cfg;
mod compare;
mod deal;
mod eval;
mod play;

pub use cfg::handle_cfg_command;
pub use compare::handle_compare_command;
pub use deal::handle_deal_command;
pub use eval::handle_eval_command;
pub use play::handle_play_command;
