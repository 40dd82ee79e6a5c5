//! # Satchel Shell
//!
//! Text menu around a single player's inventory:
//! - Menu command parsing
//! - Session with one hand slot
//! - Inventory listing
//! - Configuration from TOML and the environment
//!
//! ## Usage
//!
//! ```text
//! HAND:
//! ----
//! You aren't holding anything
//!
//! INVENTORY:
//! ---------
//!  0: Shield  --> A gigantic shield for a gigantic wuss.
//!  1: EMPTY
//!
//! What would you like to do?
//!     c: Create new Item
//!     g: Get Item from Inventory
//!     p: Put current Item in Inventory
//!     d: Drop current Item
//!     q: Quit the program
//! ```

pub mod command;
pub mod config;
pub mod output;
pub mod repl;
pub mod session;

pub use command::{CommandError, MenuAction};
pub use config::{ConfigError, ShellConfig};
pub use repl::Repl;
pub use session::{Session, SessionError, SessionResult};
