//! Line-oriented terminal abstraction.
//!
//! Sessions never touch stdin/stdout directly. They talk to a [`Terminal`],
//! which is [`IoTerminal`] in the binaries and [`ScriptedTerminal`] in tests.

mod io;
mod scripted;
mod traits;

pub use io::IoTerminal;
pub use scripted::ScriptedTerminal;
pub use traits::Terminal;
