//! Mode routing
//!
//! Both services run the same server loop; the selected [`ServiceKind`]
//! decides which store is opened and which routes are mounted.

pub mod server;

pub use server::run_server;

use std::fmt;

/// Which of the two HTTP services to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    ShortUrl,
    Todo,
}

impl ServiceKind {
    pub fn name(&self) -> &'static str {
        match self {
            ServiceKind::ShortUrl => "short-url",
            ServiceKind::Todo => "todo",
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
