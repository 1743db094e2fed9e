//! The three upstream capabilities the gateway fronts.

use std::fmt;

/// An upstream content service reachable through the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Research,
    Script,
    Topics,
}

/// Page-level message for failures the gateway could not classify further.
pub const GENERIC_FAILURE: &str = "An error occurred. Please try again.";

impl Capability {
    pub const ALL: [Capability; 3] = [Capability::Research, Capability::Script, Capability::Topics];

    /// Short identifier used in config keys, metric labels and API paths.
    pub fn name(self) -> &'static str {
        match self {
            Capability::Research => "research",
            Capability::Script => "script",
            Capability::Topics => "topics",
        }
    }

    /// Same-origin API route for this capability.
    pub fn api_path(self) -> &'static str {
        match self {
            Capability::Research => "/api/research",
            Capability::Script => "/api/script",
            Capability::Topics => "/api/topics",
        }
    }

    /// Tag attached to server-side failure logs.
    pub fn log_tag(self) -> &'static str {
        match self {
            Capability::Research => "Research API Error",
            Capability::Script => "Script API Error",
            Capability::Topics => "Topics API Error",
        }
    }

    /// Fixed message returned to callers when the call fails.
    pub fn failure_message(self) -> &'static str {
        match self {
            Capability::Research => "Failed to fetch research data",
            Capability::Script => "Failed to generate script",
            Capability::Topics => "Failed to fetch topics",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
