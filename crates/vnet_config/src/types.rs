//! Configuration types deserialized from `vnet.toml`.

use serde::Deserialize;

/// The whole `vnet.toml` file. Every table is optional.
#[derive(Debug, Default, Deserialize)]
pub struct VnetConfig {
    /// Design dump settings.
    #[serde(default)]
    pub dump: DumpConfig,
    /// Structural checker settings.
    #[serde(default)]
    pub check: CheckConfig,
}

/// One section of the design dump, in the order the dump renders them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    /// `ELABORATED PARAMETERS:`
    Parameters,
    /// `ELABORATED SIGNALS:`
    Signals,
    /// `ELABORATED MEMORIES:`
    Memories,
    /// `ELABORATED FUNCTION DEFINITIONS:`
    Functions,
    /// `ELABORATED TASK DEFINITIONS:`
    Tasks,
    /// `ELABORATED NODES:`
    Nodes,
    /// `ELABORATED PROCESSES:`
    Processes,
}

impl Section {
    /// Every section in dump order.
    pub const ALL: [Section; 7] = [
        Section::Parameters,
        Section::Signals,
        Section::Memories,
        Section::Functions,
        Section::Tasks,
        Section::Nodes,
        Section::Processes,
    ];

    /// Parses the name used in `vnet.toml` (`"signals"`, `"tasks"`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }

    /// Returns the name used in `vnet.toml`.
    pub fn name(self) -> &'static str {
        match self {
            Section::Parameters => "parameters",
            Section::Signals => "signals",
            Section::Memories => "memories",
            Section::Functions => "functions",
            Section::Tasks => "tasks",
            Section::Nodes => "nodes",
            Section::Processes => "processes",
        }
    }

    /// Returns the header line written before the section body.
    pub fn header(self) -> &'static str {
        match self {
            Section::Parameters => "ELABORATED PARAMETERS:",
            Section::Signals => "ELABORATED SIGNALS:",
            Section::Memories => "ELABORATED MEMORIES:",
            Section::Functions => "ELABORATED FUNCTION DEFINITIONS:",
            Section::Tasks => "ELABORATED TASK DEFINITIONS:",
            Section::Nodes => "ELABORATED NODES:",
            Section::Processes => "ELABORATED PROCESSES:",
        }
    }
}

/// `[dump]` settings.
#[derive(Debug, Clone, Deserialize)]
pub struct DumpConfig {
    /// Whether object attribute lines (`key = "value"`) are emitted.
    #[serde(default = "default_true")]
    pub attributes: bool,
    /// Names of the sections to emit. `None` emits all of them.
    #[serde(default)]
    pub sections: Option<Vec<String>>,
}

impl DumpConfig {
    /// Returns the selected sections in dump order, ignoring listing order
    /// and unknown names (rejected earlier by validation).
    pub fn selected_sections(&self) -> Vec<Section> {
        match &self.sections {
            None => Section::ALL.to_vec(),
            Some(names) => Section::ALL
                .into_iter()
                .filter(|s| names.iter().any(|n| n == s.name()))
                .collect(),
        }
    }
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            attributes: true,
            sections: None,
        }
    }
}

/// `[check]` settings, keyed by rule name (e.g. `"empty-sensitivity"`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckConfig {
    /// Rules whose findings are promoted to errors.
    #[serde(default)]
    pub deny: Vec<String>,
    /// Rules that are not run.
    #[serde(default)]
    pub allow: Vec<String>,
}

fn default_true() -> bool {
    true
}
