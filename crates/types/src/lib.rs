use std::{error::Error, fmt, str::FromStr};

pub mod diagnostics;

pub use diagnostics::{
    BuildInfo, DiagnosticsSnapshot, ExtensionEntry, ExtensionError, ExtensionInfo, ExtensionMap, ExtensionSync, LastError, NavLink,
    ServerInfo, by_key, filter_nav_links, is_extension_info, nav_links, to_nav_link,
};

/// Deployment targets, each with its own diagnostics endpoint.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Default)]
pub enum Environment {
    #[default]
    Public, // https://hosting.portal.azure.net
    Fairfax,  // https://hosting.azureportal.usgovcloudapi.net
    Mooncake, // https://hosting.azureportal.chinacloudapi.cn
}

impl Environment {
    pub const ALL: [Environment; 3] = [Environment::Public, Environment::Fairfax, Environment::Mooncake];

    pub fn url(&self) -> &'static str {
        match self {
            Self::Public => "https://hosting.portal.azure.net/api/diagnostics",
            Self::Fairfax => "https://hosting.azureportal.usgovcloudapi.net/api/diagnostics",
            Self::Mooncake => "https://hosting.azureportal.chinacloudapi.cn/api/diagnostics",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Public => "Public Cloud",
            Self::Fairfax => "Fairfax",
            Self::Mooncake => "Mooncake",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Fairfax => "fairfax",
            Self::Mooncake => "mooncake",
        }
    }

    /// Base domain used to validate endpoint hosts.
    pub fn domain(&self) -> &'static str {
        match self {
            Self::Public => "portal.azure.net",
            Self::Fairfax => "azureportal.usgovcloudapi.net",
            Self::Mooncake => "azureportal.chinacloudapi.cn",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Environment {
    type Err = ParseEnvironmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "public" | "public-cloud" => Ok(Self::Public),
            "fairfax" => Ok(Self::Fairfax),
            "mooncake" => Ok(Self::Mooncake),
            _ => Err(ParseEnvironmentError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEnvironmentError(String);

impl fmt::Display for ParseEnvironmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown environment '{}'; expected one of public, fairfax, mooncake", self.0)
    }
}

impl Error for ParseEnvironmentError {}

/// Dashboard panels.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Default)]
pub enum Tab {
    #[default]
    Extensions,
    Build,
    Server,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Extensions, Tab::Build, Tab::Server];

    pub fn id(&self) -> &'static str {
        match self {
            Self::Extensions => "extensions",
            Self::Build => "build",
            Self::Server => "server",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Extensions => "Extensions",
            Self::Build => "Build Information",
            Self::Server => "Server Information",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|tab| tab == self).unwrap_or_default()
    }

    /// Neighbouring tab, wrapping at both ends.
    pub fn cycle(&self, forward: bool) -> Tab {
        let len = Self::ALL.len();
        let index = if forward { (self.index() + 1) % len } else { (self.index() + len - 1) % len };
        Self::ALL[index]
    }
}

impl FromStr for Tab {
    type Err = ParseTabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseTabError(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTabError(String);

impl fmt::Display for ParseTabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown tab '{}'; expected one of extensions, build, server", self.0)
    }
}

impl Error for ParseTabError {}

/// Well-known extensions offered as toolbar shortcuts.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Shortcut {
    PaasServerless,
    Websites,
}

impl Shortcut {
    pub const ALL: [Shortcut; 2] = [Shortcut::PaasServerless, Shortcut::Websites];

    pub fn key(&self) -> &'static str {
        match self {
            Self::PaasServerless => "paasserverless",
            Self::Websites => "websites",
        }
    }
}

/// Tag attached to every diagnostics fetch. Only the most recently issued
/// ticket may commit its result.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FetchTicket {
    pub id: u64,
    pub environment: Environment,
}

/// Result of a background diagnostics fetch.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub ticket: FetchTicket,
    /// Decoded snapshot, or the rendered error.
    pub result: Result<Box<DiagnosticsSnapshot>, String>,
}

/// Messages that can be sent to update the application state.
#[derive(Debug, Clone)]
pub enum Msg {
    /// Switch deployment target
    SelectEnvironment(Environment),
    /// Switch visible panel
    SelectTab(Tab),
    /// Move to the neighbouring tab
    CycleTab { forward: bool },
    /// Select an extension by map key
    SelectExtension(String),
    /// Toolbar shortcut button
    Shortcut(Shortcut),
    /// Move the extension list cursor by the given offset
    MoveCursor(isize),
    /// Jump to the first list entry
    CursorHome,
    /// Jump to the last list entry
    CursorEnd,
    /// Select the extension under the cursor
    ActivateCursor,
    /// Start editing the list filter
    FilterStart,
    /// Add a character to the filter
    FilterChar(char),
    /// Remove a character from the filter
    FilterBackspace,
    /// Clear the filter and leave filter input
    FilterClear,
    /// Open the environment menu
    OpenEnvironmentMenu,
    /// Close the environment menu without changes
    CloseEnvironmentMenu,
    /// Move the environment menu highlight
    MoveEnvironmentMenu(isize),
    /// Select the highlighted environment
    ConfirmEnvironmentMenu,
    /// Scroll the detail tables by the given offset
    ScrollDetail(isize),
    /// Re-fetch the current environment
    Refresh,
    /// Periodic UI tick (spinner)
    Tick,
    /// Terminal resized
    Resize(u16, u16),
    /// Leave the application
    Quit,
    /// Background fetch completed
    DiagnosticsLoaded(FetchOutcome),
}

/// Side effects requested by state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch the diagnostics payload for the ticket's environment
    FetchDiagnostics(FetchTicket),
}
