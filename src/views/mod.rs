// View controllers - headless page state machines over the data-access
// facade. Each page owns its collections and ephemeral filter state, loads
// once on activation, and recomputes its filtered view synchronously on every
// change. Load failures degrade to an empty page, never a stuck spinner.

pub mod engage;
pub mod explore;
pub mod featured;
pub mod shell;

pub use engage::EngagePage;
pub use explore::{ExplorePage, ViewMode};
pub use featured::FeaturedPage;
pub use shell::{AppShell, ProfileSummary, Tab};

use async_trait::async_trait;

/// A page the shell can bring on screen.
#[async_trait]
pub trait ViewController {
    /// Fetch the page's collections from the facade. Sets the loading flag
    /// for the duration and clears it whether the load succeeds or fails.
    async fn activate(&mut self);

    fn is_loading(&self) -> bool;
}

/// User-visible acknowledgment for an action; the blocking alert of the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Failure(String),
}

impl Notice {
    pub fn is_success(&self) -> bool {
        matches!(self, Notice::Success(_))
    }

    pub fn message(&self) -> &str {
        match self {
            Notice::Success(msg) | Notice::Failure(msg) => msg,
        }
    }
}
