// Presentation shell - owns the three pages, selects which one is visible,
// and carries the signed-in user's summary for the header and profile modal.

use tracing::error;

use crate::api::LocalizeApi;
use crate::models::{RankProgress, User, UserInteraction};
use crate::views::{EngagePage, ExplorePage, FeaturedPage, ViewController};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Explore,
    Engage,
    Featured,
}

/// Header/profile summary derived from the user record.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileSummary {
    pub name: String,
    pub email: String,
    pub points: u32,
    pub progress: RankProgress,
    pub member_since: chrono::DateTime<chrono::Utc>,
}

pub struct AppShell {
    api: LocalizeApi,
    pub explore: ExplorePage,
    pub engage: EngagePage,
    pub featured: FeaturedPage,
    active_tab: Tab,
    show_profile: bool,
    loading: bool,
    user: Option<User>,
}

impl AppShell {
    pub fn new(api: LocalizeApi) -> Self {
        Self {
            explore: ExplorePage::new(api.clone()),
            engage: EngagePage::new(api.clone()),
            featured: FeaturedPage::new(api.clone()),
            api,
            active_tab: Tab::default(),
            show_profile: false,
            loading: false,
            user: None,
        }
    }

    /// Load the signed-in user and bring up the default tab. A failed user
    /// load degrades to a signed-out header, never a stuck shell.
    pub async fn activate(&mut self) {
        self.loading = true;
        match self.api.get_user().await {
            Ok(user) => self.user = Some(user),
            Err(err) => {
                error!("Error loading user: {}", err);
                self.user = None;
            }
        }
        self.loading = false;
        self.active_page_mut().activate().await;
    }

    /// Switch tabs; the incoming page reloads its collections, matching the
    /// original pages' fetch-on-mount behavior.
    pub async fn switch_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
        self.active_page_mut().activate().await;
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    fn active_page_mut(&mut self) -> &mut dyn ViewController {
        match self.active_tab {
            Tab::Explore => &mut self.explore,
            Tab::Engage => &mut self.engage,
            Tab::Featured => &mut self.featured,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn open_profile(&mut self) {
        self.show_profile = true;
    }

    pub fn close_profile(&mut self) {
        self.show_profile = false;
    }

    pub fn is_profile_open(&self) -> bool {
        self.show_profile
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn user_summary(&self) -> Option<ProfileSummary> {
        self.user.as_ref().map(|user| ProfileSummary {
            name: user.name.clone(),
            email: user.email.clone(),
            points: user.points,
            progress: RankProgress::for_points(user.points),
            member_since: user.joined_date,
        })
    }

    /// Recent activity for the profile modal, newest first. Degrades to an
    /// empty list on a failed fetch.
    pub async fn recent_activity(&self) -> Vec<UserInteraction> {
        match self.api.get_user_interactions().await {
            Ok(interactions) => interactions,
            Err(err) => {
                error!("Error loading interactions: {}", err);
                Vec::new()
            }
        }
    }
}
