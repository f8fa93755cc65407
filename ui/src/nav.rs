use crate::components::icons::Icon;
use crate::routes::create_page_url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub page: &'static str,
    pub icon: Icon,
}

impl NavItem {
    pub fn href(&self) -> String {
        create_page_url(self.page)
    }

    /// Exact match only, `/CarOps/x` does not activate `CarOps`.
    pub fn is_active(&self, pathname: &str) -> bool {
        pathname == self.href()
    }
}

/// Display order; the footer lists them in the same order.
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { name: "Home", page: "Landing", icon: Icon::Zap },
    NavItem { name: "Predictive Maintenance", page: "PredictiveMaintenance", icon: Icon::Activity },
    NavItem { name: "CarOps", page: "CarOps", icon: Icon::Droplets },
    NavItem { name: "Detailing", page: "DetailingMarketplace", icon: Icon::Sparkles },
];

pub fn active_item(pathname: &str) -> Option<&'static NavItem> {
    NAV_ITEMS.iter().find(|item| item.is_active(pathname))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    pub fn tap(&mut self) {
        *self = match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        };
    }

    pub fn select_link(&mut self) {
        *self = MenuState::Closed;
    }

    pub fn toggle_icon(self) -> Icon {
        match self {
            MenuState::Closed => Icon::Menu,
            MenuState::Open => Icon::X,
        }
    }
}
