// Rust guideline compliant 2026-02-09

//! Page navigation with access rules.

use crate::session::Session;
use rewear_core::ItemCatalog;
use std::fmt;
use std::str::FromStr;

/// Every page of the exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    /// Landing page.
    Home,
    /// Sign-in form.
    Login,
    /// Registration form.
    Signup,
    /// Catalog browser.
    Browse,
    /// Details of one item.
    ItemDetail(String),
    /// Member dashboard.
    Dashboard,
    /// Listing form.
    AddItem,
    /// Moderation panel.
    Admin,
}

impl Page {
    /// Returns true if the page needs a signed-in user.
    pub fn requires_auth(&self) -> bool {
        matches!(self, Page::Dashboard | Page::AddItem | Page::Admin)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Page::Home => f.write_str("home"),
            Page::Login => f.write_str("login"),
            Page::Signup => f.write_str("signup"),
            Page::Browse => f.write_str("browse"),
            Page::ItemDetail(id) => write!(f, "item/{}", id),
            Page::Dashboard => f.write_str("dashboard"),
            Page::AddItem => f.write_str("add-item"),
            Page::Admin => f.write_str("admin"),
        }
    }
}

impl FromStr for Page {
    type Err = crate::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(id) = s.strip_prefix("item/") {
            return Ok(Page::ItemDetail(id.to_string()));
        }
        match s {
            "home" => Ok(Page::Home),
            "login" => Ok(Page::Login),
            "signup" => Ok(Page::Signup),
            "browse" => Ok(Page::Browse),
            "dashboard" => Ok(Page::Dashboard),
            "add-item" => Ok(Page::AddItem),
            "admin" => Ok(Page::Admin),
            _ => Err(crate::AppError::InvalidInput(format!("Unknown page: {}", s))),
        }
    }
}

/// Resolves the page actually shown for a requested page.
///
/// - Protected pages send anonymous visitors to the login page.
/// - The moderation panel sends members without the role to their dashboard.
/// - An item page for an unknown item falls back to the catalog browser.
pub fn resolve(requested: Page, session: &Session, catalog: &ItemCatalog) -> Page {
    if requested.requires_auth() && !session.is_authenticated() {
        return Page::Login;
    }

    match requested {
        Page::Admin if !session.is_admin => Page::Dashboard,
        Page::ItemDetail(ref id) if !catalog.contains(id) => Page::Browse,
        page => page,
    }
}
