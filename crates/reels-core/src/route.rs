//! Route table
//!
//! Paths the client understands, and which roles may open them.

use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};

use crate::domain::Role;

const CONSUMER_ONLY: &[Role] = &[Role::Consumer];
const PARTNER_ONLY: &[Role] = &[Role::Partner];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Landing,
    Login,
    Register,
    PartnerRegister,
    Feed,
    Saved,
    PartnerProfile(String),
    PartnerDashboard,
    PartnerUpload,
    NotFound(String),
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let trimmed = path.split(['?', '#']).next().unwrap_or("");
        let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Landing,
            ["login"] => Route::Login,
            ["register"] => Route::Register,
            ["food-partner", "register"] => Route::PartnerRegister,
            ["food-partner", id] => {
                Route::PartnerProfile(percent_decode_str(id).decode_utf8_lossy().into_owned())
            }
            ["feed"] => Route::Feed,
            ["saved"] => Route::Saved,
            ["partner", "dashboard"] => Route::PartnerDashboard,
            ["partner", "upload"] => Route::PartnerUpload,
            _ => Route::NotFound(trimmed.to_string()),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Landing => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::PartnerRegister => "/food-partner/register".to_string(),
            Route::Feed => "/feed".to_string(),
            Route::Saved => "/saved".to_string(),
            Route::PartnerProfile(id) => {
                format!("/food-partner/{}", utf8_percent_encode(id, NON_ALPHANUMERIC))
            }
            Route::PartnerDashboard => "/partner/dashboard".to_string(),
            Route::PartnerUpload => "/partner/upload".to_string(),
            Route::NotFound(path) => path.clone(),
        }
    }

    /// Roles allowed to open this route; `None` means public
    pub fn allowed_roles(&self) -> Option<&'static [Role]> {
        match self {
            Route::Feed | Route::Saved | Route::PartnerProfile(_) => Some(CONSUMER_ONLY),
            Route::PartnerDashboard | Route::PartnerUpload => Some(PARTNER_ONLY),
            _ => None,
        }
    }

    /// Landing view for a signed-in role
    pub fn home(role: Role) -> Self {
        match role {
            Role::Consumer => Route::Feed,
            Role::Partner => Route::PartnerDashboard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_paths() {
        assert_eq!(Route::parse("/"), Route::Landing);
        assert_eq!(Route::parse("/feed/"), Route::Feed);
        assert_eq!(Route::parse("/saved?x=1"), Route::Saved);
        assert_eq!(Route::parse("/food-partner/register"), Route::PartnerRegister);
        assert_eq!(Route::parse("/food-partner/65ab"), Route::PartnerProfile("65ab".into()));
        assert_eq!(Route::parse("/partner/upload"), Route::PartnerUpload);
        assert_eq!(Route::parse("/profile"), Route::NotFound("/profile".into()));
    }

    #[test]
    fn test_path_inverts_parse() {
        for route in [
            Route::Landing,
            Route::Login,
            Route::PartnerRegister,
            Route::PartnerProfile("a b".into()),
            Route::PartnerDashboard,
        ] {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }

    #[test]
    fn test_role_homes() {
        assert_eq!(Route::home(Role::Consumer), Route::Feed);
        assert_eq!(Route::home(Role::Partner), Route::PartnerDashboard);
        assert_eq!(Route::Saved.allowed_roles(), Some(CONSUMER_ONLY));
        assert_eq!(Route::Login.allowed_roles(), None);
    }
}
