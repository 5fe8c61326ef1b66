//! Navigation destinations and the command-search index over them.
//!
//! The destination list is static and rebuilt identically on every use; the
//! route slug is derived from the display name by lowercasing it.

/// Display names of every navigable destination, in menu order.
pub const DESTINATIONS: [&str; 5] = ["Dashboard", "Tasks", "Users", "Profile", "Account"];

/// A navigable page of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    Dashboard,
    #[default]
    Tasks,
    Users,
    Profile,
    Account,
}

impl Route {
    /// Resolve a destination name (case-insensitive) to its route.
    pub fn from_name(name: &str) -> Option<Route> {
        match name.to_lowercase().as_str() {
            "dashboard" => Some(Route::Dashboard),
            "tasks" => Some(Route::Tasks),
            "users" => Some(Route::Users),
            "profile" => Some(Route::Profile),
            "account" => Some(Route::Account),
            _ => None,
        }
    }

    /// URL-style slug, the lowercase of the display name.
    pub fn slug(&self) -> &'static str {
        match self {
            Route::Dashboard => "dashboard",
            Route::Tasks => "tasks",
            Route::Users => "users",
            Route::Profile => "profile",
            Route::Account => "account",
        }
    }

    /// Display name as it appears in the search overlay and navbar.
    pub fn title(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Tasks => "Tasks",
            Route::Users => "Users",
            Route::Profile => "Profile",
            Route::Account => "Account",
        }
    }

    /// Whether this route renders the task table.
    pub fn shows_tasks(&self) -> bool {
        matches!(self, Route::Dashboard | Route::Tasks)
    }
}

/// Filter the destination list by case-insensitive substring match.
///
/// A single linear pass; an empty query matches everything.
pub fn filter_destinations(query: &str) -> Vec<&'static str> {
    let needle = query.to_lowercase();
    DESTINATIONS
        .iter()
        .copied()
        .filter(|name| name.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_is_lowercased_name() {
        for name in DESTINATIONS {
            let route = Route::from_name(name).unwrap();
            assert_eq!(route.slug(), name.to_lowercase());
            assert_eq!(route.title(), name);
        }
    }

    #[test]
    fn test_unknown_name_has_no_route() {
        assert_eq!(Route::from_name("settings"), None);
        assert_eq!(Route::from_name(""), None);
    }
}
