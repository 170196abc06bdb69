use crate::views::ViewId;
use std::collections::BTreeSet;
use thiserror::Error;
use yew_router::prelude::*;

/// Navigable locations of the portal.
///
/// No `#[not_found]` variant is declared, so [`Routable::recognize`] yields
/// `None` for any path outside the table.
#[derive(Clone, Copy, Debug, Routable, PartialEq, Eq, Hash)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/dashboard")]
    Dashboard,
}

/// One row of the route table: a path, its symbolic name and the deferred view it mounts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteRecord {
    pub path: &'static str,
    pub name: &'static str,
    pub view: ViewId,
}

/// The route table, in declaration order, one row per [`Route`] variant.
pub const ROUTE_TABLE: &[RouteRecord] = &[
    RouteRecord {
        path: "/",
        name: "Home",
        view: ViewId::Home,
    },
    RouteRecord {
        path: "/login",
        name: "Login",
        view: ViewId::Login,
    },
    RouteRecord {
        path: "/dashboard",
        name: "Dashboard",
        view: ViewId::Dashboard,
    },
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteTableError {
    #[error("duplicate route path `{0}`")]
    DuplicatePath(&'static str),
    #[error("duplicate route name `{0}`")]
    DuplicateName(&'static str),
}

impl Route {
    pub const ALL: [Self; 3] = [Self::Home, Self::Login, Self::Dashboard];

    const fn index(self) -> usize {
        match self {
            Self::Home => 0,
            Self::Login => 1,
            Self::Dashboard => 2,
        }
    }

    #[must_use]
    pub const fn record(self) -> &'static RouteRecord {
        &ROUTE_TABLE[self.index()]
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        self.record().name
    }

    #[must_use]
    pub const fn view(self) -> ViewId {
        self.record().view
    }

    /// Look a route up by its symbolic name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.name() == name)
    }
}

/// Resolve a requested path to its table row.
///
/// Literal match on the declared paths; a single trailing slash is ignored.
#[must_use]
pub fn resolve(path: &str) -> Option<&'static RouteRecord> {
    Route::recognize(path).map(Route::record)
}

/// Check that every path and every name in `table` is unique.
///
/// # Errors
/// Returns the first duplicated path or name encountered in table order.
pub fn validate_table(table: &[RouteRecord]) -> Result<(), RouteTableError> {
    let mut paths = BTreeSet::new();
    let mut names = BTreeSet::new();
    for record in table {
        if !paths.insert(record.path) {
            return Err(RouteTableError::DuplicatePath(record.path));
        }
        if !names.insert(record.name) {
            return Err(RouteTableError::DuplicateName(record.name));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_rows_line_up_with_route_variants() {
        assert_eq!(ROUTE_TABLE.len(), Route::ALL.len());
        for route in Route::ALL {
            assert_eq!(route.record().path, route.to_path());
            assert_eq!(Route::recognize(route.record().path), Some(route));
        }
    }

    #[test]
    fn declared_table_is_valid() {
        assert_eq!(validate_table(ROUTE_TABLE), Ok(()));
    }

    #[test]
    fn validate_table_reports_duplicates() {
        let dup_path = [
            ROUTE_TABLE[0],
            RouteRecord {
                name: "Landing",
                ..ROUTE_TABLE[0]
            },
        ];
        assert_eq!(
            validate_table(&dup_path),
            Err(RouteTableError::DuplicatePath("/"))
        );

        let dup_name = [
            ROUTE_TABLE[1],
            RouteRecord {
                path: "/signin",
                ..ROUTE_TABLE[1]
            },
        ];
        assert_eq!(
            validate_table(&dup_name),
            Err(RouteTableError::DuplicateName("Login"))
        );
    }

    #[test]
    fn names_resolve_back_to_routes() {
        for route in Route::ALL {
            assert_eq!(Route::from_name(route.name()), Some(route));
        }
        assert_eq!(Route::from_name("home"), None);
        assert_eq!(Route::from_name("NotFound"), None);
    }
}
