//! Route dispatch key for translation rules.
//!
//! Routes are matched by exact path equality, not by prefix or pattern. A
//! path with no `RouteKey` has no translation rules; making that case a typed
//! error keeps the unknown-route branch explicit in the dispatch instead of a
//! silent fallthrough.

use thiserror::Error;

/// A route that has a translation rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteKey {
    /// The account registration endpoint
    Register,

    /// The order submission endpoint
    Order,
}

/// Returned when a request path matches no route with translation rules.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("no translation rules for route '{path}'")]
pub struct UnknownRoute {
    /// The request path that failed to match
    pub path: String,
}

impl RouteKey {
    /// Path of the registration endpoint.
    pub const REGISTER_PATH: &'static str = "/register/";

    /// Path of the order endpoint.
    pub const ORDER_PATH: &'static str = "/order/";

    /// Resolve a request path to its route key.
    ///
    /// Comparison is exact string equality, trailing slash included.
    ///
    /// # Arguments
    /// * `path` - The request path as received (e.g. `/register/`)
    ///
    /// # Returns
    /// * `Ok(RouteKey)` when the path is a route with translation rules
    /// * `Err(UnknownRoute)` otherwise
    pub fn from_path(path: &str) -> Result<RouteKey, UnknownRoute> {
        match path {
            Self::REGISTER_PATH => Ok(RouteKey::Register),
            Self::ORDER_PATH => Ok(RouteKey::Order),
            _ => Err(UnknownRoute {
                path: path.to_string(),
            }),
        }
    }

    /// The literal path this key matches.
    pub fn path(&self) -> &'static str {
        match self {
            RouteKey::Register => Self::REGISTER_PATH,
            RouteKey::Order => Self::ORDER_PATH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== from_path Tests ====================

    #[test]
    fn test_from_path_register() {
        assert_eq!(RouteKey::from_path("/register/"), Ok(RouteKey::Register));
    }

    #[test]
    fn test_from_path_order() {
        assert_eq!(RouteKey::from_path("/order/"), Ok(RouteKey::Order));
    }

    #[test]
    fn test_from_path_unknown() {
        let err = RouteKey::from_path("/unknown/").unwrap_err();
        assert_eq!(err.path, "/unknown/");
        assert!(err.to_string().contains("/unknown/"));
    }

    #[test]
    fn test_from_path_is_exact_not_prefix() {
        // No trailing slash, sub-paths, and query-like suffixes all miss
        assert!(RouteKey::from_path("/register").is_err());
        assert!(RouteKey::from_path("/register/confirm/").is_err());
        assert!(RouteKey::from_path("/order/?id=1").is_err());
    }

    #[test]
    fn test_from_path_empty() {
        assert!(RouteKey::from_path("").is_err());
    }

    // ==================== path Tests ====================

    #[test]
    fn test_path_round_trips() {
        for route in [RouteKey::Register, RouteKey::Order] {
            assert_eq!(RouteKey::from_path(route.path()), Ok(route));
        }
    }
}
