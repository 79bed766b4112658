//! API route descriptors

use http::Method;
use std::fmt;

/// An API route: an HTTP method and a path relative to the base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    method: Method,
    path: &'static str,
}

impl Route {
    /// Create a route.
    pub const fn new(method: Method, path: &'static str) -> Self {
        Self { method, path }
    }

    /// Create a `GET` route.
    pub const fn get(path: &'static str) -> Self {
        Self::new(Method::GET, path)
    }

    /// The HTTP method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The path, starting with `/`.
    pub fn path(&self) -> &'static str {
        self.path
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

/// Every endpoint the SDK calls.
pub mod routes {
    use super::Route;

    /// `GET /account/me`
    pub const ACCOUNT_ME: Route = Route::get("/account/me");
    /// `GET /steam/api/profile`
    pub const PROFILE: Route = Route::get("/steam/api/profile");
    /// `GET /steam/api/profile/batch`
    pub const PROFILE_BATCH: Route = Route::get("/steam/api/profile/batch");
    /// `GET /steam/api/items`
    pub const ITEMS: Route = Route::get("/steam/api/items");
    /// `GET /steam/api/inventory`
    pub const INVENTORY: Route = Route::get("/steam/api/inventory");
    /// `GET /steam/api/inventory/batch`
    pub const INVENTORY_BATCH: Route = Route::get("/steam/api/inventory/batch");
    /// `GET /steam/api/inventory/history`
    pub const INVENTORY_HISTORY: Route = Route::get("/steam/api/inventory/history");
    /// `GET /steam/api/item`
    pub const ITEM: Route = Route::get("/steam/api/item");
    /// `GET /steam/api/history`
    pub const ITEM_HISTORY: Route = Route::get("/steam/api/history");
    /// `GET /steam/api/float`
    pub const FLOAT: Route = Route::get("/steam/api/float");
    /// `GET /steam/api/float/screenshot`
    pub const FLOAT_SCREENSHOT: Route = Route::get("/steam/api/float/screenshot");
    /// `GET /steam/api/complete/items`
    pub const AUTOCOMPLETE: Route = Route::get("/steam/api/complete/items");
    /// `GET /steam/api/info/steamid`
    pub const STEAMID_INFO: Route = Route::get("/steam/api/info/steamid");
    /// `GET /currency/api/list`
    pub const CURRENCY_LIST: Route = Route::get("/currency/api/list");
    /// `GET /currency/api/exchange`
    pub const CURRENCY_EXCHANGE: Route = Route::get("/currency/api/exchange");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_display() {
        assert_eq!(routes::ACCOUNT_ME.to_string(), "GET /account/me");
        assert_eq!(routes::ITEM_HISTORY.path(), "/steam/api/history");
        assert_eq!(routes::FLOAT.method(), &Method::GET);
    }
}
