use thiserror::Error;

/// Concrete errors that occur while enforcing the currency cookie
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// there is no cookie jar to read from or write to. On a
    /// [`Conn`](trillium::Conn), this means
    /// [`CookiesHandler`](trillium_cookies::CookiesHandler) has not run
    /// before the currency cookie handler
    #[error("cookie jar unavailable, CookiesHandler must run before CurrencyCookieEnforcer")]
    StorageUnavailable,
}

/// this crate's result type
pub type Result<T> = std::result::Result<T, Error>;
