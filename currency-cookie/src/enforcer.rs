use crate::{CookieStore, Result};
use trillium_cookies::cookie::Cookie;

/// the name of the cookie holding the currency preference
pub const COOKIE_NAME: &str = "vsf-currency";

/// the currency every client is pinned to
pub const CURRENCY: &str = "eur";

/// the path the currency cookie is scoped to
pub const COOKIE_PATH: &str = "/";

/**
# Pins a client's currency preference cookie to a fixed value

On every conn, the cookie named [`COOKIE_NAME`] is read. If it is
missing or holds anything other than [`CURRENCY`], it is overwritten
with [`CURRENCY`] at [`COOKIE_PATH`]. If it already matches, nothing is
written and no `Set-Cookie` header is sent.

This handler must run after
[`CookiesHandler`](trillium_cookies::CookiesHandler).
*/
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrencyCookieEnforcer {
    cookie_name: String,
    currency: String,
    cookie_path: String,
}

impl Default for CurrencyCookieEnforcer {
    fn default() -> Self {
        Self {
            cookie_name: COOKIE_NAME.into(),
            currency: CURRENCY.into(),
            cookie_path: COOKIE_PATH.into(),
        }
    }
}

impl CurrencyCookieEnforcer {
    /**
    Constructs a new enforcer with the default settings:

    * cookie name: "vsf-currency"
    * currency: "eur"
    * cookie path: "/"

    ```
    # use trillium_currency_cookie::CurrencyCookieEnforcer;
    let enforcer = CurrencyCookieEnforcer::new()
        .with_cookie_name("shop-currency")
        .with_currency("chf")
        .with_cookie_path("/shop");

    assert_eq!(enforcer.cookie_name(), "shop-currency");
    assert_eq!(enforcer.currency(), "chf");
    assert_eq!(enforcer.cookie_path(), "/shop");
    ```
    */
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the name of the cookie the currency is stored in.
    pub fn with_cookie_name(mut self, cookie_name: impl AsRef<str>) -> Self {
        cookie_name.as_ref().clone_into(&mut self.cookie_name);
        self
    }

    /// Sets the currency value that will be enforced. It is compared
    /// case-sensitively and otherwise treated as an opaque string.
    pub fn with_currency(mut self, currency: impl AsRef<str>) -> Self {
        currency.as_ref().clone_into(&mut self.currency);
        self
    }

    /// Sets the path the currency cookie is written with.
    pub fn with_cookie_path(mut self, cookie_path: impl AsRef<str>) -> Self {
        cookie_path.as_ref().clone_into(&mut self.cookie_path);
        self
    }

    /// the name of the enforced cookie
    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    /// the enforced currency value
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// the path the cookie is written with
    pub fn cookie_path(&self) -> &str {
        &self.cookie_path
    }

    /**
    Reads the currency cookie from `store` and writes the configured
    currency if the cookie is missing or differs. At most one write
    happens per call, and none when the value already matches.

    ```
    # use trillium_currency_cookie::{CookieStore, CurrencyCookieEnforcer};
    # use trillium_cookies::cookie::{Cookie, CookieJar};
    let mut jar = CookieJar::new();
    jar.add_original(Cookie::new("vsf-currency", "usd"));

    CurrencyCookieEnforcer::new().enforce(&mut jar).unwrap();
    assert_eq!(CookieStore::get(&jar, "vsf-currency").unwrap(), Some("eur"));
    ```
    */
    pub fn enforce(&self, store: &mut impl CookieStore) -> Result<()> {
        match store.get(&self.cookie_name)? {
            Some(current) if current == self.currency => {
                log::trace!("{}={} already set", self.cookie_name, current);
                return Ok(());
            }

            Some(current) => log::debug!(
                "replacing {}={} with {}",
                self.cookie_name,
                current,
                self.currency
            ),

            None => log::debug!("setting missing {} to {}", self.cookie_name, self.currency),
        }

        store.set(self.build_cookie())
    }

    fn build_cookie(&self) -> Cookie<'static> {
        Cookie::build((self.cookie_name.clone(), self.currency.clone()))
            .path(self.cookie_path.clone())
            .build()
    }
}

/// Alias for [`CurrencyCookieEnforcer::new`]
pub fn currency_cookie() -> CurrencyCookieEnforcer {
    CurrencyCookieEnforcer::new()
}
