#![forbid(unsafe_code)]
#![deny(
    missing_copy_implementations,
    rustdoc::missing_crate_level_docs,
    missing_debug_implementations,
    missing_docs,
    nonstandard_style,
    unused_qualifications
)]

/*!
# Trillium handler that pins the currency preference cookie

Every conn that passes through [`CurrencyCookieEnforcer`] leaves with a
`vsf-currency` cookie of `eur`. When the client already sends that
value nothing is written; otherwise a `Set-Cookie` header is added. The
currency does not follow locale or user choice.

[`CookiesHandler`](trillium_cookies::CookiesHandler) must run first.

## example
```
use trillium::Conn;
use trillium_cookies::{CookiesConnExt, CookiesHandler};
use trillium_currency_cookie::CurrencyCookieEnforcer;

let handler = (
    CookiesHandler::new(),
    CurrencyCookieEnforcer::new(),
    |conn: Conn| async move {
        let currency = conn
            .cookies()
            .get("vsf-currency")
            .map(|cookie| cookie.value().to_string())
            .unwrap_or_default();
        conn.ok(format!("prices in {currency}"))
    },
);

use trillium_testing::prelude::*;

assert_ok!(
    get("/").on(&handler),
    "prices in eur",
    "set-cookie" => "vsf-currency=eur; Path=/"
);

assert_ok!(
    get("/")
        .with_request_header("cookie", "vsf-currency=usd")
        .on(&handler),
    "prices in eur",
    "set-cookie" => "vsf-currency=eur; Path=/"
);
```
*/

mod cookie_store;
pub use cookie_store::CookieStore;

mod currency_handler;

mod enforcer;
pub use enforcer::{currency_cookie, CurrencyCookieEnforcer, COOKIE_NAME, COOKIE_PATH, CURRENCY};

mod error;
pub use error::{Error, Result};
