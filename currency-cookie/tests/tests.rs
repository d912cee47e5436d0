use trillium::{Conn, Handler};
use trillium_cookies::{CookiesConnExt, CookiesHandler};
use trillium_currency_cookie::{CookieStore, CurrencyCookieEnforcer, Error, COOKIE_NAME};
use trillium_testing::prelude::*;

async fn show_currency(conn: Conn) -> Conn {
    let currency = conn
        .cookies()
        .get("vsf-currency")
        .map(|cookie| cookie.value().to_string())
        .unwrap_or_else(|| String::from("none"));
    conn.ok(currency)
}

fn app() -> impl Handler {
    (CookiesHandler::new(), CurrencyCookieEnforcer::new(), show_currency)
}

#[test]
fn sets_missing_cookie() {
    assert_ok!(
        get("/").on(&app()),
        "eur",
        "set-cookie" => "vsf-currency=eur; Path=/"
    );
}

#[test]
fn replaces_other_currency() {
    assert_ok!(
        get("/")
            .with_request_header("cookie", "vsf-currency=usd")
            .on(&app()),
        "eur",
        "set-cookie" => "vsf-currency=eur; Path=/"
    );
}

#[test]
fn leaves_matching_cookie_alone() {
    let app = app();
    let mut conn = get("/")
        .with_request_header("cookie", "vsf-currency=eur")
        .on(&app);

    assert!(conn.headers_mut().get("set-cookie").is_none());
    assert_ok!(conn, "eur");
}

#[test]
fn only_writes_the_currency_cookie() {
    let app = app();
    let mut conn = get("/")
        .with_request_header("cookie", "session=abc123; vsf-currency=gbp")
        .on(&app);

    let set_cookie = conn.headers_mut().get_values("set-cookie").unwrap();
    assert_eq!(set_cookie.len(), 1);
    assert_ok!(conn, "eur", "set-cookie" => "vsf-currency=eur; Path=/");
}

#[test]
fn custom_settings() {
    let app = (
        CookiesHandler::new(),
        CurrencyCookieEnforcer::new()
            .with_cookie_name("shop-currency")
            .with_currency("chf")
            .with_cookie_path("/shop"),
        "ok",
    );

    assert_ok!(
        get("/").on(&app),
        "ok",
        "set-cookie" => "shop-currency=chf; Path=/shop"
    );

    let mut conn = get("/")
        .with_request_header("cookie", "shop-currency=chf")
        .on(&app);
    assert!(conn.headers_mut().get("set-cookie").is_none());
}

#[test]
fn without_cookies_handler() {
    let app = (CurrencyCookieEnforcer::new(), "not reached");
    let conn = get("/").on(&app);
    assert!(conn.is_halted());
    assert_status!(conn, 500);
}

#[test]
fn conn_store_without_jar() {
    let mut conn = get("/").on(&"ok");
    assert_eq!(
        CookieStore::get(&*conn, COOKIE_NAME),
        Err(Error::StorageUnavailable)
    );
    assert_eq!(
        CurrencyCookieEnforcer::new().enforce(&mut *conn),
        Err(Error::StorageUnavailable)
    );
}

#[test]
fn handler_name() {
    assert_eq!(
        CurrencyCookieEnforcer::new().name(),
        "CurrencyCookieEnforcer (vsf-currency=eur)"
    );
}
