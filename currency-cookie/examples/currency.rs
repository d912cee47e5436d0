use trillium::Conn;
use trillium_cookies::{CookiesConnExt, CookiesHandler};
use trillium_currency_cookie::CurrencyCookieEnforcer;

pub fn main() {
    env_logger::init();

    trillium_smol::run((
        CookiesHandler::new(),
        CurrencyCookieEnforcer::new(),
        |conn: Conn| async move {
            if let Some(cookie) = conn.cookies().get("vsf-currency") {
                log::info!("request currency: {}", cookie.value());
            }

            conn.ok("ok!")
        },
    ));
}
