use crate::{CurrencyCookieEnforcer, Error};
use std::borrow::Cow;
use trillium::{async_trait, Conn, Handler};

#[async_trait]
impl Handler for CurrencyCookieEnforcer {
    async fn run(&self, mut conn: Conn) -> Conn {
        match self.enforce(&mut conn) {
            Ok(()) => conn,
            Err(error @ Error::StorageUnavailable) => {
                log::error!("{}", error);
                conn.with_status(500).halt()
            }
        }
    }

    fn name(&self) -> Cow<'static, str> {
        format!(
            "CurrencyCookieEnforcer ({}={})",
            self.cookie_name(),
            self.currency()
        )
        .into()
    }
}
