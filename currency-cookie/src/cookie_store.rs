use crate::{Error, Result};
use trillium::Conn;
use trillium_cookies::cookie::{Cookie, CookieJar};

/**
Read and write access to the cookies of a single client.

[`CurrencyCookieEnforcer::enforce`](crate::CurrencyCookieEnforcer::enforce)
only depends on this trait, so anything that can hold cookies can be
enforced against, including in-memory stores in tests.
*/
pub trait CookieStore {
    /// the value of the cookie named `name`, if one exists
    fn get(&self, name: &str) -> Result<Option<&str>>;

    /// adds `cookie`, replacing any cookie with the same name
    fn set(&mut self, cookie: Cookie<'static>) -> Result<()>;
}

impl CookieStore for CookieJar {
    fn get(&self, name: &str) -> Result<Option<&str>> {
        Ok(CookieJar::get(self, name).map(Cookie::value))
    }

    fn set(&mut self, cookie: Cookie<'static>) -> Result<()> {
        self.add(cookie);
        Ok(())
    }
}

impl CookieStore for Conn {
    fn get(&self, name: &str) -> Result<Option<&str>> {
        self.state::<CookieJar>()
            .ok_or(Error::StorageUnavailable)
            .and_then(|jar| CookieStore::get(jar, name))
    }

    fn set(&mut self, cookie: Cookie<'static>) -> Result<()> {
        self.state_mut::<CookieJar>()
            .ok_or(Error::StorageUnavailable)?
            .set(cookie)
    }
}
