pub mod csrf;
pub mod store;

use actix_session::{Session, SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use rand::Rng;

pub use store::SessionStore;

const DECK_KEY: &str = "deck_id";
const FLASH_KEY: &str = "flash";

/// Cookie-backed session middleware. The cookie only carries ids and tokens.
pub fn middleware(key: Key) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_secure(false)
        .cookie_http_only(true)
        .build()
}

/// Signing key from SESSION_KEY when it is long enough, random otherwise.
pub fn session_key(configured: Option<&str>) -> Key {
    match configured {
        Some(val) if val.len() >= 64 => {
            log::info!("Using SESSION_KEY from environment");
            Key::from(val.as_bytes())
        }
        Some(val) => {
            log::warn!("SESSION_KEY too short ({} bytes, need 64+), generating random key", val.len());
            Key::generate()
        }
        None => {
            log::warn!("No SESSION_KEY set, generating random key (sessions lost on restart)");
            Key::generate()
        }
    }
}

/// Id of this browser session's deck in the `SessionStore`, created on first use.
pub fn deck_id(session: &Session) -> String {
    if let Ok(Some(id)) = session.get::<String>(DECK_KEY) {
        return id;
    }
    let id = random_hex();
    if let Err(e) = session.insert(DECK_KEY, &id) {
        log::warn!("Failed to store deck id in session: {e}");
    }
    id
}

pub fn set_flash(session: &Session, message: &str) {
    if let Err(e) = session.insert(FLASH_KEY, message) {
        log::warn!("Failed to store flash message: {e}");
    }
}

pub fn take_flash(session: &Session) -> Option<String> {
    let flash = session.get::<String>(FLASH_KEY).unwrap_or(None);
    if flash.is_some() {
        session.remove(FLASH_KEY);
    }
    flash
}

/// Generate a random 32-byte hex string.
fn random_hex() -> String {
    let mut rng = rand::rng();
    let bytes: [u8; 32] = rng.random();
    hex::encode(bytes)
}
