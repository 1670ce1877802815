use anyhow::{anyhow, bail, Context, Result};
use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use dioxus_logger::tracing::{info, warn};
use jsonwebtoken::DecodingKey;
use serde::{Deserialize, Serialize};

use crate::config::TOKEN_STORAGE_KEY;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub exp: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Auth {
    pub claims: Claims,
}

#[derive(Clone, Debug, PartialEq)]
pub struct User {
    pub id: String,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl Auth {
    pub fn user(&self) -> User {
        User {
            id: self.claims.sub.clone(),
            name: self.claims.name.clone(),
            email: self.claims.email.clone(),
        }
    }
}

impl User {
    pub fn display_name(&self) -> &str {
        [self.name.as_deref(), self.email.as_deref()]
            .into_iter()
            .flatten()
            .find(|x| !x.trim().is_empty())
            .unwrap_or(&self.id)
    }
}

/// Where the session token lives between page loads.
pub trait TokenStore {
    fn load(&self) -> Result<Option<String>>;
    fn clear(&self) -> Result<()>;
}

pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    pub fn open() -> Result<Self> {
        let window = web_sys::window().ok_or_else(|| anyhow!("no browser window"))?;
        let storage = window
            .local_storage()
            .map_err(|e| anyhow!("localStorage unavailable: {e:?}"))?
            .ok_or_else(|| anyhow!("localStorage is disabled"))?;

        Ok(Self { storage })
    }
}

impl TokenStore for BrowserStorage {
    fn load(&self) -> Result<Option<String>> {
        self.storage
            .get_item(TOKEN_STORAGE_KEY)
            .map_err(|e| anyhow!("failed to read {TOKEN_STORAGE_KEY}: {e:?}"))
    }

    fn clear(&self) -> Result<()> {
        self.storage
            .remove_item(TOKEN_STORAGE_KEY)
            .map_err(|e| anyhow!("failed to remove {TOKEN_STORAGE_KEY}: {e:?}"))
    }
}

pub fn decode_token(token: &str, now: DateTime<Utc>) -> Result<Claims> {
    let mut validation = jsonwebtoken::Validation::new(jsonwebtoken::Algorithm::RS256);
    validation.insecure_disable_signature_validation();
    // expiry is checked below against the caller's clock
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();

    let key = DecodingKey::from_secret(&[]);
    let payload = jsonwebtoken::decode::<Claims>(token, &key, &validation)
        .context("malformed session token")?;

    if payload.claims.exp <= now.timestamp().max(0) as usize {
        bail!("session token expired");
    }

    Ok(payload.claims)
}

/// Rebuilds the session from the stored token, discarding it when it can
/// no longer be used.
pub fn restore(store: &impl TokenStore, now: DateTime<Utc>) -> Option<Auth> {
    let token = match store.load() {
        Ok(token) => token?,
        Err(e) => {
            warn!("{e:#}");
            return None;
        }
    };

    match decode_token(&token, now) {
        Ok(claims) => {
            info!("restored session for {}", claims.sub);
            Some(Auth { claims })
        }
        Err(e) => {
            info!("discarding stored session: {e:#}");
            if let Err(e) = store.clear() {
                warn!("{e:#}");
            }
            None
        }
    }
}

/// Ends the session. The in-memory session is dropped before the store is
/// opened so the UI is signed out even when the store is unusable.
pub fn end<S: TokenStore>(
    session: &mut Option<Auth>,
    open: impl FnOnce() -> Result<S>,
) -> Result<()> {
    session.take();

    open()
        .and_then(|store| store.clear())
        .context("signed out, but the saved session could not be removed")
}

pub static AUTH: GlobalSignal<Option<Auth>> = Signal::global(|| {
    let store = match BrowserStorage::open() {
        Ok(store) => store,
        Err(e) => {
            warn!("{e:#}");
            return None;
        }
    };

    restore(&store, Utc::now())
});

pub fn is_authenticated() -> bool {
    AUTH.read().is_some()
}

pub fn current_user() -> Option<User> {
    AUTH.read().as_ref().map(Auth::user)
}

pub fn logout() -> Result<()> {
    info!("signing out");

    end(&mut AUTH.write(), BrowserStorage::open)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use jsonwebtoken::{EncodingKey, Header};
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct MemoryStore {
        token: RefCell<Option<String>>,
        clears: Cell<usize>,
        broken: bool,
    }

    impl MemoryStore {
        fn with(token: &str) -> Self {
            Self {
                token: RefCell::new(Some(token.to_string())),
                ..Default::default()
            }
        }
    }

    impl TokenStore for MemoryStore {
        fn load(&self) -> Result<Option<String>> {
            Ok(self.token.borrow().clone())
        }

        fn clear(&self) -> Result<()> {
            self.clears.set(self.clears.get() + 1);
            if self.broken {
                bail!("quota exceeded");
            }
            self.token.borrow_mut().take();
            Ok(())
        }
    }

    impl TokenStore for &MemoryStore {
        fn load(&self) -> Result<Option<String>> {
            (**self).load()
        }

        fn clear(&self) -> Result<()> {
            (**self).clear()
        }
    }

    fn claims(exp: DateTime<Utc>) -> Claims {
        Claims {
            sub: "u-42".to_string(),
            name: Some("Ana Driver".to_string()),
            email: Some("ana@example.com".to_string()),
            exp: exp.timestamp() as usize,
        }
    }

    fn mint(claims: &Claims) -> String {
        jsonwebtoken::encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(b"not-the-server-key"),
        )
        .unwrap()
    }

    #[test]
    fn decodes_unexpired_token_without_verifying_signature() {
        let now = Utc::now();
        let expected = claims(now + Duration::hours(1));

        let decoded = decode_token(&mint(&expected), now).unwrap();

        assert_eq!(decoded, expected);
    }

    #[test]
    fn rejects_expired_token() {
        let now = Utc::now();
        let token = mint(&claims(now - Duration::seconds(1)));

        let err = decode_token(&token, now).unwrap_err();

        assert!(err.to_string().contains("expired"));
    }

    #[test]
    fn token_expiring_exactly_now_is_expired() {
        let now = Utc::now();
        assert!(decode_token(&mint(&claims(now)), now).is_err());
    }

    #[test]
    fn restore_returns_session_for_valid_token() {
        let now = Utc::now();
        let token = mint(&claims(now + Duration::minutes(5)));
        let store = MemoryStore::with(&token);

        let auth = restore(&store, now).unwrap();

        assert_eq!(auth.claims.sub, "u-42");
        assert_eq!(auth.user().display_name(), "Ana Driver");
        assert_eq!(store.clears.get(), 0);
    }

    #[test]
    fn restore_discards_expired_token() {
        let now = Utc::now();
        let store = MemoryStore::with(&mint(&claims(now - Duration::days(1))));

        assert!(restore(&store, now).is_none());
        assert_eq!(store.clears.get(), 1);
        assert!(store.token.borrow().is_none());
    }

    #[test]
    fn restore_discards_garbage_token() {
        let store = MemoryStore::with("definitely.not.a-jwt");

        assert!(restore(&store, Utc::now()).is_none());
        assert_eq!(store.clears.get(), 1);
    }

    #[test]
    fn restore_without_token_is_signed_out() {
        let store = MemoryStore::default();

        assert!(restore(&store, Utc::now()).is_none());
        assert_eq!(store.clears.get(), 0);
    }

    #[test]
    fn end_clears_session_and_store_once() {
        let now = Utc::now();
        let token = mint(&claims(now + Duration::hours(1)));
        let store = MemoryStore::with(&token);
        let mut session = restore(&store, now);

        let mut opens = 0;
        end(&mut session, || {
            opens += 1;
            Ok(&store)
        })
        .unwrap();

        assert!(session.is_none());
        assert_eq!(opens, 1);
        assert_eq!(store.clears.get(), 1);
        assert!(store.token.borrow().is_none());
    }

    #[test]
    fn end_when_storage_cannot_be_opened_still_signs_out() {
        let mut session = Some(Auth {
            claims: claims(Utc::now() + Duration::hours(1)),
        });

        let open = || -> Result<MemoryStore> { bail!("localStorage is disabled") };

        let err = end(&mut session, open).unwrap_err();

        assert!(session.is_none());
        assert!(err.to_string().contains("signed out"));
        assert!(format!("{err:#}").contains("localStorage is disabled"));
    }

    #[test]
    fn end_with_broken_store_still_signs_out() {
        let now = Utc::now();
        let token = mint(&claims(now + Duration::hours(1)));
        let mut session = Some(Auth {
            claims: claims(now + Duration::hours(1)),
        });
        let store = MemoryStore {
            broken: true,
            ..MemoryStore::with(&token)
        };

        let err = end(&mut session, || Ok(&store)).unwrap_err();

        assert!(session.is_none());
        assert_eq!(store.clears.get(), 1);
        assert!(format!("{err:#}").contains("quota exceeded"));
    }

    #[test]
    fn display_name_falls_back_to_email_then_id() {
        let mut user = User {
            id: "u-1".to_string(),
            name: Some("Ana Driver".to_string()),
            email: Some("ana@example.com".to_string()),
        };
        assert_eq!(user.display_name(), "Ana Driver");

        user.name = Some("  ".to_string());
        assert_eq!(user.display_name(), "ana@example.com");

        user.email = None;
        assert_eq!(user.display_name(), "u-1");
    }
}
