use crate::domain::ports::{AuthMode, AuthRequest, Authenticator};
use crate::domain::record::{Record, UserData};
use crate::domain::transaction::TransactionData;
use crate::error::{CheckoutError, Result};
use async_trait::async_trait;
use rand::Rng;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);
const MIN_PASSWORD_LEN: usize = 6;
const ID_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Stand-in for a real identity provider.
///
/// Accepts any login, checks signup passwords, waits `delay` to mimic a
/// network round trip and returns a mock identity.
#[derive(Debug, Clone)]
pub struct SimulatedAuthenticator {
    delay: Duration,
}

impl Default for SimulatedAuthenticator {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

impl SimulatedAuthenticator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    fn validate(request: &AuthRequest) -> Result<()> {
        if request.mode == AuthMode::Signup {
            if request.password != request.confirm_password {
                return Err(CheckoutError::AuthenticationError(
                    "Passwords do not match".to_string(),
                ));
            }
            if request.password.chars().count() < MIN_PASSWORD_LEN {
                return Err(CheckoutError::AuthenticationError(format!(
                    "Password must be at least {MIN_PASSWORD_LEN} characters"
                )));
            }
        }
        Ok(())
    }
}

fn user_id() -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..9)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect();
    format!("usr_{suffix}")
}

#[async_trait]
impl Authenticator for SimulatedAuthenticator {
    async fn authenticate(
        &self,
        transaction: &TransactionData,
        request: AuthRequest,
    ) -> Result<UserData> {
        Self::validate(&request)?;
        tokio::time::sleep(self.delay).await;

        let name = match request.mode {
            AuthMode::Login => request
                .email
                .split('@')
                .next()
                .unwrap_or_default()
                .to_string(),
            AuthMode::Signup => request.name,
        };
        let phone_number = if request.phone_number.is_empty() {
            transaction
                .get_str("phoneNumber")
                .unwrap_or_default()
                .to_string()
        } else {
            request.phone_number
        };
        let id = user_id();
        debug!(user = %id, mode = ?request.mode, "Simulated authentication succeeded");

        Ok(Record::new()
            .with("id", id)
            .with("name", name)
            .with("email", request.email)
            .with("phoneNumber", phone_number))
    }
}
