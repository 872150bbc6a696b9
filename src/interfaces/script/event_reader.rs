use crate::domain::locale::Locale;
use crate::domain::payment::PaymentData;
use crate::domain::ports::AuthRequest;
use crate::domain::provider::RawProvider;
use crate::domain::record::{FormData, UserData};
use crate::domain::step::Step;
use crate::error::{CheckoutError, Result};
use serde::Deserialize;
use std::io::{BufRead, BufReader, Read};

/// One line of a checkout script: a collaborator callback to replay.
#[derive(Debug, Deserialize, PartialEq, Clone)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ScriptCommand {
    /// A provider as handed over by a catalog, discriminator included.
    Select { provider: RawProvider },
    /// A provider looked up in the built-in catalog by id.
    Choose { provider_id: String },
    SubmitForm { data: FormData },
    SubmitPayment { data: PaymentData },
    /// Runs the configured authenticator with these credentials.
    Authenticate {
        #[serde(default)]
        request: AuthRequest,
    },
    CompleteAuth { data: UserData },
    /// Without `from`, the request is attributed to the current step.
    Back {
        #[serde(default)]
        from: Option<Step>,
    },
    Locale { locale: Locale },
}

/// Reads checkout commands from a JSON-lines source.
///
/// Blank lines and lines starting with `#` are skipped. A malformed line
/// yields an error for that line only; reading continues with the next one.
pub struct ScriptReader<R: Read> {
    reader: BufReader<R>,
}

impl<R: Read> ScriptReader<R> {
    /// Creates a new `ScriptReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        Self {
            reader: BufReader::new(source),
        }
    }

    /// Returns an iterator that lazily reads and parses commands, with their line numbers.
    pub fn commands(self) -> impl Iterator<Item = (usize, Result<ScriptCommand>)> {
        self.reader
            .lines()
            .enumerate()
            .map(|(index, line)| (index + 1, line.map_err(CheckoutError::from)))
            .filter(|(_, line)| match line {
                Ok(text) => {
                    let text = text.trim();
                    !text.is_empty() && !text.starts_with('#')
                }
                Err(_) => true,
            })
            .map(|(number, line)| {
                let command = line.and_then(|text| {
                    serde_json::from_str::<ScriptCommand>(&text).map_err(CheckoutError::from)
                });
                (number, command)
            })
    }
}
