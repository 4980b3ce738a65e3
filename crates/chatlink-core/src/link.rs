use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::message::Message;
use crate::scalar::ScalarValue;
use crate::validate::{validate, LengthRule};

/// Everything `encodeURI` leaves alone beyond alphanumerics: URI reserved
/// characters plus the unreserved marks. Message text is encoded with this
/// set so generated links match the ones produced by browser-side callers.
const ENCODE_URI: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b';')
    .remove(b',')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'#');

pub fn encode_uri(text: &str) -> String {
    utf8_percent_encode(text, ENCODE_URI).to_string()
}

/// A WhatsApp click-to-chat target: country code plus ten-digit subscriber
/// number, validated at construction and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatLink {
    code: u64,
    number: u64,
}

impl ChatLink {
    pub const BASE_URL: &'static str = "https://api.whatsapp.com/send?";
    /// Maximum encoded length of the `text` parameter.
    pub const MESSAGE_LIMIT: usize = 300;

    /// Validates the country code (1 to 3 digits) and subscriber number
    /// (exactly 10 digits). Fails instead of ever yielding a half-built
    /// value.
    pub fn new(
        country_code: ScalarValue,
        subscriber_number: ScalarValue,
    ) -> Result<Self, DomainError> {
        let code = validate("code", &country_code, &LengthRule::between(1, 3))?;
        let number = validate("phone", &subscriber_number, &LengthRule::Exact(10))?;
        Ok(Self { code, number })
    }

    /// `new` with the US country code.
    pub fn with_default_code(subscriber_number: ScalarValue) -> Result<Self, DomainError> {
        Self::new(1.into(), subscriber_number)
    }

    pub fn url(&self) -> &'static str {
        Self::BASE_URL
    }

    pub fn code(&self) -> u64 {
        self.code
    }

    pub fn number(&self) -> u64 {
        self.number
    }

    /// Full phone number: country code followed by the subscriber number,
    /// read as one integer. The number is always exactly 10 digits, so this
    /// is plain arithmetic.
    pub fn phone(&self) -> u64 {
        self.code * 10u64.pow(10) + self.number
    }

    pub fn limit(&self) -> usize {
        Self::MESSAGE_LIMIT
    }

    /// Renders the click-to-chat URL, appending `text` as a percent-encoded
    /// query parameter when present. Fails with `InvalidArgument` for map
    /// text and `MessageTooLong` when the encoded text exceeds
    /// [`Self::MESSAGE_LIMIT`].
    pub fn create_link(&self, text: Option<&Message>) -> Result<String, DomainError> {
        let Some(text) = text else {
            return Ok(format!("{}phone={}", Self::BASE_URL, self.phone()));
        };

        let encoded = encode_uri(&text.render()?);
        if encoded.len() > Self::MESSAGE_LIMIT {
            return Err(DomainError::MessageTooLong {
                length: encoded.len(),
                limit: Self::MESSAGE_LIMIT,
            });
        }
        Ok(format!(
            "{}phone={}&text={}",
            Self::BASE_URL,
            self.phone(),
            encoded
        ))
    }
}
