use chatlink_core::link::ChatLink;
use chatlink_core::message::Message;
use chatlink_ports::outbound::UrlOpener;

use crate::error::AppError;

/// Ties a validated [`ChatLink`] to the environment's URL opener.
pub struct LinkService<O>
where
    O: UrlOpener,
{
    link: ChatLink,
    opener: O,
}

impl<O> LinkService<O>
where
    O: UrlOpener,
{
    pub fn new(link: ChatLink, opener: O) -> Self {
        Self { link, opener }
    }

    pub fn link(&self) -> &ChatLink {
        &self.link
    }

    pub fn create_link(&self, text: Option<&Message>) -> Result<String, AppError> {
        Ok(self.link.create_link(text)?)
    }

    /// Builds the link and hands it to the opener. Build failures never
    /// reach the opener; opener failures surface as [`AppError::Open`].
    pub fn send_link(&self, text: Option<&Message>) -> Result<(), AppError> {
        let url = self.create_link(text)?;
        self.opener.open(&url)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    use chatlink_core::error::DomainError;
    use chatlink_ports::error::OpenError;

    use super::*;

    // --- Mock adapters ---

    #[derive(Default)]
    struct MockOpener {
        opened: Mutex<Vec<String>>,
    }

    impl UrlOpener for MockOpener {
        fn open(&self, url: &str) -> Result<(), OpenError> {
            self.opened.lock().unwrap().push(url.to_string());
            Ok(())
        }
    }

    struct FailingOpener;

    impl UrlOpener for FailingOpener {
        fn open(&self, _url: &str) -> Result<(), OpenError> {
            Err(OpenError::Unsupported)
        }
    }

    fn chat_link() -> ChatLink {
        ChatLink::new(1.into(), 5_551_234_567i64.into()).unwrap()
    }

    #[test]
    fn send_link_hands_created_url_to_opener() {
        let service = LinkService::new(chat_link(), MockOpener::default());
        service.send_link(Some(&Message::from("hi"))).unwrap();

        let opened = service.opener.opened.lock().unwrap();
        assert_eq!(
            opened.as_slice(),
            ["https://api.whatsapp.com/send?phone=15551234567&text=hi"]
        );
    }

    #[test]
    fn send_link_without_text_omits_parameter() {
        let service = LinkService::new(chat_link(), MockOpener::default());
        service.send_link(None).unwrap();

        let opened = service.opener.opened.lock().unwrap();
        assert_eq!(
            opened.as_slice(),
            ["https://api.whatsapp.com/send?phone=15551234567"]
        );
    }

    #[test]
    fn domain_failure_never_reaches_opener() {
        let service = LinkService::new(chat_link(), MockOpener::default());
        let result = service.send_link(Some(&Message::Map(BTreeMap::new())));

        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::InvalidArgument))
        ));
        assert!(service.opener.opened.lock().unwrap().is_empty());
    }

    #[test]
    fn opener_failure_surfaces_as_open_error() {
        let service = LinkService::new(chat_link(), FailingOpener);
        let result = service.send_link(None);

        assert!(matches!(result, Err(AppError::Open(OpenError::Unsupported))));
    }

    #[test]
    fn create_link_propagates_message_too_long() {
        let service = LinkService::new(chat_link(), MockOpener::default());
        let result = service.create_link(Some(&Message::from("a".repeat(301))));

        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::MessageTooLong { .. }))
        ));
    }
}
