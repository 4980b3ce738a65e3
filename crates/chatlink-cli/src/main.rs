use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use chatlink_adapters::{LogOpener, SystemBrowser};
use chatlink_app::LinkService;
use chatlink_core::{ChatLink, Message, ScalarValue};

/// Build a WhatsApp click-to-chat link and print or open it.
#[derive(Parser, Debug)]
#[command(name = "chatlink", version)]
struct Cli {
    /// Country code, 1 to 3 digits
    #[arg(short, long, default_value = "1")]
    code: String,

    /// Subscriber number without the country code, exactly 10 digits
    #[arg(short, long)]
    number: String,

    /// Message text; repeat the flag to send a comma-joined list
    #[arg(short, long, conflicts_with = "text_json")]
    text: Vec<String>,

    /// Message as a raw JSON value (string, number, boolean or array)
    #[arg(long)]
    text_json: Option<String>,

    /// Open the link in the system browser instead of printing it
    #[arg(long)]
    open: bool,
}

impl Cli {
    fn message(&self) -> anyhow::Result<Option<Message>> {
        if let Some(raw) = &self.text_json {
            let msg: Message =
                serde_json::from_str(raw).context("--text-json is not valid JSON")?;
            return Ok(Some(msg));
        }
        Ok(match self.text.as_slice() {
            [] => None,
            [one] => Some(Message::from(one.clone())),
            many => Some(Message::List(
                many.iter().cloned().map(Message::from).collect(),
            )),
        })
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    // Raw argument strings become tagged scalars here; anything non-numeric
    // comes back from the domain as an invalid-datatype error.
    let link = ChatLink::new(
        ScalarValue::from_raw(&cli.code),
        ScalarValue::from_raw(&cli.number),
    )
    .context("invalid chat target")?;
    tracing::debug!(phone = link.phone(), "chat target validated");

    let message = cli.message()?;

    if cli.open {
        LinkService::new(link, SystemBrowser)
            .send_link(message.as_ref())
            .context("failed to open chat link")?;
    } else {
        let service = LinkService::new(link, LogOpener);
        let url = service.create_link(message.as_ref())?;
        println!("{url}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_text_flags_mean_no_message() {
        let cli = Cli::parse_from(["chatlink", "--number", "5551234567"]);
        assert_eq!(cli.message().unwrap(), None);
    }

    #[test]
    fn single_text_flag_is_plain_text() {
        let cli = Cli::parse_from(["chatlink", "--number", "5551234567", "--text", "hi"]);
        assert_eq!(cli.message().unwrap(), Some(Message::from("hi")));
    }

    #[test]
    fn repeated_text_flags_build_a_list() {
        let cli = Cli::parse_from([
            "chatlink", "--number", "5551234567", "--text", "a", "--text", "b",
        ]);
        assert_eq!(
            cli.message().unwrap(),
            Some(Message::List(vec![Message::from("a"), Message::from("b")]))
        );
    }

    #[test]
    fn text_json_parses_into_message() {
        let cli = Cli::parse_from([
            "chatlink", "--number", "5551234567", "--text-json", "[1, 2]",
        ]);
        assert_eq!(
            cli.message().unwrap(),
            Some(Message::List(vec![Message::Number(1), Message::Number(2)]))
        );
    }

    #[test]
    fn bad_json_is_an_error() {
        let cli = Cli::parse_from([
            "chatlink", "--number", "5551234567", "--text-json", "{not json",
        ]);
        assert!(cli.message().is_err());
    }
}
