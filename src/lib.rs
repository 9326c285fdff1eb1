#![deny(warnings)]

use crate::args::Arguments;
use crate::callback_page::CallbackPage;
use crate::form_output::FormOutput;
use crate::output_format::OutputFormat;
use anyhow::{Context, Result, bail};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, stdin};

pub mod args;
pub mod callback_page;
pub mod config_file;
pub mod error;
pub mod failure_policy;
pub mod field_registry;
pub mod form_output;
pub mod output_format;
pub mod parameter_set;
pub mod populator;
pub mod ready_hook;
pub mod redirect_url;

pub async fn get_redirect_url(args: &Arguments) -> Result<String> {
    get_redirect_url_from(args, BufReader::new(stdin())).await
}

/// Redirect url from the arguments, or else the first line of `reader`.
pub async fn get_redirect_url_from<R>(args: &Arguments, mut reader: R) -> Result<String>
where
    R: AsyncBufRead + Unpin,
{
    if let Some(redirect_url) = &args.redirect_url {
        log::debug!("Using redirect url given in the arguments");
        return Ok(redirect_url.to_owned());
    }

    eprint!("Paste the full redirect URL here: ");
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .await
        .context("Failed to read the redirect url from stdin")?;

    let redirect_url = line.trim();
    if redirect_url.is_empty() {
        bail!("No redirect url given");
    }

    Ok(redirect_url.to_owned())
}

/// Callback page for the resolved redirect url with the form populator installed.
/// The fields get written on `load`.
pub async fn open_callback_page(args: &Arguments) -> Result<CallbackPage> {
    let redirect_url = get_redirect_url(args).await?;

    let mut page = CallbackPage::new(redirect_url);
    page.install_populator(args.failure_policy());

    Ok(page)
}

pub struct FilledForm {
    /// The form as rendered after loading, including fields left empty by a failure
    pub output: String,

    pub outcome: Result<()>,
}

/// Loads the page and renders its form whether or not the load succeeded.
pub fn fill_form(page: &mut CallbackPage, format: OutputFormat) -> Result<FilledForm> {
    let outcome = page.load().map(|_| ());
    let output = FormOutput::new(page.fields()).render(format)?;

    Ok(FilledForm { output, outcome })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn it_reads_a_trimmed_url_from_the_prompt() {
        let input: &[u8] = b"  https://app.example/cb#state=abc \nignored\n";

        let redirect_url = get_redirect_url_from(&Arguments::default(), input)
            .await
            .unwrap();

        assert_eq!(redirect_url, "https://app.example/cb#state=abc");
    }

    #[tokio::test]
    async fn it_prefers_the_argument_over_the_prompt() {
        let args = Arguments {
            redirect_url: Some("https://app.example/cb".to_owned()),
            ..Default::default()
        };
        let input: &[u8] = b"https://other.example/cb\n";

        let redirect_url = get_redirect_url_from(&args, input).await.unwrap();

        assert_eq!(redirect_url, "https://app.example/cb");
    }

    #[tokio::test]
    async fn it_fails_on_an_empty_line() {
        let input: &[u8] = b"   \n";

        let error = get_redirect_url_from(&Arguments::default(), input)
            .await
            .unwrap_err();

        assert_eq!(error.to_string(), "No redirect url given");
    }
}
