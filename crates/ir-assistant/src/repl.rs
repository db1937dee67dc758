//! Interactive loop.
//!
//! - `exit` quits.
//! - `correct: <text>` records a correction for the previous input.
//! - After each reply the user may answer `good` or `bad`; anything else
//!   skips feedback.

use std::io;

use ir_engine::FeedbackReceipt;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::warn;

use crate::assistant::Assistant;
use crate::render;

const BANNER: &str = "\nIntent Router Assistant\n\
Type 'exit' to quit\n\
Type 'correct: [correction]' to correct the previous command\n\
Type 'good' or 'bad' after each response to provide feedback\n\
--------------------------------------------------";

const CORRECTION_PREFIX: &str = "correct:";

/// Run the loop until `exit` or end of input.
pub async fn run<R, W>(assistant: &Assistant, input: R, mut output: W) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    let mut last_input: Option<String> = None;

    say(&mut output, BANNER).await?;

    loop {
        prompt(&mut output, "\nYou: ").await?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let text = line.trim();

        if text.eq_ignore_ascii_case("exit") {
            say(&mut output, "Goodbye!").await?;
            break;
        }
        if text.is_empty() {
            continue;
        }

        if let Some(correction) = text.strip_prefix(CORRECTION_PREFIX) {
            let message = match &last_input {
                Some(previous) => match assistant.correct(previous, correction.trim()) {
                    Ok(receipt) => with_warning("Thanks for the correction!", &receipt),
                    Err(e) => format!("Could not record correction: {e}"),
                },
                None => "Nothing to correct yet.".to_string(),
            };
            say(&mut output, &message).await?;
            continue;
        }

        let reply = match assistant.handle(text).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!(error = %e, "input could not be analysed");
                say(&mut output, &format!("Could not analyse input: {e}")).await?;
                continue;
            }
        };
        last_input = Some(text.to_string());
        say(&mut output, &render::reply(&reply)).await?;

        prompt(&mut output, "\nWas this response helpful? (good/bad): ").await?;
        let Some(answer) = lines.next_line().await? else {
            break;
        };
        let success = match answer.trim().to_lowercase().as_str() {
            "good" => true,
            "bad" => false,
            _ => continue,
        };
        match assistant.feedback(text, success, None) {
            Ok(receipt) => {
                if let Some(warning) = &receipt.warning {
                    say(&mut output, &format!("Warning: {warning}")).await?;
                }
            }
            Err(e) => say(&mut output, &format!("Could not record feedback: {e}")).await?,
        }
    }

    output.flush().await
}

fn with_warning(message: &str, receipt: &FeedbackReceipt) -> String {
    match &receipt.warning {
        Some(warning) => format!("{message}\nWarning: {warning}"),
        None => message.to_string(),
    }
}

async fn say<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> io::Result<()> {
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n").await
}

async fn prompt<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> io::Result<()> {
    output.write_all(text.as_bytes()).await?;
    output.flush().await
}
