//! One-shot question.

use crate::app::AppContext;
use anyhow::{bail, Result};
use std::io::Write;

/// Open a session, submit `question`, wait for the reply and print the
/// exchange (without the welcome message).
pub async fn run<W: Write>(ctx: &AppContext, question: &str, out: &mut W) -> Result<()> {
    let session = ctx.new_session();
    session.open();
    let mark = session.last_sequence();

    if session.submit(question).is_none() {
        bail!("Nothing to ask: the question is empty");
    }
    session.wait_idle().await;

    ctx.write_messages(out, &session.messages_since(mark))
}
