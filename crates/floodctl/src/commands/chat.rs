//! Interactive assistant panel.
//!
//! Each input line is either a slash command or a question. Questions go
//! through the same `submit` path as suggestion picks (`/3`).

use crate::app::AppContext;
use anyhow::Result;
use flood_assistant::ConversationSession;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand {
    Quit,
    Open,
    Close,
    Suggest,
    /// 1-based suggestion number
    Pick(usize),
    Unknown(String),
    Text(String),
}

impl ChatCommand {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        let Some(command) = trimmed.strip_prefix('/') else {
            return ChatCommand::Text(trimmed.to_string());
        };
        match command {
            "quit" | "exit" | "q" => ChatCommand::Quit,
            "open" => ChatCommand::Open,
            "close" => ChatCommand::Close,
            "suggest" | "suggestions" | "s" => ChatCommand::Suggest,
            other => match other.parse::<usize>() {
                Ok(n) if n > 0 => ChatCommand::Pick(n),
                _ => ChatCommand::Unknown(other.to_string()),
            },
        }
    }
}

/// Print messages appended after `shown`; returns the new high-water mark.
fn flush<W: Write>(ctx: &AppContext, session: &ConversationSession, shown: u64, out: &mut W) -> Result<u64> {
    let fresh = session.messages_since(shown);
    ctx.write_messages(out, &fresh)?;
    Ok(fresh.last().map(|m| m.sequence).unwrap_or(shown))
}

fn list_suggestions<W: Write>(suggestions: &[String], out: &mut W) -> Result<()> {
    for (i, q) in suggestions.iter().enumerate() {
        writeln!(out, "  /{} {}", i + 1, q)?;
    }
    writeln!(out)?;
    Ok(())
}

pub async fn run<R, W>(ctx: &AppContext, input: R, out: &mut W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let suggestions: Vec<String> = ctx
        .knowledge
        .suggestions()
        .into_iter()
        .map(String::from)
        .collect();

    let session = ctx.new_session();
    session.open();
    let mut shown = flush(ctx, &session, 0, out)?;
    list_suggestions(&suggestions, out)?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let command = ChatCommand::parse(&line);
        debug!(?command, "chat input");

        let question = match command {
            ChatCommand::Quit => break,
            ChatCommand::Open => {
                if !session.is_open() {
                    session.open();
                    // reopening redraws the whole conversation
                    ctx.write_messages(out, &session.messages())?;
                    shown = session.last_sequence();
                }
                continue;
            }
            ChatCommand::Close => {
                session.close();
                writeln!(out, "(assistant closed, /open to resume)")?;
                continue;
            }
            ChatCommand::Suggest => {
                list_suggestions(&suggestions, out)?;
                continue;
            }
            ChatCommand::Unknown(name) => {
                writeln!(out, "unknown command: /{}", name)?;
                continue;
            }
            ChatCommand::Pick(n) => match suggestions.get(n - 1) {
                Some(q) => q.clone(),
                None => {
                    writeln!(out, "no suggestion {} (1-{})", n, suggestions.len())?;
                    continue;
                }
            },
            ChatCommand::Text(text) => text,
        };

        if !session.is_open() {
            writeln!(out, "(assistant closed, /open to resume)")?;
            continue;
        }
        if session.submit(&question).is_none() {
            continue;
        }
        shown = flush(ctx, &session, shown, out)?;
        session.wait_idle().await;
        shown = flush(ctx, &session, shown, out)?;
    }

    session.close();
    Ok(())
}
