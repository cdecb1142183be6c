//! Suggested questions.

use crate::app::AppContext;
use anyhow::Result;
use owo_colors::OwoColorize;
use std::io::Write;

pub fn run<W: Write>(ctx: &AppContext, out: &mut W) -> Result<()> {
    let suggestions = ctx.knowledge.suggestions();
    if ctx.json {
        serde_json::to_writer_pretty(&mut *out, &suggestions)?;
        writeln!(out)?;
        return Ok(());
    }

    let color = ctx.render_options().color;
    for (i, question) in suggestions.iter().enumerate() {
        let number = format!("{:>2}.", i + 1);
        if color {
            writeln!(out, "{} {}", number.dimmed(), question)?;
        } else {
            writeln!(out, "{} {}", number, question)?;
        }
    }
    Ok(())
}
