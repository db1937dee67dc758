//! Terminal rendering of assistant replies.

use std::fmt::{self, Write};

use ir_protocol::Classification;

use crate::assistant::AssistantReply;

const RULE: &str = "------------------------------";

/// Human-readable analysis of a reply, as shown by the REPL.
pub fn reply(reply: &AssistantReply) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_reply(&mut out, reply);
    out
}

fn write_reply(out: &mut String, reply: &AssistantReply) -> fmt::Result {
    writeln!(out, "Analysis Results:\n{RULE}")?;
    match &reply.classification {
        Classification::System(m) => {
            writeln!(
                out,
                "System command detected (confidence: {:.2})\n  Category: {}\n  Command: {}",
                m.confidence, m.category, m.command
            )?;
            writeln!(out, "\nResult:\n  -> {}", reply.response)?;
            writeln!(
                out,
                "\nContext:\n  Word similarity: {:.2}\n  Sequence similarity: {:.2}\n  Context score: {:.2}",
                m.context.word_similarity, m.context.sequence_similarity, m.context.context_score
            )?;
            if !m.context.relevant_entities.is_empty() {
                writeln!(
                    out,
                    "  Relevant entities: {}",
                    m.context.relevant_entities.join(", ")
                )?;
            }
        }
        Classification::Generation(g) => {
            writeln!(
                out,
                "Generation request detected (confidence: {:.2})\n  Intent: {}",
                g.confidence, g.intent
            )?;
            writeln!(out, "\nResponse:\n{RULE}\n{}\n{RULE}", reply.response)?;
            writeln!(out, "\nContext:\n  Generation type: {}", g.context.generation_type)?;
            if !g.context.key_phrases.is_empty() {
                writeln!(out, "  Key phrases: {}", g.context.key_phrases.join(", "))?;
            }
        }
        Classification::Unclear(u) => {
            writeln!(out, "{}\n\nSuggestions:", reply.response)?;
            for s in &u.suggestions {
                writeln!(
                    out,
                    "  - {}: {}\n    Confidence: {:.2}",
                    s.category, s.command, s.confidence
                )?;
                if !s.context.relevant_entities.is_empty() {
                    let texts: Vec<&str> = s
                        .context
                        .relevant_entities
                        .iter()
                        .map(|e| e.text.as_str())
                        .collect();
                    writeln!(out, "    Relevant entities: {}", texts.join(", "))?;
                }
            }
            let intents: Vec<&str> = u.context.possible_intents.iter().map(|c| c.as_str()).collect();
            writeln!(
                out,
                "\nContext:\n  Possible intents: {}\n  Key phrases: {}",
                intents.join(", "),
                u.context.key_phrases.join(", ")
            )?;
        }
    }
    Ok(())
}
