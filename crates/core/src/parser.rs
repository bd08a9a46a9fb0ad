//! Line-oriented read-me parser.
//!
//! A read-me doubles as human documentation and machine-readable metadata.
//! The parser recognizes a small fixed subset of Markdown, strictly one line
//! at a time with no lookahead:
//!
//! - the first `## ` heading is the contents section and is skipped;
//! - every later `## ` heading opens a category;
//! - a `### [Label](target)` heading opens a script entry;
//! - the following comment block (every line carrying `<!--`, the last also
//!   carrying `-->`) documents 1..=5 parameters, or the `(none)` sentinel;
//! - the line after the block is the script's one-line description.
//!
//! Everything else is prose and is ignored. Malformed entries are fatal; a
//! partial catalog is never returned.

use log::debug;

use crate::catalog::{Category, Parameters, MAX_PARAMETERS};
use crate::error::{Error, Result};

/// Parser output for a single read-me, with file-local category indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedReadme {
    pub categories: Vec<Category>,
    pub scripts: Vec<ParsedScript>,
}

/// A script entry before merging; carries no source directory yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedScript {
    pub category: usize,
    pub name: String,
    pub file: String,
    pub parameters: Parameters,
    pub description: String,
}

/// A script heading whose comment block and description are still being read.
#[derive(Debug)]
struct OpenScript {
    category: usize,
    name: String,
    file: String,
    slots: Vec<String>,
}

/// Explicit parser state. States that are mid-entry own the entry fragment,
/// so no state can observe a half-built script it does not hold.
#[derive(Debug)]
enum ParserState {
    Seeking,
    ReadingParam(OpenScript, usize),
    ReadingDescription(OpenScript),
}

struct Parser<'a> {
    path: &'a str,
    state: ParserState,
    seen_contents: bool,
    categories: Vec<Category>,
    scripts: Vec<ParsedScript>,
}

/// Parses the raw text of one read-me.
///
/// `path` is used only for error reporting.
///
/// # Errors
///
/// Returns a format error when a script heading is not followed by a
/// parameter comment, when a comment block would exceed [`MAX_PARAMETERS`]
/// slots, when a script heading appears before any category, or when the
/// text ends in the middle of an entry.
pub fn parse_readme(text: &str, path: &str) -> Result<ParsedReadme> {
    let mut parser = Parser {
        path,
        state: ParserState::Seeking,
        seen_contents: false,
        categories: Vec::new(),
        scripts: Vec::new(),
    };

    for (index, line) in text.lines().enumerate() {
        parser.step(index + 1, line)?;
    }

    parser.finish()
}

impl Parser<'_> {
    fn step(&mut self, line_number: usize, line: &str) -> Result<()> {
        let state = std::mem::replace(&mut self.state, ParserState::Seeking);

        self.state = match state {
            ParserState::Seeking => self.seeking(line_number, line)?,
            ParserState::ReadingParam(script, slot) => {
                self.reading_param(script, slot, line_number, line)?
            }
            ParserState::ReadingDescription(script) => self.reading_description(script, line),
        };

        Ok(())
    }

    /// Between entries: watch for category and script headings.
    fn seeking(&mut self, line_number: usize, line: &str) -> Result<ParserState> {
        if let Some(rest) = line.strip_prefix("### ") {
            let Some((name, file)) = parse_script_link(rest) else {
                // A level-3 heading that is not a link is prose.
                return Ok(ParserState::Seeking);
            };

            let Some(category) = self.categories.len().checked_sub(1) else {
                return Err(Error::ScriptBeforeCategory {
                    path: self.path.to_string(),
                    line_number,
                    line: line.to_string(),
                });
            };

            self.categories[category].script_count += 1;
            debug!("{}:{line_number}: script `{name}` -> `{file}`", self.path);

            return Ok(ParserState::ReadingParam(
                OpenScript {
                    category,
                    name,
                    file,
                    slots: Vec::new(),
                },
                1,
            ));
        }

        if let Some(rest) = line.strip_prefix("## ") {
            if !self.seen_contents {
                // The first level-2 heading is the table of contents.
                self.seen_contents = true;
                return Ok(ParserState::Seeking);
            }

            self.categories.push(Category {
                name: rest.trim().to_string(),
                script_count: 0,
            });
            return Ok(ParserState::Seeking);
        }

        Ok(ParserState::Seeking)
    }

    /// Inside the comment block: every line must carry an opener; the line
    /// with the closer ends the block.
    fn reading_param(
        &mut self,
        mut script: OpenScript,
        slot: usize,
        line_number: usize,
        line: &str,
    ) -> Result<ParserState> {
        if !line.contains("<!--") {
            return Err(Error::MissingParameterComment {
                path: self.path.to_string(),
                line_number,
                line: line.to_string(),
            });
        }

        let closes = line.contains("-->");
        script.slots.push(strip_comment_delimiters(line));

        if closes {
            return Ok(ParserState::ReadingDescription(script));
        }

        if slot == MAX_PARAMETERS {
            return Err(Error::TooManyParameters {
                path: self.path.to_string(),
                line_number,
                line: line.to_string(),
            });
        }

        Ok(ParserState::ReadingParam(script, slot + 1))
    }

    /// The line after the comment block, taken verbatim.
    fn reading_description(&mut self, script: OpenScript, line: &str) -> ParserState {
        let OpenScript {
            category,
            name,
            file,
            slots,
        } = script;

        self.scripts.push(ParsedScript {
            category,
            name,
            file,
            parameters: Parameters::from_slots(slots),
            description: line.to_string(),
        });

        ParserState::Seeking
    }

    fn finish(self) -> Result<ParsedReadme> {
        match self.state {
            ParserState::Seeking => Ok(ParsedReadme {
                categories: self.categories,
                scripts: self.scripts,
            }),
            ParserState::ReadingParam(script, _) | ParserState::ReadingDescription(script) => {
                Err(Error::UnexpectedEnd {
                    path: self.path.to_string(),
                    script: script.name,
                })
            }
        }
    }
}

/// Extracts `(label, target)` from a heading shaped exactly `[Label](target)`.
fn parse_script_link(rest: &str) -> Option<(String, String)> {
    let rest = rest.trim().strip_prefix('[')?;
    let (label, remainder) = rest.split_once("](")?;
    let target = remainder.strip_suffix(')')?;

    if label.is_empty() || target.is_empty() {
        return None;
    }

    Some((label.to_string(), target.to_string()))
}

fn strip_comment_delimiters(line: &str) -> String {
    line.replace("<!--", "").replace("-->", "").trim().to_string()
}
