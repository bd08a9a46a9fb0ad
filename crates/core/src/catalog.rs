use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Upper bound on documented parameters per script.
pub const MAX_PARAMETERS: usize = 5;

/// Literal written in a read-me's first parameter slot to declare that the
/// script takes no parameters.
pub const NO_PARAMETERS_SENTINEL: &str = "(none)";

/// A named grouping of scripts, ordered as it appears across merged read-mes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub script_count: usize,
}

impl Display for Category {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{} ({})", self.name, self.script_count)
    }
}

/// Documented parameters of a script.
///
/// The read-me sentinel `(none)` is kept out of band so downstream code can
/// never mistake it for a literal parameter description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parameters {
    None,
    Documented(Vec<String>),
}

impl Parameters {
    /// Builds the tagged variant from the slots a comment block produced.
    ///
    /// The sentinel only applies when it is the block's sole slot; anywhere
    /// else `(none)` is ordinary description text.
    #[must_use]
    pub fn from_slots(slots: Vec<String>) -> Self {
        if slots.len() == 1 && slots[0] == NO_PARAMETERS_SENTINEL {
            Parameters::None
        } else {
            Parameters::Documented(slots)
        }
    }

    #[must_use]
    pub fn count(&self) -> usize {
        match self {
            Parameters::None => 0,
            Parameters::Documented(descriptions) => descriptions.len(),
        }
    }

    #[must_use]
    pub fn descriptions(&self) -> &[String] {
        match self {
            Parameters::None => &[],
            Parameters::Documented(descriptions) => descriptions,
        }
    }

    /// Whether the invocation should leave room for user-typed arguments.
    #[must_use]
    pub fn takes_arguments(&self) -> bool {
        matches!(self, Parameters::Documented(_))
    }
}

/// One script entry: link label, file reference, documented parameters and a
/// one-line description. `source_dir` is auxiliary metadata pointing at the
/// directory of the read-me the entry came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    pub category: usize,
    pub name: String,
    pub file: String,
    pub parameters: Parameters,
    pub description: String,
    pub source_dir: PathBuf,
}

impl Display for Script {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.name)
    }
}

/// The combined, immutable result of parsing and merging all read-mes.
///
/// Category indices are contiguous and zero-based; every script's `category`
/// references an existing entry of `categories`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub categories: Vec<Category>,
    pub scripts: Vec<Script>,
}

impl Catalog {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Catalog-wide indices and records of the scripts in one category, in
    /// read-me order.
    pub fn scripts_in(&self, category: usize) -> impl Iterator<Item = (usize, &Script)> {
        self.scripts
            .iter()
            .enumerate()
            .filter(move |(_, script)| script.category == category)
    }

    /// Re-serializes the catalog into the read-me shape the parser accepts.
    ///
    /// Parsing the output yields the same category names, script labels,
    /// file targets, parameter lists and descriptions. Useful for
    /// regenerating a skeleton read-me from a validated catalog.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut out = String::from("# Scripts\n\n## Contents\n");

        for (category_index, category) in self.categories.iter().enumerate() {
            out.push_str(&format!("\n## {}\n", category.name));

            for (_, script) in self.scripts_in(category_index) {
                out.push_str(&format!("\n### [{}]({})\n", script.name, script.file));

                match &script.parameters {
                    Parameters::None => {
                        out.push_str(&format!("<!-- {NO_PARAMETERS_SENTINEL} -->\n"));
                    }
                    Parameters::Documented(descriptions) => {
                        for (i, description) in descriptions.iter().enumerate() {
                            if i + 1 == descriptions.len() {
                                out.push_str(&format!("<!-- {description} -->\n"));
                            } else {
                                out.push_str(&format!("<!-- {description}\n"));
                            }
                        }
                    }
                }

                out.push_str(&script.description);
                out.push('\n');
            }
        }

        out
    }
}
