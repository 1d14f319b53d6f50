//! Pure matching over the catalog.
//!
//! Recomputed on every catalog, root or search change. No ranking: results
//! keep catalog insertion order. Two modes:
//!
//! - **Global search**: no navigation root and a non-empty query matches the
//!   whole catalog, parents ignored.
//! - **Scoped listing**: otherwise only the current root's direct children
//!   are eligible, filtered by the query when one is set.

use regex::{Regex, RegexBuilder};

use crate::model::{Catalog, Command, CommandId};

/// Compiled form of the search text.
enum Query {
    /// Empty search matches everything.
    All,
    /// Case-insensitive regex, the primary interpretation.
    Pattern(Regex),
    /// Lowercased literal, used when the query is not a valid regex.
    Literal(String),
}

impl Query {
    fn compile(query: &str) -> Self {
        if query.is_empty() {
            return Query::All;
        }
        match RegexBuilder::new(query).case_insensitive(true).build() {
            Ok(pattern) => Query::Pattern(pattern),
            // Queries like "(" are searches, not syntax errors
            Err(_) => Query::Literal(query.to_lowercase()),
        }
    }

    fn is_match(&self, text: &str) -> bool {
        match self {
            Query::All => true,
            Query::Pattern(pattern) => pattern.is_match(text),
            Query::Literal(literal) => text.to_lowercase().contains(literal),
        }
    }

    fn matches_command(&self, command: &Command) -> bool {
        self.is_match(&command.title)
            || command
                .keywords
                .as_deref()
                .is_some_and(|keywords| self.is_match(keywords))
    }
}

/// Commands eligible under the given root and search text.
pub fn matches<'a>(
    catalog: &'a Catalog,
    root: Option<&CommandId>,
    search: &str,
) -> Vec<&'a Command> {
    let query = Query::compile(search);
    let global = root.is_none() && !search.is_empty();

    catalog
        .commands()
        .iter()
        .filter(|command| global || command.parent.as_ref() == root)
        .filter(|command| query.matches_command(command))
        .collect()
}

/// A run of commands sharing a section header.
#[derive(Debug)]
pub struct SectionGroup<'a> {
    /// Section name; `None` collects the sectionless commands.
    pub name: Option<&'a str>,
    /// Members in match order.
    pub commands: Vec<&'a Command>,
}

/// Partition a match list by section, preserving first-seen section order.
pub fn group_into_sections<'a>(commands: &[&'a Command]) -> Vec<SectionGroup<'a>> {
    let mut groups: Vec<SectionGroup<'a>> = Vec::new();
    for command in commands {
        let name = command.section.as_deref();
        match groups.iter_mut().find(|group| group.name == name) {
            Some(group) => group.commands.push(command),
            None => groups.push(SectionGroup {
                name,
                commands: vec![command],
            }),
        }
    }
    groups
}
