// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::fmt::{self, Display};

/// The text of a search box after a keystroke.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SearchQuery {
    pub text: String,
    pub revision: u32,
}

impl SearchQuery {
    #[must_use]
    pub fn new(text: impl Into<String>, revision: u32) -> Self {
        Self {
            text: text.into(),
            revision,
        }
    }
}

impl Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SearchQuery[text={}, revision={}]", self.text, self.revision)
    }
}

#[must_use]
pub fn query_r() -> SearchQuery {
    SearchQuery::new("r", 1)
}

#[must_use]
pub fn query_ru() -> SearchQuery {
    SearchQuery::new("ru", 2)
}

#[must_use]
pub fn query_rus() -> SearchQuery {
    SearchQuery::new("rus", 3)
}

#[must_use]
pub fn query_rust() -> SearchQuery {
    SearchQuery::new("rust", 4)
}

/// Every prefix of `text`, one revision per keystroke.
#[must_use]
pub fn typing(text: &str) -> Vec<SearchQuery> {
    text.char_indices()
        .zip(1..)
        .map(|((index, ch), revision)| SearchQuery::new(&text[..index + ch.len_utf8()], revision))
        .collect()
}
