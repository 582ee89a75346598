use std::collections::HashMap;
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PaperTexture {
    #[default]
    Cream,
    Aged,
    Dark,
    Stained,
}

impl PaperTexture {
    pub fn class_name(self) -> &'static str {
        match self {
            PaperTexture::Cream => "paper-cream",
            PaperTexture::Aged => "paper-aged",
            PaperTexture::Dark => "paper-dark",
            PaperTexture::Stained => "paper-stained",
        }
    }
}

pub fn validate_page_ids<'a, I>(ids: I) -> Result<(), ContentError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen: HashMap<&'a str, usize> = HashMap::new();
    for (index, id) in ids.into_iter().enumerate() {
        if id.trim().is_empty() {
            return Err(ContentError::BlankId { index });
        }
        if let Some(first) = seen.insert(id, index) {
            return Err(ContentError::DuplicateId {
                id: id.to_string(),
                first,
                second: index,
            });
        }
    }
    if seen.is_empty() {
        return Err(ContentError::Empty);
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    Empty,
    BlankId { index: usize },
    DuplicateId { id: String, first: usize, second: usize },
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::Empty => write!(f, "journal has no pages"),
            ContentError::BlankId { index } => write!(f, "page {index} has a blank id"),
            ContentError::DuplicateId { id, first, second } => {
                write!(f, "page id '{id}' used by pages {first} and {second}")
            }
        }
    }
}

impl std::error::Error for ContentError {}
