use std::path::{Component, Path};

/// A template image and the URL it is fetched from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub file_name: &'static str,
    pub url: &'static str,
}

impl Template {
    pub const fn new(file_name: &'static str, url: &'static str) -> Self {
        Self { file_name, url }
    }

    /// True when the name is a single, non-empty path component.
    pub fn has_plain_file_name(&self) -> bool {
        let mut components = Path::new(self.file_name).components();

        matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        )
    }
}

pub const TEMPLATES: &[Template] = &[
    Template::new(
        "drake.jpg",
        "https://imgflip.com/s/meme/Drake-Hotline-Bling.jpg",
    ),
    Template::new(
        "distracted.jpg",
        "https://imgflip.com/s/meme/Distracted-Boyfriend.jpg",
    ),
    Template::new("buttons.jpg", "https://imgflip.com/s/meme/Two-Buttons.jpg"),
    Template::new("mind.jpg", "https://imgflip.com/s/meme/Change-My-Mind.jpg"),
];
