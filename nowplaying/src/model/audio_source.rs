use serde::{Deserialize, Serialize};

/// A named position inside an audio source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    pub title: String,
    /// Start offset in seconds
    pub start: f64,
}

impl Chapter {
    pub fn new(title: impl Into<String>, start: f64) -> Self {
        Self {
            title: title.into(),
            start,
        }
    }
}

/// An audio resource together with the metadata shown by the player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioSource {
    pub url: String,
    pub title: String,
    pub artist: String,
    pub artwork: Option<String>,
    #[serde(default)]
    pub chapters: Vec<Chapter>,
}

impl AudioSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: String::new(),
            artist: String::new(),
            artwork: None,
            chapters: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = artist.into();
        self
    }

    pub fn with_artwork(mut self, artwork: impl Into<String>) -> Self {
        self.artwork = Some(artwork.into());
        self
    }

    /// Set the chapter list, ordered by start offset
    pub fn with_chapters(mut self, mut chapters: Vec<Chapter>) -> Self {
        chapters.sort_by(|a, b| a.start.total_cmp(&b.start));
        self.chapters = chapters;
        self
    }

    /// Index of the chapter containing `time`
    pub fn chapter_at(&self, time: f64) -> Option<usize> {
        self.chapters.iter().rposition(|chapter| chapter.start <= time)
    }
}
