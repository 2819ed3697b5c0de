/// Prefix YouTube puts in front of the language code of speech-recognition tracks.
pub const AUTO_GENERATED_PREFIX: &str = "a.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptionTrack {
    pub code: String,
    pub name: String,
    pub source_url: String,
}

impl CaptionTrack {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        source_url: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            source_url: source_url.into(),
        }
    }

    pub fn is_auto_generated(&self) -> bool {
        self.code.starts_with(AUTO_GENERATED_PREFIX)
    }
}

/// Caption tracks of one video keyed by code, in the order the source listed them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptionTrackMap {
    tracks: Vec<CaptionTrack>,
}

impl CaptionTrackMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a track, replacing any earlier track with the same code.
    pub fn insert(&mut self, track: CaptionTrack) {
        match self.tracks.iter_mut().find(|t| t.code == track.code) {
            Some(existing) => *existing = track,
            None => self.tracks.push(track),
        }
    }

    pub fn get(&self, code: &str) -> Option<&CaptionTrack> {
        self.tracks.iter().find(|t| t.code == code)
    }

    pub fn first(&self) -> Option<&CaptionTrack> {
        self.tracks.first()
    }

    pub fn codes(&self) -> Vec<String> {
        self.tracks.iter().map(|t| t.code.clone()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CaptionTrack> {
        self.tracks.iter()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

impl FromIterator<CaptionTrack> for CaptionTrackMap {
    fn from_iter<I: IntoIterator<Item = CaptionTrack>>(iter: I) -> Self {
        let mut map = Self::new();
        for track in iter {
            map.insert(track);
        }
        map
    }
}
