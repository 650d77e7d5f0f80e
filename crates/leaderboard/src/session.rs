use common::LeaderboardConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewer {
    pub id: String,
}

/// Identity of whoever is looking at the board. Passed in explicitly; the
/// board never looks it up on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    viewer: Option<Viewer>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self { viewer: None }
    }

    pub fn signed_in(viewer_id: &str) -> Self {
        Self {
            viewer: Some(Viewer {
                id: viewer_id.to_string(),
            }),
        }
    }

    pub fn from_config(config: &LeaderboardConfig) -> Self {
        match &config.viewer_id {
            Some(id) => Self::signed_in(id),
            None => Self::anonymous(),
        }
    }

    pub fn viewer(&self) -> Option<&Viewer> {
        self.viewer.as_ref()
    }
}
