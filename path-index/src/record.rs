use serde::{Deserialize, Serialize};

/// One indexed file and the folder path it lives in.
///
/// Several files may belong to the same photo (raw + jpeg, sidecars) and
/// several photos may share a path.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathRecord {
    pub photo_uid: String,
    pub file_uid: String,
    pub path: String,
}

impl PathRecord {
    pub fn new(
        photo_uid: impl Into<String>,
        file_uid: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            photo_uid: photo_uid.into(),
            file_uid: file_uid.into(),
            path: path.into(),
        }
    }

    /// Text before the first `/`, `None` for single level paths.
    pub fn parent(&self) -> Option<&str> {
        self.path.split_once('/').map(|(parent, _)| parent)
    }

    /// Text after the first `/`, `None` for single level paths.
    pub fn leaf(&self) -> Option<&str> {
        self.path.split_once('/').map(|(_, leaf)| leaf)
    }
}
