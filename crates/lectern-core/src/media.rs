//! Media classification by file extension.

use serde::{Deserialize, Serialize};

/// Video extensions the player understands.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "avi", "mov", "wmv", "flv", "webm", "mkv", "m4v"];

/// Image extensions the viewer understands.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "webp", "svg"];

/// Classification of a file derived from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    /// Playable video file.
    Video,
    /// Viewable image file.
    Image,
    /// Listed but not playable.
    Other,
}

impl MediaKind {
    /// Classify a file name by case-insensitive extension match.
    ///
    /// Video is checked first and wins if the extension sets ever
    /// overlapped; the sets are disjoint by construction (asserted in
    /// tests), so in practice the order does not matter.
    pub fn classify(filename: &str) -> Self {
        let lower = filename.to_lowercase();
        if has_extension(&lower, VIDEO_EXTENSIONS) {
            MediaKind::Video
        } else if has_extension(&lower, IMAGE_EXTENSIONS) {
            MediaKind::Image
        } else {
            MediaKind::Other
        }
    }

    /// Check if this is a video.
    pub fn is_video(self) -> bool {
        matches!(self, MediaKind::Video)
    }

    /// Check if this is an image.
    pub fn is_image(self) -> bool {
        matches!(self, MediaKind::Image)
    }

    /// Whether the player can display this file at all.
    pub fn is_playable(self) -> bool {
        !matches!(self, MediaKind::Other)
    }
}

fn has_extension(lower_name: &str, extensions: &[&str]) -> bool {
    extensions
        .iter()
        .any(|ext| lower_name.strip_suffix(ext).is_some_and(|rest| rest.ends_with('.')))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_video_case_insensitive() {
        assert_eq!(MediaKind::classify("lecture.MP4"), MediaKind::Video);
        assert_eq!(MediaKind::classify("clip.webm"), MediaKind::Video);
        assert_eq!(MediaKind::classify("old.WmV"), MediaKind::Video);
    }

    #[test]
    fn test_classify_image() {
        assert_eq!(MediaKind::classify("diagram.SVG"), MediaKind::Image);
        assert_eq!(MediaKind::classify("photo.jpeg"), MediaKind::Image);
    }

    #[test]
    fn test_classify_inert() {
        assert_eq!(MediaKind::classify("notes.txt"), MediaKind::Other);
        assert_eq!(MediaKind::classify("mp4"), MediaKind::Other);
        assert_eq!(MediaKind::classify("archive.mp4.bak"), MediaKind::Other);
    }

    #[test]
    fn test_extension_sets_disjoint() {
        for ext in VIDEO_EXTENSIONS {
            assert!(!IMAGE_EXTENSIONS.contains(ext), "{ext} is in both sets");
        }
    }

    #[test]
    fn test_playable() {
        assert!(MediaKind::Video.is_playable());
        assert!(MediaKind::Image.is_playable());
        assert!(!MediaKind::Other.is_playable());
    }
}
