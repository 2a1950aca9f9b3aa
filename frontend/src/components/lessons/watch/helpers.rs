//! Pure decision logic of the lesson resolution controller.
//!
//! Everything here is synchronous and free of browser state so the
//! resolution rules can be unit tested without a DOM or a backend:
//!
//! - route-segment parsing (`parse_id`),
//! - current-lesson resolution (`resolve_current`),
//! - video source resolution (`resolve_video_source`).

use common::model::lesson::Lesson;

use crate::api::video::playlist_url;

/// Parses a raw route segment into a usable id. Zero is reserved by the
/// backend and treated the same as garbage.
pub fn parse_id(raw: &str) -> Option<u64> {
    raw.trim().parse().ok().filter(|id| *id != 0)
}

/// Outcome of resolving the current lesson against a fetched list.
#[derive(Debug, PartialEq, Eq)]
pub enum Resolution {
    Current {
        lesson_id: u64,
        /// True when the lesson was defaulted rather than route-supplied,
        /// in which case the URL is silently replaced exactly once.
        replace_url: bool,
    },
    NoLessons,
}

/// Route-supplied id wins; otherwise the first lesson of a non-empty list
/// is adopted and the caller canonicalizes the URL.
pub fn resolve_current(lessons: &[Lesson], route_lesson_id: Option<u64>) -> Resolution {
    if let Some(lesson_id) = route_lesson_id {
        return Resolution::Current {
            lesson_id,
            replace_url: false,
        };
    }
    match lessons.first() {
        Some(first) => Resolution::Current {
            lesson_id: first.id,
            replace_url: true,
        },
        None => Resolution::NoLessons,
    }
}

/// How the current lesson's video is reachable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VideoSource {
    /// Directly playable URL, handed to the player as-is.
    Direct(String),
    /// Served through the per-lesson playlist endpoint; the controller runs
    /// an entitlement preflight alongside playback.
    Adaptive(String),
}

impl VideoSource {
    pub fn url(&self) -> &str {
        match self {
            VideoSource::Direct(url) | VideoSource::Adaptive(url) => url,
        }
    }
}

pub fn resolve_video_source(lesson: &Lesson, api_base: &str) -> Option<VideoSource> {
    if let Some(url) = lesson.video_url.as_deref() {
        if !url.is_empty() {
            return Some(VideoSource::Direct(url.to_string()));
        }
    }
    if lesson.video_key.as_deref().is_some_and(|k| !k.is_empty()) {
        return Some(VideoSource::Adaptive(playlist_url(api_base, lesson.id)));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lesson(id: u64, title: &str) -> Lesson {
        Lesson {
            id,
            course_id: 42,
            title: title.into(),
            description: None,
            position: id as u32,
            video_url: None,
            video_key: None,
            is_free: false,
        }
    }

    #[test]
    fn unusable_route_segments_do_not_parse() {
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("  "), None);
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id("0"), None);
        assert_eq!(parse_id("42"), Some(42));
    }

    #[test]
    fn route_supplied_lesson_wins_without_url_replacement() {
        let lessons = vec![lesson(1, "Intro"), lesson(2, "Setup")];
        assert_eq!(
            resolve_current(&lessons, Some(2)),
            Resolution::Current {
                lesson_id: 2,
                replace_url: false
            }
        );
    }

    #[test]
    fn first_lesson_is_defaulted_with_one_url_replacement() {
        // Course 42 with lessons Intro/Setup and no deep link resolves to
        // lesson 1 and asks for the silent replace.
        let lessons = vec![lesson(1, "Intro"), lesson(2, "Setup")];
        assert_eq!(
            resolve_current(&lessons, None),
            Resolution::Current {
                lesson_id: 1,
                replace_url: true
            }
        );
    }

    #[test]
    fn empty_list_without_deep_link_has_no_resolution() {
        assert_eq!(resolve_current(&[], None), Resolution::NoLessons);
    }

    #[test]
    fn direct_url_beats_asset_key() {
        let mut l = lesson(5, "Mixed");
        l.video_url = Some("https://cdn.example.com/5.mp4".into());
        l.video_key = Some("abc".into());
        assert_eq!(
            resolve_video_source(&l, "/api"),
            Some(VideoSource::Direct("https://cdn.example.com/5.mp4".into()))
        );
    }

    #[test]
    fn asset_key_resolves_to_playlist_endpoint() {
        let mut l = lesson(5, "Adaptive");
        l.video_key = Some("abc".into());
        assert_eq!(
            resolve_video_source(&l, "/api"),
            Some(VideoSource::Adaptive("/api/lessons/5/playlist".into()))
        );
    }

    #[test]
    fn lesson_without_video_has_no_source() {
        assert_eq!(resolve_video_source(&lesson(5, "Bare"), "/api"), None);
        let mut l = lesson(6, "EmptyRefs");
        l.video_url = Some(String::new());
        l.video_key = Some(String::new());
        assert_eq!(resolve_video_source(&l, "/api"), None);
    }
}
