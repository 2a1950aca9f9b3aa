//! Minimal routing collaborator over the browser History API.
//!
//! The app only has one deep-linkable surface, the watch page, so a full
//! router is not warranted: `parse_route` maps a pathname onto [`Route`],
//! and the two navigation helpers wrap `pushState` / `replaceState`.
//! `replace_url` exists for the controller's silent canonicalization of a
//! default-resolved lesson; it must not trigger a reload or history entry.

use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    /// `/courses/{courseId}` or `/courses/{courseId}/lessons/{lessonId}`.
    /// Ids stay raw strings here; the watch controller owns the "is this a
    /// usable course id" decision.
    Watch {
        course_id: String,
        lesson_id: Option<String>,
    },
    /// `/admin/lessons/{lessonId}/video` — the transcoding status panel.
    AdminVideoStatus { lesson_id: String },
    NotFound,
}

pub fn parse_route(path: &str) -> Route {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    match segments.as_slice() {
        ["courses", course_id] => Route::Watch {
            course_id: (*course_id).to_string(),
            lesson_id: None,
        },
        ["courses", course_id, "lessons", lesson_id] => Route::Watch {
            course_id: (*course_id).to_string(),
            lesson_id: Some((*lesson_id).to_string()),
        },
        ["admin", "lessons", lesson_id, "video"] => Route::AdminVideoStatus {
            lesson_id: (*lesson_id).to_string(),
        },
        _ => Route::NotFound,
    }
}

/// Route of the current browser location.
pub fn current_route() -> Route {
    let path = web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default();
    parse_route(&path)
}

pub fn watch_path(course_id: u64, lesson_id: u64) -> String {
    format!("/courses/{}/lessons/{}", course_id, lesson_id)
}

/// Silent URL replacement: the address bar changes, history does not grow.
pub fn replace_url(path: &str) {
    apply_history(path, true);
}

pub fn push_url(path: &str) {
    apply_history(path, false);
}

/// Browser back, used by header back buttons.
pub fn back() {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        let _ = history.back();
    }
}

fn apply_history(path: &str, replace: bool) {
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        return;
    };
    let result = if replace {
        history.replace_state_with_url(&JsValue::NULL, "", Some(path))
    } else {
        history.push_state_with_url(&JsValue::NULL, "", Some(path))
    };
    if result.is_err() {
        gloo_console::warn!("history update failed for", path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_path_parses_without_lesson() {
        assert_eq!(
            parse_route("/courses/42"),
            Route::Watch {
                course_id: "42".into(),
                lesson_id: None
            }
        );
    }

    #[test]
    fn full_watch_path_parses_both_ids() {
        assert_eq!(
            parse_route("/courses/42/lessons/7"),
            Route::Watch {
                course_id: "42".into(),
                lesson_id: Some("7".into())
            }
        );
    }

    #[test]
    fn admin_video_status_path_parses() {
        assert_eq!(
            parse_route("/admin/lessons/9/video"),
            Route::AdminVideoStatus {
                lesson_id: "9".into()
            }
        );
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(parse_route("/"), Route::NotFound);
        assert_eq!(parse_route("/admin/courses"), Route::NotFound);
        assert_eq!(parse_route("/courses/42/lessons"), Route::NotFound);
    }

    #[test]
    fn watch_path_is_canonical() {
        assert_eq!(watch_path(42, 1), "/courses/42/lessons/1");
        assert!(watch_path(42, 1).ends_with("/lessons/1"));
    }
}
