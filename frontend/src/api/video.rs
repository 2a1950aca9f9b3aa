//! Adaptive-video endpoints: variant playlist, decryption key, and the
//! admin transcoding-status poll.
//!
//! Playlist and key URLs are also needed as plain strings (the playlist URL
//! is handed to the `<video>` element, the key URI appears inside the
//! playlist itself), so the builders are public alongside the fetchers.

use common::model::video::VideoStatus;

use super::{get_bytes, get_json, get_text, ApiError};

pub fn playlist_url(base: &str, lesson_id: u64) -> String {
    format!("{}/lessons/{}/playlist", base, lesson_id)
}

pub fn key_url(base: &str, lesson_id: u64, key_token: &str) -> String {
    format!("{}/lessons/{}/key?token={}", base, lesson_id, key_token)
}

/// Fetches the variant playlist as text. m3u8 is served as
/// `application/vnd.apple.mpegurl`, so the generic JSON path does not apply.
pub async fn get_playlist(
    base: &str,
    lesson_id: u64,
    token: Option<&str>,
) -> Result<String, ApiError> {
    if lesson_id == 0 {
        return Err(ApiError::Validation("lessonId is required".into()));
    }
    get_text(&playlist_url(base, lesson_id), token, "Playlist fetch").await
}

/// Fetches the AES key bytes referenced by the playlist's `EXT-X-KEY` line.
/// Used by the watch controller's playback preflight to confirm the viewer
/// is entitled to the lesson before the player starts pulling segments.
pub async fn get_decryption_key(
    base: &str,
    lesson_id: u64,
    key_token: &str,
    token: Option<&str>,
) -> Result<Vec<u8>, ApiError> {
    if lesson_id == 0 || key_token.is_empty() {
        return Err(ApiError::Validation(
            "lessonId and key token are required".into(),
        ));
    }
    get_bytes(&key_url(base, lesson_id, key_token), token, "Key fetch").await
}

/// Fetches the transcoding status of a lesson's uploaded video.
pub async fn get_video_status(
    base: &str,
    lesson_id: u64,
    token: Option<&str>,
) -> Result<VideoStatus, ApiError> {
    if lesson_id == 0 {
        return Err(ApiError::Validation("lessonId is required".into()));
    }
    let url = format!("{}/admin/lessons/{}/video/status", base, lesson_id);
    get_json(&url, token, "Video status fetch").await
}

/// Pulls the one-time key token out of the playlist's `EXT-X-KEY` URI.
///
/// Only the first key line is considered; the backend emits a single key
/// for the whole playlist.
pub fn extract_key_token(playlist: &str) -> Option<String> {
    let key_line = playlist
        .lines()
        .find_map(|line| line.strip_prefix("#EXT-X-KEY:"))?;
    let uri = key_line.split_once("URI=\"")?.1;
    let uri = uri.split_once('"')?.0;
    let query = uri.split_once('?')?.1;
    query
        .split('&')
        .find_map(|pair| pair.strip_prefix("token="))
        .map(|token| token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_token_is_extracted_from_playlist() {
        let playlist = "#EXTM3U\n\
            #EXT-X-VERSION:3\n\
            #EXT-X-KEY:METHOD=AES-128,URI=\"/api/lessons/9/key?token=abc123\",IV=0x0\n\
            #EXTINF:6.0,\n\
            seg-0.ts\n";
        assert_eq!(extract_key_token(playlist).as_deref(), Some("abc123"));
    }

    #[test]
    fn playlist_without_key_line_yields_none() {
        assert_eq!(extract_key_token("#EXTM3U\n#EXTINF:6.0,\nseg-0.ts\n"), None);
    }

    #[test]
    fn key_uri_without_token_param_yields_none() {
        let playlist = "#EXT-X-KEY:METHOD=AES-128,URI=\"/keys/static.bin\"\n";
        assert_eq!(extract_key_token(playlist), None);
    }

    #[test]
    fn url_builders_match_backend_routes() {
        assert_eq!(playlist_url("/api", 7), "/api/lessons/7/playlist");
        assert_eq!(key_url("/api", 7, "tok"), "/api/lessons/7/key?token=tok");
    }
}
