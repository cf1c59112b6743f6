// Request/response shapes exchanged with the MakeUGC API, plus the
// normalization rules that turn loose JSON into them.

use crate::extract::{extract, extract_text, text_at, Path};
use serde::Serialize;
use serde_json::Value;

/// Default video name when `--name` is not given.
pub const DEFAULT_VIDEO_NAME: &str = "UGC Video";

const AVATAR_LIST_PATHS: &[Path<'static>] = &[&["data"], &["avatars"]];
const JOB_ID_PATHS: &[Path<'static>] = &[&["id"], &["data", "id"]];
const STATUS_PATHS: &[Path<'static>] = &[&["status"], &["data", "status"]];
const DOWNLOAD_PATHS: &[Path<'static>] = &[
    &["download_url"],
    &["url"],
    &["data", "download_url"],
    &["data", "url"],
];
const FAILURE_PATHS: &[Path<'static>] = &[
    &["error"],
    &["message"],
    &["data", "error"],
    &["data", "message"],
];

/// A selectable presenter persona.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Avatar {
    pub id: String,
    pub name: String,
}

impl Avatar {
    // Plain field reads: an empty id or name is shown as-is, only a
    // missing one gets a placeholder.
    fn from_value(value: &Value) -> Self {
        Avatar {
            id: text_at(value, &["id"]).unwrap_or_else(|| "?".into()),
            name: text_at(value, &["name"]).unwrap_or_else(|| "Unnamed".into()),
        }
    }

    /// Normalizes a listing response. Accepts a bare array or an object
    /// wrapping the array under `data` or `avatars`; anything else is an
    /// empty listing. Order is preserved.
    pub fn list_from_response(body: &Value) -> Vec<Avatar> {
        let items = match body {
            Value::Array(items) => Some(items),
            _ => AVATAR_LIST_PATHS
                .iter()
                .filter_map(|path| extract(body, &[*path]))
                .find_map(Value::as_array),
        };
        items
            .map(|items| items.iter().map(Avatar::from_value).collect())
            .unwrap_or_default()
    }
}

/// Body of `POST /videos/generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationRequest {
    pub script: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_id: Option<String>,
}

impl GenerationRequest {
    /// Creates a request with the default name and no avatar.
    pub fn new(script: impl Into<String>) -> Self {
        Self {
            script: script.into(),
            name: DEFAULT_VIDEO_NAME.to_string(),
            avatar_id: None,
        }
    }

    /// Sets the video name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Selects an avatar. Empty selectors are treated as no selection.
    pub fn with_avatar(mut self, avatar_id: Option<String>) -> Self {
        self.avatar_id = avatar_id.filter(|id| !id.is_empty());
        self
    }
}

/// Identifier of a submitted job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobHandle {
    pub id: String,
}

impl JobHandle {
    /// Pulls the job id out of a submission response (`id` or `data.id`).
    pub fn from_response(body: &Value) -> Option<Self> {
        extract_text(body, JOB_ID_PATHS).map(|id| JobHandle { id })
    }
}

/// Normalized job state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobStatus {
    /// Not terminal yet. Holds the raw status text for display.
    Pending(String),
    Completed,
    Failed,
}

impl JobStatus {
    /// Maps the service's status vocabulary onto three states. Unknown
    /// words are treated as still running.
    pub fn classify(raw: &str) -> Self {
        match raw {
            "completed" | "done" | "ready" => JobStatus::Completed,
            "failed" | "error" => JobStatus::Failed,
            other => JobStatus::Pending(other.to_string()),
        }
    }

    /// Reads `status` (bare or under `data`) and classifies it.
    pub fn from_response(body: &Value) -> Self {
        let raw = extract_text(body, STATUS_PATHS).unwrap_or_else(|| "unknown".into());
        Self::classify(&raw)
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, JobStatus::Pending(_))
    }
}

/// Download link of a finished job, if the response carries one.
pub fn download_url(body: &Value) -> Option<String> {
    extract_text(body, DOWNLOAD_PATHS)
}

/// Failure reason of a failed job.
pub fn failure_message(body: &Value) -> String {
    extract_text(body, FAILURE_PATHS).unwrap_or_else(|| "Unknown error".into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_avatars_bare_list() {
        let body = json!([{"id": "a1", "name": "Jane"}, {"id": "a2", "name": "Omar"}]);
        let avatars = Avatar::list_from_response(&body);
        assert_eq!(avatars.len(), 2);
        assert_eq!(avatars[1].id, "a2");
    }

    #[test]
    fn test_avatars_wrapped_under_avatars() {
        let body = json!({"avatars": [{"id": "a1", "name": "Jane"}]});
        assert_eq!(
            Avatar::list_from_response(&body),
            vec![Avatar { id: "a1".into(), name: "Jane".into() }]
        );
    }

    #[test]
    fn test_avatars_data_takes_priority() {
        let body = json!({"data": [{"id": "d"}], "avatars": [{"id": "x"}]});
        let avatars = Avatar::list_from_response(&body);
        assert_eq!(avatars.len(), 1);
        assert_eq!(avatars[0].id, "d");
    }

    #[test]
    fn test_avatars_unknown_shape_is_empty() {
        assert!(Avatar::list_from_response(&json!({"items": []})).is_empty());
        assert!(Avatar::list_from_response(&json!({"data": "nope"})).is_empty());
        assert!(Avatar::list_from_response(&json!(null)).is_empty());
    }

    #[test]
    fn test_avatar_missing_fields_get_placeholders() {
        let avatars = Avatar::list_from_response(&json!([{"id": 7}, {"name": "Kim"}]));
        assert_eq!(avatars[0], Avatar { id: "7".into(), name: "Unnamed".into() });
        assert_eq!(avatars[1], Avatar { id: "?".into(), name: "Kim".into() });
    }

    #[test]
    fn test_avatar_empty_fields_kept() {
        let avatars = Avatar::list_from_response(&json!([{"id": "", "name": ""}]));
        assert_eq!(avatars[0], Avatar { id: String::new(), name: String::new() });
    }

    #[test]
    fn test_generation_request_serialization() {
        let req = GenerationRequest::new("Hello there");
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(body, json!({"script": "Hello there", "name": "UGC Video"}));

        let req = GenerationRequest::new("Hi")
            .with_name("Launch")
            .with_avatar(Some("av_1".into()));
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(body, json!({"script": "Hi", "name": "Launch", "avatar_id": "av_1"}));
    }

    #[test]
    fn test_empty_avatar_is_dropped() {
        let req = GenerationRequest::new("Hi").with_avatar(Some(String::new()));
        assert_eq!(req.avatar_id, None);
    }

    #[test]
    fn test_job_handle_shapes() {
        assert_eq!(
            JobHandle::from_response(&json!({"id": "vid123"})),
            Some(JobHandle { id: "vid123".into() })
        );
        assert_eq!(
            JobHandle::from_response(&json!({"data": {"id": "vid456"}})),
            Some(JobHandle { id: "vid456".into() })
        );
        assert_eq!(JobHandle::from_response(&json!({"foo": "bar"})), None);
    }

    #[test]
    fn test_status_vocabulary() {
        for word in ["completed", "done", "ready"] {
            assert_eq!(JobStatus::classify(word), JobStatus::Completed);
        }
        for word in ["failed", "error"] {
            assert_eq!(JobStatus::classify(word), JobStatus::Failed);
        }
        assert_eq!(
            JobStatus::classify("processing"),
            JobStatus::Pending("processing".into())
        );
        assert!(!JobStatus::classify("queued").is_terminal());
    }

    #[test]
    fn test_status_from_response() {
        assert_eq!(
            JobStatus::from_response(&json!({"data": {"status": "ready"}})),
            JobStatus::Completed
        );
        assert_eq!(
            JobStatus::from_response(&json!({})),
            JobStatus::Pending("unknown".into())
        );
    }

    #[test]
    fn test_download_url_lookup_order() {
        let body = json!({"url": "https://x/preview", "download_url": "https://x/y.mp4"});
        assert_eq!(download_url(&body).as_deref(), Some("https://x/y.mp4"));

        let body = json!({"data": {"url": "https://x/nested.mp4"}});
        assert_eq!(download_url(&body).as_deref(), Some("https://x/nested.mp4"));

        assert_eq!(download_url(&json!({"status": "done"})), None);
    }

    #[test]
    fn test_failure_message() {
        assert_eq!(failure_message(&json!({"error": "quota exceeded"})), "quota exceeded");
        assert_eq!(failure_message(&json!({"message": "bad script"})), "bad script");
        assert_eq!(failure_message(&json!({"status": "failed"})), "Unknown error");
    }
}
