//! Decides what a dropped payload is: a local file to move, a remote URL to
//! download, or literal text to persist. Only existence checks touch the
//! filesystem; nothing here mutates anything.

use std::path::{Path, PathBuf};

/// Raw drag data as handed over by the windowing layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Uris(Vec<String>),
    Text(String),
}

/// What the placement pipeline should do for one classified string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropAction {
    MoveFile(PathBuf),
    Download(String),
    SaveText(String),
}

/// Classify a payload into placement actions. Each URI in a multi-URI drop
/// is classified independently; an empty URI list yields no actions.
pub fn classify(payload: &Payload) -> Vec<DropAction> {
    match payload {
        Payload::Uris(uris) => uris.iter().map(|uri| classify_uri(uri)).collect(),
        Payload::Text(text) => vec![classify_text(text)],
    }
}

fn classify_uri(uri: &str) -> DropAction {
    let decoded = urlencoding::decode(uri)
        .map(|cow| cow.into_owned())
        .unwrap_or_else(|_| uri.to_string());
    let candidate = decoded.strip_prefix("file://").unwrap_or(&decoded);
    if Path::new(candidate).exists() {
        return DropAction::MoveFile(PathBuf::from(candidate));
    }
    classify_text(candidate)
}

fn classify_text(text: &str) -> DropAction {
    if text.starts_with("http://") || text.starts_with("https://") {
        DropAction::Download(text.to_string())
    } else if Path::new(text).exists() {
        DropAction::MoveFile(PathBuf::from(text))
    } else {
        DropAction::SaveText(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn file_uri_to_existing_path_is_a_move() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("holiday photo.png");
        fs::write(&path, b"png").expect("write");

        let uri = format!("file://{}", path.display().to_string().replace(' ', "%20"));
        let actions = classify(&Payload::Uris(vec![uri]));
        assert_eq!(actions, vec![DropAction::MoveFile(path)]);
    }

    #[test]
    fn non_local_http_uri_is_a_download() {
        let actions = classify(&Payload::Uris(vec![
            "https://example.com/photo.png".to_string(),
        ]));
        assert_eq!(
            actions,
            vec![DropAction::Download("https://example.com/photo.png".to_string())]
        );
    }

    #[test]
    fn missing_file_uri_falls_through_to_text() {
        let actions = classify(&Payload::Uris(vec![
            "file:///no/such/dropped%20thing".to_string(),
        ]));
        assert_eq!(
            actions,
            vec![DropAction::SaveText("/no/such/dropped thing".to_string())]
        );
    }

    #[test]
    fn text_starting_with_http_is_a_download() {
        let actions = classify(&Payload::Text("http://example.com/a".to_string()));
        assert_eq!(
            actions,
            vec![DropAction::Download("http://example.com/a".to_string())]
        );
    }

    #[test]
    fn text_naming_an_existing_path_is_a_move() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("notes.txt");
        fs::write(&path, b"n").expect("write");

        let actions = classify(&Payload::Text(path.display().to_string()));
        assert_eq!(actions, vec![DropAction::MoveFile(path)]);
    }

    #[test]
    fn plain_text_is_saved_as_text() {
        let actions = classify(&Payload::Text("hello".to_string()));
        assert_eq!(actions, vec![DropAction::SaveText("hello".to_string())]);
    }

    #[test]
    fn multiple_uris_classify_independently() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("clip.mp4");
        fs::write(&path, b"v").expect("write");

        let actions = classify(&Payload::Uris(vec![
            format!("file://{}", path.display()),
            "https://example.com/clip.mp4".to_string(),
        ]));
        assert_eq!(
            actions,
            vec![
                DropAction::MoveFile(path),
                DropAction::Download("https://example.com/clip.mp4".to_string()),
            ]
        );
    }

    #[test]
    fn empty_uri_list_yields_no_actions() {
        assert!(classify(&Payload::Uris(Vec::new())).is_empty());
    }
}
