//! GitHub repository explorer.
//!
//! Walks the contents API depth-first looking for the first file whose name
//! contains a search term. Listing errors prune that subtree and the walk
//! carries on with its siblings.

use anyhow::{bail, Result};
use serde::Deserialize;
use url::Url;

use crate::http::{FetchError, HttpGet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Dir,
    Symlink,
    Submodule,
    #[serde(other)]
    Other,
}

/// One item of a contents listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepoEntry {
    pub name: String,
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

pub struct ContentsClient<C> {
    client: C,
    api_base: String,
    owner: String,
    name: String,
}

impl<C: HttpGet> ContentsClient<C> {
    /// `repo` is `owner/name`; `api_base` is e.g. `https://api.github.com`.
    pub fn new(client: C, api_base: &str, repo: &str) -> Result<Self> {
        let Some((owner, name)) = repo.split_once('/') else {
            bail!("repository must be owner/name, got {:?}", repo);
        };
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            bail!("repository must be owner/name, got {:?}", repo);
        }
        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }

    /// Contents API URL for `path`; each path segment is percent-encoded.
    pub fn contents_url(&self, path: &str) -> Result<String, FetchError> {
        let mut url = Url::parse(&self.api_base)?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| FetchError::Url(url::ParseError::RelativeUrlWithCannotBeABaseBase))?;
            segments
                .pop_if_empty()
                .extend(["repos", self.owner.as_str(), self.name.as_str(), "contents"])
                .extend(path.split('/').filter(|s| !s.is_empty()));
        }
        Ok(url.into())
    }

    pub fn list(&mut self, path: &str) -> Result<Vec<RepoEntry>, FetchError> {
        let url = self.contents_url(path)?;
        let body = self.client.get(&url)?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// First file under `path` whose lower-cased name contains `needle`.
    pub fn search(&mut self, path: &str, needle: &str) -> Option<String> {
        let needle = needle.to_lowercase();
        self.search_in(path, &needle)
    }

    fn search_in(&mut self, path: &str, needle: &str) -> Option<String> {
        let entries = match self.list(path) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!(path = %path, "listing failed: {}", e);
                return None;
            }
        };
        for entry in entries {
            if entry.kind == EntryKind::Dir {
                if let Some(found) = self.search_in(&entry.path, needle) {
                    return Some(found);
                }
            } else if entry.name.to_lowercase().contains(needle) {
                tracing::info!(path = %entry.path, "found match");
                return Some(entry.path);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Default)]
    struct Listings {
        pages: HashMap<String, String>,
        requests: Vec<String>,
    }

    impl HttpGet for Listings {
        fn get(&mut self, url: &str) -> Result<Vec<u8>, FetchError> {
            self.requests.push(url.to_string());
            self.pages
                .get(url)
                .map(|s| s.as_bytes().to_vec())
                .ok_or(FetchError::Status(404))
        }
    }

    const ROOT: &str = "https://api.example/repos/o/r/contents";

    fn listing(entries: &[(&str, &str, &str)]) -> String {
        let items: Vec<String> = entries
            .iter()
            .map(|(name, path, kind)| {
                format!(r#"{{"name":"{name}","path":"{path}","type":"{kind}","sha":"0"}}"#)
            })
            .collect();
        format!("[{}]", items.join(","))
    }

    fn client(pages: &[(&str, String)]) -> ContentsClient<Listings> {
        let mut l = Listings::default();
        for (url, body) in pages {
            l.pages.insert(url.to_string(), body.clone());
        }
        ContentsClient::new(l, "https://api.example/", "o/r").unwrap()
    }

    #[test]
    fn contents_url_encodes_spaces() {
        let c = client(&[]);
        assert_eq!(c.contents_url("").unwrap(), ROOT);
        assert_eq!(
            c.contents_url("2D assets/Isometric Pack").unwrap(),
            format!("{ROOT}/2D%20assets/Isometric%20Pack")
        );
    }

    #[test]
    fn rejects_malformed_repo() {
        assert!(ContentsClient::new(Listings::default(), "https://x", "noslash").is_err());
        assert!(ContentsClient::new(Listings::default(), "https://x", "a/b/c").is_err());
    }

    #[test]
    fn search_is_depth_first_in_listing_order() {
        let mut c = client(&[
            (
                ROOT,
                listing(&[
                    ("3D", "3D", "dir"),
                    ("isometric.txt", "isometric.txt", "file"),
                ]),
            ),
            (
                format!("{ROOT}/3D").as_str(),
                listing(&[("Isometric Tiles.zip", "3D/Isometric Tiles.zip", "file")]),
            ),
        ]);
        assert_eq!(
            c.search("", "isometric").as_deref(),
            Some("3D/Isometric Tiles.zip")
        );
    }

    #[test]
    fn failed_subdirectory_is_skipped() {
        let mut c = client(&[(
            ROOT,
            listing(&[
                ("broken", "broken", "dir"),
                ("readme.md", "readme.md", "file"),
                ("iso_isometric.png", "iso_isometric.png", "file"),
            ]),
        )]);
        assert_eq!(c.search("", "ISOMETRIC").as_deref(), Some("iso_isometric.png"));
        assert_eq!(c.client.requests.len(), 2);
    }

    #[test]
    fn no_match_returns_none() {
        let mut c = client(&[(ROOT, listing(&[("a.png", "a.png", "file")]))]);
        assert!(c.search("", "isometric").is_none());
    }

    #[test]
    fn unknown_entry_type_parses_as_other() {
        let entries: Vec<RepoEntry> =
            serde_json::from_str(r#"[{"name":"x","path":"x","type":"weird"}]"#).unwrap();
        assert_eq!(entries[0].kind, EntryKind::Other);
    }
}
