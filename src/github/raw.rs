//! Raw content URL conversion

use crate::constants::git::FALLBACK_BRANCH;
use crate::constants::github::{HOST, HOST_MARKER, RAW_HOST, RAW_MARKER, TREE_SEGMENT};
use crate::error::{Result, SourceError};
use crate::utils::redact_credentials;
use std::path::Path;
use url::Url;

/// Index of the first path segment after `<owner>/<repo>` in a `/`-split URL
/// (`["https:", "", host, owner, repo, ...]`).
const REF_SEGMENT_INDEX: usize = 5;

/// Convert a GitHub browse URL into a URL serving raw file contents
///
/// Steps, in order:
/// 1. a trailing `.git`, then a trailing `/`, are removed;
/// 2. hosts containing `github` but not `raw` are rewritten:
///    - `/<owner>/<repo>/tree/<ref>/...` drops the `tree` segment and keeps
///      its ref; `revision` is ignored in that case,
///    - otherwise `/<revision>` (or `/main` when empty) is appended,
///    - then `/<context>` unless `context` is empty, `.` or `./`,
///    - and `github.com` (in any letter case) becomes
///      `raw.githubusercontent.com`;
/// 3. every other URL is returned without further changes.
///
/// # Errors
/// Returns [`SourceError::InvalidUrl`] if the URL cannot be parsed.
pub fn to_raw_content_url(browse_url: &str, revision: &str, context: &str) -> Result<String> {
    let url = browse_url.strip_suffix(".git").unwrap_or(browse_url);
    let url = url.strip_suffix('/').unwrap_or(url);

    let parsed = Url::parse(url).map_err(|source| SourceError::InvalidUrl {
        url: redact_credentials(url),
        source,
    })?;
    let host = parsed.host_str().unwrap_or_default();

    if !host.contains(HOST_MARKER) || host.contains(RAW_MARKER) {
        return Ok(url.to_string());
    }

    let mut raw = match strip_tree_segment(url) {
        Some(stripped) => stripped,
        None if revision.is_empty() => format!("{}/{}", url, FALLBACK_BRANCH),
        None => format!("{}/{}", url, revision),
    };

    if let Some(context) = context_suffix(context) {
        raw.push('/');
        raw.push_str(context);
    }

    if host == HOST {
        raw = raw.replacen(input_host(url), RAW_HOST, 1);
    }

    Ok(raw)
}

/// Resolve a link found next to a repository into an absolute URL
///
/// Links that are already absolute (`http...`) are returned unchanged;
/// anything else is treated as a context directory inside `repo`.
pub fn resolve_git_link(repo: &str, revision: &str, context: &str) -> Result<String> {
    if context.starts_with("http") {
        return Ok(context.to_string());
    }
    to_raw_content_url(repo, revision, context)
}

/// Rebuild the context of a directory from its last `levels` components
///
/// `context_from_depth("/work/repo/app/web", 2)` is `"app/web"`. Zero
/// levels yields `"./"`. Walking past the root of an absolute path keeps
/// the root, so the result becomes absolute (`"/work/repo/app/web"`); a
/// relative path simply runs out of components.
pub fn context_from_depth(local_path: &Path, levels: usize) -> String {
    let mut names = Vec::new();
    let mut current = local_path;
    let mut reached_root = false;

    for _ in 0..levels {
        let Some(name) = current.file_name() else {
            reached_root = current.has_root();
            break;
        };
        names.push(name.to_string_lossy().into_owned());
        current = current.parent().unwrap_or(Path::new(""));
    }

    names.reverse();
    let context = names.join("/");
    match (reached_root, context.is_empty()) {
        (true, _) => format!("/{}", context),
        (false, true) => "./".to_string(),
        (false, false) => context,
    }
}

/// Host exactly as written in `url`
///
/// `Url` lowercases hosts, so the checks run on the parsed host while the
/// rewrite has to find the original spelling in the string.
fn input_host(url: &str) -> &str {
    let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    let host_port = authority.rsplit_once('@').map_or(authority, |(_, host)| host);
    match host_port.rsplit_once(':') {
        Some((host, port)) if port.chars().all(|c| c.is_ascii_digit()) => host,
        _ => host_port,
    }
}

/// Remove a `tree` segment that follows `<owner>/<repo>` and precedes a ref
fn strip_tree_segment(url: &str) -> Option<String> {
    let segments: Vec<&str> = url.split('/').collect();
    let last = segments.len().checked_sub(1)?;

    let index = (REF_SEGMENT_INDEX..last).find(|&i| segments[i] == TREE_SEGMENT)?;

    let kept: Vec<&str> = segments
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, segment)| *segment)
        .collect();
    Some(kept.join("/"))
}

/// Context to append, without a leading `/`
fn context_suffix(context: &str) -> Option<&str> {
    match context {
        "" | "." | "./" => None,
        _ => Some(context.strip_prefix('/').unwrap_or(context)),
    }
}
