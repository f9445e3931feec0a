//! Compiled route table and path resolution.
//!
//! [`RouteTable::new`] flattens nested [`RouteRecord`]s into [`RouteEntry`]s
//! (joining child paths onto their parent and merging meta) and ranks them.
//! [`RouteTable::resolve`] then maps a location string to a [`ResolvedRoute`],
//! following redirects.
//!
//! # Ranking
//!
//! Entries are compared segment by segment: a static segment outranks a
//! parameter at the same position, so `/exam/list` wins over `/exam/:id` no
//! matter which was declared first.  Entries of equal rank keep declaration
//! order.
//!
//! # Matching rules
//!
//! - Static segments compare ASCII case-insensitively.
//! - A `:param` captures exactly one non-empty segment.  Captured values are
//!   percent-decoded (`/exam/%37` has `id = "7"`); a value that does not
//!   decode to UTF-8 is kept as written.  Redirect templates are filled with
//!   the raw segment so the target path stays encoded.
//! - A trailing slash is ignored (`/videos/` matches `/videos`).
//! - `?query` and `#hash` are not matched but survive in `full_path` and
//!   across redirects.
//! - A location that matches nothing is not an error: it resolves to a route
//!   with an empty `matched` chain and no meta, and navigation still runs.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use super::record::{RouteMeta, RouteRecord, View};
use super::standard::standard_routes;

/// Maximum number of redirects followed while resolving one location.
pub const MAX_REDIRECTS: usize = 10;

/// Errors that can occur while resolving a location.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    /// The location does not start with `/`.
    #[error("invalid location {0:?}: must start with '/'")]
    InvalidPath(String),

    /// Redirects did not settle within [`MAX_REDIRECTS`] hops.
    #[error("too many redirects while resolving {0:?}")]
    RedirectLoop(String),

    /// A redirect template names a param the matched pattern did not capture.
    #[error("redirect {redirect:?} needs :{param}, which {path:?} does not provide")]
    MissingRedirectParam {
        redirect: String,
        param: String,
        path: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
}

/// A flattened, compiled route.
#[derive(Debug, Clone, Serialize)]
pub struct RouteEntry {
    /// Absolute pattern, e.g. `/admin/welcome` or `/exam/:id`.
    pub pattern: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Views from the outermost parent to this entry.
    pub matched: Vec<View>,
    /// Meta merged from the parent chain, child fields winning.
    pub meta: RouteMeta,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
    #[serde(skip)]
    segments: Vec<Segment>,
}

impl RouteEntry {
    fn captures(&self, actual: &[&str]) -> Option<BTreeMap<String, String>> {
        if self.segments.len() != actual.len() {
            return None;
        }
        let mut params = BTreeMap::new();
        for (pattern, segment) in self.segments.iter().zip(actual) {
            match pattern {
                Segment::Static(s) if s.eq_ignore_ascii_case(segment) => {}
                Segment::Static(_) => return None,
                Segment::Param(_) if segment.is_empty() => return None,
                Segment::Param(name) => {
                    params.insert(name.clone(), (*segment).to_string());
                }
            }
        }
        Some(params)
    }

    fn rank(&self) -> Vec<u8> {
        self.segments
            .iter()
            .map(|s| match s {
                Segment::Static(_) => 1,
                Segment::Param(_) => 0,
            })
            .collect()
    }
}

/// The outcome of resolving a location against the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedRoute {
    /// Path part of the final location (no query, no hash).
    pub path: String,
    /// Final location including query and hash.
    pub full_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Matched views, outermost first.  Empty when nothing matched.
    pub matched: Vec<View>,
    pub params: BTreeMap<String, String>,
    pub meta: RouteMeta,
    /// The location originally requested, when redirects were followed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirected_from: Option<String>,
}

impl ResolvedRoute {
    /// The location a navigator sits at before its first navigation.
    pub fn start() -> Self {
        Self::unmatched("/", "/", None)
    }

    fn unmatched(path: &str, full_path: &str, redirected_from: Option<String>) -> Self {
        Self {
            path: path.to_string(),
            full_path: full_path.to_string(),
            name: None,
            matched: Vec::new(),
            params: BTreeMap::new(),
            meta: RouteMeta::default(),
            redirected_from,
        }
    }

    /// The innermost matched view, i.e. the page to render.
    pub fn view(&self) -> Option<View> {
        self.matched.last().copied()
    }

    pub fn is_matched(&self) -> bool {
        !self.matched.is_empty()
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    pub fn title(&self) -> Option<&str> {
        self.meta.title.as_deref()
    }
}

/// The compiled, immutable route table.
#[derive(Debug, Clone)]
pub struct RouteTable {
    /// Entries in declaration order (parents before their children).
    entries: Vec<RouteEntry>,
    /// Indices into `entries`, best rank first.
    ranked: Vec<usize>,
}

impl RouteTable {
    pub fn new(records: &[RouteRecord]) -> Self {
        let mut entries = Vec::new();
        for record in records {
            flatten(record, "", &[], &RouteMeta::default(), &mut entries);
        }

        let mut ranked: Vec<usize> = (0..entries.len()).collect();
        // `sort_by` is stable, so equal ranks keep declaration order.
        ranked.sort_by(|&a, &b| entries[b].rank().cmp(&entries[a].rank()));

        Self { entries, ranked }
    }

    /// The platform's own route table.
    pub fn standard() -> Self {
        Self::new(&standard_routes())
    }

    /// All entries in declaration order.
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// Finds the entry registered under `name`.
    pub fn by_name(&self, name: &str) -> Option<&RouteEntry> {
        self.entries.iter().find(|e| e.name.as_deref() == Some(name))
    }

    /// Resolves `location` to a route, following redirects.
    ///
    /// # Errors
    ///
    /// - [`RouteError::InvalidPath`] if `location` does not start with `/`.
    /// - [`RouteError::RedirectLoop`] after [`MAX_REDIRECTS`] redirects.
    /// - [`RouteError::MissingRedirectParam`] for a redirect template that
    ///   references a param its pattern does not capture.
    pub fn resolve(&self, location: &str) -> Result<ResolvedRoute, RouteError> {
        let mut current = location.to_string();
        let mut redirected_from: Option<String> = None;

        for _ in 0..=MAX_REDIRECTS {
            let (path, suffix) = split_location(&current)?;
            let segments = split_segments(path);

            let Some((entry, params)) = self.match_segments(&segments) else {
                warn!(path, "no route matches location");
                return Ok(ResolvedRoute::unmatched(path, &current, redirected_from));
            };

            if let Some(template) = &entry.redirect {
                let target = fill_template(template, &params, path)?;
                debug!(from = %current, to = %target, "following route redirect");
                redirected_from.get_or_insert_with(|| location.to_string());
                current = format!("{target}{suffix}");
                continue;
            }

            return Ok(ResolvedRoute {
                path: path.to_string(),
                full_path: current.clone(),
                name: entry.name.clone(),
                matched: entry.matched.clone(),
                params: decode_params(params),
                meta: entry.meta.clone(),
                redirected_from,
            });
        }

        Err(RouteError::RedirectLoop(location.to_string()))
    }

    fn match_segments(&self, segments: &[&str]) -> Option<(&RouteEntry, BTreeMap<String, String>)> {
        self.ranked.iter().find_map(|&i| {
            let entry = &self.entries[i];
            entry.captures(segments).map(|params| (entry, params))
        })
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::standard()
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn flatten(
    record: &RouteRecord,
    parent_path: &str,
    parent_views: &[View],
    parent_meta: &RouteMeta,
    out: &mut Vec<RouteEntry>,
) {
    let pattern = join_paths(parent_path, &record.path);

    let mut matched = parent_views.to_vec();
    if let Some(view) = record.view {
        matched.push(view);
    }
    let meta = parent_meta.merged_with(&record.meta);

    out.push(RouteEntry {
        segments: parse_pattern(&pattern),
        pattern: pattern.clone(),
        name: record.name.clone(),
        matched: matched.clone(),
        meta: meta.clone(),
        redirect: record.redirect.clone(),
    });

    for child in &record.children {
        flatten(child, &pattern, &matched, &meta, out);
    }
}

fn join_paths(parent: &str, child: &str) -> String {
    if child.starts_with('/') || parent.is_empty() {
        return child.to_string();
    }
    if child.is_empty() {
        return parent.to_string();
    }
    format!("{}/{}", parent.trim_end_matches('/'), child)
}

fn parse_pattern(pattern: &str) -> Vec<Segment> {
    split_segments(pattern)
        .into_iter()
        .map(|s| match s.strip_prefix(':') {
            Some(name) => Segment::Param(name.to_string()),
            None => Segment::Static(s.to_string()),
        })
        .collect()
}

/// Splits `/a/b/` into `["a", "b"]`; the root path yields no segments.
fn split_segments(path: &str) -> Vec<&str> {
    let body = path.strip_prefix('/').unwrap_or(path);
    let body = body.strip_suffix('/').unwrap_or(body);
    if body.is_empty() {
        Vec::new()
    } else {
        body.split('/').collect()
    }
}

/// Splits a location into its path and its `?query#hash` suffix.
fn split_location(location: &str) -> Result<(&str, &str), RouteError> {
    if !location.starts_with('/') {
        return Err(RouteError::InvalidPath(location.to_string()));
    }
    let cut = location.find(|c| c == '?' || c == '#').unwrap_or(location.len());
    Ok(location.split_at(cut))
}

fn decode_params(raw: BTreeMap<String, String>) -> BTreeMap<String, String> {
    raw.into_iter()
        .map(|(name, value)| match urlencoding::decode(&value) {
            Ok(decoded) => (name, decoded.into_owned()),
            Err(e) => {
                warn!(param = %name, %value, error = %e, "undecodable param kept raw");
                (name, value)
            }
        })
        .collect()
}

fn fill_template(
    template: &str,
    params: &BTreeMap<String, String>,
    path: &str,
) -> Result<String, RouteError> {
    let mut filled = Vec::new();
    for segment in split_segments(template) {
        match segment.strip_prefix(':') {
            Some(name) => {
                let value = params.get(name).ok_or_else(|| RouteError::MissingRedirectParam {
                    redirect: template.to_string(),
                    param: name.to_string(),
                    path: path.to_string(),
                })?;
                filled.push(value.as_str());
            }
            None => filled.push(segment),
        }
    }
    Ok(format!("/{}", filled.join("/")))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
