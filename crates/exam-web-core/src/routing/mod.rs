//! Route table and path resolution.
//!
//! The router maps a URL path to a [`View`] plus a metadata bundle (the page
//! title).  Route definitions are plain data ([`RouteRecord`]) compiled once
//! into a [`RouteTable`]; resolution is a pure function of the table and the
//! requested path.
//!
//! # Pattern syntax
//!
//! ```text
//! /exam/list            static segments only
//! /exam/:id             `:id` captures exactly one non-empty segment
//! /admin  + children    child paths are relative ("welcome" → /admin/welcome)
//! ```
//!
//! A record may redirect instead of rendering.  The redirect target is itself a
//! template: `/video/:id` redirecting to `/videos/:id` copies the captured `id`
//! into the new path.

mod record;
mod standard;
mod table;

pub use record::{RouteMeta, RouteRecord, View};
pub use standard::standard_routes;
pub use table::{ResolvedRoute, RouteEntry, RouteError, RouteTable, MAX_REDIRECTS};
