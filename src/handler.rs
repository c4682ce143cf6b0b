//! Request Handling - wire parameters in, one response out
//!
//! The handler is a pure function from (method, path, query) to a
//! materialized response; it owns no socket and keeps no state across
//! requests, so the transport adapter stays a thin shim.

use axum::http::{Method, StatusCode};
use percent_encoding::percent_decode_str;
use url::form_urlencoded;

use crate::error::RequestError;
use crate::format::{self, OutputFormat};
use crate::grid;
use crate::palette::Palette;
use crate::DEFAULT_IMAGE_SIZE;

/// A materialized response: status, the headers the core cares about, and
/// the body bytes.
#[derive(Debug)]
pub struct Reply {
    pub status: StatusCode,
    pub content_type: Option<&'static str>,
    pub allow: Option<&'static str>,
    pub body: Vec<u8>,
}

impl Reply {
    fn ok(format: OutputFormat, body: Vec<u8>) -> Reply {
        Reply {
            status: StatusCode::OK,
            content_type: Some(format.content_type()),
            allow: None,
            body,
        }
    }

    fn error(err: &RequestError) -> Reply {
        Reply {
            status: err.status(),
            content_type: Some("text/plain; charset=utf-8"),
            allow: matches!(err, RequestError::MethodNotAllowed).then_some("GET"),
            body: format!("error: {err}").into_bytes(),
        }
    }
}

/// Serve one request. Every error becomes a single-line `error: ` body with
/// the matching status; nothing is retried.
pub fn respond(method: &Method, path: &str, query: Option<&str>) -> Reply {
    match handle(method, path, query) {
        Ok(reply) => reply,
        Err(err) => Reply::error(&err),
    }
}

fn handle(method: &Method, path: &str, query: Option<&str>) -> Result<Reply, RequestError> {
    if method != Method::GET {
        return Err(RequestError::MethodNotAllowed);
    }

    let path = percent_decode_str(path).decode_utf8_lossy();
    let (text, extension) = split_extension(&path);

    let format =
        OutputFormat::from_extension(extension).ok_or(RequestError::UnsupportedFormat)?;

    let params = parse_params(query, format.is_raster())?;

    let palette = if params.monochrome {
        Palette::DEFAULT
    } else {
        Palette::derive(text)
    };

    let grid = grid::generate(text, params.mirror_x, params.mirror_y);
    let body = format::render_to_bytes(format, &grid, &palette, params.size)?;

    Ok(Reply::ok(format, body))
}

/// Parameters decoded from the query string.
#[derive(Debug, PartialEq, Eq)]
struct Params {
    size: i32,
    mirror_x: bool,
    mirror_y: bool,
    monochrome: bool,
}

fn parse_params(query: Option<&str>, raster: bool) -> Result<Params, RequestError> {
    let mut size = None;
    let mut mirror = None;
    let mut monochrome = false;

    // The first occurrence of a key wins.
    for (key, value) in form_urlencoded::parse(query.unwrap_or("").as_bytes()) {
        match key.as_ref() {
            // Vector output is size-independent, so the parameter is not
            // even parsed for it.
            "size" if raster && size.is_none() => {
                size = Some(value.parse::<i32>().map_err(|_| RequestError::InvalidSizeFormat)?);
            }
            "mirror" if mirror.is_none() => mirror = Some(value.into_owned()),
            "monochrome" => monochrome = true,
            _ => {}
        }
    }

    let (mirror_x, mirror_y) = match mirror {
        None => (true, false),
        Some(axes) => parse_axes(&axes)?,
    };

    Ok(Params {
        size: size.unwrap_or(DEFAULT_IMAGE_SIZE),
        mirror_x,
        mirror_y,
        monochrome,
    })
}

/// Parse a mirror-axis string: any combination of `x` and `y`, each at most
/// once. An empty string disables mirroring.
pub fn parse_axes(axes: &str) -> Result<(bool, bool), RequestError> {
    let (mut x, mut y) = (false, false);

    for c in axes.chars() {
        match c {
            'x' if x => return Err(RequestError::DuplicateMirrorAxis(c)),
            'y' if y => return Err(RequestError::DuplicateMirrorAxis(c)),
            'x' => x = true,
            'y' => y = true,
            _ => return Err(RequestError::UnsupportedMirrorAxis(c)),
        }
    }

    Ok((x, y))
}

/// Split the request path into the generation text and the extension of the
/// final segment. `/name.` yields `Some("")`, which no format matches.
fn split_extension(path: &str) -> (&str, Option<&str>) {
    let path = path.strip_prefix('/').unwrap_or(path);
    let segment_start = path.rfind('/').map_or(0, |i| i + 1);

    match path[segment_start..].rfind('.') {
        Some(dot) => {
            let dot = segment_start + dot;
            (&path[..dot], Some(&path[dot + 1..]))
        }
        None => (path, None),
    }
}
