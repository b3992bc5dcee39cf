//! Kubernetes-style API version ordering and resolution
//!
//! Version names follow the grammar `v<major>[(alpha|beta)<minor>]`. The
//! comparator encodes the precedence rule "stable > beta > alpha", with
//! major numbers compared as digit strings. It is a weak order, not a full
//! semantic parser: minor numbers on alpha/beta suffixes are never
//! compared, and a stable version outranks any unstable one regardless of
//! major.

use std::cmp::Ordering;

use crate::error::{CrdError, Result};

/// Compare two version names ("v1", "v1beta2", "v2alpha1").
///
/// Same-tier versions with equal majors compare `Equal` (e.g. "v1beta1" vs
/// "v1beta2"); callers sort stably and break ties by declaration order.
/// Inputs containing both "alpha" and "beta", or whose major is not a
/// leading digit run, are outside the grammar and yield an unspecified
/// ordering.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let a = a.strip_prefix('v').unwrap_or(a);
    let b = b.strip_prefix('v').unwrap_or(b);
    let (a_major, a_rest) = split_major(a);
    let (b_major, b_rest) = split_major(b);

    match (a_rest.is_empty(), b_rest.is_empty()) {
        (true, true) => a_major.cmp(b_major),
        // A stable version outranks any alpha or beta version.
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            if a_major != b_major {
                return a_major.cmp(b_major);
            }
            // Same major, neither stable: alpha sorts below beta.
            match (a_rest.contains("alpha"), b_rest.contains("alpha")) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => Ordering::Equal,
            }
        }
    }
}

/// Split off the longest leading ASCII-digit run.
fn split_major(s: &str) -> (&str, &str) {
    let end = s
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len());
    s.split_at(end)
}

/// Pick the version of a CRD to convert.
///
/// With no request, the greatest declared version wins; equally ranked
/// versions keep declaration order, so the latest declared among ties is
/// selected. A requested version must match a declared name exactly and
/// case-sensitively.
pub fn resolve_version(declared: &[String], requested: Option<&str>) -> Result<String> {
    if declared.is_empty() {
        return Err(CrdError::NoVersions);
    }

    match requested {
        Some(requested) => {
            if declared.iter().any(|v| v == requested) {
                Ok(requested.to_string())
            } else {
                Err(CrdError::UnknownVersion {
                    requested: requested.to_string(),
                    declared: declared.to_vec(),
                })
            }
        }
        None => {
            let mut sorted = declared.to_vec();
            // sort_by is stable, so ties keep declaration order.
            sorted.sort_by(|a, b| compare_versions(a, b));
            sorted.pop().ok_or(CrdError::NoVersions)
        }
    }
}
