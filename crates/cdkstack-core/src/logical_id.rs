//! Logical id derivation.
//!
//! A logical id is the key of a resource inside a template's `Resources`
//! section. It is derived from the construct's path below its stack: a
//! human-readable prefix plus an 8-character hash of the full path, so that
//! constructs with similar names never collide.

use md5::{Digest, Md5};

use crate::error::{CdkError, CdkResult};
use crate::node::PATH_SEP;

/// Components with this id are removed from the path entirely.
pub const HIDDEN_ID: &str = "Default";

/// Components with this id are removed from the human-readable part only.
pub const HIDDEN_FROM_HUMAN_ID: &str = "Resource";

/// Maximum length of a logical id.
pub const MAX_ID_LEN: usize = 255;

const MAX_HUMAN_LEN: usize = 240;
const HASH_LEN: usize = 8;

/// Compute a template-unique id from stack-relative path components.
///
/// # Examples
///
/// ```
/// use cdkstack_core::logical_id::make_unique_id;
///
/// assert_eq!(make_unique_id(&["Queue"]).unwrap(), "Queue");
/// assert_eq!(make_unique_id(&["MyTable", "Resource"]).unwrap(), "MyTable794EDED1");
/// ```
pub fn make_unique_id<S: AsRef<str>>(components: &[S]) -> CdkResult<String> {
    let components: Vec<&str> = components
        .iter()
        .map(|c| c.as_ref())
        .filter(|c| *c != HIDDEN_ID)
        .collect();

    if components.is_empty() {
        return Err(CdkError::EmptyLogicalId);
    }

    // Top-level resources keep their id, so hand-written templates port over.
    if let [single] = components.as_slice() {
        let candidate = remove_non_alphanumeric(single);
        if candidate.len() <= MAX_ID_LEN {
            return Ok(candidate);
        }
    }

    let hash = path_hash(&components);
    let mut human: String = remove_dupes(&components)
        .into_iter()
        .filter(|c| *c != HIDDEN_FROM_HUMAN_ID)
        .map(remove_non_alphanumeric)
        .collect();
    human.truncate(MAX_HUMAN_LEN);

    Ok(human + &hash)
}

fn path_hash(components: &[&str]) -> String {
    let digest = Md5::digest(components.join(PATH_SEP).as_bytes());
    let mut hash = hex::encode(digest);
    hash.truncate(HASH_LEN);
    hash.to_ascii_uppercase()
}

/// Remove consecutive duplicates, so `Group/Group/Resource` reads `Group`.
fn remove_dupes<'a>(components: &[&'a str]) -> Vec<&'a str> {
    let mut out: Vec<&str> = Vec::with_capacity(components.len());
    for &c in components {
        if out.last() != Some(&c) {
            out.push(c);
        }
    }
    out
}

fn remove_non_alphanumeric(s: &str) -> String {
    s.chars().filter(char::is_ascii_alphanumeric).collect()
}
