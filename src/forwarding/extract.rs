//! Caller extraction from glog-style lines
//!
//! The external agent writes lines of the form
//!
//! ```text
//! I1101 19:21:40.292618 84815872 distributed.cpp:133] Executing distributed query
//! ```
//!
//! i.e. severity and date, time, thread id, then `file:line]` and the
//! message. [`extract_caller`] pulls the `file:line` part out of such a line.

/// Return the `file:line` token of a glog-style line.
///
/// `None` for anything that does not have that shape: fewer than four
/// whitespace-separated tokens, a fourth token without `]`, or a location
/// that is not `<name>:<digits>` (this includes `unknown]`). A name that
/// itself contains a colon is rejected as well.
///
/// ```
/// use rust_leveled_logger::extract_caller;
///
/// let line = "E1201 08:21:54.254618 84815872 foobar.m:47] Penguin";
/// assert_eq!(extract_caller(line), Some("foobar.m:47"));
/// assert_eq!(extract_caller("Just plain bad"), None);
/// ```
pub fn extract_caller(line: &str) -> Option<&str> {
    let token = line.split_whitespace().nth(3)?;
    let (location, _) = token.split_once(']')?;
    let (name, digits) = location.rsplit_once(':')?;

    if name.is_empty() || name.contains(':') {
        return None;
    }
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    Some(location)
}
