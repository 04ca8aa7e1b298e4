//! Segment-wise helpers for `/`-separated paths.
//!
//! Leading and trailing rules are evaluated per segment, so `a /b.` under a
//! policy with `RightSpace` and `RightPeriod` rewrites both the space ending the
//! first segment and the period ending the second. Separators are copied
//! through untouched and never appear inside a segment, which is why
//! [`EncodePolicy::SLASH`] has no effect on paths.

use std::borrow::Cow;

use crate::policy::EncodePolicy;

type SegmentOp = fn(EncodePolicy, &[u8]) -> Cow<'_, [u8]>;

impl EncodePolicy {
    /// Encodes every segment of a `/`-separated path.
    ///
    /// # Examples
    ///
    /// ```
    /// use encoder::EncodePolicy;
    ///
    /// let policy = EncodePolicy::LEFT_TILDE | EncodePolicy::RIGHT_SPACE;
    /// assert_eq!(&*policy.encode_path(b"~a /~b"), "～a␠/～b".as_bytes());
    /// ```
    #[must_use]
    pub fn encode_path(self, path: &[u8]) -> Cow<'_, [u8]> {
        map_segments(self, path, Self::encode)
    }

    /// Decodes every segment of a `/`-separated path.
    #[must_use]
    pub fn decode_path(self, path: &[u8]) -> Cow<'_, [u8]> {
        map_segments(self, path, Self::decode)
    }

    /// Converts every segment from the display form into this policy's form.
    #[must_use]
    pub fn from_standard_path(self, path: &[u8]) -> Cow<'_, [u8]> {
        map_segments(self, path, Self::from_standard_name)
    }

    /// Converts every segment from this policy's form into the display form.
    #[must_use]
    pub fn to_standard_path(self, path: &[u8]) -> Cow<'_, [u8]> {
        map_segments(self, path, Self::to_standard_name)
    }
}

fn map_segments(policy: EncodePolicy, path: &[u8], op: SegmentOp) -> Cow<'_, [u8]> {
    let mut mapped: Option<Vec<u8>> = None;
    let mut offset = 0;

    for (index, segment) in path.split(|&byte| byte == b'/').enumerate() {
        let converted = op(policy, segment);
        if let Some(out) = mapped.as_mut() {
            if index > 0 {
                out.push(b'/');
            }
            out.extend_from_slice(&converted);
        } else if let Cow::Owned(bytes) = converted {
            let mut out = Vec::with_capacity(path.len() + bytes.len());
            out.extend_from_slice(&path[..offset]);
            out.extend_from_slice(&bytes);
            mapped = Some(out);
        }
        offset += segment.len() + 1;
    }

    mapped.map_or(Cow::Borrowed(path), Cow::Owned)
}
