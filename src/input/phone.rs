//! Segment table for the `DD-DD-DD-D` phone format.
//!
//! The phone number is edited as four independent digit groups. Each group
//! has a fixed maximum length and explicit neighbours, so focus movement is
//! a table lookup instead of index arithmetic.

pub const SEGMENT_COUNT: usize = 4;

pub type PhoneSegments = [String; SEGMENT_COUNT];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentSpec {
    pub index: usize,
    pub max_len: usize,
    pub prev: Option<usize>,
    pub next: Option<usize>,
    pub placeholder: &'static str,
}

pub const PHONE_SEGMENTS: [SegmentSpec; SEGMENT_COUNT] = [
    SegmentSpec {
        index: 0,
        max_len: 2,
        prev: None,
        next: Some(1),
        placeholder: "55",
    },
    SegmentSpec {
        index: 1,
        max_len: 2,
        prev: Some(0),
        next: Some(2),
        placeholder: "55",
    },
    SegmentSpec {
        index: 2,
        max_len: 2,
        prev: Some(1),
        next: Some(3),
        placeholder: "55",
    },
    SegmentSpec {
        index: 3,
        max_len: 1,
        prev: Some(2),
        next: None,
        placeholder: "5",
    },
];

pub fn segment(index: usize) -> Option<&'static SegmentSpec> {
    PHONE_SEGMENTS.get(index)
}

pub fn token_accepts(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Whether `raw` may be stored in segment `index`: digits only, within the
/// segment's length limit.
pub fn accepts(index: usize, raw: &str) -> bool {
    let Some(spec) = segment(index) else {
        return false;
    };
    raw.chars().all(token_accepts) && raw.chars().count() <= spec.max_len
}

/// Split `digits` into chunks of two from the left, joined with `-`.
pub fn format_phone_number(digits: &str) -> String {
    chunks_of_two(digits).join("-")
}

/// The four segments concatenated and re-expressed as `DD-DD-DD-D`.
pub fn canonical(segments: &PhoneSegments) -> String {
    format_phone_number(&segments.concat())
}

/// Split a flat digit string into segments. `None` when the result would
/// not fit the segment table.
pub fn split_flat(raw: &str) -> Option<PhoneSegments> {
    let chunks = chunks_of_two(raw);
    if chunks.len() > SEGMENT_COUNT {
        return None;
    }
    let mut segments = PhoneSegments::default();
    for (index, chunk) in chunks.into_iter().enumerate() {
        if !accepts(index, &chunk) {
            return None;
        }
        segments[index] = chunk;
    }
    Some(segments)
}

/// Take an already segmented value as-is, provided it has exactly four
/// segments that satisfy the table.
pub fn from_parts(parts: &[String]) -> Option<PhoneSegments> {
    if parts.len() != SEGMENT_COUNT {
        return None;
    }
    if !parts.iter().enumerate().all(|(index, part)| accepts(index, part)) {
        return None;
    }
    let mut segments = PhoneSegments::default();
    segments.clone_from_slice(parts);
    Some(segments)
}

fn chunks_of_two(raw: &str) -> Vec<String> {
    let chars: Vec<char> = raw.chars().collect();
    chars.chunks(2).map(|chunk| chunk.iter().collect()).collect()
}
