use nom::{
    bytes::complete::{tag, take_until},
    combinator::verify,
    sequence::delimited,
    IResult,
};

/// Parse a hash tag
///
/// Skips to the first `{` and takes everything up to the first `}` after it.
/// Fails when there is no `{`, no closing `}`, or the span between them is empty.
/// The remaining input starts right after the closing brace.
pub fn hash_tag(input: &[u8]) -> IResult<&[u8], &[u8]> {
    let (input, _prefix) = take_until("{")(input)?;
    delimited(
        tag("{"),
        verify(take_until("}"), |span: &[u8]| !span.is_empty()),
        tag("}"),
    )(input)
}

/// Bytes of `key` that actually get hashed
///
/// The hash tag if there is one, the whole key otherwise.
pub fn effective_key(key: &[u8]) -> &[u8] {
    match hash_tag(key) {
        Ok((_, tag)) => tag,
        Err(_) => key,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hash_tag() {
        let (input, tag) = hash_tag(b"foo{bar}baz").unwrap();
        assert_eq!(input, b"baz");
        assert_eq!(tag, b"bar");
    }

    #[test]
    fn parse_hash_tag_first_span_only() {
        let (input, tag) = hash_tag(b"foo{bar}{zap}").unwrap();
        assert_eq!(input, b"{zap}");
        assert_eq!(tag, b"bar");
    }

    #[test]
    fn parse_hash_tag_nested_open() {
        let (input, tag) = hash_tag(b"foo{{bar}}").unwrap();
        assert_eq!(input, b"}");
        assert_eq!(tag, b"{bar");
    }

    #[test]
    fn parse_hash_tag_closing_before_opening() {
        let (_, tag) = hash_tag(b"}x{y}").unwrap();
        assert_eq!(tag, b"y");
    }

    #[test]
    fn reject_missing_tags() {
        assert!(hash_tag(b"").is_err());
        assert!(hash_tag(b"nobraces").is_err());
        assert!(hash_tag(b"foo{bar").is_err());
        assert!(hash_tag(b"foo}bar{").is_err());
        assert!(hash_tag(b"{}").is_err());
        assert!(hash_tag(b"foo{}{bar}").is_err());
    }

    #[test]
    fn effective_key_fallback() {
        assert_eq!(effective_key(b"user:{1001}:profile"), b"1001");
        assert_eq!(effective_key(b"{}"), b"{}");
        assert_eq!(effective_key(b"foo{}{bar}"), b"foo{}{bar}");
        assert_eq!(effective_key(b"foo{bar"), b"foo{bar");
        assert_eq!(effective_key(b""), b"");
    }

    #[test]
    fn effective_key_binary() {
        let key = hex::decode("00FF7B01027DFE").unwrap();
        assert_eq!(effective_key(&key), &[0x01, 0x02]);
    }
}
