use zeroize::{Zeroize, Zeroizing};

/// Password material accepted by every hashing entry point.
///
/// `Text` and `Raw` borrow the caller's bytes in place and never mutate them.
/// `Chars` is the one case that derives a transient byte buffer: the UTF-8
/// encoded copy lives in a [`Zeroizing`] guard, so it is zero-filled when the
/// call finishes, on success and on error alike. Caller-owned buffers are
/// never wiped implicitly; [`wipe`] and [`wipe_chars`] exist for that.
#[derive(Debug, Clone, Copy)]
pub enum SecretMaterial<'a> {
    /// UTF-8 text, hashed from its bytes in place.
    Text(&'a str),
    /// A character sequence; encoded to a wiped transient UTF-8 copy.
    Chars(&'a [char]),
    /// Caller-owned raw bytes ("data" hashing, no encoding step).
    Raw(&'a [u8]),
}

impl<'a> SecretMaterial<'a> {
    /// Normalize to the byte form the primitive consumes.
    pub(crate) fn bytes(&self) -> PasswordBytes<'a> {
        match *self {
            SecretMaterial::Text(text) => PasswordBytes::Borrowed(text.as_bytes()),
            SecretMaterial::Raw(bytes) => PasswordBytes::Borrowed(bytes),
            SecretMaterial::Chars(chars) => {
                // Sized for the 4-byte worst case up front, so the buffer
                // never reallocates and leaves stale copies behind.
                let mut buf = Zeroizing::new(Vec::with_capacity(chars.len() * 4));
                let mut scratch = [0u8; 4];
                for &c in chars {
                    buf.extend_from_slice(c.encode_utf8(&mut scratch).as_bytes());
                }
                scratch.zeroize();
                PasswordBytes::Owned(buf)
            }
        }
    }
}

impl<'a> From<&'a str> for SecretMaterial<'a> {
    fn from(text: &'a str) -> Self {
        SecretMaterial::Text(text)
    }
}

impl<'a> From<&'a String> for SecretMaterial<'a> {
    fn from(text: &'a String) -> Self {
        SecretMaterial::Text(text)
    }
}

impl<'a> From<&'a [char]> for SecretMaterial<'a> {
    fn from(chars: &'a [char]) -> Self {
        SecretMaterial::Chars(chars)
    }
}

impl<'a> From<&'a [u8]> for SecretMaterial<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        SecretMaterial::Raw(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for SecretMaterial<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        SecretMaterial::Raw(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for SecretMaterial<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        SecretMaterial::Raw(bytes)
    }
}

/// Borrowed caller bytes, or an owned self-wiping copy.
pub(crate) enum PasswordBytes<'a> {
    Borrowed(&'a [u8]),
    Owned(Zeroizing<Vec<u8>>),
}

impl AsRef<[u8]> for PasswordBytes<'_> {
    fn as_ref(&self) -> &[u8] {
        match self {
            PasswordBytes::Borrowed(bytes) => bytes,
            PasswordBytes::Owned(bytes) => bytes,
        }
    }
}

/// Overwrite every byte with zero. For caller discipline on buffers the
/// facade does not own.
pub fn wipe(buffer: &mut [u8]) {
    buffer.zeroize();
}

/// Overwrite every element with `'\0'`.
pub fn wipe_chars(buffer: &mut [char]) {
    buffer.zeroize();
}

/// Move a digest out of its zeroizing guard to hand ownership to the caller;
/// the guard then wipes only the empty remainder.
pub(crate) fn unguard(mut guarded: Zeroizing<Vec<u8>>) -> Vec<u8> {
    std::mem::take(&mut *guarded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_and_raw_borrow_in_place() {
        let text = SecretMaterial::from("password");
        assert_eq!(text.bytes().as_ref(), b"password");

        let raw = SecretMaterial::from(&b"password"[..]);
        assert_eq!(raw.bytes().as_ref(), b"password");
    }

    #[test]
    fn test_chars_encode_to_utf8() {
        let chars: Vec<char> = "ŧҺìş ίŝ ứţƒ-8".chars().collect();
        let material = SecretMaterial::from(chars.as_slice());
        assert_eq!(material.bytes().as_ref(), "ŧҺìş ίŝ ứţƒ-8".as_bytes());

        // The original character buffer is untouched by normalization.
        assert_eq!(chars, "ŧҺìş ίŝ ứţƒ-8".chars().collect::<Vec<char>>());
    }

    #[test]
    fn test_wipe_bytes() {
        let mut buffer = b"Hello, Argon2".to_vec();
        wipe(&mut buffer);
        assert!(buffer.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_wipe_chars() {
        let mut buffer: Vec<char> = "Hello, Argon2".chars().collect();
        wipe_chars(&mut buffer);
        assert!(buffer.iter().all(|&c| c == '\0'));
    }

    #[test]
    fn test_unguard_hands_out_contents() {
        let guarded = Zeroizing::new(vec![1u8, 2, 3]);
        assert_eq!(unguard(guarded), vec![1, 2, 3]);
    }
}
