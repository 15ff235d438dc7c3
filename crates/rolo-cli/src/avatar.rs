//! Avatar ingestion: local image files become embeddable data URLs.

use std::fmt;
use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Size ceiling for attached images.
pub const MAX_AVATAR_BYTES: u64 = 2 * 1024 * 1024;

#[derive(Debug)]
pub enum AvatarError {
    Io(std::io::Error),
    TooLarge(u64),
    NotAnImage,
}

impl fmt::Display for AvatarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AvatarError::Io(err) => write!(f, "could not read avatar file: {}", err),
            AvatarError::TooLarge(size) => {
                write!(f, "avatar is {} bytes (limit {})", size, MAX_AVATAR_BYTES)
            }
            AvatarError::NotAnImage => write!(f, "avatar file is not a supported image"),
        }
    }
}

impl std::error::Error for AvatarError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AvatarError::Io(err) => Some(err),
            AvatarError::TooLarge(_) | AvatarError::NotAnImage => None,
        }
    }
}

impl From<std::io::Error> for AvatarError {
    fn from(err: std::io::Error) -> Self {
        AvatarError::Io(err)
    }
}

/// MIME type by magic bytes. Extensions lie; file contents don't.
fn sniff_mime(bytes: &[u8]) -> Option<&'static str> {
    if bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
        Some("image/png")
    } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        Some("image/jpeg")
    } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
        Some("image/gif")
    } else if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        Some("image/webp")
    } else {
        None
    }
}

/// Read an image file and encode it as a `data:` URL.
///
/// Rejects files over [`MAX_AVATAR_BYTES`] and anything that doesn't sniff
/// as png/jpeg/gif/webp.
pub fn load_data_url(path: &Path) -> Result<String, AvatarError> {
    let metadata = std::fs::metadata(path)?;
    if metadata.len() > MAX_AVATAR_BYTES {
        return Err(AvatarError::TooLarge(metadata.len()));
    }

    let bytes = std::fs::read(path)?;
    let mime = sniff_mime(&bytes).ok_or(AvatarError::NotAnImage)?;
    Ok(format!("data:{};base64,{}", mime, STANDARD.encode(&bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_HEADER: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn sniffs_common_image_formats() {
        assert_eq!(sniff_mime(&PNG_HEADER), Some("image/png"));
        assert_eq!(sniff_mime(&[0xFF, 0xD8, 0xFF, 0xE0]), Some("image/jpeg"));
        assert_eq!(sniff_mime(b"GIF89a..."), Some("image/gif"));
        assert_eq!(sniff_mime(b"RIFF\x00\x00\x00\x00WEBPVP8 "), Some("image/webp"));
        assert_eq!(sniff_mime(b"plain text"), None);
    }

    #[test]
    fn encodes_a_small_png_as_a_data_url() {
        let dir = std::env::temp_dir().join(format!("rolo-avatar-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("pic.png");
        std::fs::write(&path, PNG_HEADER).unwrap();

        let url = load_data_url(&path).unwrap();
        assert!(url.starts_with("data:image/png;base64,"));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn rejects_non_image_content() {
        let dir = std::env::temp_dir().join(format!("rolo-avatar-txt-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("pic.png");
        std::fs::write(&path, "definitely not an image").unwrap();

        assert!(matches!(load_data_url(&path), Err(AvatarError::NotAnImage)));
        let _ = std::fs::remove_dir_all(&dir);
    }
}
