//! Content-type sniffing
//!
//! Maps leading byte signatures to a file extension so that extension-less
//! inputs still get a usable remote filename. Best effort only: unknown or
//! empty content yields an empty string.

/// Guess a file extension (with leading dot) from the first bytes of
/// `content`, or return `""` when no signature matches.
pub fn detect_extension(content: &[u8]) -> &'static str {
    match content {
        [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, ..] => ".png",
        [0xFF, 0xD8, 0xFF, ..] => ".jpg",
        [b'G', b'I', b'F', b'8', b'7' | b'9', b'a', ..] => ".gif",
        [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => ".webp",
        [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'A', b'V', b'E', ..] => ".wav",
        [b'B', b'M', ..] => ".bmp",
        [0x00, 0x00, 0x01, 0x00, ..] => ".ico",
        [b'%', b'P', b'D', b'F', b'-', ..] => ".pdf",
        [b'P', b'K', 0x03, 0x04, ..] => ".zip",
        [0x1F, 0x8B, 0x08, ..] => ".gz",
        // ISO BMFF: box size then "ftyp"
        [_, _, _, _, b'f', b't', b'y', b'p', ..] => ".mp4",
        [b'O', b'g', b'g', b'S', ..] => ".ogg",
        // EBML header shared by WebM and Matroska
        [0x1A, 0x45, 0xDF, 0xA3, ..] => ".webm",
        [b'I', b'D', b'3', ..] => ".mp3",
        _ => "",
    }
}
