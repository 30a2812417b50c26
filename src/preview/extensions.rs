//! Extension sets that pick a preview strategy. All lower-case, no dot.

pub const IMAGE: &[&str] = &[
  "png", "jpg", "jpeg", "gif", "bmp", "webp", "avif", "jxl", "ico", "tiff", "tif", "svg", "heic",
  "heif", "pbm", "pgm", "ppm", "tga", "cur", "ani", "pam", "pcx",
];

pub const MEDIA: &[&str] =
  &["mp4", "mkv", "avi", "mov", "webm", "mp3", "wav", "flac", "ogg", "m4a", "wma", "aac"];

pub const ARCHIVE: &[&str] = &["zip", "tar", "gz", "tgz", "7z", "rar"];

pub const BINARY: &[&str] = &["exe", "dll", "bin", "iso", "pdf", "so", "dylib", "o", "class", "wasm"];

/// Files above this size are not read for a text preview.
pub const MAX_TEXT_BYTES: u64 = 5 * 1024 * 1024;

pub fn is_image(ext: &str) -> bool
{
  IMAGE.contains(&ext)
}

pub fn is_media(ext: &str) -> bool
{
  MEDIA.contains(&ext)
}

pub fn is_archive(ext: &str) -> bool
{
  ARCHIVE.contains(&ext)
}

pub fn is_binary(ext: &str) -> bool
{
  BINARY.contains(&ext)
}
