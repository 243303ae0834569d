//! Extension-based binary classification.
//!
//! Files with one of these extensions carry opaque payloads: they are
//! registered for whole-document comparison but never segmented into
//! blocks. Everything else is read as UTF-8 text.

use std::path::Path;

/// Extensions treated as binary, lowercase and sorted for binary search.
const BINARY_EXTENSIONS: &[&str] = &[
    "3ds", "3g2", "3gp", "7z", "a", "aac", "adp", "ai", "aif",
    "aiff", "alz", "ape", "apk", "ar", "arj", "asf", "au", "avi",
    "bak", "bin", "bmp", "br", "bz2", "cab", "caf", "class", "cpio",
    "cr2", "dat", "deb", "dex", "djvu", "dll", "dmg", "doc", "docx",
    "dwg", "dxf", "ear", "eot", "epub", "exe", "f4v", "fla", "flac",
    "flv", "gif", "gz", "gzip", "h261", "h263", "h264", "heic", "heif",
    "ico", "ief", "img", "ipa", "iso", "jar", "jpeg", "jpg", "jxr",
    "key", "ktx", "lha", "lib", "lz", "lzma", "lzo", "m3u", "m4a",
    "m4v", "mar", "mdi", "mid", "midi", "mj2", "mka", "mkv", "mng",
    "mobi", "mov", "mp3", "mp4", "mpeg", "mpg", "msi", "mxu", "nef",
    "numbers", "o", "odp", "ods", "odt", "oga", "ogg", "ogv", "otf",
    "pages", "pbm", "pcx", "pdf", "pgm", "pic", "png", "pnm", "ppm",
    "pps", "ppt", "pptx", "ps", "psd", "pya", "pyc", "pyo", "qt",
    "rar", "ras", "raw", "rgb", "rtf", "s3m", "s7z", "sgi", "shar",
    "sil", "sketch", "slk", "smv", "so", "sub", "swf", "tar", "tbz",
    "tbz2", "tga", "tgz", "thmx", "tif", "tiff", "tlz", "ttc", "ttf",
    "txz", "udf", "viv", "vob", "war", "wav", "wax", "webm", "webp",
    "whl", "wim", "wm", "wma", "wmv", "woff", "woff2", "xbm", "xla",
    "xlam", "xls", "xlsb", "xlsm", "xlsx", "xlt", "xm", "xpi", "xpm",
    "xwd", "xz", "z", "zip", "zipx",
];

/// Whether `path` has an extension from the binary set. Extensions are
/// compared case-insensitively; files without an extension count as text.
#[must_use]
pub fn is_binary_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .is_some_and(|e| BINARY_EXTENSIONS.binary_search(&e.as_str()).is_ok())
}
