//! Per-backend encoding profiles.
//!
//! Each constant documents why the backend needs its rules. The fullwidth and
//! "SYMBOL FOR" substitutes are listed once in the `encoder` crate docs.

use encoder::EncodePolicy;

/// Encodes only NUL and `/`.
pub const BASE: EncodePolicy = EncodePolicy::ZERO.union(EncodePolicy::SLASH);

/// Encoding for names shown to users and written to logs.
pub const DISPLAY: EncodePolicy = EncodePolicy::STANDARD;

/// Local filesystems on Unix-like platforms.
pub const LOCAL_UNIX: EncodePolicy = BASE;

/// Local filesystems on Windows.
///
/// `<>:"\|?*` map to their fullwidth forms, control characters to the
/// "SYMBOL FOR" pictures. Names may not end with a period or a space, so those
/// become `．` and `␠` in trailing position. Invalid UTF-8 is escaped because it
/// cannot be converted to UTF-16.
pub const LOCAL_WINDOWS: EncodePolicy = BASE
    .union(EncodePolicy::WIN)
    .union(EncodePolicy::BACK_SLASH)
    .union(EncodePolicy::CTL)
    .union(EncodePolicy::RIGHT_SPACE)
    .union(EncodePolicy::RIGHT_PERIOD)
    .union(EncodePolicy::INVALID_UTF8);

/// Amazon Cloud Drive. JSON transport rejects invalid UTF-8.
pub const AMAZON_CLOUD_DRIVE: EncodePolicy = BASE.union(EncodePolicy::INVALID_UTF8);

/// Backblaze B2. JSON transport rejects invalid UTF-8.
pub const B2: EncodePolicy = DISPLAY
    .union(EncodePolicy::BACK_SLASH)
    .union(EncodePolicy::INVALID_UTF8);

/// Box.
///
/// Box rejects `/`, `\`, non-printable ASCII and trailing spaces. Leading
/// spaces work in practice and are left alone.
pub const BOX: EncodePolicy = DISPLAY
    .union(EncodePolicy::BACK_SLASH)
    .union(EncodePolicy::RIGHT_SPACE)
    .union(EncodePolicy::INVALID_UTF8);

/// Google Drive. `/` is a valid name character there; only invalid UTF-8 is
/// escaped for the JSON transport.
pub const DRIVE: EncodePolicy = EncodePolicy::INVALID_UTF8;

/// Dropbox. Rejects `/`, `\`, DEL and trailing spaces.
pub const DROPBOX: EncodePolicy = BASE
    .union(EncodePolicy::BACK_SLASH)
    .union(EncodePolicy::DEL)
    .union(EncodePolicy::RIGHT_SPACE)
    .union(EncodePolicy::INVALID_UTF8);

/// Google Cloud Storage.
pub const GOOGLE_CLOUD_STORAGE: EncodePolicy = BASE.union(EncodePolicy::INVALID_UTF8);

/// Jottacloud. XML transport rejects invalid UTF-8.
pub const JOTTACLOUD: EncodePolicy = DISPLAY.union(EncodePolicy::INVALID_UTF8);

/// Koofr.
pub const KOOFR: EncodePolicy = DISPLAY
    .union(EncodePolicy::BACK_SLASH)
    .union(EncodePolicy::INVALID_UTF8);

/// Mega.
pub const MEGA: EncodePolicy = BASE.union(EncodePolicy::INVALID_UTF8);

/// OneDrive.
///
/// Matches the Windows naming rules plus `#` and `%`. Names may not begin
/// with `~` or a space, nor end with a period or a space.
pub const ONEDRIVE: EncodePolicy = DISPLAY
    .union(EncodePolicy::BACK_SLASH)
    .union(EncodePolicy::HASH_PERCENT)
    .union(EncodePolicy::LEFT_SPACE)
    .union(EncodePolicy::LEFT_TILDE)
    .union(EncodePolicy::RIGHT_PERIOD)
    .union(EncodePolicy::RIGHT_SPACE)
    .union(EncodePolicy::WIN)
    .union(EncodePolicy::INVALID_UTF8);

/// OpenDrive.
///
/// Windows-reserved characters plus a ban on leading or trailing ASCII
/// whitespace.
pub const OPENDRIVE: EncodePolicy = BASE
    .union(EncodePolicy::WIN)
    .union(EncodePolicy::LEFT_CR_LF_HT_VT)
    .union(EncodePolicy::RIGHT_CR_LF_HT_VT)
    .union(EncodePolicy::BACK_SLASH)
    .union(EncodePolicy::LEFT_SPACE)
    .union(EncodePolicy::RIGHT_SPACE)
    .union(EncodePolicy::INVALID_UTF8);

/// pCloud.
// TODO: pCloud folds `＼` to `\` server-side; decide whether BACK_SLASH is
// needed once that normalisation is confirmed.
pub const PCLOUD: EncodePolicy = BASE.union(EncodePolicy::INVALID_UTF8);

/// The local profile for the platform this crate was compiled for.
pub const LOCAL: EncodePolicy = if cfg!(windows) {
    LOCAL_WINDOWS
} else {
    LOCAL_UNIX
};
