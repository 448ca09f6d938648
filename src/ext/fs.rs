//! File, path and directory helpers
//!
//! Readers treat a missing or unreadable file as empty. Writers and file
//! operations return `io::Result` so callers see real failures, but a
//! missing source is a no-op rather than an error.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR};
use std::time::SystemTime;

use chrono::{DateTime, Local, NaiveDateTime};
use sha2::{Digest, Sha256};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::ext::datetime::min_value;

#[cfg(windows)]
const FILE_ATTRIBUTE_HIDDEN: u32 = 0x2;

pub fn read_all_text(path: impl AsRef<Path>) -> String {
    match fs::read(path.as_ref()) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            debug!("Reading {:?} failed: {}", path.as_ref(), e);
            String::new()
        }
    }
}

pub fn read_all_lines(path: impl AsRef<Path>) -> Vec<String> {
    read_all_text(path).lines().map(str::to_string).collect()
}

pub fn read_all_bytes(path: impl AsRef<Path>) -> Vec<u8> {
    fs::read(path.as_ref()).unwrap_or_default()
}

pub fn get_file_size(path: impl AsRef<Path>) -> u64 {
    fs::metadata(path.as_ref())
        .ok()
        .filter(|m| m.is_file())
        .map(|m| m.len())
        .unwrap_or(0)
}

fn to_local(time: io::Result<SystemTime>) -> NaiveDateTime {
    time.map(|t| DateTime::<Local>::from(t).naive_local())
        .unwrap_or_else(|_| min_value())
}

pub fn get_creation_time(path: impl AsRef<Path>) -> NaiveDateTime {
    match fs::metadata(path.as_ref()) {
        Ok(meta) => to_local(meta.created()),
        Err(_) => min_value(),
    }
}

pub fn get_last_write_time(path: impl AsRef<Path>) -> NaiveDateTime {
    match fs::metadata(path.as_ref()) {
        Ok(meta) => to_local(meta.modified()),
        Err(_) => min_value(),
    }
}

pub fn get_last_access_time(path: impl AsRef<Path>) -> NaiveDateTime {
    match fs::metadata(path.as_ref()) {
        Ok(meta) => to_local(meta.accessed()),
        Err(_) => min_value(),
    }
}

pub fn is_read_only(path: impl AsRef<Path>) -> bool {
    fs::metadata(path.as_ref())
        .map(|m| m.permissions().readonly())
        .unwrap_or(false)
}

/// Lowercase hex MD5 of the file content; empty when the file is missing
pub fn file_md5(path: impl AsRef<Path>) -> String {
    match fs::read(path.as_ref()) {
        Ok(bytes) => format!("{:x}", md5::compute(bytes)),
        Err(_) => String::new(),
    }
}

/// Lowercase hex SHA-256 of the file content; empty when the file is missing
pub fn file_sha256(path: impl AsRef<Path>) -> String {
    match fs::read(path.as_ref()) {
        Ok(bytes) => format!("{:x}", Sha256::digest(&bytes)),
        Err(_) => String::new(),
    }
}

/// Dot-files on Unix, the hidden attribute on Windows
pub fn is_hidden(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    if !path.exists() {
        return false;
    }

    #[cfg(windows)]
    {
        use std::os::windows::fs::MetadataExt;
        fs::metadata(path)
            .map(|m| m.file_attributes() & FILE_ATTRIBUTE_HIDDEN != 0)
            .unwrap_or(false)
    }

    #[cfg(not(windows))]
    {
        path.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with('.') && n != "." && n != "..")
    }
}

pub fn write_all_text(path: impl AsRef<Path>, content: &str) -> io::Result<()> {
    fs::write(path, content)
}

pub fn write_all_lines<I, S>(path: impl AsRef<Path>, lines: I) -> io::Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    fs::write(path, join_lines(lines))
}

pub fn write_all_bytes(path: impl AsRef<Path>, bytes: &[u8]) -> io::Result<()> {
    fs::write(path, bytes)
}

pub fn append_text(path: impl AsRef<Path>, content: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(content.as_bytes())?;
    file.flush()
}

pub fn append_lines<I, S>(path: impl AsRef<Path>, lines: I) -> io::Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    append_text(path, &join_lines(lines))
}

fn join_lines<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines.into_iter().fold(String::new(), |mut acc, line| {
        acc.push_str(line.as_ref());
        acc.push('\n');
        acc
    })
}

/// Returns whether a file was removed
pub fn delete_file(path: impl AsRef<Path>) -> io::Result<bool> {
    let path = path.as_ref();
    if !path.is_file() {
        return Ok(false);
    }
    fs::remove_file(path)?;
    Ok(true)
}

/// Returns whether a file was copied; a missing source copies nothing
pub fn copy_file(source: impl AsRef<Path>, dest: impl AsRef<Path>, overwrite: bool) -> io::Result<bool> {
    let (source, dest) = (source.as_ref(), dest.as_ref());
    if !source.is_file() {
        return Ok(false);
    }
    if dest.exists() && !overwrite {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} already exists", dest.display()),
        ));
    }
    fs::copy(source, dest)?;
    Ok(true)
}

/// Returns whether a file was moved; a missing source moves nothing
pub fn move_file(source: impl AsRef<Path>, dest: impl AsRef<Path>, overwrite: bool) -> io::Result<bool> {
    let (source, dest) = (source.as_ref(), dest.as_ref());
    if !source.is_file() {
        return Ok(false);
    }
    if dest.exists() {
        if !overwrite {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} already exists", dest.display()),
            ));
        }
        fs::remove_file(dest)?;
    }
    if fs::rename(source, dest).is_err() {
        // Cross-device moves
        fs::copy(source, dest)?;
        fs::remove_file(source)?;
    }
    Ok(true)
}

pub fn set_read_only(path: impl AsRef<Path>) -> io::Result<()> {
    change_read_only(path.as_ref(), true)
}

pub fn unset_read_only(path: impl AsRef<Path>) -> io::Result<()> {
    change_read_only(path.as_ref(), false)
}

fn change_read_only(path: &Path, read_only: bool) -> io::Result<()> {
    if !path.exists() {
        return Ok(());
    }
    let mut permissions = fs::metadata(path)?.permissions();
    #[allow(clippy::permissions_set_readonly_false)]
    permissions.set_readonly(read_only);
    fs::set_permissions(path, permissions)
}

pub fn is_absolute_path(path: &str) -> bool {
    !path.is_empty() && Path::new(path).is_absolute()
}

pub fn is_relative_path(path: &str) -> bool {
    !path.is_empty() && !Path::new(path).is_absolute()
}

/// Extension including the leading dot, e.g. `.txt`
pub fn get_extension(path: &str) -> String {
    Path::new(path)
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default()
}

pub fn get_file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

pub fn get_file_stem(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

pub fn get_directory_name(path: &str) -> String {
    Path::new(path)
        .parent()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default()
}

pub fn get_parent_directory(path: &str) -> String {
    get_directory_name(path)
}

/// `/` on Unix, `C:\` or `\\server\share\` on Windows; empty for relative paths
pub fn get_path_root(path: &str) -> String {
    let mut root = PathBuf::new();
    for component in Path::new(path).components() {
        match component {
            Component::Prefix(_) | Component::RootDir => root.push(component.as_os_str()),
            _ => break,
        }
    }
    root.to_string_lossy().into_owned()
}

/// Joins segments; an absolute segment replaces everything before it
pub fn combine_paths(segments: &[&str]) -> String {
    segments
        .iter()
        .filter(|s| !s.is_empty())
        .fold(PathBuf::new(), |acc, s| acc.join(s))
        .to_string_lossy()
        .into_owned()
}

/// Absolute, lexically normalized form of `path`
pub fn full_path(path: &str) -> String {
    absolute(path).to_string_lossy().into_owned()
}

fn absolute(path: &str) -> PathBuf {
    let path = Path::new(path);
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };
    lexical_normalize(&joined)
}

fn lexical_normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    normalized.push(component.as_os_str());
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Replace the extension; a leading dot in `extension` is optional
pub fn change_extension(path: &str, extension: &str) -> String {
    Path::new(path)
        .with_extension(extension.trim_start_matches('.'))
        .to_string_lossy()
        .into_owned()
}

pub fn has_invalid_path_chars(path: &str) -> bool {
    path.chars().any(|c| {
        c == '\0' || (cfg!(windows) && (c == '|' || (c as u32) < 32))
    })
}

pub fn file_name_has_invalid_chars(name: &str) -> bool {
    name.chars().any(|c| {
        if cfg!(windows) {
            (c as u32) < 32 || "<>:\"/\\|?*".contains(c)
        } else {
            c == '\0' || c == '/'
        }
    })
}

pub fn directory_separator() -> char {
    MAIN_SEPARATOR
}

pub fn alt_directory_separator() -> char {
    '/'
}

pub fn volume_separator() -> char {
    if cfg!(windows) {
        ':'
    } else {
        '/'
    }
}

/// `\\server\share` style path
pub fn is_unc_path(path: &str) -> bool {
    path.len() > 2 && path.starts_with(r"\\")
}

/// Non-empty segments split on either separator
pub fn split_directories(path: &str) -> Vec<String> {
    path.split(['/', '\\'])
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn is_root_directory(path: &str) -> bool {
    if path.is_empty() {
        return false;
    }
    let root = get_path_root(path);
    !root.is_empty()
        && path
            .trim_end_matches(['/', '\\'])
            .eq_ignore_ascii_case(root.trim_end_matches(['/', '\\']))
}

/// Absolute path with `.` and `..` resolved and trailing separators removed
pub fn normalize_path(path: &str) -> String {
    if path.is_empty() {
        return String::new();
    }
    let normalized = full_path(path);
    if is_root_directory(&normalized) {
        return normalized;
    }
    normalized.trim_end_matches(['/', '\\']).to_string()
}

/// `path` expressed relative to `base`; `.` when they are the same
pub fn relative_path(path: &str, base: &str) -> String {
    if path.is_empty() || base.is_empty() {
        return path.to_string();
    }
    let target = absolute(path);
    let base = absolute(base);

    let target_parts: Vec<_> = target.components().collect();
    let base_parts: Vec<_> = base.components().collect();
    let common = target_parts
        .iter()
        .zip(&base_parts)
        .take_while(|(a, b)| a == b)
        .count();
    if common == 0 {
        return target.to_string_lossy().into_owned();
    }

    let mut relative = PathBuf::new();
    for _ in common..base_parts.len() {
        relative.push("..");
    }
    for part in &target_parts[common..] {
        relative.push(part.as_os_str());
    }
    if relative.as_os_str().is_empty() {
        ".".to_string()
    } else {
        relative.to_string_lossy().into_owned()
    }
}

pub fn is_file(path: &str) -> bool {
    !path.is_empty() && Path::new(path).is_file()
}

pub fn is_directory(path: &str) -> bool {
    !path.is_empty() && Path::new(path).is_dir()
}

pub fn exists_path(path: &str) -> bool {
    !path.is_empty() && Path::new(path).exists()
}

/// Create an empty, uniquely named file in the temp directory
pub fn temp_file_path() -> io::Result<PathBuf> {
    let path = std::env::temp_dir().join(format!("tmp{}.tmp", uuid::Uuid::new_v4().simple()));
    File::create(&path)?;
    Ok(path)
}

pub fn temp_directory() -> PathBuf {
    std::env::temp_dir()
}

fn walk(dir: &Path, pattern: &str, recursive: bool, want_dirs: bool) -> Vec<PathBuf> {
    if !dir.is_dir() {
        return Vec::new();
    }
    let matcher = match glob::Pattern::new(pattern) {
        Ok(m) => m,
        Err(e) => {
            warn!("Invalid search pattern '{}': {}", pattern, e);
            return Vec::new();
        }
    };

    let mut walker = WalkDir::new(dir).min_depth(1).sort_by_file_name();
    if !recursive {
        walker = walker.max_depth(1);
    }
    walker
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_dir() == want_dirs)
        .filter(|e| matcher.matches(&e.file_name().to_string_lossy()))
        .map(|e| e.into_path())
        .collect()
}

/// Files under `dir` whose name matches the glob `pattern`
pub fn files_safe(dir: impl AsRef<Path>, pattern: &str, recursive: bool) -> Vec<PathBuf> {
    walk(dir.as_ref(), pattern, recursive, false)
}

/// Sub-directories under `dir` whose name matches the glob `pattern`
pub fn directories_safe(dir: impl AsRef<Path>, pattern: &str, recursive: bool) -> Vec<PathBuf> {
    walk(dir.as_ref(), pattern, recursive, true)
}

pub fn file_paths(dir: impl AsRef<Path>, pattern: &str, recursive: bool) -> Vec<String> {
    files_safe(dir, pattern, recursive)
        .into_iter()
        .map(|p| p.to_string_lossy().into_owned())
        .collect()
}

pub fn directory_paths(dir: impl AsRef<Path>, pattern: &str, recursive: bool) -> Vec<String> {
    directories_safe(dir, pattern, recursive)
        .into_iter()
        .map(|p| p.to_string_lossy().into_owned())
        .collect()
}

pub fn create_safe(dir: impl AsRef<Path>) -> io::Result<()> {
    fs::create_dir_all(dir)
}

/// Missing directories are a no-op; a non-empty directory needs `recursive`
pub fn delete_safe(dir: impl AsRef<Path>, recursive: bool) -> io::Result<()> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Ok(());
    }
    if recursive {
        fs::remove_dir_all(dir)
    } else {
        fs::remove_dir(dir)
    }
}

pub fn move_dir(source: impl AsRef<Path>, dest: impl AsRef<Path>) -> io::Result<()> {
    let source = source.as_ref();
    if !source.is_dir() {
        return Ok(());
    }
    fs::rename(source, dest)
}
