//! Naming of automatic copies: `a.txt` becomes `a (1).txt`, `a (2).txt`
//! and so on. A name that already carries a `(n)` marker gets it replaced,
//! so copying `a (7).txt` yields `a (1).txt` rather than `a (7) (1).txt`.

use std::path::is_separator;

/// Splits a file name at its first dot. A leading dot is part of the base.
pub fn split_name(name: &str) -> (&str, Option<&str>) {
    let skip = usize::from(name.starts_with('.'));
    match name[skip..].find('.') {
        Some(idx) => (&name[..skip + idx], Some(&name[skip + idx + 1..])),
        None => (name, None),
    }
}

/// `base` without its trailing `(digits)` marker, if it has one.
fn strip_copy_marker(base: &str) -> Option<&str> {
    let inner = base.strip_suffix(')')?;
    let open = inner.rfind('(')?;
    let digits = &inner[open + 1..];

    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        Some(&base[..open])
    } else {
        None
    }
}

/// The `index`-th derived name for `name`.
pub fn candidate(name: &str, index: u32) -> String {
    let (base, ext) = split_name(name);

    let stem = match strip_copy_marker(base) {
        Some(stem) => format!("{}({})", stem, index),
        None => format!("{} ({})", base, index),
    };

    match ext {
        Some(ext) => format!("{}.{}", stem, ext),
        None => stem,
    }
}

/// First name in the series starting at `source` for which `taken` is
/// false. `source` itself is returned when it is free. Any directory
/// part of `source` is kept and only the file name is derived.
pub fn unique_name(source: &str, taken: impl Fn(&str) -> bool) -> String {
    let (dir_part, file_name) = match source.rfind(is_separator) {
        Some(idx) => source.split_at(idx + 1),
        None => ("", source),
    };

    let mut chosen = source.to_string();
    let mut index = 1;
    while taken(&chosen) {
        chosen = format!("{}{}", dir_part, candidate(file_name, index));
        index += 1;
    }
    chosen
}
