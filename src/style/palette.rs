//! Named colour palette and fixed SGR codes.

/// SGR reset sequence, appended to every styled span.
pub const RESET: &str = "\x1b[0m";

/// SGR attribute codes.
pub mod attr {
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const ITALIC: &str = "\x1b[3m";
    pub const UNDERLINE: &str = "\x1b[4m";
    pub const BLINK: &str = "\x1b[5m";
    pub const INVERSE: &str = "\x1b[7m";
    pub const STRIKETHROUGH: &str = "\x1b[9m";
}

/// Palette entries: canonical name, foreground code, background code.
const PALETTE: &[(&str, &str, &str)] = &[
    ("black", "\x1b[30m", "\x1b[40m"),
    ("red", "\x1b[31m", "\x1b[41m"),
    ("green", "\x1b[32m", "\x1b[42m"),
    ("yellow", "\x1b[33m", "\x1b[43m"),
    ("blue", "\x1b[34m", "\x1b[44m"),
    ("magenta", "\x1b[35m", "\x1b[45m"),
    ("cyan", "\x1b[36m", "\x1b[46m"),
    ("white", "\x1b[37m", "\x1b[47m"),
    ("gray", "\x1b[90m", "\x1b[100m"),
    ("brightred", "\x1b[91m", "\x1b[101m"),
    ("brightgreen", "\x1b[92m", "\x1b[102m"),
    ("brightyellow", "\x1b[93m", "\x1b[103m"),
    ("brightblue", "\x1b[94m", "\x1b[104m"),
    ("brightmagenta", "\x1b[95m", "\x1b[105m"),
    ("brightcyan", "\x1b[96m", "\x1b[106m"),
    ("brightwhite", "\x1b[97m", "\x1b[107m"),
];

/// Foreground code for a palette name.
///
/// Lookup ignores case, `_` and `-`, so `brightRed`, `bright_red` and
/// `bright-red` all resolve. `grey` is accepted as an alias of `gray`.
pub fn foreground(name: &str) -> Option<&'static str> {
    lookup(name).map(|(_, fg, _)| *fg)
}

/// Background code for a palette name.
pub fn background(name: &str) -> Option<&'static str> {
    lookup(name).map(|(_, _, bg)| *bg)
}

/// Whether `name` is a known palette entry.
pub fn is_known(name: &str) -> bool {
    lookup(name).is_some()
}

fn lookup(name: &str) -> Option<&'static (&'static str, &'static str, &'static str)> {
    let key: String = name
        .chars()
        .filter(|c| *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect();
    let key = if key == "grey" { "gray".to_string() } else { key };
    PALETTE.iter().find(|(canonical, _, _)| *canonical == key)
}
