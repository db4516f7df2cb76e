//! htpasswd line format constants.

/// Separator between user and hash in an htpasswd line.
pub const FIELD_SEPARATOR: char = ':';

/// Separator between user and password in a `user=password` argument.
pub const PAIR_SEPARATOR: char = '=';

/// Separator between htpasswd lines in the Secret payload.
pub const LINE_SEPARATOR: &str = "\n";
