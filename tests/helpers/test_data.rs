//! Sample bundle texts shared by the integration tests

/// Default bundle with comments, blank lines and padding
pub const DEFAULT_MESSAGES: &str = "\
# Default messages
app.title = Data Integration

app.greeting=Welcome, {0}!
   # indented comment
this line has no separator
app.footer =  Powered by Rust  \r\n";

/// Bundle with a redefined key
pub const DUPLICATE_KEYS: &str = "color=red\ncolor=blue\n";

/// Bundle shipped in a shared common location
pub const COMMON_MESSAGES: &str = "ok=OK\ncancel=Cancel\n";
