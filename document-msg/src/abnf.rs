pub const COLON: char = ':';
pub const SP: char = ' ';
// Fixed line terminator, shared by encode and decode.
pub const EOL: &str = "\n";
pub const HTTP_PREFIX: &str = "HTTP/";
pub const HOST: &str = "Host";
