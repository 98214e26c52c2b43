//! Process exit codes, sysexits.h values

/// Page rendered or command completed
pub const OK: i32 = 0;

/// Bad arguments, or refusing to overwrite an existing config
pub const USAGE: i32 = 64;

/// Output directory or site file could not be written
pub const CANTCREAT: i32 = 73;

/// Terminal output failed
pub const IOERR: i32 = 74;

/// Settings unreadable, or rejected as page input
pub const CONFIG: i32 = 78;
