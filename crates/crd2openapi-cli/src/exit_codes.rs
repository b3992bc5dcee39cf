//! Standard exit codes for CLI operations
//!
//! These exit codes follow Unix conventions and sysexits.h where applicable.

#![allow(dead_code)]

/// Success - conversion completed without errors
pub const SUCCESS: i32 = 0;

/// General error - unspecified failure
pub const ERROR: i32 = 1;

/// Parse error - the input is not a CRD in any supported format
pub const PARSE_ERROR: i32 = 2;

/// Version error - no versions declared or requested version unknown
pub const VERSION_ERROR: i32 = 3;

/// Build error - the schema builder rejected the CRD
pub const BUILD_ERROR: i32 = 4;

/// IO error - reading stdin or writing stdout failed
pub const IO_ERROR: i32 = 5;

/// Usage error - invalid arguments or options (following sysexits.h convention)
pub const USAGE_ERROR: i32 = 64;
