/// Error codes with category prefix
///
/// Categories:
/// - VAL: Remote url / target validation errors
/// - CFG: Configuration reading/parsing
/// - GIT: Repository discovery and libgit2 failures
/// - EXT: External tools (review tool, browser)
/// - IO: File system operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Validation errors (VAL001-VAL099)
    /// Remote url matches no known host
    Val001,
    /// Target could not be classified
    Val002,
    /// Object kind not supported by the host
    Val003,

    // Config errors (CFG001-CFG099)
    /// Config file missing or unreadable
    Cfg001,
    /// Invalid config format
    Cfg002,
    /// Missing required key
    Cfg003,

    // Git errors (GIT001-GIT099)
    /// Repository not found
    Git001,
    /// libgit2 failure
    Git002,

    // External tool errors (EXT001-EXT099)
    /// Review tool failed
    Ext001,
    /// Browser could not be launched
    Ext002,

    // I/O errors (IO001-IO099)
    /// Generic I/O failure
    Io001,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "CFG001")
    pub fn as_str(&self) -> &'static str {
        match self {
            // Validation
            ErrorCode::Val001 => "VAL001",
            ErrorCode::Val002 => "VAL002",
            ErrorCode::Val003 => "VAL003",
            // Config
            ErrorCode::Cfg001 => "CFG001",
            ErrorCode::Cfg002 => "CFG002",
            ErrorCode::Cfg003 => "CFG003",
            // Git
            ErrorCode::Git001 => "GIT001",
            ErrorCode::Git002 => "GIT002",
            // External
            ErrorCode::Ext001 => "EXT001",
            ErrorCode::Ext002 => "EXT002",
            // I/O
            ErrorCode::Io001 => "IO001",
        }
    }

    /// Returns the general cause description
    pub fn cause(&self) -> &'static str {
        match self {
            // Validation
            ErrorCode::Val001 => "The remote url does not match any supported hosting provider",
            ErrorCode::Val002 => "The target is neither a path in the repository, a revision, nor a review id",
            ErrorCode::Val003 => "The selected host has no page for this kind of object",
            // Config
            ErrorCode::Cfg001 => "A required configuration file is missing or unreadable",
            ErrorCode::Cfg002 => "The configuration file has an invalid format",
            ErrorCode::Cfg003 => "A required configuration key is missing",
            // Git
            ErrorCode::Git001 => "No git repository was found from the search path",
            ErrorCode::Git002 => "The git repository could not be read",
            // External
            ErrorCode::Ext001 => "The external review tool (arc) failed",
            ErrorCode::Ext002 => "The default browser could not be launched",
            // I/O
            ErrorCode::Io001 => "A file system operation failed",
        }
    }

    /// Returns remediation steps
    pub fn remediation(&self) -> &'static str {
        match self {
            // Validation
            ErrorCode::Val001 => "1. Check `git remote get-url origin`\n2. Supported hosts: github.com, gitlab.com, bitbucket.org, gitolite\n3. For https remotes on an internal host, add the host to `internal_hosts` in ~/.git-browse/config.json\n4. Report the url format if it should be supported",
            ErrorCode::Val002 => "1. Check the path for typos\n2. Paths are relative to the current directory or --path\n3. Run `git fetch` if the revision is remote-only",
            ErrorCode::Val003 => "1. Browse a directory or the repository root instead\n2. Drop --godocs/--sourcegraph to use the primary host",
            // Config
            ErrorCode::Cfg001 => "1. Verify the file exists at the shown path\n2. Check the file permissions",
            ErrorCode::Cfg002 => "1. Check the configuration file syntax\n2. Validate the JSON with a linter",
            ErrorCode::Cfg003 => "1. Add the missing key to the configuration file\n2. Compare with a working repository's configuration",
            // Git
            ErrorCode::Git001 => "1. Run the command inside a git working copy\n2. Pass --path pointing into a repository",
            ErrorCode::Git002 => "1. Run `git status` to check the repository\n2. Re-run with --verbose for details",
            // External
            ErrorCode::Ext001 => "1. Check that `arc` is installed and on PATH\n2. Run `arc browse` manually to see its output",
            ErrorCode::Ext002 => "1. Use --dry-run to only print the url\n2. Use --copy to copy the url to the clipboard",
            // I/O
            ErrorCode::Io001 => "1. Verify the path is correct\n2. Check file/directory permissions",
        }
    }
}
