//! `NFSv3` status codes (RFC 1813, `nfsstat3`).

use serde::{Deserialize, Serialize};

/// Status values carried in `NFSv3` replies.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NfsStatus {
    /// Call completed successfully.
    Ok = 0,
    /// Not owner.
    Perm = 1,
    /// No such file or directory.
    NoEnt = 2,
    /// Hard I/O error.
    Io = 5,
    /// No such device or address.
    Nxio = 6,
    /// Permission denied.
    Access = 13,
    /// File exists.
    Exist = 17,
    /// Cross-device hard link.
    Xdev = 18,
    /// No such device.
    NoDev = 19,
    /// Not a directory.
    NotDir = 20,
    /// Is a directory.
    IsDir = 21,
    /// Invalid argument.
    Inval = 22,
    /// File too large.
    FBig = 27,
    /// No space left on device.
    NoSpc = 28,
    /// Read-only filesystem.
    RoFs = 30,
    /// Too many hard links.
    MLink = 31,
    /// Filename too long.
    NameTooLong = 63,
    /// Directory not empty.
    NotEmpty = 66,
    /// Quota exceeded.
    DQuot = 69,
    /// The file handle no longer refers to a live object.
    Stale = 70,
    /// Too many levels of remote in path.
    Remote = 71,
    /// Illegal NFS file handle.
    BadHandle = 10001,
    /// Update synchronization mismatch.
    NotSync = 10002,
    /// READDIR or READDIRPLUS cookie is stale.
    BadCookie = 10003,
    /// Operation is not supported.
    NotSupp = 10004,
    /// Buffer or request is too small.
    TooSmall = 10005,
    /// Server error that does not map to any other status.
    ServerFault = 10006,
    /// Type not supported by the server.
    BadType = 10007,
    /// Request could not be completed in time, retry later.
    Jukebox = 10008,
}

impl NfsStatus {
    /// Numeric code as sent on the wire.
    #[must_use]
    pub fn code(self) -> u32 {
        self as u32
    }

    /// True for [`NfsStatus::Ok`].
    #[must_use]
    pub fn is_ok(self) -> bool {
        self == Self::Ok
    }
}

impl From<NfsStatus> for u32 {
    fn from(val: NfsStatus) -> u32 {
        val.code()
    }
}

impl std::fmt::Display for NfsStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?} ({})", self.code())
    }
}
