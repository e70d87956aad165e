//! Size-tiered read/write buffer selection.

/// Breakpoints pairing a maximum file size with the buffer used up to it.
///
/// The table must stay sorted by size and monotonic in buffer size:
/// small files get small buffers (no wasted memory), large files get
/// large buffers (fewer syscalls per read).
const TIERS: [(u64, usize); 3] = [
    (64 * 1024, 4 * 1024),
    (1024 * 1024, 16 * 1024),
    (16 * 1024 * 1024, 32 * 1024),
];

/// Buffer used for files beyond the largest breakpoint.
const LARGE_FILE_BUFFER: usize = 64 * 1024;

/// Picks a read/write buffer size for a file of `file_len` bytes.
///
/// Callers writing a file that does not exist yet should pass `0`, which
/// selects the smallest tier.
#[must_use]
pub fn buffer_size_for(file_len: u64) -> usize {
    for (limit, size) in TIERS {
        if file_len <= limit {
            return size;
        }
    }
    LARGE_FILE_BUFFER
}
