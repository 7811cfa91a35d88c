//! Unit tests mirroring the `src/` layout file by file
