// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Cross-crate scenario specs for the trellis workspace.
//!
//! The test files under `roadmap/` are wired into the crates they
//! exercise via `[[test]]` entries in those crates' manifests, so each
//! file runs against its crate's public API with that crate's
//! dependencies available.
