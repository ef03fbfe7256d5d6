// Copyright 2026 Cashmap Contributors
// SPDX-License-Identifier: Apache-2.0

//! Cashmap library: branch extraction pipeline, renderer abstraction, and
//! the HTTP front end.

pub mod client;
pub mod config;
pub mod error;
pub mod extract;
pub mod renderer;
pub mod rest;
pub mod types;
