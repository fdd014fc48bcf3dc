// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Library data model.

pub mod collection;
pub mod library;
pub mod shared;
pub mod space;
