// Copyright (C) 2024-2026 the pkl-rs contributors.
// This file is part of the pkl-rs library.

// The pkl-rs library is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// The pkl-rs library is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with the pkl-rs library. If not, see <https://www.gnu.org/licenses/>.

//! The error catalog of the pkl-rs front-end.
//!
//! Every diagnostic the lexer or parser can raise is declared here through
//! the [`create_messages!`] macro, which gives each message a stable code,
//! a typed constructor, and a formatted rendering.

#![forbid(unsafe_code)]

/// Contains the common functionality for defining errors.
#[macro_use]
pub mod common;
pub use self::common::*;

/// Contains the error types for the pkl-rs front-end.
pub mod errors;
pub use self::errors::*;
