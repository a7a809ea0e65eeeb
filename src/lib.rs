// envdesk: Environment Desk for the Chatbot Builder stack
//
// SPDX-FileCopyrightText: 2026 Envdesk Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                            show / set / export / check
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |   TOML, layered settings  |
//!              '--+--------+--------+------'
//!                 |        |        |
//!                 v        v        v
//!              store    export    health
//!           .env lines  CSV/PDF   HTTP/TCP
//!               |
//!          +----+----+
//!          v         v
//!       catalog    mask
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging, utility   |
//!   +-----------------------------------------+
//! ```

pub mod catalog;
pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod export;
pub mod health;
pub mod logging;
pub mod store;
pub mod utility;
